use serde::Serialize;

use crate::chart::{ChartKind, ChartSpec};
use crate::data::model::{AttrValue, PurchaseDataset, Record};
use crate::data::schema;

// ---------------------------------------------------------------------------
// View enumeration
// ---------------------------------------------------------------------------

/// The fixed set of aggregate views, in dashboard display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewKind {
    /// (Purchase Amount, Frequency of Purchases, Gender) triples, unreduced.
    CustomerSegmentation,
    /// Category × summed Purchase Amount, descending.
    TopCategories,
    /// Purchase Amount histogram, 30 bins.
    CustomerLifetimeValue,
    /// Five-number summary of Purchase Amount per Discount Applied group.
    PurchaseAmountByDiscount,
    /// Shipping Type × mean Purchase Amount.
    AvgPurchaseByShipping,
    /// Review Rating histogram, 10 bins.
    ReviewRatingDistribution,
    /// Payment Method × summed Purchase Amount, descending.
    TopPaymentMethods,
    /// (Season, Category) × summed Purchase Amount, descending.
    TopCategoriesBySeason,
    /// Review Rating × mean Purchase Amount.
    AvgPurchaseByReviewRating,
}

impl ViewKind {
    pub const ALL: [ViewKind; 9] = [
        ViewKind::CustomerSegmentation,
        ViewKind::TopCategories,
        ViewKind::CustomerLifetimeValue,
        ViewKind::PurchaseAmountByDiscount,
        ViewKind::AvgPurchaseByShipping,
        ViewKind::ReviewRatingDistribution,
        ViewKind::TopPaymentMethods,
        ViewKind::TopCategoriesBySeason,
        ViewKind::AvgPurchaseByReviewRating,
    ];

    /// Chart kind and axis bindings for the charting collaborator.
    pub fn chart_spec(self) -> ChartSpec {
        match self {
            ViewKind::CustomerSegmentation => ChartSpec {
                kind: ChartKind::Scatter,
                title: "Customer Segmentation Analysis",
                x_label: "Purchase Amount",
                y_label: "Frequency of Purchases",
                color_by: Some(schema::GENDER),
            },
            ViewKind::TopCategories => ChartSpec {
                kind: ChartKind::HorizontalBar,
                title: "Top Categories by Purchase Amount",
                x_label: "Total Purchase Amount",
                y_label: "Category",
                color_by: Some(schema::CATEGORY),
            },
            ViewKind::CustomerLifetimeValue => ChartSpec {
                kind: ChartKind::Histogram,
                title: "Customer Lifetime Value (CLV)",
                x_label: "Purchase Amount",
                y_label: "Count",
                color_by: None,
            },
            ViewKind::PurchaseAmountByDiscount => ChartSpec {
                kind: ChartKind::Box,
                title: "Purchase Amount by Discount Applied",
                x_label: "Discount Applied",
                y_label: "Purchase Amount",
                color_by: None,
            },
            ViewKind::AvgPurchaseByShipping => ChartSpec {
                kind: ChartKind::Bar,
                title: "Average Purchase Amount by Shipping Type",
                x_label: "Shipping Type",
                y_label: "Average Purchase Amount",
                color_by: None,
            },
            ViewKind::ReviewRatingDistribution => ChartSpec {
                kind: ChartKind::Histogram,
                title: "Distribution of Review Ratings",
                x_label: "Review Rating",
                y_label: "Count",
                color_by: None,
            },
            ViewKind::TopPaymentMethods => ChartSpec {
                kind: ChartKind::HorizontalBar,
                title: "Top Payment Methods by Purchase Amount",
                x_label: "Total Purchase Amount",
                y_label: "Payment Method",
                color_by: Some(schema::PAYMENT_METHOD),
            },
            ViewKind::TopCategoriesBySeason => ChartSpec {
                kind: ChartKind::HorizontalBar,
                title: "Top Categories by Season",
                x_label: "Total Purchase Amount",
                y_label: "Category",
                color_by: Some(schema::SEASON),
            },
            ViewKind::AvgPurchaseByReviewRating => ChartSpec {
                kind: ChartKind::Bar,
                title: "Average Purchase Amount by Review Rating",
                x_label: "Review Rating",
                y_label: "Average Purchase Amount",
                color_by: None,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// View output tables
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRow {
    /// Group key, one value per key column.
    pub keys: Vec<AttrValue>,
    pub value: f64,
}

/// One or two key columns reduced to a single numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedTable {
    pub key_columns: Vec<&'static str>,
    pub value_column: &'static str,
    pub rows: Vec<GroupRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Equal-width bins over the observed min/max of the filtered values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramTable {
    pub column: &'static str,
    pub bins: Vec<HistogramBin>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub amount: f64,
    pub frequency: String,
    pub gender: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTable {
    pub points: Vec<ScatterPoint>,
}

/// Five-number summary of one group, for box plots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxGroup {
    pub key: AttrValue,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxTable {
    pub key_column: &'static str,
    pub value_column: &'static str,
    pub groups: Vec<BoxGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ViewData {
    Grouped(GroupedTable),
    Histogram(HistogramTable),
    Scatter(ScatterTable),
    Box(BoxTable),
}

/// A computed view plus the metadata the charting collaborator needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateView {
    pub kind: ViewKind,
    pub chart: ChartSpec,
    pub data: ViewData,
}

/// Result of one `compute` pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ViewOutput {
    /// Nothing to chart for the current selection; the caller renders a
    /// placeholder instead.
    NoData,
    Chart(AggregateView),
}

impl ViewOutput {
    pub fn is_no_data(&self) -> bool {
        matches!(self, ViewOutput::NoData)
    }
}

// ---------------------------------------------------------------------------
// View computation
// ---------------------------------------------------------------------------

/// Compute one view over the filtered subset given as row indices.
///
/// Pure: the dataset is never mutated and identical inputs produce identical
/// output, including tie-break order. Rows whose aggregated attribute has no
/// numeric reading are excluded from the view only; when nothing remains
/// (or `rows` is empty) the result is [`ViewOutput::NoData`].
pub fn compute(dataset: &PurchaseDataset, rows: &[usize], kind: ViewKind) -> ViewOutput {
    if rows.is_empty() {
        return ViewOutput::NoData;
    }

    let data = match kind {
        ViewKind::CustomerSegmentation => scatter(dataset, rows),
        ViewKind::TopCategories => grouped_sum(dataset, rows, &[schema::CATEGORY]),
        ViewKind::CustomerLifetimeValue => histogram(dataset, rows, schema::PURCHASE_AMOUNT, 30),
        ViewKind::PurchaseAmountByDiscount => {
            box_summary(dataset, rows, schema::DISCOUNT_APPLIED)
        }
        ViewKind::AvgPurchaseByShipping => grouped_mean(dataset, rows, schema::SHIPPING_TYPE),
        ViewKind::ReviewRatingDistribution => {
            histogram(dataset, rows, schema::REVIEW_RATING, 10)
        }
        ViewKind::TopPaymentMethods => grouped_sum(dataset, rows, &[schema::PAYMENT_METHOD]),
        ViewKind::TopCategoriesBySeason => {
            grouped_sum(dataset, rows, &[schema::SEASON, schema::CATEGORY])
        }
        ViewKind::AvgPurchaseByReviewRating => grouped_mean(dataset, rows, schema::REVIEW_RATING),
    };

    match data {
        Some(data) => ViewOutput::Chart(AggregateView {
            kind,
            chart: kind.chart_spec(),
            data,
        }),
        None => ViewOutput::NoData,
    }
}

/// Group key of a record: one value per key column, absent columns as Null.
fn key_of(rec: &Record, key_columns: &[&'static str]) -> Vec<AttrValue> {
    key_columns
        .iter()
        .map(|col| rec.get(col).cloned().unwrap_or(AttrValue::Null))
        .collect()
}

/// Accumulate (sum, count) of Purchase Amount per group key, in
/// first-encounter order. Group cardinality is tiny, so a linear key scan
/// keeps the order guarantee without an insertion-ordered map.
fn accumulate(
    dataset: &PurchaseDataset,
    rows: &[usize],
    key_columns: &[&'static str],
) -> Vec<(Vec<AttrValue>, f64, usize)> {
    let mut groups: Vec<(Vec<AttrValue>, f64, usize)> = Vec::new();
    for &i in rows {
        let rec = &dataset.records[i];
        let Some(amount) = rec.numeric(schema::PURCHASE_AMOUNT) else {
            continue;
        };
        let key = key_of(rec, key_columns);
        match groups.iter_mut().find(|(k, _, _)| *k == key) {
            Some((_, sum, n)) => {
                *sum += amount;
                *n += 1;
            }
            None => groups.push((key, amount, 1)),
        }
    }
    groups
}

/// Sum of Purchase Amount per group, sorted descending by the total.
/// The sort is stable, so ties keep encounter order.
fn grouped_sum(
    dataset: &PurchaseDataset,
    rows: &[usize],
    key_columns: &[&'static str],
) -> Option<ViewData> {
    let groups = accumulate(dataset, rows, key_columns);
    if groups.is_empty() {
        return None;
    }
    let mut table_rows: Vec<GroupRow> = groups
        .into_iter()
        .map(|(keys, sum, _)| GroupRow { keys, value: sum })
        .collect();
    table_rows.sort_by(|a, b| b.value.total_cmp(&a.value));

    Some(ViewData::Grouped(GroupedTable {
        key_columns: key_columns.to_vec(),
        value_column: "Total Purchase Amount",
        rows: table_rows,
    }))
}

/// Mean of Purchase Amount per group, in encounter order.
fn grouped_mean(
    dataset: &PurchaseDataset,
    rows: &[usize],
    key_column: &'static str,
) -> Option<ViewData> {
    let groups = accumulate(dataset, rows, &[key_column]);
    if groups.is_empty() {
        return None;
    }
    let table_rows = groups
        .into_iter()
        .map(|(keys, sum, n)| GroupRow {
            keys,
            value: sum / n as f64,
        })
        .collect();

    Some(ViewData::Grouped(GroupedTable {
        key_columns: vec![key_column],
        value_column: "Average Purchase Amount",
        rows: table_rows,
    }))
}

/// Bucket a numeric column into `nbins` equal-width bins over the observed
/// min/max. A value equal to the max lands in the last bin; a degenerate
/// range (min == max) puts every value in bin 0.
fn histogram(
    dataset: &PurchaseDataset,
    rows: &[usize],
    column: &'static str,
    nbins: usize,
) -> Option<ViewData> {
    let values: Vec<f64> = rows
        .iter()
        .filter_map(|&i| dataset.records[i].numeric(column))
        .collect();
    if values.is_empty() {
        return None;
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / nbins as f64;

    let mut counts = vec![0usize; nbins];
    for v in &values {
        let idx = if width > 0.0 {
            (((v - min) / width) as usize).min(nbins - 1)
        } else {
            0
        };
        counts[idx] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lo: min + i as f64 * width,
            hi: min + (i + 1) as f64 * width,
            count,
        })
        .collect();

    Some(ViewData::Histogram(HistogramTable { column, bins }))
}

/// Five-number summary of Purchase Amount per group, groups in encounter
/// order, for box plots.
fn box_summary(
    dataset: &PurchaseDataset,
    rows: &[usize],
    key_column: &'static str,
) -> Option<ViewData> {
    let mut groups: Vec<(AttrValue, Vec<f64>)> = Vec::new();
    for &i in rows {
        let rec = &dataset.records[i];
        let Some(amount) = rec.numeric(schema::PURCHASE_AMOUNT) else {
            continue;
        };
        let key = rec.get(key_column).cloned().unwrap_or(AttrValue::Null);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, vals)) => vals.push(amount),
            None => groups.push((key, vec![amount])),
        }
    }
    if groups.is_empty() {
        return None;
    }

    let summaries = groups
        .into_iter()
        .map(|(key, mut vals)| {
            vals.sort_by(f64::total_cmp);
            BoxGroup {
                key,
                min: vals[0],
                q1: percentile(&vals, 0.25),
                median: percentile(&vals, 0.5),
                q3: percentile(&vals, 0.75),
                max: vals[vals.len() - 1],
                count: vals.len(),
            }
        })
        .collect();

    Some(ViewData::Box(BoxTable {
        key_column,
        value_column: "Purchase Amount",
        groups: summaries,
    }))
}

/// Linear-interpolation percentile over sorted values.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

/// Pass (Purchase Amount, Frequency of Purchases, Gender) triples through
/// for direct plotting. Only a missing amount excludes a row: the x axis
/// must be numeric, the other two are categorical labels.
fn scatter(dataset: &PurchaseDataset, rows: &[usize]) -> Option<ViewData> {
    let points: Vec<ScatterPoint> = rows
        .iter()
        .filter_map(|&i| {
            let rec = &dataset.records[i];
            let amount = rec.numeric(schema::PURCHASE_AMOUNT)?;
            Some(ScatterPoint {
                amount,
                frequency: label(rec, schema::FREQUENCY_OF_PURCHASES),
                gender: label(rec, schema::GENDER),
            })
        })
        .collect();
    if points.is_empty() {
        return None;
    }
    Some(ViewData::Scatter(ScatterTable { points }))
}

fn label(rec: &Record, column: &str) -> String {
    rec.get(column).cloned().unwrap_or(AttrValue::Null).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;
    use std::collections::BTreeMap;

    /// Build a record from (category, season, amount); amount `None` means a
    /// missing Purchase Amount cell.
    fn purchase(category: &str, season: &str, amount: Option<f64>) -> Record {
        let mut values = BTreeMap::new();
        values.insert(schema::GENDER.to_string(), AttrValue::String("Female".into()));
        values.insert(schema::CATEGORY.to_string(), AttrValue::String(category.into()));
        values.insert(schema::SEASON.to_string(), AttrValue::String(season.into()));
        values.insert(
            schema::SHIPPING_TYPE.to_string(),
            AttrValue::String("Express".into()),
        );
        values.insert(
            schema::DISCOUNT_APPLIED.to_string(),
            AttrValue::String("Yes".into()),
        );
        values.insert(schema::REVIEW_RATING.to_string(), AttrValue::Float(3.5));
        values.insert(
            schema::PAYMENT_METHOD.to_string(),
            AttrValue::String("Credit Card".into()),
        );
        values.insert(
            schema::FREQUENCY_OF_PURCHASES.to_string(),
            AttrValue::String("Weekly".into()),
        );
        values.insert(
            schema::PURCHASE_AMOUNT.to_string(),
            amount.map(AttrValue::Float).unwrap_or(AttrValue::Null),
        );
        Record::new(values)
    }

    fn all_rows(ds: &PurchaseDataset) -> Vec<usize> {
        (0..ds.len()).collect()
    }

    fn grouped(output: &ViewOutput) -> &GroupedTable {
        match output {
            ViewOutput::Chart(AggregateView {
                data: ViewData::Grouped(t),
                ..
            }) => t,
            other => panic!("expected grouped table, got {other:?}"),
        }
    }

    #[test]
    fn top_categories_sums_and_sorts_descending() {
        let ds = PurchaseDataset::from_records(vec![
            purchase("Shoes", "Spring", Some(50.0)),
            purchase("Shoes", "Spring", Some(30.0)),
            purchase("Hats", "Spring", Some(20.0)),
        ]);
        let out = compute(&ds, &all_rows(&ds), ViewKind::TopCategories);
        let table = grouped(&out);

        assert_eq!(table.key_columns, vec![schema::CATEGORY]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].keys, vec![AttrValue::String("Shoes".into())]);
        assert_eq!(table.rows[0].value, 80.0);
        assert_eq!(table.rows[1].keys, vec![AttrValue::String("Hats".into())]);
        assert_eq!(table.rows[1].value, 20.0);
    }

    #[test]
    fn descending_sort_breaks_ties_by_encounter_order() {
        let ds = PurchaseDataset::from_records(vec![
            purchase("Hats", "Spring", Some(40.0)),
            purchase("Scarves", "Spring", Some(40.0)),
            purchase("Shoes", "Spring", Some(40.0)),
        ]);
        let out = compute(&ds, &all_rows(&ds), ViewKind::TopCategories);
        let keys: Vec<_> = grouped(&out)
            .rows
            .iter()
            .map(|r| r.keys[0].to_string())
            .collect();
        assert_eq!(keys, vec!["Hats", "Scarves", "Shoes"]);
    }

    #[test]
    fn grouped_sums_conserve_total_mass() {
        let ds = PurchaseDataset::from_records(vec![
            purchase("Shoes", "Spring", Some(50.0)),
            purchase("Hats", "Summer", Some(30.0)),
            purchase("Shoes", "Fall", Some(25.5)),
            purchase("Scarves", "Winter", None),
            purchase("Hats", "Spring", Some(4.5)),
        ]);
        let rows = all_rows(&ds);
        let non_missing_total: f64 = rows
            .iter()
            .filter_map(|&i| ds.records[i].numeric(schema::PURCHASE_AMOUNT))
            .sum();

        for kind in [ViewKind::TopCategories, ViewKind::TopCategoriesBySeason] {
            let out = compute(&ds, &rows, kind);
            let table_total: f64 = grouped(&out).rows.iter().map(|r| r.value).sum();
            assert!((table_total - non_missing_total).abs() < 1e-9);
        }
    }

    #[test]
    fn season_category_view_groups_on_both_keys() {
        let ds = PurchaseDataset::from_records(vec![
            purchase("Shoes", "Spring", Some(10.0)),
            purchase("Shoes", "Winter", Some(70.0)),
            purchase("Shoes", "Spring", Some(15.0)),
        ]);
        let out = compute(&ds, &all_rows(&ds), ViewKind::TopCategoriesBySeason);
        let table = grouped(&out);

        assert_eq!(table.key_columns, vec![schema::SEASON, schema::CATEGORY]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.rows[0].keys,
            vec![
                AttrValue::String("Winter".into()),
                AttrValue::String("Shoes".into()),
            ]
        );
        assert_eq!(table.rows[0].value, 70.0);
        assert_eq!(table.rows[1].value, 25.0);
    }

    #[test]
    fn mean_view_averages_per_group_in_encounter_order() {
        let mut records = vec![
            purchase("Shoes", "Spring", Some(10.0)),
            purchase("Hats", "Spring", Some(30.0)),
        ];
        // Second shipping type appears later; it must come second.
        let mut other = purchase("Shoes", "Spring", Some(99.0));
        other.values.insert(
            schema::SHIPPING_TYPE.to_string(),
            AttrValue::String("Standard".into()),
        );
        records.push(other);

        let ds = PurchaseDataset::from_records(records);
        let out = compute(&ds, &all_rows(&ds), ViewKind::AvgPurchaseByShipping);
        let table = grouped(&out);

        assert_eq!(table.value_column, "Average Purchase Amount");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].keys, vec![AttrValue::String("Express".into())]);
        assert_eq!(table.rows[0].value, 20.0);
        assert_eq!(table.rows[1].keys, vec![AttrValue::String("Standard".into())]);
        assert_eq!(table.rows[1].value, 99.0);
    }

    #[test]
    fn histogram_counts_sum_to_non_missing_values() {
        let amounts = [5.0, 10.0, 20.0, 35.0, 80.0, 99.9];
        let mut records: Vec<Record> = amounts
            .iter()
            .map(|&a| purchase("Shoes", "Spring", Some(a)))
            .collect();
        records.push(purchase("Shoes", "Spring", None));

        let ds = PurchaseDataset::from_records(records);
        let out = compute(&ds, &all_rows(&ds), ViewKind::CustomerLifetimeValue);
        let ViewOutput::Chart(AggregateView {
            data: ViewData::Histogram(hist),
            ..
        }) = out
        else {
            panic!("expected histogram");
        };

        assert_eq!(hist.bins.len(), 30);
        let total: usize = hist.bins.iter().map(|b| b.count).sum();
        assert_eq!(total, amounts.len());
        // Max value lands in the last bin, not past it.
        assert!(hist.bins.last().unwrap().count >= 1);
    }

    #[test]
    fn histogram_degenerate_range_uses_first_bin() {
        let ds = PurchaseDataset::from_records(vec![
            purchase("Shoes", "Spring", Some(42.0)),
            purchase("Hats", "Spring", Some(42.0)),
        ]);
        let out = compute(&ds, &all_rows(&ds), ViewKind::CustomerLifetimeValue);
        let ViewOutput::Chart(AggregateView {
            data: ViewData::Histogram(hist),
            ..
        }) = out
        else {
            panic!("expected histogram");
        };

        assert_eq!(hist.bins[0].count, 2);
        assert_eq!(hist.bins.iter().map(|b| b.count).sum::<usize>(), 2);
    }

    #[test]
    fn review_rating_histogram_has_ten_bins() {
        let ds = PurchaseDataset::from_records(vec![
            purchase("Shoes", "Spring", Some(10.0)),
            purchase("Hats", "Spring", Some(20.0)),
        ]);
        let out = compute(&ds, &all_rows(&ds), ViewKind::ReviewRatingDistribution);
        let ViewOutput::Chart(AggregateView {
            data: ViewData::Histogram(hist),
            ..
        }) = out
        else {
            panic!("expected histogram");
        };
        assert_eq!(hist.column, schema::REVIEW_RATING);
        assert_eq!(hist.bins.len(), 10);
    }

    #[test]
    fn box_summary_orders_quartiles() {
        let mut records: Vec<Record> = [10.0, 20.0, 30.0, 40.0, 50.0]
            .iter()
            .map(|&a| purchase("Shoes", "Spring", Some(a)))
            .collect();
        let mut no_discount = purchase("Shoes", "Spring", Some(5.0));
        no_discount.values.insert(
            schema::DISCOUNT_APPLIED.to_string(),
            AttrValue::String("No".into()),
        );
        records.push(no_discount);

        let ds = PurchaseDataset::from_records(records);
        let out = compute(&ds, &all_rows(&ds), ViewKind::PurchaseAmountByDiscount);
        let ViewOutput::Chart(AggregateView {
            data: ViewData::Box(table),
            ..
        }) = out
        else {
            panic!("expected box table");
        };

        assert_eq!(table.groups.len(), 2);
        let yes = &table.groups[0];
        assert_eq!(yes.key, AttrValue::String("Yes".into()));
        assert_eq!(yes.count, 5);
        assert_eq!(yes.min, 10.0);
        assert_eq!(yes.q1, 20.0);
        assert_eq!(yes.median, 30.0);
        assert_eq!(yes.q3, 40.0);
        assert_eq!(yes.max, 50.0);

        let no = &table.groups[1];
        assert_eq!(no.count, 1);
        assert_eq!(no.min, 5.0);
        assert_eq!(no.max, 5.0);
        assert_eq!(no.median, 5.0);
    }

    #[test]
    fn scatter_passes_triples_through() {
        let ds = PurchaseDataset::from_records(vec![
            purchase("Shoes", "Spring", Some(49.99)),
            purchase("Hats", "Spring", None),
        ]);
        let out = compute(&ds, &all_rows(&ds), ViewKind::CustomerSegmentation);
        let ViewOutput::Chart(AggregateView {
            data: ViewData::Scatter(table),
            chart,
            ..
        }) = out
        else {
            panic!("expected scatter");
        };

        assert_eq!(chart.kind, ChartKind::Scatter);
        // The row with a missing amount cannot be plotted.
        assert_eq!(table.points.len(), 1);
        assert_eq!(table.points[0].amount, 49.99);
        assert_eq!(table.points[0].frequency, "Weekly");
        assert_eq!(table.points[0].gender, "Female");
    }

    #[test]
    fn empty_subset_yields_no_data_for_every_view() {
        let ds = PurchaseDataset::from_records(vec![purchase("Shoes", "Spring", Some(10.0))]);
        for kind in ViewKind::ALL {
            assert!(compute(&ds, &[], kind).is_no_data(), "{kind:?}");
        }
    }

    #[test]
    fn all_amounts_missing_yields_no_data_not_nan() {
        let ds = PurchaseDataset::from_records(vec![
            purchase("Shoes", "Spring", None),
            purchase("Hats", "Spring", None),
        ]);
        let rows = all_rows(&ds);
        // Every view aggregates Purchase Amount except the rating histogram.
        for kind in [
            ViewKind::CustomerSegmentation,
            ViewKind::TopCategories,
            ViewKind::CustomerLifetimeValue,
            ViewKind::PurchaseAmountByDiscount,
            ViewKind::AvgPurchaseByShipping,
            ViewKind::TopPaymentMethods,
            ViewKind::TopCategoriesBySeason,
            ViewKind::AvgPurchaseByReviewRating,
        ] {
            assert!(compute(&ds, &rows, kind).is_no_data(), "{kind:?}");
        }
        // Review ratings are present, so that view still has data.
        assert!(!compute(&ds, &rows, ViewKind::ReviewRatingDistribution).is_no_data());
    }

    #[test]
    fn compute_is_deterministic() {
        let ds = PurchaseDataset::from_records(vec![
            purchase("Shoes", "Spring", Some(50.0)),
            purchase("Hats", "Summer", Some(30.0)),
            purchase("Shoes", "Fall", Some(25.5)),
            purchase("Scarves", "Winter", None),
        ]);
        let rows = all_rows(&ds);
        for kind in ViewKind::ALL {
            assert_eq!(compute(&ds, &rows, kind), compute(&ds, &rows, kind));
        }
    }
}
