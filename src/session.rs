use std::sync::Arc;

use crate::data::filter::{filtered_indices, FilterSelection};
use crate::data::model::{AttrValue, PurchaseDataset};
use crate::views::{self, ViewKind, ViewOutput};

// ---------------------------------------------------------------------------
// Per-session exploration state
// ---------------------------------------------------------------------------

/// One user's exploration pass over the shared dataset.
///
/// The dataset is loaded once at startup and injected here immutably; each
/// session owns its own [`FilterSelection`] and the cached indices of records
/// passing it. Views are recomputed in full on demand — no incremental
/// maintenance, no view caching.
pub struct Session {
    dataset: Arc<PurchaseDataset>,

    /// Current per-attribute selections.
    selection: FilterSelection,

    /// Indices of records passing the current selection (cached).
    visible: Vec<usize>,
}

impl Session {
    pub fn new(dataset: Arc<PurchaseDataset>) -> Self {
        let visible = (0..dataset.len()).collect();
        Session {
            dataset,
            selection: FilterSelection::new(),
            visible,
        }
    }

    pub fn dataset(&self) -> &PurchaseDataset {
        &self.dataset
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Distinct observed values of an attribute, sorted, for populating a
    /// selection widget. The UI adds its own "no filter" entry on top.
    pub fn options(&self, attribute: &str) -> Vec<AttrValue> {
        self.dataset
            .distinct(attribute)
            .map(|vals| vals.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Constrain an attribute and refilter.
    pub fn select(&mut self, attribute: impl Into<String>, value: AttrValue) {
        self.selection.select(attribute, value);
        self.refilter();
    }

    /// Drop one attribute's constraint and refilter.
    pub fn clear(&mut self, attribute: &str) {
        self.selection.clear(attribute);
        self.refilter();
    }

    /// Drop all constraints.
    pub fn reset(&mut self) {
        self.selection = FilterSelection::new();
        self.refilter();
    }

    /// Recompute the visible indices after a selection change.
    fn refilter(&mut self) {
        self.visible = filtered_indices(&self.dataset, &self.selection);
        log::debug!(
            "{} of {} records pass the current selection",
            self.visible.len(),
            self.dataset.len()
        );
    }

    /// Indices of records passing the current selection, in source order.
    pub fn filtered_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    /// False means "no data for the selected filters": the caller shows a
    /// placeholder and skips chart rendering for the whole pass.
    pub fn has_data(&self) -> bool {
        !self.visible.is_empty()
    }

    /// Compute a single view for the current selection.
    pub fn view(&self, kind: ViewKind) -> ViewOutput {
        views::compute(&self.dataset, &self.visible, kind)
    }

    /// Compute every view, in dashboard display order.
    pub fn views(&self) -> Vec<(ViewKind, ViewOutput)> {
        ViewKind::ALL
            .iter()
            .map(|&kind| (kind, self.view(kind)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;
    use crate::data::schema;
    use std::collections::BTreeMap;

    fn purchase(gender: &str, category: &str, amount: f64) -> Record {
        let mut values = BTreeMap::new();
        values.insert(schema::GENDER.to_string(), AttrValue::String(gender.into()));
        values.insert(
            schema::CATEGORY.to_string(),
            AttrValue::String(category.into()),
        );
        values.insert(schema::AGE.to_string(), AttrValue::Integer(30));
        values.insert(
            schema::SHIPPING_TYPE.to_string(),
            AttrValue::String("Express".into()),
        );
        values.insert(
            schema::DISCOUNT_APPLIED.to_string(),
            AttrValue::String("No".into()),
        );
        values.insert(schema::SEASON.to_string(), AttrValue::String("Spring".into()));
        values.insert(schema::REVIEW_RATING.to_string(), AttrValue::Float(4.0));
        values.insert(
            schema::PAYMENT_METHOD.to_string(),
            AttrValue::String("Cash".into()),
        );
        values.insert(schema::PURCHASE_AMOUNT.to_string(), AttrValue::Float(amount));
        values.insert(
            schema::FREQUENCY_OF_PURCHASES.to_string(),
            AttrValue::String("Weekly".into()),
        );
        Record::new(values)
    }

    fn session() -> Session {
        Session::new(Arc::new(PurchaseDataset::from_records(vec![
            purchase("Female", "Clothing", 50.0),
            purchase("Female", "Footwear", 30.0),
            purchase("Female", "Clothing", 20.0),
            purchase("Male", "Clothing", 10.0),
            purchase("Male", "Outerwear", 5.0),
        ])))
    }

    #[test]
    fn new_session_sees_the_full_table() {
        let s = session();
        assert_eq!(s.filtered_len(), 5);
        assert!(s.has_data());
        assert!(s.selection().is_unconstrained());
    }

    #[test]
    fn gender_selection_narrows_to_matching_rows() {
        let mut s = session();
        s.select(schema::GENDER, AttrValue::String("Female".into()));
        assert_eq!(s.filtered_len(), 3);
        for &i in s.filtered_indices() {
            assert_eq!(
                s.dataset().records[i].get(schema::GENDER),
                Some(&AttrValue::String("Female".into()))
            );
        }
    }

    #[test]
    fn options_lists_distinct_observed_values() {
        let s = session();
        let genders = s.options(schema::GENDER);
        assert_eq!(
            genders,
            vec![
                AttrValue::String("Female".into()),
                AttrValue::String("Male".into()),
            ]
        );
        assert!(s.options("Not A Column").is_empty());
    }

    #[test]
    fn every_filter_attribute_has_widget_options() {
        let s = session();
        for attr in schema::FILTER_ATTRIBUTES {
            assert!(!s.options(attr).is_empty(), "{attr}");
        }
    }

    #[test]
    fn impossible_selection_reports_no_data() {
        let mut s = session();
        s.select(schema::GENDER, AttrValue::String("Male".into()));
        s.select(schema::CATEGORY, AttrValue::String("Footwear".into()));
        assert!(!s.has_data());
        for (kind, out) in s.views() {
            assert!(out.is_no_data(), "{kind:?}");
        }
    }

    #[test]
    fn clear_and_reset_restore_rows() {
        let mut s = session();
        s.select(schema::GENDER, AttrValue::String("Male".into()));
        s.select(schema::CATEGORY, AttrValue::String("Clothing".into()));
        assert_eq!(s.filtered_len(), 1);

        s.clear(schema::CATEGORY);
        assert_eq!(s.filtered_len(), 2);

        s.reset();
        assert_eq!(s.filtered_len(), 5);
    }

    #[test]
    fn views_come_back_in_dashboard_order() {
        let s = session();
        let kinds: Vec<ViewKind> = s.views().into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, ViewKind::ALL.to_vec());
    }
}
