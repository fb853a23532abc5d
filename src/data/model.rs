use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// AttrValue – a single cell of the purchase table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value.
/// Using `BTreeMap` / `BTreeSet` downstream so `AttrValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    String(String),
    Integer(i64),
    Float(f64),
    /// Missing cell (empty source field or failed numeric coercion).
    Null,
}

// -- Manual Eq/Ord so we can put AttrValue in BTreeSet --

impl Eq for AttrValue {}

impl PartialOrd for AttrValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AttrValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use AttrValue::*;
        fn discriminant(v: &AttrValue) -> u8 {
            match v {
                Null => 0,
                Integer(_) => 1,
                Float(_) => 2,
                String(_) => 3,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for AttrValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            AttrValue::String(s) => s.hash(state),
            AttrValue::Integer(i) => i.hash(state),
            AttrValue::Float(f) => f.to_bits().hash(state),
            AttrValue::Null => {}
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::String(s) => write!(f, "{s}"),
            AttrValue::Integer(i) => write!(f, "{i}"),
            AttrValue::Float(v) => write!(f, "{v}"),
            AttrValue::Null => write!(f, "<null>"),
        }
    }
}

impl AttrValue {
    /// Try to interpret the value as an `f64` for aggregation.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Float(v) => Some(*v),
            AttrValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Whether the cell is missing.
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Record – one purchase transaction (one row of the table)
// ---------------------------------------------------------------------------

/// A single purchase record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Dynamic columns: column_name → value.
    pub values: BTreeMap<String, AttrValue>,
}

impl Record {
    pub fn new(values: BTreeMap<String, AttrValue>) -> Self {
        Record { values }
    }

    /// Value of a column, if the record has it.
    pub fn get(&self, column: &str) -> Option<&AttrValue> {
        self.values.get(column)
    }

    /// Numeric reading of a column; `None` for missing or non-numeric cells.
    pub fn numeric(&self, column: &str) -> Option<f64> {
        self.values.get(column).and_then(AttrValue::as_f64)
    }
}

// ---------------------------------------------------------------------------
// PurchaseDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed column indices.
///
/// Loaded once at startup and never mutated; the filter engine represents
/// subsets as row indices into `records`.
#[derive(Debug, Clone)]
pub struct PurchaseDataset {
    /// All purchase records (rows), in source order.
    pub records: Vec<Record>,
    /// Ordered list of column names.
    pub column_names: Vec<String>,
    /// For each column the sorted set of distinct observed values.
    pub unique_values: BTreeMap<String, BTreeSet<AttrValue>>,
}

impl PurchaseDataset {
    /// Build column indices from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut column_names_set: BTreeSet<String> = BTreeSet::new();
        let mut unique_values: BTreeMap<String, BTreeSet<AttrValue>> = BTreeMap::new();

        for rec in &records {
            for (col, val) in &rec.values {
                column_names_set.insert(col.clone());
                unique_values
                    .entry(col.clone())
                    .or_default()
                    .insert(val.clone());
            }
        }
        let column_names: Vec<String> = column_names_set.into_iter().collect();
        PurchaseDataset {
            records,
            column_names,
            unique_values,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct observed values of a column, sorted.
    pub fn distinct(&self, column: &str) -> Option<&BTreeSet<AttrValue>> {
        self.unique_values.get(column)
    }
}
