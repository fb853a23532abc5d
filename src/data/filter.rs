use std::collections::BTreeMap;

use super::model::{AttrValue, PurchaseDataset};

// ---------------------------------------------------------------------------
// Filter selection: one chosen value per constrained attribute
// ---------------------------------------------------------------------------

/// Per-attribute equality constraints chosen by a user for one analysis pass.
///
/// An attribute absent from the map is unconstrained (the "no filter"
/// sentinel), so the empty selection matches every record. Values are assumed
/// to come from the attribute's observed domain; rejecting anything else is
/// the UI boundary's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    choices: BTreeMap<String, AttrValue>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain `attribute` to equal `value`.
    pub fn select(&mut self, attribute: impl Into<String>, value: AttrValue) {
        self.choices.insert(attribute.into(), value);
    }

    /// Drop the constraint on `attribute` (back to "no filter").
    pub fn clear(&mut self, attribute: &str) {
        self.choices.remove(attribute);
    }

    /// The chosen value for `attribute`, if constrained.
    pub fn get(&self, attribute: &str) -> Option<&AttrValue> {
        self.choices.get(attribute)
    }

    /// Whether no attribute is constrained.
    pub fn is_unconstrained(&self) -> bool {
        self.choices.is_empty()
    }

    /// Active (attribute, value) constraints.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.choices.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Return indices of records that pass all active constraints.
///
/// Constraints combine as a logical AND; equality is exact (`AttrValue`
/// equality — numeric compared numerically, strings byte-for-byte). A record
/// lacking a constrained column fails that constraint. The result preserves
/// source row order and is a subset of `0..dataset.len()` — no record is ever
/// copied or created.
pub fn filtered_indices(dataset: &PurchaseDataset, selection: &FilterSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            selection
                .choices
                .iter()
                .all(|(attr, want)| rec.get(attr) == Some(want))
        })
        .map(|(i, _)| i)
        .collect()
}
