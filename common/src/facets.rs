//! Facet catalogue models.

use serde::{Deserialize, Serialize};

use crate::search_const::FACET_LABELS;
use crate::search_query::{RangeBound, RangeBounds};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetKind {
    Text,
    Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetDefinition {
    pub name: String,
    pub label: String,
    pub kind: FacetKind,
}

impl FacetDefinition {
    pub fn new(name: impl Into<String>, kind: FacetKind) -> Self {
        let name = name.into();
        Self { label: facet_label(&name), name, kind }
    }
}

/// Display label for a facet name: the configured label, or the name made readable.
pub fn facet_label(name: &str) -> String {
    if let Some((_, label)) = FACET_LABELS.iter().find(|(key, _)| *key == name) {
        return label.to_string();
    }
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacetChoice {
    pub facet: String,
    pub value: String,
    pub count: u64,
    pub active: bool,
}

impl FacetChoice {
    pub fn new(facet: impl Into<String>, value: impl Into<String>, count: u64) -> Self {
        Self { facet: facet.into(), value: value.into(), count, active: false }
    }

    pub fn is(&self, facet: &str, value: &str) -> bool {
        self.facet == facet && self.value == value
    }
}


/// User-imposed bounds of one range facet; `None` leaves that side open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeFacetState {
    pub facet: String,
    pub min_val: Option<i64>,
    pub max_val: Option<i64>,
}

impl RangeFacetState {
    pub fn new(facet: impl Into<String>) -> Self {
        Self { facet: facet.into(), min_val: None, max_val: None }
    }

    pub fn bounds(&self) -> RangeBounds {
        RangeBounds { min: self.min_val, max: self.max_val }
    }

    pub fn get(&self, bound: RangeBound) -> Option<i64> {
        self.bounds().get(bound)
    }

    pub fn set(&mut self, bound: RangeBound, value: Option<i64>) {
        match bound {
            RangeBound::Min => self.min_val = value,
            RangeBound::Max => self.max_val = value,
        }
    }

    pub fn set_bounds(&mut self, bounds: RangeBounds) {
        self.min_val = bounds.min;
        self.max_val = bounds.max;
    }

    pub fn clear(&mut self) {
        self.min_val = None;
        self.max_val = None;
    }

    pub fn is_bounded(&self) -> bool {
        !self.bounds().is_unbounded()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_labels_win_over_generated_ones() {
        assert_eq!(facet_label("pub_year"), "Publication Year");
        assert_eq!(facet_label("place_of_printing"), "Place of printing");
        assert_eq!(facet_label(""), "");
    }

    #[test]
    fn range_state_tracks_both_sides() {
        let mut range = RangeFacetState::new("pub_year");
        assert!(!range.is_bounded());
        range.set(RangeBound::Max, Some(1843));
        assert_eq!(range.bounds(), RangeBounds { min: None, max: Some(1843) });
        assert!(range.is_bounded());
        range.clear();
        assert!(!range.is_bounded());
    }
}
