//! Cache of the facet catalogue and the choice counts last reported by the index.

use std::collections::{BTreeMap, BTreeSet};

use common::facets::{FacetChoice, FacetDefinition, FacetKind, RangeFacetState};
use common::search_const::FACET_TABS;
use common::search_query::{RangeBound, RangeBounds};
use common::search_result::FacetsResponse;


#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetStore {
    definitions: Vec<FacetDefinition>,
    choices: Vec<FacetChoice>,
    ranges: BTreeMap<String, RangeFacetState>,
    total_results: Option<u64>,
    loaded: bool,
}

impl FacetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a facets payload has been merged in with [`FacetStore::add_facets`].
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn definitions(&self) -> &[FacetDefinition] {
        &self.definitions
    }

    pub fn definition(&self, name: &str) -> Option<&FacetDefinition> {
        self.definitions.iter().find(|definition| definition.name == name)
    }

    /// Known facets grouped for display: the configured tabs in order, empty ones
    /// dropped, then one more tab with every facet no group names.
    pub fn tabs(&self) -> Vec<Vec<&FacetDefinition>> {
        let mut tabs = FACET_TABS.iter()
            .map(|group| group.iter().filter_map(|name| self.definition(name)).collect::<Vec<_>>())
            .filter(|tab| !tab.is_empty())
            .collect::<Vec<_>>();
        let ungrouped = self.definitions.iter()
            .filter(|definition| !FACET_TABS.iter().any(|group| group.contains(&definition.name.as_str())))
            .collect::<Vec<_>>();
        if !ungrouped.is_empty() {
            tabs.push(ungrouped);
        }
        tabs
    }

    pub fn choices(&self) -> &[FacetChoice] {
        &self.choices
    }

    /// Choices of one facet, most frequent first.
    pub fn choices_for(&self, facet: &str) -> Vec<&FacetChoice> {
        let mut choices = self.choices.iter().filter(|choice| choice.facet == facet).collect::<Vec<_>>();
        choices.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
        choices
    }

    pub fn active_choices(&self) -> Vec<&FacetChoice> {
        self.choices.iter().filter(|choice| choice.active).collect()
    }

    pub fn range(&self, facet: &str) -> Option<&RangeFacetState> {
        self.ranges.get(facet)
    }

    pub fn ranges(&self) -> impl Iterator<Item = &RangeFacetState> {
        self.ranges.values()
    }

    /// Total reported with the last facets payload.
    pub fn total_results(&self) -> Option<u64> {
        self.total_results
    }

    /// Lowest and highest value a range facet can take, read from its choice values.
    pub fn range_limits(&self, facet: &str) -> Option<(i64, i64)> {
        self.choices.iter()
            .filter(|choice| choice.facet == facet)
            .filter_map(|choice| choice.value.trim().parse::<i64>().ok())
            .fold(None, |acc, value| match acc {
                None => Some((value, value)),
                Some((low, high)) => Some((low.min(value), high.max(value))),
            })
    }

    pub fn active_choice_map(&self) -> BTreeMap<String, BTreeSet<String>> {
        let mut map = BTreeMap::<String, BTreeSet<String>>::new();
        for choice in self.choices.iter().filter(|choice| choice.active) {
            map.entry(choice.facet.clone()).or_default().insert(choice.value.clone());
        }
        map
    }

    pub fn active_range_map(&self) -> BTreeMap<String, RangeBounds> {
        self.ranges.iter()
            .filter(|(_, range)| range.is_bounded())
            .map(|(name, range)| (name.clone(), range.bounds()))
            .collect()
    }

    /// Facets with at least one active choice or bound.
    pub fn active_facet_names(&self) -> BTreeSet<String> {
        let choices = self.choices.iter().filter(|choice| choice.active).map(|choice| choice.facet.clone());
        let ranges = self.ranges.values().filter(|range| range.is_bounded()).map(|range| range.facet.clone());
        choices.chain(ranges).collect()
    }

    /// Merge a facets payload: new facets and values are added inactive, known ones
    /// get the fresh count and keep their active flag.
    pub fn add_facets(&mut self, payload: &FacetsResponse) {
        self.total_results = Some(payload.total);
        for (kind, section) in [(FacetKind::Text, &payload.facets), (FacetKind::Range, &payload.range_facets)] {
            for (name, values) in section {
                self.ensure_definition(name, kind);
                for (value, count) in values {
                    match self.choice_mut(name, value) {
                        Some(choice) => choice.count = *count,
                        None => self.choices.push(FacetChoice::new(name.clone(), value.clone(), *count)),
                    }
                }
            }
        }
        self.loaded = true;
    }

    /// Replace the counts of the known choices. Never adds, removes or (de)activates
    /// a choice; a value missing from the payload had no hits and counts 0.
    pub fn update_facet_choice_counts(&mut self, payload: &FacetsResponse) {
        self.total_results = Some(payload.total);
        for choice in &mut self.choices {
            choice.count = payload.count_for(&choice.facet, &choice.value).unwrap_or(0);
        }
    }

    /// Flip one choice and return its new state; `None` when the choice is unknown.
    pub fn toggle(&mut self, facet: &str, value: &str) -> Option<bool> {
        let choice = self.choice_mut(facet, value)?;
        choice.active = !choice.active;
        Some(choice.active)
    }

    /// Make exactly the given choices active. Values not reported yet are added
    /// with a zero count so they stay visible and removable.
    pub fn set_active_choices(&mut self, active: &BTreeMap<String, BTreeSet<String>>) {
        for choice in &mut self.choices {
            choice.active = active.get(&choice.facet).is_some_and(|values| values.contains(&choice.value));
        }
        for (facet, values) in active {
            if self.definition(facet).is_none() {
                self.definitions.push(FacetDefinition::new(facet.clone(), FacetKind::Text));
            }
            for value in values {
                if self.choice_mut(facet, value).is_none() {
                    let mut choice = FacetChoice::new(facet.clone(), value.clone(), 0);
                    choice.active = true;
                    self.choices.push(choice);
                }
            }
        }
    }

    /// Make exactly the given bounds active; every other range becomes unbounded.
    pub fn set_ranges(&mut self, ranges: &BTreeMap<String, RangeBounds>) {
        for range in self.ranges.values_mut() {
            range.clear();
        }
        for (facet, bounds) in ranges {
            self.ensure_definition(facet, FacetKind::Range);
            if let Some(range) = self.ranges.get_mut(facet) {
                range.set_bounds(*bounds);
            }
        }
    }

    /// Set one bound of a known range facet. Returns whether the bound changed,
    /// `None` when the facet has no range state.
    pub fn edit_range(&mut self, facet: &str, bound: RangeBound, value: Option<i64>) -> Option<bool> {
        let range = self.ranges.get_mut(facet)?;
        if range.get(bound) == value {
            return Some(false);
        }
        range.set(bound, value);
        Some(true)
    }

    pub fn clear_all(&mut self) {
        for choice in &mut self.choices {
            choice.active = false;
        }
        for range in self.ranges.values_mut() {
            range.clear();
        }
    }

    fn ensure_definition(&mut self, name: &str, kind: FacetKind) {
        if self.definition(name).is_none() {
            self.definitions.push(FacetDefinition::new(name, kind));
        }
        if kind == FacetKind::Range {
            self.ranges.entry(name.to_string()).or_insert_with(|| RangeFacetState::new(name));
        }
    }

    fn choice_mut(&mut self, facet: &str, value: &str) -> Option<&mut FacetChoice> {
        self.choices.iter_mut().find(|choice| choice.is(facet, value))
    }
}
