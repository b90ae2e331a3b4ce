//! Shared search form state models.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    #[default]
    AuthorAsc,
    AuthorDesc,
    PubYearAsc,
    PubYearDesc,
    Relevance,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::AuthorAsc,
        SortOption::AuthorDesc,
        SortOption::PubYearAsc,
        SortOption::PubYearDesc,
        SortOption::Relevance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthorAsc => "author_asc",
            Self::AuthorDesc => "author_desc",
            Self::PubYearAsc => "pub_year_asc",
            Self::PubYearDesc => "pub_year_desc",
            Self::Relevance => "relevance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AuthorAsc => "Author A-Z",
            Self::AuthorDesc => "Author Z-A",
            Self::PubYearAsc => "Year Oldest-Newest",
            Self::PubYearDesc => "Year Newest-Oldest",
            Self::Relevance => "Relevance",
        }
    }

    /// Relevance ranking only exists relative to a keyword query.
    pub fn requires_keyword(&self) -> bool {
        matches!(self, Self::Relevance)
    }
}

impl Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortOption(pub String);

impl Display for UnknownSortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown sort option: {}", self.0)
    }
}

impl std::error::Error for UnknownSortOption {}

impl FromStr for SortOption {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| UnknownSortOption(s.to_string()))
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RangeBound {
    Min,
    Max,
}

impl RangeBound {
    /// Suffix used for the bound in the query string (`pub_year_0`, `pub_year_1`).
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Min => "0",
            Self::Max => "1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RangeBounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl RangeBounds {
    pub fn get(&self, bound: RangeBound) -> Option<i64> {
        match bound {
            RangeBound::Min => self.min,
            RangeBound::Max => self.max,
        }
    }

    pub fn set(&mut self, bound: RangeBound, value: Option<i64>) {
        match bound {
            RangeBound::Min => self.min = value,
            RangeBound::Max => self.max = value,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}


/// Canonical snapshot of the search criteria.
///
/// Always derived from the stores; never kept as an independently settable copy.
/// Empty choice sets, unbounded ranges and empty keywords are not represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub active_choices: BTreeMap<String, BTreeSet<String>>,
    pub active_ranges: BTreeMap<String, RangeBounds>,
    pub keyword_query: Option<String>,
    pub sort: SortOption,
    pub page: u32,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            active_choices: BTreeMap::new(),
            active_ranges: BTreeMap::new(),
            keyword_query: None,
            sort: SortOption::default(),
            page: 1,
        }
    }
}

impl FormState {
    pub fn has_keyword(&self) -> bool {
        self.keyword_query.as_deref().is_some_and(|q| !q.trim().is_empty())
    }

    /// Names of facets that currently narrow the result set.
    pub fn active_facet_names(&self) -> BTreeSet<String> {
        let choices = self.active_choices.iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(name, _)| name.clone());
        let ranges = self.active_ranges.iter()
            .filter(|(_, bounds)| !bounds.is_unbounded())
            .map(|(name, _)| name.clone());
        choices.chain(ranges).collect()
    }

    /// The same criteria on the first page; facet counts do not depend on paging.
    pub fn without_page(&self) -> Self {
        Self { page: 1, ..self.clone() }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_option_parses_its_own_name() {
        for option in SortOption::ALL {
            assert_eq!(option.as_str().parse::<SortOption>(), Ok(option));
        }
        assert!("author".parse::<SortOption>().is_err());
    }

    #[test]
    fn default_form_is_first_page_sorted_by_author() {
        let form = FormState::default();
        assert_eq!(form.page, 1);
        assert_eq!(form.sort, SortOption::AuthorAsc);
        assert!(!form.has_keyword());
    }

    #[test]
    fn active_facet_names_include_bounded_ranges_only() {
        let mut form = FormState::default();
        form.active_choices.insert("author".into(), BTreeSet::from(["Sira, Ben".to_string()]));
        form.active_choices.insert("language".into(), BTreeSet::new());
        form.active_ranges.insert("pub_year".into(), RangeBounds { min: Some(1700), max: None });
        form.active_ranges.insert("print_year".into(), RangeBounds::default());

        let names = form.active_facet_names();
        assert_eq!(names, BTreeSet::from(["author".to_string(), "pub_year".to_string()]));
    }

    #[test]
    fn whitespace_keyword_is_not_a_keyword() {
        let form = FormState { keyword_query: Some("  ".into()), ..FormState::default() };
        assert!(!form.has_keyword());
    }
}
