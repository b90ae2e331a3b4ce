//! Query-string codec between the address bar and [`FormState`].
//!
//! Text facet values appear as `facet=value` (repeated for several values), range
//! bounds as `facet_0` / `facet_1`, and `query`, `sort`, `page` carry the keyword,
//! sort order and page number. Keys holding a default value are left out so that
//! shared links stay short.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::search_query::{FormState, RangeBound, SortOption};

pub const QUERY_KEY: &str = "query";
pub const SORT_KEY: &str = "sort";
pub const PAGE_KEY: &str = "page";

// RFC 3986 unreserved characters stay as they are, everything else is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');


pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Decoded key/value pairs in order of appearance. Accepts a leading `?`.
pub fn parse_pairs(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

pub fn range_key(facet: &str, bound: RangeBound) -> String {
    format!("{facet}_{}", bound.suffix())
}

fn split_range_key(key: &str) -> Option<(&str, RangeBound)> {
    let (facet, bound) = if let Some(facet) = key.strip_suffix("_0") {
        (facet, RangeBound::Min)
    } else if let Some(facet) = key.strip_suffix("_1") {
        (facet, RangeBound::Max)
    } else {
        return None;
    };
    if facet.is_empty() {
        return None;
    }
    Some((facet, bound))
}

impl FormState {
    /// Key/value pairs in ascending key order, defaults omitted.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (facet, values) in &self.active_choices {
            for value in values {
                pairs.push((facet.clone(), value.clone()));
            }
        }
        for (facet, bounds) in &self.active_ranges {
            for bound in [RangeBound::Min, RangeBound::Max] {
                if let Some(value) = bounds.get(bound) {
                    pairs.push((range_key(facet, bound), value.to_string()));
                }
            }
        }
        if let Some(query) = self.keyword_query.as_ref().filter(|_| self.has_keyword()) {
            pairs.push((QUERY_KEY.to_string(), query.clone()));
        }
        if self.sort != SortOption::default() {
            pairs.push((SORT_KEY.to_string(), self.sort.to_string()));
        }
        if self.page > 1 {
            pairs.push((PAGE_KEY.to_string(), self.page.to_string()));
        }
        // stable: repeated keys keep their value order
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }

    /// Serialized form without the leading `?`; empty for the default state.
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Lenient parse: unknown sort names, unparseable numbers and empty values
    /// are treated as absent. Relevance sort without a keyword falls back to the
    /// default order.
    pub fn from_query_string(query: &str) -> Self {
        let mut form = FormState::default();
        for (key, value) in parse_pairs(query) {
            if value.trim().is_empty() {
                continue;
            }
            match key.as_str() {
                QUERY_KEY => form.keyword_query = Some(value),
                SORT_KEY => {
                    if let Ok(sort) = value.parse::<SortOption>() {
                        form.sort = sort;
                    }
                }
                PAGE_KEY => {
                    form.page = value.trim().parse::<u32>().ok().filter(|page| *page >= 1).unwrap_or(1);
                }
                _ => match split_range_key(&key) {
                    Some((facet, bound)) => {
                        if let Ok(parsed) = value.trim().parse::<i64>() {
                            form.active_ranges.entry(facet.to_string()).or_default().set(bound, Some(parsed));
                        }
                    }
                    None => {
                        form.active_choices.entry(key).or_default().insert(value);
                    }
                },
            }
        }
        if !form.has_keyword() && form.sort.requires_keyword() {
            form.sort = SortOption::default();
        }
        form
    }
}


#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::search_query::RangeBounds;

    fn author_form(values: &[&str]) -> FormState {
        let mut form = FormState::default();
        form.active_choices.insert("author".into(), values.iter().map(|v| v.to_string()).collect());
        form
    }

    #[test]
    fn default_state_serializes_to_empty_string() {
        assert_eq!(FormState::default().to_query_string(), "");
    }

    #[test]
    fn facet_value_is_percent_encoded_with_space_as_percent_20() {
        let form = author_form(&["Rous, Francis, 1615-"]);
        assert_eq!(form.to_query_string(), "author=Rous%2C%20Francis%2C%201615-");
    }

    #[test]
    fn full_state_lists_keys_in_order_and_omits_defaults() {
        let mut form = author_form(&["Sira, Ben", "Copus, Martinus"]);
        form.active_ranges.insert("pub_year".into(), RangeBounds { min: Some(1700), max: Some(1720) });
        form.keyword_query = Some("psalms".into());
        form.sort = SortOption::PubYearDesc;
        form.page = 3;

        assert_eq!(
            form.to_query_string(),
            "author=Copus%2C%20Martinus&author=Sira%2C%20Ben&page=3&pub_year_0=1700&pub_year_1=1720&query=psalms&sort=pub_year_desc"
        );
    }

    #[test]
    fn round_trip_preserves_state() {
        let mut form = author_form(&["Clüver, Philipp: 1580-1622", "Moolen, Simon va: de"]);
        form.active_choices.insert("language".into(), BTreeSet::from(["Latin".to_string()]));
        form.active_ranges.insert("pub_year".into(), RangeBounds { min: None, max: Some(1843) });
        form.keyword_query = Some("a & b = c?".into());
        form.sort = SortOption::Relevance;
        form.page = 2;

        assert_eq!(FormState::from_query_string(&form.to_query_string()), form);
    }

    #[test]
    fn generated_states_survive_the_round_trip() {
        const FACETS: [&str; 3] = ["author", "language", "subject"];
        const VALUES: [&str; 6] = ["Sira, Ben", "Latin", "Clüver, Philipp: 1580-1622", "a & b = c?", "100%", "x+y/z"];
        const KEYWORDS: [&str; 3] = ["psalms", "old books", "ünïcode & co"];

        let mut seed = 0x9e37_79b9_u64;
        let mut next = move |bound: usize| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) as usize % bound
        };
        for _ in 0..300 {
            let mut form = FormState::default();
            for facet in FACETS {
                for value in VALUES {
                    if next(4) == 0 {
                        form.active_choices.entry(facet.to_string()).or_default().insert(value.to_string());
                    }
                }
            }
            let min = (next(2) == 0).then(|| next(3000) as i64 - 500);
            let max = (next(2) == 0).then(|| next(3000) as i64);
            if min.is_some() || max.is_some() {
                form.active_ranges.insert("pub_year".into(), RangeBounds { min, max });
            }
            if next(2) == 0 {
                form.keyword_query = Some(KEYWORDS[next(KEYWORDS.len())].to_string());
            }
            form.sort = SortOption::ALL[next(SortOption::ALL.len())];
            if form.sort.requires_keyword() && !form.has_keyword() {
                form.sort = SortOption::default();
            }
            form.page = 1 + next(50) as u32;

            assert_eq!(FormState::from_query_string(&form.to_query_string()), form, "{}", form.to_query_string());
        }
    }

    #[test]
    fn relevance_without_keyword_parses_as_default_sort() {
        assert_eq!(FormState::from_query_string("sort=relevance"), FormState::default());
        assert_eq!(FormState::from_query_string("sort=relevance&query=%20").sort, SortOption::default());
        assert_eq!(FormState::from_query_string("sort=relevance&query=psalms").sort, SortOption::Relevance);
    }

    #[test]
    fn parse_accepts_leading_question_mark_and_plus_for_space() {
        let form = FormState::from_query_string("?author=Sira,+Ben&query=old+books");
        assert_eq!(form.active_choices["author"], BTreeSet::from(["Sira, Ben".to_string()]));
        assert_eq!(form.keyword_query.as_deref(), Some("old books"));
    }

    #[test]
    fn parse_ignores_malformed_values() {
        let form = FormState::from_query_string("sort=bogus&page=0&pub_year_0=soon&author=&query=");
        assert_eq!(form, FormState::default());

        let form = FormState::from_query_string("page=abc");
        assert_eq!(form.page, 1);
    }

    #[test]
    fn range_keys_need_a_facet_name() {
        let form = FormState::from_query_string("_0=5");
        assert_eq!(form.active_choices["_0"], BTreeSet::from(["5".to_string()]));
        assert!(form.active_ranges.is_empty());
    }

    #[test]
    fn facets_query_drops_page() {
        let mut form = author_form(&["Sira, Ben"]);
        form.page = 4;
        assert_eq!(form.without_page().to_query_string(), "author=Sira%2C%20Ben");
    }
}
