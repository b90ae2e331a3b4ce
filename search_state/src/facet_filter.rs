//! Display-only narrowing of a long choice list: a text box and an A-Z rolodex.

use common::facets::FacetChoice;

/// Comparison form of a value: punctuation dropped, trimmed, upper case.
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_uppercase()
}

pub fn rolodex() -> impl Iterator<Item = char> {
    'A'..='Z'
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceFilter {
    pub letter: Option<char>,
    pub text: String,
}

impl ChoiceFilter {
    pub fn is_empty(&self) -> bool {
        self.letter.is_none() && self.text.trim().is_empty()
    }

    /// Select `letter`, or clear it when it is already selected.
    pub fn toggle_letter(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();
        self.letter = if self.letter == Some(letter) { None } else { Some(letter) };
    }

    pub fn matches(&self, value: &str) -> bool {
        let value = normalize(value);
        if let Some(letter) = self.letter {
            if !value.starts_with(letter) {
                return false;
            }
        }
        value.contains(&normalize(&self.text))
    }

    pub fn apply<'a>(&self, choices: Vec<&'a FacetChoice>) -> Vec<&'a FacetChoice> {
        if self.is_empty() {
            return choices;
        }
        choices.into_iter().filter(|choice| self.matches(&choice.value)).collect()
    }
}
