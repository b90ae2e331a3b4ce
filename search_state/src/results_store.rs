//! Latest page of rendered results and its pagination data.

use common::search_result::ResultsPage;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsStore {
    current: Option<ResultsPage>,
}

impl ResultsStore {
    /// Replace everything with the new page; there is no partial update.
    pub fn update(&mut self, page: ResultsPage) {
        self.current = Some(page);
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    pub fn total_results(&self) -> u64 {
        self.current.as_ref().map_or(0, |page| page.total_results)
    }

    pub fn total_pages(&self) -> u32 {
        self.current.as_ref().map_or(0, |page| page.total_pages)
    }

    pub fn content(&self) -> &str {
        self.current.as_ref().map_or("", |page| page.content.as_str())
    }

    /// Page number the stored content was rendered for.
    pub fn page(&self) -> Option<u32> {
        self.current.as_ref().map(|page| page.page)
    }
}

pub fn pluralize(count: u64, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

pub fn results_summary(total: u64, noun: &str) -> String {
    format!("Displaying {} {}", total, pluralize(total, noun))
}
