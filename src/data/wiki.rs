//! Wiki page index: one canonical page title per line. Order is preserved
//! as loaded so fuzzy search over the list stays deterministic.

use std::fs;
use std::path::Path;

use crate::data::DataError;

#[derive(Debug, Clone, Default)]
pub struct WikiPageIndex {
    titles: Vec<String>,
}

impl WikiPageIndex {
    pub fn new(titles: Vec<String>) -> Self {
        Self { titles }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// Load page titles, trimming each line and skipping blank ones.
pub fn load_wiki_page_index(path: &Path) -> Result<WikiPageIndex, DataError> {
    let raw = fs::read_to_string(path).map_err(|err| DataError::read(path, err))?;
    let titles = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    Ok(WikiPageIndex::new(titles))
}
