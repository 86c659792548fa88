//! Item catalog: canonical item name -> ordered per-level records, parsed
//! from the upstream data export. Record index 0 is the export's level-0
//! placeholder row; user-facing levels line up with indexes 1..len.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::DataError;

/// One level row. The export carries extra per-level fields; only the
/// pre-rendered description is needed at reply time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub data_string: String,
}

#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    records: BTreeMap<String, Vec<LevelRecord>>,
    names: Vec<String>,
}

impl ItemCatalog {
    pub fn new(records: BTreeMap<String, Vec<LevelRecord>>) -> Self {
        let names = records.keys().cloned().collect();
        Self { records, names }
    }

    pub fn get(&self, item: &str) -> Option<&[LevelRecord]> {
        self.records.get(item).map(Vec::as_slice)
    }

    /// All item names in a fixed order, for deterministic fuzzy search.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load the item catalog JSON: `{"<item>": [{"data_string": ...}, ...]}`.
pub fn load_item_catalog(path: &Path) -> Result<ItemCatalog, DataError> {
    let raw = fs::read_to_string(path).map_err(|err| DataError::read(path, err))?;
    let records: BTreeMap<String, Vec<LevelRecord>> =
        serde_json::from_str(&raw).map_err(|err| DataError::parse(path, err))?;
    Ok(ItemCatalog::new(records))
}
