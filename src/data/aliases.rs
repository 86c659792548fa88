//! Alias table: common shorthand -> canonical reference-table key.
//! Lookup is a total function; unknown tokens pass through unchanged.

use std::collections::HashMap;
use std::path::Path;

use crate::data::DataError;

#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Canonical form of a token. Absent keys map to the identity.
    pub fn canonical<'a>(&'a self, token: &'a str) -> &'a str {
        self.entries.get(token).map(String::as_str).unwrap_or(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load the headerless two-column alias CSV: alias, canonical name.
pub fn load_alias_table(path: &Path) -> Result<AliasTable, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|err| DataError::csv(path, err))?;

    let mut entries = HashMap::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|err| DataError::csv(path, err))?;
        match (record.get(0), record.get(1)) {
            (Some(alias), Some(canonical)) => {
                entries.insert(alias.to_string(), canonical.to_string());
            }
            _ => return Err(DataError::short_row(path, row + 1)),
        }
    }

    Ok(AliasTable { entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_alias_maps_to_canonical() {
        let table = AliasTable::from_pairs([("kr".to_string(), "Kraken".to_string())]);
        assert_eq!(table.canonical("kr"), "Kraken");
    }

    #[test]
    fn unknown_token_is_identity() {
        let table = AliasTable::from_pairs([("kr".to_string(), "Kraken".to_string())]);
        assert_eq!(table.canonical("Wraith"), "Wraith");
        assert_eq!(table.canonical(""), "");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = AliasTable::from_pairs([("kr".to_string(), "Kraken".to_string())]);
        assert_eq!(table.canonical("KR"), "KR");
    }
}
