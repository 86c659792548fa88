//! Group rules: a single free-text block, surfaced verbatim on request.

use std::fs;
use std::path::Path;

use crate::data::DataError;

/// Load the rule text, trimmed of surrounding whitespace.
pub fn load_rule_text(path: &Path) -> Result<String, DataError> {
    let raw = fs::read_to_string(path).map_err(|err| DataError::read(path, err))?;
    Ok(raw.trim().to_string())
}
