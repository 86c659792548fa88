//! Name directory: linked game/platform identity pairs from the roster CSV
//! export. Row i of one column pairs with row i of the other.

use std::path::Path;

use crate::data::DataError;

/// Rows of sheet banner/header junk before the first roster row.
const BANNER_ROWS: usize = 3;
const GAME_HANDLE_COLUMN: usize = 2;
const PLATFORM_HANDLE_COLUMN: usize = 4;

/// Two parallel columns of equal length. Index alignment is exactly as
/// loaded; nothing reorders or deduplicates after load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameDirectory {
    pub game_handles: Vec<String>,
    pub platform_handles: Vec<String>,
}

impl NameDirectory {
    pub fn len(&self) -> usize {
        self.game_handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.game_handles.is_empty()
    }
}

/// Load the roster CSV. Banner rows are skipped; every remaining row must
/// carry at least the two handle columns or the load fails.
pub fn load_name_directory(path: &Path) -> Result<NameDirectory, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|err| DataError::csv(path, err))?;

    let mut directory = NameDirectory::default();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|err| DataError::csv(path, err))?;
        if row < BANNER_ROWS {
            continue;
        }
        let game = record.get(GAME_HANDLE_COLUMN);
        let platform = record.get(PLATFORM_HANDLE_COLUMN);
        match (game, platform) {
            (Some(game), Some(platform)) => {
                directory.game_handles.push(game.to_string());
                directory.platform_handles.push(platform.to_string());
            }
            _ => return Err(DataError::short_row(path, row + 1)),
        }
    }

    Ok(directory)
}
