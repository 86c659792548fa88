//! Reference data store: five immutable tables loaded once at startup and
//! bundled into a snapshot that is only ever read afterwards. Any load
//! failure is fatal; there is no partial-data mode.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

pub mod aliases;
pub mod items;
pub mod names;
pub mod rules;
pub mod wiki;

pub use aliases::{load_alias_table, AliasTable};
pub use items::{load_item_catalog, ItemCatalog, LevelRecord};
pub use names::{load_name_directory, NameDirectory};
pub use rules::load_rule_text;
pub use wiki::{load_wiki_page_index, WikiPageIndex};

pub const NAMES_FILE: &str = "names.csv";
pub const ALIASES_FILE: &str = "common_name.csv";
pub const ITEMS_FILE: &str = "data.json";
pub const RULES_FILE: &str = "rules.txt";
pub const WIKI_PAGES_FILE: &str = "wikipages.txt";

/// Immutable snapshot of all reference tables. Built once, then passed by
/// reference into the resolver; nothing mutates it during request handling.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub names: NameDirectory,
    pub aliases: AliasTable,
    pub items: ItemCatalog,
    pub wiki: WikiPageIndex,
    pub rules: String,
}

/// Load every table from `data_dir`. The first failure aborts the load.
pub fn load_reference_data(data_dir: &Path) -> Result<ReferenceData, DataError> {
    Ok(ReferenceData {
        names: load_name_directory(&data_dir.join(NAMES_FILE))?,
        aliases: load_alias_table(&data_dir.join(ALIASES_FILE))?,
        items: load_item_catalog(&data_dir.join(ITEMS_FILE))?,
        wiki: load_wiki_page_index(&data_dir.join(WIKI_PAGES_FILE))?,
        rules: load_rule_text(&data_dir.join(RULES_FILE))?,
    })
}

#[derive(Debug)]
pub enum DataError {
    Read(PathBuf, io::Error),
    Csv(PathBuf, csv::Error),
    Parse(PathBuf, serde_json::Error),
    ShortRow(PathBuf, usize),
}

impl DataError {
    pub(crate) fn read(path: &Path, err: io::Error) -> Self {
        Self::Read(path.to_path_buf(), err)
    }

    pub(crate) fn csv(path: &Path, err: csv::Error) -> Self {
        Self::Csv(path.to_path_buf(), err)
    }

    pub(crate) fn parse(path: &Path, err: serde_json::Error) -> Self {
        Self::Parse(path.to_path_buf(), err)
    }

    pub(crate) fn short_row(path: &Path, line: usize) -> Self {
        Self::ShortRow(path.to_path_buf(), line)
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(path, err) => {
                write!(f, "failed to read {}: {err}", path.display())
            }
            Self::Csv(path, err) => {
                write!(f, "failed to parse CSV {}: {err}", path.display())
            }
            Self::Parse(path, err) => {
                write!(f, "failed to parse JSON {}: {err}", path.display())
            }
            Self::ShortRow(path, line) => {
                write!(f, "{} line {line}: too few columns", path.display())
            }
        }
    }
}

impl std::error::Error for DataError {}
