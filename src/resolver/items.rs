//! Item level lookup: direct catalog hit first, fuzzy fallback second.
//! A query for level L reads record index L; the export stores a level-0
//! placeholder at index 0, so user levels align with indexes as-is.

use crate::data::ReferenceData;
use crate::matcher::fuzzy_find;
use crate::reply::{disambiguation, missing_level, Reply};

pub(crate) fn find_item_level(
    data: &ReferenceData,
    item_arg: &str,
    level_arg: &str,
) -> Option<Reply> {
    let level: i64 = match level_arg.parse() {
        Ok(level) => level,
        Err(err) => {
            // Bad level numbers are dropped, not surfaced to the user.
            eprintln!("ignoring level argument {level_arg:?}: {err}");
            return None;
        }
    };
    if level <= 0 {
        return None;
    }
    let level = level as usize;

    let corrected = data.aliases.canonical(item_arg);
    let (item, records) = match data.items.get(corrected) {
        Some(records) => (corrected.to_string(), records),
        None => {
            let matched: Vec<String> = fuzzy_find(corrected, data.items.names())
                .into_iter()
                .map(|m| m.text)
                .collect();
            match matched.len() {
                0 => return None,
                1 => {
                    let item = matched.into_iter().next()?;
                    let records = data.items.get(&item)?;
                    (item, records)
                }
                _ => return Some(disambiguation(&matched)),
            }
        }
    };

    if records.len() <= level {
        return Some(missing_level(&item, level));
    }
    Some(Reply::new(records[level].data_string.clone()))
}
