//! Paired-identity lookup: fuzzy-match the query against both handle
//! columns and surface each hit as "<platform> --> <game>".

use std::collections::BTreeSet;

use crate::data::ReferenceData;
use crate::matcher::fuzzy_find;
use crate::reply::{identity_pair, Reply};

/// A broader match than this is noise, not an answer.
const MAX_PAIRS: usize = 10;

/// Find linked identities for `name`. Hits from both directions are
/// deduplicated and sorted; an empty or too-broad result set is suppressed.
pub(crate) fn find_user(data: &ReferenceData, name: &str) -> Option<Reply> {
    let mut pairs = BTreeSet::new();

    for matched in fuzzy_find(name, &data.names.game_handles) {
        pairs.insert(identity_pair(
            &data.names.platform_handles[matched.index],
            &matched.text,
        ));
    }
    for matched in fuzzy_find(name, &data.names.platform_handles) {
        pairs.insert(identity_pair(
            &matched.text,
            &data.names.game_handles[matched.index],
        ));
    }

    if pairs.is_empty() || pairs.len() > MAX_PAIRS {
        return None;
    }

    let lines: Vec<String> = pairs.into_iter().collect();
    Some(Reply::new(lines.join("\n")))
}
