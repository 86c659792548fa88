//! Wiki page lookup. An exact hit on the corrected query always beats an
//! ambiguous fuzzy set; only genuinely ambiguous queries get the
//! disambiguation list.

use crate::data::ReferenceData;
use crate::matcher::fuzzy_find;
use crate::reply::{disambiguation, Reply};
use crate::resolver::BotConfig;

pub(crate) fn find_wiki(data: &ReferenceData, config: &BotConfig, query: &str) -> Option<Reply> {
    let corrected = data.aliases.canonical(query);

    let matched: Vec<String> = fuzzy_find(corrected, data.wiki.titles())
        .into_iter()
        .map(|m| m.text)
        .collect();

    match matched.len() {
        0 => None,
        1 => Some(page_url(config, &matched[0])),
        _ if matched.iter().any(|title| title == corrected) => {
            Some(page_url(config, corrected))
        }
        _ => Some(disambiguation(&matched)),
    }
}

fn page_url(config: &BotConfig, title: &str) -> Reply {
    Reply::new(format!("{}{title}", config.wiki_url_prefix))
}
