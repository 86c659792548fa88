//! Command resolution: raw message text in, ordered replies out. Dispatch
//! is by token count; every "not found" path degrades to silence or a
//! disambiguation reply, never to a hard failure.

use crate::data::ReferenceData;
use crate::reply::{Reply, WIKI_URL_PREFIX};

mod items;
mod users;
mod wiki;

/// Invocation constants. `Default` carries the production values; tests
/// substitute their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub trigger_word: String,
    pub rules_keyword: String,
    pub wiki_url_prefix: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            trigger_word: "貓".to_string(),
            rules_keyword: "群規".to_string(),
            wiki_url_prefix: WIKI_URL_PREFIX.to_string(),
        }
    }
}

pub struct Resolver<'a> {
    data: &'a ReferenceData,
    config: &'a BotConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(data: &'a ReferenceData, config: &'a BotConfig) -> Self {
        Self { data, config }
    }

    /// Resolve one message into zero or more replies. Messages without the
    /// trigger word, or with an unsupported token count, are ignored.
    pub fn resolve(&self, raw_text: &str) -> Vec<Reply> {
        let tokens: Vec<&str> = raw_text.split(' ').collect();
        if tokens.len() < 2 || tokens[0] != self.config.trigger_word {
            return Vec::new();
        }

        let mut replies = Vec::new();
        match tokens.len() {
            2 => {
                let arg = tokens[1];
                if arg == self.config.rules_keyword {
                    replies.push(Reply::new(&self.data.rules));
                    return replies;
                }
                // Both lookups run independently; either, both, or neither
                // may answer. User lookup deliberately takes the raw
                // argument, wiki lookup the alias-corrected one.
                if let Some(reply) = users::find_user(self.data, arg) {
                    replies.push(reply);
                }
                if let Some(reply) = wiki::find_wiki(self.data, self.config, arg) {
                    replies.push(reply);
                }
            }
            3 => {
                if let Some(reply) = items::find_item_level(self.data, tokens[1], tokens[2]) {
                    replies.push(reply);
                }
            }
            _ => {}
        }
        replies
    }
}
