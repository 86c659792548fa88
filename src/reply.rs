//! Reply payloads and the user-facing message formats. Replies are plain
//! text only; the transport layer decides the wire shape.

pub const DISAMBIGUATION_HEADER: &str = "您是不是要查:";
pub const WIKI_URL_PREFIX: &str = "https://hackersthegame.fandom.com/wiki/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
}

impl Reply {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// "Did you mean" list: header line, then one candidate per line.
pub fn disambiguation(candidates: &[String]) -> Reply {
    let mut lines = vec![DISAMBIGUATION_HEADER.to_string()];
    lines.extend(candidates.iter().cloned());
    Reply::new(lines.join("\n"))
}

/// One linked identity, platform handle first.
pub fn identity_pair(platform_handle: &str, game_handle: &str) -> String {
    format!("{platform_handle} --> {game_handle}")
}

/// Reply for a level query past the end of an item's records.
pub fn missing_level(item: &str, level: usize) -> Reply {
    Reply::new(format!("{item} 沒有等級 {level}"))
}
