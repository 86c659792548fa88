use std::collections::BTreeMap;

use nekobot::data::{
    AliasTable, ItemCatalog, LevelRecord, NameDirectory, ReferenceData, WikiPageIndex,
};
use nekobot::resolver::{BotConfig, Resolver};

const RULES: &str = "1. 禁止廣告\n2. 互相尊重";

fn record(text: &str) -> LevelRecord {
    LevelRecord {
        data_string: text.to_string(),
    }
}

fn sample_data() -> ReferenceData {
    let mut items = BTreeMap::new();
    items.insert(
        "Kraken".to_string(),
        vec![record("k0"), record("k1"), record("k2")],
    );
    items.insert(
        "Kraken Mk2".to_string(),
        vec![record("m0"), record("m1")],
    );
    items.insert("Wraith".to_string(), vec![record("w0"), record("w1")]);

    ReferenceData {
        names: NameDirectory {
            game_handles: vec![
                "NeoCat".to_string(),
                "ZeroCool".to_string(),
                "AcidBurn".to_string(),
            ],
            platform_handles: vec![
                "neo_line".to_string(),
                "zero_line".to_string(),
                "acid_line".to_string(),
            ],
        },
        aliases: AliasTable::from_pairs([
            ("kr".to_string(), "Kraken".to_string()),
            ("ic".to_string(), "Ion Cannon".to_string()),
        ]),
        items: ItemCatalog::new(items),
        wiki: WikiPageIndex::new(vec![
            "Kraken".to_string(),
            "Ion".to_string(),
            "Ion Cannon".to_string(),
            "Ionizer".to_string(),
            "Neon".to_string(),
        ]),
        rules: RULES.to_string(),
    }
}

fn resolve(data: &ReferenceData, text: &str) -> Vec<String> {
    let config = BotConfig::default();
    Resolver::new(data, &config)
        .resolve(text)
        .into_iter()
        .map(|reply| reply.text)
        .collect()
}

#[test]
fn rules_keyword_returns_rule_text_verbatim() {
    let data = sample_data();
    assert_eq!(resolve(&data, "貓 群規"), [RULES.to_string()]);
}

#[test]
fn missing_trigger_word_is_ignored() {
    let data = sample_data();
    assert!(resolve(&data, "hello world").is_empty());
    assert!(resolve(&data, "狗 群規").is_empty());
}

#[test]
fn single_token_and_long_commands_are_ignored() {
    let data = sample_data();
    assert!(resolve(&data, "貓").is_empty());
    assert!(resolve(&data, "").is_empty());
    assert!(resolve(&data, "貓 Kraken 1 extra").is_empty());
}

#[test]
fn user_lookup_pairs_platform_with_game_handle() {
    let data = sample_data();
    assert_eq!(
        resolve(&data, "貓 ZeroCool"),
        ["zero_line --> ZeroCool".to_string()]
    );
}

#[test]
fn user_lookup_deduplicates_hits_from_both_directions() {
    let data = sample_data();
    // "neo" hits NeoCat via the game column and neo_line via the platform
    // column; both format to the same pair. A wiki hit on "Neon" follows.
    let replies = resolve(&data, "貓 neo");
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0], "neo_line --> NeoCat");
}

#[test]
fn user_and_wiki_lookups_both_fire_in_order() {
    let data = sample_data();
    let replies = resolve(&data, "貓 Neo");
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0], "neo_line --> NeoCat");
    assert_eq!(
        replies[1],
        "https://hackersthegame.fandom.com/wiki/Neon"
    );
}

fn roster_of(rows: usize) -> ReferenceData {
    ReferenceData {
        names: NameDirectory {
            game_handles: (1..=rows).map(|i| format!("player{i:02}")).collect(),
            platform_handles: (1..=rows).map(|i| format!("p{i:02}_line")).collect(),
        },
        ..ReferenceData::default()
    }
}

#[test]
fn user_lookup_replies_at_exactly_ten_pairs() {
    let data = roster_of(10);
    let replies = resolve(&data, "貓 player");
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].lines().count(), 10);
    assert!(replies[0].lines().next().unwrap().contains("-->"));
}

#[test]
fn user_lookup_is_suppressed_past_ten_pairs() {
    let data = roster_of(11);
    assert!(resolve(&data, "貓 player").is_empty());
}

#[test]
fn user_lookup_output_is_sorted_and_stable() {
    let data = roster_of(3);
    let replies = resolve(&data, "貓 player");
    assert_eq!(
        replies[0],
        "p01_line --> player01\np02_line --> player02\np03_line --> player03"
    );
}

#[test]
fn wiki_exact_match_beats_ambiguous_fuzzy_set() {
    let data = sample_data();
    // "Ion" fuzzily matches Ion, Ion Cannon and Ionizer; the exact title
    // wins over the disambiguation list.
    assert_eq!(
        resolve(&data, "貓 Ion"),
        ["https://hackersthegame.fandom.com/wiki/Ion".to_string()]
    );
}

#[test]
fn ambiguous_wiki_query_gets_disambiguation_list() {
    let data = sample_data();
    let replies = resolve(&data, "貓 io");
    assert_eq!(replies.len(), 1);
    let lines: Vec<&str> = replies[0].lines().collect();
    assert_eq!(lines[0], "您是不是要查:");
    assert!(lines.contains(&"Ion"));
    assert!(lines.contains(&"Ion Cannon"));
    assert!(lines.contains(&"Ionizer"));
}

#[test]
fn wiki_lookup_applies_alias_correction() {
    let data = sample_data();
    assert_eq!(
        resolve(&data, "貓 ic"),
        ["https://hackersthegame.fandom.com/wiki/Ion Cannon".to_string()]
    );
}

#[test]
fn unmatched_two_token_query_stays_silent() {
    let data = sample_data();
    assert!(resolve(&data, "貓 zzzzzz").is_empty());
}

#[test]
fn item_level_reads_record_at_level_index() {
    let data = sample_data();
    assert_eq!(resolve(&data, "貓 Kraken 1"), ["k1".to_string()]);
    assert_eq!(resolve(&data, "貓 Kraken 2"), ["k2".to_string()]);
}

#[test]
fn item_lookup_applies_alias_correction() {
    let data = sample_data();
    assert_eq!(resolve(&data, "貓 kr 1"), ["k1".to_string()]);
}

#[test]
fn level_past_record_count_names_item_and_level() {
    let data = sample_data();
    assert_eq!(
        resolve(&data, "貓 Kraken 99"),
        ["Kraken 沒有等級 99".to_string()]
    );
    // records.len() itself is already out of range
    assert_eq!(
        resolve(&data, "貓 Kraken 3"),
        ["Kraken 沒有等級 3".to_string()]
    );
}

#[test]
fn non_positive_levels_are_ignored() {
    let data = sample_data();
    assert!(resolve(&data, "貓 Kraken 0").is_empty());
    assert!(resolve(&data, "貓 Kraken -2").is_empty());
}

#[test]
fn non_numeric_level_is_dropped_without_panicking() {
    let data = sample_data();
    assert!(resolve(&data, "貓 Kraken abc").is_empty());
    assert!(resolve(&data, "貓 Kraken 1.5").is_empty());
}

#[test]
fn unique_fuzzy_item_match_resolves_the_level() {
    let data = sample_data();
    // "Wrth" only matches Wraith
    assert_eq!(resolve(&data, "貓 Wrth 1"), ["w1".to_string()]);
}

#[test]
fn ambiguous_item_query_stops_at_disambiguation() {
    let data = sample_data();
    // "Krak" matches both Kraken and Kraken Mk2; no level lookup happens.
    let replies = resolve(&data, "貓 Krak 1");
    assert_eq!(replies.len(), 1);
    let lines: Vec<&str> = replies[0].lines().collect();
    assert_eq!(lines[0], "您是不是要查:");
    assert!(lines.contains(&"Kraken"));
    assert!(lines.contains(&"Kraken Mk2"));
}

#[test]
fn unknown_item_stays_silent() {
    let data = sample_data();
    assert!(resolve(&data, "貓 zzzzzz 3").is_empty());
}

#[test]
fn custom_trigger_and_rules_keyword_are_honored() {
    let data = sample_data();
    let config = BotConfig {
        trigger_word: "bot".to_string(),
        rules_keyword: "rules".to_string(),
        ..BotConfig::default()
    };
    let resolver = Resolver::new(&data, &config);
    assert_eq!(resolver.resolve("bot rules").len(), 1);
    assert!(resolver.resolve("貓 群規").is_empty());
}
