//! Fuzzy matcher over a fixed candidate list. A candidate matches when the
//! query's characters appear in it in order (case-insensitive); matches are
//! ranked by Jaro-Winkler similarity with ties broken by original index, so
//! identical inputs always produce identical orderings.

use strsim::jaro_winkler;

#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub text: String,
    pub index: usize,
    pub score: f64,
}

/// Find all candidates the query fuzzily matches, best first. An empty
/// query or an empty candidate list yields no matches, never an error.
pub fn fuzzy_find(query: &str, candidates: &[String]) -> Vec<Match> {
    if query.is_empty() {
        return Vec::new();
    }

    let query_lower = query.to_lowercase();
    let mut matches: Vec<Match> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| {
            let candidate_lower = candidate.to_lowercase();
            if !is_subsequence(&query_lower, &candidate_lower) {
                return None;
            }
            Some(Match {
                text: candidate.clone(),
                index,
                score: jaro_winkler(&query_lower, &candidate_lower),
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.index.cmp(&b.index))
    });
    matches
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut haystack_chars = haystack.chars();
    needle
        .chars()
        .all(|c| haystack_chars.by_ref().any(|h| h == c))
}
