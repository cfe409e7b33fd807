//! The matching core: candidate generation and index probing.
//!
//! A roster name matches a benchmark name when some candidate derived
//! from it equals a normalized benchmark name exactly. Candidates are
//! the normalized name plus, for three- and four-word names, every
//! distinct reordering of its words. A candidate that lands on a
//! benchmark record without a usable score does not end the search;
//! later candidates still get their chance.

use serde_json::Number;

use crate::index::BenchmarkIndex;
use crate::normalize::normalize;
use crate::records::{BenchmarkRecord, MatchRecord, RosterModel, MATCH_TYPE};

/// Word-count bounds for reorder tolerance. Outside this range only the
/// unreordered name is probed.
const PERMUTE_MIN_WORDS: usize = 3;
const PERMUTE_MAX_WORDS: usize = 4;

/// A successful match, before it is applied to the roster record.
pub struct MatchOutcome<'a> {
    pub benchmark: &'a BenchmarkRecord,
    pub score: Number,
    pub normalized: String,
    pub matched: String,
    pub word_reorder: bool,
}

/// Candidate keys to probe for a normalized name: the name itself
/// first, then reorderings in a fixed generation order, deduplicated.
/// The ordering makes multi-key collisions resolve the same way on
/// every run.
pub fn candidates(normalized: &str) -> Vec<String> {
    let words: Vec<&str> = normalized.split_whitespace().collect();
    let mut out = vec![normalized.to_string()];
    if (PERMUTE_MIN_WORDS..=PERMUTE_MAX_WORDS).contains(&words.len()) {
        for perm in permutations(&words) {
            if !out.contains(&perm) {
                out.push(perm);
            }
        }
    }
    out
}

/// All orderings of `words` joined by single spaces, in a stable
/// recursive generation order (the unchanged ordering comes first).
fn permutations(words: &[&str]) -> Vec<String> {
    let mut out = Vec::new();
    let mut prefix: Vec<&str> = Vec::with_capacity(words.len());
    let mut rest: Vec<&str> = words.to_vec();
    permute_into(&mut prefix, &mut rest, &mut out);
    out
}

fn permute_into<'a>(prefix: &mut Vec<&'a str>, rest: &mut Vec<&'a str>, out: &mut Vec<String>) {
    if rest.is_empty() {
        out.push(prefix.join(" "));
        return;
    }
    for i in 0..rest.len() {
        let word = rest.remove(i);
        prefix.push(word);
        permute_into(prefix, rest, out);
        prefix.pop();
        rest.insert(i, word);
    }
}

/// Match one roster record against the benchmark index.
///
/// Records without a non-empty `short_name` never match. Returns the
/// first candidate (in `candidates` order) that is an index key whose
/// benchmark record carries a usable score.
pub fn find_match<'a>(model: &RosterModel, index: &BenchmarkIndex<'a>) -> Option<MatchOutcome<'a>> {
    let short_name = model.short_name.as_deref().unwrap_or("");
    if short_name.is_empty() {
        return None;
    }

    let normalized = normalize(short_name);
    for candidate in candidates(&normalized) {
        if let Some(benchmark) = index.get(&candidate) {
            if let Some(score) = benchmark.mmlu_score() {
                let word_reorder = candidate != normalized;
                return Some(MatchOutcome {
                    benchmark,
                    score: score.clone(),
                    normalized,
                    matched: candidate,
                    word_reorder,
                });
            }
        }
    }

    None
}

/// Run the full reconciliation over a roster: strip stale score keys
/// from every record, then match and enrich in document order.
///
/// Matched records are mutated in place; the returned detail entries
/// snapshot each record after enrichment.
pub fn reconcile(roster: &mut [RosterModel], index: &BenchmarkIndex<'_>) -> Vec<MatchRecord> {
    for model in roster.iter_mut() {
        model.strip_stale_scores();
    }

    let mut matches = Vec::new();
    for model in roster.iter_mut() {
        if let Some(outcome) = find_match(model, index) {
            model.apply_score(&outcome.score);
            matches.push(MatchRecord {
                api_model: model.clone(),
                benchmark_model: outcome.benchmark.clone(),
                mmlu_score: outcome.score,
                match_type: MATCH_TYPE,
                original_short_name: model.short_name.clone().unwrap_or_default(),
                normalized_short_name: outcome.normalized,
                matched_permutation: outcome.matched,
                word_reorder: outcome.word_reorder,
            });
        }
    }
    matches
}
