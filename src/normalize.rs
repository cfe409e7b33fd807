//! Name normalization shared by the benchmark index and the matcher.

/// Normalize a model name for lookup: lowercase, collapse runs of
/// whitespace to single spaces, trim the ends.
///
/// Deliberately narrow: no Unicode folding, no punctuation stripping.
/// Two names land on the same key only when they agree letter for
/// letter after this rule.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
