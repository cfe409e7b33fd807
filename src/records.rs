//! Record types for the benchmark table, the API model roster, and the
//! match detail report.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Evaluation key carrying the MMLU-Pro score on benchmark records.
pub const MMLU_SCORE_KEY: &str = "mmlu_pro";

/// Provenance key written next to the score on enriched roster records.
pub const MMLU_SOURCE_KEY: &str = "mmlu_pro_source";

/// Provenance tag identifying scores written by this tool.
pub const MMLU_SOURCE_TAG: &str = "flexible_word_order_match";

/// Match type tag recorded on every match detail entry.
pub const MATCH_TYPE: &str = "direct_word_order_flexible";

/// Prefix of stale evaluation keys stripped from roster records before a
/// run, so re-running over already-enriched output starts clean.
pub const STALE_KEY_PREFIX: &str = "mmlu_pro";

/// Benchmark score table: a JSON object whose `data` field holds the
/// record list. Other top-level fields are ignored (the table is never
/// written back).
#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkDocument {
    pub data: Vec<BenchmarkRecord>,
}

/// One benchmark entry. Unknown fields ride along so the match report
/// can embed the record as it appeared on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub name: String,
    #[serde(default)]
    pub evaluations: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BenchmarkRecord {
    /// The record's MMLU-Pro score, if present and numeric.
    ///
    /// A null or non-numeric value disqualifies the record as a match
    /// target exactly like a missing key.
    pub fn mmlu_score(&self) -> Option<&Number> {
        match self.evaluations.get(MMLU_SCORE_KEY) {
            Some(Value::Number(n)) => Some(n),
            _ => None,
        }
    }
}

/// One roster entry from the API model document. Only `short_name` and
/// `evaluations` matter to matching; every other field is carried
/// through the rewrite untouched, in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluations: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RosterModel {
    /// Drop evaluation keys written by previous runs (everything under
    /// the stale prefix). Records without evaluations are left alone.
    pub fn strip_stale_scores(&mut self) {
        if let Some(evaluations) = &mut self.evaluations {
            evaluations.retain(|key, _| !key.starts_with(STALE_KEY_PREFIX));
        }
    }

    /// Record a matched score and its provenance tag, creating the
    /// evaluations map if the record has none.
    pub fn apply_score(&mut self, score: &Number) {
        let evaluations = self.evaluations.get_or_insert_with(Map::new);
        evaluations.insert(MMLU_SCORE_KEY.to_string(), Value::Number(score.clone()));
        evaluations.insert(
            MMLU_SOURCE_KEY.to_string(),
            Value::String(MMLU_SOURCE_TAG.to_string()),
        );
    }
}

/// One match detail entry. Field order here is the serialization order
/// of the report file, so reorder with care.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    /// Snapshot of the roster record after enrichment.
    pub api_model: RosterModel,
    /// The benchmark record that supplied the score.
    pub benchmark_model: BenchmarkRecord,
    pub mmlu_score: Number,
    pub match_type: &'static str,
    pub original_short_name: String,
    pub normalized_short_name: String,
    pub matched_permutation: String,
    pub word_reorder: bool,
}
