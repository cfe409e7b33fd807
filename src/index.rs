//! Normalized-name lookup over the benchmark table.

use indexmap::IndexMap;

use crate::normalize::normalize;
use crate::records::BenchmarkRecord;

/// Benchmark records keyed by normalized name.
///
/// Collisions are resolved last-wins: when two records normalize to the
/// same key, the one later in document order silently replaces the
/// earlier one. That is the documented policy, not an accident of
/// iteration order.
pub struct BenchmarkIndex<'a> {
    entries: IndexMap<String, &'a BenchmarkRecord>,
}

impl<'a> BenchmarkIndex<'a> {
    pub fn build(records: &'a [BenchmarkRecord]) -> Self {
        let mut entries = IndexMap::with_capacity(records.len());
        for record in records {
            entries.insert(normalize(&record.name), record);
        }
        Self { entries }
    }

    /// Look up a benchmark record by an already-normalized key.
    pub fn get(&self, key: &str) -> Option<&'a BenchmarkRecord> {
        self.entries.get(key).copied()
    }

    /// Number of distinct normalized names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
