//! Human summary printed after a run.
//!
//! The summary is the command's stdout "answer"; there is no
//! machine-readable contract for it. Automation should read the match
//! detail file instead.

use colored::Colorize;

use crate::records::MatchRecord;

/// Counts shown in the human summary.
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    pub total: usize,
    pub direct: usize,
    pub reordered: usize,
    pub roster_total: usize,
}

impl Summary {
    pub fn from_matches(matches: &[MatchRecord], roster_total: usize) -> Self {
        let direct = matches.iter().filter(|m| !m.word_reorder).count();
        Self {
            total: matches.len(),
            direct,
            reordered: matches.len() - direct,
            roster_total,
        }
    }

    /// Fraction of roster records that matched, as a percentage. An
    /// empty roster reports zero rather than dividing by zero.
    pub fn coverage_pct(&self) -> f64 {
        if self.roster_total == 0 {
            return 0.0;
        }
        self.total as f64 / self.roster_total as f64 * 100.0
    }

    /// Coverage with one decimal place, e.g. "33.3%".
    pub fn coverage_display(&self) -> String {
        format!("{:.1}%", self.coverage_pct())
    }
}

/// Print the run summary in human-readable format.
pub fn print_human(matches: &[MatchRecord], roster_total: usize) {
    let summary = Summary::from_matches(matches, roster_total);

    println!("MMLU-PRO SCORE RECONCILIATION");
    println!("{}", "=".repeat(60));
    println!();

    println!("Total matches: {}", summary.total);
    println!("  Direct (no reordering): {:>4}", summary.direct);
    println!("  Word order reordered:   {:>4}", summary.reordered);
    println!();
    println!(
        "Coverage: {}/{} ({})",
        summary.total,
        summary.roster_total,
        summary.coverage_display()
    );

    let examples: Vec<&MatchRecord> = matches.iter().filter(|m| m.word_reorder).take(3).collect();
    if !examples.is_empty() {
        println!();
        println!("Example reordered matches:");
        for m in examples {
            println!(
                "  \"{}\" -> \"{}\"",
                m.original_short_name, m.matched_permutation
            );
            println!(
                "    Benchmark: \"{}\" (MMLU-Pro: {})",
                m.benchmark_model.name, m.mmlu_score
            );
        }
    }

    println!();
    if summary.roster_total > 0 && summary.total == summary.roster_total {
        println!(
            "  {} Every roster model carries a benchmark score",
            "✓".green()
        );
    } else if summary.total == 0 {
        println!(
            "  {} No roster models matched a scored benchmark name",
            "⚠".yellow()
        );
    }
}
