//! Run summaries: per-word uniqueness distribution and the solution report.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dictionary::{DictionaryIndex, IndexedWord, LoadStats};
use crate::letters::PUZZLE_SIZE;
use crate::solver::{Chain, SearchResult};

/// Number of top uniqueness tiers listed
pub const TOP_TIERS: usize = 3;

/// Marker printed in place of an empty shortest-solution slot
pub const NO_SOLUTION: &str = "no solution found";

/// Indexed words sharing one distinct-letter count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniquenessTier {
    pub unique_letters: usize,
    pub words: Vec<String>,
}

/// How many indexed words have each distinct-letter count (0-12), and the
/// words in the top tiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniquenessReport {
    pub histogram: [usize; PUZZLE_SIZE + 1],
    pub max_unique: usize,
    /// Highest tier first. Never includes tiers below one letter.
    pub tiers: Vec<UniquenessTier>,
}

impl UniquenessReport {
    pub fn from_index(index: &DictionaryIndex) -> Self {
        let mut histogram = [0usize; PUZZLE_SIZE + 1];
        for word in index.words() {
            // Indexed words only use puzzle letters, so this never overflows
            if let Some(slot) = histogram.get_mut(word.unique_letters()) {
                *slot += 1;
            }
        }

        let max_unique = index
            .words()
            .map(IndexedWord::unique_letters)
            .max()
            .unwrap_or(0);

        let lowest = max_unique.saturating_sub(TOP_TIERS - 1).max(1);
        let tiers = (lowest..=max_unique)
            .rev()
            .map(|unique_letters| UniquenessTier {
                unique_letters,
                words: index
                    .words()
                    .filter(|w| w.unique_letters() == unique_letters)
                    .map(|w| w.as_str().to_string())
                    .collect(),
            })
            .collect();

        Self {
            histogram,
            max_unique,
            tiers,
        }
    }
}

/// Everything a run reports, in owned form for printing or serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub puzzle: String,
    pub dictionary: LoadStats,
    pub uniqueness: UniquenessReport,
    /// Omitted when the search did not collect every solution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_word_solutions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_word_solutions: Option<Vec<String>>,
    pub two_word_found: usize,
    pub three_word_found: usize,
    pub shortest_two: Option<String>,
    pub shortest_three: Option<String>,
    pub pairs_tested: usize,
    pub triples_tested: usize,
    pub time_elapsed_ms: u64,
}

impl Report {
    pub fn new(
        puzzle: String,
        index: &DictionaryIndex,
        result: &SearchResult<'_>,
    ) -> Self {
        let list_solutions = result.solutions_collected;
        Self {
            puzzle,
            dictionary: *index.stats(),
            uniqueness: UniquenessReport::from_index(index),
            two_word_solutions: list_solutions.then(|| render_all(&result.two_word)),
            three_word_solutions: list_solutions.then(|| render_all(&result.three_word)),
            two_word_found: result.two_word_found,
            three_word_found: result.three_word_found,
            shortest_two: result.shortest_two.as_ref().map(Chain::to_string),
            shortest_three: result.shortest_three.as_ref().map(Chain::to_string),
            pairs_tested: result.pairs_tested,
            triples_tested: result.triples_tested,
            time_elapsed_ms: result.time_elapsed_ms,
        }
    }
}

fn render_all(chains: &[Chain<'_>]) -> Vec<String> {
    chains.iter().map(Chain::to_string).collect()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Unique count distribution:")?;
        let counts: Vec<String> = self
            .uniqueness
            .histogram
            .iter()
            .map(usize::to_string)
            .collect();
        writeln!(f, "{}", counts.join(" "))?;

        for tier in &self.uniqueness.tiers {
            writeln!(f, "Highly unique words: {}", tier.unique_letters)?;
            for word in &tier.words {
                writeln!(f, "{}", word)?;
            }
        }

        for solution in self.two_word_solutions.iter().flatten() {
            writeln!(f, "Two word solution: {}", solution)?;
        }
        for solution in self.three_word_solutions.iter().flatten() {
            writeln!(f, "Three word solution: {}", solution)?;
        }

        let slot = |s: &Option<String>| s.clone().unwrap_or_else(|| NO_SOLUTION.to_string());
        writeln!(f, "Shortest")?;
        writeln!(f, "Two word solution: {}", slot(&self.shortest_two))?;
        writeln!(f, "Shortest")?;
        write!(f, "Three word solution: {}", slot(&self.shortest_three))
    }
}
