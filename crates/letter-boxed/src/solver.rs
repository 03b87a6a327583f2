//! Bounded exhaustive search for full-coverage word chains.
//!
//! Every chain of two and three indexed words is visited in a fixed order:
//! first words bucket by bucket (a-z) and in corpus order within a bucket,
//! then each follow-up word from the bucket of the previous word's last
//! letter, again in corpus order. Chains covering all twelve puzzle letters
//! are recorded as they are visited, so solution lists and shortest-solution
//! tie-breaks are reproducible for a given corpus.
//!
//! Coverage is checked with precomputed letter bitmasks: one OR and one
//! popcount per candidate chain.

use std::fmt;
use std::time::Instant;

use smallvec::SmallVec;
use tracing::info;

use crate::dictionary::{DictionaryIndex, IndexedWord};
use crate::letters::PUZZLE_SIZE;

/// Distinct letters a chain must use to be a solution
pub const FULL_COVERAGE: usize = PUZZLE_SIZE;

/// Longest chain the search will build
pub const MAX_CHAIN_WORDS: usize = 3;

/// Configuration for the search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Longest chain to enumerate. Two-word chains are always searched;
    /// three-word chains only when this is 3 or more. Anything above 3 is
    /// treated as 3.
    pub max_words: usize,
    /// Keep every solution found. When false only the counts and the
    /// shortest solution of each length are kept.
    pub collect_solutions: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_words: MAX_CHAIN_WORDS,
            collect_solutions: true,
        }
    }
}

/// An ordered run of words, each starting with the previous word's last letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<'a> {
    words: SmallVec<[&'a str; MAX_CHAIN_WORDS]>,
}

impl<'a> Chain<'a> {
    fn from_indexed(words: &[&'a IndexedWord]) -> Self {
        Self {
            words: words.iter().map(|w| w.as_str()).collect(),
        }
    }

    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    /// Length of the chain rendered with single spaces between words
    pub fn rendered_len(&self) -> usize {
        let words = self.words();
        let letters: usize = words.iter().map(|w| w.len()).sum();
        letters + words.len().saturating_sub(1)
    }
}

impl fmt::Display for Chain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

/// Shortest chain seen so far. A candidate replaces the current best only
/// when strictly shorter, so the earliest of equal-length chains is kept.
#[derive(Debug, Clone, Default)]
pub struct ShortestSolution<'a> {
    best: Option<Chain<'a>>,
}

impl<'a> ShortestSolution<'a> {
    /// Offer a candidate; returns true if it became the new best
    pub fn offer(&mut self, candidate: &Chain<'a>) -> bool {
        let improves = self
            .get()
            .map_or(true, |best| candidate.rendered_len() < best.rendered_len());
        if improves {
            self.best = Some(candidate.clone());
        }
        improves
    }

    pub fn get(&self) -> Option<&Chain<'a>> {
        self.best.as_ref()
    }

    pub fn into_inner(self) -> Option<Chain<'a>> {
        self.best
    }
}

/// Result of the search
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    /// Two-word solutions in discovery order; empty unless collected
    pub two_word: Vec<Chain<'a>>,
    /// Three-word solutions in discovery order; empty unless collected
    pub three_word: Vec<Chain<'a>>,
    /// Whether `two_word` and `three_word` hold every solution found
    pub solutions_collected: bool,
    /// Two-word solutions found, collected or not
    pub two_word_found: usize,
    /// Three-word solutions found, collected or not
    pub three_word_found: usize,
    /// Shortest two-word solution, `None` if there is none
    pub shortest_two: Option<Chain<'a>>,
    /// Shortest three-word solution, `None` if there is none
    pub shortest_three: Option<Chain<'a>>,
    /// Chain-valid word pairs visited
    pub pairs_tested: usize,
    /// Chain-valid word triples visited
    pub triples_tested: usize,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

/// Accumulators threaded through the enumeration
#[derive(Default)]
struct SearchState<'a> {
    collect: bool,
    two_word: Vec<Chain<'a>>,
    three_word: Vec<Chain<'a>>,
    shortest_two: ShortestSolution<'a>,
    shortest_three: ShortestSolution<'a>,
    two_word_found: usize,
    three_word_found: usize,
    pairs_tested: usize,
    triples_tested: usize,
}

impl<'a> SearchState<'a> {
    fn record(&mut self, words: &[&'a IndexedWord]) {
        let chain = Chain::from_indexed(words);
        let (shortest, found, list) = if words.len() == 2 {
            (&mut self.shortest_two, &mut self.two_word_found, &mut self.two_word)
        } else {
            (&mut self.shortest_three, &mut self.three_word_found, &mut self.three_word)
        };
        *found += 1;
        shortest.offer(&chain);
        if self.collect {
            list.push(chain);
        }
    }
}

/// Enumerate every two- and three-word chain over `index` and collect the
/// ones that use all twelve puzzle letters.
///
/// Three-word chains extend every chain-valid pair, not only pairs that are
/// themselves solutions.
pub fn find_solutions<'a>(index: &'a DictionaryIndex, config: &SearchConfig) -> SearchResult<'a> {
    let start_time = Instant::now();
    let extend_to_three = config.max_words >= MAX_CHAIN_WORDS;
    let mut state = SearchState {
        collect: config.collect_solutions,
        ..SearchState::default()
    };

    for first in index.words() {
        for second in index.bucket(first.last_letter()) {
            state.pairs_tested += 1;
            let pair_letters = first.letters().union(second.letters());
            if pair_letters.len() == FULL_COVERAGE {
                state.record(&[first, second]);
            }

            if !extend_to_three {
                continue;
            }

            for third in index.bucket(second.last_letter()) {
                state.triples_tested += 1;
                if pair_letters.union(third.letters()).len() == FULL_COVERAGE {
                    state.record(&[first, second, third]);
                }
            }
        }
    }

    let time_elapsed_ms = start_time.elapsed().as_millis() as u64;
    info!(
        pairs = state.pairs_tested,
        triples = state.triples_tested,
        two_word = state.two_word_found,
        three_word = state.three_word_found,
        time_elapsed_ms,
        "search complete"
    );

    SearchResult {
        two_word: state.two_word,
        three_word: state.three_word,
        solutions_collected: state.collect,
        two_word_found: state.two_word_found,
        three_word_found: state.three_word_found,
        shortest_two: state.shortest_two.into_inner(),
        shortest_three: state.shortest_three.into_inner(),
        pairs_tested: state.pairs_tested,
        triples_tested: state.triples_tested,
        time_elapsed_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letters::coverage;
    use crate::puzzle::BoxGraph;

    fn index(corpus: &[&str]) -> DictionaryIndex {
        let graph = BoxGraph::parse("abcdefghijkl").unwrap();
        DictionaryIndex::from_records(corpus, &graph)
    }

    fn rendered(chains: &[Chain<'_>]) -> Vec<String> {
        chains.iter().map(Chain::to_string).collect()
    }

    #[test]
    fn test_two_and_three_word_solutions() {
        let index = index(&["adg", "gjbkcleifh", "gjb", "bkcleifh", "abc", "hello"]);
        let result = find_solutions(&index, &SearchConfig::default());

        assert_eq!(rendered(&result.two_word), vec!["adg gjbkcleifh"]);
        assert_eq!(rendered(&result.three_word), vec!["adg gjb bkcleifh"]);
        assert_eq!(result.shortest_two.unwrap().to_string(), "adg gjbkcleifh");
        assert_eq!(result.shortest_three.unwrap().to_string(), "adg gjb bkcleifh");
    }

    #[test]
    fn test_three_word_extends_non_solution_pairs() {
        // "adg gjb" covers only five letters but still seeds a triple
        let index = index(&["adg", "gjb", "bkcleifh"]);
        let result = find_solutions(&index, &SearchConfig::default());

        assert!(result.two_word.is_empty());
        assert!(result.shortest_two.is_none());
        assert_eq!(rendered(&result.three_word), vec!["adg gjb bkcleifh"]);
    }

    #[test]
    fn test_shortest_keeps_first_on_tie() {
        let index = index(&["adg", "gjbkcleifh", "gjckbleifh"]);
        let result = find_solutions(&index, &SearchConfig::default());

        assert_eq!(
            rendered(&result.two_word),
            vec!["adg gjbkcleifh", "adg gjckbleifh"]
        );
        assert_eq!(result.shortest_two.unwrap().to_string(), "adg gjbkcleifh");
    }

    #[test]
    fn test_shortest_replaced_by_strictly_shorter() {
        let index = index(&["adg", "gjbkcleifhl", "gjbkcleifh"]);
        let result = find_solutions(&index, &SearchConfig::default());

        assert_eq!(result.two_word.len(), 2);
        let shortest = result.shortest_two.unwrap();
        assert_eq!(shortest.to_string(), "adg gjbkcleifh");
        assert_eq!(shortest.rendered_len(), 14);
    }

    #[test]
    fn test_duplicates_are_distinct_records() {
        let index = index(&["adg", "adg", "gjbkcleifh"]);
        let result = find_solutions(&index, &SearchConfig::default());

        assert_eq!(
            rendered(&result.two_word),
            vec!["adg gjbkcleifh", "adg gjbkcleifh"]
        );
    }

    #[test]
    fn test_empty_corpus() {
        let index = index(&[]);
        let result = find_solutions(&index, &SearchConfig::default());

        assert!(result.two_word.is_empty());
        assert!(result.three_word.is_empty());
        assert!(result.shortest_two.is_none());
        assert!(result.shortest_three.is_none());
        assert_eq!(result.pairs_tested, 0);
    }

    #[test]
    fn test_two_word_limit_skips_triples() {
        let index = index(&["adg", "gjbkcleifh", "gjb", "bkcleifh"]);
        let config = SearchConfig {
            max_words: 2,
            ..SearchConfig::default()
        };
        let result = find_solutions(&index, &config);

        assert_eq!(result.two_word.len(), 1);
        assert!(result.three_word.is_empty());
        assert!(result.shortest_three.is_none());
        assert_eq!(result.triples_tested, 0);
    }

    #[test]
    fn test_uncollected_search_keeps_counts_and_shortest() {
        let index = index(&["adg", "gjbkcleifhl", "gjbkcleifh", "gjb", "bkcleifh"]);
        let config = SearchConfig {
            collect_solutions: false,
            ..SearchConfig::default()
        };
        let result = find_solutions(&index, &config);

        assert!(!result.solutions_collected);
        assert!(result.two_word.is_empty());
        assert!(result.three_word.is_empty());
        assert_eq!(result.two_word_found, 2);
        assert_eq!(result.three_word_found, 1);
        assert_eq!(result.shortest_two.unwrap().to_string(), "adg gjbkcleifh");
        assert_eq!(result.shortest_three.unwrap().to_string(), "adg gjb bkcleifh");

        let collected = find_solutions(&index, &SearchConfig::default());
        assert!(collected.solutions_collected);
        assert_eq!(collected.two_word.len(), collected.two_word_found);
        assert_eq!(collected.three_word.len(), collected.three_word_found);
    }

    #[test]
    fn test_search_is_deterministic() {
        let corpus = [
            "adg", "gjb", "bkcleifh", "gjbkcleifh", "hajeb", "bkcl", "lafh", "heljc", "cfibk",
            "kdhlc", "gjckbleifh", "ljadgk",
        ];
        let index = index(&corpus);
        let first = find_solutions(&index, &SearchConfig::default());
        let second = find_solutions(&index, &SearchConfig::default());

        assert_eq!(first.two_word, second.two_word);
        assert_eq!(first.three_word, second.three_word);
        assert_eq!(first.shortest_two, second.shortest_two);
        assert_eq!(first.shortest_three, second.shortest_three);
    }

    #[test]
    fn test_matches_naive_enumeration() {
        let corpus = [
            "adg", "gjb", "bkcleifh", "gjbkcleifh", "hajeb", "bkcl", "lafh", "heljc", "cfibk",
            "kdhlc", "gjckbleifh", "ljadgk", "bkcleifhadg",
        ];
        let index = index(&corpus);
        let result = find_solutions(&index, &SearchConfig::default());

        let words: Vec<&str> = index.words().map(IndexedWord::as_str).collect();
        let last = |w: &str| w.as_bytes()[w.len() - 1];
        let first = |w: &str| w.as_bytes()[0];

        let mut pairs = Vec::new();
        let mut triples = Vec::new();
        for &a in &words {
            for &b in words.iter().filter(|b| first(b) == last(a)) {
                if coverage([a, b]) == FULL_COVERAGE {
                    pairs.push(format!("{} {}", a, b));
                }
                for &c in words.iter().filter(|c| first(c) == last(b)) {
                    if coverage([a, b, c]) == FULL_COVERAGE {
                        triples.push(format!("{} {} {}", a, b, c));
                    }
                }
            }
        }

        assert!(!pairs.is_empty());
        assert!(!triples.is_empty());
        assert_eq!(rendered(&result.two_word), pairs);
        assert_eq!(rendered(&result.three_word), triples);

        let shortest_pair = pairs.iter().fold(None::<&String>, |best, s| match best {
            Some(b) if b.len() <= s.len() => Some(b),
            _ => Some(s),
        });
        assert_eq!(
            result.shortest_two.map(|c| c.to_string()).as_ref(),
            shortest_pair
        );
    }

    #[test]
    fn test_shortest_solution_offer() {
        let long = Chain {
            words: SmallVec::from_slice(&["adg", "gjbkcleifhl"]),
        };
        let short = Chain {
            words: SmallVec::from_slice(&["adg", "gjbkcleifh"]),
        };
        let mut shortest = ShortestSolution::default();
        assert!(shortest.get().is_none());
        assert!(shortest.offer(&long));
        assert!(!shortest.offer(&long));
        assert!(shortest.offer(&short));
        assert_eq!(shortest.get(), Some(&short));
    }
}
