//! Letter Boxed puzzle solver library.
//!
//! Builds the side-crossing letter graph from twelve puzzle letters, indexes
//! the dictionary words that can be traced on it, and exhaustively searches
//! two- and three-word chains for ones that use every puzzle letter.

pub mod app;
pub mod dictionary;
pub mod error;
pub mod letters;
pub mod puzzle;
pub mod report;
pub mod solver;
pub mod validator;

// Re-export main types
pub use app::run;
pub use dictionary::{DictionaryIndex, IndexedWord, LoadStats};
pub use error::{Error, Result};
pub use letters::{coverage, LetterSet};
pub use puzzle::{BoxGraph, PuzzleLetters};
pub use report::{Report, UniquenessReport, UniquenessTier, NO_SOLUTION};
pub use solver::{find_solutions, Chain, SearchConfig, SearchResult, ShortestSolution};
pub use validator::contained;
