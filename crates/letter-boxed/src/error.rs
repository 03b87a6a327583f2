//! Error types for the Letter Boxed solver.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. Any of these aborts the run before a report is produced.
#[derive(Debug, Error)]
pub enum Error {
    /// The puzzle line contains something other than an ascii letter
    #[error("invalid puzzle input: {found:?} at position {position} is not an ascii letter")]
    InvalidPuzzleInput { position: usize, found: char },

    /// The puzzle line does not hold exactly twelve characters
    #[error("invalid puzzle input: expected 12 letters, got {0}")]
    PuzzleLength(usize),

    /// A letter appears more than once among the twelve
    #[error("duplicate letter: {0}")]
    DuplicateLetter(char),

    /// The dictionary corpus could not be opened or read
    #[error("cannot read dictionary {}: {source}", path.display())]
    DictionaryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
