//! One solver run: puzzle line in, report out.

use std::path::Path;

use tracing::warn;

use crate::dictionary::DictionaryIndex;
use crate::error::Result;
use crate::puzzle::BoxGraph;
use crate::report::Report;
use crate::solver::{find_solutions, SearchConfig};

/// Parse the puzzle, index the dictionary, search and build the report.
///
/// The puzzle line is fully validated before the dictionary is opened, so a
/// bad puzzle never touches the corpus.
pub fn run(letters: &str, dictionary: &Path, config: &SearchConfig) -> Result<Report> {
    let graph = BoxGraph::parse(letters)?;
    let index = DictionaryIndex::open(dictionary, &graph)?;
    if index.is_empty() {
        warn!(path = %dictionary.display(), "no dictionary word can be played on this puzzle");
    }

    let result = find_solutions(&index, config);
    Ok(Report::new(graph.letters().to_string(), &index, &result))
}
