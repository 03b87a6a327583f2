//! Word validity against a puzzle graph.

use tracing::warn;

use crate::puzzle::BoxGraph;

/// Check whether `word` can be traced on the box.
///
/// The first letter must be a puzzle letter, and every following letter must
/// be reachable from its predecessor, i.e. sit on a different side. Adjacency
/// sets only ever hold puzzle letters, so each step also confirms the next
/// letter belongs to the puzzle. A single puzzle letter is a valid word.
///
/// An empty word is a caller error; it is reported as a warning and treated
/// as not contained.
pub fn contained(word: &str, graph: &BoxGraph) -> bool {
    let bytes = word.as_bytes();
    let Some((&first, rest)) = bytes.split_first() else {
        warn!("contained() called with an empty word");
        return false;
    };

    let Some(mut nexts) = graph.adjacent(first) else {
        return false;
    };

    for &letter in rest {
        if !nexts.contains(letter) {
            return false;
        }
        nexts = match graph.adjacent(letter) {
            Some(n) => n,
            None => return false,
        };
    }

    true
}
