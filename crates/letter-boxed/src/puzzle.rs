//! Puzzle letters and the side-crossing adjacency graph built from them.
//!
//! The twelve input letters are split positionally into four sides of three:
//! positions 0-2, 3-5, 6-8 and 9-11. A word may step from one letter to the
//! next only when the two letters sit on different sides.

use std::fmt;

use crate::error::{Error, Result};
use crate::letters::{fold_letter, letter_index, LetterSet, PUZZLE_SIZE, SIDE_COUNT, SIDE_LEN};

/// Twelve distinct lowercase letters in input order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleLetters([u8; PUZZLE_SIZE]);

impl PuzzleLetters {
    /// Parse one puzzle line.
    ///
    /// A trailing `\n` or `\r\n` is ignored. Letters are case-folded. Any
    /// non-letter, a length other than twelve, or a repeated letter fails.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        let mut folded = Vec::with_capacity(PUZZLE_SIZE);
        for (position, found) in line.chars().enumerate() {
            match fold_letter(found) {
                Some(letter) => folded.push(letter),
                None => return Err(Error::InvalidPuzzleInput { position, found }),
            }
        }

        let letters: [u8; PUZZLE_SIZE] = folded
            .as_slice()
            .try_into()
            .map_err(|_| Error::PuzzleLength(folded.len()))?;

        let mut seen = LetterSet::EMPTY;
        for &letter in &letters {
            if seen.contains(letter) {
                return Err(Error::DuplicateLetter(letter as char));
            }
            seen.insert(letter);
        }

        Ok(Self(letters))
    }

    pub fn as_bytes(&self) -> &[u8; PUZZLE_SIZE] {
        &self.0
    }

    /// Side (0-3) of the letter at `position`
    pub fn side_of_position(position: usize) -> usize {
        position / SIDE_LEN
    }

    /// The four sides, three letters each
    pub fn sides(&self) -> [[u8; SIDE_LEN]; SIDE_COUNT] {
        let mut sides = [[0u8; SIDE_LEN]; SIDE_COUNT];
        for (position, &letter) in self.0.iter().enumerate() {
            sides[Self::side_of_position(position)][position % SIDE_LEN] = letter;
        }
        sides
    }
}

impl fmt::Display for PuzzleLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, side) in self.sides().iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            for &letter in side {
                write!(f, "{}", letter as char)?;
            }
        }
        Ok(())
    }
}

/// Adjacency model of a puzzle: each puzzle letter maps to the nine letters
/// not on its own side. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxGraph {
    letters: PuzzleLetters,
    alphabet: LetterSet,
    /// Indexed by letter (0-25); empty for letters outside the puzzle
    adjacency: [LetterSet; 26],
}

impl BoxGraph {
    pub fn new(letters: PuzzleLetters) -> Self {
        let bytes = letters.as_bytes();
        let alphabet: LetterSet = bytes.iter().copied().collect();
        let mut adjacency = [LetterSet::EMPTY; 26];

        for (i, &letter) in bytes.iter().enumerate() {
            let side = PuzzleLetters::side_of_position(i);
            let nexts: LetterSet = bytes
                .iter()
                .enumerate()
                .filter(|&(j, _)| PuzzleLetters::side_of_position(j) != side)
                .map(|(_, &other)| other)
                .collect();
            if let Some(idx) = letter_index(letter) {
                adjacency[idx] = nexts;
            }
        }

        Self {
            letters,
            alphabet,
            adjacency,
        }
    }

    /// Parse a puzzle line and build its graph in one step
    pub fn parse(line: &str) -> Result<Self> {
        PuzzleLetters::parse(line).map(Self::new)
    }

    pub fn letters(&self) -> &PuzzleLetters {
        &self.letters
    }

    /// The twelve puzzle letters as a set
    pub fn alphabet(&self) -> LetterSet {
        self.alphabet
    }

    /// Whether `letter` is one of the puzzle letters
    pub fn contains(&self, letter: u8) -> bool {
        self.alphabet.contains(letter)
    }

    /// Letters reachable in one step from `letter`, or `None` if `letter`
    /// is not a puzzle letter
    pub fn adjacent(&self, letter: u8) -> Option<LetterSet> {
        if !self.contains(letter) {
            return None;
        }
        letter_index(letter).map(|i| self.adjacency[i])
    }

    /// Whether a single step from `from` to `to` is legal
    pub fn can_step(&self, from: u8, to: u8) -> bool {
        self.adjacent(from).map_or(false, |nexts| nexts.contains(to))
    }
}
