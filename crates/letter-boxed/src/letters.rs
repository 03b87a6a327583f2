//! Letter bitmasks and ascii case folding.
//!
//! Every letter set in the solver is a 26-bit mask, one bit per lowercase
//! ascii letter. Unions and distinct-letter counts are then a single `|` and
//! `count_ones` instead of a rescan of the underlying words.

/// Number of letters a full puzzle uses
pub const PUZZLE_SIZE: usize = 12;

/// Letters per side of the box
pub const SIDE_LEN: usize = 3;

/// Number of sides of the box
pub const SIDE_COUNT: usize = PUZZLE_SIZE / SIDE_LEN;

/// Fold an ascii letter to lowercase, or `None` for anything else
pub fn fold_letter(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_lowercase() as u8)
    } else {
        None
    }
}

/// Fold a whole record to lowercase.
///
/// Returns `None` if any character is not an ascii letter; a record is never
/// partially accepted.
pub fn fold_word(raw: &str) -> Option<String> {
    raw.chars()
        .map(|c| fold_letter(c).map(char::from))
        .collect()
}

/// Bit index (0-25) of a lowercase ascii letter
#[inline]
pub fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

/// A set of lowercase ascii letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: LetterSet = LetterSet(0);

    /// Set of the distinct lowercase letters in `word`. Other bytes are ignored.
    pub fn from_word(word: &str) -> Self {
        word.bytes().fold(Self::EMPTY, |set, b| set.with(b))
    }

    /// Copy of this set with `letter` added
    pub fn with(self, letter: u8) -> Self {
        match letter_index(letter) {
            Some(i) => LetterSet(self.0 | (1 << i)),
            None => self,
        }
    }

    pub fn insert(&mut self, letter: u8) {
        *self = self.with(letter);
    }

    pub fn contains(self, letter: u8) -> bool {
        letter_index(letter).map_or(false, |i| self.0 & (1 << i) != 0)
    }

    pub fn union(self, other: Self) -> Self {
        LetterSet(self.0 | other.0)
    }

    /// Number of distinct letters in the set
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&l| self.contains(l))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, |set, b| set.with(b))
    }
}

/// Count of distinct letters across all `words`.
///
/// Order-independent; repeats within or across words count once.
pub fn coverage<'a, I>(words: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    words
        .into_iter()
        .fold(LetterSet::EMPTY, |set, w| set.union(LetterSet::from_word(w)))
        .len()
}
