//! Dictionary index: corpus words playable on the box, bucketed by first
//! letter.
//!
//! Buckets keep corpus order and keep duplicates. The search relies on that
//! order for reproducible tie-breaking, so the index is immutable once built.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::letters::{fold_word, letter_index, LetterSet};
use crate::puzzle::BoxGraph;
use crate::validator::contained;

/// A contained word with its letter set precomputed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedWord {
    text: String,
    letters: LetterSet,
}

impl IndexedWord {
    fn new(text: String) -> Self {
        let letters = LetterSet::from_word(&text);
        Self { text, letters }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Number of distinct letters in the word
    pub fn unique_letters(&self) -> usize {
        self.letters.len()
    }

    pub fn first_letter(&self) -> u8 {
        self.text.as_bytes()[0]
    }

    pub fn last_letter(&self) -> u8 {
        self.text.as_bytes()[self.text.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }
}

/// Per-record outcome counts from building an index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadStats {
    pub records: usize,
    /// Discarded for holding a non-letter character
    pub non_letter: usize,
    /// Discarded for being empty
    pub empty: usize,
    /// Well-formed but not traceable on the box
    pub not_contained: usize,
    pub indexed: usize,
}

#[derive(Debug, Clone)]
pub struct DictionaryIndex {
    /// One bucket per letter a-z; only puzzle letters are ever non-empty
    buckets: Vec<Vec<IndexedWord>>,
    stats: LoadStats,
}

impl DictionaryIndex {
    fn empty() -> Self {
        Self {
            buckets: vec![Vec::new(); 26],
            stats: LoadStats::default(),
        }
    }

    /// Build an index from records that carry no line terminator
    pub fn from_records<I, S>(records: I, graph: &BoxGraph) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::empty();
        for record in records {
            index.add_record(Some(record.as_ref()), graph);
        }
        index.log_summary();
        index
    }

    /// Build an index by streaming a corpus, one word per line.
    ///
    /// `\n` and `\r\n` terminators are stripped. Records that are not valid
    /// UTF-8 necessarily hold a non-ascii byte and are discarded like any
    /// other non-letter record.
    pub fn from_reader<R: BufRead>(mut reader: R, graph: &BoxGraph) -> std::io::Result<Self> {
        let mut index = Self::empty();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let record = buf.strip_suffix(b"\n").unwrap_or(&buf);
            let record = record.strip_suffix(b"\r").unwrap_or(record);
            index.add_record(std::str::from_utf8(record).ok(), graph);
        }

        index.log_summary();
        Ok(index)
    }

    /// Open and index a dictionary file
    pub fn open(path: impl AsRef<Path>, graph: &BoxGraph) -> Result<Self> {
        let path = path.as_ref();
        let access = |source| Error::DictionaryAccess {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(access)?;
        info!(path = %path.display(), "reading dictionary");
        Self::from_reader(BufReader::new(file), graph).map_err(access)
    }

    fn add_record(&mut self, record: Option<&str>, graph: &BoxGraph) {
        self.stats.records += 1;

        let Some(word) = record.and_then(fold_word) else {
            debug!(record = ?record, "discarding record with non-letter characters");
            self.stats.non_letter += 1;
            return;
        };
        if word.is_empty() {
            self.stats.empty += 1;
            return;
        }
        if !contained(&word, graph) {
            self.stats.not_contained += 1;
            return;
        }

        let word = IndexedWord::new(word);
        // contained() guarantees a lowercase puzzle letter
        if let Some(bucket) = letter_index(word.first_letter()) {
            self.buckets[bucket].push(word);
            self.stats.indexed += 1;
        }
    }

    fn log_summary(&self) {
        let s = &self.stats;
        info!(
            records = s.records,
            indexed = s.indexed,
            non_letter = s.non_letter,
            empty = s.empty,
            not_contained = s.not_contained,
            "dictionary indexed"
        );
    }

    /// Words starting with `letter`, in corpus order
    pub fn bucket(&self, letter: u8) -> &[IndexedWord] {
        match letter_index(letter) {
            Some(i) => &self.buckets[i],
            None => &[],
        }
    }

    /// All indexed words: buckets in letter order, corpus order within each
    pub fn words(&self) -> impl Iterator<Item = &IndexedWord> {
        self.buckets.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.stats.indexed
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }
}
