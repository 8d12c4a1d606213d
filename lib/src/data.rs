use crate::results::WordleError;
use std::fmt;
use std::fs::File;
use std::io;
use std::io::Read;
use std::iter::FusedIterator;
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of letters in the (ASCII) alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Returns the zero-based alphabet index of the given byte, ignoring case, or `None` if it is not
/// an ASCII letter.
pub(crate) fn letter_index(byte: u8) -> Option<usize> {
    if byte.is_ascii_alphabetic() {
        Some((byte.to_ascii_lowercase() - b'a') as usize)
    } else {
        None
    }
}

/// Matches C's `isspace`, which also counts vertical tab as whitespace.
fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b
}

/// The full contents of a dictionary: whitespace-separated words in any casing and any line
/// structure.
///
/// The corpus owns its bytes; every [`Token`] produced from it borrows from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    content: Vec<u8>,
}

impl Corpus {
    /// Reads a complete corpus from the given reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Corpus, WordleError> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;
        Ok(Corpus { content })
    }

    /// Reads a complete corpus from the file at the given path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Corpus, WordleError> {
        let path = path.as_ref();
        let read_error = |source: io::Error| WordleError::ReadWordList {
            path: path.to_path_buf(),
            source,
        };
        let mut file = File::open(path).map_err(read_error)?;
        let mut content = Vec::new();
        file.read_to_end(&mut content).map_err(read_error)?;
        Ok(Corpus { content })
    }

    /// Returns the words in this corpus, in order.
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens::new(&self.content)
    }

    /// The raw bytes of the corpus.
    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    /// Returns the number of bytes in the corpus.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` iff the corpus has no bytes.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl From<Vec<u8>> for Corpus {
    fn from(content: Vec<u8>) -> Self {
        Corpus { content }
    }
}

impl From<String> for Corpus {
    fn from(content: String) -> Self {
        Corpus {
            content: content.into_bytes(),
        }
    }
}

impl From<&str> for Corpus {
    fn from(content: &str) -> Self {
        Corpus {
            content: content.as_bytes().to_vec(),
        }
    }
}

/// A single word in a [`Corpus`], exactly as it was cased in the corpus.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a>(&'a [u8]);

impl<'a> Token<'a> {
    /// The raw bytes of the word, borrowed from the corpus.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// The length of the word in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` iff the word has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> From<&'a str> for Token<'a> {
    fn from(word: &'a str) -> Self {
        Token(word.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Token<'a> {
    fn from(word: &'a [u8]) -> Self {
        Token(word)
    }
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&String::from_utf8_lossy(self.0), f)
    }
}

impl<'a> fmt::Debug for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({:?})", String::from_utf8_lossy(self.0))
    }
}

/// Splits a buffer into whitespace-delimited [`Token`]s.
///
/// Each call to `next` skips any leading whitespace, then takes the longest run of
/// non-whitespace bytes. Once only whitespace remains, iteration ends.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    remaining: &'a [u8],
}

impl<'a> Tokens<'a> {
    /// Creates a tokenizer over the whole buffer.
    pub fn new(buffer: &'a [u8]) -> Tokens<'a> {
        Tokens { remaining: buffer }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let start = self
            .remaining
            .iter()
            .position(|byte| !is_space(*byte))
            .unwrap_or(self.remaining.len());
        let rest = &self.remaining[start..];
        if rest.is_empty() {
            self.remaining = rest;
            return None;
        }
        let end = rest
            .iter()
            .position(|byte| is_space(*byte))
            .unwrap_or(rest.len());
        let (word, rest) = rest.split_at(end);
        self.remaining = rest;
        Some(Token(word))
    }
}

impl<'a> FusedIterator for Tokens<'a> {}

/// Relative frequency of each letter at each position, over every corpus word of one length.
///
/// Build it by calling [`accumulate`](Self::accumulate) once per word of the target length, then
/// [`normalize`](Self::normalize) once with the number of accumulated words. After that it is only
/// read.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightingTable {
    /// Indexed by position, then by letter.
    weights_by_position: Vec<[f64; ALPHABET_SIZE]>,
}

impl WeightingTable {
    /// Creates an all-zero table for words of the given length.
    pub fn new(word_length: usize) -> WeightingTable {
        WeightingTable {
            weights_by_position: vec![[0.0; ALPHABET_SIZE]; word_length],
        }
    }

    /// The word length this table was built for.
    pub fn word_length(&self) -> usize {
        self.weights_by_position.len()
    }

    /// Counts each letter of the word at its position. Letters are counted case-insensitively, and
    /// anything that isn't an ASCII letter is skipped.
    ///
    /// Callers must only pass words of the table's length; extra letters are ignored.
    pub fn accumulate(&mut self, word: &[u8]) {
        for (weights, byte) in self.weights_by_position.iter_mut().zip(word) {
            if let Some(index) = letter_index(*byte) {
                weights[index] += 1.0;
            }
        }
    }

    /// Converts counts into relative frequencies by dividing by the number of accumulated words.
    ///
    /// If no words were accumulated the table is left as all zeros.
    pub fn normalize(&mut self, num_words: usize) {
        if num_words == 0 {
            return;
        }
        let total = num_words as f64;
        for weights in self.weights_by_position.iter_mut() {
            for weight in weights.iter_mut() {
                *weight /= total;
            }
        }
    }

    /// Returns the weight of the letter at the given alphabet index (0 for `a`) and position.
    ///
    /// Out-of-range positions have a weight of 0.
    pub fn weight(&self, letter_index: usize, position: usize) -> f64 {
        self.weights_by_position
            .get(position)
            .and_then(|weights| weights.get(letter_index))
            .copied()
            .unwrap_or(0.0)
    }

    /// Returns the weight of the given letter (case-insensitive) at the given position, or 0 if the
    /// byte isn't a letter.
    pub fn letter_weight(&self, letter: u8, position: usize) -> f64 {
        letter_index(letter).map_or(0.0, |index| self.weight(index, position))
    }
}
