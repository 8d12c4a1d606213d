use crate::data::Token;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Indicates that an error occurred while configuring or running the word filter.
#[derive(Debug, thiserror::Error)]
pub enum WordleError {
    /// Indicates that the target word length was zero.
    #[error("word length must be at least 1")]
    InvalidWordLength,
    /// Indicates that a pattern's length did not match the target word length.
    #[error("pattern must be of length {expected} and only contain underscores and/or letters (got length {actual})")]
    PatternLength { expected: usize, actual: usize },
    /// Indicates that a pattern contained something other than letters and the `_` wildcard.
    #[error("pattern must be of length {word_length} and only contain underscores and/or letters (found {found:?})")]
    InvalidPatternCharacter { word_length: usize, found: char },
    /// Indicates that a list of letters contained a non-alphabetic character.
    #[error("letters must be alphabetic, found {0:?}")]
    UnsupportedCharacter(char),
    /// Wraps any I/O error encountered while reading the word list.
    #[error("could not read words: {0}")]
    Io(#[from] io::Error),
    /// Indicates that the word list at the given path could not be read.
    #[error("could not read file {}: {}", .path.display(), .source)]
    ReadWordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A word that survived filtering, in its final ranked position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    word: Token<'a>,
    score: Option<i64>,
}

impl<'a> Candidate<'a> {
    /// Wraps a word that has not been scored.
    pub fn new(word: Token<'a>) -> Candidate<'a> {
        Candidate { word, score: None }
    }

    /// Wraps a word along with its score.
    pub fn with_score(word: Token<'a>, score: i64) -> Candidate<'a> {
        Candidate {
            word,
            score: Some(score),
        }
    }

    /// The word, exactly as it appeared in the corpus.
    pub fn word(&self) -> Token<'a> {
        self.word
    }

    /// The word's score, if it was ranked by score.
    pub fn score(&self) -> Option<i64> {
        self.score
    }
}

impl<'a> fmt::Display for Candidate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.word, f)
    }
}
