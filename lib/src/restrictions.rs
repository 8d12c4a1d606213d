use crate::data::letter_index;
use crate::data::ALPHABET_SIZE;
use crate::results::WordleError;
use std::result::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The word length used when none is given.
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// The pattern character that matches any letter.
pub const PATTERN_WILDCARD: char = '_';

/// A case-insensitive multiset of letters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterCounts {
    counts: [u32; ALPHABET_SIZE],
}

impl LetterCounts {
    /// Parses a list of letters, such as `"aab"`. Fails if any character is not an ASCII letter.
    pub fn from_letters(letters: &str) -> Result<LetterCounts, WordleError> {
        let mut counts = LetterCounts::default();
        for letter in letters.chars() {
            counts.counts[ascii_letter_index(letter)?] += 1;
        }
        Ok(counts)
    }

    /// Counts the letters in the given word, skipping anything that isn't an ASCII letter.
    pub fn from_word(word: &[u8]) -> LetterCounts {
        let mut counts = LetterCounts::default();
        for index in word.iter().filter_map(|byte| letter_index(*byte)) {
            counts.counts[index] += 1;
        }
        counts
    }

    /// Returns how many times the given letter occurs.
    pub fn count(&self, letter: char) -> u32 {
        ascii_letter_index(letter).map_or(0, |index| self.counts[index])
    }

    /// Returns `true` iff every letter occurs in `other` at least as many times as it does here.
    pub fn is_contained_in(&self, other: &LetterCounts) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(required, available)| available >= required)
    }

    /// Returns `true` iff no letters are counted.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|count| *count == 0)
    }
}

/// A case-insensitive set of letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterSet {
    /// Bit `i` is set iff the `i`th letter of the alphabet is in the set.
    letters: u32,
}

impl LetterSet {
    /// Parses a list of letters, such as `"xyz"`. Fails if any character is not an ASCII letter.
    pub fn from_letters(letters: &str) -> Result<LetterSet, WordleError> {
        let mut set = LetterSet::default();
        for letter in letters.chars() {
            set.letters |= 1u32 << ascii_letter_index(letter)?;
        }
        Ok(set)
    }

    /// Returns `true` iff the given byte is a letter in this set, ignoring case.
    pub fn contains(&self, letter: u8) -> bool {
        letter_index(letter).map_or(false, |index| self.letters & (1u32 << index) != 0)
    }

    /// Returns `true` iff any byte of the word is a letter in this set.
    pub fn is_in_word(&self, word: &[u8]) -> bool {
        word.iter().any(|byte| self.contains(*byte))
    }

    /// Returns `true` iff the set has no letters.
    pub fn is_empty(&self) -> bool {
        self.letters == 0
    }
}

/// One position in a [`Pattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PatternSlot {
    /// Matches any byte.
    Any,
    /// Matches exactly this byte. Case matters.
    Letter(u8),
}

/// Known letter placements, such as `"_r__e"`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "PatternRepr")
)]
pub struct Pattern {
    slots: Vec<PatternSlot>,
}

impl Pattern {
    /// Parses a pattern of ASCII letters and `_` wildcards.
    pub fn parse(pattern: &str) -> Result<Pattern, WordleError> {
        let word_length = pattern.chars().count();
        let slots = pattern
            .chars()
            .map(|letter| match letter {
                PATTERN_WILDCARD => Ok(PatternSlot::Any),
                _ if letter.is_ascii_alphabetic() => Ok(PatternSlot::Letter(letter as u8)),
                _ => Err(WordleError::InvalidPatternCharacter {
                    word_length,
                    found: letter,
                }),
            })
            .collect::<Result<Vec<PatternSlot>, WordleError>>()?;
        Ok(Pattern { slots })
    }

    /// The number of positions in the pattern.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` iff the pattern has no positions.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The pattern's positions, in order.
    pub fn slots(&self) -> &[PatternSlot] {
        &self.slots
    }

    /// Returns `true` iff the word has the pattern's length and every literal slot equals the
    /// word's byte at that position exactly.
    pub fn matches(&self, word: &[u8]) -> bool {
        word.len() == self.slots.len()
            && self
                .slots
                .iter()
                .zip(word)
                .all(|(slot, byte)| match slot {
                    PatternSlot::Any => true,
                    PatternSlot::Letter(letter) => letter == byte,
                })
    }
}

/// Defines the restrictions that a candidate word must adhere to.
///
/// ```
/// use wordle_helper::Constraints;
///
/// let constraints = Constraints::new(5)?
///     .with_required_letters("a")?
///     .with_forbidden_letters("n")?
///     .with_pattern("tr___")?;
///
/// assert!(constraints.is_satisfied_by(b"trace"));
/// assert!(!constraints.is_satisfied_by(b"crane"));
/// assert!(!constraints.is_satisfied_by(b"traced"));
/// # Ok::<(), wordle_helper::WordleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "ConstraintsRepr")
)]
pub struct Constraints {
    word_length: usize,
    required_letters: Option<LetterCounts>,
    forbidden_letters: Option<LetterSet>,
    pattern: Option<Pattern>,
}

impl Constraints {
    /// Creates constraints that only restrict the word length.
    pub fn new(word_length: usize) -> Result<Constraints, WordleError> {
        if word_length == 0 {
            return Err(WordleError::InvalidWordLength);
        }
        Ok(Constraints {
            word_length,
            required_letters: None,
            forbidden_letters: None,
            pattern: None,
        })
    }

    /// Requires each of the given letters, counting repeats: `"ee"` requires two `e`s.
    ///
    /// An empty string adds no restriction.
    pub fn with_required_letters(mut self, letters: &str) -> Result<Constraints, WordleError> {
        let counts = LetterCounts::from_letters(letters)?;
        self.required_letters = if counts.is_empty() {
            None
        } else {
            Some(counts)
        };
        Ok(self)
    }

    /// Forbids all of the given letters. An empty string adds no restriction.
    pub fn with_forbidden_letters(mut self, letters: &str) -> Result<Constraints, WordleError> {
        let set = LetterSet::from_letters(letters)?;
        self.forbidden_letters = if set.is_empty() { None } else { Some(set) };
        Ok(self)
    }

    /// Requires words to match the given pattern, which must have the target word length.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Constraints, WordleError> {
        let actual = pattern.chars().count();
        if actual != self.word_length {
            return Err(WordleError::PatternLength {
                expected: self.word_length,
                actual,
            });
        }
        self.pattern = Some(Pattern::parse(pattern)?);
        Ok(self)
    }

    /// The length every candidate word must have.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// The letters a word must contain, if any are required.
    pub fn required_letters(&self) -> Option<&LetterCounts> {
        self.required_letters.as_ref()
    }

    /// The letters a word must not contain, if any are forbidden.
    pub fn forbidden_letters(&self) -> Option<&LetterSet> {
        self.forbidden_letters.as_ref()
    }

    /// The known letter placements, if any.
    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// Returns `true` iff the given word satisfies these restrictions.
    ///
    /// Checks run cheapest first: length, required letters, forbidden letters, then the pattern.
    pub fn is_satisfied_by(&self, word: &[u8]) -> bool {
        word.len() == self.word_length
            && self
                .required_letters
                .as_ref()
                .map_or(true, |required| {
                    required.is_contained_in(&LetterCounts::from_word(word))
                })
            && self
                .forbidden_letters
                .map_or(true, |forbidden| !forbidden.is_in_word(word))
            && self
                .pattern
                .as_ref()
                .map_or(true, |pattern| pattern.matches(word))
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Constraints {
            word_length: DEFAULT_WORD_LENGTH,
            required_letters: None,
            forbidden_letters: None,
            pattern: None,
        }
    }
}

/// Unvalidated form of [`Pattern`], checked on deserialization.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PatternRepr {
    slots: Vec<PatternSlot>,
}

#[cfg(feature = "serde")]
impl TryFrom<PatternRepr> for Pattern {
    type Error = WordleError;

    fn try_from(repr: PatternRepr) -> Result<Pattern, WordleError> {
        let word_length = repr.slots.len();
        for slot in repr.slots.iter() {
            if let PatternSlot::Letter(letter) = slot {
                if !letter.is_ascii_alphabetic() {
                    return Err(WordleError::InvalidPatternCharacter {
                        word_length,
                        found: *letter as char,
                    });
                }
            }
        }
        Ok(Pattern { slots: repr.slots })
    }
}

/// Unvalidated form of [`Constraints`], checked on deserialization.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ConstraintsRepr {
    word_length: usize,
    required_letters: Option<LetterCounts>,
    forbidden_letters: Option<LetterSet>,
    pattern: Option<Pattern>,
}

#[cfg(feature = "serde")]
impl TryFrom<ConstraintsRepr> for Constraints {
    type Error = WordleError;

    fn try_from(repr: ConstraintsRepr) -> Result<Constraints, WordleError> {
        let mut constraints = Constraints::new(repr.word_length)?;
        if let Some(pattern) = repr.pattern {
            if pattern.len() != constraints.word_length {
                return Err(WordleError::PatternLength {
                    expected: constraints.word_length,
                    actual: pattern.len(),
                });
            }
            constraints.pattern = Some(pattern);
        }
        constraints.required_letters = repr.required_letters.filter(|counts| !counts.is_empty());
        constraints.forbidden_letters = repr.forbidden_letters.filter(|set| !set.is_empty());
        Ok(constraints)
    }
}

fn ascii_letter_index(letter: char) -> Result<usize, WordleError> {
    if letter.is_ascii_alphabetic() {
        Ok((letter.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        Err(WordleError::UnsupportedCharacter(letter))
    }
}
