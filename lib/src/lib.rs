//! Suggests Wordle guesses from a dictionary.
//!
//! Words are read from a [`Corpus`], filtered by a set of [`Constraints`] (word length, required
//! letters, forbidden letters, and a positional pattern), and then ordered by a
//! [`RankingPolicy`]. When ranking by score, each word is scored by how common its letters are at
//! their positions across all dictionary words of the same length.
//!
//! ```
//! use wordle_helper::*;
//!
//! let corpus = Corpus::from("crane brown trace plant Apple");
//! let constraints = Constraints::new(5)?
//!     .with_required_letters("a")?
//!     .with_forbidden_letters("n")?;
//!
//! let words: Vec<String> = suggest_words(&corpus, &constraints, RankingPolicy::Alphabetical)
//!     .iter()
//!     .map(|candidate| candidate.to_string())
//!     .collect();
//!
//! assert_eq!(words, vec!["Apple", "trace"]);
//! # Ok::<(), WordleError>(())
//! ```

mod data;
mod engine;
mod restrictions;
mod results;

pub mod scorers;

pub use data::Corpus;
pub use data::Token;
pub use data::Tokens;
pub use data::WeightingTable;
pub use engine::*;
pub use restrictions::Constraints;
pub use restrictions::DEFAULT_WORD_LENGTH;
pub use results::*;

/// Lower-level building blocks used by [`Constraints`] and the [`WeightingTable`].
pub mod details {
    pub use crate::data::ALPHABET_SIZE;
    pub use crate::restrictions::LetterCounts;
    pub use crate::restrictions::LetterSet;
    pub use crate::restrictions::Pattern;
    pub use crate::restrictions::PatternSlot;
    pub use crate::restrictions::PATTERN_WILDCARD;
}
