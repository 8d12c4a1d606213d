use crate::data::Corpus;
use crate::data::Token;
use crate::data::WeightingTable;
use crate::restrictions::Constraints;
use crate::results::Candidate;
use crate::scorers::WeightedFrequencyScorer;
use crate::scorers::WordScorer;
use log::debug;
use std::cmp::Ordering;
use std::cmp::Reverse;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of suggestions returned by [`suggest_words`].
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// Indicates how to order the words that satisfy the constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RankingPolicy {
    /// Keep words in the order they appear in the corpus.
    #[default]
    CorpusOrder,
    /// Sort words alphabetically, ignoring case.
    Alphabetical,
    /// Sort words by their [`WeightedFrequencyScorer`] score, highest first.
    BestScore,
}

/// The result of a single pass over the corpus.
#[derive(Debug, Clone)]
pub struct FilteredWords<'a> {
    /// Words that satisfy every constraint, in corpus order.
    pub candidates: Vec<Token<'a>>,
    /// Letter weights over every word of the target length, whether or not it is a candidate.
    pub weights: WeightingTable,
    /// The number of words of the target length.
    pub num_words_of_length: usize,
}

/// Filters the given words by the constraints, and builds the [`WeightingTable`] for the
/// constraints' word length at the same time.
///
/// The weights cover all words of the target length, not just candidates, so that they reflect
/// the whole dictionary.
pub fn filter_words<'a, I>(words: I, constraints: &Constraints) -> FilteredWords<'a>
where
    I: IntoIterator<Item = Token<'a>>,
{
    let word_length = constraints.word_length();
    let mut weights = WeightingTable::new(word_length);
    let mut num_words_of_length = 0;
    let mut candidates = Vec::new();
    for word in words {
        if word.len() != word_length {
            continue;
        }
        num_words_of_length += 1;
        weights.accumulate(word.as_bytes());
        if constraints.is_satisfied_by(word.as_bytes()) {
            candidates.push(word);
        }
    }
    weights.normalize(num_words_of_length);
    debug!(
        "Found {} candidates among {} words of length {}.",
        candidates.len(),
        num_words_of_length,
        word_length
    );
    FilteredWords {
        candidates,
        weights,
        num_words_of_length,
    }
}

/// Orders the candidates according to the given policy. Ties keep their corpus order.
///
/// Scores are only computed for [`RankingPolicy::BestScore`].
pub fn rank_words<'a>(
    candidates: Vec<Token<'a>>,
    policy: RankingPolicy,
    weights: &WeightingTable,
) -> Vec<Candidate<'a>> {
    debug!("Ranking {} candidates by {:?}.", candidates.len(), policy);
    match policy {
        RankingPolicy::CorpusOrder => candidates.into_iter().map(Candidate::new).collect(),
        RankingPolicy::Alphabetical => {
            let mut candidates = candidates;
            candidates.sort_by(|a, b| compare_ignoring_case(a.as_bytes(), b.as_bytes()));
            candidates.into_iter().map(Candidate::new).collect()
        }
        RankingPolicy::BestScore => {
            rank_by_score(candidates, &WeightedFrequencyScorer::new(weights))
        }
    }
}

/// Scores each candidate once, then sorts them from highest to lowest score. Ties keep their
/// original order.
pub fn rank_by_score<'a, S: WordScorer>(
    candidates: Vec<Token<'a>>,
    scorer: &S,
) -> Vec<Candidate<'a>> {
    let mut scored: Vec<Candidate<'a>> = candidates
        .into_iter()
        .map(|word| Candidate::with_score(word, scorer.score_word(word.as_bytes())))
        .collect();
    scored.sort_by_key(|candidate| Reverse(candidate.score()));
    scored
}

/// Runs the full pipeline over the corpus, returning at most `n` ranked candidates.
///
/// ```
/// use wordle_helper::*;
///
/// let corpus = Corpus::from("apple applet apply aptly");
/// let words: Vec<String> = select_top_n_words(
///     &corpus,
///     &Constraints::default(),
///     RankingPolicy::BestScore,
///     2,
/// )
/// .iter()
/// .map(|candidate| candidate.to_string())
/// .collect();
///
/// assert_eq!(words, vec!["aptly", "apple"]);
/// ```
pub fn select_top_n_words<'a>(
    corpus: &'a Corpus,
    constraints: &Constraints,
    policy: RankingPolicy,
    n: usize,
) -> Vec<Candidate<'a>> {
    let filtered = filter_words(corpus.tokens(), constraints);
    let mut ranked = rank_words(filtered.candidates, policy, &filtered.weights);
    ranked.truncate(n);
    ranked
}

/// Runs the full pipeline over the corpus, returning at most [`DEFAULT_MAX_SUGGESTIONS`] ranked
/// candidates.
pub fn suggest_words<'a>(
    corpus: &'a Corpus,
    constraints: &Constraints,
    policy: RankingPolicy,
) -> Vec<Candidate<'a>> {
    select_top_n_words(corpus, constraints, policy, DEFAULT_MAX_SUGGESTIONS)
}

fn compare_ignoring_case(a: &[u8], b: &[u8]) -> Ordering {
    a.iter()
        .map(u8::to_ascii_lowercase)
        .cmp(b.iter().map(u8::to_ascii_lowercase))
}
