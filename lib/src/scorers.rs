use crate::data::letter_index;
use crate::data::WeightingTable;
use crate::data::ALPHABET_SIZE;

/// Rough frequency of each letter in English text, indexed from `a`.
pub static LETTER_FREQUENCY: [u32; ALPHABET_SIZE] = [
    8, // a
    1, // b
    3, // c
    4, // d
    13, // e
    2, // f
    2, // g
    6, // h
    7, // i
    0, // j
    1, // k
    4, // l
    2, // m
    7, // n
    8, // o
    2, // p
    0, // q
    6, // r
    6, // s
    9, // t
    3, // u
    1, // v
    2, // w
    0, // x
    2, // y
    0, // z
];

/// Points subtracted for each extra occurrence of a repeated letter.
pub const REPEATED_LETTER_PENALTY: f64 = 2.0;

/// Gives words a score, where the maximum score indicates the best guess.
pub trait WordScorer {
    /// Determines a score for the given word. The higher the score, the better the guess.
    fn score_word(&self, word: &[u8]) -> i64;
}

/// Scores words by how common each of their letters is, weighted by how often that letter appears
/// in the same position across the dictionary.
///
/// * For each letter, score its English frequency (see [`LETTER_FREQUENCY`]) times its weight at
///   this position in the [`WeightingTable`].
/// * For each letter that appears more than once, subtract 2 points per extra occurrence, since
///   repeated letters reveal less about the answer.
///
/// The final score is truncated toward zero.
///
/// ```
/// use wordle_helper::Corpus;
/// use wordle_helper::Constraints;
/// use wordle_helper::filter_words;
/// use wordle_helper::scorers::WeightedFrequencyScorer;
/// use wordle_helper::scorers::WordScorer;
///
/// let corpus = Corpus::from("apple apply aptly");
/// let filtered = filter_words(corpus.tokens(), &Constraints::default());
/// let scorer = WeightedFrequencyScorer::new(&filtered.weights);
///
/// assert_eq!(scorer.score_word(b"aptly"), 18);
/// assert_eq!(scorer.score_word(b"apple"), 17);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WeightedFrequencyScorer<'a> {
    weights: &'a WeightingTable,
}

impl<'a> WeightedFrequencyScorer<'a> {
    /// Constructs a scorer that reads letter weights from the given table.
    pub fn new(weights: &'a WeightingTable) -> WeightedFrequencyScorer<'a> {
        WeightedFrequencyScorer { weights }
    }

    /// Computes the score without truncating it.
    pub fn raw_score(&self, word: &[u8]) -> f64 {
        let mut score = 0.0;
        let mut letter_counts = [0u32; ALPHABET_SIZE];
        for (position, byte) in word.iter().enumerate() {
            if let Some(index) = letter_index(*byte) {
                letter_counts[index] += 1;
                score += LETTER_FREQUENCY[index] as f64 * self.weights.weight(index, position);
            }
        }
        for count in letter_counts.iter().filter(|count| **count > 1) {
            score -= (count - 1) as f64 * REPEATED_LETTER_PENALTY;
        }
        score
    }
}

impl<'a> WordScorer for WeightedFrequencyScorer<'a> {
    fn score_word(&self, word: &[u8]) -> i64 {
        self.raw_score(word) as i64
    }
}
