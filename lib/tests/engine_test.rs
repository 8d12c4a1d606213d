#[macro_use]
extern crate assert_matches;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use wordle_helper::details::ALPHABET_SIZE;
use wordle_helper::scorers::WeightedFrequencyScorer;
use wordle_helper::scorers::WordScorer;
use wordle_helper::*;

use std::io::Cursor;
use std::result::Result;

const SAMPLE_WORDS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/sample-words.txt");

fn to_strings(candidates: &[Candidate]) -> Vec<String> {
    candidates
        .iter()
        .map(|candidate| candidate.to_string())
        .collect()
}

#[test]
fn filter_words_length_only_keeps_corpus_order() {
    let corpus = Corpus::from("apple applet apply aptly");

    let filtered = filter_words(corpus.tokens(), &Constraints::default());

    let words: Vec<String> = filtered
        .candidates
        .iter()
        .map(|word| word.to_string())
        .collect();
    assert_eq!(words, vec!["apple", "apply", "aptly"]);
    assert_eq!(filtered.num_words_of_length, 3);
}

#[test]
fn suggest_words_corpus_order() {
    let corpus = Corpus::from("apple applet apply aptly");

    let suggestions = suggest_words(
        &corpus,
        &Constraints::default(),
        RankingPolicy::CorpusOrder,
    );

    assert_eq!(to_strings(&suggestions), vec!["apple", "apply", "aptly"]);
}

#[test]
fn suggest_words_forbidden_letter_present_in_all_words_is_empty() -> Result<(), WordleError> {
    let corpus = Corpus::from("crane brown trace");
    let constraints = Constraints::new(5)?
        .with_required_letters("a")?
        .with_forbidden_letters("e")?
        .with_pattern("_____")?;

    let suggestions = suggest_words(&corpus, &constraints, RankingPolicy::CorpusOrder);

    assert!(suggestions.is_empty());
    Ok(())
}

#[test]
fn suggest_words_all_constraints() -> Result<(), WordleError> {
    let corpus = Corpus::from("crane brown trace");
    let constraints = Constraints::new(5)?
        .with_required_letters("a")?
        .with_forbidden_letters("n")?
        .with_pattern("_____")?;

    let suggestions = suggest_words(&corpus, &constraints, RankingPolicy::CorpusOrder);

    assert_eq!(to_strings(&suggestions), vec!["trace"]);
    Ok(())
}

#[test]
fn suggest_words_best_score() {
    let corpus = Corpus::from("apple applet apply aptly");

    let suggestions = suggest_words(&corpus, &Constraints::default(), RankingPolicy::BestScore);

    assert_eq!(to_strings(&suggestions), vec!["aptly", "apple", "apply"]);
    assert_eq!(
        suggestions
            .iter()
            .map(|candidate| candidate.score())
            .collect::<Vec<_>>(),
        vec![Some(18), Some(17), Some(14)]
    );
}

#[test]
fn suggest_words_alphabetical_ignores_case() {
    let corpus = Corpus::from("trace Crane brown Apple");

    let suggestions = suggest_words(
        &corpus,
        &Constraints::default(),
        RankingPolicy::Alphabetical,
    );

    assert_eq!(
        to_strings(&suggestions),
        vec!["Apple", "brown", "Crane", "trace"]
    );
}

#[test]
fn suggest_words_truncates_to_ten() {
    let words: Vec<String> = (0..15)
        .map(|index| format!("word{}", (b'a' + index) as char))
        .collect();
    let corpus = Corpus::from(words.join("\n"));

    let suggestions = suggest_words(
        &corpus,
        &Constraints::default(),
        RankingPolicy::CorpusOrder,
    );

    assert_eq!(suggestions.len(), DEFAULT_MAX_SUGGESTIONS);
    assert_eq!(to_strings(&suggestions), words[..10].to_vec());
}

#[test]
fn select_top_n_words_returns_all_when_fewer_than_n() {
    let corpus = Corpus::from("crane trace");

    let suggestions = select_top_n_words(
        &corpus,
        &Constraints::default(),
        RankingPolicy::Alphabetical,
        10,
    );

    assert_eq!(to_strings(&suggestions), vec!["crane", "trace"]);
}

#[test]
fn suggest_words_no_words_of_length() -> Result<(), WordleError> {
    let corpus = Corpus::from("apple crane");

    let filtered = filter_words(corpus.tokens(), &Constraints::new(7)?);
    let suggestions = suggest_words(&corpus, &Constraints::new(7)?, RankingPolicy::BestScore);

    assert_eq!(filtered.num_words_of_length, 0);
    assert_eq!(filtered.weights, WeightingTable::new(7));
    assert!(suggestions.is_empty());
    Ok(())
}

#[test]
fn filter_words_weights_ignore_non_length_constraints() -> Result<(), WordleError> {
    let corpus = Corpus::from("crane brown trace");
    let unconstrained = filter_words(corpus.tokens(), &Constraints::default());

    let constrained = filter_words(
        corpus.tokens(),
        &Constraints::new(5)?
            .with_required_letters("w")?
            .with_pattern("b____")?,
    );

    assert_eq!(constrained.candidates.len(), 1);
    assert_eq!(constrained.weights, unconstrained.weights);
    Ok(())
}

#[test]
fn filter_words_weights_sum_to_one_per_position() -> Result<(), WordleError> {
    let corpus = Corpus::from_path(SAMPLE_WORDS_PATH)?;

    let filtered = filter_words(corpus.tokens(), &Constraints::default());

    assert_eq!(filtered.num_words_of_length, 41);
    for position in 0..5 {
        let sum: f64 = (0..ALPHABET_SIZE)
            .map(|letter| filtered.weights.weight(letter, position))
            .sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
    Ok(())
}

#[test]
fn alphabetical_ranking_ignores_corpus_order() -> Result<(), WordleError> {
    let corpus = Corpus::from_path(SAMPLE_WORDS_PATH)?;
    let expected = to_strings(&select_top_n_words(
        &corpus,
        &Constraints::default(),
        RankingPolicy::Alphabetical,
        usize::MAX,
    ));

    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..5 {
        let mut words: Vec<String> = corpus.tokens().map(|word| word.to_string()).collect();
        words.shuffle(&mut rng);
        let shuffled = Corpus::from(words.join(" "));

        let actual = to_strings(&select_top_n_words(
            &shuffled,
            &Constraints::default(),
            RankingPolicy::Alphabetical,
            usize::MAX,
        ));

        assert_eq!(actual, expected);
    }
    Ok(())
}

#[test]
fn best_score_ranking_is_sorted_permutation_of_candidates() -> Result<(), WordleError> {
    let corpus = Corpus::from_path(SAMPLE_WORDS_PATH)?;
    let constraints = Constraints::new(5)?.with_required_letters("a")?;
    let filtered = filter_words(corpus.tokens(), &constraints);
    let scorer = WeightedFrequencyScorer::new(&filtered.weights);

    let ranked = rank_words(
        filtered.candidates.clone(),
        RankingPolicy::BestScore,
        &filtered.weights,
    );

    assert_eq!(ranked.len(), filtered.candidates.len());
    for pair in ranked.windows(2) {
        assert!(pair[0].score() >= pair[1].score());
    }
    for candidate in ranked.iter() {
        assert!(filtered.candidates.contains(&candidate.word()));
        assert_eq!(
            candidate.score(),
            Some(scorer.score_word(candidate.word().as_bytes()))
        );
    }
    Ok(())
}

#[test]
fn corpus_from_reader_then_filter() -> Result<(), WordleError> {
    let corpus = Corpus::from_reader(Cursor::new("\n\n  geese\teerie\nCRANE  "))?;
    let constraints = Constraints::new(5)?.with_required_letters("ee")?;

    let suggestions = suggest_words(&corpus, &constraints, RankingPolicy::CorpusOrder);

    assert_eq!(to_strings(&suggestions), vec!["geese", "eerie"]);
    Ok(())
}

#[test]
fn corpus_from_missing_path_fails() {
    assert_matches!(
        Corpus::from_path("no/such/words.txt"),
        Err(WordleError::ReadWordList { .. })
    );
}
