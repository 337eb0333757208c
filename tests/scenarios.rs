use wordle_calibrator::core::{Pattern, Word};
use wordle_calibrator::persist::{parse_weights, write_simulation_log};
use wordle_calibrator::solver::entropy::{calculate_entropy, partition};
use wordle_calibrator::solver::{
    Context, Game, GuessSelector, OptimizerConfig, ScoreWeights, Session, SessionStatus,
    StrategyType, WeightOptimizer, filter_candidates, simulate_batch,
};
use wordle_calibrator::wordlists::parse_dictionary;

const DICTIONARY: &str = "word\ncrane\ncrate\ntrace\nslate\nirate\ngrate\nspeed\nabide\nerase\ncrone\n";

fn get_test_context() -> Context {
    Context::new(
        parse_dictionary(DICTIONARY),
        Default::default(),
        Default::default(),
    )
    .unwrap()
}

fn entropy_selector() -> GuessSelector {
    GuessSelector::new(ScoreWeights::default(), 1.5, StrategyType::Composite)
}

#[test]
fn test_dictionary_skips_header() {
    let ctx = get_test_context();
    assert_eq!(ctx.len(), 10);
    assert!(ctx.find("word").is_none());
    assert!(ctx.find("crone").is_some());
}

#[test]
fn test_crane_crone_trace_game() {
    let ctx = Context::from_words(&["crane", "crone", "trace"]).unwrap();
    let selector = entropy_selector();

    let record = Game::new(&ctx, &selector, "crone").unwrap().play();
    assert!(record.is_success());
    assert_eq!(record.guesses, vec!["crane", "crone"]);
    assert_eq!(record.attempts, 2);
}

#[test]
fn test_singleton_dictionary_solves_in_one() {
    let ctx = Context::from_words(&["abide"]).unwrap();
    let selector = entropy_selector();

    let record = Game::new(&ctx, &selector, "ABIDE").unwrap().play();
    assert_eq!(record.attempts, 1);
}

#[test]
fn test_every_answer_is_solved() {
    let ctx = get_test_context().with_opening_entropy();
    let selector = entropy_selector();

    for word in ctx.words() {
        let record = Game::new(&ctx, &selector, word.text()).unwrap().play();
        assert!(record.is_success(), "failed on {word}");
        assert_eq!(record.guesses.last().map(String::as_str), Some(word.text()));
    }
}

#[test]
fn test_session_matches_game() {
    let ctx = get_test_context();
    let selector = entropy_selector();
    let answer = ctx.find("grate").unwrap();

    let record = Game::new(&ctx, &selector, "grate").unwrap().play();

    let mut session = Session::new(&ctx, &selector);
    let mut played = Vec::new();
    loop {
        let guess = session.suggest().unwrap();
        played.push(guess.text().to_string());
        let feedback = Pattern::calculate(guess, answer).to_string();
        match session.submit(&feedback).unwrap() {
            SessionStatus::Continue => {}
            SessionStatus::Solved { guesses } => {
                assert_eq!(guesses, record.attempts);
                break;
            }
            SessionStatus::Exhausted(reason) => panic!("session exhausted: {reason}"),
        }
    }
    assert_eq!(played, record.guesses);
}

#[test]
fn test_filter_is_idempotent() {
    let ctx = get_test_context();
    let guess = Word::new("slate").unwrap();
    let answer = Word::new("grate").unwrap();
    let pattern = Pattern::calculate(&guess, &answer);

    let once = filter_candidates(&ctx.candidates(), &guess, pattern).unwrap();
    let twice = filter_candidates(&once, &guess, pattern).unwrap();
    assert_eq!(once, twice);
    assert!(once.contains(&&answer));
}

#[test]
fn test_partition_covers_candidates() {
    let ctx = get_test_context();
    let candidates = ctx.candidates();

    for guess in ctx.words() {
        let buckets = partition(guess, &candidates);
        assert_eq!(buckets.values().sum::<usize>(), candidates.len());
    }
}

#[test]
fn test_zero_entropy_when_guess_cannot_split() {
    let ctx = get_test_context();
    let candidates = ctx.candidates();

    let blank = Word::new("zzzzz").unwrap();
    assert!(calculate_entropy(&blank, &candidates).abs() < f64::EPSILON);

    let crane = Word::new("crane").unwrap();
    assert!(calculate_entropy(&crane, &candidates) > 0.0);
}

#[test]
fn test_simulation_log_lines() {
    let ctx = get_test_context();
    let selector = entropy_selector();
    let records = simulate_batch(&ctx, &selector, 8, 3);

    let mut buffer = Vec::new();
    write_simulation_log(&mut buffer, &records, 6).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "answer,guess1,guess2,guess3,guess4,guess5,guess6,attempts");
    assert!(lines[1..].iter().all(|line| line.split(',').count() == 8));
}

#[test]
fn test_optimizer_is_deterministic() {
    let ctx = get_test_context();
    let config = OptimizerConfig {
        step: 0.5,
        games_per_point: 6,
        seed: 11,
        strategy: StrategyType::Composite,
    };

    let first = WeightOptimizer::new(&ctx, config).unwrap().run();
    let second = WeightOptimizer::new(&ctx, config).unwrap().run();
    assert_eq!(first, second);
    assert_eq!(first.points.len(), 6);
    assert!(first.points.iter().all(|p| p.solved + p.failed == 6));

    let saved = wordle_calibrator::persist::format_weights(first.best.weights);
    assert_eq!(parse_weights(&saved).unwrap(), first.best.weights);
}

#[test]
fn test_cache_for_other_dictionary_is_not_trusted() {
    let fresh = get_test_context().with_opening_entropy();
    let stale = wordle_calibrator::persist::parse_entropy_cache("word,entropy\nzzzzz,9.0\n").unwrap();
    let ctx = get_test_context().with_opening_table(stale);
    let selector = entropy_selector();

    let fresh_record = Game::new(&fresh, &selector, "speed").unwrap().play();
    let record = Game::new(&ctx, &selector, "speed").unwrap().play();
    assert_eq!(record.guesses, fresh_record.guesses);
}
