//! End-to-end round tests driven by scripted input.
//!
//! Rounds run against an in-memory reader and writer, with the secret fixed
//! by constructing the round state directly, so every prompt and hint in a
//! full play-through can be checked.

use hunch::game::{score, Difficulty, RoundOutcome, RoundState, RoundSummary};
use hunch::session::play_round;
use std::io::Cursor;

fn fixed_round(secret: i32, difficulty: Difficulty) -> RoundState {
    RoundState {
        secret,
        attempts_left: difficulty.attempts(),
        previous_guess: None,
    }
}

/// Run one Novice round (1..50, 8 attempts) with a fixed secret against a
/// scripted input. Returns the summary, the final state, and the transcript.
fn run_novice_round(secret: i32, script: &str) -> (RoundSummary, RoundState, String) {
    let difficulty = Difficulty::Novice;
    let mut state = fixed_round(secret, difficulty);
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    let summary = play_round(difficulty, &mut state, &mut input, &mut output)
        .expect("in-memory I/O cannot fail");
    (summary, state, String::from_utf8(output).unwrap())
}

#[test]
fn test_win_on_second_guess() {
    let (summary, _, transcript) = run_novice_round(25, "40\n25\n");

    assert_eq!(summary.outcome, RoundOutcome::Won);
    assert_eq!(summary.attempts_used, 2);

    // First miss: direction and band, no trend on the first guess
    assert!(transcript.contains("Too high! Not far.\n"));
    assert!(!transcript.contains("(got"));
    assert!(!transcript.contains("(same distance)"));

    assert!(transcript.contains("Correct! The number was 25. You found it in 2 attempts."));

    // Replay score for this round: 8 - 2 + 1
    assert_eq!(score(8, summary.attempts_used, summary.won()), 7);
}

#[test]
fn test_invalid_input_consumes_no_attempts() {
    // "abc" is rejected, then three valid guesses walk toward the secret.
    let (summary, state, transcript) = run_novice_round(25, "abc\n10\n20\n30\n");

    // Input ends after the third valid guess, which quits the round.
    assert_eq!(summary.outcome, RoundOutcome::Quit);
    assert_eq!(summary.attempts_used, 3);
    assert_eq!(state.attempts_left, 5);

    assert!(transcript.contains("Please enter a whole number"));
    // 10: distance 15, first valid guess
    assert!(transcript.contains("Too low! Not far.\n"));
    // 20: distance 5, closer than 15
    assert!(transcript.contains("Too low! Very close! (got closer)"));
    // 30: distance 5 again, from the other side
    assert!(transcript.contains("Too high! Very close! (same distance)"));
}

#[test]
fn test_out_of_range_consumes_no_attempts() {
    let (summary, state, transcript) = run_novice_round(25, "0\n51\n25\n");

    assert_eq!(summary.outcome, RoundOutcome::Won);
    assert_eq!(summary.attempts_used, 1);
    assert_eq!(state.attempts_left, 7);
    assert_eq!(
        transcript
            .matches("Out of range! Pick a number between 1 and 50.")
            .count(),
        2
    );
}

#[test]
fn test_quit_reports_attempts_consumed_so_far() {
    let (summary, _, transcript) = run_novice_round(25, "10\nq\n");

    assert_eq!(summary.outcome, RoundOutcome::Quit);
    assert!(!summary.won());
    assert_eq!(summary.attempts_used, 1);
    assert!(transcript.contains("Left the round."));

    // Quits never score
    assert_eq!(score(8, summary.attempts_used, summary.won()), 0);
}

#[test]
fn test_quit_before_any_guess() {
    let (summary, _, _) = run_novice_round(25, "exit\n");
    assert_eq!(summary.outcome, RoundOutcome::Quit);
    assert_eq!(summary.attempts_used, 0);
}

#[test]
fn test_exhaustion_reveals_secret() {
    let (summary, state, transcript) = run_novice_round(25, "1\n2\n3\n4\n5\n6\n7\n8\n");

    assert_eq!(summary.outcome, RoundOutcome::Exhausted);
    assert_eq!(summary.attempts_used, 8);
    assert_eq!(state.attempts_left, 0);
    assert!(transcript.contains("Out of attempts. The number was 25."));
}

#[test]
fn test_remaining_attempts_shown_each_turn() {
    let (_, _, transcript) = run_novice_round(25, "10\n20\n25\n");

    assert!(transcript.contains("Attempts left: 8"));
    assert!(transcript.contains("Attempts left: 7"));
    assert!(transcript.contains("Attempts left: 6"));
    assert!(!transcript.contains("Attempts left: 5"));
}

#[test]
fn test_exact_hit_ends_round_immediately() {
    let (summary, state, transcript) = run_novice_round(42, "42\n");

    assert_eq!(summary.outcome, RoundOutcome::Won);
    assert_eq!(summary.attempts_used, 1);
    assert_eq!(state.attempts_left, 7);
    // A winning guess never produces a hint line
    assert!(!transcript.contains("Too high"));
    assert!(!transcript.contains("Too low"));
}

#[test]
fn test_negative_guesses_on_master_bounds() {
    let difficulty = Difficulty::Master;
    let mut state = fixed_round(-500, difficulty);
    let mut input = Cursor::new(b"500\n-480\n-500\n".to_vec());
    let mut output = Vec::new();
    let summary = play_round(difficulty, &mut state, &mut input, &mut output).unwrap();
    let transcript = String::from_utf8(output).unwrap();

    assert_eq!(summary.outcome, RoundOutcome::Won);
    assert_eq!(summary.attempts_used, 3);
    assert!(transcript.contains("Too high! Far.\n"));
    assert!(transcript.contains("Too high! Not far. (got closer)"));
}
