//! Round orchestration and the outer session loop.
//!
//! All I/O goes through `BufRead`/`Write` parameters and all randomness
//! through an `Rng` parameter, so integration tests can drive complete
//! sessions with scripted input and a seeded generator.

use crate::game::{feedback_line, score, Difficulty, RoundOutcome, RoundState, RoundSummary};
use crate::input::{is_affirmative, parse_guess, GuessInput};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Print the difficulty menu and read keys until one matches the catalog.
/// Mismatches re-prompt without penalty. Returns `None` at end of input.
pub fn pick_difficulty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Difficulty>> {
    writeln!(output, "\n=== NUMBER HUNT ===")?;
    writeln!(output, "Pick a difficulty:")?;
    for difficulty in Difficulty::ALL {
        writeln!(
            output,
            "  {}) {}  [{}..{}]  Attempts: {}",
            difficulty.key(),
            difficulty.name(),
            difficulty.low(),
            difficulty.high(),
            difficulty.attempts()
        )?;
    }
    loop {
        write!(output, "Your choice (1-4): ")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if let Some(difficulty) = Difficulty::from_key(line.trim()) {
            return Ok(Some(difficulty));
        }
        writeln!(output, "Invalid choice. Enter a value from 1 to 4.")?;
    }
}

/// Read one line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Prompt for guesses until one parses and is in range. Rejected lines
/// re-prompt without touching round state. `None` means the player quit
/// (or input ended).
fn read_guess<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    low: i32,
    high: i32,
) -> io::Result<Option<i32>> {
    loop {
        write!(output, "Your guess: ")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse_guess(&line, low, high) {
            GuessInput::Value(value) => return Ok(Some(value)),
            GuessInput::Quit => return Ok(None),
            GuessInput::NotANumber => {
                writeln!(output, "Please enter a whole number (or q to quit).")?;
            }
            GuessInput::OutOfRange => {
                writeln!(
                    output,
                    "Out of range! Pick a number between {} and {}.",
                    low, high
                )?;
            }
        }
    }
}

/// Run one round over an existing round state.
///
/// Each turn: show remaining attempts, read a validated guess, spend the
/// attempt, then win or hint. Exhaustion reveals the secret.
pub fn play_round<R: BufRead, W: Write>(
    difficulty: Difficulty,
    state: &mut RoundState,
    input: &mut R,
    output: &mut W,
) -> io::Result<RoundSummary> {
    writeln!(
        output,
        "\n{} mode. I picked a number between {} and {}.",
        difficulty.name(),
        difficulty.low(),
        difficulty.high()
    )?;
    writeln!(
        output,
        "You have {} attempts. Type 'q' to quit.\n",
        state.attempts_left
    )?;

    while state.attempts_left > 0 {
        writeln!(output, "Attempts left: {}", state.attempts_left)?;
        let Some(guess) = read_guess(input, output, difficulty.low(), difficulty.high())? else {
            writeln!(output, "Left the round.")?;
            return Ok(RoundSummary {
                outcome: RoundOutcome::Quit,
                attempts_used: difficulty.attempts() - state.attempts_left,
            });
        };

        // The guess was validated in range, so it costs an attempt whether
        // or not it is correct.
        state.attempts_left -= 1;

        if guess == state.secret {
            let used = difficulty.attempts() - state.attempts_left;
            writeln!(
                output,
                "Correct! The number was {}. You found it in {} attempts.",
                state.secret, used
            )?;
            return Ok(RoundSummary {
                outcome: RoundOutcome::Won,
                attempts_used: used,
            });
        }

        writeln!(
            output,
            "{}\n",
            feedback_line(state.secret, guess, state.previous_guess)
        )?;
        state.previous_guess = Some(guess);
    }

    writeln!(output, "Out of attempts. The number was {}.", state.secret)?;
    Ok(RoundSummary {
        outcome: RoundOutcome::Exhausted,
        attempts_used: difficulty.attempts(),
    })
}

fn ask_replay<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "\nPlay again? (y/n): ")?;
    output.flush()?;
    Ok(read_line(input)?.is_some_and(|line| is_affirmative(&line)))
}

/// Outer loop: difficulty, round, score, replay. A fresh round state is
/// created per iteration; only the replay decision carries across rounds.
pub fn run_session<G: Rng, R: BufRead, W: Write>(
    rng: &mut G,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        let Some(difficulty) = pick_difficulty(input, output)? else {
            break;
        };
        let mut state = RoundState::new(difficulty, rng);
        let summary = play_round(difficulty, &mut state, input, output)?;
        if summary.won() {
            writeln!(
                output,
                "Score: {}",
                score(difficulty.attempts(), summary.attempts_used, true)
            )?;
        }
        if !ask_replay(input, output)? {
            break;
        }
    }
    writeln!(output, "See you!")?;
    Ok(())
}
