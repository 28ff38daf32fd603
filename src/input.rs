//! Line-input parsing for the game prompts.
//!
//! Parsing is separated from terminal reading so the rules (quit tokens,
//! range checks, replay matching) stay testable without a terminal.

/// Quit tokens, matched case-insensitively after trimming.
pub const QUIT_TOKENS: [&str; 3] = ["q", "quit", "exit"];

/// One parsed guess line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessInput {
    /// A valid in-range guess.
    Value(i32),
    /// The player asked to leave the round.
    Quit,
    /// Not an integer at all.
    NotANumber,
    /// An integer outside the difficulty's bounds.
    OutOfRange,
}

/// Parse one raw guess line against inclusive bounds. Only `Value` may
/// consume an attempt; every other variant leaves round state untouched.
pub fn parse_guess(raw: &str, low: i32, high: i32) -> GuessInput {
    let normalized = raw.trim().to_lowercase();
    if QUIT_TOKENS.contains(&normalized.as_str()) {
        return GuessInput::Quit;
    }
    match normalized.parse::<i32>() {
        Ok(value) if value < low || value > high => GuessInput::OutOfRange,
        Ok(value) => GuessInput::Value(value),
        Err(_) => GuessInput::NotANumber,
    }
}

/// Replay answers: anything whose normalized form starts with 'y' is a yes,
/// everything else (including empty input) is a no.
pub fn is_affirmative(raw: &str) -> bool {
    raw.trim().to_lowercase().starts_with('y')
}
