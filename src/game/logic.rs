//! Pure hint and scoring functions.
//!
//! Everything here is a function of its arguments only, so the session loop
//! and the tests exercise exactly the same code.

/// Proximity band for a guess, by absolute distance to the secret.
/// Bands are checked in ascending order; the first match wins.
pub fn proximity_hint(secret: i32, guess: i32) -> &'static str {
    match secret.abs_diff(guess) {
        0 => "Exact hit!",
        1..=2 => "Extremely close!",
        3..=5 => "Very close!",
        6..=10 => "Close.",
        11..=25 => "Not far.",
        _ => "Far.",
    }
}

/// Direction of a miss.
pub fn direction_hint(secret: i32, guess: i32) -> &'static str {
    if guess > secret {
        "Too high!"
    } else {
        "Too low!"
    }
}

/// Trend relative to the previous guess: did the player get closer?
/// Empty on the first guess of a round. Winning guesses never reach this
/// since the round ends before any trend comparison.
pub fn trend_hint(secret: i32, guess: i32, previous_guess: Option<i32>) -> &'static str {
    let Some(prev) = previous_guess else {
        return "";
    };
    let now = secret.abs_diff(guess);
    let before = secret.abs_diff(prev);
    if now < before {
        "(got closer)"
    } else if now > before {
        "(got farther)"
    } else {
        "(same distance)"
    }
}

/// Full feedback line for a non-winning guess: direction, proximity band,
/// and trend, with the trend dropped when there is no previous guess.
pub fn feedback_line(secret: i32, guess: i32, previous_guess: Option<i32>) -> String {
    let mut line = format!(
        "{} {}",
        direction_hint(secret, guess),
        proximity_hint(secret, guess)
    );
    let trend = trend_hint(secret, guess, previous_guess);
    if !trend.is_empty() {
        line.push(' ');
        line.push_str(trend);
    }
    line
}

/// Replay score for a finished round: one point per unspent attempt plus
/// one, zero on any non-win.
pub fn score(attempts: u32, used: u32, won: bool) -> u32 {
    if !won {
        return 0;
    }
    (attempts + 1).saturating_sub(used)
}
