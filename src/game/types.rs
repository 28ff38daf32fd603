//! Core data types: the difficulty catalog and per-round state.

use rand::Rng;

/// Difficulty levels for the number hunt. The catalog is fixed at four
/// entries, ordered by menu key, and never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Novice,
    Apprentice,
    Journeyman,
    Master,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Novice,
        Difficulty::Apprentice,
        Difficulty::Journeyman,
        Difficulty::Master,
    ];

    /// Menu key shown next to this difficulty.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Novice => "1",
            Self::Apprentice => "2",
            Self::Journeyman => "3",
            Self::Master => "4",
        }
    }

    /// Look up a difficulty by its menu key. The key set is closed, so
    /// anything that isn't an exact key is a miss.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.key() == key)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Apprentice => "Apprentice",
            Self::Journeyman => "Journeyman",
            Self::Master => "Master",
        }
    }

    /// Inclusive lower bound of the secret range.
    pub fn low(&self) -> i32 {
        match self {
            Self::Novice | Self::Apprentice | Self::Journeyman => 1,
            Self::Master => -999,
        }
    }

    /// Inclusive upper bound of the secret range.
    pub fn high(&self) -> i32 {
        match self {
            Self::Novice => 50,
            Self::Apprentice => 100,
            Self::Journeyman => 500,
            Self::Master => 999,
        }
    }

    /// Valid guesses allowed per round.
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Novice => 8,
            Self::Apprentice => 10,
            Self::Journeyman => 12,
            Self::Master => 14,
        }
    }
}

/// State for one round. Created when the round starts and discarded when it
/// ends; nothing here survives into the next round.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// The number the player is hunting. Drawn once, never re-rolled.
    pub secret: i32,
    /// Valid guesses remaining. Invalid input never touches this.
    pub attempts_left: u32,
    /// Most recent non-winning guess, for the trend hint. Absent until the
    /// first miss.
    pub previous_guess: Option<i32>,
}

impl RoundState {
    /// Start a round: draw the secret uniformly from the difficulty's range.
    pub fn new<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        Self {
            secret: rng.gen_range(difficulty.low()..=difficulty.high()),
            attempts_left: difficulty.attempts(),
            previous_guess: None,
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player guessed the secret.
    Won,
    /// The player left via a quit token (or end of input).
    Quit,
    /// All attempts were spent without a correct guess.
    Exhausted,
}

/// Result of one complete round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub outcome: RoundOutcome,
    /// Valid guesses consumed before the round ended. Equals the full cap
    /// on exhaustion and the count so far on a quit.
    pub attempts_used: u32,
}

impl RoundSummary {
    pub fn won(&self) -> bool {
        self.outcome == RoundOutcome::Won
    }
}
