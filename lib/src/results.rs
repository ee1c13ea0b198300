use std::fmt;
use std::io;
use thiserror::Error;

/// How a guess compares to the number being guessed.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub enum Outcome {
    /// The guess is smaller than the target.
    Low,
    /// The guess is larger than the target.
    High,
    Correct,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Outcome::Low => "low",
            Outcome::High => "high",
            Outcome::Correct => "correct",
        };
        f.write_str(tag)
    }
}

/// Indicates that an error occurred while setting up or playing a game.
#[derive(Error, Debug)]
pub enum GameError {
    /// The given text was empty or was not a base-10 integer.
    #[error("invalid input {0:?}: please enter a valid integer")]
    InvalidNumericInput(String),
    /// The lower bound was greater than the upper bound.
    #[error("invalid bounds: {low} is greater than {high}")]
    InvalidBounds { low: i64, high: i64 },
    /// A round must allow at least one attempt.
    #[error("the maximum number of attempts must be at least 1")]
    InvalidMaxAttempts,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Whether a single round was won or lost by the player.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum RoundResult {
    /// The player found the number, using the given number of attempts.
    Won { attempts: u32 },
    /// The player ran out of attempts. Provides the number that they were looking for.
    Lost { target: i64 },
}

/// Tallies the rounds played in one session.
#[derive(Debug, Default, Eq, PartialEq, Clone, Copy)]
pub struct SessionSummary {
    pub rounds_won: u32,
    pub rounds_lost: u32,
}

impl SessionSummary {
    /// Returns the total number of rounds that reached a result.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_won + self.rounds_lost
    }

    /// Records the result of a finished round.
    pub fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::Won { .. } => self.rounds_won += 1,
            RoundResult::Lost { .. } => self.rounds_lost += 1,
        }
    }
}
