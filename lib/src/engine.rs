use crate::input::*;
use crate::results::*;
use crate::target::*;
use log::{debug, trace};
use std::cmp::Ordering;
use std::io::{BufRead, Write};

/// The default number of guesses the player gets in each round.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 7;

/// Determines how `guess` compares to `target`.
pub fn check_guess(guess: i64, target: i64) -> Outcome {
    let outcome = match guess.cmp(&target) {
        Ordering::Less => Outcome::Low,
        Ordering::Greater => Outcome::High,
        Ordering::Equal => Outcome::Correct,
    };
    trace!("Guess {} against {}: {}", guess, target, outcome);
    outcome
}

/// The fixed rules for every round in a game.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct GameConfig {
    bounds: Bounds,
    max_attempts: u32,
}

impl GameConfig {
    /// Constructs a new config, or fails if fewer than one attempt is allowed.
    pub fn new(bounds: Bounds, max_attempts: u32) -> Result<GameConfig, GameError> {
        if max_attempts == 0 {
            return Err(GameError::InvalidMaxAttempts);
        }
        Ok(GameConfig {
            bounds,
            max_attempts,
        })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            bounds: Bounds::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Where a [`Game`] is in its lifecycle.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum GameState {
    /// A target will be chosen on the next step.
    NewRound,
    /// Waiting for the player to guess. `attempt` is the one-based index of the next guess.
    AwaitingGuess { target: i64, attempt: u32 },
    RoundWon { attempts: u32 },
    RoundLost { target: i64 },
    /// Waiting for the player to say whether they want another round.
    AwaitingReplay,
    /// The game is over. Further steps do nothing.
    Terminated,
}

/// An interactive guessing game, which reads the player's input from `reader` and writes
/// prompts and feedback to `writer`.
pub struct Game<R, W, S> {
    config: GameConfig,
    reader: R,
    writer: W,
    source: S,
    state: GameState,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write, S: RandomSource> Game<R, W, S> {
    pub fn new(config: GameConfig, reader: R, writer: W, source: S) -> Game<R, W, S> {
        Game {
            config,
            reader,
            writer,
            source,
            state: GameState::NewRound,
            summary: SessionSummary::default(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the results of all the rounds finished so far.
    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Releases the writer, for example to inspect what was written.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Plays rounds until the player declines to play again or their input ends.
    pub fn play(&mut self) -> Result<SessionSummary, GameError> {
        writeln!(self.writer, "Welcome to the Number Guessing Game!")?;
        while self.state != GameState::Terminated {
            self.step()?;
        }
        Ok(self.summary)
    }

    /// Plays one round from a fresh target until it is won or lost.
    ///
    /// Returns `None` if the player's input ended before the round finished.
    pub fn play_round(&mut self) -> Result<Option<RoundResult>, GameError> {
        self.state = GameState::NewRound;
        loop {
            match self.step()? {
                GameState::RoundWon { attempts } => return Ok(Some(RoundResult::Won { attempts })),
                GameState::RoundLost { target } => return Ok(Some(RoundResult::Lost { target })),
                GameState::Terminated => return Ok(None),
                _ => {}
            }
        }
    }

    /// Advances the game by a single transition, and returns the new state.
    pub fn step(&mut self) -> Result<GameState, GameError> {
        match self.state {
            GameState::NewRound => {
                let bounds = self.config.bounds;
                let target = choose_target_with(bounds, &mut self.source);
                writeln!(
                    self.writer,
                    "I'm thinking of a number between {} and {}. You have {} attempts.",
                    bounds.low(),
                    bounds.high(),
                    self.config.max_attempts
                )?;
                self.state = GameState::AwaitingGuess { target, attempt: 1 };
            }
            GameState::AwaitingGuess { target, attempt } => {
                write!(
                    self.writer,
                    "Attempt {}/{}. Enter your guess: ",
                    attempt, self.config.max_attempts
                )?;
                self.writer.flush()?;
                match self.read_line()? {
                    None => self.terminate()?,
                    Some(line) => match parse_guess(&line) {
                        Ok(guess) => self.state = self.evaluate(target, attempt, guess)?,
                        Err(err) => {
                            debug!("Rejected guess: {}", err);
                            writeln!(self.writer, "Please enter a valid integer.")?;
                        }
                    },
                }
            }
            GameState::RoundWon { .. } | GameState::RoundLost { .. } => {
                self.state = GameState::AwaitingReplay;
            }
            GameState::AwaitingReplay => {
                write!(self.writer, "Play again? (y/n): ")?;
                self.writer.flush()?;
                match self.read_line()? {
                    Some(reply) if parse_replay(&reply) => self.state = GameState::NewRound,
                    _ => self.terminate()?,
                }
            }
            GameState::Terminated => {}
        }
        Ok(self.state)
    }

    fn evaluate(&mut self, target: i64, attempt: u32, guess: i64) -> Result<GameState, GameError> {
        let next = match check_guess(guess, target) {
            Outcome::Correct => {
                writeln!(
                    self.writer,
                    "Correct in {} {}! You guessed the number.",
                    attempt,
                    pluralize(attempt, "attempt")
                )?;
                GameState::RoundWon { attempts: attempt }
            }
            outcome => {
                let hint = if outcome == Outcome::Low {
                    "Too low."
                } else {
                    "Too high."
                };
                writeln!(self.writer, "{}", hint)?;
                if attempt >= self.config.max_attempts {
                    writeln!(self.writer, "Out of attempts! The number was {}.", target)?;
                    GameState::RoundLost { target }
                } else {
                    GameState::AwaitingGuess {
                        target,
                        attempt: attempt + 1,
                    }
                }
            }
        };
        match next {
            GameState::RoundWon { attempts } => self.finish_round(RoundResult::Won { attempts }),
            GameState::RoundLost { target } => self.finish_round(RoundResult::Lost { target }),
            _ => {}
        }
        Ok(next)
    }

    fn finish_round(&mut self, result: RoundResult) {
        debug!("Round finished: {:?}", result);
        self.summary.record(result);
    }

    fn terminate(&mut self) -> Result<(), GameError> {
        writeln!(self.writer, "Thanks for playing!")?;
        let played = self.summary.rounds_played();
        if played > 0 {
            writeln!(
                self.writer,
                "You won {} of {} {}.",
                self.summary.rounds_won,
                played,
                pluralize(played, "round")
            )?;
        }
        self.state = GameState::Terminated;
        Ok(())
    }

    /// Reads one line of input, or `None` at the end of the input.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so that such a line
    /// is treated like any other unparseable reply.
    fn read_line(&mut self) -> Result<Option<String>, GameError> {
        let mut buffer = Vec::new();
        if self.reader.read_until(b'\n', &mut buffer)? == 0 {
            debug!("Reached the end of the input");
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buffer).into_owned()))
    }
}

fn pluralize(count: u32, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}
