#[macro_use]
extern crate assert_matches;

use guessing_game::*;
use std::io::Cursor;

fn fixed_target(target: i64) -> impl RandomSource {
    move |_: i64, _: i64| -> i64 { target }
}

fn play_with_input(target: i64, input: &str) -> Result<(SessionSummary, String), GameError> {
    let mut game = Game::new(
        GameConfig::default(),
        Cursor::new(input.to_string()),
        Vec::new(),
        fixed_target(target),
    );
    let summary = game.play()?;
    let transcript = String::from_utf8(game.into_writer()).unwrap();
    Ok((summary, transcript))
}

#[test]
fn play_reports_direction_then_success() -> Result<(), GameError> {
    let (summary, transcript) = play_with_input(50, "10\n90\n50\nn\n")?;

    let too_low = transcript.find("Too low.").unwrap();
    let too_high = transcript.find("Too high.").unwrap();
    let correct = transcript.find("Correct in 3 attempts").unwrap();
    assert!(too_low < too_high && too_high < correct);
    assert_eq!(
        summary,
        SessionSummary {
            rounds_won: 1,
            rounds_lost: 0
        }
    );
    Ok(())
}

#[test]
fn play_reveals_target_when_out_of_attempts() -> Result<(), GameError> {
    let input = "1\n".repeat(7) + "n\n";
    let (summary, transcript) = play_with_input(50, &input)?;

    assert!(transcript.contains("Out of attempts! The number was 50."));
    assert_eq!(transcript.matches("Enter your guess").count(), 7);
    assert_eq!(transcript.matches("Too low.").count(), 7);
    assert!(!transcript.contains("Attempt 8/7"));
    assert_eq!(summary.rounds_lost, 1);
    Ok(())
}

#[test]
fn play_declining_replay_terminates() -> Result<(), GameError> {
    let (summary, transcript) = play_with_input(50, "50\nn\n")?;

    assert_eq!(transcript.matches("I'm thinking of a number").count(), 1);
    assert!(transcript.ends_with("Thanks for playing!\nYou won 1 of 1 round.\n"));
    assert_eq!(summary.rounds_played(), 1);
    Ok(())
}

#[test]
fn play_accepting_replay_starts_new_round() -> Result<(), GameError> {
    let (summary, transcript) = play_with_input(50, "50\nYes\n40\n50\nno\n")?;

    assert_eq!(transcript.matches("I'm thinking of a number").count(), 2);
    assert!(transcript.contains("Correct in 1 attempt!"));
    assert!(transcript.contains("Correct in 2 attempts!"));
    assert_eq!(summary.rounds_won, 2);
    Ok(())
}

#[test]
fn play_invalid_input_is_not_an_attempt() -> Result<(), GameError> {
    let (_, transcript) = play_with_input(50, "abc\n\n50\nn\n")?;

    assert_eq!(transcript.matches("Please enter a valid integer.").count(), 2);
    assert_eq!(transcript.matches("Attempt 1/7").count(), 3);
    assert!(transcript.contains("Correct in 1 attempt!"));
    Ok(())
}

#[test]
fn play_reprompts_on_invalid_utf8() -> Result<(), GameError> {
    let mut game = Game::new(
        GameConfig::default(),
        Cursor::new(b"\xff\xfe\n50\nn\n".to_vec()),
        Vec::new(),
        fixed_target(50),
    );

    let summary = game.play()?;

    let transcript = String::from_utf8(game.into_writer()).unwrap();
    assert_eq!(transcript.matches("Please enter a valid integer.").count(), 1);
    assert!(transcript.contains("Correct in 1 attempt!"));
    assert_eq!(summary.rounds_won, 1);
    Ok(())
}

#[test]
fn play_invalid_utf8_replay_declines() -> Result<(), GameError> {
    let mut game = Game::new(
        GameConfig::default(),
        Cursor::new(b"50\n\xffyes\n".to_vec()),
        Vec::new(),
        fixed_target(50),
    );

    let summary = game.play()?;

    let transcript = String::from_utf8(game.into_writer()).unwrap();
    assert_eq!(transcript.matches("I'm thinking of a number").count(), 1);
    assert!(transcript.contains("Thanks for playing!"));
    assert_eq!(summary.rounds_played(), 1);
    Ok(())
}

#[test]
fn play_stops_at_end_of_input() -> Result<(), GameError> {
    let (summary, transcript) = play_with_input(50, "10\n")?;

    assert!(transcript.contains("Too low."));
    assert!(transcript.ends_with("Thanks for playing!\n"));
    assert_eq!(summary.rounds_played(), 0);
    Ok(())
}

#[test]
fn play_prints_welcome_and_bounds() -> Result<(), GameError> {
    let (_, transcript) = play_with_input(50, "")?;

    assert!(transcript.starts_with(
        "Welcome to the Number Guessing Game!\n\
         I'm thinking of a number between 1 and 100. You have 7 attempts.\n"
    ));
    Ok(())
}

#[test]
fn play_round_with_custom_config() -> Result<(), GameError> {
    let config = GameConfig::new(Bounds::new(1, 10)?, 2)?;
    let mut game = Game::new(
        config,
        Cursor::new("9\n8\n".to_string()),
        Vec::new(),
        fixed_target(3),
    );

    assert_matches!(game.play_round(), Ok(Some(RoundResult::Lost { target: 3 })));
    assert_eq!(game.state(), GameState::RoundLost { target: 3 });
    let transcript = String::from_utf8(game.into_writer()).unwrap();
    assert!(transcript.contains("between 1 and 10. You have 2 attempts."));
    assert_eq!(transcript.matches("Too high.").count(), 2);
    Ok(())
}

#[test]
fn play_round_returns_none_without_input() {
    let mut game = Game::new(
        GameConfig::default(),
        Cursor::new(String::new()),
        Vec::new(),
        fixed_target(50),
    );

    assert_matches!(game.play_round(), Ok(None));
    assert_eq!(game.state(), GameState::Terminated);
}

#[test]
fn play_with_seeded_source_finds_target_by_bisection() -> Result<(), GameError> {
    let bounds = Bounds::default();
    let target = choose_target_with(bounds, &mut RngSource::seeded(9));
    let mut guesses = Vec::new();
    let (mut low, mut high) = (bounds.low(), bounds.high());
    loop {
        let guess = low + (high - low) / 2;
        guesses.push(guess.to_string());
        match check_guess(guess, target) {
            Outcome::Low => low = guess + 1,
            Outcome::High => high = guess - 1,
            Outcome::Correct => break,
        }
    }
    let input = guesses.join("\n") + "\nn\n";
    let mut game = Game::new(
        GameConfig::default(),
        Cursor::new(input),
        Vec::new(),
        RngSource::seeded(9),
    );

    let summary = game.play()?;

    assert!(guesses.len() <= DEFAULT_MAX_ATTEMPTS as usize);
    assert_eq!(summary.rounds_won, 1);
    Ok(())
}
