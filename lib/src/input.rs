use crate::results::GameError;

/// Parses a guess typed by the player.
///
/// Surrounding whitespace (including the trailing newline) is ignored. The remaining text
/// must be a base-10 integer, optionally preceded by `+` or `-`.
pub fn parse_guess(text: &str) -> Result<i64, GameError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GameError::InvalidNumericInput(String::new()));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| GameError::InvalidNumericInput(trimmed.to_string()))
}

/// Returns `true` iff the player's reply asks for another round.
pub fn parse_replay(text: &str) -> bool {
    text.trim()
        .chars()
        .next()
        .map_or(false, |first| first.eq_ignore_ascii_case(&'y'))
}
