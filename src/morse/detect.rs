//! One-shot heuristic choosing the conversion direction for raw input.

use thiserror::Error;

use super::convert::Converter;

/// Conversion direction chosen by [`detect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Input is plain text; encode it.
    ToMorse,
    /// Input contains Morse punctuation; decode it.
    ToText,
}

/// Error returned by the conversion entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Nothing left after trimming surrounding whitespace.
    #[error("empty input")]
    EmptyInput,
}

/// Classify `input` as Morse or plain text.
///
/// Any occurrence of `.`, `-` or `/` routes the input to
/// [`Direction::ToText`]. This is a heuristic, not a parser: plain text that
/// happens to contain a literal hyphen or period ("well-known") is treated
/// as Morse.
pub fn detect(input: &str) -> Result<Direction, ConvertError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    if trimmed.contains(['.', '-', '/']) {
        Ok(Direction::ToText)
    } else {
        Ok(Direction::ToMorse)
    }
}

/// Trim `input`, pick a direction and convert with `converter`.
pub fn auto_convert(converter: &Converter, input: &str) -> Result<String, ConvertError> {
    let trimmed = input.trim();
    Ok(match detect(trimmed)? {
        Direction::ToText => converter.decode(trimmed),
        Direction::ToMorse => converter.encode(trimmed),
    })
}
