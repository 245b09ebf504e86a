use winnow::{Parser, Result, token::one_of};

use super::SEPARATORS;

/// Parses the completion marker `"x "` found at the very start of a line.
pub fn parse_completed<'a>(input: &mut &'a str) -> Result<&'a str> {
    ('x', one_of(SEPARATORS)).take().parse_next(input)
}
