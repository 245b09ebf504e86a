use winnow::{Parser, Result, token::one_of};

use super::SEPARATORS;

/// Parses a priority field of the form `"(A) "`, separator included.
pub fn parse_priority<'a>(input: &mut &'a str) -> Result<&'a str> {
    ('(', one_of('A'..='Z'), ')', one_of(SEPARATORS))
        .take()
        .parse_next(input)
}
