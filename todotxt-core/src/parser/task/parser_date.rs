use winnow::{Parser, Result, token::one_of, token::take_while};

use super::SEPARATORS;

/// Recognizes a `DDDD-DD-DD` shaped date without checking it against the calendar.
/// Invalid dates such as `2013-11-31` are still accepted here, accessors validate them.
pub fn parse_date_shape<'a>(input: &mut &'a str) -> Result<&'a str> {
    (
        take_while(4, '0'..='9'),
        '-',
        take_while(2, '0'..='9'),
        '-',
        take_while(2, '0'..='9'),
    )
        .take()
        .parse_next(input)
}

/// Parses a leading date field, separator included.
pub fn parse_date_field<'a>(input: &mut &'a str) -> Result<&'a str> {
    (parse_date_shape, one_of(SEPARATORS))
        .take()
        .parse_next(input)
}

/// Whether the whole input is a date shaped string.
pub fn is_date_shaped(input: &str) -> bool {
    parse_date_shape.parse(input).is_ok()
}
