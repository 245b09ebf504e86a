use winnow::{
    Parser, Result,
    combinator::{alt, eof, preceded, terminated},
    token::take_till,
};

use super::{SEPARATORS, parser_date::parse_date_shape, token::THRESHOLD_PREFIX, token::TokenKind};

pub const RECURRENCE_PREFIX: &str = "rec:";
pub const DUE_PREFIX: &str = "due:";
pub const HIDDEN_PREFIX: &str = "h:";

/// Parses a threshold date word of the form `"t:2013-12-12"`.
pub fn parse_threshold_date<'a>(input: &mut &'a str) -> Result<&'a str> {
    preceded(THRESHOLD_PREFIX, parse_date_shape)
        .take()
        .parse_next(input)
}

/// Parses lists of the form `"+list"`.
pub fn parse_list<'a>(input: &mut &'a str) -> Result<&'a str> {
    ('+', take_till(1.., SEPARATORS)).take().parse_next(input)
}

/// Parses tags of the form `"@tag"`. The name is kept verbatim, so `"@@tag"` is a distinct tag.
pub fn parse_tag<'a>(input: &mut &'a str) -> Result<&'a str> {
    ('@', take_till(1.., SEPARATORS)).take().parse_next(input)
}

/// Parses `key:value` metadata words with a known key (`rec:`, `due:`, `h:`).
pub fn parse_metadata<'a>(input: &mut &'a str) -> Result<&'a str> {
    (
        alt((RECURRENCE_PREFIX, DUE_PREFIX, HIDDEN_PREFIX)),
        take_till(1.., SEPARATORS),
    )
        .take()
        .parse_next(input)
}

fn parse_word_kind(input: &mut &str) -> Result<TokenKind> {
    terminated(
        alt((
            parse_threshold_date.value(TokenKind::ThresholdDate),
            parse_list.value(TokenKind::List),
            parse_tag.value(TokenKind::Tag),
            parse_metadata.value(TokenKind::Tag),
        )),
        eof,
    )
    .parse_next(input)
}

/// Classifies a whitespace-free word. Words matching no field are `Text`.
pub fn word_kind(word: &str) -> TokenKind {
    parse_word_kind.parse(word).unwrap_or(TokenKind::Text)
}
