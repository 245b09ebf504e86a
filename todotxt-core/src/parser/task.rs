pub(crate) mod leading_fields;
pub(crate) mod parser_date;
mod parser_priorities;
mod parser_state;
pub(crate) mod parser_tags;
pub mod token;

use leading_fields::LEADING_SLOTS;
use parser_date::parse_date_field;
use parser_priorities::parse_priority;
use parser_state::parse_completed;
use token::{Token, TokenKind};
use tracing::{error, trace};
use winnow::{
    Parser, Result,
    combinator::{alt, repeat},
    error::ParserError,
    token::{take_till, take_while},
};

/// Characters separating the fields of a line.
pub const SEPARATORS: [char; 2] = [' ', '\t'];

/// Parses the leading field of the given kind, separator included.
fn parse_leading_field<'a>(input: &mut &'a str, kind: TokenKind) -> Result<&'a str> {
    match kind {
        TokenKind::Completed => parse_completed(input),
        TokenKind::CompletedDate | TokenKind::CreationDate => parse_date_field(input),
        TokenKind::Priority => parse_priority(input),
        _ => Err(ParserError::from_input(input)),
    }
}

/// Parses a whitespace run or a single word of the line's body.
fn parse_body_token(input: &mut &str) -> Result<Token> {
    alt((
        take_while(1.., SEPARATORS).map(Token::white_space),
        take_till(1.., SEPARATORS).map(Token::from_word),
    ))
    .parse_next(input)
}

/// Splits a line into `Token`s. Never fails: anything that isn't a known field becomes `Text`.
///
/// Concatenating the text of the returned tokens gives back `raw`.
pub fn tokenize(raw: &str) -> Vec<Token> {
    let mut input = raw;
    let mut tokens = vec![];
    let mut kinds = vec![];

    for slot in &LEADING_SLOTS {
        if !slot.accepts(&kinds) {
            continue;
        }
        let mut attempt = input;
        if let Ok(text) = parse_leading_field(&mut attempt, slot.kind) {
            tokens.push(Token::new(slot.kind, text));
            kinds.push(slot.kind);
            input = attempt;
        }
    }

    let body: std::result::Result<Vec<Token>, _> = repeat(0.., parse_body_token).parse(input);
    match body {
        Ok(body) => tokens.extend(body),
        Err(e) => {
            error!("Failed to split {input:?}: {e}");
            tokens.push(Token::text(input));
        }
    }
    trace!("Tokenized {raw:?} into {} tokens", tokens.len());
    tokens
}
