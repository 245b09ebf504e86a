use std::{borrow::Cow, fmt::Display};

use serde::Deserialize;
use strum::{EnumIter, IntoEnumIterator};
use strum_macros::EnumString;

use super::parser_tags::word_kind;
use crate::task::Priority;

/// Prefix of the threshold date metadata word.
pub const THRESHOLD_PREFIX: &str = "t:";

/// Semantic kind of a token.
/// Declaration order defines the flag value of each kind, see [`TokenKind::flag`].
#[derive(
    Debug, Hash, Eq, PartialEq, Clone, Copy, EnumIter, EnumString, strum_macros::Display, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    WhiteSpace,
    List,
    Tag,
    Completed,
    CompletedDate,
    CreationDate,
    Text,
    Priority,
    ThresholdDate,
}

impl TokenKind {
    /// Integer flag of this kind for callers exchanging kind masks as integers.
    #[must_use]
    pub const fn flag(self) -> u32 {
        1 << self as u32
    }
}

/// A set of `TokenKind`s, used to select the kinds suppressed by
/// [`Task::in_screen_format`](crate::task::Task::in_screen_format).
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub struct KindSet {
    bits: u32,
}

impl KindSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub fn all() -> Self {
        TokenKind::iter().collect()
    }

    /// Builds a set from an integer mask, unknown bits are ignored.
    #[must_use]
    pub fn from_bits(bits: u32) -> Self {
        TokenKind::iter()
            .filter(|kind| bits & kind.flag() != 0)
            .collect()
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    #[must_use]
    pub const fn with(mut self, kind: TokenKind) -> Self {
        self.bits |= kind.flag();
        self
    }

    pub fn insert(&mut self, kind: TokenKind) {
        self.bits |= kind.flag();
    }

    #[must_use]
    pub const fn contains(self, kind: TokenKind) -> bool {
        self.bits & kind.flag() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn iter(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::iter().filter(move |kind| self.contains(*kind))
    }
}

impl FromIterator<TokenKind> for KindSet {
    fn from_iter<T: IntoIterator<Item = TokenKind>>(iter: T) -> Self {
        let mut set = Self::empty();
        iter.into_iter().for_each(|kind| set.insert(kind));
        set
    }
}

/// A fragment of a task line.
/// `text` is the verbatim substring contributed to the line, separators of leading fields included.
/// Threshold dates are the exception: `text` holds the date only, see [`Token::line_text`].
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn completed() -> Self {
        Self::new(TokenKind::Completed, "x ")
    }

    #[must_use]
    pub fn completed_date(date: &str) -> Self {
        Self::new(TokenKind::CompletedDate, format!("{date} "))
    }

    #[must_use]
    pub fn creation_date(date: &str) -> Self {
        Self::new(TokenKind::CreationDate, format!("{date} "))
    }

    /// Returns `None` for `Priority::None`, which has no textual form.
    #[must_use]
    pub fn priority(priority: Priority) -> Option<Self> {
        priority
            .code()
            .map(|code| Self::new(TokenKind::Priority, format!("({code}) ")))
    }

    #[must_use]
    pub fn threshold_date(date: &str) -> Self {
        Self::new(TokenKind::ThresholdDate, date)
    }

    /// Token of a whitespace-free body word, classified by its shape.
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        match word_kind(word) {
            TokenKind::ThresholdDate => {
                Self::threshold_date(word.strip_prefix(THRESHOLD_PREFIX).unwrap_or(word))
            }
            kind => Self::new(kind, word),
        }
    }

    #[must_use]
    pub fn white_space(text: &str) -> Self {
        Self::new(TokenKind::WhiteSpace, text)
    }

    #[must_use]
    pub fn text(text: &str) -> Self {
        Self::new(TokenKind::Text, text)
    }

    /// The meaningful part of the token: leading fields lose their separator.
    #[must_use]
    pub fn value(&self) -> &str {
        match self.kind {
            TokenKind::Completed
            | TokenKind::CompletedDate
            | TokenKind::CreationDate
            | TokenKind::Priority => self.text.trim_end_matches([' ', '\t']),
            TokenKind::WhiteSpace
            | TokenKind::List
            | TokenKind::Tag
            | TokenKind::Text
            | TokenKind::ThresholdDate => &self.text,
        }
    }

    /// The text this token contributes to the line.
    #[must_use]
    pub fn line_text(&self) -> Cow<'_, str> {
        match self.kind {
            TokenKind::ThresholdDate => Cow::Owned(format!("{THRESHOLD_PREFIX}{}", self.text)),
            _ => Cow::Borrowed(&self.text),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:'{}'", self.kind, self.text)
    }
}
