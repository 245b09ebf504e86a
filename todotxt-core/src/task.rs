use std::{collections::BTreeSet, fmt::Display};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::{
    date::{format_date, parse_date, relative_str, today},
    parser::task::{
        SEPARATORS,
        leading_fields::{insert_position, leading_len},
        parser_date::is_date_shaped,
        parser_tags::{DUE_PREFIX, RECURRENCE_PREFIX},
        token::{KindSet, Token, TokenKind},
        tokenize,
    },
};

/// Tag marking a task as hidden from default views.
pub const HIDDEN_TAG: &str = "h:1";

/// A task's priority.
/// Ordering is `A < B < ... < Z < None`, most urgent first.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy, PartialOrd, Ord, Default)]
pub enum Priority {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    #[default]
    None,
}

impl Priority {
    const LETTERS: [Self; 26] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    /// Priority for an uppercase letter, `None` for anything else.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        if c.is_ascii_uppercase() {
            Self::LETTERS[(c as u8 - b'A') as usize]
        } else {
            Self::None
        }
    }

    /// The letter of the priority, if any.
    #[must_use]
    pub fn code(self) -> Option<char> {
        Self::LETTERS
            .iter()
            .position(|p| *p == self)
            .and_then(|index| u8::try_from(index).ok())
            .map(|index| char::from(b'A' + index))
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code() {
            Some(code) => write!(f, "{code}"),
            None => write!(f, "-"),
        }
    }
}

/// One line of a todo.txt file.
///
/// The token sequence is the only state: every attribute is derived from it, and
/// mutations rebuild it so that untouched parts of the line are kept verbatim.
#[derive(Debug, Clone)]
pub struct Task {
    id: usize,
    tokens: Vec<Token>,
}

impl Task {
    #[must_use]
    pub fn new(id: usize, raw: &str) -> Self {
        Self {
            id,
            tokens: tokenize(raw),
        }
    }

    /// Creates a task and stamps it with `creation_date`, unless the line already has a creation date.
    #[must_use]
    pub fn with_creation_date(id: usize, raw: &str, creation_date: NaiveDate) -> Self {
        let mut task = Self::new(id, raw);
        if let Some(position) = insert_position(&task.tokens, TokenKind::CreationDate) {
            let date = Token::creation_date(&format_date(creation_date));
            task.tokens = inserted(&task.tokens, position, [date]);
        }
        task
    }

    /// Replaces the whole line.
    pub fn update(&mut self, raw: &str) {
        self.tokens = tokenize(raw);
    }

    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    fn leading(&self) -> &[Token] {
        &self.tokens[..leading_len(&self.tokens)]
    }

    fn find_leading(&self, kind: TokenKind) -> Option<&Token> {
        self.leading().iter().find(|token| token.kind == kind)
    }

    /// Values of the `Tag` tokens starting with `prefix`, prefix removed.
    fn metadata(&self, prefix: &str) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(|token| token.kind == TokenKind::Tag)
            .filter_map(move |token| token.text.strip_prefix(prefix))
    }

    #[must_use]
    pub fn priority(&self) -> Priority {
        self.find_leading(TokenKind::Priority)
            .and_then(|token| token.value().chars().nth(1))
            .map_or(Priority::None, Priority::from_char)
    }

    /// Sets the priority. `Priority::None` removes the priority field.
    pub fn set_priority(&mut self, priority: Priority) {
        let without = self
            .tokens
            .iter()
            .filter(|token| token.kind != TokenKind::Priority)
            .cloned()
            .collect::<Vec<Token>>();

        self.tokens = match Token::priority(priority) {
            None => without,
            Some(new_token) => {
                if let Some(index) = self
                    .leading()
                    .iter()
                    .position(|token| token.kind == TokenKind::Priority)
                {
                    replaced(&self.tokens, index, new_token)
                } else {
                    let position = insert_position(&without, TokenKind::Priority).unwrap_or(0);
                    inserted(&without, position, [new_token])
                }
            }
        };
        debug!("Priority set to {priority}: {self}");
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.tokens
            .first()
            .is_some_and(|token| token.kind == TokenKind::Completed)
    }

    /// Marks the task done on `date`. Does nothing if it is already completed.
    pub fn mark_complete(&mut self, date: NaiveDate) {
        if self.is_completed() {
            return;
        }
        self.tokens = inserted(
            &self.tokens,
            0,
            [Token::completed(), Token::completed_date(&format_date(date))],
        );
        debug!("Marked complete: {self}");
    }

    /// Removes the completion marker and the completion date, leaving everything else untouched.
    pub fn mark_incomplete(&mut self) {
        if !self.is_completed() {
            return;
        }
        let leading = leading_len(&self.tokens);
        self.tokens = self
            .tokens
            .iter()
            .enumerate()
            .filter(|(index, token)| {
                *index >= leading
                    || !matches!(token.kind, TokenKind::Completed | TokenKind::CompletedDate)
            })
            .map(|(_, token)| token.clone())
            .collect();
        debug!("Marked incomplete: {self}");
    }

    /// Completion date as written in the line, even if it isn't a valid date.
    #[must_use]
    pub fn completion_date_text(&self) -> Option<&str> {
        self.find_leading(TokenKind::CompletedDate)
            .map(Token::value)
    }

    #[must_use]
    pub fn completion_date(&self) -> Option<NaiveDate> {
        self.completion_date_text().and_then(parse_date)
    }

    /// Creation date as written in the line, even if it isn't a valid date.
    #[must_use]
    pub fn creation_date_text(&self) -> Option<&str> {
        self.find_leading(TokenKind::CreationDate).map(Token::value)
    }

    #[must_use]
    pub fn creation_date(&self) -> Option<NaiveDate> {
        self.creation_date_text().and_then(parse_date)
    }

    /// Age of the task relative to today, see [`Task::relative_age_at`].
    #[must_use]
    pub fn relative_age(&self) -> Option<String> {
        self.relative_age_at(today())
    }

    /// Age of the task relative to `today`, such as "3 days ago".
    /// An invalid creation date is returned as written.
    #[must_use]
    pub fn relative_age_at(&self, today: NaiveDate) -> Option<String> {
        let text = self.creation_date_text()?;
        Some(parse_date(text).map_or_else(|| text.to_owned(), |date| relative_str(date, today)))
    }

    /// Value of the `due:` tag as written in the line.
    #[must_use]
    pub fn due_date_text(&self) -> Option<&str> {
        self.metadata(DUE_PREFIX).next()
    }

    #[must_use]
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date_text().and_then(parse_date)
    }

    fn threshold_token(&self) -> Option<&Token> {
        self.tokens
            .iter()
            .find(|token| token.kind == TokenKind::ThresholdDate)
    }

    /// Threshold date as written in the line, or `default` if there is none.
    #[must_use]
    pub fn threshold_date_text(&self, default: &str) -> String {
        self.threshold_token()
            .map_or(default, Token::value)
            .to_owned()
    }

    #[must_use]
    pub fn threshold_date(&self) -> Option<NaiveDate> {
        self.threshold_token()
            .and_then(|token| parse_date(token.value()))
    }

    /// Sets the `t:` threshold date, replacing an existing one in place or appending it.
    /// An empty `date` removes the threshold date.
    ///
    /// Only `YYYY-MM-DD` shaped text is stored, anything else is ignored with a warning:
    /// a `t:` word of another shape would read back as plain text. Calendrically invalid
    /// dates such as `2013-11-31` are stored, and [`Task::threshold_date`] returns `None` for them.
    pub fn set_threshold_date(&mut self, date: &str) {
        let index = self
            .tokens
            .iter()
            .position(|token| token.kind == TokenKind::ThresholdDate);

        if date.is_empty() {
            if let Some(index) = index {
                self.tokens = removed_with_separator(&self.tokens, index);
            }
        } else if !is_date_shaped(date) {
            warn!("Ignoring threshold date {date:?}, expected YYYY-MM-DD");
            return;
        } else {
            let token = Token::threshold_date(date);
            self.tokens = match index {
                Some(index) => replaced(&self.tokens, index, token),
                None => appended(&self.tokens, token),
            };
        }
        debug!("Threshold date set to {date:?}: {self}");
    }

    /// Whether the threshold date is after today, see [`Task::in_future_at`].
    #[must_use]
    pub fn in_future(&self) -> bool {
        self.in_future_at(today())
    }

    /// Whether a valid threshold date exists and is strictly after `today`.
    #[must_use]
    pub fn in_future_at(&self, today: NaiveDate) -> bool {
        self.threshold_date().is_some_and(|date| date > today)
    }

    /// Pattern of the `rec:` tag.
    #[must_use]
    pub fn recurrence_pattern(&self) -> Option<&str> {
        self.metadata(RECURRENCE_PREFIX).next()
    }

    /// `@` tags of the task, sigil included.
    #[must_use]
    pub fn tags(&self) -> BTreeSet<&str> {
        self.tokens
            .iter()
            .filter(|token| token.kind == TokenKind::Tag && token.text.starts_with('@'))
            .map(|token| token.text.as_str())
            .collect()
    }

    /// `+` lists of the task, sigil included.
    #[must_use]
    pub fn lists(&self) -> BTreeSet<&str> {
        self.tokens
            .iter()
            .filter(|token| token.kind == TokenKind::List)
            .map(|token| token.text.as_str())
            .collect()
    }

    /// Appends a tag or list word such as `"@home"` or `"+garden"`.
    /// Nothing happens if the exact word is already present.
    pub fn add_tag(&mut self, tag: &str) {
        if tag.is_empty() || tag.contains(SEPARATORS) {
            warn!("Ignoring tag {tag:?}, a tag is a single word");
            return;
        }
        if self.tokens.iter().any(|token| token.line_text() == tag) {
            return;
        }
        self.tokens = appended(&self.tokens, Token::from_word(tag));
        debug!("Added {tag}: {self}");
    }

    /// Removes the first tag or list whose text is exactly `tag`, along with one separating whitespace.
    pub fn remove_tag(&mut self, tag: &str) {
        let Some(index) = self.tokens.iter().position(|token| {
            matches!(token.kind, TokenKind::Tag | TokenKind::List) && token.text == tag
        }) else {
            debug!("No {tag} to remove in {self}");
            return;
        };
        self.tokens = removed_with_separator(&self.tokens, index);
        debug!("Removed {tag}: {self}");
    }

    /// A task is hidden from default views by a `h:1` tag.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self
            .tokens
            .iter()
            .any(|token| token.kind == TokenKind::Tag && token.text == HIDDEN_TAG)
    }

    /// The line as it is written to a file.
    #[must_use]
    pub fn in_file_format(&self) -> String {
        self.tokens.iter().map(Token::line_text).collect()
    }

    /// The line without the tokens whose kind is in `hidden`.
    /// Each dropped token also drops one neighbouring whitespace, so no double spaces appear.
    /// An empty set renders the same text as [`Task::in_file_format`].
    #[must_use]
    pub fn in_screen_format(&self, hidden: &KindSet) -> String {
        let mut kept: Vec<&Token> = vec![];
        let mut skip_separator = false;
        let mut last_hidden = false;
        for token in &self.tokens {
            if hidden.contains(token.kind) {
                skip_separator = true;
                last_hidden = true;
                continue;
            }
            last_hidden = false;
            if skip_separator && token.kind == TokenKind::WhiteSpace {
                skip_separator = false;
                continue;
            }
            skip_separator = false;
            kept.push(token);
        }
        if last_hidden && kept.last().is_some_and(|t| t.kind == TokenKind::WhiteSpace) {
            kept.pop();
        }
        kept.into_iter().map(Token::line_text).collect()
    }
}

/// Equal tasks have the same id and the same text.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.in_file_format() == other.in_file_format()
    }
}
impl Eq for Task {}

impl Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token.line_text())?;
        }
        Ok(())
    }
}

fn inserted<const N: usize>(tokens: &[Token], index: usize, new: [Token; N]) -> Vec<Token> {
    let mut res = Vec::with_capacity(tokens.len() + N);
    res.extend_from_slice(&tokens[..index]);
    res.extend(new);
    res.extend_from_slice(&tokens[index..]);
    res
}

fn replaced(tokens: &[Token], index: usize, new: Token) -> Vec<Token> {
    let mut res = tokens.to_vec();
    res[index] = new;
    res
}

/// Appends `new`, separated from the rest of the line by a single space.
fn appended(tokens: &[Token], new: Token) -> Vec<Token> {
    let mut res = tokens.to_vec();
    let ends_with_separator = tokens.last().is_none_or(|token| {
        token.kind == TokenKind::WhiteSpace || token.text.ends_with(SEPARATORS)
    });
    if !ends_with_separator {
        res.push(Token::white_space(" "));
    }
    res.push(new);
    res
}

/// Removes the token at `index` and the whitespace following it, or preceding it when it ends the line.
fn removed_with_separator(tokens: &[Token], index: usize) -> Vec<Token> {
    let is_space = |i: usize| tokens.get(i).is_some_and(|t| t.kind == TokenKind::WhiteSpace);
    let separator = if is_space(index + 1) {
        Some(index + 1)
    } else if index > 0 && is_space(index - 1) {
        Some(index - 1)
    } else {
        None
    };
    tokens
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index && Some(*i) != separator)
        .map(|(_, token)| token.clone())
        .collect()
}
