//! Ordering policy of the fields found at the start of a line.
//!
//! The tokenizer walks [`LEADING_SLOTS`] once to recognize leading fields, and
//! mutators inserting a leading field look up their position in the same table,
//! so both always agree on field order.

use super::token::{Token, TokenKind};

/// When a slot may be filled, given the kinds of the leading tokens before it.
#[derive(Debug, Clone, Copy)]
enum Condition {
    /// Nothing precedes the field.
    LineStart,
    /// The field directly follows a token of the given kind.
    Follows(TokenKind),
    /// Nothing precedes the field, or it directly follows a token of the given kind.
    LineStartOrFollows(TokenKind),
    /// No token of the same kind precedes the field.
    Unique,
}

#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub kind: TokenKind,
    condition: Condition,
}

impl Slot {
    /// Whether this slot can be filled after leading tokens of kinds `before`.
    pub fn accepts(&self, before: &[TokenKind]) -> bool {
        match self.condition {
            Condition::LineStart => before.is_empty(),
            Condition::Follows(kind) => before.last() == Some(&kind),
            Condition::LineStartOrFollows(kind) => {
                before.is_empty() || before.last() == Some(&kind)
            }
            Condition::Unique => !before.contains(&self.kind),
        }
    }
}

/// A completed line reads `x <completion date> <creation date> (A) ...`, an open
/// one `<creation date> (A) ...`.
pub const LEADING_SLOTS: [Slot; 4] = [
    Slot {
        kind: TokenKind::Completed,
        condition: Condition::LineStart,
    },
    Slot {
        kind: TokenKind::CompletedDate,
        condition: Condition::Follows(TokenKind::Completed),
    },
    Slot {
        kind: TokenKind::CreationDate,
        condition: Condition::LineStartOrFollows(TokenKind::CompletedDate),
    },
    Slot {
        kind: TokenKind::Priority,
        condition: Condition::Unique,
    },
];

/// Slot index of each leading token, in order. Stops at the first token that fits no remaining slot.
fn assign_slots(tokens: &[Token]) -> Vec<usize> {
    let mut slots = vec![];
    let mut kinds = vec![];
    let mut next = 0;
    for token in tokens {
        let Some(offset) = LEADING_SLOTS[next..]
            .iter()
            .position(|slot| slot.kind == token.kind && slot.accepts(&kinds))
        else {
            break;
        };
        slots.push(next + offset);
        kinds.push(token.kind);
        next += offset + 1;
    }
    slots
}

/// Number of leading tokens at the start of `tokens`.
pub fn leading_len(tokens: &[Token]) -> usize {
    assign_slots(tokens).len()
}

/// Index at which a new leading token of `kind` must be inserted into `tokens`.
/// Returns `None` if `kind` is not a leading field, is already present, or no slot accepts it.
pub fn insert_position(tokens: &[Token], kind: TokenKind) -> Option<usize> {
    let assigned = assign_slots(tokens);
    if tokens[..assigned.len()].iter().any(|token| token.kind == kind) {
        return None;
    }
    LEADING_SLOTS
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.kind == kind)
        .find_map(|(index, slot)| {
            let before = assigned
                .iter()
                .zip(tokens)
                .take_while(|(assigned_slot, _)| **assigned_slot < index)
                .map(|(_, token)| token.kind)
                .collect::<Vec<TokenKind>>();
            slot.accepts(&before).then_some(before.len())
        })
}
