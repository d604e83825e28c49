//! Append-only conversation log.

use crate::{Speaker, Turn};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    #[error("expected a {expected} turn next, got a {actual} turn")]
    OutOfOrder { expected: Speaker, actual: Speaker },
}

/// Ordered record of what has been said.
///
/// Turns strictly alternate starting with a user turn. Nothing is edited in
/// place; the only removals are a wholesale `clear` and the orchestrator
/// retracting a user turn whose reply failed.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    turns: Vec<Turn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Speaker the next appended turn must have.
    pub fn expected_next(&self) -> Speaker {
        match self.turns.last() {
            Some(turn) if turn.role == Speaker::User => Speaker::Assistant,
            _ => Speaker::User,
        }
    }

    pub fn append(&mut self, turn: Turn) -> Result<(), LogError> {
        let expected = self.expected_next();
        if turn.role != expected {
            return Err(LogError::OutOfOrder {
                expected,
                actual: turn.role,
            });
        }
        self.turns.push(turn);
        Ok(())
    }

    /// Every turn except the most recent one.
    pub fn snapshot_excluding_last(&self) -> &[Turn] {
        match self.turns.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Read-only view in append order. Clone the iterator to walk it again.
    pub fn all(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Remove the trailing user turn, if the log ends in one.
    pub(crate) fn discard_pending_user(&mut self) -> Option<Turn> {
        if self.turns.last().map(|t| t.role) == Some(Speaker::User) {
            self.turns.pop()
        } else {
            None
        }
    }
}
