//! Session-scoped conversation history.

use convo_common::SessionId;

use crate::{Role, Turn};

/// Ordered history of turns for one interactive session.
///
/// Only grows by appending. The store does not enforce user/assistant
/// alternation; callers append in the right order.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    id: SessionId,
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// All turns, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
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

    /// Drop the newest turn if it is an unanswered user turn.
    pub(crate) fn pop_unanswered(&mut self) -> Option<Turn> {
        match self.turns.last() {
            Some(t) if t.role() == Role::User => self.turns.pop(),
            _ => None,
        }
    }
}
