//! Linear undo/redo history over full state snapshots.

/// An ordered list of state snapshots with a cursor.
///
/// Entries before the cursor are undo targets, entries after are redo
/// targets; the entry *at* the cursor always equals the live state. The
/// history is seeded with one entry and the cursor never leaves
/// `0..entries.len()`. Pushing after an undo discards the redo tail —
/// standard linear history, not a tree.
///
/// This structure is only touched from the single UI interaction thread;
/// the owner must record the post-mutation snapshot here *before* applying
/// it to the live store so undo always restores the pre-mutation state
/// (see [`crate::session::PlanningSession`]).
#[derive(Debug, Clone)]
pub struct CommandHistory<T: Clone> {
    entries: Vec<T>,
    cursor: usize,
}

impl<T: Clone> CommandHistory<T> {
    /// History with a single seed entry.
    pub fn new(seed: T) -> Self {
        Self {
            entries: vec![seed],
            cursor: 0,
        }
    }

    /// Record the next state: truncate any redo tail, append, advance.
    /// This is the only mutator that discards redo history.
    pub fn push_state(&mut self, state: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state);
        self.cursor = self.entries.len() - 1;
    }

    /// Step back, returning the state to restore; `None` at the seed
    /// (a no-op — the caller keeps the live state untouched).
    pub fn undo(&mut self) -> Option<&T> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward, returning the state to restore; `None` at the tail.
    pub fn redo(&mut self) -> Option<&T> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// The entry under the cursor (equals the live state).
    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    /// Reset to a single fresh seed; used when a new planning session
    /// begins or the state is reseeded from outside.
    pub fn clear(&mut self, seed: T) {
        self.entries = vec![seed];
        self.cursor = 0;
    }

    /// Number of recorded entries (seed included).
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
