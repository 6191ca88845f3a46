//! Notes collection persistence and write coalescing.

use desktop_app_contract::NOTES_STORAGE_KEY;
use platform_host::{load_pref_with, save_pref_with, PrefsStore};

use crate::model::Note;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How edits are turned into durable writes.
pub enum WritePolicy {
    /// One write per mutation.
    Immediate,
    /// One write after `quiet_ms` without further edits.
    Debounced {
        /// Quiet period in milliseconds.
        quiet_ms: u32,
    },
}

/// Policy used by the notes app.
pub const NOTES_WRITE_POLICY: WritePolicy = WritePolicy::Debounced { quiet_ms: 1000 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What the caller should do after recording a mutation.
pub enum WriteDecision {
    /// Persist the collection now.
    WriteNow,
    /// (Re)arm the write timer for `delay_ms`, replacing any armed timer.
    Schedule {
        /// Delay before the write.
        delay_ms: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pending-write state machine. The owner drives the actual timer.
pub struct NotesWriter {
    policy: WritePolicy,
    pending: bool,
}

impl NotesWriter {
    /// Creates an idle writer.
    pub const fn new(policy: WritePolicy) -> Self {
        Self {
            policy,
            pending: false,
        }
    }

    /// Records a title or content edit.
    pub fn record_edit(&mut self) -> WriteDecision {
        match self.policy {
            WritePolicy::Immediate => {
                self.pending = false;
                WriteDecision::WriteNow
            }
            WritePolicy::Debounced { quiet_ms } => {
                self.pending = true;
                WriteDecision::Schedule { delay_ms: quiet_ms }
            }
        }
    }

    /// Records a create or delete. These always write immediately and absorb any pending edit.
    pub fn record_structural(&mut self) -> WriteDecision {
        self.pending = false;
        WriteDecision::WriteNow
    }

    /// Returns whether an edit is waiting for its timer.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Clears the pending flag. Returns `true` when the caller owes a write.
    ///
    /// Called when the timer fires and on teardown.
    pub fn flush(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

/// Loads the stored collection. `Ok(None)` means nothing was ever saved.
///
/// # Errors
///
/// Returns the store or parse error. Callers must not write over a collection they could not
/// read.
pub async fn load_notes(store: &dyn PrefsStore) -> Result<Option<Vec<Note>>, String> {
    load_pref_with::<_, Vec<Note>>(store, NOTES_STORAGE_KEY).await
}

/// Writes the whole collection under the notes key.
///
/// # Errors
///
/// Returns the serialization or store error.
pub async fn save_notes(store: &dyn PrefsStore, notes: &[Note]) -> Result<(), String> {
    save_pref_with(store, NOTES_STORAGE_KEY, notes).await
}
