//! Destructive-action confirmation.
//!
//! # Responsibility
//! - Put a yes/no decision in front of every delete.
//! - Let callers answer synchronously (`ConfirmationGate`) or later
//!   (`PendingDelete` + `Decision`) through one delete contract.
//!
//! # Invariants
//! - `Decision::Decline` never mutates a store or a controller.
//! - A `PendingDelete` is consumed by exactly one resolution.

use log::{debug, info};

use crate::model::{Entity, EntityId, EntityKind};
use crate::store::{EntityStore, MutationOutcome};

/// Answer to a delete prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Decline,
}

impl From<bool> for Decision {
    fn from(value: bool) -> Self {
        if value {
            Self::Confirm
        } else {
            Self::Decline
        }
    }
}

/// What the user is asked before a delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    pub kind: EntityKind,
    pub id: EntityId,
    pub message: &'static str,
}

impl DeletePrompt {
    pub fn new(kind: EntityKind, id: EntityId) -> Self {
        Self {
            kind,
            id,
            message: prompt_message(kind),
        }
    }
}

/// Prompt text shown for each module.
pub fn prompt_message(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Snippet => "Are you sure you want to delete this snippet?",
        EntityKind::Project | EntityKind::LearningTopic | EntityKind::JournalEntry => {
            "Are you sure?"
        }
    }
}

/// Blocking decision point, e.g. a native confirm box.
pub trait ConfirmationGate {
    fn confirm(&mut self, prompt: &DeletePrompt) -> Decision;
}

impl<F> ConfirmationGate for F
where
    F: FnMut(&DeletePrompt) -> Decision,
{
    fn confirm(&mut self, prompt: &DeletePrompt) -> Decision {
        self(prompt)
    }
}

/// Gate that approves every prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl ConfirmationGate for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &DeletePrompt) -> Decision {
        Decision::Confirm
    }
}

/// Gate that declines every prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysDecline;

impl ConfirmationGate for AlwaysDecline {
    fn confirm(&mut self, _prompt: &DeletePrompt) -> Decision {
        Decision::Decline
    }
}

/// A delete waiting for its decision.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingDelete {
    prompt: DeletePrompt,
}

impl PendingDelete {
    pub fn new(kind: EntityKind, id: EntityId) -> Self {
        Self {
            prompt: DeletePrompt::new(kind, id),
        }
    }

    pub fn prompt(&self) -> &DeletePrompt {
        &self.prompt
    }

    pub fn id(&self) -> &EntityId {
        &self.prompt.id
    }
}

/// How a delete request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteResolution {
    /// Confirmed and removed.
    Deleted,
    /// Confirmed, but the id was already gone.
    NotFound,
    /// Declined; nothing changed.
    Declined,
}

impl DeleteResolution {
    pub fn is_deleted(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

/// Applies `decision` to `pending` against `store`.
pub fn resolve<T: Entity>(
    store: &mut EntityStore<T>,
    pending: PendingDelete,
    decision: Decision,
) -> DeleteResolution {
    match decision {
        Decision::Decline => {
            debug!(
                "event=delete_declined module=confirm status=ok kind={} id={}",
                T::KIND,
                pending.id()
            );
            DeleteResolution::Declined
        }
        Decision::Confirm => match store.delete(pending.id()) {
            MutationOutcome::Applied => {
                info!(
                    "event=delete_confirmed module=confirm status=ok kind={} id={}",
                    T::KIND,
                    pending.id()
                );
                DeleteResolution::Deleted
            }
            MutationOutcome::NotFound | MutationOutcome::IdMismatch => DeleteResolution::NotFound,
        },
    }
}
