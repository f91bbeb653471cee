//! Generic create-vs-edit reconciler shared by all content modules.

use log::{debug, info};

use crate::model::clock::Clock;
use crate::model::id::IdGenerator;
use crate::model::{Entity, EntityId};
use crate::store::{EntityStore, MutationOutcome};

use super::drafts::FormDefaults;
use super::ValidationError;

/// Identity and time handed to a draft when it becomes a record.
#[derive(Debug, Clone)]
pub struct Stamp<'a, E> {
    /// Fresh id in create mode, the original id in edit mode.
    pub id: EntityId,
    /// Submit time in epoch milliseconds.
    pub now_epoch_ms: i64,
    /// The record being edited, if any.
    pub original: Option<&'a E>,
}

/// Editable field state for one entity kind.
pub trait Draft: Clone {
    type Entity: Entity;

    /// Draft for a brand-new record.
    fn blank(defaults: &FormDefaults) -> Self;

    /// Draft seeded from an existing record.
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Reports the first invalid field, if any.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Builds the normalized record from a validated draft.
    fn build(&self, stamp: Stamp<'_, Self::Entity>) -> Result<Self::Entity, ValidationError>;
}

/// Whether an open form creates or edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EntityId),
}

/// Store mutation performed by a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted<E> {
    Created(E),
    Updated {
        record: E,
        outcome: MutationOutcome,
    },
}

impl<E: Entity> Submitted<E> {
    pub fn record(&self) -> &E {
        match self {
            Self::Created(record) | Self::Updated { record, .. } => record,
        }
    }
}

/// An open form: the draft plus the record it was seeded from.
#[derive(Debug, Clone)]
pub struct FormReconciler<D: Draft> {
    original: Option<D::Entity>,
    draft: D,
}

impl<D: Draft> FormReconciler<D> {
    /// Opens a form in create mode (`None`) or edit mode (`Some`).
    pub fn open(existing: Option<&D::Entity>, defaults: &FormDefaults) -> Self {
        match existing {
            Some(entity) => Self {
                original: Some(entity.clone()),
                draft: D::from_entity(entity),
            },
            None => Self {
                original: None,
                draft: D::blank(defaults),
            },
        }
    }

    pub fn mode(&self) -> FormMode {
        match &self.original {
            Some(entity) => FormMode::Edit(entity.id().clone()),
            None => FormMode::Create,
        }
    }

    pub fn original(&self) -> Option<&D::Entity> {
        self.original.as_ref()
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    /// Validates the draft and applies exactly one store mutation.
    ///
    /// On error the store is untouched and the draft is kept for
    /// correction. In edit mode a record deleted since the form opened is
    /// not resurrected: the update reports `MutationOutcome::NotFound`.
    pub fn submit(
        &self,
        store: &mut EntityStore<D::Entity>,
        ids: &mut dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Result<Submitted<D::Entity>, ValidationError> {
        let kind = <D::Entity as Entity>::KIND;
        let mode = if self.original.is_some() { "edit" } else { "create" };
        if let Err(err) = self.draft.validate() {
            debug!("event=form_submit module=form status=invalid kind={kind} mode={mode}");
            return Err(err);
        }

        let now_epoch_ms = clock.now_epoch_ms();
        match &self.original {
            Some(original) => {
                let stamp = Stamp {
                    id: original.id().clone(),
                    now_epoch_ms,
                    original: Some(original),
                };
                let record = self.draft.build(stamp)?;
                let outcome = store.update(original.id(), record.clone());
                info!(
                    "event=form_submit module=form status=ok kind={kind} mode={mode} id={} applied={}",
                    original.id(),
                    outcome.is_applied()
                );
                Ok(Submitted::Updated { record, outcome })
            }
            None => {
                let stamp = Stamp {
                    id: ids.next_id(kind),
                    now_epoch_ms,
                    original: None,
                };
                let record = self.draft.build(stamp)?;
                info!(
                    "event=form_submit module=form status=ok kind={kind} mode={mode} id={}",
                    record.id()
                );
                Ok(Submitted::Created(store.create(record).clone()))
            }
        }
    }

    /// Discards the draft. Never touches the store.
    pub fn cancel(self) {
        debug!(
            "event=form_cancel module=form status=ok kind={}",
            <D::Entity as Entity>::KIND
        );
    }
}
