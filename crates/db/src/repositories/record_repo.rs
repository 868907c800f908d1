//! Generic repository over the record sequences of the dataset.

use std::marker::PhantomData;

use limpeza_core::ids::{explicit_id, next_id};
use limpeza_core::types::RecordId;

use crate::error::StoreError;
use crate::models::record::Record;
use crate::Db;

/// Result of [`RecordRepo::upsert`].
#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome<R> {
    /// No id was submitted; the record was appended under a fresh id.
    Created(R),
    /// The submitted id matched; the record was replaced in place.
    Updated(R),
    /// An id was submitted but nothing has it. The dataset is unchanged.
    Unmatched(RecordId),
}

impl<R: Record> UpsertOutcome<R> {
    pub fn id(&self) -> &str {
        match self {
            Self::Created(record) | Self::Updated(record) => record.id(),
            Self::Unmatched(id) => id,
        }
    }
}

/// Provides list/get/upsert/delete for one record type.
///
/// Every mutation is one full load and one full save of the dataset.
pub struct RecordRepo<R>(PhantomData<R>);

impl<R: Record> RecordRepo<R> {
    /// All records of this type, in stored order.
    pub async fn list(db: &Db) -> Result<Vec<R>, StoreError> {
        let mut dataset = db.load().await?;
        Ok(std::mem::take(R::sequence_mut(&mut dataset)))
    }

    /// Find a record by id. A miss is `None`, not an error.
    pub async fn find_by_id(db: &Db, id: &str) -> Result<Option<R>, StoreError> {
        let dataset = db.load().await?;
        Ok(R::sequence(&dataset).iter().find(|r| r.id() == id).cloned())
    }

    /// All records plus the one with `id`, read from a single load.
    ///
    /// Pages that show the listing next to one selected record use this so
    /// both come from the same snapshot of the dataset.
    pub async fn list_with(db: &Db, id: &str) -> Result<(Vec<R>, Option<R>), StoreError> {
        let mut dataset = db.load().await?;
        let records = std::mem::take(R::sequence_mut(&mut dataset));
        let selected = records.iter().find(|r| r.id() == id).cloned();
        Ok((records, selected))
    }

    /// Create or replace a record.
    ///
    /// A non-blank `id` in `input` replaces the matching record at its
    /// current position; if no record matches, nothing changes. Without an
    /// id a new record is appended under a generated id. The dataset is
    /// saved in every case.
    pub async fn upsert(db: &Db, input: R::Input) -> Result<UpsertOutcome<R>, StoreError> {
        let outcome = db
            .mutate(move |dataset| {
                let submitted_id = explicit_id(R::input_id(&input)).map(str::to_owned);
                let records = R::sequence_mut(dataset);
                match submitted_id {
                    Some(id) => match records.iter().position(|r| r.id() == id) {
                        Some(idx) => {
                            let record = R::from_input(id, input);
                            records[idx] = record.clone();
                            UpsertOutcome::Updated(record)
                        }
                        None => UpsertOutcome::Unmatched(id),
                    },
                    None => {
                        let id = next_id(R::ID_PREFIX, records.iter().map(|r| r.id()));
                        let record = R::from_input(id, input);
                        records.push(record.clone());
                        UpsertOutcome::Created(record)
                    }
                }
            })
            .await?;

        match &outcome {
            UpsertOutcome::Created(record) => {
                tracing::info!(entity = R::ENTITY, id = %record.id(), "Record created");
            }
            UpsertOutcome::Updated(record) => {
                tracing::info!(entity = R::ENTITY, id = %record.id(), "Record updated");
            }
            UpsertOutcome::Unmatched(id) => {
                tracing::warn!(entity = R::ENTITY, %id, "Update target not found, nothing changed");
            }
        }
        Ok(outcome)
    }

    /// Remove every record with `id`. Returns how many were removed.
    pub async fn delete(db: &Db, id: &str) -> Result<usize, StoreError> {
        let removed = db
            .mutate(|dataset| {
                let records = R::sequence_mut(dataset);
                let before = records.len();
                records.retain(|r| r.id() != id);
                before - records.len()
            })
            .await?;

        if removed > 0 {
            tracing::info!(entity = R::ENTITY, %id, "Record deleted");
        } else {
            tracing::debug!(entity = R::ENTITY, %id, "Delete target not found");
        }
        Ok(removed)
    }
}
