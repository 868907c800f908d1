//! The shape shared by every entity kept in the [`Dataset`].

use limpeza_core::types::RecordId;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::dataset::Dataset;

/// An entity stored as one ordered sequence inside the [`Dataset`].
///
/// Implemented by `Company`, `House` and `Employee`; the generic
/// [`RecordRepo`](crate::repositories::RecordRepo) is written against it.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Human-readable entity name used in logs and errors.
    const ENTITY: &'static str;
    /// Prefix of generated identifiers (`c`, `h`, `e`).
    const ID_PREFIX: &'static str;

    /// Submitted fields for create-or-update.
    type Input: Send + 'static;

    fn id(&self) -> &str;

    fn sequence(dataset: &Dataset) -> &Vec<Self>;

    fn sequence_mut(dataset: &mut Dataset) -> &mut Vec<Self>;

    /// The raw `id` carried by an input, before blank values are discarded.
    fn input_id(input: &Self::Input) -> Option<&str>;

    /// Build the stored record for `id` from submitted fields.
    fn from_input(id: RecordId, input: Self::Input) -> Self;
}
