//! Company entity model and DTOs.

use limpeza_core::types::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::dataset::Dataset;
use crate::models::record::Record;

/// A cleaning company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Keys this application does not know about, kept so they survive a save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Submitted company form. A present `id` targets an existing company.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub contact: Option<String>,
    pub notes: Option<String>,
}

impl Record for Company {
    const ENTITY: &'static str = "Company";
    const ID_PREFIX: &'static str = "c";
    type Input = CompanyInput;

    fn id(&self) -> &str {
        &self.id
    }

    fn sequence(dataset: &Dataset) -> &Vec<Self> {
        &dataset.companies
    }

    fn sequence_mut(dataset: &mut Dataset) -> &mut Vec<Self> {
        &mut dataset.companies
    }

    fn input_id(input: &Self::Input) -> Option<&str> {
        input.id.as_deref()
    }

    fn from_input(id: RecordId, input: Self::Input) -> Self {
        Self {
            id,
            name: input.name,
            contact: input.contact,
            notes: input.notes,
            extra: Map::new(),
        }
    }
}
