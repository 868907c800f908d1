//! Employee entity model and DTOs.

use limpeza_core::types::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::dataset::Dataset;
use crate::models::record::Record;

/// A cleaning employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    /// Keys this application does not know about, kept so they survive a save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Submitted employee form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
}

impl Record for Employee {
    const ENTITY: &'static str = "Employee";
    const ID_PREFIX: &'static str = "e";
    type Input = EmployeeInput;

    fn id(&self) -> &str {
        &self.id
    }

    fn sequence(dataset: &Dataset) -> &Vec<Self> {
        &dataset.employees
    }

    fn sequence_mut(dataset: &mut Dataset) -> &mut Vec<Self> {
        &mut dataset.employees
    }

    fn input_id(input: &Self::Input) -> Option<&str> {
        input.id.as_deref()
    }

    fn from_input(id: RecordId, input: Self::Input) -> Self {
        Self {
            id,
            name: input.name,
            phone: input.phone,
            specialty: input.specialty,
            extra: Map::new(),
        }
    }
}
