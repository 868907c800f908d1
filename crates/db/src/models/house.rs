//! House entity model and DTOs.
//!
//! `company_id` is a weak reference: nothing checks that the company exists.

use limpeza_core::coerce::coerce_number;
use limpeza_core::types::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::models::dataset::Dataset;
use crate::models::record::Record;

/// A house serviced by a cleaning company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Floor area. `Some(None)` is a stored `null`; `None` is an absent key.
    /// Kept as a JSON number so `120` is not rewritten as `120.0`.
    #[serde(
        default,
        deserialize_with = "crate::models::nullable::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<Option<Number>>,
    #[serde(
        rename = "companyId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub company_id: Option<RecordId>,
    /// Keys this application does not know about, kept so they survive a save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw house form as posted by the browser. `size` is still text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HouseForm {
    pub id: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub size: Option<String>,
    #[serde(rename = "companyId")]
    pub company_id: Option<String>,
}

/// House input with `size` already coerced. `None` is written as `null`.
#[derive(Debug, Clone, Default)]
pub struct HouseInput {
    pub id: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub size: Option<Number>,
    pub company_id: Option<RecordId>,
}

impl From<HouseForm> for HouseInput {
    fn from(form: HouseForm) -> Self {
        Self {
            size: coerce_number(form.size.as_deref()),
            id: form.id,
            address: form.address,
            city: form.city,
            company_id: form.company_id,
        }
    }
}

impl Record for House {
    const ENTITY: &'static str = "House";
    const ID_PREFIX: &'static str = "h";
    type Input = HouseInput;

    fn id(&self) -> &str {
        &self.id
    }

    fn sequence(dataset: &Dataset) -> &Vec<Self> {
        &dataset.houses
    }

    fn sequence_mut(dataset: &mut Dataset) -> &mut Vec<Self> {
        &mut dataset.houses
    }

    fn input_id(input: &Self::Input) -> Option<&str> {
        input.id.as_deref()
    }

    fn from_input(id: RecordId, input: Self::Input) -> Self {
        Self {
            id,
            address: input.address,
            city: input.city,
            size: Some(input.size),
            company_id: input.company_id,
            extra: Map::new(),
        }
    }
}
