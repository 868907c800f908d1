//! The root persisted document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::company::Company;
use crate::models::employee::Employee;
use crate::models::house::House;

/// Every record the application knows about, in insertion order.
///
/// Missing top-level keys deserialize as empty sequences, so a document
/// holding only `{"companies": []}` is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub houses: Vec<House>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Other top-level keys, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
