//! How each record type is exposed over HTTP.
//!
//! A [`Resource`] names the URL prefix, page titles, form fields and form
//! decoding for one record type; the generic handlers, routes and views are
//! written against it.

use limpeza_db::models::company::{Company, CompanyInput};
use limpeza_db::models::employee::{Employee, EmployeeInput};
use limpeza_db::models::house::{House, HouseForm, HouseInput};
use limpeza_db::models::record::Record;
use serde::de::DeserializeOwned;

/// One input of a record form.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Form field name, matching the persisted JSON key.
    pub name: &'static str,
    pub label: &'static str,
    /// HTML `<input type>`.
    pub input_type: &'static str,
}

impl FieldSpec {
    const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            input_type: "text",
        }
    }
}

pub trait Resource: Record {
    /// Mount point, e.g. `/companies`.
    const BASE_PATH: &'static str;
    const LIST_TITLE: &'static str;
    const EDIT_TITLE: &'static str;
    /// Editable fields, in display order.
    const FIELDS: &'static [FieldSpec];

    /// The urlencoded body posted by the record form.
    type Form: DeserializeOwned + Send + 'static;

    fn into_input(form: Self::Form) -> Self::Input;

    /// Display values aligned with [`Self::FIELDS`]; absent values are empty.
    fn values(&self) -> Vec<String>;
}

impl Resource for Company {
    const BASE_PATH: &'static str = "/companies";
    const LIST_TITLE: &'static str = "Companies";
    const EDIT_TITLE: &'static str = "Edit Company";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Name"),
        FieldSpec::text("contact", "Contact"),
        FieldSpec::text("notes", "Notes"),
    ];

    type Form = CompanyInput;

    fn into_input(form: Self::Form) -> Self::Input {
        form
    }

    fn values(&self) -> Vec<String> {
        [&self.name, &self.contact, &self.notes]
            .into_iter()
            .map(|v| v.clone().unwrap_or_default())
            .collect()
    }
}

impl Resource for House {
    const BASE_PATH: &'static str = "/houses";
    const LIST_TITLE: &'static str = "Houses";
    const EDIT_TITLE: &'static str = "Edit House";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("address", "Address"),
        FieldSpec::text("city", "City"),
        FieldSpec {
            name: "size",
            label: "Size (m²)",
            input_type: "number",
        },
        FieldSpec::text("companyId", "Company ID"),
    ];

    type Form = HouseForm;

    fn into_input(form: Self::Form) -> Self::Input {
        HouseInput::from(form)
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.address.clone().unwrap_or_default(),
            self.city.clone().unwrap_or_default(),
            self.size
                .as_ref()
                .and_then(Option::as_ref)
                .map(ToString::to_string)
                .unwrap_or_default(),
            self.company_id.clone().unwrap_or_default(),
        ]
    }
}

impl Resource for Employee {
    const BASE_PATH: &'static str = "/employees";
    const LIST_TITLE: &'static str = "Employees";
    const EDIT_TITLE: &'static str = "Edit Employee";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Name"),
        FieldSpec::text("phone", "Phone"),
        FieldSpec::text("specialty", "Specialty"),
    ];

    type Form = EmployeeInput;

    fn into_input(form: Self::Form) -> Self::Input {
        form
    }

    fn values(&self) -> Vec<String> {
        [&self.name, &self.phone, &self.specialty]
            .into_iter()
            .map(|v| v.clone().unwrap_or_default())
            .collect()
    }
}
