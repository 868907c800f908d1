/// Record identifiers are a type prefix followed by a number, e.g. `c1`.
pub type RecordId = String;
