//! Domain primitives shared by the store and the web layer.
//!
//! Nothing in this crate performs I/O.

pub mod coerce;
pub mod error;
pub mod ids;
pub mod types;
