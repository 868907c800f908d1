pub mod company;
pub mod dataset;
pub mod employee;
pub mod house;
pub mod nullable;
pub mod record;
