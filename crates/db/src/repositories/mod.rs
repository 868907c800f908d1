mod record_repo;

pub use record_repo::{RecordRepo, UpsertOutcome};

use crate::models::company::Company;
use crate::models::employee::Employee;
use crate::models::house::House;

pub type CompanyRepo = RecordRepo<Company>;
pub type HouseRepo = RecordRepo<House>;
pub type EmployeeRepo = RecordRepo<Employee>;
