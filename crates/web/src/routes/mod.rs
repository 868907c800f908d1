pub mod health;
pub mod records;

use axum::routing::get;
use axum::Router;
use limpeza_db::models::company::Company;
use limpeza_db::models::employee::Employee;
use limpeza_db::models::house::House;

use crate::handlers;
use crate::resource::Resource;
use crate::state::AppState;

/// Build the HTML page route tree.
///
/// ```text
/// GET  /                          landing page
///
/// /companies                      list, upsert (POST)
/// /companies/{id}                 detail
/// /companies/edit/{id}            edit form
/// /companies/delete/{id}          delete (POST)
///
/// /houses/...                     same shape as /companies
/// /employees/...                  same shape as /companies
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::index))
        .nest(Company::BASE_PATH, records::router::<Company>())
        .nest(House::BASE_PATH, records::router::<House>())
        .nest(Employee::BASE_PATH, records::router::<Employee>())
}
