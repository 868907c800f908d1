//! Route definitions shared by every record resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::records;
use crate::resource::Resource;
use crate::state::AppState;

/// Routes mounted at [`Resource::BASE_PATH`].
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> upsert
/// GET    /{id}             -> show
/// GET    /edit/{id}        -> edit
/// POST   /delete/{id}      -> delete
/// ```
pub fn router<R: Resource>() -> Router<AppState> {
    Router::new()
        .route("/", get(records::list::<R>).post(records::upsert::<R>))
        .route("/{id}", get(records::show::<R>))
        .route("/edit/{id}", get(records::edit::<R>))
        .route("/delete/{id}", post(records::delete::<R>))
}
