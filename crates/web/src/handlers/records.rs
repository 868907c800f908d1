//! Handlers for the `/companies`, `/houses` and `/employees` resources.
//!
//! Each handler is generic over the [`Resource`] it serves; the routes
//! instantiate them once per record type.

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use limpeza_core::error::CoreError;
use limpeza_db::repositories::RecordRepo;

use crate::error::AppResult;
use crate::resource::Resource;
use crate::state::AppState;
use crate::views::records::{render, Focus, RecordPage, DETAIL_TITLE};

/// GET /{resource}
pub async fn list<R: Resource>(State(state): State<AppState>) -> AppResult<Html<String>> {
    let records = RecordRepo::<R>::list(&state.db).await?;
    Ok(Html(render(&RecordPage {
        title: R::LIST_TITLE,
        records: &records,
        focus: Focus::Listing,
    })))
}

/// POST /{resource}
///
/// Creates a record when the form carries no id, otherwise replaces the
/// record with that id. Redirects back to the list either way.
pub async fn upsert<R: Resource>(
    State(state): State<AppState>,
    Form(form): Form<R::Form>,
) -> AppResult<Redirect> {
    RecordRepo::<R>::upsert(&state.db, R::into_input(form)).await?;
    Ok(Redirect::to(R::BASE_PATH))
}

/// GET /{resource}/{id}
pub async fn show<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let (records, selected) = RecordRepo::<R>::list_with(&state.db, &id).await?;

    let focus = match &selected {
        Some(record) => Focus::Selected(record),
        None => missing::<R>(&id),
    };
    Ok(Html(render(&RecordPage {
        title: DETAIL_TITLE,
        records: &records,
        focus,
    })))
}

/// GET /{resource}/edit/{id}
pub async fn edit<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let (records, editing) = RecordRepo::<R>::list_with(&state.db, &id).await?;

    let focus = match &editing {
        Some(record) => Focus::Editing(record),
        None => missing::<R>(&id),
    };
    Ok(Html(render(&RecordPage {
        title: R::EDIT_TITLE,
        records: &records,
        focus,
    })))
}

/// POST /{resource}/delete/{id}
///
/// Deleting an id that does not exist is not an error.
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Redirect> {
    RecordRepo::<R>::delete(&state.db, &id).await?;
    Ok(Redirect::to(R::BASE_PATH))
}

/// A lookup miss renders the page without a detail panel instead of failing.
fn missing<'a, R: Resource>(id: &'a str) -> Focus<'a, R> {
    let miss = CoreError::NotFound {
        entity: R::ENTITY,
        id: id.to_string(),
    };
    tracing::debug!(error = %miss, "Rendering page without record");
    Focus::Missing(id)
}
