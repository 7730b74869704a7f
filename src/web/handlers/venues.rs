//! `/venues` routes.

use super::{rejected_form, rejected_path};
use crate::{
    core::venue,
    forms::{SearchForm, VenueForm},
    web::{
        AppState,
        error::{PageError, SubmissionError},
        render::{self, Flash},
    },
};
use axum::{
    extract::{Path, State, rejection::PathRejection},
    response::{Html, Redirect},
};
use axum_extra::extract::{Form, FormRejection};
use chrono::Utc;

/// `GET /venues`: venues grouped by area.
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let areas = venue::list_venue_areas(&state.db, Utc::now()).await?;
    Ok(Html(render::venues::list(&areas)))
}

/// `POST /venues/search`
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let results = venue::search_venues(&state.db, &form.search_term, Utc::now()).await?;
    Ok(Html(render::venues::search(&form.search_term, &results)))
}

/// `GET /venues/{id}`
pub async fn detail(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>, PageError> {
    let Ok(Path(venue_id)) = id else {
        return Err(PageError::NotFound);
    };
    let detail = venue::get_venue_detail(&state.db, venue_id, Utc::now()).await?;
    Ok(Html(render::venues::detail(&detail)))
}

/// `GET /venues/create`
pub async fn create_form() -> Html<String> {
    Html(render::venues::form_page(&VenueForm::default(), None))
}

/// `POST /venues/create`
pub async fn create_submission(
    State(state): State<AppState>,
    form: Result<Form<VenueForm>, FormRejection>,
) -> Result<Html<String>, SubmissionError> {
    let Form(form) = form.map_err(|rejection| {
        SubmissionError::new(
            "An error occurred. Venue could not be listed.",
            rejected_form(&rejection),
        )
    })?;
    let name = form.name.trim().to_string();
    let failed = |source| {
        SubmissionError::new(
            format!("An error occurred. Venue {name} could not be listed."),
            source,
        )
    };

    let input = form.validate().map_err(failed)?;
    let venue = venue::create_venue(&state.db, input)
        .await
        .map_err(failed)?;

    Ok(Html(render::home(Some(&Flash::success(format!(
        "Venue {} was successfully listed!",
        venue.name
    ))))))
}

/// `GET /venues/{id}/edit`: the form filled with the stored values.
pub async fn edit_form(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>, PageError> {
    let Ok(Path(venue_id)) = id else {
        return Err(PageError::NotFound);
    };
    let venue = venue::require_venue(&state.db, venue_id).await?;
    Ok(Html(render::venues::form_page(
        &VenueForm::from(&venue),
        Some(venue.id),
    )))
}

/// `POST /venues/{id}/edit`: redirects to the venue page on success.
pub async fn edit_submission(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    form: Result<Form<VenueForm>, FormRejection>,
) -> Result<Redirect, SubmissionError> {
    let Path(venue_id) = id.map_err(|rejection| {
        SubmissionError::new(
            "An error occurred. Venue could not be updated.",
            rejected_path(&rejection),
        )
    })?;
    let Form(form) = form.map_err(|rejection| {
        SubmissionError::new(
            "An error occurred. Venue could not be updated.",
            rejected_form(&rejection),
        )
    })?;
    let name = form.name.trim().to_string();
    let failed = |source| {
        SubmissionError::new(
            format!("An error occurred. Venue {name} could not be updated."),
            source,
        )
    };

    let input = form.validate().map_err(failed)?;
    venue::update_venue(&state.db, venue_id, input)
        .await
        .map_err(failed)?;

    Ok(Redirect::to(&format!("/venues/{venue_id}")))
}

/// `DELETE /venues/{id}/delete`
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>, SubmissionError> {
    let Path(venue_id) = id.map_err(|rejection| {
        SubmissionError::new(
            "An error occurred. Venue could not be deleted.",
            rejected_path(&rejection),
        )
    })?;
    let venue = venue::delete_venue(&state.db, venue_id)
        .await
        .map_err(|source| {
            SubmissionError::new(
                format!("An error occurred. Venue {venue_id} could not be deleted."),
                source,
            )
        })?;

    Ok(Html(render::home(Some(&Flash::success(format!(
        "Venue {} was successfully deleted.",
        venue.name
    ))))))
}
