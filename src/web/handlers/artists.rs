//! `/artists` routes.

use super::{rejected_form, rejected_path};
use crate::{
    core::artist,
    forms::{ArtistForm, SearchForm},
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

/// `GET /artists`
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let artists = artist::list_artists(&state.db).await?;
    Ok(Html(render::artists::list(&artists)))
}

/// `POST /artists/search`
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let results = artist::search_artists(&state.db, &form.search_term, Utc::now()).await?;
    Ok(Html(render::artists::search(&form.search_term, &results)))
}

/// `GET /artists/{id}`
pub async fn detail(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>, PageError> {
    let Ok(Path(artist_id)) = id else {
        return Err(PageError::NotFound);
    };
    let detail = artist::get_artist_detail(&state.db, artist_id, Utc::now()).await?;
    Ok(Html(render::artists::detail(&detail)))
}

/// `GET /artists/create`
pub async fn create_form() -> Html<String> {
    Html(render::artists::form_page(&ArtistForm::default(), None))
}

/// `POST /artists/create`
pub async fn create_submission(
    State(state): State<AppState>,
    form: Result<Form<ArtistForm>, FormRejection>,
) -> Result<Html<String>, SubmissionError> {
    let Form(form) = form.map_err(|rejection| {
        SubmissionError::new(
            "An error occurred. Artist could not be listed.",
            rejected_form(&rejection),
        )
    })?;
    let name = form.name.trim().to_string();
    let failed = |source| {
        SubmissionError::new(
            format!("An error occurred. Artist {name} could not be listed."),
            source,
        )
    };

    let input = form.validate().map_err(failed)?;
    let artist = artist::create_artist(&state.db, input)
        .await
        .map_err(failed)?;

    Ok(Html(render::home(Some(&Flash::success(format!(
        "Artist {} was successfully listed!",
        artist.name
    ))))))
}

/// `GET /artists/{id}/edit`
pub async fn edit_form(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>, PageError> {
    let Ok(Path(artist_id)) = id else {
        return Err(PageError::NotFound);
    };
    let artist = artist::require_artist(&state.db, artist_id).await?;
    Ok(Html(render::artists::form_page(
        &ArtistForm::from(&artist),
        Some(artist.id),
    )))
}

/// `POST /artists/{id}/edit`: redirects to the artist page on success.
pub async fn edit_submission(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    form: Result<Form<ArtistForm>, FormRejection>,
) -> Result<Redirect, SubmissionError> {
    let Path(artist_id) = id.map_err(|rejection| {
        SubmissionError::new(
            "An error occurred. Artist could not be updated.",
            rejected_path(&rejection),
        )
    })?;
    let Form(form) = form.map_err(|rejection| {
        SubmissionError::new(
            "An error occurred. Artist could not be updated.",
            rejected_form(&rejection),
        )
    })?;
    let name = form.name.trim().to_string();
    let failed = |source| {
        SubmissionError::new(
            format!("An error occurred. Artist {name} could not be updated."),
            source,
        )
    };

    let input = form.validate().map_err(failed)?;
    artist::update_artist(&state.db, artist_id, input)
        .await
        .map_err(failed)?;

    Ok(Redirect::to(&format!("/artists/{artist_id}")))
}
