//! `/shows` routes.

use super::rejected_form;
use crate::{
    core::show,
    forms::ShowForm,
    web::{
        AppState,
        error::{PageError, SubmissionError},
        render::{self, Flash},
    },
};
use axum::{extract::State, response::Html};
use axum_extra::extract::{Form, FormRejection};
use chrono::Utc;

const SHOW_FAILED: &str = "An error occurred. Show could not be listed.";

/// `GET /shows`
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let shows = show::list_shows(&state.db).await?;
    Ok(Html(render::shows::list(&shows)))
}

/// `GET /shows/create`, pre-filled with the current time.
pub async fn create_form() -> Html<String> {
    let default_start = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
    Html(render::shows::form_page(&default_start))
}

/// `POST /shows/create`
pub async fn create_submission(
    State(state): State<AppState>,
    form: Result<Form<ShowForm>, FormRejection>,
) -> Result<Html<String>, SubmissionError> {
    let Form(form) =
        form.map_err(|rejection| SubmissionError::new(SHOW_FAILED, rejected_form(&rejection)))?;

    let input = form
        .validate()
        .map_err(|source| SubmissionError::new(SHOW_FAILED, source))?;
    show::create_show(&state.db, input)
        .await
        .map_err(|source| SubmissionError::new(SHOW_FAILED, source))?;

    Ok(Html(render::home(Some(&Flash::success(
        "Show was successfully listed!",
    )))))
}
