use super::{escape, layout, optional_image};
use crate::core::show::ShowListing;
use std::fmt::Write;

/// Show listing page.
#[must_use]
pub fn list(shows: &[ShowListing]) -> String {
    let items = shows.iter().fold(String::new(), |mut out, show| {
        let _ = write!(
            out,
            r#"<li>{} <a href="/artists/{}">{}</a> at <a href="/venues/{}">{}</a> <small>{}</small></li>"#,
            optional_image(&show.artist_name, show.artist_image_link.as_deref()),
            show.artist_id,
            escape(&show.artist_name),
            show.venue_id,
            escape(&show.venue_name),
            escape(&show.start_time)
        );
        out
    });
    let body = if shows.is_empty() {
        "        <h1>Shows</h1>\n        <p>No shows listed yet.</p>".to_string()
    } else {
        format!("        <h1>Shows</h1>\n        <ul>{items}</ul>")
    };
    layout("Shows", None, &body)
}

/// Show create page, with `default_start` pre-filled.
#[must_use]
pub fn form_page(default_start: &str) -> String {
    let body = format!(
        r#"        <h1>List a new show</h1>
        <form method="post" action="/shows/create">
            <label for="artist_id">Artist ID</label>
            <input type="text" id="artist_id" name="artist_id">
            <label for="venue_id">Venue ID</label>
            <input type="text" id="venue_id" name="venue_id">
            <label for="start_time">Start time</label>
            <input type="text" id="start_time" name="start_time" value="{}">
            <p><button type="submit">Create show</button></p>
        </form>"#,
        escape(default_start)
    );
    layout("New Show", None, &body)
}
