use super::{
    escape,
    form::{checkbox, genres_select, state_select, text_input, textarea},
    genre_badges, layout, optional_image, optional_link, search_box,
};
use crate::{
    core::{
        SearchResults,
        artist::{ArtistDetail, ArtistListing, ArtistShow, ArtistSummary},
    },
    forms::ArtistForm,
};
use std::fmt::Write;

/// Artist listing page.
#[must_use]
pub fn list(artists: &[ArtistListing]) -> String {
    let items = artists.iter().fold(String::new(), |mut out, artist| {
        let _ = write!(
            out,
            r#"<li><a href="/artists/{}">{}</a></li>"#,
            artist.id,
            escape(&artist.name)
        );
        out
    });
    let body = format!(
        "        <h1>Artists</h1>\n        {}\n        <ul>{items}</ul>",
        search_box("/artists/search", "")
    );
    layout("Artists", None, &body)
}

/// Artist search results page.
#[must_use]
pub fn search(term: &str, results: &SearchResults<ArtistSummary>) -> String {
    let items = results.data.iter().fold(String::new(), |mut out, artist| {
        let _ = write!(
            out,
            r#"<li><a href="/artists/{}">{}</a> <small>{} upcoming shows</small></li>"#,
            artist.id,
            escape(&artist.name),
            artist.num_upcoming_shows
        );
        out
    });
    let body = format!(
        "        <h1>Artists</h1>\n        {}\n        <h3>Number of search results for \"{}\": {}</h3>\n        <ul>{items}</ul>",
        search_box("/artists/search", term),
        escape(term),
        results.count,
    );
    layout("Artist Search", None, &body)
}

fn show_items(shows: &[ArtistShow]) -> String {
    if shows.is_empty() {
        return "<p>None.</p>".to_string();
    }
    let items = shows.iter().fold(String::new(), |mut out, show| {
        let _ = write!(
            out,
            r#"<li>{} <a href="/venues/{}">{}</a> <small>{}</small></li>"#,
            optional_image(&show.venue_name, show.venue_image_link.as_deref()),
            show.venue_id,
            escape(&show.venue_name),
            escape(&show.start_time)
        );
        out
    });
    format!("<ul>{items}</ul>")
}

/// Artist page with past and upcoming shows.
#[must_use]
pub fn detail(detail: &ArtistDetail) -> String {
    let artist = &detail.artist;
    let seeking = if artist.seeking_venue {
        format!(
            "<p><strong>Currently seeking performance venues</strong></p><p>{}</p>",
            escape(artist.seeking_description.as_deref().unwrap_or_default())
        )
    } else {
        "<p>Not currently seeking performance venues</p>".to_string()
    };

    let body = format!(
        r#"        <h1>{name}</h1>
        <p><small>ID: {id}</small></p>
        <div>{genres}</div>
        {image}
        <p>{city}, {state}</p>
        <p>{phone}</p>
        {website}
        {facebook}
        {seeking}
        <p><a href="/artists/{id}/edit">Edit</a></p>
        <h2>{upcoming_count} Upcoming Shows</h2>
        {upcoming}
        <h2>{past_count} Past Shows</h2>
        {past}"#,
        name = escape(&artist.name),
        id = artist.id,
        genres = genre_badges(artist.genres.names()),
        image = optional_image(&artist.name, artist.image_link.as_deref()),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = escape(artist.phone.as_deref().unwrap_or_default()),
        website = optional_link("Website", artist.website_link.as_deref()),
        facebook = optional_link("Facebook", artist.facebook_link.as_deref()),
        upcoming_count = detail.upcoming_shows_count,
        upcoming = show_items(&detail.upcoming_shows),
        past_count = detail.past_shows_count,
        past = show_items(&detail.past_shows),
    );
    layout(&artist.name, None, &body)
}

/// Create page when `artist_id` is `None`, edit page otherwise.
#[must_use]
pub fn form_page(form: &ArtistForm, artist_id: Option<i64>) -> String {
    let (title, action) = artist_id.map_or_else(
        || ("List a new artist".to_string(), "/artists/create".to_string()),
        |id| ("Edit artist".to_string(), format!("/artists/{id}/edit")),
    );
    let body = format!(
        r#"        <h1>{title}</h1>
        <form method="post" action="{action}">
            {name}
            {city}
            {state}
            {phone}
            {image_link}
            {genres}
            {facebook_link}
            {website_link}
            {seeking}
            {description}
            <p><button type="submit">Save artist</button></p>
        </form>"#,
        name = text_input("Name", "name", &form.name),
        city = text_input("City", "city", &form.city),
        state = state_select(&form.state),
        phone = text_input("Phone", "phone", &form.phone),
        image_link = text_input("Image link", "image_link", &form.image_link),
        genres = genres_select(&form.genres),
        facebook_link = text_input("Facebook link", "facebook_link", &form.facebook_link),
        website_link = text_input("Website link", "website_link", &form.website_link),
        seeking = checkbox("Looking for venues", "seeking_venue", form.is_seeking()),
        description = textarea(
            "Seeking description",
            "seeking_description",
            &form.seeking_description
        ),
    );
    layout(&title, None, &body)
}
