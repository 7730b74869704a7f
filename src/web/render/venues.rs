use super::{
    escape,
    form::{checkbox, genres_select, state_select, text_input, textarea},
    genre_badges, layout, optional_image, optional_link, search_box,
};
use crate::{
    core::{
        SearchResults,
        venue::{Area, VenueDetail, VenueShow, VenueSummary},
    },
    forms::VenueForm,
};
use std::fmt::Write;

fn summary_items(venues: &[VenueSummary]) -> String {
    venues.iter().fold(String::new(), |mut out, venue| {
        let _ = write!(
            out,
            r#"<li><a href="/venues/{}">{}</a> <small>{} upcoming shows</small></li>"#,
            venue.id,
            escape(&venue.name),
            venue.num_upcoming_shows
        );
        out
    })
}

/// Venue listing page, one section per area.
#[must_use]
pub fn list(areas: &[Area]) -> String {
    let mut body = format!("        <h1>Venues</h1>\n        {}\n", search_box("/venues/search", ""));
    if areas.is_empty() {
        body.push_str("        <p>No venues listed yet.</p>\n");
    }
    for area in areas {
        let _ = write!(
            body,
            "        <h2>{}, {}</h2>\n        <ul>{}</ul>\n",
            escape(&area.city),
            escape(&area.state),
            summary_items(&area.venues)
        );
    }
    layout("Venues", None, &body)
}

/// Venue search results page.
#[must_use]
pub fn search(term: &str, results: &SearchResults<VenueSummary>) -> String {
    let body = format!(
        "        <h1>Venues</h1>\n        {}\n        <h3>Number of search results for \"{}\": {}</h3>\n        <ul>{}</ul>",
        search_box("/venues/search", term),
        escape(term),
        results.count,
        summary_items(&results.data)
    );
    layout("Venue Search", None, &body)
}

fn show_items(shows: &[VenueShow]) -> String {
    if shows.is_empty() {
        return "<p>None.</p>".to_string();
    }
    let items = shows.iter().fold(String::new(), |mut out, show| {
        let _ = write!(
            out,
            r#"<li>{} <a href="/artists/{}">{}</a> <small>{}</small></li>"#,
            optional_image(&show.artist_name, show.artist_image_link.as_deref()),
            show.artist_id,
            escape(&show.artist_name),
            escape(&show.start_time)
        );
        out
    });
    format!("<ul>{items}</ul>")
}

/// Venue page with past and upcoming shows.
#[must_use]
pub fn detail(detail: &VenueDetail) -> String {
    let venue = &detail.venue;
    let seeking = if venue.seeking_talent {
        format!(
            "<p><strong>Currently seeking talent</strong></p><p>{}</p>",
            escape(venue.seeking_description.as_deref().unwrap_or_default())
        )
    } else {
        "<p>Not currently seeking talent</p>".to_string()
    };

    let body = format!(
        r#"        <h1>{name}</h1>
        <p><small>ID: {id}</small></p>
        <div>{genres}</div>
        {image}
        <p>{address}<br>{city}, {state}</p>
        <p>{phone}</p>
        {website}
        {facebook}
        {seeking}
        <p><a href="/venues/{id}/edit">Edit</a>
           <button type="button" onclick="fetch('/venues/{id}/delete', {{ method: 'DELETE' }}).then((response) => response.text()).then((page) => {{ document.open(); document.write(page); document.close(); }})">Delete</button></p>
        <h2>{upcoming_count} Upcoming Shows</h2>
        {upcoming}
        <h2>{past_count} Past Shows</h2>
        {past}"#,
        name = escape(&venue.name),
        id = venue.id,
        genres = genre_badges(venue.genres.names()),
        image = optional_image(&venue.name, venue.image_link.as_deref()),
        address = escape(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = escape(venue.phone.as_deref().unwrap_or_default()),
        website = optional_link("Website", venue.website_link.as_deref()),
        facebook = optional_link("Facebook", venue.facebook_link.as_deref()),
        upcoming_count = detail.upcoming_shows_count,
        upcoming = show_items(&detail.upcoming_shows),
        past_count = detail.past_shows_count,
        past = show_items(&detail.past_shows),
    );
    layout(&venue.name, None, &body)
}

/// Create page when `venue_id` is `None`, edit page otherwise.
#[must_use]
pub fn form_page(form: &VenueForm, venue_id: Option<i64>) -> String {
    let (title, action) = venue_id.map_or_else(
        || ("List a new venue".to_string(), "/venues/create".to_string()),
        |id| ("Edit venue".to_string(), format!("/venues/{id}/edit")),
    );
    let body = format!(
        r#"        <h1>{title}</h1>
        <form method="post" action="{action}">
            {name}
            {city}
            {state}
            {address}
            {phone}
            {image_link}
            {genres}
            {facebook_link}
            {website_link}
            {seeking}
            {description}
            <p><button type="submit">Save venue</button></p>
        </form>"#,
        name = text_input("Name", "name", &form.name),
        city = text_input("City", "city", &form.city),
        state = state_select(&form.state),
        address = text_input("Address", "address", &form.address),
        phone = text_input("Phone", "phone", &form.phone),
        image_link = text_input("Image link", "image_link", &form.image_link),
        genres = genres_select(&form.genres),
        facebook_link = text_input("Facebook link", "facebook_link", &form.facebook_link),
        website_link = text_input("Website link", "website_link", &form.website_link),
        seeking = checkbox("Looking for talent", "seeking_talent", form.is_seeking()),
        description = textarea(
            "Seeking description",
            "seeking_description",
            &form.seeking_description
        ),
    );
    layout(&title, None, &body)
}
