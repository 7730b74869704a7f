use super::escape;
use crate::forms::{GENRE_CHOICES, STATES};
use std::fmt::Write;

/// Labelled single-line text field.
pub fn text_input(label: &str, name: &str, value: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
            <input type="text" id="{name}" name="{name}" value="{}">"#,
        escape(value),
    )
}

/// Drop-down of state codes with `selected` preselected.
pub fn state_select(selected: &str) -> String {
    let options = STATES.iter().fold(String::new(), |mut out, code| {
        let marker = if *code == selected { " selected" } else { "" };
        let _ = write!(out, r#"<option value="{code}"{marker}>{code}</option>"#);
        out
    });
    format!(
        r#"<label for="state">State</label>
            <select id="state" name="state">{options}</select>"#
    )
}

/// Multi-select of genres. Stored genres outside the standard choices are kept as
/// extra options so an edit does not silently drop them.
pub fn genres_select(selected: &[String]) -> String {
    let mut choices: Vec<&str> = GENRE_CHOICES.to_vec();
    choices.extend(
        selected
            .iter()
            .map(String::as_str)
            .filter(|genre| !GENRE_CHOICES.contains(genre)),
    );
    let options = choices
        .into_iter()
        .fold(String::new(), |mut out, genre| {
            let marker = if selected.iter().any(|s| s == genre) {
                " selected"
            } else {
                ""
            };
            let genre = escape(genre);
            let _ = write!(out, r#"<option value="{genre}"{marker}>{genre}</option>"#);
            out
        });
    format!(
        r#"<label for="genres">Genres</label>
            <select id="genres" name="genres" multiple>{options}</select>"#
    )
}

/// Checkbox submitting `y` when ticked.
pub fn checkbox(label: &str, name: &str, checked: bool) -> String {
    let marker = if checked { " checked" } else { "" };
    format!(
        r#"<label><input type="checkbox" name="{name}" value="y"{marker}> {label}</label>"#
    )
}

/// Labelled multi-line text field.
pub fn textarea(label: &str, name: &str, value: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
            <textarea id="{name}" name="{name}">{}</textarea>"#,
        escape(value),
    )
}
