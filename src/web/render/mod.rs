//! HTML page rendering.
//!
//! Pages are plain `format!` templates wrapped in a shared [`layout`]. Every value
//! that came from the database or a request goes through [`escape`].

/// Artist pages
pub mod artists;
/// 404 and 500 pages
pub mod errors;
/// Form widgets shared by the create and edit pages
pub mod form;
/// Show pages
pub mod shows;
/// Venue pages
pub mod venues;

use std::fmt::Write;

/// Whether a notification reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    /// The submission was saved
    Success,
    /// The submission was rejected
    Error,
}

/// One-shot notification shown at the top of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    /// Success or failure
    pub kind: FlashKind,
    /// Text shown to the user
    pub message: String,
}

impl Flash {
    /// Notification for a completed submission.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    /// Notification for a rejected submission.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

/// Escapes text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps `body` in the site chrome: head, navigation and the notification banner.
#[must_use]
pub fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
    let banner = flash.map_or_else(String::new, |flash| {
        let class = match flash.kind {
            FlashKind::Success => "flash flash-success",
            FlashKind::Error => "flash flash-error",
        };
        format!(
            r#"<div class="{class}" role="alert">{}</div>"#,
            escape(&flash.message)
        )
    });

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Fyyur</title>
    <style>
        body {{ font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; color: #222; }}
        nav {{ background: #1a1a1a; padding: 12px 20px; }}
        nav a {{ color: #e0e0e0; margin-right: 16px; text-decoration: none; }}
        main {{ padding: 20px; }}
        .flash {{ padding: 10px 20px; }}
        .flash-success {{ background: #d1fae5; }}
        .flash-error {{ background: #fee2e2; }}
        .genre {{ display: inline-block; background: #eee; border-radius: 10px; padding: 2px 8px; margin: 2px; }}
        label {{ display: block; margin-top: 10px; }}
    </style>
</head>
<body>
    <nav>
        <a href="/">Fyyur</a>
        <a href="/venues">Venues</a>
        <a href="/artists">Artists</a>
        <a href="/shows">Shows</a>
    </nav>
    {banner}
    <main>
{body}
    </main>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// The landing page.
#[must_use]
pub fn home(flash: Option<&Flash>) -> String {
    let body = r#"        <h1>Fyyur</h1>
        <p>Find venues to play and artists to book.</p>
        <ul>
            <li><a href="/venues/create">Post a venue</a></li>
            <li><a href="/artists/create">Post an artist</a></li>
            <li><a href="/shows/create">List a show</a></li>
        </ul>"#;
    layout("Home", flash, body)
}

/// The search box shown on venue and artist listings.
fn search_box(action: &str, term: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
            <input type="search" name="search_term" value="{}" placeholder="Find by name">
            <button type="submit">Search</button>
        </form>"#,
        escape(term)
    )
}

/// Genre badges.
fn genre_badges<'a>(genres: impl Iterator<Item = &'a str>) -> String {
    genres.fold(String::new(), |mut out, genre| {
        let _ = write!(out, r#"<span class="genre">{}</span>"#, escape(genre));
        out
    })
}

/// `<a>` to `href`, or nothing when there is no link.
fn optional_link(label: &str, href: Option<&str>) -> String {
    href.map_or_else(String::new, |href| {
        format!(
            r#"<p><a href="{}">{}</a></p>"#,
            escape(href),
            escape(label)
        )
    })
}

/// `<img>` for an optional image link.
fn optional_image(alt: &str, src: Option<&str>) -> String {
    src.map_or_else(String::new, |src| {
        format!(
            r#"<img src="{}" alt="{}" width="200">"#,
            escape(src),
            escape(alt)
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_layout_shows_flash() {
        let page = home(Some(&Flash::success("Venue <Hop> was successfully listed!")));
        assert!(page.contains("flash-success"));
        assert!(page.contains("Venue &lt;Hop&gt; was successfully listed!"));

        let plain = home(None);
        assert!(!plain.contains("role=\"alert\""));
    }
}
