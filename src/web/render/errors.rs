use super::layout;

/// 404 page.
#[must_use]
pub fn not_found() -> String {
    layout(
        "Not Found",
        None,
        "        <h1>404</h1>\n        <p>Sorry, we couldn't find that page.</p>",
    )
}

/// 500 page.
#[must_use]
pub fn server_error() -> String {
    layout(
        "Server Error",
        None,
        "        <h1>500</h1>\n        <p>Something went wrong on our end.</p>",
    )
}
