//! Core business logic - framework-agnostic venue, artist and show operations.
//!
//! Every function takes the database connection explicitly and returns plain data
//! that the web layer renders. Timestamps that decide "upcoming" versus "past" are
//! passed in by the caller.

/// Artist listing, search, detail and mutations
pub mod artist;
/// Date formatting for show start times
pub mod format;
/// Seeding an empty database
pub mod seed;
/// Show listing and creation
pub mod show;
/// Venue listing, search, detail and mutations
pub mod venue;

use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{ColumnTrait, IntoSimpleExpr};

const LIKE_ESCAPE: char = '\\';

/// Builds a case-insensitive `LOWER(column) LIKE %term% ESCAPE '\'` condition.
///
/// SQLite's `LOWER()` only folds ASCII, so the term is folded the same way. `%`
/// and `_` in the term match literally.
pub(crate) fn name_contains<C>(column: C, term: &str) -> SimpleExpr
where
    C: ColumnTrait,
{
    let pattern = format!("%{}%", escape_like(&term.trim().to_ascii_lowercase()));
    Expr::expr(Func::lower(column.into_simple_expr()))
        .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Result of a name search: how many records matched and their summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults<T> {
    /// Number of matching records
    pub count: usize,
    /// The matching records
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for SearchResults<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}
