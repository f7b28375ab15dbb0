//! Display helpers
//!
//! Pure string transforms consumed by the presentation layer. None of these
//! run inside the aggregation pipeline, which passes decoded values through
//! unchanged.

use std::sync::LazyLock;

use regex::Regex;

/// Rating value the catalog uses for unrated works
pub const RATING_UNRATED: &str = "0";

static BRACKETED_NOTES: LazyLock<Regex> = LazyLock::new(|| {
    // Pattern is a compile-time constant and always valid.
    #[allow(clippy::expect_used)]
    Regex::new(r"\[.*?\]").expect("bracket pattern compiles")
});

/// Strip bracketed annotations from a raw author string
///
/// Catalog author fields carry editorial notes in square brackets
/// (translator credits, name variants). Those are removed for display.
///
/// # Examples
///
/// ```
/// use pubplans::utils::clean_author_name;
///
/// assert_eq!(clean_author_name("Дж. Р. Р. Толкин [пер. с англ.]"),
///            "Дж. Р. Р. Толкин ");
/// assert_eq!(clean_author_name("A. Author"), "A. Author");
/// ```
pub fn clean_author_name(author: &str) -> String {
    BRACKETED_NOTES.replace_all(author, "").into_owned()
}

/// Rating text suitable for display, or `None` when it should be hidden
///
/// The pipeline delivers the raw decoded rating, including the catalog's
/// `"0"` sentinel for unrated works; the detail screen hides the rating row
/// in that case.
pub fn display_rating(rating_text: &Option<String>) -> Option<&str> {
    rating_text
        .as_deref()
        .filter(|text| *text != RATING_UNRATED)
}
