// src/extractors/categories.rs
use super::markers::{CATEGORY_PREFIX, NEEDS_CATEGORIES, NEEDS_CATEGORIES_LINE, NO_CATEGORIES};

/// Collects the page's category lines and flags the entry for categorization.
///
/// A `No mufareso` category is rewritten in place to `Awena mufareso`;
/// otherwise `[[Kategori:Awena mufareso]]` is appended unless the page
/// already carries it.
pub fn find_categories(text: &str) -> String {
    let existing = text
        .lines()
        .filter(|line| line.starts_with(CATEGORY_PREFIX))
        .collect::<Vec<_>>()
        .join("\n");
    let existing = existing.trim();

    if existing.contains(NO_CATEGORIES) {
        return existing.replace(NO_CATEGORIES, NEEDS_CATEGORIES);
    }
    if existing.contains(NEEDS_CATEGORIES_LINE) {
        return existing.to_string();
    }
    if existing.is_empty() {
        return NEEDS_CATEGORIES_LINE.to_string();
    }
    format!("{}\n{}", existing, NEEDS_CATEGORIES_LINE)
}
