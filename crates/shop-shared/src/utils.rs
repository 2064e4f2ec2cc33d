//! Utility functions

use crate::constants::PAGE_PATH_SEGMENT;

/// Trim and collapse inner whitespace of a display label.
pub fn normalize_title(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized label cut to at most `max_chars` characters.
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    let normalized = normalize_title(title);
    match normalized.char_indices().nth(max_chars) {
        Some((end, _)) => normalized[..end].trim_end().to_string(),
        None => normalized,
    }
}

/// Storefront URL of a content page.
pub fn page_url(store_slug: &str, page_slug: &str) -> String {
    format!(
        "/{}/{}/{}",
        store_slug.trim_matches('/'),
        PAGE_PATH_SEGMENT,
        page_slug.trim_matches('/')
    )
}
