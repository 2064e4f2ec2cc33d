//! Application-wide constants

/// Deepest nesting level of a navigation item (0 = top level).
pub const MAX_NAV_DEPTH: usize = 2;
/// Longest navigation label, in characters.
pub const NAV_TITLE_MAX_CHARS: usize = 100;
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 900;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const PAGE_PATH_SEGMENT: &str = "pages";
