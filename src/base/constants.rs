//! Domain constants.

/// File extensions scanned when the configuration does not name any.
pub const DEFAULT_EXTENSIONS: &[&str] = &["vhd", "vhdl"];

/// Line-comment marker.
pub const COMMENT_MARKER: &str = "--";

/// Character repeated to form a group banner (`-- ==========`).
pub const BANNER_CHAR: char = '=';

/// Shortest run of [`BANNER_CHAR`] recognised as a banner.
pub const BANNER_MIN_RUN: usize = 3;

/// Default expression stored for generics and constants declared without one.
pub const SENTINEL_DEFAULT: &str = "UNDEFINED";

/// Default-value assignment token.
pub const ASSIGN: &str = ":=";

/// Separator between segments of a qualified name.
pub const PATH_SEPARATOR: char = '.';
