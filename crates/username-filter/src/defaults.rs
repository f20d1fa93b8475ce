//! Built-in pattern source.
//!
//! Written to the configuration directory the first time the application
//! runs, and used as the in-memory fallback whenever the pattern file
//! cannot be read.

/// Name of the pattern source file inside the application configuration
/// directory.
pub const PATTERNS_FILE: &str = "blocked-usernames.txt";

/// Directory under the host configuration directory that scopes every
/// gClient artifact (pattern file, settings).
pub const APP_DIR: &str = "gclient";

/// Default pattern source text.
///
/// A short header explaining the file format, plus one example spam-bot
/// filter. Kept as a single block so that writing it to disk and reading it
/// back round-trips byte-for-byte.
pub const DEFAULT_PATTERNS: &str = r"# gClient Username Filters
# One RegExp expression per line.
# If a username matches at least one expression, the messages will be blocked.
# Lines that are empty or begin with a hashtag (#) will be ignored.

# Spam bot filters
californiagurls\d\d\d\d\d#twoblade\.com";
