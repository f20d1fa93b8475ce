//! # username-filter
//!
//! Loads the gClient username blocklist and decides whether messages from a
//! given username should be blocked.
//!
//! The crate is organised around three layers:
//!
//! 1. **[`defaults`]** -- the built-in pattern source text written the first
//!    time the application runs.
//! 2. **[`source`]** -- parses the line-oriented pattern file and compiles
//!    each surviving line into a case-insensitive regex, recording
//!    [`PatternDiagnostic`](source::PatternDiagnostic) values for lines that
//!    fail to compile.
//! 3. **[`filter`]** -- [`UsernameFilter`](filter::UsernameFilter), the
//!    stateful component that loads the pattern file from the application
//!    configuration directory (via [`ConfigStore`](store::ConfigStore)) and
//!    exposes the match predicate.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use username_filter::{ConfigStore, UsernameFilter};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = ConfigStore::from_host_config().unwrap();
//! let mut filter = UsernameFilter::new(store);
//! filter.initialize().await;
//!
//! if filter.test_username("californiagurls12345#twoblade.com") {
//!     println!("blocked");
//! }
//! # }
//! ```

pub mod defaults;
pub mod filter;
pub mod source;
pub mod store;

// Re-export the most commonly used types at the crate root for ergonomic
// imports (`use username_filter::UsernameFilter`).
pub use defaults::{DEFAULT_PATTERNS, PATTERNS_FILE};
pub use filter::UsernameFilter;
pub use source::PatternDiagnostic;
pub use store::{ConfigStore, StoreError};
