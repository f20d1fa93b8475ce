//! High-level username filter that owns the loaded pattern set and exposes
//! the match predicate.

use regex::Regex;
use tracing::{error, info, warn};

use crate::defaults::{DEFAULT_PATTERNS, PATTERNS_FILE};
use crate::source::{self, PatternDiagnostic};
use crate::store::ConfigStore;

// ---------------------------------------------------------------------------
// UsernameFilter
// ---------------------------------------------------------------------------

/// Main entry point for username block filtering.
///
/// A `UsernameFilter` is an owned value: construct one with the store to
/// load from, await [`initialize`](Self::initialize) once at startup, then
/// query it from wherever matching is needed. `initialize` takes `&mut
/// self` and the read paths take `&self`, so the borrow checker enforces
/// the load-before-query sequencing.
///
/// Every failure path inside the filter is absorbed: initialization always
/// completes in a usable state (falling back to the built-in default
/// patterns when the filesystem misbehaves) and the predicate never errors.
///
/// # Example
///
/// ```rust,no_run
/// use username_filter::{ConfigStore, UsernameFilter};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut filter = UsernameFilter::new(ConfigStore::from_host_config().unwrap());
/// filter.initialize().await;
/// assert!(!filter.test_username("a normal user"));
/// # }
/// ```
pub struct UsernameFilter {
    store: ConfigStore,
    /// Pattern lines of the most recent load, in source order. Includes
    /// lines that failed to compile (they are still part of the source and
    /// shown to the user), which is why `compiled` is a separate list.
    patterns: Vec<String>,
    /// Successfully compiled regexes, in source order.
    compiled: Vec<Regex>,
    /// Compile failures of the most recent load.
    diagnostics: Vec<PatternDiagnostic>,
    ready: bool,
}

impl UsernameFilter {
    /// Create an empty, not-yet-ready filter backed by `store`.
    pub fn new(store: ConfigStore) -> Self {
        Self {
            store,
            patterns: Vec::new(),
            compiled: Vec::new(),
            diagnostics: Vec::new(),
            ready: false,
        }
    }

    /// Load (or create) the pattern file and populate the pattern set.
    ///
    /// * File exists: read it and load its patterns.
    /// * File missing: write [`DEFAULT_PATTERNS`] to the store, then load
    ///   the default text.
    /// * Any I/O failure: log it and load the default text from memory
    ///   without touching the filesystem.
    ///
    /// The filter is ready when this returns, in every case. Calling it
    /// again re-reads the source and replaces the pattern set wholesale.
    pub async fn initialize(&mut self) {
        if self.store.exists(PATTERNS_FILE).await {
            match self.store.read_to_string(PATTERNS_FILE).await {
                Ok(text) => {
                    self.load(&text);
                    info!(
                        count = self.patterns.len(),
                        "loaded existing username blocking patterns"
                    );
                }
                Err(e) => {
                    error!(%e, "failed to read pattern file; using built-in defaults");
                    self.load(DEFAULT_PATTERNS);
                }
            }
        } else {
            info!("pattern file not found; creating default username patterns file");
            if let Err(e) = self.store.write(PATTERNS_FILE, DEFAULT_PATTERNS).await {
                error!(%e, "failed to write default pattern file; continuing with in-memory defaults");
            }
            self.load(DEFAULT_PATTERNS);
        }

        self.ready = true;
    }

    /// Test whether `candidate` matches any loaded pattern.
    ///
    /// Patterns are evaluated in source order, case-insensitively, with a
    /// short-circuit on the first match. Returns `false` when the filter
    /// has not been initialized yet (with a warning -- the answer is not
    /// authoritative), when `candidate` is empty, or when nothing matches.
    pub fn test_username(&self, candidate: &str) -> bool {
        if !self.ready {
            warn!("username filter queried before initialization");
            return false;
        }

        if candidate.is_empty() {
            return false;
        }

        self.compiled.iter().any(|re| re.is_match(candidate))
    }

    /// Re-read and return the full pattern source text from the store.
    ///
    /// On any read failure the built-in default text is returned instead.
    pub async fn raw_source(&self) -> String {
        match self.store.read_to_string(PATTERNS_FILE).await {
            Ok(text) => text,
            Err(e) => {
                error!(%e, "failed to read pattern source; returning built-in defaults");
                DEFAULT_PATTERNS.to_string()
            }
        }
    }

    /// The pattern lines of the most recent load, in source order. No
    /// re-read from storage; empty before [`initialize`](Self::initialize).
    pub fn loaded_patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Compile failures recorded by the most recent load.
    pub fn diagnostics(&self) -> &[PatternDiagnostic] {
        &self.diagnostics
    }

    /// Whether [`initialize`](Self::initialize) has completed.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Replace the pattern set from raw source text.
    fn load(&mut self, text: &str) {
        self.patterns = source::pattern_lines(text);
        let (compiled, diagnostics) = source::compile(&self.patterns);
        self.compiled = compiled;
        self.diagnostics = diagnostics;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
