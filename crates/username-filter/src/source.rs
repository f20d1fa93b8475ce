//! Pattern source parsing and compilation.
//!
//! The pattern file is a flat, line-oriented text format: blank lines and
//! `#`-comments are non-semantic, every other line is a regular expression.
//! Parsing is a pure text transform; compilation happens once per load and
//! produces a [`PatternDiagnostic`] for every line that is not a valid
//! regex instead of failing the load.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::warn;

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Extract the pattern lines from raw source text.
///
/// Lines are trimmed; lines that are empty after trimming or whose trimmed
/// form starts with `#` are discarded. Original order is preserved.
pub fn pattern_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Compilation
// ---------------------------------------------------------------------------

/// A pattern line that failed to compile as a regular expression.
///
/// Recorded once at load time; the pattern is treated as non-matching for
/// the lifetime of the load rather than re-attempted on every match call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternDiagnostic {
    /// The raw pattern line as it appears in the source file.
    pub pattern: String,
    /// The regex compile error, rendered as text.
    pub error: String,
}

/// Compile every pattern line into a case-insensitive regex.
///
/// The file patterns are user-authored and carry no `(?i)` prefix, so
/// case-insensitivity is applied at build time. Returns the successfully
/// compiled regexes in original order together with a diagnostic for every
/// line that failed to compile.
pub(crate) fn compile(patterns: &[String]) -> (Vec<Regex>, Vec<PatternDiagnostic>) {
    let mut compiled = Vec::with_capacity(patterns.len());
    let mut diagnostics = Vec::new();

    for raw in patterns {
        match RegexBuilder::new(raw).case_insensitive(true).build() {
            Ok(re) => compiled.push(re),
            Err(e) => {
                warn!(
                    pattern = %raw,
                    error = %e,
                    "invalid username filter pattern; it will never match"
                );
                diagnostics.push(PatternDiagnostic {
                    pattern: raw.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    (compiled, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // -- parsing ----------------------------------------------------------

    #[test]
    fn blank_and_comment_lines_are_dropped() {
        let text = "# header\n\nfoo\n   \n# trailing comment\nbar\n";
        assert_eq!(pattern_lines(text), lines(&["foo", "bar"]));
    }

    #[test]
    fn lines_are_trimmed() {
        let text = "  foo\\d+  \n\tbar\t\n";
        assert_eq!(pattern_lines(text), lines(&["foo\\d+", "bar"]));
    }

    #[test]
    fn indented_comments_are_dropped() {
        let text = "   # indented comment\nkeep";
        assert_eq!(pattern_lines(text), lines(&["keep"]));
    }

    #[test]
    fn comments_only_source_yields_no_patterns() {
        let text = "# one\n# two\n\n# three\n";
        assert!(pattern_lines(text).is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let text = "zzz\naaa\nmmm";
        assert_eq!(pattern_lines(text), lines(&["zzz", "aaa", "mmm"]));
    }

    // -- compilation ------------------------------------------------------

    #[test]
    fn valid_patterns_compile_case_insensitive() {
        let (compiled, diagnostics) = compile(&lines(&[r"foo\d+"]));
        assert!(diagnostics.is_empty());
        assert_eq!(compiled.len(), 1);
        assert!(compiled[0].is_match("FOO123"));
    }

    #[test]
    fn invalid_pattern_produces_diagnostic_and_keeps_rest() {
        let (compiled, diagnostics) = compile(&lines(&["(unbalanced", "valid"]));
        assert_eq!(compiled.len(), 1);
        assert!(compiled[0].is_match("valid"));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].pattern, "(unbalanced");
        assert!(!diagnostics[0].error.is_empty());
    }

    #[test]
    fn diagnostic_serializes() {
        let (_, diagnostics) = compile(&lines(&["[broken"]));
        let json = serde_json::to_string(&diagnostics).expect("should serialize");
        let back: Vec<PatternDiagnostic> =
            serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].pattern, "[broken");
    }
}
