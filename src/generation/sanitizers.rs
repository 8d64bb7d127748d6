//! Sanitizers for free text embedded in generated documentation comments

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Makes description text safe for a single-line `/** ... */` or ` * ...` comment.
///
/// This function:
/// - Collapses every whitespace run (including newlines) into a single space
/// - Trims the edges
/// - Breaks up `*/` so the text cannot close the surrounding comment
///
/// # Examples
/// ```
/// use apiboost::generation::sanitizers::sanitize_doc_text;
///
/// assert_eq!(sanitize_doc_text("  page\n size "), "page size");
/// assert_eq!(sanitize_doc_text("a */ b"), "a *\\/ b");
/// ```
pub fn sanitize_doc_text(input: &str) -> String {
    WHITESPACE_RE
        .replace_all(input.trim(), " ")
        .replace("*/", "*\\/")
}
