//! Identifier casing helpers used for output file names and namespace names

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-_ ]+([a-zA-Z])").expect("separator regex is valid"));
static CASE_BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("case boundary regex is valid"));

/// Upper-cases the first character and leaves the rest untouched.
///
/// # Examples
/// ```
/// use apiboost::core::utils::to_pascal_case;
///
/// assert_eq!(to_pascal_case("article"), "Article");
/// assert_eq!(to_pascal_case("articleCate"), "ArticleCate");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Converts separator-delimited words to lowerCamelCase.
///
/// Runs of `-`, `_` or spaces are dropped and the letter that follows is
/// upper-cased. The first character is kept as-is.
///
/// # Examples
/// ```
/// use apiboost::core::utils::to_camel_case;
///
/// assert_eq!(to_camel_case("article-list"), "articleList");
/// assert_eq!(to_camel_case("user_role"), "userRole");
/// ```
pub fn to_camel_case(s: &str) -> String {
    SEPARATOR_RE
        .replace_all(s, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Converts camelCase / PascalCase to hyphenated lower case.
///
/// # Examples
/// ```
/// use apiboost::core::utils::to_kebab_case;
///
/// assert_eq!(to_kebab_case("ArticleList"), "article-list");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    CASE_BOUNDARY_RE
        .replace_all(s, "${1}-${2}")
        .to_lowercase()
}
