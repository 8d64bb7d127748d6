//! URL expressions with path-parameter interpolation

use std::fmt;

use crate::model::FieldDescriptor;

/// A URL usable directly as a call argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlExpr {
    /// Plain string literal, rendered in double quotes
    Literal(String),
    /// Template literal containing `${...}` interpolations, rendered in backticks
    Template(String),
}

impl UrlExpr {
    pub fn is_template(&self) -> bool {
        matches!(self, UrlExpr::Template(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            UrlExpr::Literal(s) | UrlExpr::Template(s) => s,
        }
    }
}

impl fmt::Display for UrlExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlExpr::Literal(s) => write!(f, "\"{s}\""),
            UrlExpr::Template(s) => write!(f, "`{s}`"),
        }
    }
}

/// Build the URL expression for an operation.
///
/// Both `{name}` and `:name` placeholders are replaced with an interpolation of
/// `binding.name`. When the raw path has no placeholder syntax at all but path
/// fields exist, the fields are appended as trailing `/`-separated segments in
/// declaration order. Fields without a name are ignored.
pub fn build_url(
    prefix: &str,
    raw_path: &str,
    path_fields: &[FieldDescriptor],
    binding: &str,
) -> UrlExpr {
    let mut url = format!("{prefix}{raw_path}");
    let named: Vec<&FieldDescriptor> = path_fields.iter().filter(|f| !f.name.is_empty()).collect();

    for field in &named {
        let interpolation = interpolate(binding, &field.name);
        url = url.replace(&format!("{{{}}}", field.name), &interpolation);
        url = replace_colon_param(&url, &field.name, &interpolation);
    }

    if !named.is_empty() && !has_placeholder_syntax(raw_path) {
        let tail = named
            .iter()
            .map(|f| interpolate(binding, &f.name))
            .collect::<Vec<_>>()
            .join("/");
        url = format!("{prefix}{raw_path}/{tail}");
    }

    if url.contains("${") {
        UrlExpr::Template(url)
    } else {
        UrlExpr::Literal(url)
    }
}

fn interpolate(binding: &str, name: &str) -> String {
    format!("${{{binding}.{name}}}")
}

fn has_placeholder_syntax(raw_path: &str) -> bool {
    raw_path.contains(['{', '}', ':'])
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replace every `:name` that is not followed by another identifier character.
fn replace_colon_param(url: &str, name: &str, replacement: &str) -> String {
    let needle = format!(":{name}");
    let mut out = String::with_capacity(url.len());
    let mut rest = url;

    while let Some(pos) = rest.find(&needle) {
        let end = pos + needle.len();
        let at_boundary = !rest[end..].chars().next().is_some_and(is_word_char);
        out.push_str(&rest[..pos]);
        if at_boundary {
            out.push_str(replacement);
        } else {
            out.push_str(&needle);
        }
        rest = &rest[end..];
    }
    out.push_str(rest);
    out
}
