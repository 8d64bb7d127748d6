//! Type inference for field descriptors
//!
//! Inference is a short rule chain evaluated in order:
//! 1. numeric enumeration extracted from the description (number fields only)
//! 2. mapping of the declared primitive kind
//!
//! Every rule falls through on doubt, and the chain ends in `any`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::generation::sanitizers::sanitize_doc_text;
use crate::generation::types::{ObjectShape, Property, TypeExpr};
use crate::model::{FieldDescriptor, FieldItems, FieldKind};

static ENUM_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)\s*:").expect("enum marker regex is valid"));

/// Minimum number of `<integer>:` markers before a description counts as an enumeration
const MIN_ENUM_MARKERS: usize = 2;

/// Infer the type of an optional field; absent fields are `any`.
pub fn infer_type(field: Option<&FieldDescriptor>) -> TypeExpr {
    let Some(field) = field else {
        return TypeExpr::Any;
    };

    if let Some(values) = numeric_enum(field) {
        return TypeExpr::NumberUnion(values);
    }

    kind_type(field)
}

/// Same inference as [`infer_type`], rendered for a doc comment.
pub fn doc_type(field: Option<&FieldDescriptor>) -> String {
    infer_type(field).render_for_doc()
}

/// Extract an enumeration such as `"status(1:pending 2:approved 3:rejected)"`.
///
/// Only applies to number fields. Markers are `<integer><optional space>:` not
/// preceded by an ASCII word character; fewer than two markers yield `None`.
/// Values are kept as canonical decimal literals so any width is preserved,
/// sorted numerically and deduplicated.
pub fn numeric_enum(field: &FieldDescriptor) -> Option<Vec<String>> {
    if field.kind != FieldKind::Number {
        return None;
    }
    let description = field.description.as_deref()?;

    let mut markers: Vec<String> = ENUM_MARKER_RE
        .captures_iter(description)
        .filter_map(|caps| {
            let digits = caps.get(1)?;
            let preceded_by_word = description[..digits.start()]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
            if preceded_by_word {
                return None;
            }
            Some(canonical_integer(digits.as_str()))
        })
        .collect();

    if markers.len() < MIN_ENUM_MARKERS {
        return None;
    }

    markers.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    markers.dedup();
    Some(markers)
}

/// Strip leading zeros so equal values compare equal as strings
fn canonical_integer(digits: &str) -> String {
    match digits.trim_start_matches('0') {
        "" => "0".to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Map the declared kind, recursing into array elements.
fn kind_type(field: &FieldDescriptor) -> TypeExpr {
    match field.kind {
        FieldKind::String => TypeExpr::String,
        FieldKind::Number => TypeExpr::Number,
        FieldKind::Boolean => TypeExpr::Boolean,
        FieldKind::Object => TypeExpr::Object,
        FieldKind::Array => TypeExpr::array_of(element_type(field.items.as_ref())),
        FieldKind::Unset => TypeExpr::Any,
    }
}

/// A list of element fields is represented by its first entry only.
fn element_type(items: Option<&FieldItems>) -> TypeExpr {
    match items {
        Some(FieldItems::List(fields)) => infer_type(fields.first()),
        Some(FieldItems::Single(field)) => infer_type(Some(field.as_ref())),
        None => TypeExpr::Any,
    }
}

/// Object shape for a parameter group, one documented property per field.
pub fn shape_from_fields(fields: &[FieldDescriptor]) -> ObjectShape {
    ObjectShape::new(
        fields
            .iter()
            .map(|field| Property {
                name: field.name.clone(),
                optional: !field.is_required(),
                ty: infer_type(Some(field)),
                doc: field
                    .description
                    .as_deref()
                    .map(sanitize_doc_text)
                    .filter(|d| !d.is_empty()),
            })
            .collect(),
    )
}
