//! Response envelope modelling
//!
//! A response whose top-level `data` field is an array is treated as a
//! paginated list; anything else gets the generic `{ code, msg, data? }`
//! envelope.

use crate::generation::infer::infer_type;
use crate::generation::types::{ObjectShape, Property, TypeExpr};
use crate::model::{FieldDescriptor, FieldItems, FieldKind, ResponseDescriptor};

/// Hard-coded rewrite of one list-element field, keyed by field name.
///
/// These entries are product-specific debt carried over from the blog API the
/// generator was first written against. They are not a general contract; new
/// entries belong here rather than in the element loop.
struct ElementOverride {
    field: &'static str,
    /// Only applies when the declared kind matches
    only_kind: Option<FieldKind>,
    /// Emitted name, when different from the source name
    rename: Option<&'static str>,
    /// Forced optionality; `None` keeps the field's own `required` flag
    optional: Option<bool>,
    ty: fn() -> TypeExpr,
}

const ELEMENT_OVERRIDES: &[ElementOverride] = &[
    ElementOverride {
        field: "article_cateList",
        only_kind: Some(FieldKind::Array),
        rename: None,
        optional: None,
        ty: category_list_type,
    },
    ElementOverride {
        field: "likes_count",
        only_kind: None,
        rename: Some("like_count"),
        optional: Some(true),
        ty: number_type,
    },
];

fn number_type() -> TypeExpr {
    TypeExpr::Number
}

fn category_list_type() -> TypeExpr {
    TypeExpr::array_of(TypeExpr::Shape(ObjectShape::new(vec![
        Property::required("id", TypeExpr::Number),
        Property::required("name", TypeExpr::String),
    ])))
}

/// Infer the return shape of an operation from its response description.
pub fn infer_response_type(response: Option<&ResponseDescriptor>) -> TypeExpr {
    let Some(response) = response.filter(|r| r.items.as_ref().is_some_and(|i| !i.is_empty()))
    else {
        return TypeExpr::Any;
    };

    let scalar = |name: &str, fallback: TypeExpr| {
        response
            .field(name)
            .map(|f| infer_type(Some(f)))
            .unwrap_or(fallback)
    };

    match response.field("data") {
        Some(data) if data.kind == FieldKind::Array => {
            TypeExpr::Shape(ObjectShape::new(vec![
                Property::required("code", scalar("code", TypeExpr::Number)),
                Property::required("msg", scalar("msg", TypeExpr::String)),
                Property::required("total", scalar("total", TypeExpr::Number)),
                Property::required("currentPage", scalar("currentPage", TypeExpr::String)),
                Property::required("pageSize", scalar("pageSize", TypeExpr::String)),
                Property::required("data", TypeExpr::array_of(list_element_type(data))),
            ]))
        }
        _ => TypeExpr::Shape(ObjectShape::new(vec![
            Property::required("code", scalar("code", TypeExpr::Number)),
            Property::required("msg", scalar("msg", TypeExpr::String)),
            Property::optional("data", TypeExpr::Any),
        ])),
    }
}

fn list_element_type(data: &FieldDescriptor) -> TypeExpr {
    let fields: &[FieldDescriptor] = match &data.items {
        Some(FieldItems::List(fields)) => fields.as_slice(),
        _ => &[],
    };

    TypeExpr::Shape(ObjectShape::new(
        fields.iter().map(element_property).collect(),
    ))
}

fn element_property(field: &FieldDescriptor) -> Property {
    let rule = ELEMENT_OVERRIDES.iter().find(|rule| {
        rule.field == field.name && rule.only_kind.is_none_or(|kind| kind == field.kind)
    });

    match rule {
        Some(rule) => Property {
            name: rule.rename.unwrap_or(rule.field).to_string(),
            optional: rule.optional.unwrap_or(!field.is_required()),
            ty: (rule.ty)(),
            doc: None,
        },
        None => Property {
            name: field.name.clone(),
            optional: !field.is_required(),
            ty: infer_type(Some(field)),
            doc: None,
        },
    }
}
