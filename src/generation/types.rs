//! Type expressions emitted into generated sources

use std::fmt;

/// An inferred type, rendered as TypeScript type syntax
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Any,
    String,
    Number,
    Boolean,
    /// Opaque object
    Object,
    /// Discrete union of integer literals (decimal text), sorted and deduplicated
    NumberUnion(Vec<String>),
    Array(Box<TypeExpr>),
    /// Object literal type with named properties
    Shape(ObjectShape),
}

/// Property list of an object literal type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectShape {
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub optional: bool,
    pub ty: TypeExpr,
    /// Rendered as a `/** ... */` line above the property
    pub doc: Option<String>,
}

impl Property {
    pub fn required(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            optional: false,
            ty,
            doc: None,
        }
    }

    pub fn optional(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            optional: true,
            ..Self::required(name, ty)
        }
    }
}

impl TypeExpr {
    pub fn array_of(element: TypeExpr) -> Self {
        TypeExpr::Array(Box::new(element))
    }

    /// Render with nested object shapes indented relative to `indent` spaces.
    ///
    /// The first line is never indented; callers place it after a label.
    pub fn render(&self, indent: usize) -> String {
        match self {
            TypeExpr::Any => "any".to_string(),
            TypeExpr::String => "string".to_string(),
            TypeExpr::Number => "number".to_string(),
            TypeExpr::Boolean => "boolean".to_string(),
            TypeExpr::Object => "object".to_string(),
            TypeExpr::NumberUnion(values) => values.join(" | "),
            TypeExpr::Array(element) => match element.as_ref() {
                TypeExpr::NumberUnion(values) if values.len() > 1 => {
                    format!("({})[]", element.render(indent))
                }
                _ => format!("{}[]", element.render(indent)),
            },
            TypeExpr::Shape(shape) => shape.render(indent),
        }
    }

    /// Rendering safe to embed in a documentation comment.
    ///
    /// Angle brackets become parentheses so doc tooling does not read them as markup.
    pub fn render_for_doc(&self) -> String {
        self.render(0).replace('<', "(").replace('>', ")")
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

impl ObjectShape {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn render(&self, indent: usize) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }

        let pad = " ".repeat(indent + 2);
        let mut lines = vec!["{".to_string()];
        for prop in &self.properties {
            if let Some(doc) = &prop.doc {
                lines.push(format!("{pad}/** {doc} */"));
            }
            lines.push(format!(
                "{pad}{}{}: {};",
                prop.name,
                if prop.optional { "?" } else { "" },
                prop.ty.render(indent + 2)
            ));
        }
        lines.push(format!("{}}}", " ".repeat(indent)));
        lines.join("\n")
    }
}
