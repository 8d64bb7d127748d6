//! Normalized API module types consumed by the generation engine
//!
//! The wire names follow the JSON emitted by the OpenAPI adapter
//! (`services`, `controllerName`, `request`, `auth`, `type`). The more
//! descriptive names are accepted as aliases.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Declared primitive kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    #[serde(alias = "integer")]
    Number,
    Boolean,
    Object,
    Array,
    /// Missing or unrecognised kind
    #[default]
    #[serde(other)]
    Unset,
}

/// `null`, non-string and unknown kinds all read as [`FieldKind::Unset`]
fn lenient_kind<'de, D>(deserializer: D) -> Result<FieldKind, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(name @ serde_json::Value::String(_)) => {
            serde_json::from_value(name).unwrap_or_default()
        }
        _ => FieldKind::Unset,
    })
}

/// Element description of an array field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldItems {
    /// Object elements, described field by field
    List(Vec<FieldDescriptor>),
    /// Scalar elements, described by a single node
    Single(Box<FieldDescriptor>),
}

/// One parameter or one response/object property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Property name; empty for anonymous array element nodes
    #[serde(default)]
    pub name: String,
    #[serde(
        rename = "type",
        alias = "kind",
        default,
        deserialize_with = "lenient_kind"
    )]
    pub kind: FieldKind,
    /// Absent means optional
    #[serde(default)]
    pub required: Option<bool>,
    pub description: Option<String>,
    pub items: Option<FieldItems>,
    pub default: Option<serde_json::Value>,
}

impl FieldDescriptor {
    /// Build a descriptor with just a name and a kind
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// Request body grouping (`{ type, items }`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub items: Option<Vec<FieldDescriptor>>,
}

/// Parameter groups of an operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationParameters {
    /// Header parameters are carried through but never emitted
    pub header: Option<Vec<FieldDescriptor>>,
    pub query: Option<Vec<FieldDescriptor>>,
    pub path: Option<Vec<FieldDescriptor>>,
    pub body: Option<RequestBody>,
}

impl OperationParameters {
    pub fn query_fields(&self) -> &[FieldDescriptor] {
        self.query.as_deref().unwrap_or_default()
    }

    pub fn path_fields(&self) -> &[FieldDescriptor] {
        self.path.as_deref().unwrap_or_default()
    }

    pub fn body_fields(&self) -> &[FieldDescriptor] {
        self.body
            .as_ref()
            .and_then(|body| body.items.as_deref())
            .unwrap_or_default()
    }
}

/// Top-level envelope fields of a response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseDescriptor {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub items: Option<Vec<FieldDescriptor>>,
}

impl ResponseDescriptor {
    /// Look up a top-level field by name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.items.as_ref()?.iter().find(|f| f.name == name)
    }
}

/// HTTP method of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    #[serde(alias = "GET")]
    Get,
    #[serde(alias = "POST")]
    Post,
    #[serde(alias = "PUT")]
    Put,
    #[serde(alias = "DELETE")]
    Delete,
    #[serde(alias = "PATCH")]
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One HTTP endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Raw path pattern, may contain `{name}` or `:name` placeholders
    pub path: String,
    pub method: HttpMethod,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
    /// Advisory callable name; not unique within a module
    #[serde(rename = "controllerName", alias = "suggestedName")]
    pub suggested_name: String,
    #[serde(rename = "auth", alias = "requiresAuth", default)]
    pub requires_auth: Option<bool>,
    #[serde(rename = "contentType")]
    pub content_type: Option<String>,
    #[serde(rename = "request", alias = "parameters")]
    pub parameters: Option<OperationParameters>,
    pub response: Option<ResponseDescriptor>,
}

impl Operation {
    pub fn requires_auth(&self) -> bool {
        self.requires_auth.unwrap_or(false)
    }
}

/// A named group of operations rendered into one output file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    pub description: Option<String>,
    /// Explicit identifier for the namespace-object layout
    #[serde(rename = "controllerName", alias = "suggestedNamespaceName")]
    pub namespace_name: Option<String>,
    #[serde(rename = "services", alias = "operations", default)]
    pub operations: Vec<Operation>,
}
