//! Normalized module / operation model
//!
//! These records are produced upstream from an OpenAPI document and are only
//! ever read by the generation engine.

pub mod types;

pub use types::*;

use crate::core::error::{Error, Result};

/// Converts a parsed source document into a module list.
///
/// The document must be a JSON array. Anything else is a construction error;
/// no partial recovery is attempted.
pub fn parse_modules(value: serde_json::Value) -> Result<Vec<Module>> {
    let entries = match value {
        serde_json::Value::Array(entries) => entries,
        other => {
            return Err(Error::model(format!(
                "expected an array of modules, found {}",
                json_kind(&other)
            )));
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry)
                .map_err(|e| Error::model(format!("module #{index} is malformed: {e}")))
        })
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_modules_from_adapter_format() {
        let value = json!([{
            "name": "article",
            "controllerName": "articleApi",
            "services": [{
                "path": "/article/{article_id}",
                "method": "get",
                "controllerName": "reqGetArticle",
                "auth": true,
                "request": {
                    "path": [{ "name": "article_id", "type": "string", "required": true }],
                    "body": null
                },
                "response": {
                    "type": "object",
                    "items": [{ "name": "code", "type": "number" }]
                }
            }]
        }]);

        let modules = parse_modules(value).unwrap();
        assert_eq!(modules.len(), 1);

        let module = &modules[0];
        assert_eq!(module.name, "article");
        assert_eq!(module.namespace_name.as_deref(), Some("articleApi"));

        let op = &module.operations[0];
        assert_eq!(op.method, HttpMethod::Get);
        assert_eq!(op.suggested_name, "reqGetArticle");
        assert!(op.requires_auth());

        let params = op.parameters.as_ref().unwrap();
        assert_eq!(params.path_fields().len(), 1);
        assert_eq!(params.path_fields()[0].kind, FieldKind::String);
        assert!(params.path_fields()[0].is_required());
        assert!(params.query_fields().is_empty());
        assert!(params.body_fields().is_empty());
    }

    #[test]
    fn test_parse_modules_accepts_descriptive_aliases() {
        let value = json!([{
            "name": "menu",
            "operations": [{
                "path": "/menu",
                "method": "POST",
                "suggestedName": "reqAddMenu",
                "requiresAuth": false,
                "parameters": { "body": { "items": [{ "name": "title", "kind": "string" }] } }
            }]
        }]);

        let modules = parse_modules(value).unwrap();
        let op = &modules[0].operations[0];
        assert_eq!(op.method, HttpMethod::Post);
        assert_eq!(op.suggested_name, "reqAddMenu");
        assert!(!op.requires_auth());
        assert_eq!(op.parameters.as_ref().unwrap().body_fields()[0].name, "title");
    }

    #[test]
    fn test_unknown_kind_degrades_to_unset() {
        let field: FieldDescriptor =
            serde_json::from_value(json!({ "name": "blob", "type": "file" })).unwrap();
        assert_eq!(field.kind, FieldKind::Unset);

        let field: FieldDescriptor = serde_json::from_value(json!({ "name": "raw" })).unwrap();
        assert_eq!(field.kind, FieldKind::Unset);
        assert!(!field.is_required());
    }

    #[test]
    fn test_null_or_non_string_kind_degrades_to_unset() {
        let field: FieldDescriptor =
            serde_json::from_value(json!({ "name": "q", "type": null })).unwrap();
        assert_eq!(field.kind, FieldKind::Unset);

        let field: FieldDescriptor =
            serde_json::from_value(json!({ "name": "q", "type": ["string", "null"] })).unwrap();
        assert_eq!(field.kind, FieldKind::Unset);

        let field: FieldDescriptor =
            serde_json::from_value(json!({ "name": "n", "kind": "integer" })).unwrap();
        assert_eq!(field.kind, FieldKind::Number);

        let modules = parse_modules(json!([{
            "name": "search",
            "services": [{
                "path": "/search",
                "method": "get",
                "controllerName": "reqSearch",
                "request": { "query": [{ "name": "q", "type": null }] }
            }]
        }]))
        .unwrap();
        let query = modules[0].operations[0]
            .parameters
            .as_ref()
            .unwrap()
            .query_fields();
        assert_eq!(query[0].name, "q");
        assert_eq!(query[0].kind, FieldKind::Unset);
    }

    #[test]
    fn test_array_items_accept_list_and_single_node() {
        let list: FieldDescriptor = serde_json::from_value(json!({
            "name": "rows",
            "type": "array",
            "items": [{ "name": "id", "type": "number" }]
        }))
        .unwrap();
        assert!(matches!(list.items, Some(FieldItems::List(_))));

        let single: FieldDescriptor = serde_json::from_value(json!({
            "name": "ids",
            "type": "array",
            "items": { "type": "number" }
        }))
        .unwrap();
        assert!(matches!(single.items, Some(FieldItems::Single(_))));
    }

    #[test]
    fn test_parse_modules_rejects_non_array() {
        let err = parse_modules(json!({ "name": "article" })).unwrap_err();
        assert!(matches!(err, Error::Model(_)));
        assert!(err.to_string().contains("found an object"));
    }

    #[test]
    fn test_parse_modules_reports_malformed_entry() {
        let err = parse_modules(json!([{ "name": "ok" }, { "services": [] }])).unwrap_err();
        assert!(err.to_string().contains("module #1"));
    }
}
