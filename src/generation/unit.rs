//! Per-operation source units
//!
//! [`assemble_unit`] turns one operation into a [`SourceUnit`], a small
//! intermediate representation (name, doc lines, parameter groups, return
//! shape, call payload). Both file layouts render from this value, so an
//! operation's body is identical whichever layout is chosen.

use crate::generation::infer::{doc_type, shape_from_fields};
use crate::generation::naming::{UsedNames, resolve_name};
use crate::generation::options::OutputOptions;
use crate::generation::response::infer_response_type;
use crate::generation::sanitizers::sanitize_doc_text;
use crate::generation::types::{ObjectShape, TypeExpr};
use crate::generation::url::{UrlExpr, build_url};
use crate::model::{FieldDescriptor, HttpMethod, Operation, OperationParameters};

/// Binding name of the query parameter group
pub const QUERY_BINDING: &str = "params";
/// Binding name of the path parameter group
pub const PATH_BINDING: &str = "pathParams";
/// Binding name of the body group
pub const BODY_BINDING: &str = "data";

/// Marker appended to the summary of operations that require authentication
pub const AUTH_MARKER: &str = " (auth required)";

/// One parameter of the generated callable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamGroup {
    pub binding: &'static str,
    /// `None` in the unannotated variant
    pub shape: Option<ObjectShape>,
}

/// One key of the call payload object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadEntry {
    Url(UrlExpr),
    Method(HttpMethod),
    /// Shorthand property forwarding a parameter group
    Binding(&'static str),
}

impl PayloadEntry {
    fn render(&self) -> String {
        match self {
            PayloadEntry::Url(url) => format!("url: {url},"),
            PayloadEntry::Method(method) => format!("method: \"{method}\","),
            PayloadEntry::Binding(name) => format!("{name},"),
        }
    }
}

/// Renderable representation of one operation's generated callable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub name: String,
    /// Comment lines without the ` * ` prefix; empty when docs are disabled
    pub doc_lines: Vec<String>,
    pub params: Vec<ParamGroup>,
    /// Result shape; `None` in the unannotated variant
    pub return_type: Option<TypeExpr>,
    pub call_ident: String,
    pub payload: Vec<PayloadEntry>,
}

/// Build the source unit for one operation and register its name in `used`.
pub fn assemble_unit(
    module_name: &str,
    operation: &Operation,
    options: &OutputOptions,
    used: &mut UsedNames,
) -> SourceUnit {
    let empty = OperationParameters::default();
    let parameters = operation.parameters.as_ref().unwrap_or(&empty);
    let groups: [(&'static str, &[FieldDescriptor]); 3] = [
        (QUERY_BINDING, parameters.query_fields()),
        (PATH_BINDING, parameters.path_fields()),
        (BODY_BINDING, parameters.body_fields()),
    ];
    let present = |binding: &str| {
        groups
            .iter()
            .any(|(name, fields)| *name == binding && !fields.is_empty())
    };
    let annotated = options.variant.is_annotated();

    let params = groups
        .iter()
        .filter(|(_, fields)| !fields.is_empty())
        .map(|(binding, fields)| ParamGroup {
            binding: *binding,
            shape: annotated.then(|| shape_from_fields(fields)),
        })
        .collect();

    let url_binding = if present(PATH_BINDING) {
        PATH_BINDING
    } else if present(QUERY_BINDING) {
        QUERY_BINDING
    } else {
        BODY_BINDING
    };
    let url = build_url(
        &options.url_prefix,
        &operation.path,
        parameters.path_fields(),
        url_binding,
    );

    let mut payload = vec![PayloadEntry::Url(url), PayloadEntry::Method(operation.method)];
    if present(QUERY_BINDING) {
        payload.push(PayloadEntry::Binding(QUERY_BINDING));
    }
    if present(BODY_BINDING) {
        payload.push(PayloadEntry::Binding(BODY_BINDING));
    }

    let doc_lines = if options.include_docs {
        doc_lines(module_name, operation, &groups)
    } else {
        Vec::new()
    };

    SourceUnit {
        name: resolve_name(&operation.suggested_name, operation, used),
        doc_lines,
        params,
        return_type: annotated.then(|| infer_response_type(operation.response.as_ref())),
        call_ident: options.call_ident.clone(),
        payload,
    }
}

fn doc_lines(
    module_name: &str,
    operation: &Operation,
    groups: &[(&'static str, &[FieldDescriptor])],
) -> Vec<String> {
    let summary = sanitize_doc_text(operation.summary.as_deref().unwrap_or_default());
    let marker = if operation.requires_auth() { AUTH_MARKER } else { "" };

    let mut lines = Vec::new();
    let headline = format!("{summary}{marker}").trim().to_string();
    if !headline.is_empty() {
        lines.push(headline);
    }
    lines.extend([
        format!("@group {module_name}"),
        format!(
            "@route {} [{}]",
            operation.path,
            operation.method.as_str().to_uppercase()
        ),
    ]);

    for (binding, fields) in groups {
        for field in fields.iter() {
            lines.push(
                format!(
                    "@param {{{}}} {binding}.{} {}",
                    doc_type(Some(field)),
                    field.name,
                    sanitize_doc_text(field.description())
                )
                .trim_end()
                .to_string(),
            );
        }
    }

    lines
}

impl SourceUnit {
    /// Doc comment block, each line prefixed with `indent`
    pub fn render_doc(&self, indent: &str) -> Vec<String> {
        if self.doc_lines.is_empty() {
            return Vec::new();
        }

        let mut lines = vec![format!("{indent}/**")];
        lines.extend(self.doc_lines.iter().map(|line| format!("{indent} * {line}")));
        lines.push(format!("{indent} */"));
        lines
    }

    /// Comma-separated parameter list; shapes are laid out relative to `indent`
    pub fn render_params(&self, indent: usize) -> String {
        self.params
            .iter()
            .map(|group| match &group.shape {
                Some(shape) => format!("{}: {}", group.binding, shape.render(indent)),
                None => group.binding.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Function body from `return` to the closing brace, one entry per line
    pub fn render_body(&self, indent: &str) -> Vec<String> {
        let mut lines = vec![format!("{indent}  return {}({{", self.call_ident)];
        lines.extend(
            self.payload
                .iter()
                .map(|entry| format!("{indent}    {}", entry.render())),
        );
        lines.push(format!("{indent}  }});"));
        lines.push(format!("{indent}}}"));
        lines
    }

    /// `export function` form, terminated by a newline
    pub fn render_standalone(&self) -> String {
        let return_type = self
            .return_type
            .as_ref()
            .map(|ty| format!(": Promise<{}>", ty.render(0)))
            .unwrap_or_default();

        let mut lines = self.render_doc("");
        lines.push(format!(
            "export function {}({}){return_type} {{",
            self.name,
            self.render_params(0)
        ));
        lines.extend(self.render_body(""));
        lines.join("\n") + "\n"
    }

    /// Object-method form indented by two spaces, without trailing separator
    pub fn render_method(&self) -> String {
        let indent = "  ";
        let mut lines = self.render_doc(indent);
        lines.push(format!(
            "{indent}{}({}) {{",
            self.name,
            self.render_params(indent.len())
        ));
        lines.extend(self.render_body(indent));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::options::SourceVariant;
    use crate::model::{FieldKind, RequestBody};

    fn get_article() -> Operation {
        Operation {
            path: "/article/{article_id}".to_string(),
            method: HttpMethod::Get,
            summary: Some("Article detail".to_string()),
            description: None,
            tag: None,
            suggested_name: "reqGetArticle".to_string(),
            requires_auth: None,
            content_type: None,
            parameters: Some(OperationParameters {
                path: Some(vec![FieldDescriptor::new("article_id", FieldKind::String)]),
                ..Default::default()
            }),
            response: None,
        }
    }

    fn update_article() -> Operation {
        Operation {
            path: "/article".to_string(),
            method: HttpMethod::Put,
            summary: Some("Update article".to_string()),
            suggested_name: "reqUpdateArticle".to_string(),
            requires_auth: Some(true),
            parameters: Some(OperationParameters {
                query: Some(vec![FieldDescriptor {
                    description: Some("draft flag".to_string()),
                    ..FieldDescriptor::new("draft", FieldKind::Boolean)
                }]),
                body: Some(RequestBody {
                    kind: Some("object".to_string()),
                    items: Some(vec![FieldDescriptor {
                        required: Some(true),
                        description: Some("status(1:draft 2:published)".to_string()),
                        ..FieldDescriptor::new("status", FieldKind::Number)
                    }]),
                }),
                ..Default::default()
            }),
            ..get_article()
        }
    }

    #[test]
    fn test_path_only_operation() {
        let mut used = UsedNames::new();
        let unit = assemble_unit("article", &get_article(), &OutputOptions::default(), &mut used);

        assert_eq!(unit.name, "reqGetArticle");
        assert_eq!(
            unit.payload,
            vec![
                PayloadEntry::Url(UrlExpr::Template(
                    "/article/${pathParams.article_id}".to_string()
                )),
                PayloadEntry::Method(HttpMethod::Get),
            ]
        );
        assert_eq!(unit.params.len(), 1);
        assert_eq!(unit.params[0].binding, PATH_BINDING);
        assert_eq!(unit.return_type, Some(TypeExpr::Any));
    }

    #[test]
    fn test_standalone_rendering() {
        let mut used = UsedNames::new();
        let unit = assemble_unit("article", &get_article(), &OutputOptions::default(), &mut used);

        assert_eq!(
            unit.render_standalone(),
            "/**\n * Article detail\n * @group article\n * @route /article/{article_id} [GET]\n * @param {string} pathParams.article_id\n */\nexport function reqGetArticle(pathParams: {\n  article_id?: string;\n}): Promise<any> {\n  return request({\n    url: `/article/${pathParams.article_id}`,\n    method: \"get\",\n  });\n}\n"
        );
    }

    #[test]
    fn test_payload_includes_query_and_body() {
        let mut used = UsedNames::new();
        let unit = assemble_unit(
            "article",
            &update_article(),
            &OutputOptions::default(),
            &mut used,
        );

        assert_eq!(
            unit.payload,
            vec![
                PayloadEntry::Url(UrlExpr::Literal("/article".to_string())),
                PayloadEntry::Method(HttpMethod::Put),
                PayloadEntry::Binding(QUERY_BINDING),
                PayloadEntry::Binding(BODY_BINDING),
            ]
        );
        let bindings: Vec<_> = unit.params.iter().map(|p| p.binding).collect();
        assert_eq!(bindings, vec![QUERY_BINDING, BODY_BINDING]);
    }

    #[test]
    fn test_doc_lines() {
        let mut used = UsedNames::new();
        let unit = assemble_unit(
            "article",
            &update_article(),
            &OutputOptions::default(),
            &mut used,
        );

        assert_eq!(
            unit.doc_lines,
            vec![
                "Update article (auth required)",
                "@group article",
                "@route /article [PUT]",
                "@param {boolean} params.draft draft flag",
                "@param {1 | 2} data.status status(1:draft 2:published)",
            ]
        );
    }

    #[test]
    fn test_docs_disabled() {
        let options = OutputOptions {
            include_docs: false,
            ..Default::default()
        };
        let mut used = UsedNames::new();
        let unit = assemble_unit("article", &get_article(), &options, &mut used);

        assert!(unit.doc_lines.is_empty());
        assert!(unit.render_standalone().starts_with("export function"));
    }

    #[test]
    fn test_unannotated_variant() {
        let options = OutputOptions {
            variant: SourceVariant::JavaScript,
            call_ident: "http".to_string(),
            ..Default::default()
        };
        let mut used = UsedNames::new();
        let unit = assemble_unit("article", &update_article(), &options, &mut used);

        assert!(unit.return_type.is_none());
        assert!(unit.params.iter().all(|p| p.shape.is_none()));
        assert!(
            unit.render_standalone()
                .contains("export function reqUpdateArticle(params, data) {\n  return http({")
        );
    }

    #[test]
    fn test_url_binding_priority_falls_back_to_query() {
        let op = Operation {
            path: "/comment".to_string(),
            parameters: Some(OperationParameters {
                query: Some(vec![FieldDescriptor::new("id", FieldKind::Number)]),
                ..Default::default()
            }),
            ..get_article()
        };
        let mut used = UsedNames::new();
        let unit = assemble_unit("comment", &op, &OutputOptions::default(), &mut used);
        assert_eq!(
            unit.payload[0],
            PayloadEntry::Url(UrlExpr::Literal("/comment".to_string()))
        );
    }

    #[test]
    fn test_method_rendering_reindents() {
        let mut used = UsedNames::new();
        let unit = assemble_unit("article", &get_article(), &OutputOptions::default(), &mut used);

        assert_eq!(
            unit.render_method(),
            "  /**\n   * Article detail\n   * @group article\n   * @route /article/{article_id} [GET]\n   * @param {string} pathParams.article_id\n   */\n  reqGetArticle(pathParams: {\n    article_id?: string;\n  }) {\n    return request({\n      url: `/article/${pathParams.article_id}`,\n      method: \"get\",\n    });\n  }"
        );
    }
}
