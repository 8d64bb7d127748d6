//! Module file layouts
//!
//! A module is rendered either as a list of standalone exported functions or
//! as one exported object whose properties are the same functions. Both
//! layouts are produced from the [`SourceUnit`]s of the module; the per-file
//! frame is a small Tera template.

use tera::{Context, Tera};

use crate::core::error::Result;
use crate::core::utils::{to_camel_case, to_kebab_case, to_pascal_case};
use crate::generation::naming::UsedNames;
use crate::generation::options::{ExportStyle, FilenameCase, OutputOptions, SourceVariant};
use crate::generation::unit::{SourceUnit, assemble_unit};
use crate::model::Module;

const STANDALONE_TEMPLATE: &str = "standalone";
const NAMESPACE_TEMPLATE: &str = "namespace";

const STANDALONE_LAYOUT: &str = "{{ header }}{% for unit in units %}{% if not loop.first %}
{% endif %}{{ unit }}{% endfor %}";

const NAMESPACE_LAYOUT: &str = "{{ header }}export const {{ namespace }} = {
{% for unit in units %}{% if not loop.first %}
{% endif %}{{ unit }},
{% endfor %}};";

/// Final text of one module plus the file name it should be written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedModule {
    pub module_name: String,
    pub file_name: String,
    pub content: String,
}

/// Renders modules with a fixed set of output options
pub struct ModuleRenderer {
    tera: Tera,
    options: OutputOptions,
}

impl ModuleRenderer {
    pub fn new(options: OutputOptions) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (STANDALONE_TEMPLATE, STANDALONE_LAYOUT),
            (NAMESPACE_TEMPLATE, NAMESPACE_LAYOUT),
        ])?;
        Ok(Self { tera, options })
    }

    pub fn options(&self) -> &OutputOptions {
        &self.options
    }

    /// Assemble one unit per operation, in declaration order.
    ///
    /// Name resolution starts from an empty set for every module.
    pub fn assemble(&self, module: &Module) -> Vec<SourceUnit> {
        let mut used = UsedNames::new();
        module
            .operations
            .iter()
            .map(|operation| assemble_unit(&module.name, operation, &self.options, &mut used))
            .collect()
    }

    pub fn render(&self, module: &Module) -> Result<RenderedModule> {
        let units = self.assemble(module);

        let mut context = Context::new();
        context.insert("header", &self.options.preamble);

        let mut content = match self.options.export_style {
            ExportStyle::Standalone => {
                let bodies: Vec<String> = units.iter().map(SourceUnit::render_standalone).collect();
                context.insert("units", &bodies);
                self.tera.render(STANDALONE_TEMPLATE, &context)?
            }
            ExportStyle::Namespace => {
                let bodies: Vec<String> = units.iter().map(SourceUnit::render_method).collect();
                context.insert("units", &bodies);
                context.insert("namespace", &namespace_name(module));
                self.tera.render(NAMESPACE_TEMPLATE, &context)?
            }
        };

        if !content.ends_with('\n') {
            content.push('\n');
        }

        Ok(RenderedModule {
            module_name: module.name.clone(),
            file_name: file_name(&module.name, self.options.filename_case, self.options.variant),
            content,
        })
    }
}

/// Render one module without keeping a renderer around.
pub fn render_module(module: &Module, options: &OutputOptions) -> Result<RenderedModule> {
    ModuleRenderer::new(options.clone())?.render(module)
}

/// Output file name for a module.
///
/// ```
/// use apiboost::generation::layout::file_name;
/// use apiboost::generation::options::{FilenameCase, SourceVariant};
///
/// assert_eq!(file_name("article_tag", FilenameCase::Camel, SourceVariant::TypeScript), "articleTag.ts");
/// assert_eq!(file_name("article_tag", FilenameCase::Kebab, SourceVariant::JavaScript), "article-tag.js");
/// ```
pub fn file_name(module_name: &str, case: FilenameCase, variant: SourceVariant) -> String {
    let camel = to_camel_case(module_name);
    let stem = match case {
        FilenameCase::Camel => camel,
        FilenameCase::Kebab => to_kebab_case(&camel),
    };
    format!("{stem}.{}", variant.extension())
}

/// Identifier of the exported object in the namespace layout
pub fn namespace_name(module: &Module) -> String {
    match module.namespace_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("req{}", to_pascal_case(&to_camel_case(&module.name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldDescriptor, FieldKind, HttpMethod, Operation, OperationParameters};

    fn operation(method: HttpMethod, path: &str, name: &str) -> Operation {
        Operation {
            path: path.to_string(),
            method,
            summary: None,
            description: None,
            tag: None,
            suggested_name: name.to_string(),
            requires_auth: None,
            content_type: None,
            parameters: None,
            response: None,
        }
    }

    fn article_module() -> Module {
        Module {
            name: "article".to_string(),
            description: None,
            namespace_name: None,
            operations: vec![
                Operation {
                    parameters: Some(OperationParameters {
                        path: Some(vec![FieldDescriptor::new("article_id", FieldKind::String)]),
                        ..Default::default()
                    }),
                    ..operation(HttpMethod::Get, "/article/{article_id}", "reqGetArticle")
                },
                operation(HttpMethod::Get, "/article/list", "reqGetArticle"),
            ],
        }
    }

    fn no_docs() -> OutputOptions {
        OutputOptions {
            include_docs: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_single_operation_scenario() {
        let module = Module {
            operations: article_module().operations.into_iter().take(1).collect(),
            ..article_module()
        };
        let rendered = render_module(&module, &no_docs()).unwrap();

        assert_eq!(rendered.file_name, "article.ts");
        assert_eq!(
            rendered.content,
            "export function reqGetArticle(pathParams: {\n  article_id?: string;\n}): Promise<any> {\n  return request({\n    url: `/article/${pathParams.article_id}`,\n    method: \"get\",\n  });\n}\n"
        );
    }

    #[test]
    fn test_standalone_layout_joins_units() {
        let options = OutputOptions {
            preamble: "import request from \"@/utils/request\";\n\n".to_string(),
            ..no_docs()
        };
        let rendered = render_module(&article_module(), &options).unwrap();

        assert!(rendered.content.starts_with("import request from \"@/utils/request\";\n\nexport function reqGetArticle("));
        assert!(rendered.content.contains("}\n\nexport function reqGetArticle_get_article_list(): Promise<any> {"));
        assert!(rendered.content.ends_with("}\n"));
    }

    #[test]
    fn test_namespace_layout() {
        let options = OutputOptions {
            export_style: ExportStyle::Namespace,
            ..no_docs()
        };
        let rendered = render_module(&article_module(), &options).unwrap();

        assert!(rendered.content.starts_with("export const reqArticle = {\n  reqGetArticle(pathParams: {\n    article_id?: string;\n  }) {\n"));
        assert!(rendered.content.contains("  },\n\n  reqGetArticle_get_article_list() {\n    return request({\n      url: \"/article/list\",\n      method: \"get\",\n    });\n  },\n};\n"));
        assert!(!rendered.content.contains("export function"));
        assert!(!rendered.content.contains("Promise"));
    }

    #[test]
    fn test_layouts_share_operation_bodies() {
        let renderer = ModuleRenderer::new(OutputOptions::default()).unwrap();
        let namespace = ModuleRenderer::new(OutputOptions {
            export_style: ExportStyle::Namespace,
            ..Default::default()
        })
        .unwrap();
        let module = article_module();

        let standalone_units = renderer.assemble(&module);
        let namespace_units = namespace.assemble(&module);
        assert_eq!(standalone_units, namespace_units);

        let standalone = renderer.render(&module).unwrap().content;
        let object = namespace.render(&module).unwrap().content;
        for unit in &standalone_units {
            for line in unit.render_body("") {
                assert!(standalone.contains(&line));
                assert!(object.contains(&format!("  {line}")));
            }
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let module = article_module();
        let options = OutputOptions::default();
        let first = render_module(&module, &options).unwrap();
        let second = render_module(&module, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_names_reset_between_modules() {
        let renderer = ModuleRenderer::new(no_docs()).unwrap();
        let module = article_module();
        let first: Vec<_> = renderer.assemble(&module).into_iter().map(|u| u.name).collect();
        let second: Vec<_> = renderer.assemble(&module).into_iter().map(|u| u.name).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["reqGetArticle", "reqGetArticle_get_article_list"]);
    }

    #[test]
    fn test_empty_module_renders_header_only() {
        let module = Module {
            operations: vec![],
            ..article_module()
        };
        let options = OutputOptions {
            preamble: "import http from \"./http\";\n\n".to_string(),
            ..Default::default()
        };
        let rendered = render_module(&module, &options).unwrap();
        assert_eq!(rendered.content, "import http from \"./http\";\n\n");
    }

    #[test]
    fn test_namespace_name() {
        let mut module = article_module();
        assert_eq!(namespace_name(&module), "reqArticle");

        module.name = "article_tag".to_string();
        assert_eq!(namespace_name(&module), "reqArticleTag");

        module.namespace_name = Some("articleApi".to_string());
        assert_eq!(namespace_name(&module), "articleApi");
    }

    #[test]
    fn test_file_name_casing() {
        assert_eq!(
            file_name("articleTag", FilenameCase::Kebab, SourceVariant::TypeScript),
            "article-tag.ts"
        );
        assert_eq!(
            file_name("user-role", FilenameCase::Camel, SourceVariant::JavaScript),
            "userRole.js"
        );
    }
}
