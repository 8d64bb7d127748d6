//! Generation engine - turns normalized modules into client source files
//!
//! The engine is synchronous and never fails on odd input: unknown kinds,
//! missing items and empty responses all degrade to `any`. Each module is
//! rendered independently; the only state is the per-module set of used
//! names.
//!
//! ```
//! use apiboost::generation::{OutputOptions, render_module};
//! use apiboost::model::parse_modules;
//!
//! let modules = parse_modules(serde_json::json!([{
//!     "name": "article",
//!     "services": [{
//!         "path": "/article/list",
//!         "method": "get",
//!         "controllerName": "reqGetArticleList"
//!     }]
//! }]))
//! .unwrap();
//!
//! let rendered = render_module(&modules[0], &OutputOptions::default()).unwrap();
//! assert_eq!(rendered.file_name, "article.ts");
//! assert!(rendered.content.contains("export function reqGetArticleList()"));
//! ```

pub mod infer;
pub mod layout;
pub mod naming;
pub mod options;
pub mod response;
pub mod sanitizers;
pub mod types;
pub mod unit;
pub mod url;

pub use infer::{doc_type, infer_type};
pub use layout::{ModuleRenderer, RenderedModule, file_name, namespace_name, render_module};
pub use naming::{UsedNames, resolve_name};
pub use options::{ExportStyle, FilenameCase, OutputOptions, SourceVariant};
pub use response::infer_response_type;
pub use types::{ObjectShape, Property, TypeExpr};
pub use unit::{SourceUnit, assemble_unit};
pub use url::{UrlExpr, build_url};
