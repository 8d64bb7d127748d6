//! Collision-free callable names within one module

use std::collections::HashSet;

use crate::model::{HttpMethod, Operation};

/// Names already emitted in the module currently being rendered.
///
/// One set per module; it is never shared across modules.
#[derive(Debug, Clone, Default)]
pub struct UsedNames {
    names: HashSet<String>,
}

impl UsedNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn insert(&mut self, name: String) -> String {
        self.names.insert(name.clone());
        name
    }
}

/// Return a name for `operation` that is not yet in `used`, and register it.
///
/// The suggested name is kept when free. Otherwise a `<method>_<path>` suffix
/// is appended, and if that still collides, `_2`, `_3`, ... until free.
pub fn resolve_name(suggested: &str, operation: &Operation, used: &mut UsedNames) -> String {
    if !used.contains(suggested) {
        return used.insert(suggested.to_string());
    }

    let base = format!(
        "{suggested}_{}",
        route_suffix(operation.method, &operation.path)
    );
    if !used.contains(&base) {
        return used.insert(base);
    }

    let candidate = (2u64..)
        .map(|n| format!("{base}_{n}"))
        .find(|candidate| !used.contains(candidate))
        .unwrap_or_default();
    used.insert(candidate)
}

/// `<method>_<path>` with `/ : { }` turned into single underscores.
///
/// ```
/// use apiboost::generation::naming::route_suffix;
/// use apiboost::model::HttpMethod;
///
/// assert_eq!(route_suffix(HttpMethod::Get, "/article/list/self"), "get_article_list_self");
/// assert_eq!(route_suffix(HttpMethod::Delete, "/tag/{id}"), "delete_tag_id");
/// ```
pub fn route_suffix(method: HttpMethod, path: &str) -> String {
    let mut normalized = String::with_capacity(path.len());
    for c in path.chars() {
        let c = if matches!(c, '/' | ':' | '{' | '}') { '_' } else { c };
        if c == '_' && normalized.ends_with('_') {
            continue;
        }
        normalized.push(c);
    }

    let normalized = normalized.trim_matches('_');
    if normalized.is_empty() {
        method.to_string()
    } else {
        format!("{method}_{normalized}")
    }
}
