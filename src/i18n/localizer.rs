//! Content localizer: bilingual tree in, single-locale tree out.

use crate::error::ContentError;
use crate::i18n::content::child_path;
use crate::i18n::{ContentNode, Locale};
use serde_json::{Map, Value};

/// A content tree in which every translation leaf has been replaced by the
/// string for one locale.
pub type ResolvedContent = Value;

/// Resolve `tree` for `locale`.
///
/// Depth-first and order-preserving: objects keep their key sets, arrays
/// keep their length and order, scalars are copied, and each translation
/// leaf becomes its `locale` variant. Nesting depth is not limited.
///
/// # Errors
/// Returns [`ContentError::MissingTranslation`] for the first leaf (in
/// traversal order) that lacks a `locale` variant.
pub fn resolve(tree: &ContentNode, locale: Locale) -> Result<ResolvedContent, ContentError> {
    resolve_at(tree, locale, "")
}

fn resolve_at(node: &ContentNode, locale: Locale, path: &str) -> Result<Value, ContentError> {
    match node {
        ContentNode::Translation(leaf) => leaf
            .get(locale)
            .map(|text| Value::String(text.to_string()))
            .ok_or_else(|| ContentError::MissingTranslation {
                path: path.to_string(),
                locale: locale.code().to_string(),
            }),
        ContentNode::Object(map) => {
            let mut resolved = Map::new();
            for (key, child) in map {
                let value = resolve_at(child, locale, &child_path(path, key))?;
                resolved.insert(key.clone(), value);
            }
            Ok(Value::Object(resolved))
        }
        ContentNode::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| resolve_at(item, locale, &child_path(path, &i.to_string())))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        ContentNode::Text(text) => Ok(Value::String(text.clone())),
        ContentNode::Number(n) => Ok(Value::Number(n.clone())),
        ContentNode::Flag(b) => Ok(Value::Bool(*b)),
    }
}
