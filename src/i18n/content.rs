//! Raw bilingual content tree.
//!
//! JSON documents are parsed once into [`ContentNode`], a tagged grammar in
//! which translation leaves are a distinct variant. Classification happens
//! here, at load time, so the resolver never has to sniff keys.

use crate::error::ContentError;
use crate::i18n::{Locale, LocaleRegistry};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// A node of the raw bilingual content tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentNode {
    /// Locale-keyed variants of one string
    Translation(TranslationLeaf),
    Object(BTreeMap<String, ContentNode>),
    Array(Vec<ContentNode>),
    Text(String),
    Number(Number),
    /// Non-localized switches such as a pricing plan's `popular` marker
    Flag(bool),
}

/// The atomic translatable unit: one string per locale code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationLeaf {
    variants: BTreeMap<String, String>,
}

impl TranslationLeaf {
    pub fn new<I, K, V>(variants: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            variants: variants
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The variant for `locale`, if present.
    pub fn get(&self, locale: Locale) -> Option<&str> {
        self.variants.get(locale.code()).map(String::as_str)
    }

    /// All variants as `(code, text)` pairs, ordered by code.
    pub fn variants(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variants.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Enabled locales this leaf has no variant for.
    pub fn missing_locales(&self) -> Vec<Locale> {
        Locale::enabled()
            .into_iter()
            .filter(|locale| !self.variants.contains_key(locale.code()))
            .collect()
    }
}

impl ContentNode {
    /// Parse one namespace document.
    ///
    /// Malformed JSON is reported as [`ContentError::Malformed`] naming the
    /// namespace; grammar violations carry a path rooted at the namespace.
    pub fn from_json_str(namespace: &str, json: &str) -> Result<Self, ContentError> {
        let value: Value =
            serde_json::from_str(json).map_err(|source| ContentError::Malformed {
                namespace: namespace.to_string(),
                source,
            })?;
        Self::parse(value, namespace)
    }

    /// Convert an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, ContentError> {
        Self::parse(value, "")
    }

    fn parse(value: Value, path: &str) -> Result<Self, ContentError> {
        match value {
            Value::String(s) => Ok(ContentNode::Text(s)),
            Value::Number(n) => Ok(ContentNode::Number(n)),
            Value::Bool(b) => Ok(ContentNode::Flag(b)),
            Value::Null => Err(ContentError::UnsupportedValue {
                path: display_path(path),
                kind: "null",
            }),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| Self::parse(item, &child_path(path, &i.to_string())))
                .collect::<Result<Vec<_>, _>>()
                .map(ContentNode::Array),
            Value::Object(map) if is_translation(&map) => {
                let variants = map.into_iter().filter_map(|(code, text)| match text {
                    Value::String(s) => Some((code, s)),
                    _ => None,
                });
                Ok(ContentNode::Translation(TranslationLeaf::new(variants)))
            }
            Value::Object(map) => map
                .into_iter()
                .map(|(key, child)| {
                    let node = Self::parse(child, &child_path(path, &key))?;
                    Ok((key, node))
                })
                .collect::<Result<BTreeMap<_, _>, ContentError>>()
                .map(ContentNode::Object),
        }
    }

    /// Visit every translation leaf with its dotted key path.
    ///
    /// Array items contribute their index as a path segment, matching the
    /// paths accepted by catalog lookups.
    pub fn visit_leaves<F>(&self, visitor: &mut F)
    where
        F: FnMut(&str, &TranslationLeaf),
    {
        self.visit_leaves_at("", visitor);
    }

    fn visit_leaves_at<F>(&self, path: &str, visitor: &mut F)
    where
        F: FnMut(&str, &TranslationLeaf),
    {
        match self {
            ContentNode::Translation(leaf) => visitor(path, leaf),
            ContentNode::Object(map) => {
                for (key, child) in map {
                    child.visit_leaves_at(&child_path(path, key), visitor);
                }
            }
            ContentNode::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    item.visit_leaves_at(&child_path(path, &i.to_string()), visitor);
                }
            }
            ContentNode::Text(_) | ContentNode::Number(_) | ContentNode::Flag(_) => {}
        }
    }

    /// Number of translation leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        self.visit_leaves(&mut |_, _| count += 1);
        count
    }
}

/// A leaf is a non-empty object whose keys are all registered locale codes
/// and whose values are all strings.
///
/// `{"en": "x"}` is therefore a leaf missing its Hebrew variant, while an
/// object that merely contains an `en` key next to other keys is ordinary
/// structure.
fn is_translation(map: &Map<String, Value>) -> bool {
    let registry = LocaleRegistry::get();
    !map.is_empty()
        && map
            .iter()
            .all(|(key, value)| registry.is_locale_code(key) && value.is_string())
}

pub(crate) fn child_path(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", parent, segment)
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}
