//! Namespace loading.
//!
//! Site content is split into one JSON document per namespace. At startup the
//! documents are parsed and merged into a single root object keyed by
//! namespace, so `home.json`'s `hero.title` is addressed as `home.hero.title`.

use crate::error::ContentError;
use crate::i18n::ContentNode;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Content namespaces, in load order.
pub const NAMESPACES: &[&str] = &[
    "common",
    "home",
    "about",
    "training",
    "contact",
    "pricing",
    "modals",
    "privacy",
    "accessibility",
];

/// Namespace documents compiled into the binary.
const BUNDLED: &[(&str, &str)] = &[
    ("common", include_str!("../../content/common.json")),
    ("home", include_str!("../../content/home.json")),
    ("about", include_str!("../../content/about.json")),
    ("training", include_str!("../../content/training.json")),
    ("contact", include_str!("../../content/contact.json")),
    ("pricing", include_str!("../../content/pricing.json")),
    ("modals", include_str!("../../content/modals.json")),
    ("privacy", include_str!("../../content/privacy.json")),
    ("accessibility", include_str!("../../content/accessibility.json")),
];

/// Parse and merge the bundled namespace documents.
pub fn load_bundled() -> Result<ContentNode, ContentError> {
    merge(BUNDLED.iter().map(|(namespace, json)| (*namespace, *json)))
}

/// Read `<dir>/<namespace>.json` for every namespace and merge them.
///
/// Every namespace must be present; a missing file is an I/O error and a
/// malformed one is reported with its namespace.
pub fn load_dir(dir: &Path) -> Result<ContentNode, ContentError> {
    let mut documents = Vec::with_capacity(NAMESPACES.len());
    for namespace in NAMESPACES {
        let path = dir.join(format!("{}.json", namespace));
        let json = std::fs::read_to_string(&path).map_err(|source| ContentError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("Read {} ({} bytes)", path.display(), json.len());
        documents.push((*namespace, json));
    }
    merge(documents.iter().map(|(ns, json)| (*ns, json.as_str())))
}

/// Merge `(namespace, json)` documents into one root object.
pub fn merge<'a, I>(documents: I) -> Result<ContentNode, ContentError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut root = BTreeMap::new();
    for (namespace, json) in documents {
        let node = ContentNode::from_json_str(namespace, json)?;
        info!(
            "Loaded content namespace '{}' ({} translation leaves)",
            namespace,
            node.leaf_count()
        );
        root.insert(namespace.to_string(), node);
    }
    Ok(ContentNode::Object(root))
}
