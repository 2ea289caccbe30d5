//! Structured result of analyzing a Swift package manifest.
//! These types are the wire shape of the `parse-package` tool's success
//! payload and are serialized with camelCase keys.

use serde::{Deserialize, Serialize};

/// A single dependency declaration recovered from the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDependency {
    /// Short name derived from the last path segment of the URL
    pub name: String,
    /// Source URL, verbatim as it appeared in the manifest
    pub url: String,
    /// Normalized version constraint (e.g. `^1.2.3`, `>=2.0.0`, `branch:main`)
    pub requirement: String,
}

/// Everything the parser recovers from one manifest
///
/// All sequences are in first-occurrence source order; duplicate
/// declarations are kept, one entry per textual occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageAnalysis {
    /// Declared package name, absent when no quoted `name:` value was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    pub dependencies: Vec<PackageDependency>,
    pub products: Vec<String>,
    pub targets: Vec<String>,
}

impl PackageAnalysis {
    /// Canonical JSON form: pretty-printed with lexicographically sorted keys.
    ///
    /// Serializing through `serde_json::Value` sorts the keys, since the
    /// default map representation is a BTreeMap.
    pub fn to_canonical_json(&self) -> serde_json::Result<String> {
        let value = serde_json::to_value(self)?;
        serde_json::to_string_pretty(&value)
    }
}
