//! Version comparison for chart template sets
//!
//! Given the template files of the version a user is viewing and those of
//! a reference version, classify every file as added, modified, or
//! deleted. Files whose content is byte-identical in both versions are
//! excluded from the result entirely.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::template::{TemplateFile, TemplateKind};

/// How a file changed between the reference version and the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareStatus {
    /// Exists in the current version, absent from the reference
    Added,

    /// Exists in both versions with differing content
    Modified,

    /// Exists in the reference version, absent from the current one
    Deleted,
}

impl std::fmt::Display for CompareStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompareStatus::Added => write!(f, "added"),
            CompareStatus::Modified => write!(f, "modified"),
            CompareStatus::Deleted => write!(f, "deleted"),
        }
    }
}

/// One entry of a version comparison
///
/// For `Added` and `Modified` records `content` is the current version's
/// text and `compare_content` the reference's (empty for `Added`). For
/// `Deleted` records the fields are swapped: `content` is empty and
/// `compare_content` holds the historical text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareTemplate {
    /// Display name, unique within the comparison
    pub name: String,

    /// Final path segment without extension
    pub file_name: String,

    /// Template or helper
    pub kind: TemplateKind,

    /// Resource kinds of the file (from whichever version it exists in)
    pub resource_kinds: Vec<String>,

    /// Current version's content, empty for deleted files
    pub content: String,

    /// Reference version's content, empty for added files
    pub compare_content: String,

    /// Classification of the change
    pub status: CompareStatus,
}

impl CompareTemplate {
    /// Lowercased haystack for substring filtering: name plus resource kinds
    pub fn search_key(&self) -> String {
        let mut key = self.name.clone();
        for kind in &self.resource_kinds {
            key.push(' ');
            key.push_str(kind);
        }
        key.to_lowercase()
    }
}

/// Compare the current version's files against a reference version.
///
/// Every name in either list is accounted for: it appears in the output
/// as added, modified, or deleted, or is excluded because its content is
/// identical in both versions. The result is sorted by `(kind, name)`,
/// templates before helpers.
pub fn compare_versions(
    current: &[TemplateFile],
    reference: &[TemplateFile],
) -> Vec<CompareTemplate> {
    let by_name: HashMap<&str, &TemplateFile> =
        reference.iter().map(|f| (f.name.as_str(), f)).collect();

    let mut result = Vec::new();

    for file in current {
        match by_name.get(file.name.as_str()) {
            Some(other) if other.content == file.content => {} // Unchanged
            Some(other) => {
                result.push(CompareTemplate {
                    name: file.name.clone(),
                    file_name: file.file_name.clone(),
                    kind: file.kind,
                    resource_kinds: file.resource_kinds.clone(),
                    content: file.content.clone(),
                    compare_content: other.content.clone(),
                    status: CompareStatus::Modified,
                });
            }
            None => {
                result.push(CompareTemplate {
                    name: file.name.clone(),
                    file_name: file.file_name.clone(),
                    kind: file.kind,
                    resource_kinds: file.resource_kinds.clone(),
                    content: file.content.clone(),
                    compare_content: String::new(),
                    status: CompareStatus::Added,
                });
            }
        }
    }

    for file in reference {
        if !current.iter().any(|f| f.name == file.name) {
            result.push(CompareTemplate {
                name: file.name.clone(),
                file_name: file.file_name.clone(),
                kind: file.kind,
                resource_kinds: file.resource_kinds.clone(),
                content: String::new(),
                compare_content: file.content.clone(),
                status: CompareStatus::Deleted,
            });
        }
    }

    result.sort_by(|a, b| (a.kind, &a.name).cmp(&(b.kind, &b.name)));
    result
}

/// Human-readable change summary ("2 added, 1 modified", "no changes")
pub fn summarize(templates: &[CompareTemplate]) -> String {
    let added = templates
        .iter()
        .filter(|t| t.status == CompareStatus::Added)
        .count();
    let modified = templates
        .iter()
        .filter(|t| t.status == CompareStatus::Modified)
        .count();
    let deleted = templates
        .iter()
        .filter(|t| t.status == CompareStatus::Deleted)
        .count();

    let mut parts = Vec::new();
    if added > 0 {
        parts.push(format!("{} added", added));
    }
    if modified > 0 {
        parts.push(format!("{} modified", modified));
    }
    if deleted > 0 {
        parts.push(format!("{} deleted", deleted));
    }

    if parts.is_empty() {
        "no changes".to_string()
    } else {
        parts.join(", ")
    }
}
