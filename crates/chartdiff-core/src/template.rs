//! Decoding and classification of raw chart template entries
//!
//! A package registry serves each version's template set as a list of
//! `{name, data}` entries with base64-encoded content. This module turns
//! one entry into a structured [`TemplateFile`]: strip the `templates/`
//! prefix, classify by extension, decode the payload, and lexically scan
//! it for the Kubernetes resource kinds it renders.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::{DecodePaddingMode, GeneralPurposeConfig};
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Prefix under which registries store a chart's template files
const TEMPLATES_PREFIX: &str = "templates/";

/// Base64 engine accepting both padded and unpadded payloads.
///
/// Registries ingest charts encoded by more than one base64 implementation,
/// so decoding must not insist on canonical padding.
static BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Matches a `kind: <token>` line, with the token optionally double-quoted.
///
/// This is a deliberate lexical scan, not YAML parsing: a `kind:` line
/// inside a multi-line string value matches too, preserving the behavior
/// of the scan this engine reimplements. One match per line.
static KIND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?m)^kind:[ \t]*"?([A-Za-z0-9]+)"?"#).unwrap());

/// One raw file entry as served by the registry API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTemplateEntry {
    /// Path within the chart (e.g. `templates/deployment.yaml`)
    pub name: String,

    /// Base64-encoded file content
    pub data: String,
}

/// Classification of a template file by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// A `.yaml` file that renders one or more resources
    Template,

    /// A `.tpl` file holding shared definitions
    Helper,
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateKind::Template => write!(f, "template"),
            TemplateKind::Helper => write!(f, "helper"),
        }
    }
}

/// A decoded, classified template file from one chart version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateFile {
    /// Display name, unique within a version (prefix stripped)
    pub name: String,

    /// Final path segment without extension
    pub file_name: String,

    /// Template or helper, by extension
    pub kind: TemplateKind,

    /// Resource kinds found by the lexical scan, first-seen order, no duplicates
    pub resource_kinds: Vec<String>,

    /// Decoded file content
    pub content: String,
}

/// Decode and classify a single raw entry.
///
/// Returns `Ok(None)` for entries whose extension is not recognized
/// (only `.yaml` and `.tpl` survive). Decode failures are errors the
/// caller may skip; they carry the entry name for logging.
pub fn decode_template(entry: &RawTemplateEntry) -> Result<Option<TemplateFile>> {
    let name = entry
        .name
        .strip_prefix(TEMPLATES_PREFIX)
        .unwrap_or(&entry.name)
        .to_string();

    let kind = match name.rsplit_once('.') {
        Some((_, "yaml")) => TemplateKind::Template,
        Some((_, "tpl")) => TemplateKind::Helper,
        _ => return Ok(None),
    };

    let bytes = BASE64
        .decode(entry.data.as_bytes())
        .map_err(|e| CoreError::Decode {
            name: name.clone(),
            message: e.to_string(),
        })?;
    let content = String::from_utf8(bytes).map_err(|_| CoreError::InvalidUtf8 {
        name: name.clone(),
    })?;

    let resource_kinds = match kind {
        TemplateKind::Template => extract_resource_kinds(&content),
        TemplateKind::Helper => Vec::new(),
    };

    let file_name = file_name_of(&name);

    Ok(Some(TemplateFile {
        name,
        file_name,
        kind,
        resource_kinds,
        content,
    }))
}

/// Decode a whole version's raw file set.
///
/// Result ordering: all templates first (input order), then all helpers
/// (input order). Later sorting is stable, so this pre-ordering is what
/// keeps same-name ties deterministic. An entry that fails to decode is
/// logged and skipped; it never aborts the batch.
pub fn decode_templates(entries: &[RawTemplateEntry]) -> Vec<TemplateFile> {
    let mut templates = Vec::new();
    let mut helpers = Vec::new();

    for entry in entries {
        match decode_template(entry) {
            Ok(Some(file)) => match file.kind {
                TemplateKind::Template => templates.push(file),
                TemplateKind::Helper => helpers.push(file),
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(name = %entry.name, error = %e, "skipping undecodable template entry");
            }
        }
    }

    templates.append(&mut helpers);
    templates
}

/// Lexically scan content for `kind: <token>` lines
fn extract_resource_kinds(content: &str) -> Vec<String> {
    let mut kinds: IndexSet<String> = IndexSet::new();
    for captures in KIND_RE.captures_iter(content) {
        kinds.insert(captures[1].to_string());
    }
    kinds.into_iter().collect()
}

fn file_name_of(name: &str) -> String {
    let base = name.rsplit('/').next().unwrap_or(name);
    match base.rsplit_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => base.to_string(),
    }
}
