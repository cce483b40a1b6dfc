//! Chartdiff Core - chart template comparison engine
//!
//! This crate provides the pure, synchronous engine behind chartdiff:
//! - `template`: decode raw registry entries into classified template files
//! - `compare`: three-way version comparison (added/modified/deleted)
//! - `selection`: filterable active-selection state over a comparison list
//! - `diff`: line-level diff generation with adjustable context windows
//! - `session`: facade tying a comparison session together
//!
//! Everything here operates on in-memory strings; fetching a version's raw
//! file set from a registry lives in `chartdiff-registry`.

pub mod compare;
pub mod diff;
pub mod error;
pub mod selection;
pub mod session;
pub mod template;

pub use compare::{CompareStatus, CompareTemplate, compare_versions, summarize};
pub use diff::{ContextWindow, DiffHunk, DiffLine, FileDiff, LineKind, compute_diff, diff_template};
pub use error::{CoreError, Result};
pub use selection::SelectionState;
pub use session::CompareSession;
pub use template::{RawTemplateEntry, TemplateFile, TemplateKind, decode_template, decode_templates};
