//! Comparison session facade
//!
//! Ties the engine together for one comparison session: the current
//! version's decoded files, the comparison list derived from the latest
//! reference input, and the selection state over it. All state is
//! transient and derived fresh whenever a new reference arrives; a stale
//! reference is superseded simply by the next `set_reference` call.

use crate::compare::{CompareTemplate, compare_versions, summarize};
use crate::diff::{ContextWindow, FileDiff, diff_template};
use crate::selection::SelectionState;
use crate::template::TemplateFile;

/// One chart comparison session
#[derive(Debug, Default)]
pub struct CompareSession {
    current: Vec<TemplateFile>,
    selection: SelectionState,
}

impl CompareSession {
    /// Start a session over the current version's decoded files
    pub fn new(current: Vec<TemplateFile>) -> Self {
        Self {
            current,
            selection: SelectionState::new(),
        }
    }

    /// Supply (or replace) the reference version's files.
    ///
    /// `None` means the reference is unavailable (e.g. the fetch failed):
    /// the comparison list becomes empty and the selection clears, so a
    /// failed load degrades to "no changes found" rather than an error.
    pub fn set_reference(&mut self, reference: Option<&[TemplateFile]>) {
        let list = match reference {
            Some(files) => compare_versions(&self.current, files),
            None => Vec::new(),
        };
        self.selection.set_templates(list);
    }

    /// Update the substring filter over the comparison list
    pub fn set_filter(&mut self, filter: &str) {
        self.selection.set_filter(filter);
    }

    /// Explicitly select a visible record; no-op for hidden names
    pub fn select(&mut self, name: &str) -> bool {
        self.selection.select(name)
    }

    /// Records matching the current filter
    pub fn visible(&self) -> Vec<&CompareTemplate> {
        self.selection.visible()
    }

    /// The active record, if any
    pub fn active(&self) -> Option<&CompareTemplate> {
        self.selection.active()
    }

    /// Line diff of the active record, recomputed on every call
    pub fn diff(&self, context: ContextWindow) -> Option<FileDiff> {
        self.active().map(|t| diff_template(t, context))
    }

    /// The full comparison list, ignoring the filter
    pub fn templates(&self) -> &[CompareTemplate] {
        self.selection.templates()
    }

    /// Current filter text
    pub fn filter_text(&self) -> &str {
        self.selection.filter()
    }

    /// Change summary over the whole comparison list
    pub fn summary(&self) -> String {
        summarize(self.selection.templates())
    }
}
