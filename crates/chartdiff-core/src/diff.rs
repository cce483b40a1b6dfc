//! Line-level diff generation with context windowing
//!
//! Turns the two content blobs of a comparison record into an ordered
//! list of hunks ready for display. The diff algorithm itself comes from
//! the `similar` crate; this module only groups its output into hunks,
//! attaches range headers and line numbers, and flags the missing
//! trailing newline case.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, DiffOp, TextDiff};

use crate::compare::CompareTemplate;

/// How many unchanged lines to keep around each change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextWindow {
    /// Fixed number of context lines per hunk
    Lines(usize),

    /// The whole file as a single hunk (the "expanded" toggle)
    Full,
}

impl Default for ContextWindow {
    fn default() -> Self {
        // The collapsed compare view shows two lines of context
        ContextWindow::Lines(2)
    }
}

/// A line-level diff of one comparison record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDiff {
    /// Ordered hunks; empty when the two sides are identical
    pub hunks: Vec<DiffHunk>,

    /// Whether the old side ends with a newline (vacuously true when the
    /// old side is empty). Renderers show a "no newline at end of file"
    /// marker after the last hunk when this is false, except for deleted
    /// records where there is no new side to contrast against.
    pub old_has_trailing_newline: bool,
}

impl FileDiff {
    /// Render as plain unified-diff text (hunk headers plus prefixed lines)
    pub fn to_unified_string(&self) -> String {
        let mut output = String::new();
        for hunk in &self.hunks {
            output.push_str(&hunk.header());
            output.push('\n');
            for line in &hunk.lines {
                let prefix = match line.kind {
                    LineKind::Added => '+',
                    LineKind::Removed => '-',
                    LineKind::Context => ' ',
                };
                output.push(prefix);
                output.push_str(&line.content);
                output.push('\n');
            }
        }
        output
    }
}

/// A contiguous block of paired old/new lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffHunk {
    /// First line of the hunk in the old text (1-based; 0 when the old
    /// side of the hunk is empty)
    pub old_start: usize,

    /// Number of old lines covered by the hunk
    pub old_lines: usize,

    /// First line of the hunk in the new text (1-based; 0 when empty)
    pub new_start: usize,

    /// Number of new lines covered by the hunk
    pub new_lines: usize,

    /// The context/added/removed lines of the hunk, in display order
    pub lines: Vec<DiffLine>,
}

impl DiffHunk {
    /// Range header in unified form, e.g. `@@ -3,7 +3,8 @@`
    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.old_start, self.old_lines, self.new_start, self.new_lines
        )
    }
}

/// A single line in a hunk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffLine {
    /// Context, added, or removed
    pub kind: LineKind,

    /// Line content without its trailing newline
    pub content: String,

    /// 1-based line number in the old text
    pub old_line_no: Option<usize>,

    /// 1-based line number in the new text
    pub new_line_no: Option<usize>,
}

/// Type of diff line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Line was added
    Added,

    /// Line was removed
    Removed,

    /// Unchanged context line
    Context,
}

/// Compute the line diff between two content blobs.
///
/// Identical inputs yield zero hunks. An empty `old` yields a single
/// pure-insertion hunk, an empty `new` a single pure-deletion hunk.
/// Recomputed from scratch on every call; there is no caching.
pub fn compute_diff(old: &str, new: &str, context: ContextWindow) -> FileDiff {
    let diff = TextDiff::from_lines(old, new);

    let has_changes = diff
        .ops()
        .iter()
        .any(|op| !matches!(op, DiffOp::Equal { .. }));

    let groups: Vec<Vec<DiffOp>> = if !has_changes {
        Vec::new()
    } else {
        match context {
            ContextWindow::Lines(n) => diff.grouped_ops(n),
            ContextWindow::Full => vec![diff.ops().to_vec()],
        }
    };

    let mut hunks = Vec::with_capacity(groups.len());
    for group in &groups {
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };

        let old_range = first.old_range().start..last.old_range().end;
        let new_range = first.new_range().start..last.new_range().end;

        let mut lines = Vec::new();
        for op in group {
            for change in diff.iter_changes(op) {
                let kind = match change.tag() {
                    ChangeTag::Insert => LineKind::Added,
                    ChangeTag::Delete => LineKind::Removed,
                    ChangeTag::Equal => LineKind::Context,
                };
                lines.push(DiffLine {
                    kind,
                    content: strip_newline(change.value()).to_string(),
                    old_line_no: change.old_index().map(|i| i + 1),
                    new_line_no: change.new_index().map(|i| i + 1),
                });
            }
        }

        hunks.push(DiffHunk {
            old_start: unified_start(&old_range),
            old_lines: old_range.len(),
            new_start: unified_start(&new_range),
            new_lines: new_range.len(),
            lines,
        });
    }

    FileDiff {
        hunks,
        old_has_trailing_newline: old.is_empty() || old.ends_with('\n'),
    }
}

/// Diff a comparison record: reference content is the old side, current
/// content the new side (already swapped appropriately for deletions)
pub fn diff_template(template: &CompareTemplate, context: ContextWindow) -> FileDiff {
    compute_diff(&template.compare_content, &template.content, context)
}

/// Unified-diff start line: 1-based, except 0 for an empty range
fn unified_start(range: &std::ops::Range<usize>) -> usize {
    if range.is_empty() {
        range.start
    } else {
        range.start + 1
    }
}

fn strip_newline(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_inputs_yield_no_hunks() {
        let diff = compute_diff("a\nb\n", "a\nb\n", ContextWindow::default());
        assert!(diff.hunks.is_empty());

        let diff = compute_diff("", "", ContextWindow::Full);
        assert!(diff.hunks.is_empty());
    }

    #[test]
    fn test_pure_insertion_for_added_file() {
        let diff = compute_diff("", "kind: Pod\nspec: {}\n", ContextWindow::default());

        assert_eq!(diff.hunks.len(), 1);
        let hunk = &diff.hunks[0];
        assert_eq!(hunk.header(), "@@ -0,0 +1,2 @@");
        assert!(hunk.lines.iter().all(|l| l.kind == LineKind::Added));
        let contents: Vec<&str> = hunk.lines.iter().map(|l| l.content.as_str()).collect();
        assert_eq!(contents, vec!["kind: Pod", "spec: {}"]);
    }

    #[test]
    fn test_pure_deletion_for_deleted_file() {
        let diff = compute_diff("kind: Pod\nspec: {}\n", "", ContextWindow::default());

        assert_eq!(diff.hunks.len(), 1);
        let hunk = &diff.hunks[0];
        assert_eq!(hunk.header(), "@@ -1,2 +0,0 @@");
        assert!(hunk.lines.iter().all(|l| l.kind == LineKind::Removed));
        let contents: Vec<&str> = hunk.lines.iter().map(|l| l.content.as_str()).collect();
        assert_eq!(contents, vec!["kind: Pod", "spec: {}"]);
    }

    #[test]
    fn test_context_window_limits_hunk_size() {
        let old: String = (1..=20).map(|i| format!("line {}\n", i)).collect();
        let new = old.replace("line 10\n", "changed 10\n");

        let diff = compute_diff(&old, &new, ContextWindow::Lines(2));

        assert_eq!(diff.hunks.len(), 1);
        let hunk = &diff.hunks[0];
        // 2 context above, removal + insertion, 2 context below
        assert_eq!(hunk.lines.len(), 6);
        assert_eq!(hunk.header(), "@@ -8,5 +8,5 @@");
    }

    #[test]
    fn test_distant_changes_split_into_hunks() {
        let old: String = (1..=20).map(|i| format!("line {}\n", i)).collect();
        let new = old
            .replace("line 2\n", "changed 2\n")
            .replace("line 19\n", "changed 19\n");

        let diff = compute_diff(&old, &new, ContextWindow::Lines(1));
        assert_eq!(diff.hunks.len(), 2);

        let full = compute_diff(&old, &new, ContextWindow::Full);
        assert_eq!(full.hunks.len(), 1);
        assert_eq!(full.hunks[0].old_lines, 20);
        assert_eq!(full.hunks[0].new_lines, 20);
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let diff = compute_diff("a\nb\nc\n", "a\nx\nc\n", ContextWindow::Lines(2));

        let hunk = &diff.hunks[0];
        assert_eq!(hunk.lines[0].old_line_no, Some(1));
        assert_eq!(hunk.lines[0].new_line_no, Some(1));

        let removed = hunk.lines.iter().find(|l| l.kind == LineKind::Removed).unwrap();
        assert_eq!(removed.old_line_no, Some(2));
        assert_eq!(removed.new_line_no, None);

        let added = hunk.lines.iter().find(|l| l.kind == LineKind::Added).unwrap();
        assert_eq!(added.old_line_no, None);
        assert_eq!(added.new_line_no, Some(2));
    }

    #[test]
    fn test_trailing_newline_detection() {
        assert!(compute_diff("a\n", "b\n", ContextWindow::default()).old_has_trailing_newline);
        assert!(!compute_diff("a", "b\n", ContextWindow::default()).old_has_trailing_newline);
        // No old side at all: nothing to flag
        assert!(compute_diff("", "b\n", ContextWindow::default()).old_has_trailing_newline);
    }

    #[test]
    fn test_unified_rendering() {
        let diff = compute_diff("a\nb\nc\n", "a\nx\nc\n", ContextWindow::Lines(2));
        insta::assert_snapshot!(diff.to_unified_string(), @r"
        @@ -1,3 +1,3 @@
         a
        -b
        +x
         c
        ");
    }
}
