//! Breadcrumb layout
//!
//! Turns a path into a width-constrained row of clickable segments. When the
//! full trail does not fit, segments are dropped from the root end; the leaf
//! (current location) is always kept, even if it alone exceeds the budget.
//!
//! Widths are abstract units supplied by the caller's width oracle, so this
//! module has no rendering dependency. The terminal front-end passes the
//! unicode display width of each label.

use std::path::{Path, PathBuf};

use super::path::segments;

/// One clickable element of the breadcrumb bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbSegment {
    pub label: String,
    /// Absolute path from the true root through this segment
    pub prefix_path: PathBuf,
    /// Label width plus the separator allowance
    pub rendered_width: usize,
    /// Current location, rendered with emphasis
    pub is_leaf: bool,
}

/// Breadcrumb layout parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreadcrumbLayout {
    /// Fixed per-segment allowance for the separator glyph and padding
    pub separator_width: usize,
}

impl Default for BreadcrumbLayout {
    fn default() -> Self {
        Self { separator_width: 1 }
    }
}

impl BreadcrumbLayout {
    pub fn new(separator_width: usize) -> Self {
        Self { separator_width }
    }

    /// Lay out `path` within `width_budget`
    ///
    /// # Arguments
    /// * `path` - Location to render (normalized internally)
    /// * `width_budget` - Maximum total width of the visible segments
    /// * `width_fn` - Width oracle for a single label
    ///
    /// # Returns
    /// Visible segments in root-to-leaf order. Never empty for a non-empty path.
    ///
    /// # Examples
    /// ```
    /// use std::path::{Path, PathBuf};
    /// use tanzfm::logic::breadcrumb::BreadcrumbLayout;
    ///
    /// let layout = BreadcrumbLayout::new(1);
    /// // "home"=5, "user"=5, "projects"=9 -> 19 total, budget 15
    /// let segs = layout.compute(Path::new("/home/user/projects"), 15, |s| s.len());
    /// assert_eq!(segs.len(), 2);
    /// assert_eq!(segs[0].label, "user");
    /// assert_eq!(segs[0].prefix_path, PathBuf::from("/home/user"));
    /// assert!(segs[1].is_leaf);
    /// ```
    pub fn compute<F>(&self, path: &Path, width_budget: usize, width_fn: F) -> Vec<BreadcrumbSegment>
    where
        F: Fn(&str) -> usize,
    {
        let parts = segments(path);
        let leaf_index = parts.len().saturating_sub(1);

        let mut visible: Vec<BreadcrumbSegment> = parts
            .into_iter()
            .enumerate()
            .map(|(idx, (label, prefix_path))| {
                let rendered_width = width_fn(&label) + self.separator_width;
                BreadcrumbSegment {
                    label,
                    prefix_path,
                    rendered_width,
                    is_leaf: idx == leaf_index,
                }
            })
            .collect();

        let mut total: usize = visible.iter().map(|s| s.rendered_width).sum();
        let mut dropped = 0;
        while total > width_budget && visible.len() - dropped > 1 {
            total -= visible[dropped].rendered_width;
            dropped += 1;
        }
        visible.drain(..dropped);

        visible
    }
}

/// Whether the trail for `path` was shortened by the layout
pub fn is_truncated(path: &Path, visible: &[BreadcrumbSegment]) -> bool {
    segments(path).len() > visible.len()
}

/// Find the segment under horizontal offset `x` (0 = left edge of the bar)
///
/// Segments are assumed to be drawn back to back in order, each occupying its
/// `rendered_width`.
pub fn hit_test(visible: &[BreadcrumbSegment], x: usize) -> Option<&BreadcrumbSegment> {
    let mut start = 0;
    for segment in visible {
        let end = start + segment.rendered_width;
        if x >= start && x < end {
            return Some(segment);
        }
        start = end;
    }
    None
}
