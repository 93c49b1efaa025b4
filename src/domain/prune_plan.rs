//! Retention-window planning for log pruning.

use super::FileEntry;

/// Which matching files a prune run removes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunePlan {
    /// Number of matching files observed.
    pub matched: usize,
    /// Files outside the retention window.
    pub eligible: usize,
    /// Oldest-first files to delete, at most `deletion_threshold` long.
    pub to_delete: Vec<FileEntry>,
}

impl PrunePlan {
    /// Order matches oldest-first, keep the newest `window_size`, and cap the
    /// remainder at `deletion_threshold`.
    ///
    /// The sort is stable, so entries with equal timestamps keep scan order.
    pub fn build(mut matches: Vec<FileEntry>, window_size: usize, deletion_threshold: usize) -> Self {
        let matched = matches.len();
        matches.sort_by_key(|entry| entry.modified);

        let eligible = matched.saturating_sub(window_size);
        matches.truncate(eligible.min(deletion_threshold));

        Self { matched, eligible, to_delete: matches }
    }

    pub fn is_empty(&self) -> bool {
        self.to_delete.is_empty()
    }
}
