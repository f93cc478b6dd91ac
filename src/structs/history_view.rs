use crate::structs::cache_entry::CacheEntry;

/// The bounded head of the history plus the total number of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryView {
    /// Newest first, at most the display limit.
    pub recent: Vec<CacheEntry>,
    /// Total persisted entries.
    pub count: usize,
}

impl HistoryView {
    /// Head of `entries` (newest first) bounded by `limit`.
    pub fn from_entries(entries: &[CacheEntry], limit: usize) -> Self {
        Self {
            recent: entries.iter().take(limit).cloned().collect(),
            count: entries.len(),
        }
    }

    /// True when nothing is persisted.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
