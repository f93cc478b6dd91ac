use crate::errors::AssistantResult;
use crate::structs::analyzed_issue::AnalyzedIssue;
use crate::structs::cache_entry::CacheEntry;

/// Durable, newest-first log of completed analyses, plus a slot holding the
/// last applied result so it can be shown again after a restart.
///
/// `append` and `clear` never leave partially written state behind.
pub trait CacheStore: Send + Sync {

    /// Never fails: missing or malformed storage reads as empty.
    fn load(&self) -> Vec<CacheEntry>;

    /// Inserts at the head without deduplication and returns the new
    /// sequence with its length.
    fn append(&self, entry: CacheEntry) -> AssistantResult<(Vec<CacheEntry>, usize)>;

    /// Empties the log. The last-result slot is kept.
    fn clear(&self) -> AssistantResult<()>;

    /// First `n` entries of [`load`](Self::load).
    fn recent_head(&self, n: usize) -> Vec<CacheEntry> {
        self.load().into_iter().take(n).collect()
    }

    /// Missing or malformed slot reads as `None`.
    fn load_last_result(&self) -> Option<AnalyzedIssue>;

    /// Replaces the slot.
    fn save_last_result(&self, issue: &AnalyzedIssue) -> AssistantResult<()>;
}
