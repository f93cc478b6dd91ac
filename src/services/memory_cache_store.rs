use std::sync::{Mutex, PoisonError};
use crate::errors::AssistantResult;
use crate::structs::analyzed_issue::AnalyzedIssue;
use crate::structs::cache_entry::CacheEntry;
use crate::traits::cache_store::CacheStore;

/// Process-local history, used for ephemeral sessions and tests.
#[derive(Default)]
pub struct MemoryCacheStore {
    entries: Mutex<Vec<CacheEntry>>,
    last_result: Mutex<Option<AnalyzedIssue>>,
}

impl MemoryCacheStore {
    /// Empty history, no last result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the history, newest first.
    pub fn with_entries(entries: Vec<CacheEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            last_result: Mutex::new(None),
        }
    }

    /// Seeds the last-result slot, as if a previous run had completed an analysis.
    #[must_use]
    pub fn with_last_result(self, issue: AnalyzedIssue) -> Self {
        *self.last_result.lock().unwrap_or_else(PoisonError::into_inner) = Some(issue);
        self
    }
}

impl CacheStore for MemoryCacheStore {
    fn load(&self) -> Vec<CacheEntry> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn append(&self, entry: CacheEntry) -> AssistantResult<(Vec<CacheEntry>, usize)> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(0, entry);
        Ok((entries.clone(), entries.len()))
    }

    fn clear(&self) -> AssistantResult<()> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
        Ok(())
    }

    fn load_last_result(&self) -> Option<AnalyzedIssue> {
        self.last_result.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save_last_result(&self, issue: &AnalyzedIssue) -> AssistantResult<()> {
        *self.last_result.lock().unwrap_or_else(PoisonError::into_inner) = Some(issue.clone());
        Ok(())
    }
}
