use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use fd_lock::RwLock;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use crate::errors::{AssistantError, AssistantResult};
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::analyzed_issue::AnalyzedIssue;
use crate::structs::cache_entry::CacheEntry;
use crate::traits::cache_store::CacheStore;

#[derive(Serialize, Deserialize)]
struct LastResultRecord {
    request: AnalysisRequest,
    result: AnalysisResult,
}

/// History persisted as a JSON array in a single file.
///
/// Writers serialize on an advisory lock held on `<file>.lock`, so several
/// processes sharing one history file never drop each other's entries. The
/// last applied result lives next to it in `<file stem>.last.json`.
pub struct FileCacheStore {
    path: PathBuf,
}

impl FileCacheStore {
    /// Store backed by `path`. Nothing is touched until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// History file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last-result slot file.
    pub fn last_result_path(&self) -> PathBuf {
        self.path.with_extension("last.json")
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".lock");
        self.path.with_file_name(name)
    }

    fn parent_dir(&self) -> AssistantResult<PathBuf> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent)?;
        Ok(parent)
    }

    fn open_lock(&self) -> AssistantResult<RwLock<File>> {
        self.parent_dir()?;
        let lock_path = self.lock_path();
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&lock_path)
            .map_err(|e| AssistantError::file_error(&lock_path.display().to_string(), "open history lock", &e.to_string()))?;
        Ok(RwLock::new(file))
    }

    // Runs `work` while holding the cross-process write lock
    fn locked<T>(&self, work: impl FnOnce() -> AssistantResult<T>) -> AssistantResult<T> {
        let mut lock = self.open_lock()?;
        let _guard = lock
            .write()
            .map_err(|e| AssistantError::file_error(&self.lock_path().display().to_string(), "lock history", &e.to_string()))?;
        work()
    }

    fn read_entries(&self) -> Vec<CacheEntry> {
        if !self.path.exists() {
            log::debug!("📋 No history file at {}", self.path.display());
            return Vec::new();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("⚠️ Could not read history file {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<CacheEntry>>(&content) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("⚠️ Invalid history file format, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    // Write to a sibling temp file and rename it over the target
    fn write_atomically(&self, target: &Path, content: &str) -> AssistantResult<()> {
        let parent = self.parent_dir()?;
        let file_path = target.display().to_string();

        let mut temp = NamedTempFile::new_in(&parent)
            .map_err(|e| AssistantError::file_error(&file_path, "create temporary file", &e.to_string()))?;
        temp.write_all(content.as_bytes())
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| AssistantError::file_error(&file_path, "write", &e.to_string()))?;
        temp.persist(target)
            .map_err(|e| AssistantError::file_error(&file_path, "replace", &e.error.to_string()))?;

        Ok(())
    }
}

impl CacheStore for FileCacheStore {
    fn load(&self) -> Vec<CacheEntry> {
        self.read_entries()
    }

    fn append(&self, entry: CacheEntry) -> AssistantResult<(Vec<CacheEntry>, usize)> {
        self.locked(|| {
            let mut entries = self.read_entries();
            entries.insert(0, entry);
            self.write_atomically(&self.path, &serde_json::to_string_pretty(&entries)?)?;

            log::debug!("💾 History updated, {} entries", entries.len());
            let count = entries.len();
            Ok((entries, count))
        })
    }

    fn clear(&self) -> AssistantResult<()> {
        self.locked(|| match std::fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("🧹 History cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AssistantError::file_error(&self.path.display().to_string(), "clear history", &e.to_string())),
        })
    }

    fn load_last_result(&self) -> Option<AnalyzedIssue> {
        let path = self.last_result_path();
        let content = std::fs::read_to_string(&path).ok()?;

        match serde_json::from_str::<LastResultRecord>(&content) {
            Ok(record) => Some(AnalyzedIssue::new(record.request, record.result)),
            Err(e) => {
                log::warn!("⚠️ Ignoring unreadable last result {}: {}", path.display(), e);
                None
            }
        }
    }

    fn save_last_result(&self, issue: &AnalyzedIssue) -> AssistantResult<()> {
        let record = LastResultRecord {
            request: issue.request.clone(),
            result: issue.result.clone(),
        };
        let content = serde_json::to_string_pretty(&record)?;
        self.locked(|| self.write_atomically(&self.last_result_path(), &content))
    }
}
