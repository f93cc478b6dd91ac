use std::path::Path;
use crate::errors::{AssistantError, AssistantResult};

/// Saves exported JSON snapshots.
pub struct ExportHelper;

impl ExportHelper {
    /// Writes an exported snapshot to `path`, creating parent directories.
    pub fn save_to_file(path: &Path, content: &str) -> AssistantResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .map_err(|e| AssistantError::file_error(&path.display().to_string(), "save export", &e.to_string()))?;

        log::info!("💾 Saved to {}", path.display());
        Ok(())
    }
}
