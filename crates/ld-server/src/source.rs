//! Log file access restricted to one directory tree.

use ld_core::config::SourceConfig;
use ld_core::error::{DigestError, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Read a file as text, replacing invalid UTF-8 sequences.
pub async fn read_lossy(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[derive(Debug, Clone)]
pub struct LogSource {
    allowed_root: PathBuf,
    default_log_path: PathBuf,
}

impl LogSource {
    pub fn new(config: &SourceConfig) -> Self {
        Self {
            allowed_root: config.allowed_root.clone(),
            default_log_path: config.default_log_path.clone(),
        }
    }

    /// Resolve the requested (or default) path to a canonical file under the root.
    pub async fn resolve(&self, requested: Option<&str>) -> Result<PathBuf> {
        let path = match requested {
            Some(p) if !p.trim().is_empty() => PathBuf::from(p),
            _ => self.default_log_path.clone(),
        };
        let display = path.display().to_string();

        let is_file = tokio::fs::metadata(&path).await.map(|m| m.is_file()).unwrap_or(false);
        if !is_file {
            return Err(DigestError::LogNotFound { path: display });
        }

        let canonical = tokio::fs::canonicalize(&path).await?;
        let root = match tokio::fs::canonicalize(&self.allowed_root).await {
            Ok(root) => root,
            Err(_) => {
                warn!(root = %self.allowed_root.display(), "allowed root does not exist");
                return Err(DigestError::PathNotAllowed { path: display });
            }
        };
        if !canonical.starts_with(&root) {
            warn!(path = %path.display(), root = %root.display(), "rejected log access outside root");
            return Err(DigestError::PathNotAllowed { path: display });
        }
        Ok(canonical)
    }

    pub async fn read(&self, requested: Option<&str>) -> Result<(PathBuf, String)> {
        let path = self.resolve(requested).await?;
        let text = read_lossy(&path).await?;
        Ok((path, text))
    }
}
