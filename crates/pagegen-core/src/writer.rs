//! Writing rendered files into the host project

use crate::error::{GenError, GenResult};
use crate::events::{Event, EventSink};
use crate::plan::FileRole;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// A planned file with its rendered content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub role: FileRole,
    pub path: PathBuf,
    pub content: String,
}

/// Whether a write produced a new file or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Created,
    Updated,
}

impl fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteStatus::Created => write!(f, "Created"),
            WriteStatus::Updated => write!(f, "Updated"),
        }
    }
}

/// Planned targets that already exist, in plan order
pub async fn find_conflicts(files: &[RenderedFile]) -> Vec<PathBuf> {
    let mut existing = Vec::new();
    for file in files {
        if exists(&file.path).await {
            existing.push(file.path.clone());
        }
    }
    existing
}

/// Write files in order, creating parent directories as needed
///
/// With `overwrite` disabled an existing target aborts the run with
/// [`GenError::WriteConflict`]. Files written before a failure stay on disk.
pub async fn write_files(
    files: &[RenderedFile],
    overwrite: bool,
    sink: &dyn EventSink,
) -> GenResult<Vec<WriteStatus>> {
    let mut statuses = Vec::with_capacity(files.len());

    for file in files {
        let status = write_file(&file.path, &file.content, overwrite).await?;
        sink.emit(&Event::FileWritten {
            path: file.path.clone(),
            status,
        });
        statuses.push(status);
    }

    Ok(statuses)
}

async fn write_file(path: &Path, content: &str, overwrite: bool) -> GenResult<WriteStatus> {
    // Ensure parent directories exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| GenError::fs(parent, e))?;
    }

    let existed = exists(path).await;

    if overwrite {
        fs::write(path, content)
            .await
            .map_err(|e| GenError::fs(path, e))?;
    } else {
        let mut handle = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => GenError::WriteConflict(path.to_path_buf()),
                _ => GenError::fs(path, e),
            })?;
        handle
            .write_all(content.as_bytes())
            .await
            .map_err(|e| GenError::fs(path, e))?;
        handle.flush().await.map_err(|e| GenError::fs(path, e))?;
    }

    Ok(if existed {
        WriteStatus::Updated
    } else {
        WriteStatus::Created
    })
}

async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}
