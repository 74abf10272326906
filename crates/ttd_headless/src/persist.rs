use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("directory {path:?} missing or not writable: {reason}")]
    Directory { path: PathBuf, reason: String },
    #[error("could not serialize {what}: {reason}")]
    Serialize { what: &'static str, reason: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure `dir` exists and is writable; create it if missing.
pub fn ensure_dir(dir: &Path) -> Result<(), PersistError> {
    let fail = |reason: String| PersistError::Directory {
        path: dir.to_path_buf(),
        reason,
    };
    if dir.exists() {
        if !fs::metadata(dir).map_err(|e| fail(e.to_string()))?.is_dir() {
            return Err(fail("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| fail(e.to_string()))?;
    }
    // Writability probe; the temp file is removed on drop.
    NamedTempFile::new_in(dir).map_err(|e| fail(e.to_string()))?;
    Ok(())
}

/// Writes whole files into one directory via temp file + rename, so a crash
/// mid-write never leaves a half-written report or settings file behind.
#[derive(Debug, Clone)]
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `content` to `filename` inside the directory, replacing any
    /// previous file. Returns the full path.
    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        ensure_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Replaces an existing file in one rename, so readers always see a
        // whole file.
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}
