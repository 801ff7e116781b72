// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Directory-backed store: one JSON document per key.
//!
//! Writes go to a temp file that is then renamed over the target, so a crash
//! mid-write leaves the previous value intact.

use crate::error::{AppError, Result};
use crate::store::KeyValueStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) the data directory.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            AppError::Storage(format!("failed to create {}: {}", dir.display(), e))
        })?;
        tracing::debug!(path = %dir.display(), "Opened local store");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Keys are user-derived, so they are percent-encoded into file names.
    fn path_for(&self, key: &str) -> PathBuf {
        let safe_name = urlencoding::encode(key);
        self.dir.join(format!("{}.json", safe_name))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Storage(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");

        fs::write(&tmp_path, value.as_bytes()).map_err(|e| {
            AppError::Storage(format!("failed to write {}: {}", tmp_path.display(), e))
        })?;

        // Local state may contain the user's name; keep it private on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AppError::Storage(e.to_string()))?;
        }

        fs::rename(&tmp_path, &path).map_err(|e| {
            AppError::Storage(format!("failed to replace {}: {}", path.display(), e))
        })?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}
