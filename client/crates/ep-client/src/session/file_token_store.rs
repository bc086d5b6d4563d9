//! Token persisted as a small JSON document next to the configuration.
//!
//! Writes go through a temp file, fsync, then an atomic rename, so a crash
//! mid-write leaves either the old token or the new one, never half a file.

use crate::{FileOp, SessionError, SessionResult, TokenStore};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct TokenFile {
    token: String,
}

#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".tmp.{}", std::process::id()));
        self.path.with_file_name(name)
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> SessionResult<Option<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No session file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(SessionError::io(FileOp::Read, &self.path, e)),
        };

        let file: TokenFile = serde_json::from_str(&contents)
            .map_err(|e| SessionError::corrupted(&self.path, e.to_string()))?;

        if file.token.trim().is_empty() {
            debug!("Blank token in {}", self.path.display());
            return Ok(None);
        }

        Ok(Some(file.token))
    }

    fn save(&self, token: &str) -> SessionResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| SessionError::io(FileOp::CreateDir, dir, e))?;
        }

        let json = serde_json::to_string_pretty(&TokenFile {
            token: token.to_string(),
        })?;
        let temp_path = self.temp_path();

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::io(FileOp::Write, &temp_path, e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| SessionError::io(FileOp::Write, &temp_path, e))?;

            file.sync_all()
                .map_err(|e| SessionError::io(FileOp::Write, &temp_path, e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::io(FileOp::Rename, &self.path, e)
        })?;

        info!("Saved session token to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed session file {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::io(FileOp::Remove, &self.path, e)),
        }
    }
}
