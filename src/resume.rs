//! Résumé source loading.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeError {
    #[error("missing resume source: {}", .0.display())]
    Missing(PathBuf),
    #[error("failed to read resume: {0}")]
    Read(#[from] std::io::Error),
}

/// Reads the résumé as UTF-8 text, failing up front when the file is absent.
pub fn load_resume(path: &Path) -> Result<String, ResumeError> {
    if !path.exists() {
        return Err(ResumeError::Missing(path.to_path_buf()));
    }
    Ok(std::fs::read_to_string(path)?)
}
