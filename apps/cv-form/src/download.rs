use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::SubmissionError;

/// Name every generated document is saved under.
pub const DOWNLOAD_FILENAME: &str = "curriculo_gerado.pdf";

/// Where a received document ends up.
pub trait DownloadSink: Send + Sync {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, SubmissionError>;
}

/// Writes documents into a directory, replacing any earlier file of the same name.
#[derive(Debug, Clone)]
pub struct FileDownloader {
    dir: PathBuf,
}

impl FileDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for FileDownloader {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, SubmissionError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        fs::write(&path, bytes)?;
        info!("Saved {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}
