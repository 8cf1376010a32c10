use crate::domain::model::StartupSummary;
use crate::domain::ports::StartupSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads a JSON array of listings from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl StartupSource for FileSource {
    async fn fetch_startups(&self) -> Result<Vec<StartupSummary>> {
        let data = tokio::fs::read(&self.path).await?;
        let startups: Vec<StartupSummary> = serde_json::from_slice(&data)?;
        tracing::debug!("Read {} startups from {}", startups.len(), self.path.display());
        Ok(startups)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
