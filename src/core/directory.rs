use crate::config::DirectoryConfig;
use crate::core::retry::{fetch_with_retry, RetryPolicy};
use crate::core::{sorting, stats};
use crate::domain::model::{DirectoryStats, StartupSummary};
use crate::domain::ports::StartupSource;
use crate::utils::error::Result;

/// Fetches listings through a [`StartupSource`] and shapes them for display.
pub struct Directory<S: StartupSource> {
    source: S,
    retry: RetryPolicy,
    empty_on_failure: bool,
}

impl<S: StartupSource> Directory<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            retry: RetryPolicy::default(),
            empty_on_failure: false,
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Serve an empty directory instead of an error once retries are used up.
    pub fn with_empty_fallback(mut self, enabled: bool) -> Self {
        self.empty_on_failure = enabled;
        self
    }

    pub async fn fetch(&self) -> Result<Vec<StartupSummary>> {
        tracing::debug!("Fetching startups from {}", self.source.describe());

        let fallback = self.empty_on_failure.then(Vec::new);
        let startups =
            fetch_with_retry(&self.retry, fallback, || self.source.fetch_startups()).await?;

        tracing::info!("Fetched {} startups", startups.len());
        Ok(startups)
    }

    /// Listings in `category` (all when `None`), ordered by `sort`.
    /// An unrecognised sort name keeps the source order.
    pub async fn listing(&self, sort: &str, category: Option<&str>) -> Result<Vec<StartupSummary>> {
        let startups = self.fetch().await?;
        let filtered = match category {
            Some(category) => sorting::filter_by_category(&startups, category),
            None => startups,
        };

        Ok(sorting::sort_by_name(&filtered, sort))
    }

    pub async fn stats(&self) -> Result<DirectoryStats<StartupSummary>> {
        let startups = self.fetch().await?;
        Ok(stats::summarize(&startups))
    }
}

impl Directory<Box<dyn StartupSource>> {
    /// Builds the configured source and applies its retry and fallback settings.
    pub fn from_config(config: &DirectoryConfig) -> Result<Self> {
        let source = config.build_source()?;
        tracing::info!("Using source: {}", source.describe());

        Ok(Directory::new(source)
            .with_retry(config.retry.clone())
            .with_empty_fallback(config.source.fallback_to_empty))
    }
}
