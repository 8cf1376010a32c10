use crate::domain::model::StartupSummary;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where listings come from. Implementations return records already shaped as
/// [`StartupSummary`]; retrying is layered on top by the caller.
#[async_trait]
pub trait StartupSource: Send + Sync {
    async fn fetch_startups(&self) -> Result<Vec<StartupSummary>>;

    fn describe(&self) -> String;
}

#[async_trait]
impl<S: StartupSource + ?Sized> StartupSource for Box<S> {
    async fn fetch_startups(&self) -> Result<Vec<StartupSummary>> {
        (**self).fetch_startups().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
