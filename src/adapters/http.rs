use crate::domain::model::StartupSummary;
use crate::domain::ports::StartupSource;
use crate::utils::error::{DirectoryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Fetches listings from a JSON endpoint.
///
/// The body may be a bare array or a query envelope `{"result": [...]}`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    endpoint: String,
    client: Client,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    fn extract_listings(body: serde_json::Value) -> Result<Vec<StartupSummary>> {
        let listings = match body {
            serde_json::Value::Array(items) => serde_json::Value::Array(items),
            serde_json::Value::Object(mut obj) => match obj.remove("result") {
                Some(result @ serde_json::Value::Array(_)) => result,
                Some(serde_json::Value::Null) => return Ok(Vec::new()),
                _ => {
                    return Err(DirectoryError::UnexpectedResponse {
                        message: "response object has no 'result' array".to_string(),
                    })
                }
            },
            other => {
                return Err(DirectoryError::UnexpectedResponse {
                    message: format!("expected an array or object, got {}", json_kind(&other)),
                })
            }
        };

        Ok(serde_json::from_value(listings)?)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[async_trait]
impl StartupSource for HttpSource {
    async fn fetch_startups(&self) -> Result<Vec<StartupSummary>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let body: serde_json::Value = response.error_for_status()?.json().await?;
        Self::extract_listings(body)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}
