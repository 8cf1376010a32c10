use crate::adapters::{FileSource, HttpSource};
use crate::core::retry::RetryPolicy;
use crate::domain::model::SortKey;
use crate::domain::ports::StartupSource;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub retry: RetryPolicy,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub file: Option<PathBuf>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub fallback_to_empty: bool,
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            file: None,
            timeout_seconds: default_timeout_seconds(),
            fallback_to_empty: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub default_sort: SortKey,
    pub category: Option<String>,
}

impl DirectoryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| DirectoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SANITY_ENDPOINT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds)
    }

    /// Build the configured listing source. An endpoint wins over a file.
    pub fn build_source(&self) -> Result<Box<dyn StartupSource>> {
        if let Some(endpoint) = &self.source.endpoint {
            return Ok(Box::new(HttpSource::new(endpoint.clone(), self.timeout())?));
        }

        match &self.source.file {
            Some(file) => Ok(Box::new(FileSource::new(file.clone()))),
            None => Err(DirectoryError::MissingConfigError {
                field: "source.endpoint or source.file".to_string(),
            }),
        }
    }
}

impl Validate for DirectoryConfig {
    fn validate(&self) -> Result<()> {
        match (&self.source.endpoint, &self.source.file) {
            (None, None) => {
                return Err(DirectoryError::MissingConfigError {
                    field: "source.endpoint or source.file".to_string(),
                })
            }
            (Some(_), Some(_)) => {
                return Err(DirectoryError::ConfigValidationError {
                    field: "source".to_string(),
                    message: "set either endpoint or file, not both".to_string(),
                })
            }
            (Some(endpoint), None) => validate_url("source.endpoint", endpoint)?,
            (None, Some(file)) => validate_path("source.file", &file.to_string_lossy())?,
        }

        validate_positive_number("source.timeout_seconds", self.source.timeout_seconds, 1)?;
        validate_range("retry.max_attempts", self.retry.max_attempts, 1, 10)?;

        if self.retry.initial_delay_ms > self.retry.max_delay_ms {
            return Err(DirectoryError::InvalidConfigValueError {
                field: "retry.initial_delay_ms".to_string(),
                value: self.retry.initial_delay_ms.to_string(),
                reason: format!("must not exceed retry.max_delay_ms ({})", self.retry.max_delay_ms),
            });
        }

        Ok(())
    }
}
