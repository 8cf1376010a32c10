pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileSource, HttpSource};
pub use config::DirectoryConfig;
pub use crate::core::{
    dates::{format_absolute, format_relative, format_relative_now},
    directory::Directory,
    form_validator::validate,
    likes::{count, has_liked, toggle},
    retry::{fetch_with_retry, RetryPolicy},
    sorting::{filter_by_category, sort, sort_by_name},
    stats::{summarize, top_by_views, total_likes, total_views},
};
pub use domain::model::{
    DirectoryStats, FormField, FormInput, LikeSet, SortKey, StartupSummary, ValidationResult,
    STARTUP_CATEGORIES,
};
pub use domain::ports::StartupSource;
pub use utils::error::{DirectoryError, Result};
