pub mod dates;
pub mod directory;
pub mod form_validator;
pub mod likes;
pub mod retry;
pub mod sorting;
pub mod stats;

pub use crate::domain::model::{
    DirectoryStats, FormField, FormInput, LikeSet, SortKey, StartupSummary, ValidationResult,
};
pub use crate::domain::ports::StartupSource;
pub use crate::utils::error::Result;
