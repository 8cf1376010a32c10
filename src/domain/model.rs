use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// User ids of everyone who liked one listing, in the order they liked it.
pub type LikeSet = Vec<String>;

pub const STARTUP_CATEGORIES: [&str; 16] = [
    "Tech",
    "Health",
    "Education",
    "Finance",
    "E-commerce",
    "SaaS",
    "AI",
    "Marketing",
    "Gaming",
    "Food & Beverage",
    "Travel",
    "Real Estate",
    "Fashion",
    "Sports",
    "Entertainment",
    "Other",
];

/// A listing as returned by the content store. Only `_createdAt` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupSummary {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "_createdAt")]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub views: Option<i64>,
    #[serde(default)]
    pub likes: Option<LikeSet>,
}

impl StartupSummary {
    pub fn new(created_at: impl Into<String>) -> Self {
        Self {
            id: None,
            created_at: created_at.into(),
            title: None,
            category: None,
            views: None,
            likes: None,
        }
    }

    pub fn with_views(mut self, views: i64) -> Self {
        self.views = Some(views);
        self
    }

    pub fn with_likes<I, S>(mut self, likes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.likes = Some(likes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

// Capability traits let the sorter and aggregator accept any record shape
// that carries the fields they read.

pub trait HasCreatedAt {
    fn created_at(&self) -> &str;
}

pub trait HasViews {
    fn views(&self) -> Option<i64>;
}

pub trait HasLikes {
    fn likes(&self) -> Option<&[String]>;
}

pub trait HasCategory {
    fn category(&self) -> Option<&str>;
}

impl HasCreatedAt for StartupSummary {
    fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl HasViews for StartupSummary {
    fn views(&self) -> Option<i64> {
        self.views
    }
}

impl HasLikes for StartupSummary {
    fn likes(&self) -> Option<&[String]> {
        self.likes.as_deref()
    }
}

impl HasCategory for StartupSummary {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// A submission attempt, exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub title: String,
    pub description: String,
    pub category: String,
    pub pitch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Title,
    Description,
    Category,
    Pitch,
    Link,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::Category => "Category",
            FormField::Pitch => "Pitch",
            FormField::Link => "Link",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of validating a [`FormInput`]. A field missing from `errors` passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<FormField, String>,
}

impl ValidationResult {
    pub fn from_errors(errors: BTreeMap<FormField, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    MostViewed,
    MostLiked,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::MostViewed => "most_viewed",
            SortKey::MostLiked => "most_liked",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key '{0}' (expected newest, oldest, most_viewed or most_liked)")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "most_viewed" | "views" => Ok(SortKey::MostViewed),
            "most_liked" | "likes" => Ok(SortKey::MostLiked),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

/// Totals for a set of listings, e.g. one author's profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryStats<T> {
    pub total_startups: usize,
    pub total_views: i64,
    pub total_likes: usize,
    pub top_startup: Option<T>,
}
