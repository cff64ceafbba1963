//! Task entity and the value types that travel with it.
//!
//! A [`Task`] is created from a [`TaskDraft`] once its id is known, and is
//! changed afterwards only through [`TaskPatch`]es, so the same partial
//! update can be applied in memory and sent to a backend.
//!
//! ## Invariants
//!
//! - `id` is assigned once and never changes.
//! - `title` is never empty (see [`validate_title`]).
//! - `completed_at.is_some()` if and only if `completed`.
//! - `created_at` is set at creation and never touched again.

use super::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Opaque task identifier.
///
/// Local backends generate it on the client, remote backends receive it from
/// the server. Both numeric and string JSON ids are accepted on input so that
/// blobs written by the web version (which stores a float) and integer
/// primary keys load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a client-side id: epoch milliseconds plus a random fraction.
    ///
    /// Uniqueness is not checked against existing ids.
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis() as f64;
        let id = millis + rand::random::<f64>();
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TaskId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

impl Serialize for TaskId {
    /// Ids that are valid JSON numbers are written back as numbers; everything
    /// else as a string.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.parse::<serde_json::Number>() {
            Ok(number) if number.to_string() == self.0 => number.serialize(serializer),
            _ => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

/// Task category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Work,
    Personal,
    Study,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Work, Category::Personal, Category::Study];

    /// Stable wire name used in storage and on the remote schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Study => "study",
        }
    }

    /// Localized UI label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "업무",
            Category::Personal => "개인",
            Category::Study => "공부",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "work" | "업무" => Ok(Category::Work),
            "personal" | "개인" => Ok(Category::Personal),
            "study" | "공부" => Ok(Category::Study),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Active list filter. Session state only, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(Category),
}

impl Filter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(category) => task.category == *category,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Category(category) => category.fmt(f),
        }
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "전체" => Ok(Filter::All),
            other => other.parse().map(Filter::Category),
        }
    }
}

impl From<Category> for Filter {
    fn from(category: Category) -> Self {
        Filter::Category(category)
    }
}

/// A stored task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub category: Category,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Flips completion at `now` and returns the fields that changed.
    pub fn toggle(&mut self, now: DateTime<Utc>) -> TaskPatch {
        let completed = !self.completed;
        let patch = TaskPatch {
            completed: Some(completed),
            completed_at: Some(completed.then_some(now)),
            ..TaskPatch::default()
        };
        self.apply(&patch);
        patch
    }

    /// Replaces title and category, returning only the fields that changed.
    pub fn edit(&mut self, title: String, category: Category) -> TaskPatch {
        let patch = TaskPatch {
            title: (title != self.title).then_some(title),
            category: (category != self.category).then_some(category),
            ..TaskPatch::default()
        };
        self.apply(&patch);
        patch
    }

    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(completed_at) = patch.completed_at {
            self.completed_at = completed_at;
        }
    }
}

/// A task that has not been given an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    /// Set when the backend assigns ids on the client.
    pub id: Option<TaskId>,
    pub title: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

impl TaskDraft {
    pub fn new(title: String, category: Category, id: Option<TaskId>) -> Self {
        Self {
            id,
            title,
            category,
            created_at: Utc::now(),
        }
    }

    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            category: self.category,
            completed: false,
            created_at: self.created_at,
            completed_at: None,
        }
    }
}

/// Partial update of a task. `None` means "unchanged".
///
/// `completed_at` is doubly optional so that clearing the timestamp
/// (`Some(None)`) is distinct from leaving it alone (`None`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub completed: Option<bool>,
    pub completed_at: Option<Option<DateTime<Utc>>>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.category.is_none() && self.completed.is_none() && self.completed_at.is_none()
    }
}

/// Trims a title and rejects it when nothing is left.
pub fn validate_title(title: &str) -> Result<String, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(title.to_string())
}
