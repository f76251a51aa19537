//! Task record and the enumerations that classify it.
//!
//! A [`Task`] is a single to-do item. Its priority and category are closed
//! enumerations so that every stored record always carries a known value;
//! records written without a priority or category load with the defaults
//! (`Medium` and `Personal`).
//!
//! Timestamps are local wall-clock times truncated to whole seconds and
//! persisted as `YYYY-MM-DD HH:MM:SS` strings.

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format used for persisted and displayed timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Task priority. The declaration order is the display rank: `High` sorts first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Sort rank, lower comes first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Priority::High => "🔴",
            Priority::Medium => "🟡",
            Priority::Low => "🟢",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        f.write_str(name)
    }
}

/// Task category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Category {
    #[default]
    Personal,
    Work,
    Health,
    Learning,
    Shopping,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Personal,
        Category::Work,
        Category::Health,
        Category::Learning,
        Category::Shopping,
        Category::Other,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Health => "Health",
            Category::Learning => "Learning",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
        };
        f.write_str(name)
    }
}

/// A single to-do item.
///
/// `completed_at` is `Some` exactly when `completed` is true. The only way to
/// set it is [`Task::complete`], which is a one-way transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    #[serde(alias = "task")]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: Category,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "optional_timestamp")]
    pub completed_at: Option<NaiveDateTime>,
}

impl Task {
    /// Creates a pending task stamped with the current time.
    ///
    /// The description is stored as given; trimming and validation belong
    /// to the store.
    pub fn new(id: u32, description: &str, priority: Priority, category: Category) -> Self {
        Task {
            id,
            description: description.to_string(),
            completed: false,
            priority,
            category,
            created_at: now(),
            completed_at: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        !self.completed
    }

    /// Marks the task completed. Returns `false` if it already was.
    pub fn complete(&mut self) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        self.completed_at = Some(now());
        true
    }
}

/// Filter applied to the task list before display.
///
/// An empty `priorities` or `categories` list matches nothing, the same as
/// deselecting every option in a multi-select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFilter {
    pub show_completed: bool,
    pub priorities: Vec<Priority>,
    pub categories: Vec<Category>,
}

impl Default for TaskFilter {
    fn default() -> Self {
        TaskFilter {
            show_completed: true,
            priorities: Priority::ALL.to_vec(),
            categories: Category::ALL.to_vec(),
        }
    }
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        (self.show_completed || task.is_pending())
            && self.priorities.contains(&task.priority)
            && self.categories.contains(&task.category)
    }
}

/// Current local time truncated to whole seconds, so that a persisted
/// timestamp reloads to an identical value.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(de::Error::custom)
    }
}

mod optional_timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
                .map(Some)
                .map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}
