//! Display implementation for tasl application messages.
//!
//! All user-facing text lives here, so wording stays consistent between
//! commands and parameters are interpolated in one place:
//!
//! ```rust
//! use tasl::libs::messages::Message;
//!
//! let text = Message::TasksCleared(2).to_string();
//! assert_eq!(text, "Cleared 2 completed task(s)");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(description) => format!("Added task: '{}'", description),
            Message::TaskCompleted(description) => format!("Completed task: '{}'", description),
            Message::TaskDeleted(description) => format!("Deleted task: '{}'", description),
            Message::TaskPriorityUpdated(description, priority) => {
                format!("Updated priority for '{}' to {}", description, priority)
            }
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::TaskAlreadyCompleted(id) => format!("Task with ID {} is already completed", id),
            Message::TaskDescriptionEmpty => "Task cannot be empty.".to_string(),
            Message::TasksCleared(count) => format!("Cleared {} completed task(s)", count),
            Message::NoCompletedTasksToClear => "No completed tasks to clear.".to_string(),
            Message::ConfirmClearCompleted(count) => format!("Remove {} completed task(s)?", count),
            Message::TasksHeader => "📋 Your Tasks".to_string(),
            Message::NoTasksMatchFilters => {
                "No tasks match your current filters. Try adjusting the filters or add a new task!".to_string()
            }

            // === STATISTICS MESSAGES ===
            Message::StatsHeader => "📊 Statistics".to_string(),
            Message::StatsTotal => "Total Tasks".to_string(),
            Message::StatsCompleted => "Completed".to_string(),
            Message::StatsPending => "Pending".to_string(),
            Message::StatsPendingByPriority => "Pending by Priority".to_string(),
            Message::StatsPendingByCategory => "Tasks by Category".to_string(),
            Message::StatsProgress(percent) => format!("Progress: {}", percent),

            // === STORAGE MESSAGES ===
            Message::TasksLoadFailed(error) => format!("{}. Starting with empty list.", error),
            Message::TasksSaveFailed(error) => format!("{}. The change is kept until tasl exits.", error),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::NothingToExport => "There are no tasks to export".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigLoadFailed(error) => format!("Failed to read config: {}. Using defaults.", error),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigNotFound => "Configuration file not found".to_string(),
            Message::ConfigWizardHeader => "Task list settings".to_string(),

            // === PROMPTS ===
            Message::PromptDataFile => "Task file path (leave empty for default)".to_string(),
            Message::PromptDefaultPriority => "Default priority for new tasks".to_string(),
            Message::PromptDefaultCategory => "Default category for new tasks".to_string(),
            Message::PromptShowCompleted => "Show completed tasks in the list by default?".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
