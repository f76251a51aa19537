//! Derived statistics over the task list.
//!
//! Pending counts are broken down by priority (all three priorities are
//! always present, zero-filled) and by category (only categories that have
//! at least one pending task appear).

use super::task::{Category, Priority, Task};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub priority_counts: BTreeMap<Priority, usize>,
    pub category_counts: BTreeMap<Category, usize>,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut priority_counts: BTreeMap<Priority, usize> = Priority::ALL.iter().map(|p| (*p, 0)).collect();
        let mut category_counts = BTreeMap::new();
        let mut completed = 0;

        for task in tasks {
            if task.completed {
                completed += 1;
                continue;
            }
            *priority_counts.entry(task.priority).or_insert(0) += 1;
            *category_counts.entry(task.category).or_insert(0) += 1;
        }

        TaskStats {
            total: tasks.len(),
            completed,
            pending: tasks.len() - completed,
            priority_counts,
            category_counts,
        }
    }

    /// Share of completed tasks in `0.0..=1.0`; zero for an empty list.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64
    }

    pub fn pending_with(&self, priority: Priority) -> usize {
        self.priority_counts.get(&priority).copied().unwrap_or(0)
    }
}
