//! Persistence layer for the tasl application.
//!
//! The task list lives in a single JSON file that is read in full when the
//! store is opened and replaced in full on every change. There is no log
//! and no partial update: the file always holds one complete collection.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasl::db::tasks::TaskStore;
//! use tasl::libs::task::{Category, Priority};
//!
//! let mut store = TaskStore::open("tasks.json");
//! let task = store.add("Review code", Priority::High, Category::Work)?;
//! store.complete(task.id)?;
//! # Ok::<(), tasl::db::error::TaskError>(())
//! ```

/// Typed errors raised by the store.
pub mod error;

/// Reading and writing the backing JSON file.
///
/// Handles the missing-file case, parse failures and whole-file replacement
/// through a sibling temporary file.
pub mod file;

/// Core task management operations.
///
/// Owns the in-memory collection and implements add, complete, delete,
/// re-prioritize, clear-completed, statistics and the filtered view.
pub mod tasks;
