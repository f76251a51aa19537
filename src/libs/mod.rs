//! Core library modules for the tasl application.
//!
//! ## Features
//!
//! - **Task Model**: Task records, priorities, categories and list filters
//! - **Statistics**: Pending counts by priority and category, progress
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **User Interface**: Console tables, formatting, data export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasl::db::tasks::TaskStore;
//! use tasl::libs::task::{Category, Priority, TaskFilter};
//!
//! let mut store = TaskStore::open("tasks.json");
//! store.add("Implement feature", Priority::High, Category::Work)?;
//! let visible = store.filtered_sorted(&TaskFilter::default());
//! # Ok::<(), tasl::db::error::TaskError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod stats;
pub mod task;
pub mod view;
