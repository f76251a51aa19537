//! # Tasl - Task list
//!
//! A command-line personal task-list manager.
//!
//! ## Features
//!
//! - **Task Management**: Add, complete, delete and re-prioritize tasks
//! - **Organization**: Priorities (High, Medium, Low) and categories
//! - **Filtered View**: Pending tasks first, ordered by priority
//! - **Statistics**: Pending counts by priority and category, progress
//! - **Data Export**: Export the task list to CSV, JSON and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasl::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
