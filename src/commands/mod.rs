pub mod add;
pub mod clear;
pub mod delete;
pub mod done;
pub mod export;
pub mod init;
pub mod list;
pub mod priority;
pub mod stats;

use crate::{
    db::{error::TaskError, tasks::TaskStore},
    libs::{config::Config, messages::Message},
    msg_error, msg_warning,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a new task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Show tasks, pending first and ordered by priority")]
    List(list::ListArgs),
    #[command(about = "Mark a task as completed", arg_required_else_help = true)]
    Done(done::DoneArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Change the priority of a task", arg_required_else_help = true)]
    Priority(priority::PriorityArgs),
    #[command(about = "Remove all completed tasks")]
    Clear(clear::ClearArgs),
    #[command(about = "Show task statistics")]
    Stats,
    #[command(about = "Export the task list")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();

        let command = match cli.command {
            Commands::Init(args) => return init::cmd(args),
            command => command,
        };

        let config = Config::read_or_default();
        let path = match cli.file {
            Some(path) => path,
            None => config.tasks_path()?,
        };
        let mut store = TaskStore::open(path);
        if let Some(warning) = store.load_warning() {
            msg_warning!(Message::TasksLoadFailed(warning.to_string()));
        }

        match command {
            Commands::Init(_) => Ok(()),
            Commands::Add(args) => add::cmd(args, &mut store, &config),
            Commands::List(args) => list::cmd(args, &store, &config),
            Commands::Done(args) => done::cmd(args, &mut store),
            Commands::Delete(args) => delete::cmd(args, &mut store),
            Commands::Priority(args) => priority::cmd(args, &mut store),
            Commands::Clear(args) => clear::cmd(args, &mut store),
            Commands::Stats => stats::cmd(&store),
            Commands::Export(args) => export::cmd(args, &store),
        }
    }
}

/// Reports a store failure. None of them are fatal: validation errors
/// change nothing, and after a failed save the in-memory state stands.
pub(crate) fn report_store_error(error: &TaskError) {
    match error {
        TaskError::EmptyDescription => msg_error!(Message::TaskDescriptionEmpty),
        other => msg_error!(Message::TasksSaveFailed(other.to_string())),
    }
}
