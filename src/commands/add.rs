use super::report_store_error;
use crate::{
    db::tasks::TaskStore,
    libs::{
        config::Config,
        messages::Message,
        task::{Category, Priority},
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    description: Vec<String>,

    /// Task priority (defaults to the configured priority)
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,

    /// Task category (defaults to the configured category)
    #[arg(short, long, value_enum)]
    category: Option<Category>,
}

pub fn cmd(args: AddArgs, store: &mut TaskStore, config: &Config) -> Result<()> {
    let description = args.description.join(" ");
    let priority = args.priority.unwrap_or(config.default_priority);
    let category = args.category.unwrap_or(config.default_category);

    match store.add(&description, priority, category) {
        Ok(task) => msg_success!(Message::TaskAdded(task.description)),
        Err(e) => report_store_error(&e),
    }

    Ok(())
}
