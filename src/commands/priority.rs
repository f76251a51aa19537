use super::report_store_error;
use crate::{
    db::tasks::TaskStore,
    libs::{messages::Message, task::Priority},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PriorityArgs {
    /// ID of the task to update
    id: u32,

    /// New priority
    #[arg(value_enum)]
    priority: Priority,
}

pub fn cmd(args: PriorityArgs, store: &mut TaskStore) -> Result<()> {
    match store.update_priority(args.id, args.priority) {
        Ok(Some(task)) => msg_success!(Message::TaskPriorityUpdated(task.description, task.priority.to_string())),
        Ok(None) => msg_info!(Message::TaskNotFoundWithId(args.id)),
        Err(e) => report_store_error(&e),
    }

    Ok(())
}
