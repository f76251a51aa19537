use super::report_store_error;
use crate::{db::tasks::TaskStore, libs::messages::Message, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    id: u32,
}

pub fn cmd(args: DeleteArgs, store: &mut TaskStore) -> Result<()> {
    match store.delete(args.id) {
        Ok(Some(task)) => msg_success!(Message::TaskDeleted(task.description)),
        Ok(None) => msg_info!(Message::TaskNotFoundWithId(args.id)),
        Err(e) => report_store_error(&e),
    }

    Ok(())
}
