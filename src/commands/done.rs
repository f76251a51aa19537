use super::report_store_error;
use crate::{db::tasks::TaskStore, libs::messages::Message, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// ID of the task to complete
    id: u32,
}

pub fn cmd(args: DoneArgs, store: &mut TaskStore) -> Result<()> {
    match store.complete(args.id) {
        Ok(Some(task)) => msg_success!(Message::TaskCompleted(task.description)),
        Ok(None) => match store.get(args.id) {
            Some(_) => msg_info!(Message::TaskAlreadyCompleted(args.id)),
            None => msg_info!(Message::TaskNotFoundWithId(args.id)),
        },
        Err(e) => report_store_error(&e),
    }

    Ok(())
}
