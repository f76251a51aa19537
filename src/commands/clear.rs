use super::report_store_error;
use crate::{db::tasks::TaskStore, libs::messages::Message, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: ClearArgs, store: &mut TaskStore) -> Result<()> {
    let completed = store.stats().completed;
    if completed == 0 {
        msg_info!(Message::NoCompletedTasksToClear);
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmClearCompleted(completed).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    match store.clear_completed() {
        Ok(0) => msg_info!(Message::NoCompletedTasksToClear),
        Ok(removed) => msg_success!(Message::TasksCleared(removed)),
        Err(e) => report_store_error(&e),
    }

    Ok(())
}
