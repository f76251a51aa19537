//! Data export command.
//!
//! Writes the current task list to CSV, JSON or Excel. The export is a
//! derived view of the task file and is never read back by tasl.

use crate::{
    db::tasks::TaskStore,
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    ///
    /// Defaults to `tasl_export_<YYYYmmdd_HHMMSS>.<ext>` in the current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs, store: &TaskStore) -> Result<()> {
    if store.is_empty() {
        msg_info!(Message::NothingToExport);
        return Ok(());
    }

    let path = Exporter::new(args.format, args.output).export(store.tasks())?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
