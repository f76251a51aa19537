use crate::{
    db::tasks::TaskStore,
    libs::{messages::Message, view::View},
    msg_print,
};
use anyhow::Result;

pub fn cmd(store: &TaskStore) -> Result<()> {
    msg_print!(Message::StatsHeader, true);
    View::stats(&store.stats())?;
    Ok(())
}
