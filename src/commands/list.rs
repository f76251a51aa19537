use crate::{
    db::tasks::TaskStore,
    libs::{
        config::Config,
        messages::Message,
        task::{Category, Priority, TaskFilter},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Hide completed tasks
    #[arg(long, conflicts_with = "show_completed")]
    hide_completed: bool,

    /// Include completed tasks even if the configuration hides them
    #[arg(long)]
    show_completed: bool,

    /// Only show these priorities (repeatable; all when omitted)
    #[arg(short, long, value_enum)]
    priority: Vec<Priority>,

    /// Only show these categories (repeatable; all when omitted)
    #[arg(short, long, value_enum)]
    category: Vec<Category>,
}

impl ListArgs {
    fn filter(&self, config: &Config) -> TaskFilter {
        let show_completed = if self.hide_completed {
            false
        } else {
            self.show_completed || config.show_completed
        };

        TaskFilter {
            show_completed,
            priorities: if self.priority.is_empty() { Priority::ALL.to_vec() } else { self.priority.clone() },
            categories: if self.category.is_empty() { Category::ALL.to_vec() } else { self.category.clone() },
        }
    }
}

pub fn cmd(args: ListArgs, store: &TaskStore, config: &Config) -> Result<()> {
    let tasks = store.filtered_sorted(&args.filter(config));

    if tasks.is_empty() {
        msg_info!(Message::NoTasksMatchFilters);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        list: ListArgs,
    }

    fn filter(args: &[&str], config: &Config) -> TaskFilter {
        let mut argv = vec!["list"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().list.filter(config)
    }

    #[test]
    fn test_no_flags_shows_everything() {
        assert_eq!(filter(&[], &Config::default()), TaskFilter::default());
    }

    #[test]
    fn test_repeated_flags() {
        let filter = filter(&["-p", "high", "-p", "medium", "-c", "work", "--hide-completed"], &Config::default());
        assert!(!filter.show_completed);
        assert_eq!(filter.priorities, vec![Priority::High, Priority::Medium]);
        assert_eq!(filter.categories, vec![Category::Work]);
    }

    #[test]
    fn test_configured_hide_can_be_overridden() {
        let config = Config {
            show_completed: false,
            ..Config::default()
        };
        assert!(!filter(&[], &config).show_completed);
        assert!(filter(&["--show-completed"], &config).show_completed);
    }
}
