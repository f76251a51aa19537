use super::formatter::{format_optional_timestamp, format_percent, format_progress_bar, format_timestamp};
use super::messages::Message;
use super::stats::TaskStats;
use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

const PROGRESS_BAR_WIDTH: usize = 30;

pub struct View {}

impl View {
    pub fn tasks(tasks: &[&Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "STATUS", "TASK", "PRIORITY", "CATEGORY", "CREATED", "COMPLETED"]);
        for task in tasks {
            let status = if task.completed { "✅" } else { "⭕" };
            table.add_row(row![
                task.id,
                status,
                task.description,
                format!("{} {}", task.priority.icon(), task.priority),
                format!("📁 {}", task.category),
                format_timestamp(&task.created_at),
                format_optional_timestamp(task.completed_at.as_ref())
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn stats(stats: &TaskStats) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row![Message::StatsTotal, stats.total]);
        table.add_row(row![Message::StatsCompleted, stats.completed]);
        table.add_row(row![Message::StatsPending, stats.pending]);
        table.printstd();

        if stats.pending > 0 {
            println!("\n{}", Message::StatsPendingByPriority);
            let mut table = Table::new();
            for (priority, count) in stats.priority_counts.iter().filter(|(_, count)| **count > 0) {
                table.add_row(row![format!("{} {}", priority.icon(), priority), count]);
            }
            table.printstd();

            if !stats.category_counts.is_empty() {
                println!("\n{}", Message::StatsPendingByCategory);
                let mut table = Table::new();
                for (category, count) in &stats.category_counts {
                    table.add_row(row![format!("📁 {}", category), count]);
                }
                table.printstd();
            }
        }

        if stats.total > 0 {
            println!(
                "\n{} {}",
                format_progress_bar(stats.progress(), PROGRESS_BAR_WIDTH),
                Message::StatsProgress(format_percent(stats.progress()))
            );
        }

        Ok(())
    }
}
