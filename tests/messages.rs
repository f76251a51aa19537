#[cfg(test)]
mod tests {
    use tasl::libs::messages::Message;

    #[test]
    fn test_task_messages() {
        assert_eq!(Message::TaskAdded("Buy milk".to_string()).to_string(), "Added task: 'Buy milk'");
        assert_eq!(Message::TasksCleared(2).to_string(), "Cleared 2 completed task(s)");
        assert_eq!(Message::TaskNotFoundWithId(7).to_string(), "Task with ID 7 not found");
        assert_eq!(
            Message::TaskPriorityUpdated("Refactor".to_string(), "High".to_string()).to_string(),
            "Updated priority for 'Refactor' to High"
        );
    }

    #[test]
    fn test_stats_progress_message() {
        assert_eq!(Message::StatsProgress("40.0%".to_string()).to_string(), "Progress: 40.0%");
    }
}
