#[cfg(test)]
mod tests {
    use tasl::db::error::TaskError;
    use tasl::db::tasks::TaskStore;
    use tasl::libs::task::{Category, Priority};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        _temp_dir: TempDir,
        store: TaskStore,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = TaskStore::open(temp_dir.path().join("tasks.json"));
            StoreTestContext {
                _temp_dir: temp_dir,
                store,
            }
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_task(ctx: &mut StoreTestContext) {
        let task = ctx.store.add("Write report", Priority::High, Category::Work).unwrap();

        assert_eq!(task.id, 1);
        assert_eq!(task.description, "Write report");
        assert!(!task.completed);
        assert_eq!(task.completed_at, None);
        assert_eq!(ctx.store.len(), 1);
        assert_eq!(ctx.store.get(1), Some(&task));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_blank_description_is_rejected(ctx: &mut StoreTestContext) {
        ctx.store.add("Existing", Priority::Medium, Category::Personal).unwrap();

        for blank in ["", "   ", "\t\n"] {
            let err = ctx.store.add(blank, Priority::High, Category::Work).unwrap_err();
            assert!(matches!(err, TaskError::EmptyDescription));
            assert!(err.is_validation());
        }
        assert_eq!(ctx.store.len(), 1);

        // Nothing was persisted either
        let reopened = TaskStore::open(ctx.store.path());
        assert_eq!(reopened.len(), 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_ids_are_not_reused_after_delete(ctx: &mut StoreTestContext) {
        let first = ctx.store.add("Task 1", Priority::Medium, Category::Personal).unwrap();
        let second = ctx.store.add("Task 2", Priority::Medium, Category::Personal).unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        ctx.store.delete(first.id).unwrap();
        let third = ctx.store.add("Task 3", Priority::Medium, Category::Personal).unwrap();
        assert_eq!(third.id, 3);

        let ids: Vec<u32> = ctx.store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_complete_task(ctx: &mut StoreTestContext) {
        let task = ctx.store.add("Go running", Priority::Low, Category::Health).unwrap();

        let completed = ctx.store.complete(task.id).unwrap().unwrap();
        assert!(completed.completed);
        assert!(completed.completed_at.is_some());

        // Second call is a no-op and keeps the original stamp
        assert_eq!(ctx.store.complete(task.id).unwrap(), None);
        let stored = ctx.store.get(task.id).unwrap();
        assert!(stored.completed);
        assert_eq!(stored.completed_at, completed.completed_at);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_complete_missing_id_is_noop(ctx: &mut StoreTestContext) {
        ctx.store.add("Only task", Priority::Medium, Category::Personal).unwrap();

        assert_eq!(ctx.store.complete(42).unwrap(), None);
        assert!(ctx.store.tasks().iter().all(|t| !t.completed));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_task(ctx: &mut StoreTestContext) {
        let task = ctx.store.add("Temporary", Priority::Medium, Category::Other).unwrap();

        let deleted = ctx.store.delete(task.id).unwrap();
        assert_eq!(deleted, Some(task));
        assert!(ctx.store.is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_missing_id_is_noop(ctx: &mut StoreTestContext) {
        ctx.store.add("Task 1", Priority::Medium, Category::Personal).unwrap();
        ctx.store.add("Task 2", Priority::Medium, Category::Personal).unwrap();

        assert_eq!(ctx.store.delete(99).unwrap(), None);
        assert_eq!(ctx.store.len(), 2);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_priority(ctx: &mut StoreTestContext) {
        let task = ctx.store.add("Refactor", Priority::Low, Category::Work).unwrap();

        let updated = ctx.store.update_priority(task.id, Priority::High).unwrap().unwrap();
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(ctx.store.get(task.id).unwrap().priority, Priority::High);

        assert_eq!(ctx.store.update_priority(99, Priority::Low).unwrap(), None);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_clear_completed(ctx: &mut StoreTestContext) {
        for i in 1..=5 {
            ctx.store.add(&format!("Task {}", i), Priority::Medium, Category::Personal).unwrap();
        }
        ctx.store.complete(2).unwrap();
        ctx.store.complete(4).unwrap();

        let cleared = ctx.store.clear_completed().unwrap();
        assert_eq!(cleared, 2);
        assert_eq!(ctx.store.len(), 3);
        assert!(ctx.store.tasks().iter().all(|t| !t.completed));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_clear_completed_without_completed_tasks(ctx: &mut StoreTestContext) {
        ctx.store.add("Pending", Priority::Medium, Category::Personal).unwrap();

        assert_eq!(ctx.store.clear_completed().unwrap(), 0);
        assert_eq!(ctx.store.len(), 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_mutations_are_persisted(ctx: &mut StoreTestContext) {
        let keep = ctx.store.add("Keep", Priority::Low, Category::Learning).unwrap();
        let drop = ctx.store.add("Drop", Priority::Medium, Category::Shopping).unwrap();
        ctx.store.complete(keep.id).unwrap();
        ctx.store.update_priority(keep.id, Priority::High).unwrap();
        ctx.store.delete(drop.id).unwrap();

        let reopened = TaskStore::open(ctx.store.path());
        assert_eq!(reopened.tasks(), ctx.store.tasks());
        let stored = reopened.get(keep.id).unwrap();
        assert!(stored.completed);
        assert_eq!(stored.priority, Priority::High);
    }
}
