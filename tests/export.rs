#[cfg(test)]
mod tests {
    use tasl::db::tasks::TaskStore;
    use tasl::libs::export::{ExportFormat, ExportTask, Exporter};
    use tasl::libs::task::{Category, Priority};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        store: TaskStore,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let mut store = TaskStore::open(temp_dir.path().join("tasks.json"));
            store.add("Test task", Priority::High, Category::Work).unwrap();
            store.add("Task, with comma", Priority::Low, Category::Shopping).unwrap();
            store.complete(2).unwrap();
            ExportTestContext { temp_dir, store }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("test_export.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));
        let written = exporter.export(ctx.store.tasks()).unwrap();
        assert_eq!(written, output_path);

        let mut reader = csv::Reader::from_path(&output_path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["ID", "Description", "Completed", "Priority", "Category", "Created At", "Completed At"]
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "Test task");
        assert_eq!(&rows[0][2], "false");
        assert_eq!(&rows[0][3], "High");
        assert_eq!(&rows[0][6], "");
        assert_eq!(&rows[1][1], "Task, with comma");
        assert_eq!(&rows[1][4], "Shopping");
        assert!(!rows[1][6].is_empty());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("test_export.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));
        exporter.export(ctx.store.tasks()).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let rows: Vec<ExportTask> = serde_json::from_str(&content).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].completed_at, None);
        assert!(rows[1].completed);
        assert_eq!(rows[1].category, "Shopping");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("test_export.xlsx");
        let exporter = Exporter::new(ExportFormat::Excel, Some(output_path.clone()));
        exporter.export(ctx.store.tasks()).unwrap();

        assert!(output_path.exists());
        let metadata = std::fs::metadata(&output_path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_does_not_touch_task_file(ctx: &mut ExportTestContext) {
        let before = std::fs::read_to_string(ctx.store.path()).unwrap();
        let output_path = ctx.temp_dir.path().join("copy.json");
        Exporter::new(ExportFormat::Json, Some(output_path)).export(ctx.store.tasks()).unwrap();

        assert_eq!(std::fs::read_to_string(ctx.store.path()).unwrap(), before);
    }

    #[test]
    fn test_default_output_name() {
        let exporter = Exporter::new(ExportFormat::Excel, None);
        let name = exporter.output_path().file_name().unwrap().to_string_lossy().to_string();

        assert!(name.starts_with("tasl_export_"));
        assert!(name.ends_with(".xlsx"));
    }
}
