//! Tabular export of the task list.
//!
//! The export is derived on demand from the in-memory collection and is
//! never read back. Each row is one task and the columns are every task
//! field, in insertion order of the collection.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasl::db::tasks::TaskStore;
//! use tasl::libs::export::{ExportFormat, Exporter};
//!
//! let store = TaskStore::open("tasks.json");
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(store.tasks())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::{formatter::format_timestamp, task::Task};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column headers shared by the CSV and Excel exports.
pub const EXPORT_HEADERS: [&str; 7] = ["ID", "Description", "Completed", "Priority", "Category", "Created At", "Completed At"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheets and scripts.
    Csv,
    /// Pretty-printed JSON array.
    Json,
    /// Excel workbook with a bold header row.
    Excel,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// One exported row, with enums and timestamps rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTask {
    pub id: u32,
    pub description: String,
    pub completed: bool,
    pub priority: String,
    pub category: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        ExportTask {
            id: task.id,
            description: task.description.clone(),
            completed: task.completed,
            priority: task.priority.to_string(),
            category: task.category.to_string(),
            created_at: format_timestamp(&task.created_at),
            completed_at: task.completed_at.as_ref().map(format_timestamp),
        }
    }
}

impl ExportTask {
    fn record(&self) -> [String; 7] {
        [
            self.id.to_string(),
            self.description.clone(),
            self.completed.to_string(),
            self.priority.clone(),
            self.category.clone(),
            self.created_at.clone(),
            self.completed_at.clone().unwrap_or_default(),
        ]
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to
    /// `tasl_export_<timestamp>.<ext>` in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "tasl_export_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `tasks` in the configured format and returns the file path.
    pub fn export(&self, tasks: &[Task]) -> Result<PathBuf> {
        let rows: Vec<ExportTask> = tasks.iter().map(ExportTask::from).collect();

        match self.format {
            ExportFormat::Csv => self.export_csv(&rows)?,
            ExportFormat::Json => self.export_json(&rows)?,
            ExportFormat::Excel => self.export_excel(&rows)?,
        }

        Ok(self.output_path.clone())
    }

    fn export_csv(&self, rows: &[ExportTask]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(EXPORT_HEADERS)?;
        for row in rows {
            wtr.write_record(row.record())?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, rows: &[ExportTask]) -> Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, rows: &[ExportTask]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        for (col, header) in EXPORT_HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let line = i as u32 + 1;
            worksheet.write_number(line, 0, row.id as f64)?;
            worksheet.write_string(line, 1, &row.description)?;
            worksheet.write_boolean(line, 2, row.completed)?;
            worksheet.write_string(line, 3, &row.priority)?;
            worksheet.write_string(line, 4, &row.category)?;
            worksheet.write_string(line, 5, &row.created_at)?;
            worksheet.write_string(line, 6, row.completed_at.as_deref().unwrap_or(""))?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
