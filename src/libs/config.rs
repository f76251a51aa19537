//! Configuration management for the tasl application.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! (see [`DataStorage`]). Every field has a default, so a missing file or a
//! file written by an older version loads without errors.
//!
//! ## Settings
//!
//! - **data_file**: Overrides the location of the task file
//! - **default_priority** / **default_category**: Used by `tasl add` when no
//!   flag is given
//! - **show_completed**: Whether `tasl list` includes completed tasks by default
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use tasl::libs::config::Config;
//!
//! // Load existing configuration or defaults
//! let config = Config::read()?;
//!
//! // Run the interactive setup and persist the result
//! Config::init()?.save()?;
//!
//! let tasks_path = config.tasks_path()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::file::TASKS_FILE_NAME;
use crate::libs::messages::Message;
use crate::libs::task::{Category, Priority};
use crate::{msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Custom location of the task file. `None` keeps it next to the config.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Priority assigned by `tasl add` when `--priority` is omitted.
    pub default_priority: Priority,

    /// Category assigned by `tasl add` when `--category` is omitted.
    pub default_category: Category,

    /// Whether completed tasks are listed unless `--hide-completed` is passed.
    pub show_completed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: None,
            default_priority: Priority::default(),
            default_category: Category::default(),
            show_completed: true,
        }
    }
}

impl Config {
    /// Reads the configuration from the data directory, falling back to
    /// defaults when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Reads the configuration, warning and falling back to defaults when
    /// the file cannot be read or parsed.
    pub fn read_or_default() -> Config {
        match DataStorage::new().get_path(CONFIG_FILE_NAME) {
            Ok(path) => Self::read_from_or_default(&path),
            Err(e) => {
                msg_warning!(Message::ConfigLoadFailed(e.to_string()));
                Config::default()
            }
        }
    }

    pub fn read_from_or_default(path: &Path) -> Config {
        match Self::read_from(path) {
            Ok(config) => config,
            Err(e) => {
                msg_warning!(Message::ConfigLoadFailed(format!("{}: {}", path.display(), e)));
                Config::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Resolves the task file: the configured path, or `tasks.json` in the
    /// data directory.
    pub fn tasks_path(&self) -> Result<PathBuf> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => Ok(DataStorage::new().get_path(TASKS_FILE_NAME)?),
        }
    }

    /// Runs the interactive setup wizard, starting from the current values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigWizardHeader, true);

        let default_path = current
            .data_file
            .clone()
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        let data_file: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDataFile.to_string())
            .default(default_path)
            .allow_empty(true)
            .interact_text()?;

        let default_priority = Select::with_theme(&theme)
            .with_prompt(Message::PromptDefaultPriority.to_string())
            .items(&Priority::ALL)
            .default(position(&Priority::ALL, &current.default_priority))
            .interact()?;

        let default_category = Select::with_theme(&theme)
            .with_prompt(Message::PromptDefaultCategory.to_string())
            .items(&Category::ALL)
            .default(position(&Category::ALL, &current.default_category))
            .interact()?;

        let show_completed = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptShowCompleted.to_string())
            .default(current.show_completed)
            .interact()?;

        let data_file = data_file.trim();
        Ok(Config {
            data_file: if data_file.is_empty() { None } else { Some(PathBuf::from(data_file)) },
            default_priority: Priority::ALL[default_priority],
            default_category: Category::ALL[default_category],
            show_completed,
        })
    }
}

fn position<T: PartialEq>(items: &[T], item: &T) -> usize {
    items.iter().position(|candidate| candidate == item).unwrap_or(0)
}
