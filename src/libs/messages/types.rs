#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),                      // description
    TaskCompleted(String),                  // description
    TaskDeleted(String),                    // description
    TaskPriorityUpdated(String, String),    // description, priority
    TaskNotFoundWithId(u32),
    TaskAlreadyCompleted(u32),
    TaskDescriptionEmpty,
    TasksCleared(usize),
    NoCompletedTasksToClear,
    ConfirmClearCompleted(usize),
    TasksHeader,
    NoTasksMatchFilters,

    // === STATISTICS MESSAGES ===
    StatsHeader,
    StatsTotal,
    StatsCompleted,
    StatsPending,
    StatsPendingByPriority,
    StatsPendingByCategory,
    StatsProgress(String), // formatted percentage

    // === STORAGE MESSAGES ===
    TasksLoadFailed(String), // error
    TasksSaveFailed(String), // error

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    NothingToExport,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigLoadFailed(String), // error
    ConfigDeleted,
    ConfigNotFound,
    ConfigWizardHeader,

    // === PROMPTS ===
    PromptDataFile,
    PromptDefaultPriority,
    PromptDefaultCategory,
    PromptShowCompleted,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
