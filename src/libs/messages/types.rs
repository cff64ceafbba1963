/// Every user-facing message of the application.
///
/// Text lives in one place ([`super::display`]) so call sites stay typed and
/// wording can change without touching logic.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskCompleted(String),
    TaskReopened(String),
    TaskNotFound(String),
    TaskRejected(String),
    TaskCreateFailed(String),
    TaskUpdateFailed(String),
    TaskDeleteFailed(String),
    TaskSaveFailed(String),
    TasksLoadFailed(String),
    TasksHeader(String),
    NoTasks,
    EmptyTitle,
    ConfirmDeleteTask(String),
    DeleteCancelled,
    EditingTask(String),
    AlreadyEditing(String),
    EditCancelled,
    PromptTaskTitle,
    PromptTaskCategory,

    // === PREFERENCE MESSAGES ===
    DarkModeEnabled,
    DarkModeDisabled,
    PreferenceLoadFailed(String),
    PreferenceSaveFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleLocal,
    ConfigModuleRemote,
    PromptSelectModules,
    PromptBackend,
    PromptQuotaBytes,
    PromptRemoteUrl,
    PromptRemoteKey,
    PromptRemoteTable,
    RemoteNotConfigured,
    UsingBackend(String),
}
