//! Display implementation for application messages.
//!
//! The single place where message text is written. Messages with
//! parameters interpolate them here, so callers only pick a variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' added.", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated.", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted.", title),
            Message::TaskCompleted(title) => format!("Task '{}' completed.", title),
            Message::TaskReopened(title) => format!("Task '{}' marked as not done.", title),
            Message::TaskNotFound(id) => format!("Task with ID {} not found.", id),
            Message::TaskRejected(title) => format!("Task '{}' was not added: the store rejected it.", title),
            Message::TaskCreateFailed(error) => format!("Failed to create task: {}", error),
            Message::TaskUpdateFailed(error) => format!("Failed to update task: {}", error),
            Message::TaskDeleteFailed(error) => format!("Failed to delete task: {}", error),
            Message::TaskSaveFailed(error) => format!("Task list could not be saved: {}", error),
            Message::TasksLoadFailed(error) => format!("Failed to load tasks, starting with an empty list: {}", error),
            Message::TasksHeader(filter) => format!("Tasks ({}):", filter),
            Message::NoTasks => "No tasks. (할 일이 없습니다.)".to_string(),
            Message::EmptyTitle => "Please enter a task!".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Are you sure you want to delete '{}'?", title),
            Message::DeleteCancelled => "Deletion cancelled.".to_string(),
            Message::EditingTask(title) => format!("Editing task: {}", title),
            Message::AlreadyEditing(title) => format!("Task '{}' is already being edited.", title),
            Message::EditCancelled => "Editing cancelled.".to_string(),
            Message::PromptTaskTitle => "Task".to_string(),
            Message::PromptTaskCategory => "Category".to_string(),

            // === PREFERENCE MESSAGES ===
            Message::DarkModeEnabled => "☀️  Dark mode on".to_string(),
            Message::DarkModeDisabled => "🌙 Dark mode off".to_string(),
            Message::PreferenceLoadFailed(error) => format!("Failed to load dark mode setting: {}", error),
            Message::PreferenceSaveFailed(error) => format!("Failed to save dark mode setting: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleLocal => "Local storage settings".to_string(),
            Message::ConfigModuleRemote => "Remote store settings".to_string(),
            Message::PromptSelectModules => "Select nodes to configure".to_string(),
            Message::PromptBackend => "Where should tasks be stored?".to_string(),
            Message::PromptQuotaBytes => "Storage quota in bytes (0 for unlimited)".to_string(),
            Message::PromptRemoteUrl => "Enter the remote store URL".to_string(),
            Message::PromptRemoteKey => "Enter the remote store API key".to_string(),
            Message::PromptRemoteTable => "Enter the table name".to_string(),
            Message::RemoteNotConfigured => "Remote backend selected but not configured. Run `dolist init`.".to_string(),
            Message::UsingBackend(name) => format!("Using {} backend", name),
        };
        write!(f, "{}", text)
    }
}
