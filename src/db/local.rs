use super::backend::TaskBackend;
use super::local_storage::LocalStorage;
use crate::libs::error::PersistenceError;
use crate::libs::task::{Task, TaskDraft, TaskId, TaskPatch};

/// Storage key holding the serialized task list.
pub const STORAGE_KEY: &str = "todoList";

/// Task backend over [`LocalStorage`].
///
/// The whole list lives under [`STORAGE_KEY`] as one JSON array. The store
/// writes its complete in-memory list through `save_all` after every change,
/// so a corrupt or stale blob is replaced by the next successful write. Ids
/// are generated on the client, so a new task is shown before it is saved.
#[derive(Debug, Clone)]
pub struct LocalAdapter {
    storage: LocalStorage,
}

impl LocalAdapter {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    fn read(&self) -> Result<Vec<Task>, PersistenceError> {
        match self.storage.get_item(STORAGE_KEY)? {
            Some(data) if !data.trim().is_empty() => serde_json::from_str(&data).map_err(|e| PersistenceError::Corrupt {
                key: STORAGE_KEY.to_string(),
                reason: e.to_string(),
            }),
            _ => Ok(Vec::new()),
        }
    }

    fn write(&self, tasks: &[Task]) -> Result<(), PersistenceError> {
        let data = serde_json::to_string(tasks)?;
        self.storage.set_item(STORAGE_KEY, &data)
    }
}

impl TaskBackend for LocalAdapter {
    fn assign_id(&self) -> Option<TaskId> {
        Some(TaskId::generate())
    }

    fn is_snapshot(&self) -> bool {
        true
    }

    async fn save_all(&self, tasks: &[Task]) -> Result<(), PersistenceError> {
        self.write(tasks)
    }

    async fn load_all(&self) -> Result<Vec<Task>, PersistenceError> {
        self.read()
    }

    async fn insert(&self, draft: &TaskDraft) -> Result<Task, PersistenceError> {
        let id = draft.id.clone().unwrap_or_else(TaskId::generate);
        let task = draft.clone().into_task(id);

        let mut tasks = self.read()?;
        tasks.push(task.clone());
        self.write(&tasks)?;
        Ok(task)
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<(), PersistenceError> {
        let mut tasks = self.read()?;
        if let Some(task) = tasks.iter_mut().find(|t| &t.id == id) {
            task.apply(patch);
            self.write(&tasks)?;
        }
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> Result<(), PersistenceError> {
        let mut tasks = self.read()?;
        let before = tasks.len();
        tasks.retain(|t| &t.id != id);
        if tasks.len() != before {
            self.write(&tasks)?;
        }
        Ok(())
    }
}
