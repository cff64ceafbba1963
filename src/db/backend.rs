//! Persistence contract shared by every task backend.
//!
//! A backend is a stateless gateway: it keeps no copy of the task list and
//! only moves records between the [`TaskStore`] and the underlying storage.
//! Implementations exist for local key-value storage ([`LocalAdapter`]) and
//! for a remote record store ([`RemoteAdapter`]). The concrete backend is
//! chosen when the store is constructed.
//!
//! Failures are returned as [`PersistenceError`] values; a backend never
//! panics on I/O or network errors. Interpreting a failure (keep, drop, log)
//! is the store's job.
//!
//! [`TaskStore`]: crate::libs::store::TaskStore
//! [`LocalAdapter`]: crate::db::local::LocalAdapter
//! [`RemoteAdapter`]: crate::api::remote::RemoteAdapter

use crate::libs::error::PersistenceError;
use crate::libs::task::{Task, TaskDraft, TaskId, TaskPatch};

#[allow(async_fn_in_trait)]
pub trait TaskBackend {
    /// Id policy of the backend.
    ///
    /// `Some` when ids are generated on the client before the write
    /// happens; `None` when the storage assigns the id on insert.
    fn assign_id(&self) -> Option<TaskId> {
        None
    }

    /// Whether the backend stores the whole list as one unit.
    ///
    /// Snapshot backends are written through [`save_all`](Self::save_all)
    /// with the store's complete list after every change. Record stores
    /// receive the per-record calls instead.
    fn is_snapshot(&self) -> bool {
        false
    }

    /// Replaces the stored list with `tasks`. Only called on snapshot backends.
    async fn save_all(&self, _tasks: &[Task]) -> Result<(), PersistenceError> {
        Ok(())
    }

    /// Fetches every task in stable creation order.
    async fn load_all(&self) -> Result<Vec<Task>, PersistenceError>;

    /// Stores a new task and returns it with its final id.
    async fn insert(&self, draft: &TaskDraft) -> Result<Task, PersistenceError>;

    /// Writes the changed fields of one task.
    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<(), PersistenceError>;

    /// Removes one task.
    async fn delete(&self, id: &TaskId) -> Result<(), PersistenceError>;
}
