//! Authoritative in-memory task list.
//!
//! [`TaskStore`] owns the tasks of one session and keeps them consistent
//! with a [`TaskBackend`]. Every user-facing operation goes through it:
//!
//! ```text
//! add / toggle / edit / remove ──▶ TaskStore ──▶ TaskBackend (awaited)
//!                                     │
//!                                     └──▶ project() ──▶ Renderer (full redraw)
//! ```
//!
//! ## Consistency rules
//!
//! - **Snapshot backends** (local storage): every change is applied to memory
//!   first and the whole list is then written as one unit. A failed write is
//!   logged and the in-memory list stays the fallback truth; the next
//!   successful write brings storage back in line.
//! - **Record backends** (remote store): a new task is *pending* until the
//!   insert resolves and is appended only on success, so no later update or
//!   delete can reference an unknown id.
//! - `toggle` and `edit` change memory first, then persist. Backend failures
//!   are logged and not rolled back.
//! - `remove` asks for confirmation. On a record backend the task leaves
//!   memory only after the backend delete succeeded.
//! - Unknown ids are silent no-ops.
//! - A failed `load` leaves an empty list.
//!
//! ## Concurrency
//!
//! The store is single-threaded. All operations take `&self`; state sits in
//! `RefCell`/`Cell` and no borrow is held across an `.await`, so operations
//! on different tasks may be in flight together on one thread (for example
//! under `tokio::join!`). Their completion order is not defined.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dolist::db::local::LocalAdapter;
//! use dolist::db::local_storage::LocalStorage;
//! use dolist::libs::data_storage::DataStorage;
//! use dolist::libs::prompt::TerminalPrompt;
//! use dolist::libs::store::TaskStore;
//! use dolist::libs::task::Category;
//!
//! # async fn run() {
//! let storage = LocalStorage::open(&DataStorage::new());
//! let store = TaskStore::new(LocalAdapter::new(storage), TerminalPrompt::default());
//! store.load().await;
//! store.add("Prepare meeting notes", Category::Work).await.ok();
//! println!("{}", store.view().progress);
//! # }
//! ```

use super::messages::Message;
use super::projector::{project, TaskView};
use super::prompt::{Renderer, UserPrompt};
use super::error::{PersistenceError, ValidationError};
use super::task::{validate_title, Category, Filter, Task, TaskDraft, TaskId, TaskPatch};
use crate::db::backend::TaskBackend;
use crate::{msg_debug, msg_error};
use chrono::Utc;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;

pub struct TaskStore<B: TaskBackend> {
    backend: B,
    prompt: Box<dyn UserPrompt>,
    renderer: Option<Box<dyn Renderer>>,
    tasks: RefCell<Vec<Task>>,
    filter: Cell<Filter>,
    editing: RefCell<HashSet<TaskId>>,
    pending: Cell<usize>,
}

impl<B: TaskBackend> TaskStore<B> {
    pub fn new(backend: B, prompt: impl UserPrompt + 'static) -> Self {
        Self {
            backend,
            prompt: Box::new(prompt),
            renderer: None,
            tasks: RefCell::new(Vec::new()),
            filter: Cell::new(Filter::All),
            editing: RefCell::new(HashSet::new()),
            pending: Cell::new(0),
        }
    }

    /// Redraws through `renderer` after every change.
    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Replaces the in-memory list with the backend's contents.
    pub async fn load(&self) {
        match self.backend.load_all().await {
            Ok(tasks) => {
                msg_debug!(format!("Loaded {} task(s)", tasks.len()));
                *self.tasks.borrow_mut() = tasks;
            }
            Err(e) => {
                msg_error!(Message::TasksLoadFailed(e.to_string()));
                self.tasks.borrow_mut().clear();
            }
        }
        self.editing.borrow_mut().clear();
        self.render();
    }

    /// Adds a task.
    ///
    /// Returns the new id, or `Ok(None)` when the backend rejected a task
    /// whose id it was supposed to assign.
    pub async fn add(&self, title: &str, category: Category) -> Result<Option<TaskId>, ValidationError> {
        let title = self.validated(title)?;
        let draft = TaskDraft::new(title, category, self.backend.assign_id());

        if let Some(id) = draft.id.clone() {
            self.tasks.borrow_mut().push(draft.clone().into_task(id.clone()));
            let saved = if self.backend.is_snapshot() {
                self.save_snapshot().await
            } else {
                self.backend.insert(&draft).await.map(|_| ())
            };
            if let Err(e) = saved {
                msg_error!(Message::TaskSaveFailed(e.to_string()));
            }
            self.render();
            return Ok(Some(id));
        }

        let inserted = {
            let _pending = PendingGuard::enter(&self.pending);
            self.backend.insert(&draft).await
        };

        let id = match inserted {
            Ok(task) => {
                let id = task.id.clone();
                self.tasks.borrow_mut().push(task);
                Some(id)
            }
            Err(e) => {
                msg_error!(Message::TaskCreateFailed(e.to_string()));
                None
            }
        };
        self.render();
        Ok(id)
    }

    /// Flips completion. Returns the new state, or `None` for an unknown id.
    pub async fn toggle(&self, id: &TaskId) -> Option<bool> {
        let (patch, completed) = {
            let mut tasks = self.tasks.borrow_mut();
            let task = tasks.iter_mut().find(|t| &t.id == id)?;
            let patch = task.toggle(Utc::now());
            (patch, task.completed)
        };

        if let Err(e) = self.persist_patch(id, &patch).await {
            msg_error!(Message::TaskUpdateFailed(e.to_string()));
        }
        self.render();
        Some(completed)
    }

    /// Opens an edit session and returns the task to pre-fill the form.
    ///
    /// `None` when the id is unknown or the task is already being edited.
    pub fn begin_edit(&self, id: &TaskId) -> Option<Task> {
        let task = self.get(id)?;
        if !self.editing.borrow_mut().insert(id.clone()) {
            return None;
        }
        self.render();
        Some(task)
    }

    /// Closes an edit session without changes.
    pub fn cancel_edit(&self, id: &TaskId) -> bool {
        let closed = self.editing.borrow_mut().remove(id);
        if closed {
            self.render();
        }
        closed
    }

    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.editing.borrow().contains(id)
    }

    /// Replaces title and category.
    ///
    /// An empty title returns the validation error and leaves any open edit
    /// session open so the caller can retry. Returns `Ok(false)` for an
    /// unknown id.
    pub async fn edit(&self, id: &TaskId, title: &str, category: Category) -> Result<bool, ValidationError> {
        if self.get(id).is_none() {
            self.editing.borrow_mut().remove(id);
            return Ok(false);
        }
        let title = self.validated(title)?;

        let patch = {
            let mut tasks = self.tasks.borrow_mut();
            match tasks.iter_mut().find(|t| &t.id == id) {
                Some(task) => task.edit(title, category),
                None => return Ok(false),
            }
        };
        self.editing.borrow_mut().remove(id);

        if !patch.is_empty() {
            if let Err(e) = self.persist_patch(id, &patch).await {
                msg_error!(Message::TaskUpdateFailed(e.to_string()));
            }
        }
        self.render();
        Ok(true)
    }

    /// Deletes a task after the user confirms.
    ///
    /// Returns `true` when the task left the in-memory list. On a snapshot
    /// backend that happens even if the write fails; on a record backend
    /// only after the backend delete succeeded.
    pub async fn remove(&self, id: &TaskId) -> bool {
        let Some(task) = self.get(id) else {
            return false;
        };
        if !self.prompt.confirm(&Message::ConfirmDeleteTask(task.title).to_string()) {
            return false;
        }

        if self.backend.is_snapshot() {
            let removed = self.forget(id);
            if let Err(e) = self.save_snapshot().await {
                msg_error!(Message::TaskDeleteFailed(e.to_string()));
            }
            self.render();
            return removed;
        }

        if let Err(e) = self.backend.delete(id).await {
            msg_error!(Message::TaskDeleteFailed(e.to_string()));
            return false;
        }
        let removed = self.forget(id);
        self.render();
        removed
    }

    pub fn set_filter(&self, filter: Filter) {
        self.filter.set(filter);
        self.render();
    }

    pub fn filter(&self) -> Filter {
        self.filter.get()
    }

    /// Snapshot of all tasks in stored order.
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    pub fn get(&self, id: &TaskId) -> Option<Task> {
        self.tasks.borrow().iter().find(|t| &t.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    /// Number of inserts still waiting for a server-assigned id.
    pub fn pending(&self) -> usize {
        self.pending.get()
    }

    /// Current projection under the active filter.
    pub fn view(&self) -> TaskView {
        project(&self.tasks.borrow(), self.filter.get(), &self.editing.borrow())
    }

    fn forget(&self, id: &TaskId) -> bool {
        self.editing.borrow_mut().remove(id);
        let mut tasks = self.tasks.borrow_mut();
        let before = tasks.len();
        tasks.retain(|t| &t.id != id);
        tasks.len() != before
    }

    /// Writes the whole in-memory list. The borrow ends before the await.
    async fn save_snapshot(&self) -> Result<(), PersistenceError> {
        let tasks = self.tasks.borrow().clone();
        self.backend.save_all(&tasks).await
    }

    async fn persist_patch(&self, id: &TaskId, patch: &TaskPatch) -> Result<(), PersistenceError> {
        if self.backend.is_snapshot() {
            self.save_snapshot().await
        } else {
            self.backend.update(id, patch).await
        }
    }

    fn validated(&self, title: &str) -> Result<String, ValidationError> {
        validate_title(title).inspect_err(|_| self.prompt.notify(&Message::EmptyTitle.to_string()))
    }

    /// Hands the current projection to the renderer, if one is attached.
    pub fn render(&self) {
        if let Some(renderer) = &self.renderer {
            renderer.render(&self.view());
        }
    }
}

/// Counts an in-flight insert until it resolves or its future is dropped.
struct PendingGuard<'a>(&'a Cell<usize>);

impl<'a> PendingGuard<'a> {
    fn enter(counter: &'a Cell<usize>) -> Self {
        counter.set(counter.get() + 1);
        Self(counter)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}
