//! Remote record store client.
//!
//! Stores tasks in a table of a managed datastore that exposes the PostgREST
//! dialect (the REST layer used by hosted Postgres services). The table
//! schema is:
//!
//! | column         | type                      |
//! |----------------|---------------------------|
//! | `id`           | server-assigned key       |
//! | `title`        | text                      |
//! | `category`     | text                      |
//! | `completed`    | bool                      |
//! | `created_at`   | timestamp                 |
//! | `completed_at` | nullable timestamp        |
//!
//! ## Requests
//!
//! - `GET  /rest/v1/{table}?select=*&order=created_at.asc`
//! - `POST /rest/v1/{table}` with `Prefer: return=representation`
//! - `PATCH /rest/v1/{table}?id=eq.{id}`
//! - `DELETE /rest/v1/{table}?id=eq.{id}`
//!
//! Column names differ from the in-memory field names (`completed_at` vs
//! `completedAt`); [`TaskRow`] is the wire shape and the adapter translates
//! in both directions.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dolist::api::remote::{RemoteAdapter, RemoteConfig};
//!
//! let config = RemoteConfig {
//!     api_url: "https://project.example.co".to_string(),
//!     api_key: "public-anon-key".to_string(),
//!     table: "todos".to_string(),
//! };
//! let backend = RemoteAdapter::new(&config);
//! ```

use crate::db::backend::TaskBackend;
use crate::libs::config::ConfigModule;
use crate::libs::error::PersistenceError;
use crate::libs::messages::Message;
use crate::libs::task::{Category, Task, TaskDraft, TaskId, TaskPatch};
use crate::msg_print;
use anyhow::Result;
use chrono::{DateTime, Utc};
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::env;

pub const DEFAULT_TABLE: &str = "todos";
pub const REMOTE_URL_ENV: &str = "DOLIST_REMOTE_URL";
pub const REMOTE_KEY_ENV: &str = "DOLIST_REMOTE_KEY";

/// Client for the remote task table.
///
/// Holds no task data; every call goes to the server.
#[derive(Debug, Clone)]
pub struct RemoteAdapter {
    /// HTTP client with connection pooling
    client: Client,
    config: RemoteConfig,
}

/// One row of the remote task table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub category: Category,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Insert payload. The server fills in `id`.
#[derive(Debug, Serialize)]
struct NewRow<'a> {
    title: &'a str,
    category: Category,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        // Keeps completed <=> completed_at for rows edited outside the app.
        let completed_at = if row.completed { row.completed_at.or(Some(row.created_at)) } else { None };
        Task {
            id: row.id,
            title: row.title,
            category: row.category,
            completed: row.completed,
            created_at: row.created_at,
            completed_at,
        }
    }
}

/// Translates a patch into remote column names.
///
/// Only changed fields are present; a cleared completion time is sent as an
/// explicit `null`.
pub fn patch_body(patch: &TaskPatch) -> Value {
    let mut body = Map::new();
    if let Some(title) = &patch.title {
        body.insert("title".into(), json!(title));
    }
    if let Some(category) = patch.category {
        body.insert("category".into(), json!(category.as_str()));
    }
    if let Some(completed) = patch.completed {
        body.insert("completed".into(), json!(completed));
    }
    if let Some(completed_at) = patch.completed_at {
        body.insert("completed_at".into(), json!(completed_at));
    }
    Value::Object(body)
}

impl RemoteAdapter {
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.config.api_url.trim_end_matches('/'), self.config.table)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    fn row_url(&self, id: &TaskId) -> String {
        format!("{}?id=eq.{}", self.table_url(), id)
    }

    /// Turns non-2xx responses into [`PersistenceError::Status`].
    async fn check(response: Response) -> Result<Response, PersistenceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(PersistenceError::Status { status: status.as_u16(), body })
    }

    async fn decode_rows(response: Response) -> Result<Vec<TaskRow>, PersistenceError> {
        response.json::<Vec<TaskRow>>().await.map_err(|e| PersistenceError::Decode(e.to_string()))
    }
}

impl TaskBackend for RemoteAdapter {
    async fn load_all(&self) -> Result<Vec<Task>, PersistenceError> {
        let url = format!("{}?select=*&order=created_at.asc", self.table_url());
        let response = Self::check(self.request(Method::GET, &url).send().await?).await?;
        let rows = Self::decode_rows(response).await?;
        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn insert(&self, draft: &TaskDraft) -> Result<Task, PersistenceError> {
        let body = NewRow {
            title: &draft.title,
            category: draft.category,
            completed: false,
            created_at: draft.created_at,
        };
        let response = self
            .request(Method::POST, &self.table_url())
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await?;
        let rows = Self::decode_rows(Self::check(response).await?).await?;

        rows.into_iter()
            .next()
            .map(Task::from)
            .ok_or_else(|| PersistenceError::Decode("insert returned no rows".to_string()))
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<(), PersistenceError> {
        if patch.is_empty() {
            return Ok(());
        }
        let response = self.request(Method::PATCH, &self.row_url(id)).json(&patch_body(patch)).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> Result<(), PersistenceError> {
        let response = self.request(Method::DELETE, &self.row_url(id)).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

/// Connection settings for the remote task table.
///
/// The key is the project's public API key; it is sent both as the `apikey`
/// header and as a bearer token.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RemoteConfig {
    /// Project base URL, without the `/rest/v1` suffix.
    pub api_url: String,
    pub api_key: String,
    #[serde(default = "default_table")]
    pub table: String,
}

impl RemoteConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "remote".to_string(),
            name: "Remote store".to_string(),
        }
    }

    /// Applies `DOLIST_REMOTE_URL` / `DOLIST_REMOTE_KEY` over the stored values.
    pub fn with_env(mut self) -> Self {
        if let Ok(url) = env::var(REMOTE_URL_ENV) {
            self.api_url = url;
        }
        if let Ok(key) = env::var(REMOTE_KEY_ENV) {
            self.api_key = key;
        }
        self
    }

    /// Builds a config purely from the environment, if both variables are set.
    pub fn from_env() -> Option<Self> {
        match (env::var(REMOTE_URL_ENV), env::var(REMOTE_KEY_ENV)) {
            (Ok(api_url), Ok(api_key)) => Some(Self {
                api_url,
                api_key,
                table: default_table(),
            }),
            _ => None,
        }
    }

    /// Interactive setup, pre-filled with the current values.
    pub fn init(config: &Option<RemoteConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_url: "".to_string(),
            api_key: "".to_string(),
            table: default_table(),
        });

        msg_print!(Message::ConfigModuleRemote);

        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRemoteUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            api_key: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRemoteKey.to_string())
                .default(config.api_key)
                .interact_text()?,
            table: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRemoteTable.to_string())
                .default(config.table)
                .interact_text()?,
        })
    }
}
