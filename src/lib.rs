//! # Dolist
//!
//! A single-user to-do list manager: tasks with a title and a category,
//! completion tracking, category filters, a progress indicator and a
//! persistent dark mode preference.
//!
//! ## Features
//!
//! - **Task Store**: one in-memory source of truth for every render
//! - **Pluggable Persistence**: local key-value storage or a remote record store
//! - **View Projection**: pure filtering and progress calculation
//! - **Preferences**: dark mode stored independently of tasks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dolist::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
