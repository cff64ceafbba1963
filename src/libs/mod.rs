//! Core library modules.
//!
//! - **Domain**: task entity, store, projection
//! - **Infrastructure**: configuration, data directory, errors, messaging
//! - **User interface seams**: prompt/renderer capabilities, table view,
//!   dark mode preference
//!
//! ```rust,no_run
//! use dolist::libs::projector::Progress;
//! use dolist::libs::task::validate_title;
//!
//! assert!(validate_title("   ").is_err());
//! assert_eq!(Progress::of(&[]).percent, 0);
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod preference;
pub mod projector;
pub mod prompt;
pub mod store;
pub mod task;
pub mod view;
