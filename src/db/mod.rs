//! Task persistence.
//!
//! [`backend::TaskBackend`] is the contract every backend implements.
//! [`local::LocalAdapter`] keeps the list in [`local_storage::LocalStorage`];
//! the remote implementation lives in [`crate::api::remote`].

pub mod backend;
pub mod local;
pub mod local_storage;
