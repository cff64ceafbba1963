//! Clients for remote services.
//!
//! - **remote**: task backend over a PostgREST-style record store

pub mod remote;

pub use remote::{RemoteAdapter, RemoteConfig};
