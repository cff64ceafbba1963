pub mod dark_mode;
pub mod init;
pub mod task;

use crate::api::remote::RemoteAdapter;
use crate::db::backend::TaskBackend;
use crate::db::local::LocalAdapter;
use crate::db::local_storage::LocalStorage;
use crate::libs::config::{BackendKind, Config};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::preference::PreferenceStore;
use crate::libs::prompt::TerminalPrompt;
use crate::libs::store::TaskStore;
use crate::libs::view::TableRenderer;
use crate::{msg_bail_anyhow, msg_debug};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Add a task", arg_required_else_help = true)]
    Add(task::AddArgs),
    #[command(about = "Show tasks and progress")]
    List(task::ListArgs),
    #[command(about = "Mark a task as done or not done", arg_required_else_help = true)]
    Toggle(task::IdArgs),
    #[command(about = "Edit a task's title and category", arg_required_else_help = true)]
    Edit(task::EditArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(task::DeleteArgs),
    #[command(about = "Toggle dark mode")]
    DarkMode,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::DarkMode => dark_mode::cmd(),
            command => {
                let config = Config::read()?;
                let data = DataStorage::new();
                msg_debug!(Message::UsingBackend(config.backend.to_string()));

                match config.backend {
                    BackendKind::Local => {
                        let storage = LocalStorage::open(&data).with_quota(config.quota_bytes());
                        run(LocalAdapter::new(storage), command, &data).await
                    }
                    BackendKind::Remote => {
                        let Some(remote) = config.remote_settings() else {
                            msg_bail_anyhow!(Message::RemoteNotConfigured);
                        };
                        run(RemoteAdapter::new(&remote), command, &data).await
                    }
                }
            }
        }
    }
}

/// Composes a session around `backend` and runs one task command.
async fn run<B: TaskBackend>(backend: B, command: Commands, data: &DataStorage) -> Result<()> {
    let assume_yes = matches!(&command, Commands::Delete(args) if args.yes);
    let dark_mode = PreferenceStore::new(LocalStorage::open(data)).get();

    let store = TaskStore::new(backend, TerminalPrompt::new(assume_yes));
    store.load().await;
    let store = store.with_renderer(TableRenderer::new(dark_mode));

    match command {
        Commands::Add(args) => task::add(&store, args).await,
        Commands::List(args) => task::list(&store, args),
        Commands::Toggle(args) => task::toggle(&store, args).await,
        Commands::Edit(args) => task::edit(&store, args).await,
        Commands::Delete(args) => task::delete(&store, args).await,
        Commands::Init | Commands::DarkMode => Ok(()),
    }
}
