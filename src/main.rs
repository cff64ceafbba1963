use dolist::commands::Cli;
use dolist::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    let _ = dotenv::dotenv();

    if is_debug_mode() {
        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,dolist=debug".into()))
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    Cli::menu().await
}
