use clap::Parser;
use influence_cms::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "influence_cms=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = dotenv::dotenv() {
        tracing::warn!(".env file not loaded: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path }) => {
            influence_cms::cli::init::run(path, cli.config).await?;
        }
        Some(Commands::Migrate) => {
            influence_cms::cli::migrate::run(&cli.config).await?;
        }
        Some(Commands::Serve { host, port }) => {
            influence_cms::cli::serve::run(&cli.config, host, port).await?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
