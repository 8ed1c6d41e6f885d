use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use interlineal::app::AppContext;
use interlineal::cli::{commands, Cli, Commands};
use interlineal::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Books => {
            commands::list_books();
        }
        Commands::Show {
            book,
            chapter,
            verse,
            json,
        } => {
            let mut config = match &cli.config {
                Some(path) => Config::load_from(path)?,
                None => Config::load()?,
            };
            if let Some(source) = cli.source {
                config.source.location = source;
            }

            let ctx = AppContext::new(&config)?;
            commands::show(&ctx, &book, chapter, verse, json).await?;
        }
    }

    Ok(())
}
