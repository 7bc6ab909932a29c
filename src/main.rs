use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lazygrid::config::{self, KeyResolver};

use crate::app::App;

mod app;
mod cli;
mod dashboard;
mod tui;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _guard = initialize_logging()?;
    info!("Starting lazygrid");

    let args = cli::Args::parse();

    let mut config = config::load()?;
    if let Some(theme) = args.theme {
        config.theme.name = theme;
    }
    if let Some(page_size) = args.page_size {
        config.grid.initial_page_size = page_size;
    }
    let resolver = Arc::new(KeyResolver::new(Arc::new(config.keybindings.clone())));
    let active = args.screen.map_or(0, cli::ScreenArg::tab_index);

    let mut app = App::new(&config, resolver, active)?;
    app.run().await?;

    Ok(())
}

fn initialize_logging() -> Result<WorkerGuard> {
    let directory = dirs::data_local_dir().map_or_else(
        || std::path::PathBuf::from("logs"),
        |path| path.join("lazygrid").join("logs"),
    );
    std::fs::create_dir_all(&directory)?;

    let file_appender = tracing_appender::rolling::daily(&directory, "lazygrid.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lazygrid=info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .init();

    Ok(guard)
}
