use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_desk::config::DEFAULT_LOG_FILTER;
use library_desk::{Cli, Directory, Session};

fn main() -> Result<()> {
    // Diagnostics go to stderr. The default filter keeps them off the console
    // unless something is actually wrong.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "starting library desk");

    let directory = Directory::new(cli.id_generator());
    let mut session = Session::new(directory, io::stdin().lock(), io::stdout().lock(), cli.session_config());
    session.run()?;

    Ok(())
}
