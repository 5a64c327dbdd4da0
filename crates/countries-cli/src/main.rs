//! countries — Command-line interface for countries-core
//!
//! Looks countries up on REST Countries (and coordinates on geocode.xyz),
//! renders them as the same HTML cards the browser build produces and prints
//! the resulting container to stdout. Logs go to stderr.
//!
//! Usage examples
//! --------------
//!
//! - One country, optionally with its first neighbour
//!   $ countries country finland
//!   $ countries country portugal --neighbour
//!
//! - By ISO code
//!   $ countries code FIN
//!
//! - Where are these coordinates?
//!   $ countries where-am-i 52.508 13.381
//!   $ countries where-am-i -33.933 18.474
//!
//! - Several at once (all / settled / race / any)
//!   $ countries all tanzania russia finland
//!   $ countries --timeout 1 race italy egypt mexico
//!
//! Configuration
//! -------------
//!
//! `--countries-url` / `--geocode-url` override the API base URLs; without
//! them `COUNTRIES_API_URL` / `GEOCODE_API_URL` are used when set. Log level
//! follows `RUST_LOG`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use countries_core::prelude::*;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type Board = CountryBoard<ReqwestTransport, HtmlContainer>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "countries_core=info,countries=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    let mut config = ApiConfig::from_env();
    if let Some(url) = &args.countries_url {
        config = config.with_countries_url(url);
    }
    if let Some(url) = &args.geocode_url {
        config = config.with_geocode_url(url);
    }
    tracing::debug!(?config, "endpoints");

    let client = CountriesClient::new(ReqwestTransport::new(), config);
    let mut board = Board::new(client, HtmlContainer::new());

    let outcome = match args.timeout {
        Some(secs) => {
            let after = Duration::try_from_secs_f64(secs)
                .context("--timeout must be a non-negative number of seconds")?;
            match within(run(&mut board, args.command), tokio::time::sleep(after), after).await {
                // The board never saw this one; make it visible like any other failure.
                Err(err @ CountryError::Timeout { .. }) => Err(board.show_failure(err)),
                other => other,
            }
        }
        None => run(&mut board, args.command).await,
    };

    println!("{}", board.surface().to_html()?);

    outcome.map_err(Into::into)
}

async fn run(board: &mut Board, command: Commands) -> countries_core::Result<()> {
    match command {
        Commands::Country {
            name,
            neighbour: false,
        } => {
            board.show_country(&name).await?;
        }

        Commands::Country {
            name,
            neighbour: true,
        } => {
            board.show_country_and_neighbour(&name).await?;
        }

        Commands::Code { code } => {
            board.show_country_by_code(&code).await?;
        }

        Commands::WhereAmI { lat, lng } => {
            let coords = Coordinates::new(lat, lng).map_err(|err| board.show_failure(err))?;
            board.show_where_am_i(coords).await?;
        }

        Commands::All { names } => {
            let records = board.show_countries(&names).await?;
            let capitals: Vec<&str> = records
                .iter()
                .map(|r| r.first_capital().unwrap_or("-"))
                .collect();
            tracing::info!(?capitals, "all countries loaded");
        }

        Commands::Settled { names } => {
            let outcomes = board.show_settled(&names).await;
            let failed = outcomes.iter().filter(|o| o.is_err()).count();
            if failed > 0 {
                tracing::warn!(failed, total = outcomes.len(), "some lookups failed");
            }
        }

        Commands::Race { names } => {
            board.show_first_settled(&names).await?;
        }

        Commands::Any { names } => {
            board.show_first_success(&names).await?;
        }
    }

    Ok(())
}
