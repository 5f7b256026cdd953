//! Terminal front end for the products API.

mod app;
mod command;
mod terminal;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use product_core::{ProductApi, ProductClient, ProductPage, UreqTransport};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::terminal::Terminal;

const DEFAULT_API_URL: &str = "https://express-mysql-backend.onrender.com/api/products";

/// Browse, create, edit and delete products.
#[derive(Parser)]
#[command(name = "products")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL of the products collection
    #[arg(long, env = "PRODUCTS_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Give up on a request after this many seconds (default: wait forever)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Logs go to stderr so stdout carries only the page. `RUST_LOG` wins over
/// `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let transport = UreqTransport::with_timeout(cli.timeout_secs.map(Duration::from_secs));
    let api = ProductApi::new(ProductClient::new(&cli.api_url), transport);
    let terminal = Terminal::new(io::stdin().lock(), io::stdout());
    let mut page = ProductPage::new(api, terminal);
    info!(
        url = page.api().client().base_url(),
        timeout_secs = ?cli.timeout_secs,
        "starting"
    );

    app::run(&mut page).context("terminal I/O failed")
}
