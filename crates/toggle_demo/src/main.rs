//! Toggle demo
//!
//! Replays a click script against two synchronized controlled switches and
//! one uncontrolled switch, printing a frame after every click.
//!
//! ```text
//! toggle-demo a b a a a a reset c
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod app;
mod config;
mod switch;

use app::{App, Target};
use config::DemoConfig;

#[derive(Parser)]
#[command(name = "toggle-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Controlled and uncontrolled toggle demo", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Config file (defaults to ./toggle-demo.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of accepted toggles
    #[arg(long)]
    max_clicks: Option<u32>,

    /// Elements to click, in order
    #[arg(value_enum)]
    clicks: Vec<Target>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::load_from_dir(&std::env::current_dir()?)?,
    };
    if let Some(max_clicks) = cli.max_clicks {
        config.max_clicks = max_clicks;
    }

    info!(
        "Starting demo: {} clicks scripted, toggles accepted up to {}",
        cli.clicks.len(),
        config.max_clicks
    );

    let app = App::new(config);
    println!("{}", app.render());

    for target in cli.clicks {
        let frame = app.click(target);
        println!();
        println!("click {:?}", target);
        println!("{}", frame);
        info!("{}", frame.status());
    }

    let state = app.state();
    info!(
        "Done: shared on = {} (A {}, B {}), uncontrolled on = {}, accepted clicks = {}",
        state.both_on,
        app.first().on(),
        app.second().on(),
        app.free().on(),
        state.times_clicked
    );

    Ok(())
}
