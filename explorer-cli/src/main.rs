use anyhow::{bail, Context, Result};
use chrono::{Local, TimeZone, Utc};
use clap::Parser;
use cli::Cli;
use dotenv::dotenv;
use explorer::{query, Explorer, ExplorerConfig, Panel, Phase};
use render::Renderer;
use std::{fmt::Display, io::IsTerminal};
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

mod cli;
mod prompt;
mod render;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let stderr_log = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        );

    tracing_subscriber::registry().with(stderr_log).init();

    let config = ExplorerConfig::new(&cli.api_url)
        .context("Invalid configuration")?
        .with_policy(cli.policy());
    let explorer = Explorer::new(&config);

    let expanded = cli.expanded();
    for panel in Panel::ALL {
        if expanded.is_expanded(panel) {
            explorer.toggle(panel).await;
        }
    }

    let color = !cli.no_color && std::io::stdout().is_terminal();
    if cli.utc {
        run(&cli, &explorer, &Renderer::new(Utc, color)).await
    } else {
        run(&cli, &explorer, &Renderer::new(Local, color)).await
    }
}

async fn run<Tz>(cli: &Cli, explorer: &Explorer, renderer: &Renderer<Tz>) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match cli.order_id.as_deref() {
        Some(order_id) => search_once(explorer, renderer, order_id, cli.json).await,
        None => prompt::run(explorer, renderer).await,
    }
}

async fn search_once<Tz>(
    explorer: &Explorer,
    renderer: &Renderer<Tz>,
    order_id: &str,
    json: bool,
) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if let Err(err) = query::check(order_id) {
        bail!("{err} Got {} characters.", err.len);
    }

    explorer.submit(order_id).await?;
    let view = explorer.view().await;

    match (&view.phase, &view.record) {
        (Phase::Displaying, Some(record)) if json => {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        (Phase::Displaying, Some(_)) => print!("{}", renderer.render(&view)),
        _ => bail!("No order found for {}", order_id.trim()),
    }

    Ok(())
}
