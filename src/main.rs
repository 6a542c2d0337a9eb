use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use update_check::check::{Query, check_many_from};
use update_check::config::{CheckerConfig, config_path};
use update_check::fetch::HttpCatalogSource;

#[derive(Parser)]
#[command(name = "update-check")]
#[command(version, about = "Check installed software versions against a release catalog")]
struct Cli {
    /// Software to check, as NAME@VERSION (e.g. PeakMaster@6.0a)
    #[arg(value_name = "NAME@VERSION", required = true)]
    queries: Vec<Query>,

    /// URL of the catalog document (overrides the config file)
    #[arg(long)]
    url: Option<String>,

    /// Accept plain HTTP and invalid certificates. Do not use in production.
    #[arg(long)]
    insecure: bool,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn initialize_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_file = cli.config.unwrap_or_else(config_path);
    let mut config = CheckerConfig::load(&config_file)?;
    if cli.insecure {
        config.allow_insecure = true;
    }

    let Some(url) = cli.url.or(config.url.take()) else {
        bail!("no catalog URL given; pass --url or set \"url\" in {:?}", config_file);
    };

    let source = HttpCatalogSource::from_config(&url, &config)?;
    let checked = check_many_from(&source, &cli.queries)
        .await
        .with_context(|| format!("update check against {} failed", url))?;

    for warning in &checked.warnings {
        eprintln!("warning: {}", warning);
    }

    for (query, result) in cli.queries.iter().zip(&checked.value) {
        match (&result.latest_version, &result.link) {
            (Some(latest), Some(link)) => {
                println!("{}: {} (latest {}, {})", query, result.status, latest, link)
            }
            _ => println!("{}: {}", query, result.status),
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    initialize_tracing();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}
