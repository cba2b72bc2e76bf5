use anyhow::Context;
use clap::Parser;
use stats_monitor::{
    actors::{driver::Driver, poller::Poller},
    config::{Config, read_config_file},
    transport::HttpFetcher,
    util::{get_interval, get_url},
};
use tracing::{info, level_filters::LevelFilter, trace};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Polls a stats endpoint and prints threshold alerts")]
struct Args {
    /// Config file (JSON)
    #[arg(short)]
    file: Option<String>,

    /// Stats endpoint, overrides config file and environment
    #[arg(long)]
    url: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init(verbose: u8) {
    dotenv::dotenv().ok();

    let level = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    // library and binary share the `stats_monitor` target
    let filter = filter::Targets::new().with_target("stats_monitor", level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact()
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.file {
        Some(path) => read_config_file(path)?,
        None => Config::default(),
    };

    if let Some(url) = get_url() {
        config.poller.url = url;
    }
    if let Some(interval) = get_interval() {
        config.poller.interval_ms = interval.as_millis() as u64;
    }
    if let Some(url) = &args.url {
        config.poller.url = url.clone();
    }

    config.validate().context("invalid configuration")?;

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init(args.verbose);
    trace!("started with args: {args:?}");

    let config = load_config(&args)?;
    info!("monitoring {}", config.poller.url);

    let fetcher = HttpFetcher::new(config.poller.timeout())?;
    let poller = Poller::new(config.poller, fetcher);
    let driver = Driver::new(config.thresholds);

    let payloads = poller.poll();
    let summary = tokio::spawn(async move { driver.run(payloads).await })
        .await
        .context("driver task failed")?;

    info!(
        "done: {} payloads processed, {} skipped, {} alerts",
        summary.processed, summary.skipped, summary.alerts
    );

    Ok(())
}
