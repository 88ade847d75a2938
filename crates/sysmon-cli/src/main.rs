use anyhow::Result;
use clap::Parser;
use std::io;
use sysmon_services::{detect_platform, Monitor, MonitorConfig, SystemCollector};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Takes no options; refreshes every 2 seconds until interrupted.
#[derive(Parser)]
#[command(name = "sysmon", version)]
#[command(about = "Live terminal dashboard for CPU, memory, disk, network and load", long_about = None)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let config = MonitorConfig::default();
    let platform = detect_platform(&config);
    let collector = SystemCollector::new(platform.clone(), config.cpu_sample_window);

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("SIGINT received; stopping monitor");
                shutdown.cancel();
            }
            Err(e) => tracing::debug!("Failed to listen for exit signal: {}", e),
        }
    });

    tracing::info!("sysmon starting");
    let mut monitor = Monitor::new(collector, platform, io::stdout(), config);
    let completed = monitor.run(cancel).await?;
    tracing::info!(completed, "sysmon exiting");

    Ok(())
}

/// Logs go to stderr so they never interleave with the dashboard on stdout.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}
