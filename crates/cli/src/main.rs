use clap::Parser;
use ferrous_pdns_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;
mod runner;

#[derive(Parser)]
#[command(name = "ferrous-pdns")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous pDNS - Passive DNS capture to flat records")]
struct Cli {
    /// Capture file to read (legacy pcap, Ethernet link type)
    #[arg(short = 'i', long, value_name = "FILE")]
    input: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Output format, repeatable (json, stdout)
    #[arg(short = 'f', long = "format", value_name = "NAME")]
    formats: Vec<String>,

    /// Directory for file-backed outputs
    #[arg(short = 'o', long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Source tag stamped on every row
    #[arg(long)]
    source: Option<String>,

    /// Sensor tag stamped on every row
    #[arg(long)]
    sensor: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        formats: cli.formats.clone(),
        output_dir: cli.output_dir.clone(),
        source: cli.source.clone(),
        sensor: cli.sensor.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous pDNS v{}", env!("CARGO_PKG_VERSION"));

    let pipeline = di::Pipeline::new(&config)?;
    let summary = runner::run_capture(&cli.input, &pipeline)?;

    info!(
        frames = summary.frames,
        packets = summary.stats.packets_seen,
        rejected = summary.stats.packets_rejected,
        rows = summary.stats.rows_emitted,
        suppressed = summary.stats.records_suppressed,
        degraded_fingerprints = summary.stats.degraded_fingerprints,
        "Capture processed"
    );
    Ok(())
}
