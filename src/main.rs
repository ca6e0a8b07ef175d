use clap::Parser;
use clap::builder::RangedU64ValueParser;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use termlife::core::config::{self, CliOverrides, LifeConfig};
use termlife::core::grid::MAX_DIMENSION;
use termlife::tui;

fn dimension_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..=MAX_DIMENSION as u64)
}

#[derive(Parser)]
#[command(name = "termlife", about = "Conway's Game of Life in the terminal")]
struct Args {
    /// Board width in cells (1-65535)
    #[arg(long, value_parser = dimension_parser())]
    width: Option<usize>,

    /// Board height in cells (1-65535)
    #[arg(long, value_parser = dimension_parser())]
    height: Option<usize>,

    /// Milliseconds between generations
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: Option<u64>,

    /// Seed for the random board (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,

    /// Where to write the log (the terminal belongs to the board)
    #[arg(long, default_value = "termlife.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    log::info!("termlife starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("Ignoring config file: {}", e);
        LifeConfig::default()
    });
    let cli = CliOverrides {
        width: args.width,
        height: args.height,
        tick_ms: args.tick_ms,
        seed: args.seed,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!("Resolved config: {:?}", resolved);

    tui::run(resolved).await
}
