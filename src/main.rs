use clap::Parser;
use kidlearn::core::annotation::WordSet;
use kidlearn::core::config::{self, CliOverrides, KidlearnConfig};
use kidlearn::core::navigator::BoundaryStyle;
use kidlearn::pronounce::SinkKind;
use kidlearn::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "kidlearn", about = "Alphabet and number learning for young children")]
struct Args {
    /// How items are pronounced
    #[arg(short, long, value_enum)]
    pronunciation: Option<SinkKind>,

    /// Highest number in the Numbers grid (1..=1000)
    #[arg(short = 'n', long)]
    numbers_max: Option<u32>,

    /// Example-word table for the alphabet
    #[arg(short, long, value_enum)]
    word_set: Option<WordSet>,

    /// How previous/next controls look at either end of a sequence
    #[arg(short, long, value_enum)]
    boundary_style: Option<BoundaryStyle>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to kidlearn.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("kidlearn.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        KidlearnConfig::default()
    });
    let cli = CliOverrides {
        pronunciation: args.pronunciation,
        boundary_style: args.boundary_style,
        word_set: args.word_set,
        numbers_upper_bound: args.numbers_max,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Kidlearn starting up: pronunciation={:?}, numbers 1..={}, word set {:?}",
        resolved.pronunciation,
        resolved.numbers_upper_bound,
        resolved.word_set
    );

    tui::run(resolved)
}
