use clap::{Parser, Subcommand};
use std::process;
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a single word or string
    Detect(cmd::detect::DetectArgs),
    /// Classify a sentence word by word
    Sentence(cmd::sentence::SentenceArgs),
    /// Score labeled CSV rows and report precision/recall/F1/accuracy
    Bench(cmd::bench::BenchArgs),
    /// Run the detector over a newline-delimited input file
    Score(cmd::score::ScoreArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Detect(args) => cmd::detect::run(args),
        Commands::Sentence(args) => cmd::sentence::run(args),
        Commands::Bench(args) => cmd::bench::run(args),
        Commands::Score(args) => cmd::score::run(args),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
