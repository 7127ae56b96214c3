use crate::cmd::PipelineArgs;
use crate::reports::{self, ScoreRow};
use clap::Args;
use slop_detector::config::DetectorWeights;
use slop_detector::detector::detect_with_weights;
use slop_detector::error::SdResult;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Newline-delimited inputs; blank lines and '#' comments are ignored
    #[arg(short, long)]
    pub file: String,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    #[command(flatten)]
    pub weights: DetectorWeights,
}

pub fn run(args: ScoreArgs) -> SdResult<()> {
    let content = fs::read_to_string(&args.file)?;
    let options = args.pipeline.to_options()?;

    let inputs: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect();

    if inputs.is_empty() {
        println!("No inputs to score.");
        return Ok(());
    }

    info!(file = %args.file, inputs = inputs.len(), "scoring inputs");

    let rows: Vec<ScoreRow> = inputs
        .iter()
        .map(|input| {
            let result = detect_with_weights(input, &options, &args.weights);
            ScoreRow {
                input: input.to_string(),
                is_slop: result.is_slop,
                is_likely_human: result.is_likely_human,
                confidence: result.confidence,
            }
        })
        .collect();

    reports::print_score_report(&rows);
    Ok(())
}
