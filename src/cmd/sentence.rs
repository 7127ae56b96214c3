use crate::cmd::PipelineArgs;
use clap::Args;
use slop_detector::config::DetectorWeights;
use slop_detector::detector::detect_sentence_with_weights;
use slop_detector::error::SdResult;
use std::process;

#[derive(Args, Debug, Clone)]
pub struct SentenceArgs {
    /// Sentence to analyze; multiple arguments are joined with spaces
    pub text: Vec<String>,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    #[command(flatten)]
    pub weights: DetectorWeights,
}

pub fn run(args: SentenceArgs) -> SdResult<()> {
    let input = args.text.join(" ");
    if input.is_empty() {
        eprintln!("Usage: slop-detector sentence <text>");
        process::exit(1);
    }

    let options = args.pipeline.to_options()?;
    let result = detect_sentence_with_weights(&input, &options, &args.weights);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
