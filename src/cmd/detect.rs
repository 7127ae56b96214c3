use crate::cmd::PipelineArgs;
use clap::Args;
use serde::Serialize;
use slop_detector::config::DetectorWeights;
use slop_detector::detector::detect_with_weights;
use slop_detector::error::SdResult;
use std::process;

#[derive(Args, Debug, Clone)]
pub struct DetectArgs {
    /// Text to analyze; multiple arguments are joined with spaces
    pub text: Vec<String>,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    #[command(flatten)]
    pub weights: DetectorWeights,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectReport<'a> {
    input: &'a str,
    is_slop: bool,
    is_keysmash: bool,
    is_gibberish: bool,
    is_likely_human: bool,
    confidence: f64,
}

pub fn run(args: DetectArgs) -> SdResult<()> {
    let input = args.text.join(" ");
    if input.is_empty() {
        eprintln!("Usage: slop-detector detect <text>");
        eprintln!("Example: slop-detector detect asdfghjkl");
        process::exit(1);
    }

    let options = args.pipeline.to_options()?;
    let result = detect_with_weights(&input, &options, &args.weights);

    let report = DetectReport {
        input: &input,
        is_slop: result.is_slop,
        is_keysmash: result.is_keysmash,
        is_gibberish: result.is_gibberish,
        is_likely_human: result.is_likely_human,
        confidence: result.confidence,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
