pub mod bench;
pub mod detect;
pub mod score;
pub mod sentence;

use clap::Args;
use slop_detector::error::{SdResult, SlopError};
use slop_detector::layouts::KnownLayout;
use slop_detector::DetectOptions;
use std::str::FromStr;

/// Options shared by every subcommand that runs the pipeline.
#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
    #[arg(short, long, default_value = "qwerty")]
    pub layout: String,

    #[arg(short, long, default_value_t = 0.5)]
    pub threshold: f64,
}

impl PipelineArgs {
    pub fn to_options(&self) -> SdResult<DetectOptions> {
        let layout = KnownLayout::from_str(&self.layout)
            .map_err(|_| SlopError::UnknownLayout(self.layout.clone()))?;
        Ok(DetectOptions {
            layout,
            threshold: self.threshold,
        })
    }
}
