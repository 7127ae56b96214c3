pub mod config;
pub mod detector;
pub mod error;
pub mod geometry;
pub mod languages;
pub mod layouts;

pub use detector::{
    detect, detect_sentence, DetectOptions, DetectResult, Factors, SentenceResult, WordResult,
};
// cmd and reports are binary modules (see main.rs).
