pub mod features;
pub mod normalize;

mod engine;
mod sentence;
mod types;

pub use engine::{detect, detect_with_weights};
pub use sentence::{detect_sentence, detect_sentence_with_weights};
pub use types::{DetectOptions, DetectResult, Factors, SentenceResult, WordResult};
