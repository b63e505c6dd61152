mod analyzer;
pub mod prompt;

pub use analyzer::*;
pub use prompt::{FallbackReason, build_fallback, build_prompt};
