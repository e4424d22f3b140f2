//! Prompt templates and response contracts for the external nutrition AI.
//!
//! This crate owns the input/output schemas of the three AI-backed flows
//! (food analysis, dietary suggestions, custom meal plans) and the lenient
//! parsing of raw model output into them. It performs no inference: the
//! surrounding application brings its own client and plugs it in behind
//! the [`FoodAnalyzer`] seam, which tests replace with [`MockAnalyzer`].

pub mod analysis;
pub mod prompts;
pub mod suggestions;

pub use analysis::*;
pub use prompts::*;
pub use suggestions::*;
