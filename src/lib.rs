//! Resume pivot library
//!
//! Heuristic signal extraction from resumes and job postings, and the prompt
//! context built from those signals.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod llm;
pub mod output;

pub use error::{PivotError, Result};
pub use config::Config;
pub use processing::analyzer::SignalAnalyzer;
