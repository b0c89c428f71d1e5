//! CLI interface for resume pivot

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-pivot")]
#[command(about = "Extract resume and job posting signals for AI career analysis")]
#[command(long_about = "Detect a resume's tech stack, pull out and estimate its side projects, parse pasted job postings, and render the prompts sent to the analysis model")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract all signals from a resume and a job posting
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job posting text (TXT, MD), or "-" for stdin
        #[arg(short, long)]
        job: PathBuf,

        /// Posting URL, used for the title when the text has none
        #[arg(long)]
        job_url: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to a file, or into a directory under a derived name
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include the rendered compatibility prompt
        #[arg(long)]
        emit_prompt: bool,

        /// Show project descriptions and extra details
        #[arg(short, long)]
        detailed: bool,
    },

    /// Extract and estimate projects from a resume
    Projects {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Parse a pasted job posting into title, company and description
    ParseJob {
        /// Path to job posting text (TXT, MD), or "-" for stdin
        #[arg(short, long)]
        job: PathBuf,

        /// Posting URL, used for the title when the text has none
        #[arg(long)]
        job_url: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Prepare the project ranking context for a resume
    Rank {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Include the rendered ranking prompt
        #[arg(long)]
        emit_prompt: bool,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
