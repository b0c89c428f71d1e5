//! Resume pivot: resume and job posting signal extraction

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use resume_pivot::cli::{self, Cli, Commands, ConfigAction};
use resume_pivot::config::{Config, OutputFormat};
use resume_pivot::input::InputManager;
use resume_pivot::llm::prompts::PromptTemplates;
use resume_pivot::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_pivot::output::report::SignalReport;
use resume_pivot::processing::analyzer::SignalAnalyzer;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

const RESUME_EXTENSIONS: &[&str] = &["pdf", "txt", "md"];
const JOB_EXTENSIONS: &[&str] = &["txt", "md"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, cli.config, config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path).with_context(|| format!("Reading {}", path.display())),
        None => Ok(Config::load()?),
    }
}

async fn run_command(command: Commands, config_path: Option<PathBuf>, config: Config) -> Result<()> {
    let analyzer = SignalAnalyzer::new(&config.processing).context("Building signal analyzer")?;
    let mut input_manager = InputManager::new();

    match command {
        Commands::Analyze {
            resume,
            job,
            job_url,
            output,
            save,
            emit_prompt,
            detailed,
        } => {
            info!("Starting signal extraction");
            check_resume_path(&resume)?;
            check_job_path(&job)?;
            let format = output_format(output.as_deref(), &config)?;

            let resume_text = input_manager.extract_text(&resume).await.context("Reading resume")?;
            let job_text = input_manager.extract_text_or_stdin(&job).await.context("Reading job posting")?;

            let signals = analyzer.analyze(&resume_text, &job_text, job_url.as_deref());
            let prompt = emit_prompt
                .then(|| PromptTemplates::default().render_compatibility_analysis(&resume_text, &signals));

            let job_source = job_url.unwrap_or_else(|| job.to_string_lossy().to_string());
            let mut report = SignalReport::from_signals(signals, &resume.to_string_lossy(), &job_source);
            if let Some(prompt) = prompt {
                report = report.with_prompt(prompt);
            }

            let save = save.map(|path| save_target(path, &format, &resume));
            emit(&report, &format, detailed || config.output.detailed, &config, save.as_deref())
        }

        Commands::Projects { resume, output } => {
            check_resume_path(&resume)?;
            let format = output_format(output.as_deref(), &config)?;
            let start = Instant::now();

            let resume_text = input_manager.extract_text(&resume).await.context("Reading resume")?;
            let signals = analyzer.analyze_resume(&resume_text);
            info!("Found {} projects", signals.projects.len());

            let report = SignalReport::from_resume(signals, &resume.to_string_lossy())
                .with_processing_time(start.elapsed().as_millis() as u64);
            emit(&report, &format, true, &config, None)
        }

        Commands::ParseJob { job, job_url, output } => {
            check_job_path(&job)?;
            let format = output_format(output.as_deref(), &config)?;
            let start = Instant::now();

            let job_text = input_manager.extract_text_or_stdin(&job).await.context("Reading job posting")?;
            let parsed = analyzer.parse_job(&job_text, job_url.as_deref());

            let report = SignalReport::from_job(parsed, &job.to_string_lossy())
                .with_processing_time(start.elapsed().as_millis() as u64);
            emit(&report, &format, config.output.detailed, &config, None)
        }

        Commands::Rank { resume, emit_prompt, output } => {
            check_resume_path(&resume)?;
            let format = output_format(output.as_deref(), &config)?;
            let start = Instant::now();

            let resume_text = input_manager.extract_text(&resume).await.context("Reading resume")?;
            let signals = analyzer.analyze_resume(&resume_text);
            let projects: Vec<_> = signals.projects.iter().map(|p| p.project.clone()).collect();
            if projects.is_empty() {
                println!("⚠️  No PROJECTS section found in {}", resume.display());
            }

            let rank = analyzer.rank_context(&projects);
            let prompt = emit_prompt.then(|| PromptTemplates::default().render_project_ranking(&projects, &rank));

            let mut report = SignalReport::from_resume(signals, &resume.to_string_lossy())
                .with_rank(rank)
                .with_processing_time(start.elapsed().as_millis() as u64);
            if let Some(prompt) = prompt {
                report = report.with_prompt(prompt);
            }
            emit(&report, &format, config.output.detailed, &config, None)
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).context("Serializing configuration")?;
                    println!("# {}\n{}", path.display(), content);
                }
                ConfigAction::Path => println!("{}", path.display()),
                ConfigAction::Reset => {
                    Config::default().save_to(&path).context("Writing default configuration")?;
                    println!("✅ Configuration reset: {}", path.display());
                }
            }
            Ok(())
        }
    }
}

fn check_resume_path(path: &Path) -> Result<()> {
    cli::validate_file_extension(path, RESUME_EXTENSIONS)
        .map_err(|e| anyhow::anyhow!("Resume file: {}", e))
}

fn check_job_path(path: &Path) -> Result<()> {
    if path.as_os_str() == resume_pivot::input::manager::STDIN_PATH {
        return Ok(());
    }
    cli::validate_file_extension(path, JOB_EXTENSIONS)
        .map_err(|e| anyhow::anyhow!("Job posting file: {}", e))
}

fn output_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(anyhow::Error::msg),
        None => Ok(config.output.format),
    }
}

/// A directory given to `--save` gets a file name derived from the resume.
fn save_target(path: PathBuf, format: &OutputFormat, resume: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(suggest_filename(format, &resume.to_string_lossy(), false))
    } else {
        path
    }
}

fn emit(report: &SignalReport, format: &OutputFormat, detailed: bool, config: &Config, save: Option<&Path>) -> Result<()> {
    let generator = ReportGenerator::with_options(config.output.color_output && save.is_none(), detailed, true, true);
    let rendered = generator.generate_report(report, format)?;

    match save {
        Some(path) => {
            save_report_to_file(&rendered, path).with_context(|| format!("Saving report to {}", path.display()))?;
            println!("📁 Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
