//! Output formatters for signal reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::SignalReport;
use crate::processing::analyzer::ProjectEstimate;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting signal reports
pub trait OutputFormatter {
    fn format_report(&self, report: &SignalReport) -> Result<String>;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn estimate_label(score: f64) -> &'static str {
    match score {
        s if s >= 9.0 => "STANDOUT",
        s if s >= 7.5 => "STRONG",
        s if s >= 6.0 => "SOLID",
        _ => "BASIC",
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_estimate_badge(&self, score: f64) -> String {
        let label = estimate_label(score);
        let color = match label {
            "STANDOUT" => Color::Green,
            "STRONG" => Color::BrightGreen,
            "SOLID" => Color::Yellow,
            _ => Color::BrightRed,
        };

        if self.use_colors {
            format!("[{}]", label.color(color).bold())
        } else {
            format!("[{}]", label)
        }
    }

    fn format_project(&self, index: usize, entry: &ProjectEstimate) -> String {
        let mut output = format!("{}. {}", index, self.colorize(&entry.project.title, Color::Cyan));
        match &entry.estimate {
            Some(estimate) => {
                output.push_str(&format!(
                    "  ~{:.1}/10 {} (estimate)\n",
                    estimate.avg_score,
                    self.format_estimate_badge(estimate.avg_score)
                ));
                output.push_str(&format!("   Likely fit: {}\n", estimate.best_fit_roles.join(", ")));
            }
            None => output.push('\n'),
        }
        if self.detailed {
            for line in entry.project.description.lines().skip(1) {
                output.push_str(&format!("   │ {}\n", line));
            }
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &SignalReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME PIVOT SIGNALS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        if let Some(job) = &report.job {
            output.push_str(&self.format_header("💼 Job Posting", 2));
            output.push_str(&format!("Title: {}\n", self.colorize(&job.job_title, Color::Cyan)));
            if !job.company.is_empty() {
                output.push_str(&format!("Company: {}\n", job.company));
            }
            if self.detailed {
                output.push_str(&format!("Description: {} characters\n", job.job_description.chars().count()));
            }
        }

        if let Some(tech) = &report.tech_stack {
            output.push_str(&self.format_header("🔧 Confirmed Tech Stack", 2));
            if tech.confirmed.is_empty() {
                output.push_str(&self.colorize("No known technologies detected\n", Color::Yellow));
            } else {
                output.push_str(&format!("{}\n", tech.confirmed.join(", ")));
            }
            if tech.sql_inferred {
                output.push_str(&self.colorize("SQL inferred from database/ORM experience\n", Color::Green));
            }
        }

        if report.tech_stack.is_some() {
            output.push_str(&self.format_header("🚀 Auto-detected Projects", 2));
            if report.projects.is_empty() {
                output.push_str("No PROJECTS section found\n");
            } else {
                for (i, entry) in report.projects.iter().enumerate() {
                    output.push_str(&self.format_project(i + 1, entry));
                }
                if report.projects.iter().any(|p| p.estimate.is_some()) {
                    output.push_str(&self.colorize(
                        "Scores are quick heuristic estimates; run the full ranking for a real assessment.\n",
                        Color::BrightBlack,
                    ));
                }
            }
        }

        if let Some(rank) = &report.rank {
            output.push_str(&self.format_header("🎯 Ranking Roles", 2));
            for role in &rank.role_buckets {
                output.push_str(&format!("  • {}\n", role));
            }
            for project in rank.projects.iter().filter(|p| !p.ai_keywords.is_empty()) {
                output.push_str(&format!(
                    "AI keywords in {}: {}\n",
                    project.title,
                    project.ai_keywords.join(", ")
                ));
            }
        }

        if let Some(prompt) = &report.prompt {
            output.push_str(&self.format_header("🤖 LLM Prompt", 3));
            output.push_str(prompt);
            output.push('\n');
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &SignalReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &SignalReport) -> Result<String> {
        let mut output = String::from("# 📊 Resume Pivot Signals\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            if let Some(resume) = &report.metadata.resume_file {
                output.push_str(&format!("**Resume:** `{}`\n", file_name(resume)));
            }
            if let Some(job) = &report.metadata.job_source {
                output.push_str(&format!("**Job:** `{}`\n", file_name(job)));
            }
            output.push('\n');
        }

        if let Some(job) = &report.job {
            output.push_str("## Job Posting\n\n");
            output.push_str(&format!("**Title:** {}\n\n", job.job_title));
            if !job.company.is_empty() {
                output.push_str(&format!("**Company:** {}\n\n", job.company));
            }
        }

        if let Some(tech) = &report.tech_stack {
            output.push_str("## Confirmed Tech Stack\n\n");
            for tech_name in &tech.confirmed {
                output.push_str(&format!("- {}\n", tech_name));
            }
            if tech.sql_inferred {
                output.push_str("\n_SQL inferred from database/ORM experience._\n");
            }
            output.push('\n');

            output.push_str("## Auto-detected Projects\n\n");
            if report.projects.is_empty() {
                output.push_str("No PROJECTS section found.\n\n");
            } else {
                output.push_str("| Project | Estimate | Likely fit |\n|---|---|---|\n");
                for entry in &report.projects {
                    let (score, roles) = match &entry.estimate {
                        Some(e) => (format!("~{:.1}/10", e.avg_score), e.best_fit_roles.join(", ")),
                        None => ("-".to_string(), "-".to_string()),
                    };
                    output.push_str(&format!("| {} | {} | {} |\n", entry.project.title, score, roles));
                }
                output.push_str("\n_Estimates are heuristic; run the full ranking for a real assessment._\n\n");
            }
        }

        if let Some(rank) = &report.rank {
            output.push_str("## Ranking Roles\n\n");
            for role in &rank.role_buckets {
                output.push_str(&format!("- {}\n", role));
            }
            output.push('\n');
        }

        if let Some(prompt) = &report.prompt {
            output.push_str("## LLM Prompt\n\n```text\n");
            output.push_str(prompt);
            output.push_str("\n```\n");
        }

        Ok(output)
    }
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

impl ReportGenerator {
    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &SignalReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_signals{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_signals{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_signals{}.md", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::{ResumeSignals, TechStackSignals};
    use crate::processing::job_parser::ParsedJobInfo;
    use crate::processing::project_scorer::HeuristicProjectScore;
    use crate::processing::projects::ExtractedProject;

    fn report() -> SignalReport {
        let resume = ResumeSignals {
            tech_stack: TechStackSignals {
                confirmed: vec!["Prisma".to_string(), "SQL".to_string()],
                sql_inferred: true,
            },
            projects: vec![ProjectEstimate {
                project: ExtractedProject {
                    title: "Budget Tracker".to_string(),
                    description: "Budget Tracker | React\nExpense tracking web app.".to_string(),
                },
                estimate: Some(HeuristicProjectScore {
                    title: "Budget Tracker".to_string(),
                    avg_score: 7.8,
                    best_fit_roles: vec!["Full-Stack Engineer".to_string()],
                }),
            }],
        };
        let mut report = SignalReport::from_resume(resume, "/tmp/jane_resume.pdf");
        report.job = Some(ParsedJobInfo {
            job_title: "Senior Engineer".to_string(),
            company: "Acme".to_string(),
            job_description: "Build things.".to_string(),
        });
        report
    }

    #[test]
    fn test_console_without_colors() {
        let output = ConsoleFormatter::new(false, true).format_report(&report()).unwrap();
        assert!(output.contains("Title: Senior Engineer"));
        assert!(output.contains("Prisma, SQL"));
        assert!(output.contains("1. Budget Tracker  ~7.8/10 [STRONG] (estimate)"));
        assert!(output.contains("   │ Expense tracking web app."));
        assert!(output.contains("heuristic estimates"));
    }

    #[test]
    fn test_json_uses_camel_case_records() {
        let output = JsonFormatter::new(false).format_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["job"]["jobTitle"], "Senior Engineer");
        assert_eq!(value["projects"][0]["estimate"]["avgScore"], 7.8);
        assert_eq!(value["tech_stack"]["sql_inferred"], true);
    }

    #[test]
    fn test_markdown_table() {
        let output = MarkdownFormatter::new(true).format_report(&report()).unwrap();
        assert!(output.contains("**Resume:** `jane_resume.pdf`"));
        assert!(output.contains("| Budget Tracker | ~7.8/10 | Full-Stack Engineer |"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(&OutputFormat::Markdown, "/home/jane/resume.pdf", false),
            "resume_signals.md"
        );
    }

    #[test]
    fn test_save_report_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("out.md");
        save_report_to_file("# hi", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# hi");
    }
}
