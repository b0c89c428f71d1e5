//! Report structure shared by every output format

use crate::processing::analyzer::{DocumentSignals, ProjectEstimate, RankContext, ResumeSignals, TechStackSignals};
use crate::processing::job_parser::ParsedJobInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalReport {
    pub metadata: ReportMetadata,

    /// Present when a resume was analyzed
    pub tech_stack: Option<TechStackSignals>,
    pub projects: Vec<ProjectEstimate>,

    /// Present when a job posting was parsed
    pub job: Option<ParsedJobInfo>,

    /// Present for the ranking flow
    pub rank: Option<RankContext>,

    /// Rendered LLM prompt, when requested
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
    pub resume_file: Option<String>,
    pub job_source: Option<String>,
    pub version: String,
}

impl ReportMetadata {
    fn new(resume_file: Option<String>, job_source: Option<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            processing_time_ms: 0,
            resume_file,
            job_source,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl SignalReport {
    pub fn from_signals(signals: DocumentSignals, resume_file: &str, job_source: &str) -> Self {
        let mut metadata = ReportMetadata::new(Some(resume_file.to_string()), Some(job_source.to_string()));
        metadata.processing_time_ms = signals.processing_time_ms;

        Self {
            metadata,
            tech_stack: Some(signals.resume.tech_stack),
            projects: signals.resume.projects,
            job: Some(signals.job),
            rank: None,
            prompt: None,
        }
    }

    pub fn from_resume(resume: ResumeSignals, resume_file: &str) -> Self {
        Self {
            metadata: ReportMetadata::new(Some(resume_file.to_string()), None),
            tech_stack: Some(resume.tech_stack),
            projects: resume.projects,
            job: None,
            rank: None,
            prompt: None,
        }
    }

    pub fn from_job(job: ParsedJobInfo, job_source: &str) -> Self {
        Self {
            metadata: ReportMetadata::new(None, Some(job_source.to_string())),
            tech_stack: None,
            projects: Vec::new(),
            job: Some(job),
            rank: None,
            prompt: None,
        }
    }

    pub fn with_rank(mut self, rank: RankContext) -> Self {
        self.rank = Some(rank);
        self
    }

    pub fn with_prompt(mut self, prompt: String) -> Self {
        self.prompt = Some(prompt);
        self
    }

    pub fn with_processing_time(mut self, processing_time_ms: u64) -> Self {
        self.metadata.processing_time_ms = processing_time_ms;
        self
    }
}
