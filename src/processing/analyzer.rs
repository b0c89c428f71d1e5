//! Signal analyzer composing the individual extractors into one pipeline
//!
//! resume text -> detected tech (+ SQL) -> extracted projects -> estimates,
//! job text -> parsed posting. Everything here is synchronous and total; only
//! construction can fail.

use crate::config::ProcessingConfig;
use crate::error::Result;
use crate::processing::ai_keywords::AIKeywordDetector;
use crate::processing::job_parser::{JobPostingFieldParser, ParsedJobInfo};
use crate::processing::project_scorer::{HeuristicProjectScore, HeuristicProjectScorer};
use crate::processing::projects::{ExtractedProject, ProjectsSectionExtractor};
use crate::processing::tech_stack::{SqlInferenceRule, TechStackDetector};
use crate::processing::vocabulary::{Vocabulary, SQL_LABEL};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Role buckets every project is ranked against.
pub const ROLE_ARCHETYPES: &[&str] = &[
    "Full-Stack Engineer",
    "Frontend Engineer",
    "Backend Engineer",
    "Mobile Engineer",
    "Data Engineer",
    "ML Engineer",
    "DevOps Engineer",
];

/// Bucket added when any project mentions AI/LLM work.
pub const AI_ROLE: &str = "AI/LLM Engineer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechStackSignals {
    /// Detected vocabulary entries, plus "SQL" when inferred.
    pub confirmed: Vec<String>,
    /// True when "SQL" was added by inference rather than found verbatim in
    /// the vocabulary scan.
    pub sql_inferred: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEstimate {
    pub project: ExtractedProject,
    pub estimate: Option<HeuristicProjectScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSignals {
    pub tech_stack: TechStackSignals,
    pub projects: Vec<ProjectEstimate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSignals {
    pub resume: ResumeSignals,
    pub job: ParsedJobInfo,
    pub processing_time_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectAiSignals {
    pub title: String,
    pub ai_keywords: Vec<String>,
}

/// Input for the project ranking prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankContext {
    pub projects: Vec<ProjectAiSignals>,
    pub role_buckets: Vec<String>,
}

impl RankContext {
    pub fn includes_ai_role(&self) -> bool {
        self.role_buckets.iter().any(|role| role == AI_ROLE)
    }
}

pub struct SignalAnalyzer {
    tech_detector: TechStackDetector,
    sql_rule: SqlInferenceRule,
    projects_extractor: ProjectsSectionExtractor,
    project_scorer: HeuristicProjectScorer,
    job_parser: JobPostingFieldParser,
    ai_detector: AIKeywordDetector,
    processing: ProcessingConfig,
}

impl SignalAnalyzer {
    pub fn new(processing: &ProcessingConfig) -> Result<Self> {
        Self::with_vocabulary(&Vocabulary::default(), processing)
    }

    pub fn with_vocabulary(vocabulary: &Vocabulary, processing: &ProcessingConfig) -> Result<Self> {
        Ok(Self {
            tech_detector: TechStackDetector::new(&vocabulary.tech_stack)?,
            sql_rule: SqlInferenceRule::new(&vocabulary.sql_databases),
            projects_extractor: ProjectsSectionExtractor::new(),
            project_scorer: HeuristicProjectScorer::new(vocabulary)?,
            job_parser: JobPostingFieldParser::new(),
            ai_detector: AIKeywordDetector::new(&vocabulary.ai_keywords)?,
            processing: processing.clone(),
        })
    }

    /// Run every extractor over a resume and a pasted job posting.
    pub fn analyze(&self, resume_text: &str, job_text: &str, job_url: Option<&str>) -> DocumentSignals {
        let start = Instant::now();
        info!("Extracting document signals");

        let resume = self.analyze_resume(resume_text);
        let job = self.parse_job(job_text, job_url);

        DocumentSignals {
            resume,
            job,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    pub fn analyze_resume(&self, resume_text: &str) -> ResumeSignals {
        let tech_stack = self.tech_stack(resume_text);
        let projects = self
            .extract_projects(resume_text)
            .into_iter()
            .map(|project| {
                let estimate = self
                    .processing
                    .include_estimates
                    .then(|| self.project_scorer.score(&project));
                ProjectEstimate { project, estimate }
            })
            .collect();

        ResumeSignals { tech_stack, projects }
    }

    pub fn tech_stack(&self, resume_text: &str) -> TechStackSignals {
        let detected = self.tech_detector.detect(resume_text);
        let already_listed = detected.iter().any(|tech| tech == SQL_LABEL);
        let confirmed = self.sql_rule.infer_sql(resume_text, &detected);
        let sql_inferred = !already_listed && confirmed.len() > detected.len();

        debug!("Confirmed {} technologies (SQL inferred: {})", confirmed.len(), sql_inferred);
        TechStackSignals { confirmed, sql_inferred }
    }

    /// Extracted projects, capped at the configured maximum.
    pub fn extract_projects(&self, resume_text: &str) -> Vec<ExtractedProject> {
        let mut projects = self.projects_extractor.extract(resume_text);
        if projects.len() > self.processing.max_projects {
            debug!("Keeping {} of {} projects", self.processing.max_projects, projects.len());
            projects.truncate(self.processing.max_projects);
        }
        projects
    }

    pub fn parse_job(&self, job_text: &str, job_url: Option<&str>) -> ParsedJobInfo {
        self.job_parser.parse(job_text, job_url)
    }

    /// AI keywords per project and the role buckets to rank against.
    ///
    /// The AI/LLM bucket is only offered when some project mentions AI work.
    pub fn rank_context(&self, projects: &[ExtractedProject]) -> RankContext {
        let projects: Vec<ProjectAiSignals> = projects
            .iter()
            .map(|project| ProjectAiSignals {
                title: project.title.clone(),
                ai_keywords: self.ai_detector.detect(&project.description),
            })
            .collect();

        let mut role_buckets: Vec<String> = ROLE_ARCHETYPES.iter().map(|r| r.to_string()).collect();
        if projects.iter().any(|p| !p.ai_keywords.is_empty()) {
            debug!("AI keywords found, adding '{}' bucket", AI_ROLE);
            role_buckets.push(AI_ROLE.to_string());
        }

        RankContext { projects, role_buckets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
                          Software Engineer\n\
                          \n\
                          SKILLS\n\
                          TypeScript, React, Supabase, Docker\n\
                          \n\
                          PROJECTS\n\
                          Recipe Finder | Next.js, OpenAI\n\
                          Recipe search powered by an LLM, deployed to production for 500 users.\n\
                          \n\
                          Budget Tracker | React, Node\n\
                          Built an expense tracker with charts and CSV export.\n\
                          \n\
                          EDUCATION\n\
                          BS Computer Science\n";

    fn analyzer() -> SignalAnalyzer {
        SignalAnalyzer::new(&ProcessingConfig::default()).unwrap()
    }

    #[test]
    fn test_full_pipeline() {
        let signals = analyzer().analyze(RESUME, "Frontend Engineer at Orbit\nShip UI.", None);

        assert!(signals.resume.tech_stack.confirmed.contains(&"Supabase".to_string()));
        assert!(signals.resume.tech_stack.confirmed.contains(&"SQL".to_string()));
        assert!(signals.resume.tech_stack.sql_inferred);

        assert_eq!(signals.resume.projects.len(), 2);
        assert_eq!(signals.resume.projects[0].project.title, "Recipe Finder");
        let estimate = signals.resume.projects[0].estimate.as_ref().unwrap();
        assert!(estimate.best_fit_roles.contains(&"AI/LLM Engineer".to_string()));

        assert_eq!(signals.job.job_title, "Frontend Engineer");
        assert_eq!(signals.job.company, "Orbit");
    }

    #[test]
    fn test_estimates_can_be_disabled() {
        let processing = ProcessingConfig {
            include_estimates: false,
            ..ProcessingConfig::default()
        };
        let analyzer = SignalAnalyzer::new(&processing).unwrap();
        let resume = analyzer.analyze_resume(RESUME);
        assert!(resume.projects.iter().all(|p| p.estimate.is_none()));
    }

    #[test]
    fn test_max_projects_cap() {
        let processing = ProcessingConfig {
            max_projects: 1,
            ..ProcessingConfig::default()
        };
        let analyzer = SignalAnalyzer::new(&processing).unwrap();
        assert_eq!(analyzer.extract_projects(RESUME).len(), 1);
    }

    #[test]
    fn test_rank_context_forces_ai_bucket() {
        let a = analyzer();
        let projects = a.extract_projects(RESUME);
        let context = a.rank_context(&projects);

        assert!(context.includes_ai_role());
        assert_eq!(context.projects[0].ai_keywords, vec!["llm", "openai"]);
        assert!(context.projects[1].ai_keywords.is_empty());
    }

    #[test]
    fn test_rank_context_without_ai() {
        let project = ExtractedProject {
            title: "Drag Board".to_string(),
            description: "Drag and drop kanban board in Vue".to_string(),
        };
        let context = analyzer().rank_context(&[project]);
        assert!(!context.includes_ai_role());
        assert_eq!(context.role_buckets.len(), ROLE_ARCHETYPES.len());
    }

    #[test]
    fn test_empty_inputs() {
        let signals = analyzer().analyze("", "", None);
        assert!(signals.resume.tech_stack.confirmed.is_empty());
        assert!(!signals.resume.tech_stack.sql_inferred);
        assert!(signals.resume.projects.is_empty());
        assert_eq!(signals.job.job_title, "Job Application");
    }
}
