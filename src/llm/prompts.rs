//! Prompt templates and the context fragments appended to them
//!
//! The completion call itself is made elsewhere; this module only turns
//! extracted signals into prompt text.

use crate::processing::analyzer::{DocumentSignals, ProjectEstimate, RankContext, TechStackSignals};
use crate::processing::job_parser::ParsedJobInfo;
use crate::processing::projects::ExtractedProject;
use crate::processing::vocabulary::SQL_LABEL;
use log::debug;

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub compatibility_analysis: String,
    pub project_ranking: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            compatibility_analysis: COMPATIBILITY_ANALYSIS_TEMPLATE.to_string(),
            project_ranking: PROJECT_RANKING_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    /// Compatibility analysis prompt for a resume against a parsed posting.
    pub fn render_compatibility_analysis(&self, resume_text: &str, signals: &DocumentSignals) -> String {
        let mut context = tech_stack_hint(&signals.resume.tech_stack);
        let estimates = project_estimates_hint(&signals.resume.projects);
        if !estimates.is_empty() {
            context.push_str("\n\n");
            context.push_str(&estimates);
        }

        let prompt = self
            .compatibility_analysis
            .replace("{job_header}", &job_header(&signals.job))
            .replace("{job}", &signals.job.job_description)
            .replace("{resume}", resume_text)
            .replace("{context}", &context);

        debug!("Rendered compatibility prompt ({} chars)", prompt.len());
        prompt
    }

    /// Ranking prompt scoring each project against the role buckets.
    pub fn render_project_ranking(&self, projects: &[ExtractedProject], context: &RankContext) -> String {
        let project_list = projects
            .iter()
            .enumerate()
            .map(|(i, project)| format!("{}. {}\n{}", i + 1, project.title, project.description))
            .collect::<Vec<_>>()
            .join("\n\n");

        let roles = context
            .role_buckets
            .iter()
            .map(|role| format!("- {}", role))
            .collect::<Vec<_>>()
            .join("\n");

        let prompt = self
            .project_ranking
            .replace("{projects}", &project_list)
            .replace("{roles}", &roles);

        debug!("Rendered ranking prompt ({} chars, {} roles)", prompt.len(), context.role_buckets.len());
        prompt
    }
}

/// Skills confirmed present, so the model does not report them as missing.
pub fn tech_stack_hint(tech: &TechStackSignals) -> String {
    if tech.confirmed.is_empty() {
        return "CONFIRMED SKILLS: none detected automatically. Judge skills from the resume text only.".to_string();
    }

    let mut hint = format!(
        "CONFIRMED SKILLS (present in the resume): {}.\nDo NOT list any of these as missing skills.",
        tech.confirmed.join(", ")
    );
    if tech.sql_inferred {
        hint.push_str(&format!(
            "\n{} experience is confirmed through the SQL databases/ORMs listed above.",
            SQL_LABEL
        ));
    }
    hint
}

/// Heuristic project estimates, explicitly marked as estimates.
///
/// Empty when no project carries an estimate.
pub fn project_estimates_hint(projects: &[ProjectEstimate]) -> String {
    let lines: Vec<String> = projects
        .iter()
        .filter_map(|p| p.estimate.as_ref())
        .map(|estimate| {
            format!(
                "- {}: ~{:.1}/10 (likely fit: {})",
                estimate.title,
                estimate.avg_score,
                estimate.best_fit_roles.join(", ")
            )
        })
        .collect();

    if lines.is_empty() {
        return String::new();
    }

    format!(
        "AUTO-DETECTED PROJECTS (rough heuristic estimates, not a full ranking):\n{}",
        lines.join("\n")
    )
}

pub fn job_header(job: &ParsedJobInfo) -> String {
    if job.company.is_empty() {
        job.job_title.clone()
    } else {
        format!("{} at {}", job.job_title, job.company)
    }
}

const COMPATIBILITY_ANALYSIS_TEMPLATE: &str = r#"TASK: Analyze how well the candidate's resume fits the target role and explain how they could pivot into it.

<JOB POSTING: {job_header}>
{job}
</JOB POSTING>

<RESUME>
{resume}
</RESUME>

<CONTEXT>
{context}
</CONTEXT>

Respond with:
1. A compatibility score from 0 to 100.
2. The strongest matching skills and experiences.
3. Genuine skill gaps. Only list skills that are absent from the resume.
4. Concrete steps to close each gap.

IMPORTANT: Reference the actual resume content above, not generic advice."#;

const PROJECT_RANKING_TEMPLATE: &str = r#"TASK: Rate each side project below for every role archetype on a 1-10 scale.

<PROJECTS>
{projects}
</PROJECTS>

<ROLES>
{roles}
</ROLES>

For each project give a score per role, an average score, the best fitting roles and one sentence on how to strengthen it."#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::{ResumeSignals, AI_ROLE};
    use crate::processing::project_scorer::HeuristicProjectScore;

    fn signals() -> DocumentSignals {
        DocumentSignals {
            resume: ResumeSignals {
                tech_stack: TechStackSignals {
                    confirmed: vec!["React".to_string(), "Supabase".to_string(), "SQL".to_string()],
                    sql_inferred: true,
                },
                projects: vec![ProjectEstimate {
                    project: ExtractedProject {
                        title: "Budget Tracker".to_string(),
                        description: "Budget Tracker | React\nExpense tracking web app.".to_string(),
                    },
                    estimate: Some(HeuristicProjectScore {
                        title: "Budget Tracker".to_string(),
                        avg_score: 6.2,
                        best_fit_roles: vec!["Full-Stack Engineer".to_string()],
                    }),
                }],
            },
            job: ParsedJobInfo {
                job_title: "Frontend Engineer".to_string(),
                company: "Orbit".to_string(),
                job_description: "Ship delightful UI.".to_string(),
            },
            processing_time_ms: 1,
        }
    }

    #[test]
    fn test_compatibility_prompt_contains_all_context() {
        let prompt = PromptTemplates::default().render_compatibility_analysis("RESUME BODY", &signals());

        assert!(prompt.contains("<JOB POSTING: Frontend Engineer at Orbit>"));
        assert!(prompt.contains("Ship delightful UI."));
        assert!(prompt.contains("RESUME BODY"));
        assert!(prompt.contains("CONFIRMED SKILLS (present in the resume): React, Supabase, SQL."));
        assert!(prompt.contains("SQL experience is confirmed"));
        assert!(prompt.contains("- Budget Tracker: ~6.2/10 (likely fit: Full-Stack Engineer)"));
        assert!(!prompt.contains("{context}"));
    }

    #[test]
    fn test_hints_when_nothing_detected() {
        let tech = TechStackSignals {
            confirmed: vec![],
            sql_inferred: false,
        };
        assert!(tech_stack_hint(&tech).contains("none detected"));
        assert!(project_estimates_hint(&[]).is_empty());
    }

    #[test]
    fn test_job_header_without_company() {
        let job = ParsedJobInfo {
            job_title: "Job Application".to_string(),
            company: String::new(),
            job_description: String::new(),
        };
        assert_eq!(job_header(&job), "Job Application");
    }

    #[test]
    fn test_ranking_prompt_lists_roles() {
        let projects = vec![ExtractedProject {
            title: "Chat App".to_string(),
            description: "Chat App | OpenAI\nRAG chat over docs.".to_string(),
        }];
        let context = RankContext {
            projects: vec![],
            role_buckets: vec!["Backend Engineer".to_string(), AI_ROLE.to_string()],
        };

        let prompt = PromptTemplates::default().render_project_ranking(&projects, &context);
        assert!(prompt.contains("1. Chat App\nChat App | OpenAI"));
        assert!(prompt.contains("- Backend Engineer\n- AI/LLM Engineer"));
    }
}
