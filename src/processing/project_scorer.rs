//! Heuristic quality estimate for extracted projects
//!
//! This is a cheap stand-in for the LLM-backed ranking flow. Scores produced
//! here are estimates and are labelled as such wherever they are shown.

use crate::error::Result;
use crate::processing::keyword_matcher::KeywordMatcher;
use crate::processing::projects::ExtractedProject;
use crate::processing::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};

pub const BASE_SCORE: f64 = 5.0;
pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;

const TECH_DIVISOR: f64 = 5.0;
const TECH_CAP: f64 = 2.0;
const IMPACT_DIVISOR: f64 = 3.0;
const IMPACT_CAP: f64 = 2.0;
const ADVANCED_BONUS: f64 = 1.0;

pub const DEFAULT_ROLE: &str = "Software Engineer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeuristicProjectScore {
    pub title: String,
    pub avg_score: f64,
    pub best_fit_roles: Vec<String>,
}

/// A role label and the description signals that suggest it.
#[derive(Debug, Clone, Copy)]
pub struct RoleSignal {
    pub role: &'static str,
    pub any_of: &'static [&'static str],
}

/// Role signals in the order roles are appended.
pub const ROLE_SIGNALS: &[RoleSignal] = &[
    RoleSignal { role: "Full-Stack Engineer", any_of: &["react", "next", "vue"] },
    RoleSignal { role: "Mobile Engineer", any_of: &["react native", "expo"] },
    RoleSignal { role: "Backend Engineer", any_of: &["api", "backend", "database"] },
    RoleSignal { role: "AI/LLM Engineer", any_of: &["openai", "claude", "llm"] },
    RoleSignal { role: "Data Engineer", any_of: &["data pipeline", "etl"] },
    RoleSignal { role: "ML Engineer", any_of: &["ml", "model"] },
];

pub struct HeuristicProjectScorer {
    tech: KeywordMatcher,
    impact: KeywordMatcher,
    advanced: KeywordMatcher,
}

impl HeuristicProjectScorer {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        Ok(Self {
            tech: KeywordMatcher::new(&vocabulary.scorer_tech)?,
            impact: KeywordMatcher::new(&vocabulary.impact_keywords)?,
            advanced: KeywordMatcher::new(&vocabulary.advanced_tech)?,
        })
    }

    pub fn score(&self, project: &ExtractedProject) -> HeuristicProjectScore {
        let description = &project.description;

        let tech_count = self.tech.count_present(description) as f64;
        let impact_count = self.impact.count_present(description) as f64;
        let has_advanced = self.advanced.any_present(description);

        let mut score = BASE_SCORE;
        score += (tech_count / TECH_DIVISOR).min(TECH_CAP);
        score += (impact_count / IMPACT_DIVISOR).min(IMPACT_CAP);
        if has_advanced {
            score += ADVANCED_BONUS;
        }

        HeuristicProjectScore {
            title: project.title.clone(),
            avg_score: round_one_decimal(score.clamp(MIN_SCORE, MAX_SCORE)),
            best_fit_roles: infer_roles(description),
        }
    }
}

/// Role labels suggested by a project description.
///
/// Never empty: falls back to "Software Engineer".
pub fn infer_roles(description: &str) -> Vec<String> {
    let lowered = description.to_lowercase();
    let roles: Vec<String> = ROLE_SIGNALS
        .iter()
        .filter(|signal| signal.any_of.iter().any(|kw| lowered.contains(kw)))
        .map(|signal| signal.role.to_string())
        .collect();

    if roles.is_empty() {
        vec![DEFAULT_ROLE.to_string()]
    } else {
        roles
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> HeuristicProjectScorer {
        HeuristicProjectScorer::new(&Vocabulary::default()).unwrap()
    }

    fn project(description: &str) -> ExtractedProject {
        ExtractedProject {
            title: "Test Project".to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_plain_description_scores_base() {
        let score = scorer().score(&project("A small notebook of recipes for the family"));
        assert_eq!(score.avg_score, 5.0);
        assert_eq!(score.best_fit_roles, vec!["Software Engineer"]);
    }

    #[test]
    fn test_rich_description_hits_the_ceiling() {
        let description = "Production react + typescript app with tailwind, python fastapi backend, \
                           postgresql, redis, docker and kubernetes. Deployed to aws and vercel, \
                           real-time updates for 10k users at scale; reduced latency, \
                           improved optimization.";
        let score = scorer().score(&project(description));
        assert_eq!(score.avg_score, 10.0);
    }

    #[test]
    fn test_partial_contributions_round_to_one_decimal() {
        // python, flask: 2 tech -> 0.4; deployed: 1 impact -> 0.333..
        let score = scorer().score(&project("Flask site in python, deployed on a tiny server"));
        assert_eq!(score.avg_score, 5.7);
    }

    #[test]
    fn test_repeated_impact_keyword_counts_once() {
        let s = scorer();
        // 1 distinct impact keyword -> 0.333..
        assert_eq!(s.score(&project("users users users")).avg_score, 5.3);
        // 3 distinct -> 1.0
        assert_eq!(s.score(&project("users at scale in production")).avg_score, 6.0);
    }

    #[test]
    fn test_score_is_monotonic_in_tech_keywords() {
        let s = scorer();
        let mut description = String::from("Weekend project");
        let mut previous = s.score(&project(&description)).avg_score;
        for tech in ["react", "python", "redis", "docker", "rust", "swift", "kotlin", "vercel", "prisma", "expo", "tailwind", "mongodb"] {
            description.push(' ');
            description.push_str(tech);
            let current = s.score(&project(&description)).avg_score;
            assert!(current >= previous, "{} dropped below {}", current, previous);
            previous = current;
        }
    }

    #[test]
    fn test_score_bounds() {
        let s = scorer();
        for description in ["", "x", "ai ml openai websocket vector graphql docker kubernetes production users scale"] {
            let score = s.score(&project(description)).avg_score;
            assert!((MIN_SCORE..=MAX_SCORE).contains(&score));
        }
    }

    #[test]
    fn test_role_inference() {
        let roles = infer_roles("React Native app built with Expo talking to a REST API");
        assert_eq!(roles, vec!["Full-Stack Engineer", "Mobile Engineer", "Backend Engineer"]);

        let roles = infer_roles("ETL data pipeline serving an API over an OpenAI model");
        assert_eq!(
            roles,
            vec!["Backend Engineer", "AI/LLM Engineer", "Data Engineer", "ML Engineer"]
        );
    }

    #[test]
    fn test_title_is_carried_over() {
        let score = scorer().score(&project("anything"));
        assert_eq!(score.title, "Test Project");
    }
}
