//! Tech stack detection and SQL inference over resume text

use crate::error::Result;
use crate::processing::keyword_matcher::KeywordMatcher;
use crate::processing::vocabulary::SQL_LABEL;
use log::debug;

/// Finds which technologies of a vocabulary a resume mentions.
///
/// An entry is detected when its lower-cased name is a substring of the
/// lower-cased resume. There is no tokenization, so "Go" is found inside
/// "Google" and hyphenated spellings are missed.
pub struct TechStackDetector {
    matcher: KeywordMatcher,
}

impl TechStackDetector {
    pub fn new<S: AsRef<str>>(vocabulary: &[S]) -> Result<Self> {
        Ok(Self {
            matcher: KeywordMatcher::new(vocabulary)?,
        })
    }

    /// Detected subset of the vocabulary, in vocabulary order.
    pub fn detect(&self, resume_text: &str) -> Vec<String> {
        let detected = self.matcher.find_present(resume_text);
        debug!("Detected {} of {} stack entries", detected.len(), self.matcher.keywords().len());
        detected
    }
}

/// Infers SQL experience from SQL-flavoured databases and ORMs.
pub struct SqlInferenceRule {
    sql_databases: Vec<String>,
}

impl SqlInferenceRule {
    pub fn new<S: AsRef<str>>(sql_databases: &[S]) -> Self {
        Self {
            sql_databases: sql_databases.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// Whether the resume shows SQL experience.
    ///
    /// True when a listed database was detected or "sql" appears anywhere in
    /// the text. Both checks always run.
    pub fn has_sql(&self, resume_text: &str, detected: &[String]) -> bool {
        let via_database = detected.iter().any(|tech| self.sql_databases.contains(tech));
        let via_keyword = resume_text.to_lowercase().contains("sql");
        via_database || via_keyword
    }

    /// `detected` with "SQL" appended when inferred and not already listed.
    pub fn infer_sql(&self, resume_text: &str, detected: &[String]) -> Vec<String> {
        let mut result = detected.to_vec();
        if self.has_sql(resume_text, detected) && !result.iter().any(|t| t == SQL_LABEL) {
            debug!("Inferred SQL experience");
            result.push(SQL_LABEL.to_string());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::vocabulary::{SQL_DATABASES, TECH_STACK};

    fn detector() -> TechStackDetector {
        TechStackDetector::new(TECH_STACK).unwrap()
    }

    #[test]
    fn test_detects_in_vocabulary_order() {
        let resume = "Built services in Python and TypeScript. Deployed with docker on aws.";
        let detected = detector().detect(resume);
        assert_eq!(detected, vec!["TypeScript", "Python", "Docker", "AWS"]);
    }

    #[test]
    fn test_detect_is_idempotent() {
        let resume = "React Native, Expo, Supabase";
        let d = detector();
        assert_eq!(d.detect(resume), d.detect(resume));
    }

    #[test]
    fn test_known_false_positive_is_preserved() {
        let detected = detector().detect("Interned at Google");
        assert!(detected.contains(&"Go".to_string()));
    }

    #[test]
    fn test_supabase_alone_infers_sql() {
        let resume = "Side project backed by Supabase";
        let detected = detector().detect(resume);
        assert!(!resume.to_lowercase().contains("sql"));

        let rule = SqlInferenceRule::new(SQL_DATABASES);
        let with_sql = rule.infer_sql(resume, &detected);
        assert!(with_sql.contains(&"SQL".to_string()));
    }

    #[test]
    fn test_literal_sql_keyword_infers_sql() {
        let rule = SqlInferenceRule::new(SQL_DATABASES);
        let result = rule.infer_sql("Wrote complex sql queries", &[]);
        assert_eq!(result, vec!["SQL"]);
    }

    #[test]
    fn test_sql_not_duplicated() {
        let rule = SqlInferenceRule::new(SQL_DATABASES);
        let detected = vec!["PostgreSQL".to_string(), "SQL".to_string()];
        let result = rule.infer_sql("PostgreSQL", &detected);
        assert_eq!(result, detected);
    }

    #[test]
    fn test_no_sql_signal() {
        let rule = SqlInferenceRule::new(SQL_DATABASES);
        let detected = vec!["MongoDB".to_string()];
        assert_eq!(rule.infer_sql("MongoDB and Redis", &detected), detected);
    }

    #[test]
    fn test_empty_resume() {
        assert!(detector().detect("").is_empty());
        assert!(SqlInferenceRule::new(SQL_DATABASES).infer_sql("", &[]).is_empty());
    }
}
