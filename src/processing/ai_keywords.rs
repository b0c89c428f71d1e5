//! AI/LLM keyword detection in project descriptions

use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Outcome of checking one vocabulary keyword against a description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AIKeywordMatch {
    pub keyword: String,
    pub matched: bool,
}

/// How a keyword is looked for.
///
/// Phrases are plain substrings; single words must sit on word boundaries so
/// that "rag" is not found inside "drag".
enum KeywordRule {
    Phrase(String),
    Word(Regex),
}

impl KeywordRule {
    fn is_match(&self, lowered: &str, original: &str) -> bool {
        match self {
            KeywordRule::Phrase(phrase) => lowered.contains(phrase.as_str()),
            KeywordRule::Word(regex) => regex.is_match(original),
        }
    }
}

pub struct AIKeywordDetector {
    keywords: Vec<(String, KeywordRule)>,
}

impl AIKeywordDetector {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(keywords.len());

        for keyword in keywords {
            let keyword: &str = keyword.as_ref();
            let rule = if keyword.trim().contains(char::is_whitespace) {
                KeywordRule::Phrase(keyword.to_lowercase())
            } else {
                KeywordRule::Word(Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword)))?)
            };
            compiled.push((keyword.to_string(), rule));
        }

        Ok(Self { keywords: compiled })
    }

    /// Keywords found in the description, in vocabulary order.
    pub fn detect(&self, description: &str) -> Vec<String> {
        self.matches(description)
            .into_iter()
            .filter(|m| m.matched)
            .map(|m| m.keyword)
            .collect()
    }

    /// One entry per vocabulary keyword.
    pub fn matches(&self, description: &str) -> Vec<AIKeywordMatch> {
        let lowered = description.to_lowercase();
        self.keywords
            .iter()
            .map(|(keyword, rule)| AIKeywordMatch {
                keyword: keyword.clone(),
                matched: rule.is_match(&lowered, description),
            })
            .collect()
    }

    pub fn mentions_ai(&self, description: &str) -> bool {
        let lowered = description.to_lowercase();
        self.keywords.iter().any(|(_, rule)| rule.is_match(&lowered, description))
    }
}
