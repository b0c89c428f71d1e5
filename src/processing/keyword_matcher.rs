//! Case-insensitive substring presence matching over a keyword list

use crate::error::Result;
use aho_corasick::AhoCorasick;
use std::collections::HashMap;

/// Reports which keywords of a fixed list occur anywhere in a text.
///
/// Matching is equivalent to `text.to_lowercase().contains(&keyword.to_lowercase())`
/// for every keyword, done in one pass. Keywords that differ only in case share
/// a pattern.
pub struct KeywordMatcher {
    matcher: AhoCorasick,
    keywords: Vec<String>,
    pattern_of: Vec<usize>,
    pattern_count: usize,
}

impl KeywordMatcher {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self> {
        let mut patterns: Vec<String> = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut pattern_of = Vec::with_capacity(keywords.len());

        for keyword in keywords {
            let keyword: &str = keyword.as_ref();
            let lowered = keyword.to_lowercase();
            let id = *seen.entry(lowered.clone()).or_insert_with(|| {
                patterns.push(lowered);
                patterns.len() - 1
            });
            pattern_of.push(id);
        }

        // Standard match semantics are required for overlapping search, which
        // lets "react" and "react native" both register on the same span.
        let matcher = AhoCorasick::builder().build(&patterns)?;

        Ok(Self {
            matcher,
            keywords: keywords.iter().map(|k| k.as_ref().to_string()).collect(),
            pattern_of,
            pattern_count: patterns.len(),
        })
    }

    /// Presence flag for each keyword, in keyword order.
    pub fn presence(&self, text: &str) -> Vec<bool> {
        let lowered = text.to_lowercase();
        let mut found = vec![false; self.pattern_count];
        let mut remaining = self.pattern_count;

        for mat in self.matcher.find_overlapping_iter(&lowered) {
            let id = mat.pattern().as_usize();
            if !found[id] {
                found[id] = true;
                remaining -= 1;
                if remaining == 0 {
                    break;
                }
            }
        }

        self.pattern_of.iter().map(|&id| found[id]).collect()
    }

    /// Keywords present in the text, in keyword order.
    pub fn find_present(&self, text: &str) -> Vec<String> {
        self.presence(text)
            .into_iter()
            .zip(&self.keywords)
            .filter(|(present, _)| *present)
            .map(|(_, keyword)| keyword.clone())
            .collect()
    }

    pub fn count_present(&self, text: &str) -> usize {
        self.presence(text).into_iter().filter(|p| *p).count()
    }

    pub fn any_present(&self, text: &str) -> bool {
        self.presence(text).into_iter().any(|p| p)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}
