//! Extraction of discrete projects from a resume's PROJECTS section

use regex::Regex;
use serde::{Deserialize, Serialize};
use log::debug;

/// A project found in the resume, before any scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedProject {
    pub title: String,
    pub description: String,
}

/// Blocks shorter than this (trimmed) are treated as noise.
const MIN_BLOCK_CHARS: usize = 20;
/// A block's body must be strictly longer than this.
const MIN_BODY_CHARS: usize = 30;

pub struct ProjectsSectionExtractor {
    heading_regex: Regex,
    section_boundary_regex: Regex,
}

impl Default for ProjectsSectionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectsSectionExtractor {
    pub fn new() -> Self {
        let heading_regex = Regex::new(r"(?i)^\s*(?:projects?|portfolio)\b")
            .expect("Invalid projects heading regex");

        // Any other heading: a trimmed line opening with 3+ capitals or spaces.
        let section_boundary_regex = Regex::new(r"^[A-Z][A-Z ]{2,}")
            .expect("Invalid section boundary regex");

        Self {
            heading_regex,
            section_boundary_regex,
        }
    }

    /// Projects listed under the first PROJECTS/Portfolio heading.
    ///
    /// Returns an empty list when the resume has no such heading.
    pub fn extract(&self, resume_text: &str) -> Vec<ExtractedProject> {
        let section = match self.find_section(resume_text) {
            Some(section) => section,
            None => {
                debug!("No projects heading found");
                return Vec::new();
            }
        };

        let projects: Vec<ExtractedProject> = split_blocks(&section)
            .into_iter()
            .filter_map(|block| parse_block(&block))
            .collect();

        debug!("Extracted {} projects from {} section lines", projects.len(), section.len());
        projects
    }

    /// Lines between the projects heading and the next capitalised heading.
    fn find_section<'a>(&self, text: &'a str) -> Option<Vec<&'a str>> {
        let mut lines = text.lines();
        lines.by_ref().find(|line| self.heading_regex.is_match(line))?;

        Some(
            lines
                .take_while(|line| !self.section_boundary_regex.is_match(line.trim()))
                .collect(),
        )
    }
}

fn split_blocks<'a>(lines: &[&'a str]) -> Vec<Vec<&'a str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in lines {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(*line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

fn parse_block(block: &[&str]) -> Option<ExtractedProject> {
    if block.join("\n").trim().chars().count() < MIN_BLOCK_CHARS {
        return None;
    }

    let mut lines = block.iter().map(|line| line.trim()).filter(|line| !line.is_empty());
    let title_line = lines.next()?;
    let title = title_line.split('|').next().unwrap_or(title_line).trim();

    let body = lines.collect::<Vec<_>>().join("\n");
    if body.chars().count() <= MIN_BODY_CHARS {
        return None;
    }

    Some(ExtractedProject {
        title: title.to_string(),
        description: format!("{}\n{}", title_line, body),
    })
}
