//! Heuristic document signal extraction

pub mod vocabulary;
pub mod keyword_matcher;
pub mod tech_stack;
pub mod projects;
pub mod project_scorer;
pub mod job_parser;
pub mod ai_keywords;
pub mod analyzer;
