//! Prompt construction for the external LLM calls

pub mod prompts;
