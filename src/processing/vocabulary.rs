//! Fixed keyword vocabularies used by the signal extractors
//!
//! Every list is plain data. Detectors take the slice they need at
//! construction, so a caller can swap any of them out.

use serde::{Deserialize, Serialize};

/// Canonical technology names scanned for in resume text.
pub const TECH_STACK: &[&str] = &[
    // Frontend
    "React", "React Native", "Next.js", "Vue", "Angular", "Svelte", "Tailwind",
    "TypeScript", "JavaScript", "HTML", "CSS", "Redux",
    // Backend
    "Node.js", "Express", "NestJS", "Python", "Django", "Flask", "FastAPI",
    "Java", "Spring", "Go", "Rust", "C++", "C#", ".NET", "Ruby", "Rails", "PHP",
    "GraphQL", "REST",
    // Mobile
    "Swift", "Kotlin", "Flutter", "Expo",
    // Data stores
    "PostgreSQL", "MySQL", "SQLite", "MongoDB", "Redis", "DynamoDB",
    "Supabase", "Firebase", "Prisma", "Drizzle",
    // Infrastructure
    "Docker", "Kubernetes", "AWS", "GCP", "Azure", "Vercel", "Terraform",
    "Git", "CI/CD", "Linux",
    // AI / data
    "OpenAI", "LangChain", "TensorFlow", "PyTorch", "Pandas", "Spark", "Kafka",
];

/// Database and ORM names that imply hands-on SQL experience.
pub const SQL_DATABASES: &[&str] = &["PostgreSQL", "MySQL", "SQLite", "Supabase", "Prisma", "Drizzle"];

/// Technology keywords counted towards a project's tech breadth.
pub const SCORER_TECH: &[&str] = &[
    "react", "next", "vue", "angular", "svelte", "node", "express", "typescript",
    "javascript", "python", "django", "flask", "fastapi", "java", "rust", "swift",
    "kotlin", "flutter", "react native", "expo", "postgresql", "mysql", "mongodb",
    "redis", "supabase", "firebase", "prisma", "graphql", "docker", "kubernetes",
    "aws", "gcp", "azure", "vercel", "tailwind", "openai", "langchain",
    "tensorflow", "pytorch", "websocket",
];

/// Language that signals real-world impact.
pub const IMPACT_KEYWORDS: &[&str] = &[
    "production", "real-time", "deployed", "users", "scale", "optimization", "reduced", "improved",
];

/// Technology considered modern or advanced; any one of them earns a flat bonus.
pub const ADVANCED_TECH: &[&str] = &[
    "ai", "ml", "openai", "websocket", "vector", "graphql", "docker", "kubernetes",
];

/// AI and LLM keywords. Single words are matched on word boundaries.
pub const AI_KEYWORDS: &[&str] = &[
    "ai", "llm", "llms", "gpt", "openai", "claude", "anthropic", "gemini",
    "langchain", "llamaindex", "rag", "embeddings", "chatbot", "nlp",
    "transformer", "transformers", "fine-tuning", "agent", "agents",
    "vector database", "machine learning", "deep learning", "prompt engineering",
    "hugging face", "neural network", "computer vision", "large language model",
];

/// Label attached to the SQL skill when it is inferred.
pub const SQL_LABEL: &str = "SQL";

/// The complete set of vocabularies handed to the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub tech_stack: Vec<String>,
    pub sql_databases: Vec<String>,
    pub scorer_tech: Vec<String>,
    pub impact_keywords: Vec<String>,
    pub advanced_tech: Vec<String>,
    pub ai_keywords: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            tech_stack: to_owned(TECH_STACK),
            sql_databases: to_owned(SQL_DATABASES),
            scorer_tech: to_owned(SCORER_TECH),
            impact_keywords: to_owned(IMPACT_KEYWORDS),
            advanced_tech: to_owned(ADVANCED_TECH),
            ai_keywords: to_owned(AI_KEYWORDS),
        }
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}
