//! Input manager for handling different file types

use crate::error::{PivotError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::collections::HashMap;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    markdown: MarkdownExtractor,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
            markdown: MarkdownExtractor::new(),
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(PivotError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = FileType::from_path(path).ok_or_else(|| {
            PivotError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                self.markdown.extract(path).await?
            }
            FileType::Unknown => {
                return Err(PivotError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    /// Like `extract_text`, but `-` reads all of standard input.
    ///
    /// Pasted job postings are usually piped in rather than saved to a file.
    pub async fn extract_text_or_stdin(&mut self, path: &Path) -> Result<String> {
        if path.as_os_str() == STDIN_PATH {
            info!("Reading text from stdin");
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            return Ok(text);
        }
        self.extract_text(path).await
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
