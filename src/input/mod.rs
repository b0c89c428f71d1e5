//! Input processing module
//! Reads resume and job posting text from files or stdin

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
