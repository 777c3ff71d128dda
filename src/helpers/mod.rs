pub mod config_helper;
pub mod file_helper;
pub mod labels;
pub mod placeholder_analysis;
pub mod prompt_generator;
