pub mod ui_language;
pub mod complexity;
pub mod upload_error_kind;
pub mod ai_provider_error;
pub mod commands;
