pub mod ai_providers;
pub mod analysis_orchestrator;
pub mod report_store;
pub mod response_decoder;
pub mod upload_validator;
