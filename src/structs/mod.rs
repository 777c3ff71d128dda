pub mod ai;
pub mod cli;
pub mod config;
pub mod analysis_request;
pub mod analysis_result;
pub mod report;
