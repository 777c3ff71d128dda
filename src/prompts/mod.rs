pub mod code_review_system_prompt;
pub mod code_review_prompt;
