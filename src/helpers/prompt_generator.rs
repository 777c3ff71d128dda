use crate::prompts::code_review_prompt::{
    CODE_LENGTH_PLACEHOLDER, CODE_PLACEHOLDER, CODE_REVIEW_PROMPT, FILE_NAME_PLACEHOLDER,
    RESPONSE_LANGUAGE_PLACEHOLDER, TARGET_LANGUAGE_PLACEHOLDER,
};
use crate::structs::analysis_request::AnalysisRequest;

pub fn generate_review_prompt(request: &AnalysisRequest) -> String {
    // The code goes in last so placeholders inside the uploaded file stay untouched.
    CODE_REVIEW_PROMPT
        .replace(FILE_NAME_PLACEHOLDER, &request.file_name)
        .replace(TARGET_LANGUAGE_PLACEHOLDER, &request.target_language)
        .replace(CODE_LENGTH_PLACEHOLDER, &request.code_length().to_string())
        .replace(RESPONSE_LANGUAGE_PLACEHOLDER, request.ui_language.display_name())
        .replace(CODE_PLACEHOLDER, &request.code)
}
