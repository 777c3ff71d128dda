use crate::enums::ui_language::UiLanguage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub code: String,
    pub file_name: String,
    pub ui_language: UiLanguage,
    pub target_language: String,
}

impl AnalysisRequest {
    pub fn new(code: String, file_name: String, ui_language: UiLanguage, target_language: String) -> Self {
        Self {
            code,
            file_name,
            ui_language,
            target_language,
        }
    }

    /// Length of the code in characters, as reported to the model.
    pub fn code_length(&self) -> usize {
        self.code.chars().count()
    }
}
