use crate::enums::complexity::Complexity;
use crate::enums::ui_language::UiLanguage;
use crate::structs::analysis_result::{AnalysisResult, Feedback, Statistics};

pub const PLACEHOLDER_OVERALL_EN: &str = "This is a demo analysis. Configure Groq API for detailed code reviews.";
pub const PLACEHOLDER_OVERALL_NL: &str = "Dit is een demo analyse. Configureer Groq API voor gedetailleerde code reviews.";

fn pick(language: UiLanguage, english: &str, dutch: &str) -> String {
    if language.is_english() { english } else { dutch }.to_string()
}

/// Fixed result returned whenever no model reply can be used. The code is echoed back unchanged.
pub fn generate_placeholder_analysis(code: &str, language: UiLanguage) -> AnalysisResult {
    let l = language;

    AnalysisResult {
        improved_code: code.to_string(),
        feedback: Feedback {
            overall: pick(l, PLACEHOLDER_OVERALL_EN, PLACEHOLDER_OVERALL_NL),
            strengths: vec![
                pick(l, "Code structure is readable", "Code structuur is leesbaar"),
                pick(l, "Good variable naming", "Goede variabele namen"),
            ],
            improvements: vec![
                pick(l, "Add error handling", "Voeg foutafhandeling toe"),
                pick(l, "Use const instead of let where possible", "Gebruik const in plaats van let waar mogelijk"),
                pick(l, "Split large functions into smaller ones", "Splits grote functies in kleinere"),
            ],
            best_practices: vec![
                pick(l, "Add comments for complex logic", "Voeg commentaar toe voor complexe logica"),
                pick(l, "Follow consistent code style", "Houd consistente code stijl aan"),
                pick(l, "Use modern language features", "Gebruik moderne taal features"),
            ],
            security: vec![pick(l, "Implement input validation", "Implementeer input validatie")],
            performance: vec![pick(l, "Optimize database queries", "Optimaliseer database queries")],
        },
        statistics: Statistics {
            complexity: Complexity::Medium,
            readability: "7".to_string(),
            maintainability: "6".to_string(),
            efficiency: "5".to_string(),
        },
        analysis_time: "0s".to_string(),
        ai_enabled: false,
        ai_attempted: false,
    }
}
