use crate::enums::ui_language::UiLanguage;

/// Fixed user-facing strings of the report and upload pages.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub title: &'static str,
    pub upload_heading: &'static str,
    pub choose_file: &'static str,
    pub target_language: &'static str,
    pub report_language: &'static str,
    pub analyze_button: &'static str,
    pub allowed_types: &'static str,
    pub report_for: &'static str,
    pub overall: &'static str,
    pub strengths: &'static str,
    pub improvements: &'static str,
    pub best_practices: &'static str,
    pub security: &'static str,
    pub performance: &'static str,
    pub statistics: &'static str,
    pub complexity: &'static str,
    pub readability: &'static str,
    pub maintainability: &'static str,
    pub efficiency: &'static str,
    pub analysis_time: &'static str,
    pub original_code: &'static str,
    pub improved_code: &'static str,
    pub ai_enabled: &'static str,
    pub ai_disabled: &'static str,
    pub ai_fallback: &'static str,
    pub new_analysis: &'static str,
    pub error_heading: &'static str,
    pub back_home: &'static str,
    pub page_not_found: &'static str,
    pub report_not_found: &'static str,
    pub report_load_error: &'static str,
    pub internal_error: &'static str,
}

const DUTCH: Labels = Labels {
    title: "AI Code Analyzer",
    upload_heading: "Upload je code voor een analyse",
    choose_file: "Kies een bestand",
    target_language: "Programmeertaal",
    report_language: "Taal van het rapport",
    analyze_button: "Analyseer code",
    allowed_types: "Toegestane bestanden",
    report_for: "Rapport voor",
    overall: "Algemeen oordeel",
    strengths: "Sterke punten",
    improvements: "Verbeterpunten",
    best_practices: "Best practices",
    security: "Beveiliging",
    performance: "Performance",
    statistics: "Statistieken",
    complexity: "Complexiteit",
    readability: "Leesbaarheid",
    maintainability: "Onderhoudbaarheid",
    efficiency: "Efficiëntie",
    analysis_time: "Analysetijd",
    original_code: "Originele code",
    improved_code: "Verbeterde code",
    ai_enabled: "AI analyse",
    ai_disabled: "Demo analyse (geen AI)",
    ai_fallback: "AI niet beschikbaar, demo analyse getoond",
    new_analysis: "Nieuwe analyse",
    error_heading: "Er is een fout opgetreden",
    back_home: "Terug naar start",
    page_not_found: "Pagina niet gevonden",
    report_not_found: "Rapport niet gevonden",
    report_load_error: "Fout bij laden rapport",
    internal_error: "Interne server fout",
};

const ENGLISH: Labels = Labels {
    title: "AI Code Analyzer",
    upload_heading: "Upload your code for an analysis",
    choose_file: "Choose a file",
    target_language: "Programming language",
    report_language: "Report language",
    analyze_button: "Analyze code",
    allowed_types: "Allowed files",
    report_for: "Report for",
    overall: "Overall assessment",
    strengths: "Strengths",
    improvements: "Improvements",
    best_practices: "Best practices",
    security: "Security",
    performance: "Performance",
    statistics: "Statistics",
    complexity: "Complexity",
    readability: "Readability",
    maintainability: "Maintainability",
    efficiency: "Efficiency",
    analysis_time: "Analysis time",
    original_code: "Original code",
    improved_code: "Improved code",
    ai_enabled: "AI analysis",
    ai_disabled: "Demo analysis (no AI)",
    ai_fallback: "AI unavailable, showing demo analysis",
    new_analysis: "New analysis",
    error_heading: "An error occurred",
    back_home: "Back to start",
    page_not_found: "Page not found",
    report_not_found: "Report not found",
    report_load_error: "Error loading report",
    internal_error: "Internal server error",
};

pub fn labels(language: UiLanguage) -> &'static Labels {
    match language {
        UiLanguage::Nl => &DUTCH,
        UiLanguage::En => &ENGLISH,
    }
}
