use terminal_size::{terminal_size, Width};
use crate::enums::ui_language::UiLanguage;
use crate::helpers::labels::labels;
use crate::structs::report::Report;

const DEFAULT_WIDTH: usize = 80;
const MAX_WIDTH: usize = 100;
const BULLET: &str = "  • ";
const INDENT: &str = "    ";

pub struct ReportLogger {}

impl ReportLogger {
    fn line_width() -> usize {
        terminal_size()
            .map(|(Width(width), _)| width as usize)
            .unwrap_or(DEFAULT_WIDTH)
            .min(MAX_WIDTH)
    }

    /// Greedy word wrap; words longer than `width` get a line of their own.
    pub fn wrap(text: &str, width: usize) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();

        for word in text.split_whitespace() {
            if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }

    fn print_list(heading: &str, items: &[String], width: usize) {
        println!("\n{}", heading);
        if items.is_empty() {
            println!("{}-", BULLET);
            return;
        }

        let text_width = width.saturating_sub(BULLET.chars().count()).max(20);
        for item in items {
            for (i, line) in Self::wrap(item, text_width).iter().enumerate() {
                let prefix = if i == 0 { BULLET } else { INDENT };
                println!("{}{}", prefix, line);
            }
        }
    }

    pub fn print_report(report: &Report, language: UiLanguage) {
        let l = labels(language);
        let width = Self::line_width();
        let separator = "━".repeat(width);

        println!("\n📊 {} {}", l.report_for, report.file_name);
        println!("{}", separator);

        if report.ai_enabled {
            println!("🤖 {} ({})", l.ai_enabled, report.ai_provider);
        } else if report.ai_attempted {
            println!("⚠️ {}", l.ai_fallback);
        } else {
            println!("🎭 {}", l.ai_disabled);
        }

        println!("\n{}", l.overall);
        for line in Self::wrap(&report.feedback.overall, width) {
            println!("{}", line);
        }

        Self::print_list(l.strengths, &report.feedback.strengths, width);
        Self::print_list(l.improvements, &report.feedback.improvements, width);
        Self::print_list(l.best_practices, &report.feedback.best_practices, width);
        Self::print_list(l.security, &report.feedback.security, width);
        Self::print_list(l.performance, &report.feedback.performance, width);

        let stats = &report.statistics;
        println!("\n{}", l.statistics);
        println!("  {:<20} {}", l.complexity, stats.complexity.label(language));
        println!("  {:<20} {}", l.readability, stats.readability);
        println!("  {:<20} {}", l.maintainability, stats.maintainability);
        println!("  {:<20} {}", l.efficiency, stats.efficiency);
        println!("  {:<20} {}", l.analysis_time, report.analysis_time);

        if !report.improved_code.trim().is_empty() && report.improved_code != report.original_code {
            println!("\n{}", l.improved_code);
            println!("{}", "─".repeat(width));
            println!("{}", report.improved_code);
            println!("{}", "─".repeat(width));
        }

        println!("{}", separator);
        println!("🆔 {}", report.id);
    }
}
