use crate::config::constants::{ALLOWED_EXTENSIONS, TARGET_LANGUAGES};
use crate::enums::ui_language::UiLanguage;
use crate::helpers::labels::{labels, Labels};
use crate::structs::report::Report;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f5f6fa; color: #222; }
header { background: #2d3436; color: #fff; padding: 1rem 2rem; display: flex; justify-content: space-between; align-items: center; }
header a { color: #dfe6e9; margin-left: .75rem; }
main { max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
section { background: #fff; border-radius: 8px; padding: 1rem 1.5rem; margin-bottom: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
pre { background: #2d3436; color: #dfe6e9; padding: 1rem; overflow-x: auto; border-radius: 6px; }
.badge { display: inline-block; padding: .2rem .6rem; border-radius: 4px; font-size: .85rem; }
.badge.ai { background: #00b894; color: #fff; }
.badge.demo { background: #fdcb6e; }
.error { border-left: 4px solid #d63031; }
table td { padding: .25rem 1rem .25rem 0; }
"#;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn page(language: UiLanguage, title: &str, body: &str) -> String {
    let l = labels(language);
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {app}</title>
<style>{style}</style>
</head>
<body>
<header><strong><a href="/?lang={lang}">{app}</a></strong><nav><a href="?lang=nl">NL</a><a href="?lang=en">EN</a></nav></header>
<main>
{body}
</main>
</body>
</html>"#,
        lang = language.code(),
        title = escape_html(title),
        app = l.title,
        style = STYLE,
        body = body,
    )
}

fn list_section(heading: &str, items: &[String]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!("<section><h2>{}</h2><ul>{}</ul></section>", heading, items)
}

pub fn render_index(language: UiLanguage) -> String {
    let l = labels(language);

    let options: String = TARGET_LANGUAGES
        .iter()
        .map(|(_, name)| format!(r#"<option value="{0}">{0}</option>"#, name))
        .collect();

    let body = format!(
        r#"<section>
<h1>{heading}</h1>
<form action="/analyze" method="post" enctype="multipart/form-data">
<p><label>{choose}<br><input type="file" name="codeFile" accept="{accept}" required></label></p>
<p><label>{target}<br><select name="targetLanguage">{options}</select></label></p>
<p><label>{report_language}<br><select name="language">
<option value="nl"{nl_selected}>Nederlands</option>
<option value="en"{en_selected}>English</option>
</select></label></p>
<p><button type="submit">{button}</button></p>
<p><small>{allowed}: {accept_list}</small></p>
</form>
</section>"#,
        heading = l.upload_heading,
        choose = l.choose_file,
        accept = ALLOWED_EXTENSIONS.join(","),
        target = l.target_language,
        options = options,
        report_language = l.report_language,
        nl_selected = if language.is_english() { "" } else { " selected" },
        en_selected = if language.is_english() { " selected" } else { "" },
        button = l.analyze_button,
        allowed = l.allowed_types,
        accept_list = ALLOWED_EXTENSIONS.join(" "),
    );

    page(language, l.upload_heading, &body)
}

fn statistics_section(l: &Labels, report: &Report, language: UiLanguage) -> String {
    let stats = &report.statistics;
    format!(
        r#"<section><h2>{heading}</h2><table>
<tr><td>{complexity}</td><td>{complexity_value}</td></tr>
<tr><td>{readability}</td><td>{readability_value}</td></tr>
<tr><td>{maintainability}</td><td>{maintainability_value}</td></tr>
<tr><td>{efficiency}</td><td>{efficiency_value}</td></tr>
<tr><td>{analysis_time}</td><td>{analysis_time_value}</td></tr>
</table></section>"#,
        heading = l.statistics,
        complexity = l.complexity,
        complexity_value = escape_html(stats.complexity.label(language)),
        readability = l.readability,
        readability_value = escape_html(&stats.readability),
        maintainability = l.maintainability,
        maintainability_value = escape_html(&stats.maintainability),
        efficiency = l.efficiency,
        efficiency_value = escape_html(&stats.efficiency),
        analysis_time = l.analysis_time,
        analysis_time_value = escape_html(&report.analysis_time),
    )
}

pub fn render_results(report: &Report, language: UiLanguage) -> String {
    let l = labels(language);
    let feedback = &report.feedback;

    let badge = if report.ai_enabled {
        format!(r#"<span class="badge ai">{} ({})</span>"#, l.ai_enabled, escape_html(&report.ai_provider))
    } else if report.ai_attempted {
        format!(r#"<span class="badge demo">{}</span>"#, l.ai_fallback)
    } else {
        format!(r#"<span class="badge demo">{}</span>"#, l.ai_disabled)
    };

    let body = [
        format!(
            r#"<section><h1>{} {}</h1><p>{} · <small>{}</small></p><p><a href="/?lang={}">{}</a></p></section>"#,
            l.report_for,
            escape_html(&report.file_name),
            badge,
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            language.code(),
            l.new_analysis,
        ),
        format!("<section><h2>{}</h2><p>{}</p></section>", l.overall, escape_html(&feedback.overall)),
        list_section(l.strengths, &feedback.strengths),
        list_section(l.improvements, &feedback.improvements),
        list_section(l.best_practices, &feedback.best_practices),
        list_section(l.security, &feedback.security),
        list_section(l.performance, &feedback.performance),
        statistics_section(l, report, language),
        format!("<section><h2>{}</h2><pre><code>{}</code></pre></section>", l.original_code, escape_html(&report.original_code)),
        format!("<section><h2>{}</h2><pre><code>{}</code></pre></section>", l.improved_code, escape_html(&report.improved_code)),
    ]
    .join("\n");

    page(language, &report.file_name, &body)
}

pub fn render_error(message: &str, language: UiLanguage, details: Option<&str>) -> String {
    let l = labels(language);

    let details = details
        .map(|d| format!("<pre>{}</pre>", escape_html(d)))
        .unwrap_or_default();

    let body = format!(
        r#"<section class="error"><h1>{heading}</h1><p>{message}</p>{details}<p><a href="/?lang={lang}">{back}</a></p></section>"#,
        heading = l.error_heading,
        message = escape_html(message),
        details = details,
        lang = language.code(),
        back = l.back_home,
    );

    page(language, l.error_heading, &body)
}
