use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::wire::{Campaign, SectionKey};

pub const TIPS: [&str; 5] = [
    "Test different subject lines to find the best performer",
    "Keep preview text under 150 characters",
    "Use clear, compelling call-to-actions",
    "A/B test your campaigns for better results",
    "Ensure mobile-friendly email design",
];

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[value(name = "txt", alias = "plain", alias = "text")]
    Plain,
    #[value(name = "md", alias = "markdown")]
    Markdown,
    #[value(name = "html")]
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Plain => "txt",
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Plain => "text/plain;charset=utf-8",
            ExportFormat::Markdown => "text/markdown;charset=utf-8",
            ExportFormat::Html => "text/html;charset=utf-8",
        }
    }
}

/// Timestamp shown in the "Generated on" line.
pub fn generated_on(at: DateTime<Local>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `<prefix>[-<YYYYmmdd-HHMMSS>].<ext>`
pub fn export_filename(prefix: &str, format: ExportFormat, at: Option<DateTime<Local>>) -> String {
    match at {
        Some(t) => format!("{prefix}-{}.{}", t.format("%Y%m%d-%H%M%S"), format.extension()),
        None => format!("{prefix}.{}", format.extension()),
    }
}

pub fn render(campaign: &Campaign, format: ExportFormat, generated_on: &str) -> String {
    match format {
        ExportFormat::Plain => render_plain(campaign, generated_on),
        ExportFormat::Markdown => render_markdown(campaign, generated_on),
        ExportFormat::Html => render_html(campaign, generated_on),
    }
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s))
        .collect::<Vec<_>>()
        .join("\n")
}

fn lists(c: &Campaign) -> [(SectionKey, &[String]); 3] {
    [
        (SectionKey::SubjectLines, c.subject_lines.as_slice()),
        (SectionKey::PreviewText, c.preview_text.as_slice()),
        (SectionKey::CallToActions, c.call_to_actions.as_slice()),
    ]
}

fn render_plain(c: &Campaign, generated_on: &str) -> String {
    let rule = "=".repeat(50);
    let sub = "-".repeat(20);
    let [subjects, previews, ctas] = lists(c);
    let mut out = format!("EMAIL CAMPAIGN GENERATOR\nGenerated on: {generated_on}\n\n{rule}\n\n");
    for (key, items) in [subjects, previews] {
        let _ = write!(out, "{} {}\n{sub}\n{}\n\n", key.emoji(), key.title().to_uppercase(), numbered(items));
    }
    let body = SectionKey::EmailBody;
    let _ = write!(out, "{} {}\n{sub}\n{}\n\n", body.emoji(), body.title().to_uppercase(), c.email_body);
    let (key, items) = ctas;
    let _ = write!(out, "{} {}\n{sub}\n{}\n\n", key.emoji(), key.title().to_uppercase(), numbered(items));
    let _ = write!(out, "{rule}\n\n💡 TIPS FOR SUCCESS:\n");
    for tip in TIPS {
        let _ = writeln!(out, "• {tip}");
    }
    out.push_str("\nHappy emailing! 🚀\n");
    out
}

fn render_markdown(c: &Campaign, generated_on: &str) -> String {
    let [subjects, previews, ctas] = lists(c);
    let mut out = format!("# Email Campaign Generator\n\n**Generated on:** {generated_on}\n\n---\n\n");
    for (key, items) in [subjects, previews] {
        let _ = write!(out, "## {} {}\n\n{}\n\n", key.emoji(), key.title(), numbered(items));
    }
    let _ = write!(out, "{}{}\n\n", markdown_heading(SectionKey::EmailBody), c.email_body);
    let (key, items) = ctas;
    let _ = write!(out, "## {} {}\n\n{}\n\n", key.emoji(), key.title(), numbered(items));
    out.push_str("---\n\n### 💡 Tips for Success\n\n");
    for tip in TIPS {
        let _ = writeln!(out, "- {tip}");
    }
    out.push_str("\n*Happy emailing! 🚀*\n");
    out
}

/// Heading line (plus blank line) that opens a section in the Markdown export.
pub fn markdown_heading(key: SectionKey) -> String {
    format!("## {} {}\n\n", key.emoji(), key.title())
}

/// Escapes text for HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; line-height: 1.6; margin: 40px; background: #f5f5f5; }
        .container { max-width: 800px; margin: 0 auto; background: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        h1 { color: #333; border-bottom: 3px solid #007bff; padding-bottom: 10px; }
        h2 { color: #007bff; margin-top: 30px; }
        .timestamp { color: #666; font-style: italic; margin-bottom: 30px; }
        .section { margin-bottom: 25px; }
        .option { background: #f8f9fa; padding: 15px; margin: 10px 0; border-left: 4px solid #007bff; border-radius: 5px; }
        .tips { background: #e3f2fd; padding: 20px; border-radius: 8px; margin-top: 30px; }
        .emoji { font-size: 1.2em; }
"#;

fn html_section(key: SectionKey, inner: &str) -> String {
    format!(
        "        <div class=\"section\">\n            <h2><span class=\"emoji\">{}</span> {}</h2>\n            {}\n        </div>\n\n",
        key.emoji(),
        key.title(),
        inner
    )
}

fn html_options(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, s)| format!("<div class=\"option\"><strong>{}.</strong> {}</div>", i + 1, escape_html(s)))
        .collect()
}

fn render_html(c: &Campaign, generated_on: &str) -> String {
    let [subjects, previews, ctas] = lists(c);
    let mut out = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"UTF-8\">\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n    <title>Email Campaign</title>\n    <style>\n",
    );
    out.push_str(STYLE);
    out.push_str("    </style>\n</head>\n<body>\n    <div class=\"container\">\n");
    out.push_str("        <h1><span class=\"emoji\">📧</span> Email Campaign Generator</h1>\n");
    let _ = write!(out, "        <div class=\"timestamp\">Generated on: {}</div>\n\n", escape_html(generated_on));

    for (key, items) in [subjects, previews] {
        out.push_str(&html_section(key, &html_options(items)));
    }
    let body = escape_html(&c.email_body).replace('\n', "<br>");
    out.push_str(&html_section(SectionKey::EmailBody, &format!("<div class=\"option\">{body}</div>")));
    let (key, items) = ctas;
    out.push_str(&html_section(key, &html_options(items)));

    out.push_str("        <div class=\"tips\">\n            <h3><span class=\"emoji\">💡</span> Tips for Success</h3>\n            <ul>\n");
    for tip in TIPS {
        let _ = writeln!(out, "                <li>{}</li>", escape_html(tip));
    }
    out.push_str("            </ul>\n        </div>\n\n");
    out.push_str("        <p style=\"text-align: center; margin-top: 30px; color: #666;\">\n            <em>Happy emailing! <span class=\"emoji\">🚀</span></em>\n        </p>\n    </div>\n</body>\n</html>");
    out
}
