use clap::ValueEnum;
use colored::Colorize;
use std::io::{self, Write};

use crate::persist::PersistOutcome;
use crate::validate::FieldError;
use crate::wire::{Campaign, GenerationPath, SectionKey, Tone};

pub fn show_campaign(c: &Campaign, tone: Tone, path: GenerationPath) {
    println!(
        "\n{}  {}",
        "=== EMAIL CAMPAIGN ===".bold(),
        format!("tone: {} ({}) · source: {}", tone, tone.description(), path).dimmed()
    );
    for key in SectionKey::ALL {
        show_section(c, key);
    }
    show_summary();
}

pub fn show_section(c: &Campaign, key: SectionKey) {
    println!("\n{}", format!("{} {}", key.emoji(), key.title()).cyan().bold());
    let count = match key {
        SectionKey::EmailBody => {
            println!("{}", indent(&c.email_body, 3));
            "1 version generated".to_string()
        }
        SectionKey::SubjectLines => list(&c.subject_lines),
        SectionKey::PreviewText => list(&c.preview_text),
        SectionKey::CallToActions => list(&c.call_to_actions),
    };
    println!("{}", count.dimmed());
}

fn list(items: &[String]) -> String {
    for (i, s) in items.iter().enumerate() {
        println!("{}. {}", (i + 1).to_string().bold(), s);
    }
    format!("{} options generated", items.len())
}

fn show_summary() {
    println!(
        "\n{}",
        "┏━━━━━━━━━━━━━━━━━━━━━━ Campaign Ready! ━━━━━━━━━━━━━━━━━━━━━━┓".bold()
    );
    for line in [
        "Subject lines optimized for open rates",
        "Preview text for better engagement",
        "Compelling email body content",
        "Strategic call-to-action options",
    ] {
        println!("  {} {}", "✔".green().bold(), line);
    }
    println!("{}", "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".bold());
}

pub fn show_regenerated(c: &Campaign, key: SectionKey, path: GenerationPath) {
    println!("\n{} {}", "[REGENERATED]".yellow().bold(), format!("{key} via {path}").dimmed());
    show_section(c, key);
}

pub fn show_validation_errors(errors: &[FieldError]) {
    println!("{}", "Please fix the form:".red().bold());
    for e in errors {
        println!(" - {}", e.message.red());
    }
}

pub fn show_export(outcome: &PersistOutcome) {
    let line = outcome.describe();
    match outcome {
        PersistOutcome::Saved { .. } => println!("\n{} {}", "[EXPORT]".green().bold(), line),
        _ => println!("\n{} {}", "[EXPORT]".red().bold(), line),
    }
}

pub fn confirm(prompt: &str) -> bool {
    print!("{} [y/N]: ", prompt);
    let _ = io::stdout().flush();
    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        let ans = s.trim().to_lowercase();
        ans == "y" || ans == "yes"
    } else {
        false
    }
}

/// Asks which section to regenerate. Empty input or EOF ends the loop.
pub fn ask_section() -> Option<SectionKey> {
    loop {
        print!("Regenerate a section? [subject|preview|body|cta, enter to finish]: ");
        let _ = io::stdout().flush();
        let mut s = String::new();
        match io::stdin().read_line(&mut s) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }
        let ans = s.trim();
        if ans.is_empty() {
            return None;
        }
        match parse_section(ans) {
            Some(key) => return Some(key),
            None => println!("{}", format!("unknown section {ans:?}").yellow()),
        }
    }
}

pub fn parse_section(input: &str) -> Option<SectionKey> {
    SectionKey::from_str(input.trim(), true).ok()
}

fn indent(s: &str, n: usize) -> String {
    let pad = " ".repeat(n);
    s.lines()
        .map(|l| format!("{}{}", pad, l))
        .collect::<Vec<_>>()
        .join("\n")
}
