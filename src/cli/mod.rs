use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::export::ExportFormat;
use crate::wire::{FormData, SectionKey};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[value(name = "openai", alias = "open-ai")]
    OpenAI,
    #[value(alias = "claude")]
    Anthropic,
    #[value(alias = "google")]
    Gemini,
}

impl ProviderKind {
    /// Environment variable holding this provider's API key.
    pub fn key_var(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "OPENAI_API_KEY",
            ProviderKind::Anthropic => "ANTHROPIC_API_KEY",
            ProviderKind::Gemini => "GEMINI_API_KEY",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "campaign_gen", version, about = "Generate product-launch email campaigns from a short form")]
pub struct Args {
    #[arg(long)]
    pub product_name: String,

    #[arg(long)]
    pub description: String,

    #[arg(long)]
    pub target_audience: String,

    /// ISO date, e.g. 2025-06-01
    #[arg(long)]
    pub launch_date: String,

    /// professional, exciting, minimal or playful; anything else falls back to the default tone
    #[arg(long)]
    pub tone: Option<String>,

    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,

    #[arg(long)]
    pub model: Option<String>,

    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub mock_delay_ms: Option<u64>,

    /// Regenerate a section after the first pass (repeatable)
    #[arg(long, value_enum)]
    pub regenerate: Vec<SectionKey>,

    #[arg(long, value_enum, default_value_t = ExportFormat::Plain)]
    pub format: ExportFormat,

    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub no_export: bool,

    #[arg(long, default_value_t = false)]
    pub interactive: bool,

    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    pub fn form_data(&self, default_tone: &str) -> FormData {
        FormData {
            product_name: self.product_name.clone(),
            description: self.description.clone(),
            target_audience: self.target_audience.clone(),
            launch_date: self.launch_date.clone(),
            tone: self.tone.clone().unwrap_or_else(|| default_tone.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_form_and_sections() {
        let args = Args::try_parse_from([
            "campaign_gen",
            "--product-name", "Aero",
            "--description", "Lightweight drone",
            "--target-audience", "hobbyists",
            "--launch-date", "2025-06-01",
            "--tone", "sarcastic",
            "--regenerate", "body",
            "--regenerate", "subject-lines",
            "--format", "md",
            "--provider", "claude",
        ])
        .unwrap();
        assert_eq!(args.regenerate, vec![SectionKey::EmailBody, SectionKey::SubjectLines]);
        assert_eq!(args.format, ExportFormat::Markdown);
        assert_eq!(args.provider, Some(ProviderKind::Anthropic));
        let form = args.form_data("professional");
        assert_eq!(form.tone, "sarcastic");
        assert_eq!(form.product_name, "Aero");
    }

    #[test]
    fn tone_defaults_when_omitted() {
        let args = Args::try_parse_from([
            "campaign_gen",
            "--product-name", "Aero",
            "--description", "d",
            "--target-audience", "t",
            "--launch-date", "2025-06-01",
        ])
        .unwrap();
        assert_eq!(args.form_data("playful").tone, "playful");
        assert_eq!(args.format, ExportFormat::Plain);
    }
}
