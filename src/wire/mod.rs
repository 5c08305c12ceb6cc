use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ========================================
/// Form input, campaign output, provider contract
/// ========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Exciting,
    Minimal,
    Playful,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Professional, Tone::Exciting, Tone::Minimal, Tone::Playful];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Exciting => "exciting",
            Tone::Minimal => "minimal",
            Tone::Playful => "playful",
        }
    }

    /// Exact, case-sensitive match against the enumerated names.
    pub fn parse(raw: &str) -> Option<Tone> {
        Tone::ALL.into_iter().find(|t| t.as_str() == raw)
    }

    /// Unset or unrecognized tones resolve to the default.
    pub fn parse_or_default(raw: &str) -> Tone {
        Tone::parse(raw).unwrap_or_default()
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tone::Professional => "Formal and business-like",
            Tone::Exciting => "Energetic and enthusiastic",
            Tone::Minimal => "Clean and simple",
            Tone::Playful => "Fun and creative",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_tone() -> String {
    Tone::default().as_str().to_string()
}

/// What the user submitted. `tone` keeps the raw text so an unknown value
/// can still be carried and defaulted at lookup time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub product_name: String,
    pub description: String,
    pub target_audience: String,
    pub launch_date: String,
    #[serde(default = "default_tone")]
    pub tone: String,
}

impl FormData {
    pub fn tone(&self) -> Tone {
        Tone::parse_or_default(self.tone.trim())
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    #[value(name = "subject-lines", alias = "subjectLines", alias = "subject")]
    SubjectLines,
    #[value(name = "preview-text", alias = "previewText", alias = "preview")]
    PreviewText,
    #[value(name = "email-body", alias = "emailBody", alias = "body")]
    EmailBody,
    #[value(name = "call-to-actions", alias = "callToActions", alias = "cta")]
    CallToActions,
}

impl SectionKey {
    pub const ALL: [SectionKey; 4] = [
        SectionKey::SubjectLines,
        SectionKey::PreviewText,
        SectionKey::EmailBody,
        SectionKey::CallToActions,
    ];

    /// The camelCase field name used in JSON.
    pub fn field_name(&self) -> &'static str {
        match self {
            SectionKey::SubjectLines => "subjectLines",
            SectionKey::PreviewText => "previewText",
            SectionKey::EmailBody => "emailBody",
            SectionKey::CallToActions => "callToActions",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionKey::SubjectLines => "Subject Lines",
            SectionKey::PreviewText => "Preview Text Options",
            SectionKey::EmailBody => "Email Body",
            SectionKey::CallToActions => "Call-to-Action Suggestions",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            SectionKey::SubjectLines => "📧",
            SectionKey::PreviewText => "👁️",
            SectionKey::EmailBody => "📝",
            SectionKey::CallToActions => "🎯",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub subject_lines: Vec<String>,
    pub preview_text: Vec<String>,
    pub email_body: String,
    pub call_to_actions: Vec<String>,
}

/// One regenerated section, tagged with the field it replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionValue {
    SubjectLines(Vec<String>),
    PreviewText(Vec<String>),
    EmailBody(String),
    CallToActions(Vec<String>),
}

impl SectionValue {
    pub fn key(&self) -> SectionKey {
        match self {
            SectionValue::SubjectLines(_) => SectionKey::SubjectLines,
            SectionValue::PreviewText(_) => SectionKey::PreviewText,
            SectionValue::EmailBody(_) => SectionKey::EmailBody,
            SectionValue::CallToActions(_) => SectionKey::CallToActions,
        }
    }
}

impl Campaign {
    pub fn section(&self, key: SectionKey) -> SectionValue {
        match key {
            SectionKey::SubjectLines => SectionValue::SubjectLines(self.subject_lines.clone()),
            SectionKey::PreviewText => SectionValue::PreviewText(self.preview_text.clone()),
            SectionKey::EmailBody => SectionValue::EmailBody(self.email_body.clone()),
            SectionKey::CallToActions => SectionValue::CallToActions(self.call_to_actions.clone()),
        }
    }

    /// Every generated string, in section order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.subject_lines
            .iter()
            .chain(&self.preview_text)
            .chain(std::iter::once(&self.email_body))
            .chain(&self.call_to_actions)
            .map(String::as_str)
    }

    /// Shallow merge: replaces only the field the value belongs to.
    pub fn merge_section(&mut self, value: SectionValue) {
        match value {
            SectionValue::SubjectLines(v) => self.subject_lines = v,
            SectionValue::PreviewText(v) => self.preview_text = v,
            SectionValue::EmailBody(v) => self.email_body = v,
            SectionValue::CallToActions(v) => self.call_to_actions = v,
        }
    }
}

/// Which route produced a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPath {
    Mock,
    Real,
    FallbackAfterError,
}

impl fmt::Display for GenerationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GenerationPath::Mock => "templates",
            GenerationPath::Real => "provider",
            GenerationPath::FallbackAfterError => "templates (provider failed)",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated<T> {
    pub content: T,
    pub path: GenerationPath,
}

/// Request handed to an AI provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRequest {
    pub tone: Tone,
    pub product_name: String,
    pub description: String,
    pub target_audience: String,
    pub launch_date: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}
