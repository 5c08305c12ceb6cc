use anyhow::Context;
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::ProviderKind;
use crate::errors::CampaignError;
use crate::wire::Tone;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderSettings {
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Whether a credential was found at startup. The key itself is never stored.
    #[serde(skip)]
    pub has_key: bool,
}

impl ProviderSettings {
    fn new(api_url: &str, model: &str) -> Self {
        Self {
            api_url: api_url.into(),
            model: model.into(),
            max_tokens: 1000,
            temperature: 0.7,
            has_key: false,
        }
    }

    fn apply(&mut self, file: ProviderFile) {
        if let Some(v) = file.api_url {
            self.api_url = v;
        }
        if let Some(v) = file.model {
            self.model = v;
        }
        if let Some(v) = file.max_tokens {
            self.max_tokens = v;
        }
        if let Some(v) = file.temperature {
            self.temperature = v;
        }
    }
}

/// A provider table as written in the config file. Keys left out keep that
/// provider's defaults.
#[derive(Debug, Default, Deserialize)]
struct ProviderFile {
    api_url: Option<String>,
    model: Option<String>,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub out_dir: PathBuf,
    pub filename_prefix: String,
    pub include_timestamp: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            filename_prefix: "email-campaign".into(),
            include_timestamp: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ConfigFile")]
pub struct Config {
    pub provider: ProviderKind,
    pub openai: ProviderSettings,
    pub anthropic: ProviderSettings,
    pub gemini: ProviderSettings,
    pub use_mock_if_no_key: bool,
    pub mock_delay_ms: u64,
    pub default_tone: Tone,
    pub export: ExportSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderKind::OpenAI,
            openai: ProviderSettings::new("https://api.openai.com/v1/chat/completions", "gpt-4"),
            anthropic: ProviderSettings::new(
                "https://api.anthropic.com/v1/messages",
                "claude-3-sonnet-20240229",
            ),
            gemini: ProviderSettings::new(
                "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent",
                "gemini-pro",
            ),
            use_mock_if_no_key: true,
            mock_delay_ms: 1000,
            default_tone: Tone::Professional,
            export: ExportSettings::default(),
        }
    }
}

/// The config file layout: every key optional, applied over [`Config::default`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    provider: Option<ProviderKind>,
    openai: ProviderFile,
    anthropic: ProviderFile,
    gemini: ProviderFile,
    use_mock_if_no_key: Option<bool>,
    mock_delay_ms: Option<u64>,
    default_tone: Option<Tone>,
    export: ExportSettings,
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let mut cfg = Config::default();
        cfg.provider = file.provider.unwrap_or(cfg.provider);
        cfg.openai.apply(file.openai);
        cfg.anthropic.apply(file.anthropic);
        cfg.gemini.apply(file.gemini);
        cfg.use_mock_if_no_key = file.use_mock_if_no_key.unwrap_or(cfg.use_mock_if_no_key);
        cfg.mock_delay_ms = file.mock_delay_ms.unwrap_or(cfg.mock_delay_ms);
        cfg.default_tone = file.default_tone.unwrap_or(cfg.default_tone);
        cfg.export = file.export;
        cfg
    }
}

impl Config {
    /// Defaults, overlaid with a TOML file when one is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)?;
        let cfg = Self::from_toml(&text).with_context(|| format!("loading {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    pub fn from_toml(text: &str) -> Result<Self, CampaignError> {
        toml::from_str(text).map_err(|e| CampaignError::Config(e.to_string()))
    }

    /// Records which providers have a credential in the environment.
    pub fn with_env_credentials(mut self) -> Self {
        self.set_credentials(|kind| {
            std::env::var(kind.key_var())
                .map(|v| !v.trim().is_empty())
                .unwrap_or(false)
        });
        self
    }

    pub fn set_credentials(&mut self, mut present: impl FnMut(ProviderKind) -> bool) {
        self.openai.has_key = present(ProviderKind::OpenAI);
        self.anthropic.has_key = present(ProviderKind::Anthropic);
        self.gemini.has_key = present(ProviderKind::Gemini);
    }

    pub fn provider_settings(&self, kind: ProviderKind) -> &ProviderSettings {
        match kind {
            ProviderKind::OpenAI => &self.openai,
            ProviderKind::Anthropic => &self.anthropic,
            ProviderKind::Gemini => &self.gemini,
        }
    }

    pub fn selected(&self) -> &ProviderSettings {
        self.provider_settings(self.provider)
    }
}
