//! Campaign generation: provider when one is usable, templates otherwise.
//!
//! The generator never fails. Provider errors and malformed replies fall back
//! to the tone's templates and are reported through [`GenerationPath`].

use std::time::Duration;

use crate::catalog::template_set;
use crate::config::Config;
use crate::errors::CampaignError;
use crate::placeholder::resolve;
use crate::provider::{parse_reply, DynProvider};
use crate::wire::{
    Campaign, CampaignRequest, FormData, Generated, GenerationPath, SectionKey, SectionValue,
};

pub struct CampaignGenerator {
    config: Config,
    provider: Option<DynProvider>,
}

impl CampaignGenerator {
    pub fn new(config: Config, provider: Option<DynProvider>) -> Self {
        Self { config, provider }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn generate(&self, form: &FormData) -> Generated<Campaign> {
        match self.from_provider(form).await {
            Some(Ok(content)) => Generated { content, path: GenerationPath::Real },
            Some(Err(e)) => {
                log::warn!("provider failed ({e}); falling back to templates");
                Generated { content: mock_campaign(form), path: GenerationPath::FallbackAfterError }
            }
            None => {
                self.simulate_latency().await;
                Generated { content: mock_campaign(form), path: GenerationPath::Mock }
            }
        }
    }

    /// Regenerates one section. The caller merges it with
    /// [`Campaign::merge_section`].
    pub async fn generate_section(&self, form: &FormData, key: SectionKey) -> Generated<SectionValue> {
        match self.from_provider(form).await {
            Some(Ok(campaign)) => Generated { content: campaign.section(key), path: GenerationPath::Real },
            Some(Err(e)) => {
                log::warn!("provider failed regenerating {key} ({e}); falling back to templates");
                Generated { content: mock_section(form, key), path: GenerationPath::FallbackAfterError }
            }
            None => {
                self.simulate_latency().await;
                Generated { content: mock_section(form, key), path: GenerationPath::Mock }
            }
        }
    }

    /// `None` when the template path should be used without trying a provider.
    async fn from_provider(&self, form: &FormData) -> Option<Result<Campaign, CampaignError>> {
        let provider = self.live_provider()?;
        let req = self.request_for(form);
        let endpoint = &self.config.selected().api_url;
        log::info!("requesting campaign from {} at {endpoint} ({})", provider.name(), req.model);
        let reply = match provider.generate(&req).await {
            Ok(text) => text,
            Err(e) => return Some(Err(e)),
        };
        Some(parse_reply(&reply))
    }

    fn live_provider(&self) -> Option<&DynProvider> {
        let kind = self.config.provider;
        let Some(provider) = self.provider.as_ref() else {
            log::info!("no {kind:?} client registered; using templates");
            return None;
        };
        if self.config.selected().has_key {
            return Some(provider);
        }
        if self.config.use_mock_if_no_key {
            log::info!("no API key for {kind:?} ({}); using templates", kind.key_var());
            return None;
        }
        log::warn!("no API key for {kind:?}, trying {} anyway", provider.name());
        Some(provider)
    }

    fn request_for(&self, form: &FormData) -> CampaignRequest {
        let settings = self.config.selected();
        CampaignRequest {
            tone: form.tone(),
            product_name: form.product_name.clone(),
            description: form.description.clone(),
            target_audience: form.target_audience.clone(),
            launch_date: form.launch_date.clone(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        }
    }

    async fn simulate_latency(&self) {
        if self.config.mock_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.mock_delay_ms)).await;
        }
    }
}

fn resolve_all(templates: &[&str], form: &FormData) -> Vec<String> {
    templates.iter().map(|t| resolve(t, form)).collect()
}

/// Fills every template of the form's tone.
pub fn mock_campaign(form: &FormData) -> Campaign {
    let set = template_set(form.tone());
    Campaign {
        subject_lines: resolve_all(&set.subject_lines, form),
        preview_text: resolve_all(&set.preview_text, form),
        email_body: resolve(set.email_body, form),
        call_to_actions: resolve_all(&set.call_to_actions, form),
    }
}

pub fn mock_section(form: &FormData, key: SectionKey) -> SectionValue {
    let set = template_set(form.tone());
    match key {
        SectionKey::SubjectLines => SectionValue::SubjectLines(resolve_all(&set.subject_lines, form)),
        SectionKey::PreviewText => SectionValue::PreviewText(resolve_all(&set.preview_text, form)),
        SectionKey::EmailBody => SectionValue::EmailBody(resolve(set.email_body, form)),
        SectionKey::CallToActions => SectionValue::CallToActions(resolve_all(&set.call_to_actions, form)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CALL_TO_ACTION_OPTIONS, PREVIEW_TEXT_OPTIONS, SUBJECT_LINE_OPTIONS};
    use crate::placeholder::unresolved;
    use crate::provider::Provider;
    use crate::wire::Tone;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn form(tone: &str) -> FormData {
        FormData {
            product_name: "Aero".into(),
            description: "Lightweight drone".into(),
            target_audience: "hobbyists".into(),
            launch_date: "2025-06-01".into(),
            tone: tone.into(),
        }
    }

    fn config(has_key: bool) -> Config {
        let mut cfg = Config::default();
        cfg.mock_delay_ms = 0;
        cfg.set_credentials(|_| has_key);
        cfg
    }

    struct Scripted {
        reply: Result<String, String>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Provider for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn generate(&self, req: &CampaignRequest) -> Result<String, CampaignError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(req.product_name, "Aero");
            self.reply.clone().map_err(CampaignError::Provider)
        }
    }

    fn scripted(reply: Result<&str, &str>) -> (DynProvider, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let p = Scripted {
            reply: reply.map(str::to_string).map_err(str::to_string),
            calls: calls.clone(),
        };
        (Box::new(p), calls)
    }

    const AI_REPLY: &str = r#"{"subjectLines":["AI 1","AI 2"],"previewText":["AI p"],"emailBody":"AI body","callToActions":["AI cta"]}"#;

    #[tokio::test]
    async fn exciting_without_provider_uses_exciting_templates() {
        let gen = CampaignGenerator::new(config(false), None);
        let out = gen.generate(&form("exciting")).await;
        assert_eq!(out.path, GenerationPath::Mock);
        let c = out.content;
        assert_eq!(c.subject_lines.len(), SUBJECT_LINE_OPTIONS);
        assert_eq!(c.preview_text.len(), PREVIEW_TEXT_OPTIONS);
        assert_eq!(c.call_to_actions.len(), CALL_TO_ACTION_OPTIONS);
        assert_eq!(c.subject_lines[0], "🚀 Aero is HERE! Don't Miss the Launch of the Century!");
        assert!(c.email_body.starts_with("🎉 EXCITING NEWS! 🎉"));
    }

    #[tokio::test]
    async fn aero_minimal_scenario() {
        let gen = CampaignGenerator::new(config(false), None);
        let c = gen.generate(&form("minimal")).await.content;
        assert_eq!(c.subject_lines[0], "Aero Launch");
        assert!(c.email_body.contains("Aero"));
        assert!(c.email_body.contains("hobbyists"));
        assert!(c.email_body.contains("2025-06-01"));
        assert!(c.texts().all(|t| unresolved(t).is_empty()));
    }

    #[tokio::test]
    async fn every_tone_resolves_every_field() {
        let gen = CampaignGenerator::new(config(false), None);
        for tone in Tone::ALL {
            let c = gen.generate(&form(tone.as_str())).await.content;
            for text in c.texts() {
                assert!(unresolved(text).is_empty(), "{tone}: {text}");
            }
        }
    }

    #[tokio::test]
    async fn unknown_tone_falls_back_to_professional() {
        let gen = CampaignGenerator::new(config(false), None);
        let sarcastic = gen.generate(&form("sarcastic")).await;
        let professional = gen.generate(&form("professional")).await;
        assert_eq!(sarcastic.path, GenerationPath::Mock);
        assert_eq!(sarcastic.content, professional.content);
        assert_eq!(gen.generate(&form("")).await.content, professional.content);
    }

    #[tokio::test]
    async fn section_regeneration_returns_only_that_section() {
        let gen = CampaignGenerator::new(config(false), None);
        let f = form("playful");
        let before = gen.generate(&f).await.content;

        let out = gen.generate_section(&f, SectionKey::EmailBody).await;
        let SectionValue::EmailBody(body) = &out.content else {
            panic!("expected a body, got {:?}", out.content);
        };
        assert_eq!(body, &before.email_body);

        let mut after = before.clone();
        after.email_body = "edited".into();
        after.merge_section(out.content);
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn merging_a_regenerated_body_leaves_other_sections_untouched() {
        let gen = CampaignGenerator::new(config(false), None);
        let mut campaign = gen.generate(&form("professional")).await.content;
        let snapshot = campaign.clone();
        // body generated for a different tone, so the field visibly changes
        let regen = gen.generate_section(&form("minimal"), SectionKey::EmailBody).await;
        campaign.merge_section(regen.content);
        assert_ne!(campaign.email_body, snapshot.email_body);
        assert_eq!(campaign.subject_lines, snapshot.subject_lines);
        assert_eq!(campaign.preview_text, snapshot.preview_text);
        assert_eq!(campaign.call_to_actions, snapshot.call_to_actions);
    }

    #[tokio::test]
    async fn concurrent_regenerations_touch_only_their_fields() {
        let gen = CampaignGenerator::new(config(false), None);
        let mut campaign = gen.generate(&form("professional")).await.content;
        let other = form("exciting");
        let (subjects, ctas) = futures::join!(
            gen.generate_section(&other, SectionKey::SubjectLines),
            gen.generate_section(&other, SectionKey::CallToActions),
        );
        let body = campaign.email_body.clone();
        let preview = campaign.preview_text.clone();
        campaign.merge_section(ctas.content);
        campaign.merge_section(subjects.content);
        let exciting = mock_campaign(&other);
        assert_eq!(campaign.subject_lines, exciting.subject_lines);
        assert_eq!(campaign.call_to_actions, exciting.call_to_actions);
        assert_eq!(campaign.email_body, body);
        assert_eq!(campaign.preview_text, preview);
    }

    #[tokio::test]
    async fn provider_reply_is_used_when_key_present() {
        let (p, calls) = scripted(Ok(AI_REPLY));
        let gen = CampaignGenerator::new(config(true), Some(p));
        let out = gen.generate(&form("minimal")).await;
        assert_eq!(out.path, GenerationPath::Real);
        assert_eq!(out.content.email_body, "AI body");
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let section = gen.generate_section(&form("minimal"), SectionKey::SubjectLines).await;
        assert_eq!(section.path, GenerationPath::Real);
        assert_eq!(section.content, SectionValue::SubjectLines(vec!["AI 1".into(), "AI 2".into()]));
    }

    #[tokio::test]
    async fn provider_is_skipped_without_key() {
        let (p, calls) = scripted(Ok(AI_REPLY));
        let gen = CampaignGenerator::new(config(false), Some(p));
        let out = gen.generate(&form("minimal")).await;
        assert_eq!(out.path, GenerationPath::Mock);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn provider_is_tried_without_key_when_mock_is_disabled() {
        let (p, calls) = scripted(Err("401 unauthorized"));
        let mut cfg = config(false);
        cfg.use_mock_if_no_key = false;
        let gen = CampaignGenerator::new(cfg, Some(p));
        let out = gen.generate(&form("minimal")).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(out.path, GenerationPath::FallbackAfterError);
        assert_eq!(out.content.subject_lines[0], "Aero Launch");
    }

    #[tokio::test]
    async fn provider_error_falls_back_to_templates() {
        let (p, _) = scripted(Err("connection reset"));
        let gen = CampaignGenerator::new(config(true), Some(p));
        let out = gen.generate(&form("minimal")).await;
        assert_eq!(out.path, GenerationPath::FallbackAfterError);
        assert_eq!(out.content, mock_campaign(&form("minimal")));
    }

    #[tokio::test]
    async fn malformed_reply_falls_back_to_templates() {
        let (p, _) = scripted(Ok("Here are some ideas: buy now!"));
        let gen = CampaignGenerator::new(config(true), Some(p));
        let out = gen.generate_section(&form("minimal"), SectionKey::EmailBody).await;
        assert_eq!(out.path, GenerationPath::FallbackAfterError);
        assert_eq!(out.content, mock_section(&form("minimal"), SectionKey::EmailBody));
    }

    #[tokio::test]
    async fn mock_path_waits_for_configured_delay() {
        let mut cfg = config(false);
        cfg.mock_delay_ms = 25;
        let gen = CampaignGenerator::new(cfg, None);
        let start = tokio::time::Instant::now();
        gen.generate(&form("minimal")).await;
        assert!(start.elapsed() >= Duration::from_millis(25));
    }

    #[test]
    fn mock_section_matches_full_campaign() {
        for tone in Tone::ALL {
            let f = form(tone.as_str());
            let full = mock_campaign(&f);
            for key in SectionKey::ALL {
                assert_eq!(mock_section(&f, key), full.section(key), "{tone} {key}");
            }
        }
    }

    #[test]
    fn request_carries_form_and_model_settings() {
        let gen = CampaignGenerator::new(config(true), None);
        let req = gen.request_for(&form("sarcastic"));
        assert_eq!(req.tone, Tone::Professional);
        assert_eq!(req.model, "gpt-4");
        assert_eq!(req.max_tokens, 1000);
        assert_eq!(req.launch_date, "2025-06-01");
    }

    #[test]
    fn partial_provider_table_keeps_default_model_in_requests() {
        let cfg = Config::from_toml("[openai]\nmax_tokens = 500\n").unwrap();
        let gen = CampaignGenerator::new(cfg, None);
        let req = gen.request_for(&form("minimal"));
        assert_eq!(req.model, "gpt-4");
        assert_eq!(req.max_tokens, 500);
    }
}
