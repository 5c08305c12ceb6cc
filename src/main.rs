use anyhow::Context;
use chrono::Local;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

mod catalog;
mod cli;
mod config;
mod errors;
mod export;
mod generator;
mod persist;
mod placeholder;
mod provider;
mod ux;
mod validate;
mod wire;

use crate::generator::CampaignGenerator;

fn init_logging(debug: bool) {
    let level = if debug { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .init();
}

/// Runs `fut` behind a spinner unless progress output is disabled.
async fn with_spinner<T>(show: bool, msg: &str, fut: impl Future<Output = T>) -> T {
    if !show {
        return fut.await;
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    let out = fut.await;
    pb.finish_and_clear();
    out
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    init_logging(args.debug);

    let mut cfg = config::Config::load(args.config.as_deref())
        .context("could not read config")?
        .with_env_credentials();
    if let Some(p) = args.provider {
        cfg.provider = p;
    }
    if let Some(m) = &args.model {
        let kind = cfg.provider;
        match kind {
            cli::ProviderKind::OpenAI => cfg.openai.model = m.clone(),
            cli::ProviderKind::Anthropic => cfg.anthropic.model = m.clone(),
            cli::ProviderKind::Gemini => cfg.gemini.model = m.clone(),
        }
    }
    if let Some(ms) = args.mock_delay_ms {
        cfg.mock_delay_ms = ms;
    }
    if let Some(dir) = &args.out_dir {
        cfg.export.out_dir = dir.clone();
    }
    log::debug!("config: {cfg:?}");

    let form = args.form_data(cfg.default_tone.as_str());
    if let Err(errors) = validate::check(&form) {
        ux::show_validation_errors(&errors);
        let first = errors.first().map(|e| e.to_string()).unwrap_or_default();
        return Err(errors::CampaignError::Validation(first).into());
    }
    if wire::Tone::parse(form.tone.trim()).is_none() {
        log::info!("unknown tone {:?}; using {}", form.tone, form.tone());
    }

    let show_progress = !args.no_progress;
    // No live provider clients are built into this binary; the generator
    // runs on templates unless one is registered here.
    let gen = CampaignGenerator::new(cfg, None);

    let first = with_spinner(show_progress, "Generating campaign...", gen.generate(&form)).await;
    let mut campaign = first.content;
    for token in campaign.texts().flat_map(placeholder::unresolved) {
        log::warn!("placeholder {token} was left unfilled");
    }
    ux::show_campaign(&campaign, form.tone(), first.path);

    if !args.regenerate.is_empty() {
        let runs = args.regenerate.iter().map(|key| gen.generate_section(&form, *key));
        let results = with_spinner(show_progress, "Regenerating...", futures::future::join_all(runs)).await;
        for out in results {
            let key = out.content.key();
            campaign.merge_section(out.content);
            ux::show_regenerated(&campaign, key, out.path);
        }
    }

    if args.interactive {
        while let Some(key) = ux::ask_section() {
            let out = with_spinner(show_progress, "Regenerating...", gen.generate_section(&form, key)).await;
            campaign.merge_section(out.content);
            ux::show_regenerated(&campaign, key, out.path);
        }
        if !args.no_export && !ux::confirm(&format!("Export as .{}?", args.format.extension())) {
            println!("Not exported.");
            return Ok(());
        }
    }

    if args.no_export {
        return Ok(());
    }

    let now = Local::now();
    let exp = &gen.config().export;
    let content = export::render(&campaign, args.format, &export::generated_on(now));
    let filename = export::export_filename(
        &exp.filename_prefix,
        args.format,
        exp.include_timestamp.then_some(now),
    );
    let sink = persist::FileSink::new(exp.out_dir.clone());
    log::debug!("exporting {} to {}", args.format.mime_type(), sink.dir().display());
    let outcome = persist::persist_export(&sink, &content, &filename);
    ux::show_export(&outcome);

    Ok(())
}
