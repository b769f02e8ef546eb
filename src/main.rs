//! Translate a page description and print the result.
//!
//! Usage:
//!   page-i18n <page.json> [lang]
//!
//! Optional environment variables:
//! - I18N_BASE_URL (serve dictionaries from `<url>/i18n/<code>.json`)
//! - I18N_DIR (defaults to `i18n`, used when I18N_BASE_URL is unset)
//! - I18N_PREFERENCE_FILE (defaults to `.page-i18n.json`)
//! - I18N_LOCALE (overrides the detected system locale)

use anyhow::{Context, Result};
use page_i18n::config::{Config, DictionaryLocation};
use page_i18n::dom::Page;
use page_i18n::i18n::{
    resolver, DictionarySource, DirSource, FilePreferenceStore, HttpSource, I18n,
};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr, so stdout stays valid JSON)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("page_i18n=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let page_path = args
        .next()
        .context("Usage: page-i18n <page.json> [lang]")?;
    let switch_to = args.next();

    let config = Config::from_env()?;

    let raw = std::fs::read_to_string(&page_path)
        .with_context(|| format!("Failed to read page file: {}", page_path))?;
    let page: Page = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse page file: {}", page_path))?;

    let locale = config
        .locale_override
        .clone()
        .or_else(resolver::system_locale);
    let preferences = FilePreferenceStore::new(&config.preference_file);

    let page = match &config.dictionaries {
        DictionaryLocation::Http(url) => {
            let source = HttpSource::new(reqwest::Client::new(), url.clone());
            translate(page, source, preferences, locale.as_deref(), switch_to.as_deref()).await
        }
        DictionaryLocation::Directory(dir) => {
            let source = DirSource::new(dir);
            translate(page, source, preferences, locale.as_deref(), switch_to.as_deref()).await
        }
    };

    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}

/// Startup flow, then an optional user switch.
async fn translate<S: DictionarySource>(
    page: Page,
    source: S,
    preferences: FilePreferenceStore,
    locale: Option<&str>,
    switch_to: Option<&str>,
) -> Page {
    let i18n = I18n::new(page, source, preferences);

    i18n.start(locale).await;
    if let Some(code) = switch_to {
        i18n.switch_language(code).await;
    }

    if let Some(language) = i18n.active_language() {
        info!(
            "Active language: {} ({}), switcher label {}",
            language.native_name(),
            language.code(),
            language.label()
        );
    }

    i18n.into_document()
}
