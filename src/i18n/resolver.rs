//! Startup language resolution.
//!
//! Priority: stored preference, then the environment locale's two-letter
//! prefix, then the registry default. Only supported codes are ever returned.

use crate::i18n::Language;
use tracing::debug;

/// Pick the language to load at startup.
///
/// Pure function of the stored preference and the reported locale.
pub fn resolve_initial_language(stored: Option<&str>, locale: Option<&str>) -> Language {
    if let Some(language) = stored.and_then(|code| Language::from_code(code).ok()) {
        debug!("Using stored language preference: {}", language);
        return language;
    }

    if let Some(language) = locale
        .map(locale_prefix)
        .and_then(|prefix| Language::from_code(&prefix).ok())
    {
        debug!("Using environment locale: {}", language);
        return language;
    }

    Language::default_language()
}

/// First two characters of a locale tag, ASCII lower-cased.
///
/// `en-US` -> `en`, `fr_FR.UTF-8` -> `fr`, `zh-CN` -> `zh`.
pub fn locale_prefix(locale: &str) -> String {
    locale
        .chars()
        .take(2)
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Locale reported by the operating environment, if readable.
pub fn system_locale() -> Option<String> {
    sys_locale::get_locale()
}
