use anyhow::{Context, Result};
use std::path::PathBuf;

/// Where dictionaries are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryLocation {
    /// Origin serving `i18n/<code>.json`
    Http(String),
    /// Local directory containing `<code>.json`
    Directory(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    // Dictionaries
    pub dictionaries: DictionaryLocation,

    // Persistence
    pub preference_file: PathBuf,

    // Locale
    pub locale_override: Option<String>,
}

/// Read an env var, treating empty values as unset.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let dictionaries = match non_empty_var("I18N_BASE_URL") {
            Some(url) => {
                reqwest::Url::parse(&url)
                    .with_context(|| format!("I18N_BASE_URL is not a valid URL: {}", url))?;
                DictionaryLocation::Http(url)
            }
            None => DictionaryLocation::Directory(PathBuf::from(
                non_empty_var("I18N_DIR").unwrap_or_else(|| "i18n".to_string()),
            )),
        };

        Ok(Self {
            dictionaries,

            preference_file: PathBuf::from(
                non_empty_var("I18N_PREFERENCE_FILE")
                    .unwrap_or_else(|| ".page-i18n.json".to_string()),
            ),

            locale_override: non_empty_var("I18N_LOCALE"),
        })
    }
}
