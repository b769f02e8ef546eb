//! Where dictionary documents come from.
//!
//! A source returns the raw body of `<code>.json`; parsing and fallback are
//! the loader's business.

use crate::i18n::{Language, LoadError};
use std::future::Future;
use std::path::PathBuf;
use tracing::debug;

pub trait DictionarySource {
    /// Fetch the raw dictionary document for `lang`.
    fn fetch(&self, lang: Language) -> impl Future<Output = Result<String, LoadError>>;
}

/// Fetches `<base_url>/i18n/<code>.json` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Resource URL for a language.
    pub fn url_for(&self, lang: Language) -> String {
        format!(
            "{}/i18n/{}.json",
            self.base_url.trim_end_matches('/'),
            lang.code()
        )
    }
}

impl DictionarySource for HttpSource {
    async fn fetch(&self, lang: Language) -> Result<String, LoadError> {
        let url = self.url_for(lang);
        debug!("Fetching dictionary from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| LoadError::Transport {
                lang: lang.code().to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                lang: lang.code().to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| LoadError::Transport {
            lang: lang.code().to_string(),
            source,
        })
    }
}

/// Reads `<dir>/<code>.json` from the local filesystem.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, lang: Language) -> PathBuf {
        self.dir.join(format!("{}.json", lang.code()))
    }
}

impl DictionarySource for DirSource {
    async fn fetch(&self, lang: Language) -> Result<String, LoadError> {
        let path = self.path_for(lang);
        debug!("Reading dictionary from {}", path.display());

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| LoadError::Io { path, source })
    }
}
