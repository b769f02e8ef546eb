//! Dictionary loading with a single fallback hop to the default language.

use crate::i18n::{DictionarySource, Language, LoadError, TranslationDictionary};
use tracing::{error, warn};

/// A dictionary together with the language that actually produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub language: Language,
    pub dictionary: TranslationDictionary,
}

/// Fallback hops allowed after the requested language fails.
const MAX_FALLBACK_HOPS: u32 = 1;

pub struct DictionaryLoader<S> {
    source: S,
}

impl<S: DictionarySource> DictionaryLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load `lang`, falling back once to the default language on failure.
    ///
    /// Every failed attempt is logged. If the default language fails too, its
    /// error is returned; there is no further retry.
    pub async fn load(&self, lang: Language) -> Result<Loaded, LoadError> {
        let default = Language::default_language();
        let mut language = lang;
        let mut hops = 0;

        loop {
            match self.load_one(language).await {
                Ok(dictionary) => {
                    return Ok(Loaded {
                        language,
                        dictionary,
                    })
                }
                Err(e) => {
                    error!("Error loading language {}: {}", language, e);
                    if language == default || hops >= MAX_FALLBACK_HOPS {
                        return Err(e);
                    }
                    warn!("Falling back from {} to {}", language, default);
                    language = default;
                    hops += 1;
                }
            }
        }
    }

    async fn load_one(&self, lang: Language) -> Result<TranslationDictionary, LoadError> {
        let body = self.source.fetch(lang).await?;
        TranslationDictionary::parse(lang.code(), &body)
    }
}
