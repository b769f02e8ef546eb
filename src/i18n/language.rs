//! Language type: validated language representation.
//!
//! A `Language` can only be built from a code present in the registry, so any
//! value of this type is safe to hand to a loader or a preference store.

use crate::i18n::{LanguageConfig, LanguageError, LanguageRegistry};
use std::fmt;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// Language code (e.g., "en", "zh-cn")
    code: &'static str,
}

impl Language {
    /// English, the default language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is a member of the supported set
    /// * `Err(LanguageError::Unsupported)` otherwise
    pub fn from_code(code: &str) -> Result<Language, LanguageError> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| Language { code: config.code })
            .ok_or_else(|| LanguageError::Unsupported(code.to_string()))
    }

    /// Get the default language.
    pub fn default_language() -> Language {
        Language {
            code: LanguageRegistry::get().default_language().code,
        }
    }

    /// Get the language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry. This cannot happen for a
    /// Language built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Short label for the language switcher ("EN", "简中", ...).
    pub fn label(&self) -> &'static str {
        self.config().label
    }

    /// Whether this is the default language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
