//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is a lazily initialized, immutable singleton (`OnceLock`).
//! Its order is the order in which languages are offered in the switcher.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Language code as used in resource paths (e.g., "en", "zh-cn")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Français")
    pub native_name: &'static str,

    /// Short label shown in the language switcher (e.g., "EN", "简中")
    pub label: &'static str,

    /// Whether this is the default language (only one should be true)
    pub is_default: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Codes are matched exactly; "EN" is not "en".
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Check whether a code belongs to the supported set.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// All supported languages, in switcher order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Supported language codes, in switcher order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.languages.iter().map(|lang| lang.code).collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one default language
    /// (this indicates a configuration error in `default_languages`).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.as_slice() {
            [only] => *only,
            [] => panic!("No default language found in registry"),
            _ => panic!("Multiple default languages found in registry"),
        }
    }
}

fn entry(
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    label: &'static str,
) -> LanguageConfig {
    LanguageConfig {
        code,
        name,
        native_name,
        label,
        is_default: false,
    }
}

/// Default language configurations.
///
/// English is the default; every other entry is a fallback-capable target.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            is_default: true,
            ..entry("en", "English", "English", "EN")
        },
        entry("vi", "Vietnamese", "Tiếng Việt", "VI"),
        entry("fr", "French", "Français", "FR"),
        entry("de", "German", "Deutsch", "DE"),
        entry("ja", "Japanese", "日本語", "JA"),
        entry("zh-cn", "Chinese (Simplified)", "简体中文", "简中"),
        entry("pt", "Portuguese", "Português", "PT"),
        entry("es", "Spanish", "Español", "ES"),
        entry("ru", "Russian", "Русский", "RU"),
        entry("ko", "Korean", "한국어", "KO"),
        entry("zh-tw", "Chinese (Traditional)", "繁體中文", "繁中"),
        entry("it", "Italian", "Italiano", "IT"),
        entry("id", "Indonesian", "Bahasa Indonesia", "ID"),
        entry("hi", "Hindi", "हिन्दी", "HI"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_registry_has_fourteen_languages_in_order() {
        let codes = LanguageRegistry::get().codes();
        assert_eq!(
            codes,
            vec![
                "en", "vi", "fr", "de", "ja", "zh-cn", "pt", "es", "ru", "ko", "zh-tw", "it",
                "id", "hi"
            ]
        );
    }

    #[test]
    fn test_default_is_english() {
        let default = LanguageRegistry::get().default_language();
        assert_eq!(default.code, "en");
        assert!(default.is_default);
    }

    #[test]
    fn test_exactly_one_default() {
        let count = LanguageRegistry::get()
            .list_all()
            .iter()
            .filter(|lang| lang.is_default)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_get_by_code_french() {
        let config = LanguageRegistry::get().get_by_code("fr").unwrap();
        assert_eq!(config.name, "French");
        assert_eq!(config.native_name, "Français");
        assert_eq!(config.label, "FR");
        assert!(!config.is_default);
    }

    #[test]
    fn test_chinese_labels() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.get_by_code("zh-cn").unwrap().label, "简中");
        assert_eq!(registry.get_by_code("zh-tw").unwrap().label, "繁中");
    }

    #[test]
    fn test_labels_are_uppercased_codes_otherwise() {
        for lang in LanguageRegistry::get().list_all() {
            if !lang.code.starts_with("zh-") {
                assert_eq!(lang.label, lang.code.to_uppercase());
            }
        }
    }

    #[test]
    fn test_is_supported() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_supported("en"));
        assert!(registry.is_supported("zh-tw"));
        assert!(!registry.is_supported("zh"));
        assert!(!registry.is_supported("EN"));
        assert!(!registry.is_supported(""));
    }
}
