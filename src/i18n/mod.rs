//! Internationalization (i18n): language selection, dictionary loading and
//! page translation.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages
//! - `language`: Validated `Language` handle
//! - `resolver`: Startup language choice (stored preference, locale, default)
//! - `source`: Where dictionary documents come from (HTTP or a directory)
//! - `dictionary`: Parsed dictionaries and dot-path key resolution
//! - `loader`: Loading with a single fallback hop to the default language
//! - `applier`: The synchronous DOM translation pass
//! - `preference`: Durable storage of the chosen language
//! - `controller`: `I18n`, the entry point used by UI code
//!
//! # Example
//!
//! ```rust,ignore
//! use page_i18n::dom::Page;
//! use page_i18n::i18n::{DirSource, I18n, MemoryPreferenceStore};
//!
//! let i18n = I18n::new(page, DirSource::new("i18n"), MemoryPreferenceStore::new());
//! i18n.start(Some("fr-FR")).await;
//! i18n.switch_language("de").await;
//! ```

pub mod applier;
mod controller;
mod dictionary;
mod error;
mod language;
mod loader;
mod preference;
mod registry;
pub mod resolver;
mod source;

pub use applier::{ApplyReport, ElementKind};
pub use controller::{I18n, SwitchOutcome};
pub use dictionary::TranslationDictionary;
pub use error::{LanguageError, LoadError, PreferenceError};
pub use language::Language;
pub use loader::{DictionaryLoader, Loaded};
pub use preference::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, PREFERENCE_KEY};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use source::{DictionarySource, DirSource, HttpSource};
