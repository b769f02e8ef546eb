//! Public entry point tying resolution, loading, application and persistence
//! together.
//!
//! Execution is single-threaded. The document lives in a `RefCell` and is only
//! borrowed inside the synchronous part of a load cycle, never across the
//! fetch. Two switches started before either settles both run to completion;
//! whichever settles last determines the final document and preference.

use crate::dom::Document;
use crate::i18n::applier::{self, ApplyReport};
use crate::i18n::resolver::resolve_initial_language;
use crate::i18n::{DictionaryLoader, DictionarySource, Language, PreferenceStore};
use std::cell::{Cell, Ref, RefCell};
use tracing::{debug, info, warn};

/// How a load cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// A dictionary was applied. `language` may be the default language if
    /// the requested one failed.
    Applied {
        language: Language,
        report: ApplyReport,
    },
    /// Neither the requested nor the default dictionary could be loaded. The
    /// document is untouched.
    Failed,
    /// The code was not a supported language. Nothing happened.
    Ignored,
}

impl SwitchOutcome {
    /// The language now in effect, if this cycle applied one.
    pub fn language(&self) -> Option<Language> {
        match self {
            SwitchOutcome::Applied { language, .. } => Some(*language),
            SwitchOutcome::Failed | SwitchOutcome::Ignored => None,
        }
    }
}

pub struct I18n<D, S, P> {
    document: RefCell<D>,
    loader: DictionaryLoader<S>,
    preferences: P,
    active: Cell<Option<Language>>,
}

impl<D, S, P> I18n<D, S, P>
where
    D: Document,
    S: DictionarySource,
    P: PreferenceStore,
{
    pub fn new(document: D, source: S, preferences: P) -> Self {
        Self {
            document: RefCell::new(document),
            loader: DictionaryLoader::new(source),
            preferences,
            active: Cell::new(None),
        }
    }

    /// Startup flow: resolve the initial language from the stored preference
    /// and `locale`, then load it.
    pub async fn start(&self, locale: Option<&str>) -> SwitchOutcome {
        let stored = self.preferences.load();
        let language = resolve_initial_language(stored.as_deref(), locale);
        info!("Initial language: {}", language);
        self.load_language(language).await
    }

    /// Switch to `code`. Unsupported codes are ignored without any I/O.
    pub async fn switch_language(&self, code: &str) -> SwitchOutcome {
        match Language::from_code(code) {
            Ok(language) => self.load_language(language).await,
            Err(e) => {
                debug!("Ignoring language switch: {}", e);
                SwitchOutcome::Ignored
            }
        }
    }

    /// One load cycle: fetch (with fallback), apply, persist, then update the
    /// document language.
    pub async fn load_language(&self, language: Language) -> SwitchOutcome {
        let loaded = match self.loader.load(language).await {
            Ok(loaded) => loaded,
            Err(_) => return SwitchOutcome::Failed,
        };

        let report = {
            let mut document = self.document.borrow_mut();
            let report = applier::apply(&mut *document, &loaded.dictionary);

            if let Err(e) = self.preferences.save(loaded.language.code()) {
                warn!("Could not persist language preference: {}", e);
            }

            document.set_document_language(loaded.language.code());
            report
        };

        self.active.set(Some(loaded.language));
        info!("Language loaded: {}", loaded.language);

        SwitchOutcome::Applied {
            language: loaded.language,
            report,
        }
    }

    /// Language of the last successful cycle.
    pub fn active_language(&self) -> Option<Language> {
        self.active.get()
    }

    pub fn document(&self) -> Ref<'_, D> {
        self.document.borrow()
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn into_document(self) -> D {
        self.document.into_inner()
    }
}
