//! Page internationalization: resolve a language, load its JSON dictionary
//! (falling back to the default language once), and rewrite annotated
//! elements of a document in place.

pub mod config;
pub mod dom;
pub mod i18n;
