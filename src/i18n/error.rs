//! Error types for the i18n subsystem.
//!
//! None of these ever reach the caller of `switch_language`; they are turned
//! into log lines and outcomes at the controller boundary.

use std::path::PathBuf;
use thiserror::Error;

/// A code outside the supported language set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LanguageError {
    #[error("unsupported language code: '{0}'")]
    Unsupported(String),
}

/// Failure to obtain a usable dictionary for one language.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not fetch {lang}.json: {source}")]
    Transport {
        lang: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not load {lang}.json: HTTP {status}")]
    Status { lang: String, status: u16 },

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{lang}.json is not valid JSON: {source}")]
    Malformed {
        lang: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{lang}.json is not a dictionary (top level must be an object)")]
    NotAMapping { lang: String },
}

/// Failure to read or write the durable language preference.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("preference file {} is not a JSON object: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
