use std::path::PathBuf;

use thiserror::Error;

/// Why a translation source could not be turned into a table.
///
/// A load either installs a complete table or fails with one of these; no
/// partially parsed table is ever observable.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("yaml parse error: {0}")]
    Yaml(String),

    #[error("invalid translation table at `{path}`: {msg}")]
    Structure { path: String, msg: String },

    #[error("cannot read translation file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub(crate) fn structure(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Structure {
            path: path.into(),
            msg: msg.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum I18nError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("translation store not initialized; load a translation table at startup")]
    NotInitialized,
}
