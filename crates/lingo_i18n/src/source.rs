//! Locating and reading translation files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::table::TranslationTable;

/// Folder (under a data folder) holding the translation files.
pub const LANGUAGE_DIR: &str = "language";
/// Operator-provided translations; preferred when present.
pub const CUSTOM_FILE: &str = "i18n.yml";
/// Translations shipped with the host.
pub const DEFAULT_FILE: &str = "i18n-default.yml";

/// Pick the translation file inside `data_dir`.
///
/// `language/i18n.yml` wins over `language/i18n-default.yml`.
pub fn locate(data_dir: &Path) -> Result<PathBuf, LoadError> {
    let dir = data_dir.join(LANGUAGE_DIR);
    for name in [CUSTOM_FILE, DEFAULT_FILE] {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    Err(LoadError::Io {
        path: dir.join(DEFAULT_FILE),
        source: std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("neither {CUSTOM_FILE} nor {DEFAULT_FILE} exists"),
        ),
    })
}

/// Read and parse a translation file.
pub fn read(path: &Path) -> Result<TranslationTable, LoadError> {
    let src = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    TranslationTable::parse(&src)
}
