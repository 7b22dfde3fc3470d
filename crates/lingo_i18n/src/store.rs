use std::path::Path;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::{info, warn};

use crate::error::{I18nError, LoadError};
use crate::source;
use crate::table::TranslationTable;

/// Process-wide store, for hosts that prefer not to thread a store around.
static GLOBAL_STORE: OnceLock<TranslationStore> = OnceLock::new();

/// Holds the currently installed [`TranslationTable`].
///
/// Readers get an `Arc` snapshot; a reload swaps the `Arc` in one step, so a
/// resolution that already holds a snapshot never sees a half-updated table.
/// A failed load leaves the previous table (or the uninitialized state) in
/// place.
#[derive(Debug, Default)]
pub struct TranslationStore {
    table: RwLock<Option<Arc<TranslationTable>>>,
}

impl TranslationStore {
    /// An empty store; [`TranslationStore::get`] fails until a load succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide store. Starts empty.
    pub fn global() -> &'static TranslationStore {
        GLOBAL_STORE.get_or_init(TranslationStore::new)
    }

    /// Parse `src` and install it as the current table.
    pub fn load(&self, src: &str) -> Result<Arc<TranslationTable>, I18nError> {
        let table = TranslationTable::parse(src).map_err(rejected)?;
        Ok(self.install(table))
    }

    /// Read `path` and install it as the current table.
    pub fn load_path(&self, path: &Path) -> Result<Arc<TranslationTable>, I18nError> {
        let table = source::read(path).map_err(rejected)?;
        info!(path = %path.display(), "translation file read");
        Ok(self.install(table))
    }

    /// Install an already built table, replacing the previous one wholesale.
    pub fn install(&self, table: TranslationTable) -> Arc<TranslationTable> {
        let table = Arc::new(table);
        info!(
            keys = table.len(),
            locales = table.locales().len(),
            default_locale = %table.default_locale(),
            "translation table installed"
        );

        let mut slot = self.table.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::clone(&table));
        table
    }

    /// Snapshot of the current table.
    pub fn get(&self) -> Result<Arc<TranslationTable>, I18nError> {
        self.try_get().ok_or(I18nError::NotInitialized)
    }

    pub fn try_get(&self) -> Option<Arc<TranslationTable>> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
    }

    pub fn is_initialized(&self) -> bool {
        self.try_get().is_some()
    }
}

fn rejected(err: LoadError) -> LoadError {
    warn!(error = %err, "translation table rejected; keeping previous table");
    err
}
