//! Language preference storage
//!
//! The selected language is the only state that survives across
//! sessions; everything else dies with the page.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chat_core::Language;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::warn;

use crate::error::Result;

/// Persistence seam for the language choice.
#[async_trait]
pub trait LanguageStore: Send + Sync {
    /// Load the stored language, if any.
    async fn load(&self) -> Result<Option<Language>>;

    /// Persist the language choice.
    async fn save(&self, language: Language) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredLanguage {
    language: Language,
}

/// File-based language storage.
#[derive(Debug, Clone)]
pub struct FileLanguageStore {
    path: PathBuf,
}

impl FileLanguageStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl LanguageStore for FileLanguageStore {
    async fn load(&self) -> Result<Option<Language>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path).await?;
        match serde_json::from_str::<StoredLanguage>(&contents) {
            Ok(stored) => Ok(Some(stored.language)),
            Err(err) => {
                // A corrupt file falls back to the default language.
                warn!(error = %err, "ignoring unreadable language store");
                Ok(None)
            }
        }
    }

    async fn save(&self, language: Language) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let contents = serde_json::to_string_pretty(&StoredLanguage { language })?;
        fs::write(&self.path, contents).await?;

        Ok(())
    }
}
