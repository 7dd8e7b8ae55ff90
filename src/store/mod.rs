mod files;

use std::fs;
use std::path::PathBuf;

use crate::config::StorePaths;
use crate::error::StoreError;
use crate::models::*;

type Result<T> = std::result::Result<T, StoreError>;

/// Alias store over a flat directory plus one active config file.
///
/// Holds no state besides the two paths; every call goes to the filesystem.
#[derive(Debug, Clone)]
pub struct AliasStore {
    paths: StorePaths,
}

impl AliasStore {
    pub fn new(paths: StorePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// Create the store directory if it is missing (single level, not recursive).
    ///
    /// Returns `true` when the directory was created by this call.
    pub fn initialize(&self) -> Result<bool> {
        if self.paths.store_dir.is_dir() {
            return Ok(false);
        }
        fs::create_dir(&self.paths.store_dir)?;
        tracing::info!("Initialized alias store at {}", self.paths.store_dir.display());
        Ok(true)
    }

    fn entry_path(&self, alias: &AliasName) -> PathBuf {
        self.paths.store_dir.join(alias.as_str())
    }

    // ============================================================
    // Queries
    // ============================================================

    /// Alias names in lexicographic order. Sub-directories are ignored.
    pub fn aliases(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.paths.store_dir)? {
            let entry = entry?;
            if !entry.path().is_file() {
                tracing::debug!("Skipping non-file store entry {:?}", entry.file_name());
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::warn!("Skipping non UTF-8 store entry {:?}", raw),
            }
        }
        names.sort();
        Ok(names)
    }

    /// First alias (in name order) whose stored bytes equal `content`.
    pub fn find_match(&self, content: &[u8]) -> Result<Option<String>> {
        for name in self.aliases()? {
            if files::content_equals(&self.paths.store_dir.join(&name), content)? {
                return Ok(Some(name));
            }
        }
        Ok(None)
    }

    /// All aliases, with the one matching the active config marked.
    pub fn list(&self) -> Result<Listing> {
        let active = self.read_active()?;
        let mut selected_found = false;
        let mut entries = Vec::new();

        for name in self.aliases()? {
            let selected = match &active {
                Some(bytes) if !selected_found => {
                    files::content_equals(&self.paths.store_dir.join(&name), bytes)?
                }
                _ => false,
            };
            selected_found |= selected;
            entries.push(AliasEntry { name, selected });
        }

        Ok(Listing { entries })
    }

    fn read_active(&self) -> Result<Option<Vec<u8>>> {
        if !self.paths.active_file.is_file() {
            return Ok(None);
        }
        Ok(Some(fs::read(&self.paths.active_file)?))
    }

    // ============================================================
    // Mutations
    // ============================================================

    /// Save the active config under `alias`.
    pub fn add(&self, alias: Option<&str>) -> Result<AliasName> {
        let Some(active) = self.read_active()? else {
            return Err(StoreError::NoActiveConfig(self.paths.active_file.clone()));
        };
        let alias = AliasName::parse(alias, "add")?;

        let target = self.entry_path(&alias);
        if target.exists() {
            return Err(StoreError::AliasExists(alias.to_string()));
        }
        if let Some(existing) = self.find_match(&active)? {
            return Err(StoreError::AlreadySaved(existing));
        }

        let copied = files::copy_bytes(&self.paths.active_file, &target)?;
        tracing::info!("Saved active config as {} ({} bytes)", alias, copied);
        Ok(alias)
    }

    /// Delete the stored alias. The active config is left alone.
    pub fn remove(&self, alias: Option<&str>) -> Result<AliasName> {
        let alias = AliasName::parse(alias, "rm")?;
        let target = self.existing_entry(&alias)?;

        fs::remove_file(&target)?;
        tracing::info!("Removed alias {}", alias);
        Ok(alias)
    }

    /// Overwrite the active config with the stored alias, creating it if absent.
    pub fn activate(&self, alias: Option<&str>) -> Result<AliasName> {
        let alias = AliasName::parse(alias, "use")?;
        let source = self.existing_entry(&alias)?;

        let copied = files::copy_bytes(&source, &self.paths.active_file)?;
        tracing::info!("Activated alias {} ({} bytes)", alias, copied);
        Ok(alias)
    }

    fn existing_entry(&self, alias: &AliasName) -> Result<PathBuf> {
        let path = self.entry_path(alias);
        if !path.is_file() {
            return Err(StoreError::NotFound(alias.to_string()));
        }
        Ok(path)
    }
}
