use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::debug;

use crate::catalog::Catalog;
use crate::profile::{self, SaveData};
use crate::sync::{self, ChallengeStats, LogbookStats};
use crate::xml::{self, Document};

use super::error::{CoreError, CoreErrorCode};
use super::types::{ChallengeState, Edit, EngineOptions, LoadedSave, LogbookEntryState};

const UTF8_BOM: &str = "\u{feff}";

#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Arc<Catalog>,
    options: EngineOptions,
}

/// An open profile. The parsed document is never modified; edits only move
/// the current [`SaveData`] and are written back by [`Session::to_xml_string`].
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<Catalog>,
    options: EngineOptions,
    document: Document,
    original: SaveData,
    current: SaveData,
}

/// Parses, validates and extracts a profile save.
pub fn load_save_file(text: &str) -> Result<LoadedSave, CoreError> {
    let document = xml::parse(text.strip_prefix(UTF8_BOM).unwrap_or(text))?;
    profile::validate(&document)?;
    let save_data = profile::extract(&document)?;
    Ok(LoadedSave {
        document,
        save_data,
    })
}

/// Applies `save_data` to a copy of `document` and serializes the result.
pub fn export_save_file(document: &Document, save_data: &SaveData) -> Result<String, CoreError> {
    let updated = profile::apply(document, save_data)?;
    xml::serialize(&updated)
}

impl Engine {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_shared_catalog(Arc::new(catalog))
    }

    pub fn with_shared_catalog(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            options: EngineOptions::default(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }

    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    pub fn open_str(&self, text: &str) -> Result<Session, CoreError> {
        let LoadedSave {
            document,
            save_data,
        } = load_save_file(text)?;
        debug!(
            "opened profile '{}' against a catalog of {} challenges",
            save_data.name,
            self.catalog.challenges().len()
        );
        Ok(Session {
            catalog: Arc::clone(&self.catalog),
            options: self.options,
            document,
            original: save_data.clone(),
            current: save_data,
        })
    }

    pub fn open_bytes<B: AsRef<[u8]>>(&self, bytes: B) -> Result<Session, CoreError> {
        let text = std::str::from_utf8(bytes.as_ref()).map_err(|e| {
            CoreError::new(
                CoreErrorCode::MalformedInput,
                format!("profile is not valid UTF-8: {e}"),
            )
        })?;
        self.open_str(text)
    }

    pub fn open_path<P: AsRef<Path>>(&self, path: P) -> Result<Session, CoreError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Io,
                format!("failed to read {}: {e}", path.display()),
            )
        })?;
        self.open_bytes(bytes)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Session {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn original(&self) -> &SaveData {
        &self.original
    }

    pub fn save_data(&self) -> &SaveData {
        &self.current
    }

    pub fn has_changes(&self) -> bool {
        self.current != self.original
    }

    /// Drops every edit and returns to the state the profile was opened in.
    pub fn reset(&mut self) {
        self.current = self.original.clone();
    }

    pub fn set_coins(&mut self, value: i64) {
        self.current = sync::set_coins(&self.current, value, self.options.max_coins);
    }

    pub fn toggle_challenge(&mut self, achievement: &str, enable: bool) {
        self.current = sync::toggle_challenge(&self.catalog, &self.current, achievement, enable);
    }

    pub fn toggle_challenge_by_id(&mut self, id: &str, enable: bool) -> Result<(), CoreError> {
        let achievement = self
            .catalog
            .challenge(id)
            .map(|challenge| challenge.achievement.clone())
            .ok_or_else(|| unknown_entry("challenge", id))?;
        self.toggle_challenge(&achievement, enable);
        Ok(())
    }

    pub fn toggle_logbook_entry(&mut self, id: &str, enable: bool) -> Result<(), CoreError> {
        if self.catalog.logbook_entry(id).is_none() {
            return Err(unknown_entry("logbook entry", id));
        }
        self.current = sync::toggle_logbook_entry(&self.catalog, &self.current, id, enable);
        Ok(())
    }

    pub fn unlock_all(&mut self) {
        self.current = sync::unlock_all(&self.catalog, &self.current);
    }

    pub fn unlock_all_logbook(&mut self) {
        self.current = sync::unlock_all_logbook(&self.catalog, &self.current);
    }

    pub fn lock_all_challenges(&mut self) {
        self.current = sync::lock_all_challenges(&self.catalog, &self.current);
    }

    pub fn lock_all_logbook(&mut self) {
        self.current = sync::lock_all_logbook(&self.catalog, &self.current);
    }

    pub fn apply_edit(&mut self, edit: &Edit) -> Result<(), CoreError> {
        debug!("applying edit {edit:?}");
        match edit {
            Edit::SetCoins { value } => self.set_coins(*value),
            Edit::SetChallenge { id, enabled } => self.toggle_challenge_by_id(id, *enabled)?,
            Edit::SetAchievement {
                achievement,
                enabled,
            } => self.toggle_challenge(achievement, *enabled),
            Edit::SetLogbookEntry { id, enabled } => self.toggle_logbook_entry(id, *enabled)?,
            Edit::UnlockAll => self.unlock_all(),
            Edit::UnlockAllLogbook => self.unlock_all_logbook(),
            Edit::LockAllChallenges => self.lock_all_challenges(),
            Edit::LockAllLogbook => self.lock_all_logbook(),
        }
        Ok(())
    }

    pub fn apply_edits<'a, I>(&mut self, edits: I) -> Result<(), CoreError>
    where
        I: IntoIterator<Item = &'a Edit>,
    {
        for edit in edits {
            self.apply_edit(edit)?;
        }
        Ok(())
    }

    pub fn is_challenge_unlocked(&self, id: &str) -> bool {
        self.catalog
            .challenge(id)
            .is_some_and(|challenge| sync::is_challenge_unlocked(&self.current, challenge))
    }

    pub fn is_logbook_entry_unlocked(&self, id: &str) -> bool {
        self.catalog
            .logbook_entry(id)
            .is_some_and(|entry| sync::is_logbook_entry_unlocked(&self.current, entry))
    }

    pub fn challenge_stats(&self) -> ChallengeStats {
        sync::challenge_stats(&self.catalog, &self.current)
    }

    pub fn logbook_stats(&self) -> LogbookStats {
        sync::logbook_stats(&self.catalog, &self.current)
    }

    pub fn challenge_states(&self) -> Vec<ChallengeState> {
        self.catalog
            .challenges()
            .iter()
            .map(|challenge| ChallengeState {
                id: challenge.id.clone(),
                name: challenge.name.clone(),
                achievement: challenge.achievement.clone(),
                category: challenge.category,
                dlc: challenge.dlc,
                unlocked: sync::is_challenge_unlocked(&self.current, challenge),
                linked_logbook_entries: self.catalog.logbook_count_for_challenge(&challenge.id),
            })
            .collect()
    }

    pub fn logbook_states(&self) -> Vec<LogbookEntryState> {
        self.catalog
            .logbook_entries()
            .iter()
            .map(|entry| LogbookEntryState {
                id: entry.id.clone(),
                name: entry.name.clone(),
                category: entry.category,
                dlc: entry.dlc,
                unlocked: sync::is_logbook_entry_unlocked(&self.current, entry),
                linked_challenges: self.catalog.challenge_count_for_logbook_entry(&entry.id),
            })
            .collect()
    }

    /// Serializes the profile with the current edits applied.
    pub fn to_xml_string(&self) -> Result<String, CoreError> {
        export_save_file(&self.document, &self.current)
    }

    /// Writes the edited profile to `path`, replacing any existing file.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), CoreError> {
        let path = path.as_ref();
        let xml = self.to_xml_string()?;
        fs::write(path, xml).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Io,
                format!("failed to write {}: {e}", path.display()),
            )
        })?;
        debug!("saved profile to {}", path.display());
        Ok(())
    }

    /// Serializes the profile as it was opened.
    pub fn to_xml_string_unmodified(&self) -> Result<String, CoreError> {
        xml::serialize(&self.document)
    }
}

fn unknown_entry(kind: &str, id: &str) -> CoreError {
    CoreError::new(CoreErrorCode::UnknownEntry, format!("unknown {kind} '{id}'"))
}
