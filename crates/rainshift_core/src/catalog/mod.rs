//! Static challenge and logbook catalogs plus the cross-reference index that
//! links them.
//!
//! A challenge and a logbook entry are linked when one of the challenge's
//! unlock tokens is string-equal to the entry's unlock token and the entry is
//! an item or equipment entry. The index is computed once when the catalog is
//! built and is read-only afterwards.

mod builtin;
mod index;

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core_api::{CoreError, CoreErrorCode};
use index::CrossReference;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeCategory {
    Survivors,
    Skills,
    Skins,
    Items,
    Artifacts,
    Misc,
}

impl ChallengeCategory {
    pub const ALL: [Self; 6] = [
        Self::Survivors,
        Self::Skills,
        Self::Skins,
        Self::Items,
        Self::Artifacts,
        Self::Misc,
    ];

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Survivors => "survivors",
            Self::Skills => "skills",
            Self::Skins => "skins",
            Self::Items => "items",
            Self::Artifacts => "artifacts",
            Self::Misc => "misc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match *self {
            Self::Survivors => "Survivors",
            Self::Skills => "Skills",
            Self::Skins => "Skins",
            Self::Items => "Items & Equipment",
            Self::Artifacts => "Artifacts",
            Self::Misc => "Miscellaneous",
        }
    }
}

impl fmt::Display for ChallengeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Dlc {
    #[default]
    Base,
    Sotv,
    Sots,
    Ac,
}

impl Dlc {
    pub fn display_name(&self) -> &'static str {
        match *self {
            Self::Base => "Base Game",
            Self::Sotv => "Survivors of the Void",
            Self::Sots => "Seekers of the Storm",
            Self::Ac => "Alloyed Collective",
        }
    }
}

impl fmt::Display for Dlc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogbookCategory {
    Monsters,
    Environments,
    Survivors,
    Items,
    Equipment,
}

impl LogbookCategory {
    pub const ALL: [Self; 5] = [
        Self::Monsters,
        Self::Environments,
        Self::Survivors,
        Self::Items,
        Self::Equipment,
    ];

    /// Only item and equipment entries can be unlocked by a challenge.
    pub fn links_to_challenges(&self) -> bool {
        matches!(self, Self::Items | Self::Equipment)
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Monsters => "monsters",
            Self::Environments => "environments",
            Self::Survivors => "survivors",
            Self::Items => "items",
            Self::Equipment => "equipment",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match *self {
            Self::Monsters => "Monsters",
            Self::Environments => "Environments",
            Self::Survivors => "Survivors",
            Self::Items => "Items",
            Self::Equipment => "Equipment",
        }
    }
}

impl fmt::Display for LogbookCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Challenge {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub achievement: String,
    #[serde(default)]
    pub unlocks: Vec<String>,
    pub category: ChallengeCategory,
    #[serde(default)]
    pub dlc: Dlc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogbookEntry {
    pub id: String,
    pub name: String,
    pub unlock_token: String,
    #[serde(default)]
    pub pickup_token: Option<String>,
    pub category: LogbookCategory,
    #[serde(default)]
    pub dlc: Dlc,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    challenges: Vec<Challenge>,
    #[serde(default)]
    logbook_entries: Vec<LogbookEntry>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    challenges: Vec<Challenge>,
    logbook_entries: Vec<LogbookEntry>,
    index: CrossReference,
}

impl Catalog {
    /// Builds the catalog and its cross-reference index.
    ///
    /// Fails with [`CoreErrorCode::Catalog`] when ids are duplicated or two
    /// item/equipment entries declare the same unlock token.
    pub fn new(
        challenges: Vec<Challenge>,
        logbook_entries: Vec<LogbookEntry>,
    ) -> Result<Self, CoreError> {
        let index = CrossReference::build(&challenges, &logbook_entries)?;
        debug!(
            "built catalog: {} challenges, {} logbook entries, {} linked challenges",
            challenges.len(),
            logbook_entries.len(),
            index.linked_challenge_count()
        );
        Ok(Self {
            challenges,
            logbook_entries,
            index,
        })
    }

    /// The game's built-in challenge and logbook tables.
    pub fn builtin() -> Self {
        Self::new(builtin::challenges(), builtin::logbook_entries())
            .expect("built-in catalog tables are consistent")
    }

    /// Loads a catalog from a JSON document with `challenges` and
    /// `logbook_entries` arrays.
    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        let file: CatalogFile = serde_json::from_str(text).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Catalog,
                format!("failed to parse catalog JSON: {e}"),
            )
        })?;
        Self::new(file.challenges, file.logbook_entries)
    }

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn logbook_entries(&self) -> &[LogbookEntry] {
        &self.logbook_entries
    }

    pub fn challenge(&self, id: &str) -> Option<&Challenge> {
        self.index
            .challenge_index(id)
            .map(|index| &self.challenges[index])
    }

    pub fn logbook_entry(&self, id: &str) -> Option<&LogbookEntry> {
        self.index
            .entry_index(id)
            .map(|index| &self.logbook_entries[index])
    }

    /// Challenges awarded by an achievement token. Several challenges can
    /// share one achievement.
    pub fn challenges_for_achievement(&self, achievement: &str) -> Vec<&Challenge> {
        self.index
            .challenges_for_achievement(achievement)
            .iter()
            .map(|&index| &self.challenges[index])
            .collect()
    }

    pub fn logbook_entries_for_challenge(&self, challenge_id: &str) -> Vec<&LogbookEntry> {
        self.index
            .challenge_index(challenge_id)
            .map(|index| {
                self.index
                    .entries_for_challenge(index)
                    .iter()
                    .map(|&entry| &self.logbook_entries[entry])
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn challenges_for_logbook_entry(&self, entry_id: &str) -> Vec<&Challenge> {
        self.index
            .entry_index(entry_id)
            .map(|index| {
                self.index
                    .challenges_for_entry(index)
                    .iter()
                    .map(|&challenge| &self.challenges[challenge])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The item or equipment entry that declares `unlock_token`.
    pub fn logbook_entry_by_unlock_token(&self, unlock_token: &str) -> Option<&LogbookEntry> {
        self.index
            .entry_for_token(unlock_token)
            .map(|index| &self.logbook_entries[index])
    }

    pub fn challenges_for_unlock_token(&self, unlock_token: &str) -> Vec<&Challenge> {
        self.index
            .challenges_for_token(unlock_token)
            .iter()
            .map(|&index| &self.challenges[index])
            .collect()
    }

    pub fn logbook_count_for_challenge(&self, challenge_id: &str) -> usize {
        self.index
            .challenge_index(challenge_id)
            .map_or(0, |index| self.index.entries_for_challenge(index).len())
    }

    pub fn challenge_count_for_logbook_entry(&self, entry_id: &str) -> usize {
        self.index
            .entry_index(entry_id)
            .map_or(0, |index| self.index.challenges_for_entry(index).len())
    }

    pub fn has_logbook_connection(&self, challenge_id: &str) -> bool {
        self.logbook_count_for_challenge(challenge_id) > 0
    }

    pub fn has_challenge_connection(&self, entry_id: &str) -> bool {
        self.challenge_count_for_logbook_entry(entry_id) > 0
    }
}
