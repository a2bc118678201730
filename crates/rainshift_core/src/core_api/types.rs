use serde::{Deserialize, Serialize};

use crate::catalog::{ChallengeCategory, Dlc, LogbookCategory};
use crate::profile::SaveData;
use crate::xml::Document;

/// The largest coin count the game stores without overflowing its signed
/// counter.
pub const DEFAULT_MAX_COINS: u32 = i32::MAX as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineOptions {
    #[serde(default = "default_max_coins")]
    pub max_coins: u32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_coins: DEFAULT_MAX_COINS,
        }
    }
}

fn default_max_coins() -> u32 {
    DEFAULT_MAX_COINS
}

/// A parsed profile: the untouched tree plus its typed projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSave {
    pub document: Document,
    pub save_data: SaveData,
}

/// One requested change, as sent by the CLI or the browser host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    SetCoins { value: i64 },
    /// Toggles a challenge by catalog id.
    SetChallenge { id: String, enabled: bool },
    /// Toggles an achievement token directly, known to the catalog or not.
    SetAchievement { achievement: String, enabled: bool },
    SetLogbookEntry { id: String, enabled: bool },
    UnlockAll,
    UnlockAllLogbook,
    LockAllChallenges,
    LockAllLogbook,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeState {
    pub id: String,
    pub name: String,
    pub achievement: String,
    pub category: ChallengeCategory,
    pub dlc: Dlc,
    pub unlocked: bool,
    pub linked_logbook_entries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogbookEntryState {
    pub id: String,
    pub name: String,
    pub category: LogbookCategory,
    pub dlc: Dlc,
    pub unlocked: bool,
    pub linked_challenges: usize,
}
