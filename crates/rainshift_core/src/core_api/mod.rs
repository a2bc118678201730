mod engine;
mod error;
mod types;

pub use engine::{Engine, Session, export_save_file, load_save_file};
pub use error::{CoreError, CoreErrorCode};
pub use types::{
    ChallengeState, DEFAULT_MAX_COINS, Edit, EngineOptions, LoadedSave, LogbookEntryState,
};
