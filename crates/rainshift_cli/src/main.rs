use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use log::{LevelFilter, debug};
use rainshift_core::catalog::Catalog;
use rainshift_core::core_api::{
    CoreErrorCode, DEFAULT_MAX_COINS, Edit, Engine, EngineOptions, Session,
};
use rainshift_render::{
    FieldSelection, JsonStyle, TextRenderOptions, TextStyle, render_json_full,
    render_json_selected, render_text_with_options,
};
use serde_json::Value as JsonValue;

/// Inspect and edit a Risk of Rain 2 UserProfile save.
///
/// Edits run in a fixed order: bulk locks, bulk unlocks, per-entry locks,
/// per-entry unlocks, then coins.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "PROFILE.xml")]
    path: PathBuf,
    #[arg(long)]
    name: bool,
    #[arg(long)]
    coins: bool,
    #[arg(long)]
    achievements: bool,
    #[arg(long = "unviewed")]
    unviewed_achievements: bool,
    #[arg(long = "viewed-unlockables")]
    viewed_unlockables: bool,
    #[arg(long = "viewed-viewables")]
    viewed_viewables: bool,
    #[arg(long)]
    unlocks: bool,
    #[arg(long = "pickups")]
    discovered_pickups: bool,
    #[arg(long)]
    stats: bool,
    #[arg(long = "challenge-stats")]
    challenge_stats: bool,
    #[arg(long = "logbook-stats")]
    logbook_stats: bool,
    #[arg(long)]
    challenges: bool,
    #[arg(long)]
    logbook: bool,
    #[arg(long)]
    json: bool,
    /// List every challenge and logbook entry in the text summary.
    #[arg(long)]
    list: bool,
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Load challenges and logbook entries from a JSON catalog instead of the built-in tables.
    #[arg(long, value_name = "FILE.json")]
    catalog: Option<PathBuf>,
    #[arg(long = "max-coins", value_name = "N", default_value_t = DEFAULT_MAX_COINS)]
    max_coins: u32,
    #[arg(long = "set-coins", value_name = "N", allow_hyphen_values = true)]
    set_coins: Option<i64>,
    /// Complete a challenge by id.
    #[arg(long = "unlock", value_name = "CHALLENGE")]
    unlock: Vec<String>,
    /// Lock a challenge by id.
    #[arg(long = "lock", value_name = "CHALLENGE")]
    lock: Vec<String>,
    /// Discover a logbook entry by id.
    #[arg(long = "discover", value_name = "ENTRY")]
    discover: Vec<String>,
    /// Forget a logbook entry by id.
    #[arg(long = "forget", value_name = "ENTRY")]
    forget: Vec<String>,
    #[arg(long = "unlock-all")]
    unlock_all: bool,
    #[arg(long = "unlock-all-logbook")]
    unlock_all_logbook: bool,
    #[arg(long = "lock-all-challenges")]
    lock_all_challenges: bool,
    #[arg(long = "lock-all-logbook")]
    lock_all_logbook: bool,
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn field_selection(&self) -> FieldSelection {
        FieldSelection {
            name: self.name,
            coins: self.coins,
            achievements: self.achievements,
            unviewed_achievements: self.unviewed_achievements,
            viewed_unlockables: self.viewed_unlockables,
            viewed_viewables: self.viewed_viewables,
            unlocks: self.unlocks,
            discovered_pickups: self.discovered_pickups,
            stats: self.stats,
            challenge_stats: self.challenge_stats,
            logbook_stats: self.logbook_stats,
            challenges: self.challenges,
            logbook: self.logbook,
        }
    }

    fn requested_edits(&self) -> Vec<Edit> {
        let mut edits = Vec::new();
        if self.lock_all_challenges {
            edits.push(Edit::LockAllChallenges);
        }
        if self.lock_all_logbook {
            edits.push(Edit::LockAllLogbook);
        }
        if self.unlock_all {
            edits.push(Edit::UnlockAll);
        }
        if self.unlock_all_logbook {
            edits.push(Edit::UnlockAllLogbook);
        }
        edits.extend(self.lock.iter().map(|id| Edit::SetChallenge {
            id: id.clone(),
            enabled: false,
        }));
        edits.extend(self.forget.iter().map(|id| Edit::SetLogbookEntry {
            id: id.clone(),
            enabled: false,
        }));
        edits.extend(self.unlock.iter().map(|id| Edit::SetChallenge {
            id: id.clone(),
            enabled: true,
        }));
        edits.extend(self.discover.iter().map(|id| Edit::SetLogbookEntry {
            id: id.clone(),
            enabled: true,
        }));
        if let Some(value) = self.set_coins {
            edits.push(Edit::SetCoins { value });
        }
        edits
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let fields = cli.field_selection();
    let edits = cli.requested_edits();
    let has_edits = !edits.is_empty();

    if has_edits && cli.output.is_none() {
        eprintln!("edit flags require --output <PATH>");
        process::exit(2);
    }
    if !has_edits && cli.output.is_some() {
        eprintln!("--output requires at least one edit flag");
        process::exit(2);
    }

    let catalog = match &cli.catalog {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading {}: {e}", path.display());
                process::exit(1);
            });
            Catalog::from_json(&text).unwrap_or_else(|e| {
                eprintln!("Error loading catalog: {}", path.display());
                eprintln!("  {e}");
                process::exit(1);
            })
        }
        None => Catalog::builtin(),
    };
    let engine = Engine::new(catalog).with_options(EngineOptions {
        max_coins: cli.max_coins,
    });

    let mut session = engine.open_path(&cli.path).unwrap_or_else(|e| {
        if e.code == CoreErrorCode::Io {
            eprintln!("Error reading profile: {}", cli.path.display());
        } else {
            eprintln!("Error parsing profile: {}", cli.path.display());
        }
        eprintln!("  {e}");
        process::exit(1);
    });

    if let (true, Some(out_path)) = (has_edits, &cli.output) {
        session.apply_edits(&edits).unwrap_or_else(|e| {
            eprintln!("Error applying edit: {e}");
            process::exit(1);
        });

        session.save_to_path(out_path).unwrap_or_else(|e| {
            eprintln!("Error writing edited profile: {}", out_path.display());
            eprintln!("  {e}");
            process::exit(1);
        });
        debug!("wrote {} edits to {}", edits.len(), out_path.display());
    }

    if cli.json {
        let json = if fields.is_any_selected() {
            render_json_selected(&session, &fields, JsonStyle::CanonicalV1)
        } else {
            render_json_full(&session, JsonStyle::CanonicalV1)
        };
        let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    if fields.is_any_selected() {
        for (key, value) in selected_pairs(&fields, &session) {
            println!("{key}={value}");
        }
        return;
    }

    if let Some(out_path) = &cli.output {
        println!("Wrote edited profile to {}", out_path.display());
        return;
    }

    print!(
        "{}",
        render_text_with_options(
            &session,
            TextStyle::Summary,
            TextRenderOptions { verbose: cli.list },
        )
    );
}

fn selected_pairs(fields: &FieldSelection, session: &Session) -> Vec<(String, String)> {
    let json = render_json_selected(session, fields, JsonStyle::CanonicalV1);
    let JsonValue::Object(map) = json else {
        return Vec::new();
    };

    let mut pairs = Vec::new();
    for (key, value) in map {
        match key.as_str() {
            "stats" => {
                if let JsonValue::Object(stats) = value {
                    for (name, stat) in stats {
                        pairs.push((format!("stat.{name}"), scalar_to_string(&stat)));
                    }
                }
            }
            "challenge_stats" | "logbook_stats" => {
                pairs.push((key, format!("{}/{}", value["unlocked"], value["total"])));
            }
            "challenges" | "logbook" => {
                let prefix = if key == "challenges" {
                    "challenge"
                } else {
                    "logbook"
                };
                for state in value.as_array().into_iter().flatten() {
                    let unlocked = state["unlocked"].as_bool().unwrap_or(false);
                    pairs.push((
                        format!("{prefix}.{}", scalar_to_string(&state["id"])),
                        if unlocked { "unlocked" } else { "locked" }.to_string(),
                    ));
                }
            }
            _ => {
                let rendered = scalar_to_string(&value);
                pairs.push((key, rendered));
            }
        }
    }
    pairs
}

fn scalar_to_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Array(items) => items
            .iter()
            .map(scalar_to_string)
            .collect::<Vec<_>>()
            .join(" "),
        JsonValue::Null => "unknown".to_string(),
        other => other.to_string(),
    }
}
