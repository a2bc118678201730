use std::fmt::Write as _;

use rainshift_core::catalog::{ChallengeCategory, LogbookCategory};
use rainshift_core::core_api::{ChallengeState, LogbookEntryState, Session};
use rainshift_core::sync::{CategoryCount, ChallengeStats, LogbookStats};
use serde_json::{Map as JsonMap, Value as JsonValue};

const SHEET_WIDTH: usize = 72;
const LABEL_WIDTH: usize = 24;
const ENTRY_NAME_WIDTH: usize = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    CanonicalV1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRenderOptions {
    /// List every challenge and logbook entry, not only the totals.
    pub verbose: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub name: bool,
    pub coins: bool,
    pub achievements: bool,
    pub unviewed_achievements: bool,
    pub viewed_unlockables: bool,
    pub viewed_viewables: bool,
    pub unlocks: bool,
    pub discovered_pickups: bool,
    pub stats: bool,
    pub challenge_stats: bool,
    pub logbook_stats: bool,
    pub challenges: bool,
    pub logbook: bool,
}

impl FieldSelection {
    pub fn is_any_selected(&self) -> bool {
        self.name
            || self.coins
            || self.achievements
            || self.unviewed_achievements
            || self.viewed_unlockables
            || self.viewed_viewables
            || self.unlocks
            || self.discovered_pickups
            || self.stats
            || self.challenge_stats
            || self.logbook_stats
            || self.challenges
            || self.logbook
    }
}

pub fn render_json_full(session: &Session, style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(default_json(session)),
    }
}

pub fn render_json_selected(
    session: &Session,
    fields: &FieldSelection,
    style: JsonStyle,
) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(selected_json(fields, session)),
    }
}

pub fn render_text(session: &Session, style: TextStyle) -> String {
    render_text_with_options(session, style, TextRenderOptions::default())
}

pub fn render_text_with_options(
    session: &Session,
    style: TextStyle,
    options: TextRenderOptions,
) -> String {
    match style {
        TextStyle::Summary => render_summary_impl(session, options),
    }
}

fn selected_json(fields: &FieldSelection, session: &Session) -> JsonMap<String, JsonValue> {
    let data = session.save_data();
    let mut out = JsonMap::new();

    if fields.name {
        out.insert("name".to_string(), JsonValue::String(data.name.clone()));
    }
    if fields.coins {
        out.insert("coins".to_string(), JsonValue::from(data.coins));
    }
    if fields.challenge_stats {
        out.insert(
            "challenge_stats".to_string(),
            challenge_stats_to_json(&session.challenge_stats()),
        );
    }
    if fields.logbook_stats {
        out.insert(
            "logbook_stats".to_string(),
            logbook_stats_to_json(&session.logbook_stats()),
        );
    }
    if fields.achievements {
        out.insert("achievements".to_string(), tokens_to_json(&data.achievements));
    }
    if fields.unviewed_achievements {
        out.insert(
            "unviewed_achievements".to_string(),
            tokens_to_json(&data.unviewed_achievements),
        );
    }
    if fields.viewed_unlockables {
        out.insert(
            "viewed_unlockables".to_string(),
            tokens_to_json(&data.viewed_unlockables),
        );
    }
    if fields.viewed_viewables {
        out.insert(
            "viewed_viewables".to_string(),
            tokens_to_json(&data.viewed_viewables),
        );
    }
    if fields.unlocks {
        out.insert("unlocks".to_string(), tokens_to_json(&data.unlocks));
    }
    if fields.discovered_pickups {
        out.insert(
            "discovered_pickups".to_string(),
            tokens_to_json(&data.discovered_pickups),
        );
    }
    if fields.stats {
        out.insert("stats".to_string(), stats_to_json(session));
    }
    if fields.challenges {
        out.insert(
            "challenges".to_string(),
            JsonValue::Array(
                session
                    .challenge_states()
                    .iter()
                    .map(challenge_state_to_json)
                    .collect(),
            ),
        );
    }
    if fields.logbook {
        out.insert(
            "logbook".to_string(),
            JsonValue::Array(
                session
                    .logbook_states()
                    .iter()
                    .map(logbook_state_to_json)
                    .collect(),
            ),
        );
    }

    out
}

fn default_json(session: &Session) -> JsonMap<String, JsonValue> {
    let all = FieldSelection {
        name: true,
        coins: true,
        achievements: true,
        unviewed_achievements: true,
        viewed_unlockables: true,
        viewed_viewables: true,
        unlocks: true,
        discovered_pickups: true,
        stats: true,
        challenge_stats: true,
        logbook_stats: true,
        challenges: true,
        logbook: true,
    };
    let mut out = selected_json(&all, session);
    out.insert(
        "has_changes".to_string(),
        JsonValue::Bool(session.has_changes()),
    );
    out
}

fn tokens_to_json<'a>(tokens: impl IntoIterator<Item = &'a String>) -> JsonValue {
    JsonValue::Array(
        tokens
            .into_iter()
            .map(|token| JsonValue::String(token.clone()))
            .collect(),
    )
}

fn stats_to_json(session: &Session) -> JsonValue {
    let mut m = JsonMap::new();
    for (name, value) in &session.save_data().stats {
        m.insert(name.clone(), JsonValue::String(value.clone()));
    }
    JsonValue::Object(m)
}

fn category_count_to_json(key: &str, unlocked: usize, total: usize) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("category".to_string(), JsonValue::String(key.to_string()));
    m.insert("unlocked".to_string(), JsonValue::from(unlocked));
    m.insert("total".to_string(), JsonValue::from(total));
    JsonValue::Object(m)
}

fn challenge_stats_to_json(stats: &ChallengeStats) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("unlocked".to_string(), JsonValue::from(stats.unlocked));
    m.insert("total".to_string(), JsonValue::from(stats.total));
    m.insert(
        "achievements_in_save".to_string(),
        JsonValue::from(stats.achievements_in_save),
    );
    m.insert(
        "by_category".to_string(),
        JsonValue::Array(
            stats
                .by_category
                .iter()
                .map(|c| category_count_to_json(c.category.as_str(), c.unlocked, c.total))
                .collect(),
        ),
    );
    JsonValue::Object(m)
}

fn logbook_stats_to_json(stats: &LogbookStats) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("unlocked".to_string(), JsonValue::from(stats.unlocked));
    m.insert("total".to_string(), JsonValue::from(stats.total));
    m.insert(
        "by_category".to_string(),
        JsonValue::Array(
            stats
                .by_category
                .iter()
                .map(|c| category_count_to_json(c.category.as_str(), c.unlocked, c.total))
                .collect(),
        ),
    );
    JsonValue::Object(m)
}

fn challenge_state_to_json(state: &ChallengeState) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("id".to_string(), JsonValue::String(state.id.clone()));
    m.insert("name".to_string(), JsonValue::String(state.name.clone()));
    m.insert(
        "achievement".to_string(),
        JsonValue::String(state.achievement.clone()),
    );
    m.insert(
        "category".to_string(),
        JsonValue::String(state.category.as_str().to_string()),
    );
    m.insert(
        "dlc".to_string(),
        JsonValue::String(state.dlc.display_name().to_string()),
    );
    m.insert("unlocked".to_string(), JsonValue::Bool(state.unlocked));
    m.insert(
        "linked_logbook_entries".to_string(),
        JsonValue::from(state.linked_logbook_entries),
    );
    JsonValue::Object(m)
}

fn logbook_state_to_json(state: &LogbookEntryState) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("id".to_string(), JsonValue::String(state.id.clone()));
    m.insert("name".to_string(), JsonValue::String(state.name.clone()));
    m.insert(
        "category".to_string(),
        JsonValue::String(state.category.as_str().to_string()),
    );
    m.insert(
        "dlc".to_string(),
        JsonValue::String(state.dlc.display_name().to_string()),
    );
    m.insert("unlocked".to_string(), JsonValue::Bool(state.unlocked));
    m.insert(
        "linked_challenges".to_string(),
        JsonValue::from(state.linked_challenges),
    );
    JsonValue::Object(m)
}

fn render_summary_impl(session: &Session, options: TextRenderOptions) -> String {
    let data = session.save_data();
    let challenge_stats = session.challenge_stats();
    let logbook_stats = session.logbook_stats();

    let mut out = String::new();
    writeln!(&mut out).expect("writing to String cannot fail");
    writeln!(&mut out, "{}", centered_no_trailing("RISK OF RAIN 2", SHEET_WIDTH))
        .expect("writing to String cannot fail");
    writeln!(&mut out, "{}", centered_no_trailing("USER PROFILE", SHEET_WIDTH))
        .expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");

    let name_section = format!("  Name: {}", fit_column(&data.name, ENTRY_NAME_WIDTH));
    writeln!(
        &mut out,
        "{:<44}Lunar Coins: {}",
        name_section,
        format_number_with_commas(u64::from(data.coins))
    )
    .expect("writing to String cannot fail");
    if session.has_changes() {
        writeln!(&mut out, "  (unsaved changes)").expect("writing to String cannot fail");
    }
    writeln!(&mut out).expect("writing to String cannot fail");

    writeln!(
        &mut out,
        "  {:<width$}{} / {}",
        "Challenges",
        challenge_stats.unlocked,
        challenge_stats.total,
        width = LABEL_WIDTH
    )
    .expect("writing to String cannot fail");
    write_category_counts(&mut out, &challenge_stats.by_category, |c| {
        c.display_name()
    });
    writeln!(&mut out).expect("writing to String cannot fail");

    writeln!(
        &mut out,
        "  {:<width$}{} / {}",
        "Logbook",
        logbook_stats.unlocked,
        logbook_stats.total,
        width = LABEL_WIDTH
    )
    .expect("writing to String cannot fail");
    write_category_counts(&mut out, &logbook_stats.by_category, |c| c.display_name());

    if options.verbose {
        write_challenge_list(&mut out, &session.challenge_states());
        write_logbook_list(&mut out, &session.logbook_states());
    }

    out
}

fn write_category_counts<C: Copy>(
    out: &mut String,
    counts: &[CategoryCount<C>],
    label: impl Fn(C) -> &'static str,
) {
    for count in counts {
        writeln!(
            out,
            "    {:<width$}{} / {}",
            label(count.category),
            count.unlocked,
            count.total,
            width = LABEL_WIDTH - 2
        )
        .expect("writing to String cannot fail");
    }
}

fn write_challenge_list(out: &mut String, states: &[ChallengeState]) {
    for category in ChallengeCategory::ALL {
        let in_category: Vec<_> = states.iter().filter(|s| s.category == category).collect();
        if in_category.is_empty() {
            continue;
        }
        writeln!(out).expect("writing to String cannot fail");
        writeln!(out, "  ::: {} :::", category.display_name().to_uppercase())
            .expect("writing to String cannot fail");
        for state in in_category {
            let line = format!(
                "  [{}] {:<name_width$} {}",
                checkbox(state.unlocked),
                fit_column(&state.name, ENTRY_NAME_WIDTH),
                state.id,
                name_width = ENTRY_NAME_WIDTH
            );
            writeln!(out, "{}", line.trim_end()).expect("writing to String cannot fail");
        }
    }
}

fn write_logbook_list(out: &mut String, states: &[LogbookEntryState]) {
    for category in LogbookCategory::ALL {
        let in_category: Vec<_> = states.iter().filter(|s| s.category == category).collect();
        if in_category.is_empty() {
            continue;
        }
        writeln!(out).expect("writing to String cannot fail");
        writeln!(
            out,
            "  ::: LOGBOOK: {} :::",
            category.display_name().to_uppercase()
        )
        .expect("writing to String cannot fail");
        for state in in_category {
            let line = format!(
                "  [{}] {:<name_width$} {}",
                checkbox(state.unlocked),
                fit_column(&state.name, ENTRY_NAME_WIDTH),
                state.id,
                name_width = ENTRY_NAME_WIDTH
            );
            writeln!(out, "{}", line.trim_end()).expect("writing to String cannot fail");
        }
    }
}

fn checkbox(checked: bool) -> char {
    if checked { 'x' } else { ' ' }
}

fn fit_column(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 3 {
        return value.chars().take(width).collect();
    }

    let mut out: String = value.chars().take(width - 3).collect();
    out.push_str("...");
    out
}

fn centered_no_trailing(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    format!("{}{}", " ".repeat((width - len) / 2), value)
}

fn format_number_with_commas(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}
