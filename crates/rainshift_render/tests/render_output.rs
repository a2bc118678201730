use std::path::PathBuf;

use rainshift_core::core_api::{Engine, Session};
use rainshift_render::{
    FieldSelection, JsonStyle, TextRenderOptions, TextStyle, render_json_full,
    render_json_selected, render_text, render_text_with_options,
};
use serde_json::Value;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn fixture_session() -> Session {
    let path = workspace_root().join("tests/fixtures/UserProfile.xml");
    let bytes = std::fs::read(path).expect("fixture should be readable");
    Engine::builtin()
        .open_bytes(bytes)
        .expect("fixture should parse")
}

#[test]
fn full_json_uses_canonical_top_level_order() {
    let session = fixture_session();
    let value = render_json_full(&session, JsonStyle::CanonicalV1);
    let keys: Vec<&str> = value
        .as_object()
        .expect("json should be an object")
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(
        keys,
        vec![
            "name",
            "coins",
            "challenge_stats",
            "logbook_stats",
            "achievements",
            "unviewed_achievements",
            "viewed_unlockables",
            "viewed_viewables",
            "unlocks",
            "discovered_pickups",
            "stats",
            "challenges",
            "logbook",
            "has_changes",
        ]
    );
}

#[test]
fn full_json_reports_profile_values() {
    let session = fixture_session();
    let value = render_json_full(&session, JsonStyle::CanonicalV1);

    assert_eq!(value["name"], Value::from("Scav & Friends"));
    assert_eq!(value["coins"], Value::from(245));
    assert_eq!(value["has_changes"], Value::Bool(false));
    assert_eq!(
        value["achievements"],
        serde_json::json!(["AttackSpeed", "RepeatFirstTeleporter"])
    );
    assert_eq!(value["stats"]["totalKills"], Value::from("5000"));
    assert_eq!(value["challenge_stats"]["unlocked"], Value::from(2));

    let firework = value["challenges"]
        .as_array()
        .expect("challenges array")
        .iter()
        .find(|c| c["id"] == "item-firework")
        .expect("firework challenge");
    assert_eq!(firework["unlocked"], Value::Bool(true));
    assert_eq!(firework["category"], Value::from("items"));
    assert_eq!(firework["linked_logbook_entries"], Value::from(1));
}

#[test]
fn selected_json_only_contains_requested_fields() {
    let session = fixture_session();
    let fields = FieldSelection {
        coins: true,
        logbook_stats: true,
        ..FieldSelection::default()
    };
    assert!(fields.is_any_selected());
    assert!(!FieldSelection::default().is_any_selected());

    let value = render_json_selected(&session, &fields, JsonStyle::CanonicalV1);
    let object = value.as_object().expect("json should be an object");
    assert_eq!(object.len(), 2);
    assert_eq!(value["coins"], Value::from(245));

    let by_category = value["logbook_stats"]["by_category"]
        .as_array()
        .expect("category breakdown");
    let categories: Vec<_> = by_category
        .iter()
        .map(|c| c["category"].as_str().expect("category key"))
        .collect();
    assert_eq!(
        categories,
        ["monsters", "environments", "survivors", "items", "equipment"]
    );
}

#[test]
fn text_summary_lists_totals() {
    let session = fixture_session();
    let text = render_text(&session, TextStyle::Summary);

    assert!(text.contains("RISK OF RAIN 2"));
    assert!(text.contains("Name: Scav & Friends"));
    assert!(text.contains("Lunar Coins: 245"));
    assert!(text.contains("Challenges"));
    assert!(text.contains("Items & Equipment"));
    assert!(!text.contains("(unsaved changes)"));
    assert!(!text.contains("[x]"));
}

#[test]
fn verbose_text_lists_entries_and_marks_changes() {
    let mut session = fixture_session();
    session.set_coins(1_234_567);
    let text = render_text_with_options(
        &session,
        TextStyle::Summary,
        TextRenderOptions { verbose: true },
    );

    assert!(text.contains("Lunar Coins: 1,234,567"));
    assert!(text.contains("(unsaved changes)"));
    assert!(text.contains("::: SURVIVORS :::"));
    assert!(text.contains("::: LOGBOOK: ENVIRONMENTS :::"));
    let firework_line = text
        .lines()
        .find(|line| line.ends_with(" item-firework") && line.contains("The Basics"))
        .expect("firework challenge line");
    assert!(firework_line.starts_with("  [x] "));
    assert!(text.lines().all(|line| line == line.trim_end()));
}
