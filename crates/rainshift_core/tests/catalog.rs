use rainshift_core::catalog::{
    Catalog, Challenge, ChallengeCategory, Dlc, LogbookCategory, LogbookEntry,
};
use rainshift_core::core_api::CoreErrorCode;

fn challenge(id: &str, achievement: &str, unlocks: &[&str]) -> Challenge {
    Challenge {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        achievement: achievement.to_string(),
        unlocks: unlocks.iter().map(|token| token.to_string()).collect(),
        category: ChallengeCategory::Items,
        dlc: Dlc::Base,
    }
}

fn entry(id: &str, unlock: &str, category: LogbookCategory) -> LogbookEntry {
    LogbookEntry {
        id: id.to_string(),
        name: id.to_string(),
        unlock_token: unlock.to_string(),
        pickup_token: None,
        category,
        dlc: Dlc::Base,
    }
}

#[test]
fn builtin_catalog_builds() {
    let catalog = Catalog::builtin();
    assert!(catalog.challenges().len() > 90);
    assert!(!catalog.logbook_entries().is_empty());

    let firework = catalog.challenge("item-firework").expect("missing challenge");
    assert_eq!(firework.achievement, "AttackSpeed");
    let linked: Vec<_> = catalog
        .logbook_entries_for_challenge("item-firework")
        .into_iter()
        .map(|entry| entry.id.as_str())
        .collect();
    assert_eq!(linked, ["item-firework"]);
    assert!(catalog.has_logbook_connection("item-firework"));
    assert!(catalog.has_challenge_connection("item-firework"));
}

#[test]
fn builtin_survivor_challenges_are_unlinked() {
    let catalog = Catalog::builtin();
    assert!(!catalog.has_logbook_connection("huntress-unlock"));
    assert!(!catalog.has_challenge_connection("survivor-commando"));
    assert_eq!(catalog.logbook_count_for_challenge("huntress-unlock"), 0);
}

#[test]
fn builtin_achievement_may_carry_several_challenges() {
    let catalog = Catalog::builtin();
    let ids: Vec<_> = catalog
        .challenges_for_achievement("RailgunnerClearGameMonsoon")
        .into_iter()
        .map(|challenge| challenge.id.as_str())
        .collect();
    assert_eq!(ids, ["railgunner-polar", "railgunner-mastery"]);
}

#[test]
fn links_only_item_and_equipment_entries() {
    let catalog = Catalog::new(
        vec![challenge("c1", "AchA", &["Items.Foo", "Logs.Stages.foo"])],
        vec![
            entry("foo", "Items.Foo", LogbookCategory::Items),
            entry("stage", "Logs.Stages.foo", LogbookCategory::Environments),
        ],
    )
    .expect("catalog should build");

    assert_eq!(catalog.logbook_count_for_challenge("c1"), 1);
    assert_eq!(catalog.challenge_count_for_logbook_entry("foo"), 1);
    assert_eq!(catalog.challenge_count_for_logbook_entry("stage"), 0);
    assert!(catalog.logbook_entry_by_unlock_token("Logs.Stages.foo").is_none());
    assert_eq!(
        catalog
            .logbook_entry_by_unlock_token("Items.Foo")
            .map(|entry| entry.id.as_str()),
        Some("foo")
    );
    // Every granted token is indexed, linked or not.
    assert_eq!(catalog.challenges_for_unlock_token("Logs.Stages.foo").len(), 1);
}

#[test]
fn shared_tokens_link_many_challenges_to_one_entry() {
    let catalog = Catalog::new(
        vec![
            challenge("c1", "AchA", &["Items.Foo"]),
            challenge("c2", "AchB", &["Items.Foo", "Items.Foo"]),
        ],
        vec![entry("e1", "Items.Foo", LogbookCategory::Items)],
    )
    .expect("catalog should build");

    assert_eq!(catalog.challenge_count_for_logbook_entry("e1"), 2);
    assert_eq!(catalog.logbook_count_for_challenge("c2"), 1);
    assert_eq!(catalog.challenges_for_unlock_token("Items.Foo").len(), 2);
}

#[test]
fn unknown_ids_have_no_links() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.logbook_count_for_challenge("no-such-challenge"), 0);
    assert_eq!(catalog.challenge_count_for_logbook_entry("no-such-entry"), 0);
    assert!(catalog.challenges_for_achievement("NoSuchAchievement").is_empty());
    assert!(catalog.challenges_for_unlock_token("Items.Nothing").is_empty());
}

#[test]
fn rejects_duplicate_ids_and_tokens() {
    let duplicate_challenge = Catalog::new(
        vec![challenge("c1", "AchA", &[]), challenge("c1", "AchB", &[])],
        Vec::new(),
    )
    .expect_err("duplicate challenge id accepted");
    assert_eq!(duplicate_challenge.code, CoreErrorCode::Catalog);

    let duplicate_entry = Catalog::new(
        Vec::new(),
        vec![
            entry("e1", "Logs.A", LogbookCategory::Monsters),
            entry("e1", "Logs.B", LogbookCategory::Monsters),
        ],
    )
    .expect_err("duplicate entry id accepted");
    assert_eq!(duplicate_entry.code, CoreErrorCode::Catalog);

    let duplicate_token = Catalog::new(
        Vec::new(),
        vec![
            entry("e1", "Items.Foo", LogbookCategory::Items),
            entry("e2", "Items.Foo", LogbookCategory::Equipment),
        ],
    )
    .expect_err("duplicate unlock token accepted");
    assert_eq!(duplicate_token.code, CoreErrorCode::Catalog);
    assert!(duplicate_token.message.contains("Items.Foo"));
}

#[test]
fn rejects_achievement_shared_across_linked_and_unlinked_challenges() {
    let err = Catalog::new(
        vec![
            challenge("linked", "AchX", &["Items.Foo"]),
            challenge("skin", "AchX", &["Skins.Bar"]),
            challenge("other", "AchY", &["Items.Foo"]),
        ],
        vec![entry("e", "Items.Foo", LogbookCategory::Items)],
    )
    .expect_err("mixed achievement sharing accepted");
    assert_eq!(err.code, CoreErrorCode::Catalog);
    assert!(err.message.contains("AchX"));
    assert!(err.message.contains("linked, skin"));

    // Sharing stays allowed when every challenge on the achievement agrees.
    Catalog::new(
        vec![
            challenge("foo", "AchX", &["Items.Foo"]),
            challenge("baz", "AchX", &["Items.Baz"]),
            challenge("skin-a", "AchY", &["Skins.A"]),
            challenge("skin-b", "AchY", &["Skins.B"]),
        ],
        vec![
            entry("foo", "Items.Foo", LogbookCategory::Items),
            entry("baz", "Items.Baz", LogbookCategory::Items),
        ],
    )
    .expect("uniform achievement sharing should build");
}

#[test]
fn loads_catalog_from_json() {
    let json = r#"{
        "challenges": [
            { "id": "c1", "name": "First", "achievement": "AchA",
              "unlocks": ["Items.Foo"], "category": "items", "dlc": "sotv" }
        ],
        "logbook_entries": [
            { "id": "e1", "name": "Foo", "unlock_token": "Items.Foo",
              "pickup_token": "ItemIndex.Foo", "category": "items" }
        ]
    }"#;
    let catalog = Catalog::from_json(json).expect("catalog JSON should load");

    let c1 = catalog.challenge("c1").expect("missing c1");
    assert_eq!(c1.dlc, Dlc::Sotv);
    assert_eq!(c1.description, "");
    let e1 = catalog.logbook_entry("e1").expect("missing e1");
    assert_eq!(e1.dlc, Dlc::Base);
    assert_eq!(e1.pickup_token.as_deref(), Some("ItemIndex.Foo"));
    assert!(catalog.has_logbook_connection("c1"));
}

#[test]
fn rejects_invalid_catalog_json() {
    let err = Catalog::from_json(r#"{ "challenges": [ { "id": "c1" } ] }"#)
        .expect_err("incomplete challenge accepted");
    assert_eq!(err.code, CoreErrorCode::Catalog);

    let err = Catalog::from_json(r#"{ "quests": [] }"#).expect_err("unknown field accepted");
    assert_eq!(err.code, CoreErrorCode::Catalog);
}
