use std::collections::BTreeSet;

use rainshift_core::catalog::{
    Catalog, Challenge, ChallengeCategory, Dlc, LogbookCategory, LogbookEntry,
};
use rainshift_core::profile::SaveData;
use rainshift_core::sync;

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

fn item(id: &str, unlock: &str, pickup: &str) -> LogbookEntry {
    LogbookEntry {
        id: id.to_string(),
        name: id.to_string(),
        unlock_token: unlock.to_string(),
        pickup_token: Some(pickup.to_string()),
        category: LogbookCategory::Items,
        dlc: Dlc::Base,
    }
}

fn survivor_log(id: &str, unlock: &str) -> LogbookEntry {
    LogbookEntry {
        id: id.to_string(),
        name: id.to_string(),
        unlock_token: unlock.to_string(),
        pickup_token: None,
        category: LogbookCategory::Survivors,
        dlc: Dlc::Base,
    }
}

/// C1 and C2 both grant `Items.Foo`; C3 links two entries; C4 links none.
fn test_catalog() -> Catalog {
    let mut survivor = challenge("c4", "AchD", &["Survivors.Bar"]);
    survivor.category = ChallengeCategory::Survivors;
    Catalog::new(
        vec![
            challenge("c1", "AchA", &["Items.Foo"]),
            challenge("c2", "AchB", &["Items.Foo"]),
            challenge("c3", "AchC", &["Items.Baz", "Items.Qux"]),
            survivor,
        ],
        vec![
            item("e1", "Items.Foo", "pFoo"),
            item("e2", "Items.Baz", "pBaz"),
            item("e3", "Items.Qux", "pQux"),
            item("e4", "Items.Lone", "pLone"),
            survivor_log("seen", "Survivors.Seen"),
        ],
    )
    .expect("test catalog should build")
}

fn set(tokens: &[&str]) -> BTreeSet<String> {
    tokens.iter().map(|token| token.to_string()).collect()
}

#[test]
fn shared_token_survives_until_last_challenge_is_disabled() {
    let catalog = test_catalog();
    let d = SaveData::default();

    let d = sync::toggle_challenge(&catalog, &d, "AchA", true);
    let d = sync::toggle_challenge(&catalog, &d, "AchB", true);
    let d = sync::toggle_challenge(&catalog, &d, "AchA", false);
    assert!(d.unlocks.contains("Items.Foo"));
    assert!(d.viewed_unlockables.contains("Items.Foo"));
    assert!(d.discovered_pickups.contains("pFoo"));
    assert!(d.viewed_viewables.contains("Items.Foo"));

    let d = sync::toggle_challenge(&catalog, &d, "AchB", false);
    assert!(!d.unlocks.contains("Items.Foo"));
    assert!(!d.viewed_unlockables.contains("Items.Foo"));
    assert!(!d.discovered_pickups.contains("pFoo"));
    assert!(!d.viewed_viewables.contains("Items.Foo"));
    assert!(d.achievements.is_empty());
}

#[test]
fn lock_all_challenges_keeps_unlinked_logbook_progress() {
    let catalog = test_catalog();
    let d = SaveData {
        viewed_viewables: set(&["Survivors.Seen", "Items.Foo"]),
        discovered_pickups: set(&["pFoo", "pOther"]),
        achievements: set(&["AchA"]),
        unviewed_achievements: set(&["AchA"]),
        viewed_unlockables: set(&["Items.Foo"]),
        unlocks: set(&["Items.Foo"]),
        ..SaveData::default()
    };

    let locked = sync::lock_all_challenges(&catalog, &d);
    assert_eq!(locked.viewed_viewables, set(&["Survivors.Seen"]));
    assert_eq!(locked.discovered_pickups, set(&["pOther"]));
    assert!(locked.achievements.is_empty());
    assert!(locked.unviewed_achievements.is_empty());
    assert!(locked.viewed_unlockables.is_empty());
    assert!(locked.unlocks.is_empty());
}

#[test]
fn enabling_challenge_grants_tokens_and_linked_entries() {
    let catalog = test_catalog();
    let d = sync::toggle_challenge(&catalog, &SaveData::default(), "AchC", true);

    assert_eq!(d.achievements, set(&["AchC"]));
    assert_eq!(d.unviewed_achievements, set(&["AchC"]));
    assert_eq!(d.viewed_unlockables, set(&["Items.Baz", "Items.Qux"]));
    assert_eq!(d.unlocks, set(&["Items.Baz", "Items.Qux"]));
    assert_eq!(d.viewed_viewables, set(&["Items.Baz", "Items.Qux"]));
    assert_eq!(d.discovered_pickups, set(&["pBaz", "pQux"]));
}

#[test]
fn unknown_achievement_only_touches_achievement_sets() {
    let catalog = test_catalog();
    let d = sync::toggle_challenge(&catalog, &SaveData::default(), "Modded", true);
    assert_eq!(d.achievements, set(&["Modded"]));
    assert_eq!(d.unviewed_achievements, set(&["Modded"]));
    assert!(d.unlocks.is_empty());

    let d = sync::toggle_challenge(&catalog, &d, "Modded", false);
    assert_eq!(d, SaveData::default());
}

#[test]
fn logbook_enable_matches_direct_challenge_enable() {
    let catalog = test_catalog();
    let via_entry = sync::toggle_logbook_entry(&catalog, &SaveData::default(), "e1", true);

    let mut direct = SaveData::default();
    for linked in catalog.challenges_for_logbook_entry("e1") {
        direct = sync::toggle_challenge(&catalog, &direct, &linked.achievement, true);
    }

    assert_eq!(via_entry.achievements, direct.achievements);
    assert_eq!(via_entry.achievements, set(&["AchA", "AchB"]));
    assert!(via_entry.unviewed_achievements.is_empty());
    assert_eq!(direct.unviewed_achievements, set(&["AchA", "AchB"]));
    assert_eq!(via_entry.unlocks, direct.unlocks);
    assert_eq!(via_entry.discovered_pickups, direct.discovered_pickups);
}

#[test]
fn logbook_disable_keeps_challenge_with_other_discovered_entries() {
    let catalog = test_catalog();
    let d = sync::toggle_challenge(&catalog, &SaveData::default(), "AchC", true);

    let d = sync::toggle_logbook_entry(&catalog, &d, "e2", false);
    assert!(d.achievements.contains("AchC"));
    assert!(!d.viewed_viewables.contains("Items.Baz"));
    assert!(!d.discovered_pickups.contains("pBaz"));
    assert!(d.viewed_viewables.contains("Items.Qux"));

    let d = sync::toggle_logbook_entry(&catalog, &d, "e3", false);
    assert!(!d.achievements.contains("AchC"));
    assert!(d.viewed_viewables.is_empty());
    assert!(d.unlocks.is_empty());
}

#[test]
fn logbook_disable_locks_single_entry_challenges() {
    let catalog = test_catalog();
    let d = sync::toggle_logbook_entry(&catalog, &SaveData::default(), "e1", true);
    let d = sync::toggle_logbook_entry(&catalog, &d, "e1", false);

    assert!(d.achievements.is_empty());
    assert!(d.unlocks.is_empty());
    assert!(d.discovered_pickups.is_empty());
    assert!(d.viewed_unlockables.is_empty());
}

#[test]
fn unlinked_logbook_entry_toggles_alone() {
    let catalog = test_catalog();
    let d = sync::toggle_logbook_entry(&catalog, &SaveData::default(), "e4", true);
    assert_eq!(d.viewed_viewables, set(&["Items.Lone"]));
    assert_eq!(d.discovered_pickups, set(&["pLone"]));
    assert!(d.achievements.is_empty());

    let d = sync::toggle_logbook_entry(&catalog, &d, "missing", true);
    assert_eq!(d.viewed_viewables, set(&["Items.Lone"]));
}

#[test]
fn bulk_operations_are_idempotent() {
    let catalog = test_catalog();
    let d = sync::toggle_challenge(&catalog, &SaveData::default(), "AchA", true);

    let once = sync::unlock_all(&catalog, &d);
    assert_eq!(sync::unlock_all(&catalog, &once), once);
    assert!(once.unviewed_achievements.is_empty());
    assert_eq!(once.achievements, set(&["AchA", "AchB", "AchC", "AchD"]));
    assert!(once.viewed_viewables.contains("Survivors.Seen"));

    let locked = sync::lock_all_challenges(&catalog, &once);
    assert_eq!(sync::lock_all_challenges(&catalog, &locked), locked);
}

#[test]
fn unlock_all_logbook_completes_linked_challenges_only() {
    let catalog = test_catalog();
    let d = sync::unlock_all_logbook(&catalog, &SaveData::default());

    assert_eq!(d.achievements, set(&["AchA", "AchB", "AchC"]));
    assert!(d.unviewed_achievements.is_empty());
    assert_eq!(d.viewed_viewables.len(), 5);
    assert_eq!(d.discovered_pickups, set(&["pBaz", "pFoo", "pLone", "pQux"]));
}

#[test]
fn lock_all_logbook_locks_linked_challenges_only() {
    let catalog = test_catalog();
    let d = sync::unlock_all(&catalog, &SaveData::default());
    let d = sync::lock_all_logbook(&catalog, &d);

    assert!(d.viewed_viewables.is_empty());
    assert!(d.discovered_pickups.is_empty());
    assert_eq!(d.achievements, set(&["AchD"]));
    assert_eq!(d.viewed_unlockables, set(&["Survivors.Bar"]));
    assert_eq!(d.unlocks, set(&["Survivors.Bar"]));
}

/// `foo` and `baz` share `AchX` and each link one entry; both skins share
/// `AchY` and link nothing.
fn shared_achievement_catalog() -> Catalog {
    let mut skin_a = challenge("skin-a", "AchY", &["Skins.A"]);
    skin_a.category = ChallengeCategory::Skins;
    let mut skin_b = challenge("skin-b", "AchY", &["Skins.B"]);
    skin_b.category = ChallengeCategory::Skins;
    Catalog::new(
        vec![
            challenge("foo", "AchX", &["Items.Foo"]),
            challenge("baz", "AchX", &["Items.Baz"]),
            skin_a,
            skin_b,
        ],
        vec![
            item("foo", "Items.Foo", "pFoo"),
            item("baz", "Items.Baz", "pBaz"),
        ],
    )
    .expect("shared achievement catalog should build")
}

#[test]
fn lock_all_logbook_keeps_unlinked_challenges_sharing_an_achievement() {
    let catalog = shared_achievement_catalog();
    let d = sync::unlock_all(&catalog, &SaveData::default());
    let d = sync::lock_all_logbook(&catalog, &d);

    assert_eq!(d.achievements, set(&["AchY"]));
    assert_eq!(d.viewed_unlockables, set(&["Skins.A", "Skins.B"]));
    assert_eq!(d.unlocks, set(&["Skins.A", "Skins.B"]));
    assert!(d.viewed_viewables.is_empty());
    assert!(d.discovered_pickups.is_empty());
}

#[test]
fn logbook_disable_counts_entries_of_challenges_sharing_the_achievement() {
    let catalog = shared_achievement_catalog();
    let d = sync::unlock_all(&catalog, &SaveData::default());

    let d = sync::toggle_logbook_entry(&catalog, &d, "foo", false);
    assert_eq!(d.achievements, set(&["AchX", "AchY"]));
    assert_eq!(d.viewed_viewables, set(&["Items.Baz"]));
    assert_eq!(d.discovered_pickups, set(&["pBaz"]));

    let d = sync::toggle_logbook_entry(&catalog, &d, "baz", false);
    assert_eq!(d.achievements, set(&["AchY"]));
    assert_eq!(d.viewed_unlockables, set(&["Skins.A", "Skins.B"]));
    assert_eq!(d.unlocks, set(&["Skins.A", "Skins.B"]));
    assert!(d.viewed_viewables.is_empty());
}

#[test]
fn operations_leave_their_input_untouched() {
    let catalog = test_catalog();
    let d = sync::toggle_challenge(&catalog, &SaveData::default(), "AchA", true);
    let snapshot = d.clone();

    let _ = sync::toggle_challenge(&catalog, &d, "AchB", true);
    let _ = sync::toggle_challenge(&catalog, &d, "AchA", false);
    let _ = sync::toggle_logbook_entry(&catalog, &d, "e1", false);
    let _ = sync::unlock_all(&catalog, &d);
    let _ = sync::unlock_all_logbook(&catalog, &d);
    let _ = sync::lock_all_challenges(&catalog, &d);
    let _ = sync::lock_all_logbook(&catalog, &d);
    let _ = sync::set_coins(&d, 50, 100);
    assert_eq!(d, snapshot);
}

#[test]
fn set_coins_clamps_to_bounds() {
    let d = SaveData::default();
    assert_eq!(sync::set_coins(&d, -5, 1000).coins, 0);
    assert_eq!(sync::set_coins(&d, 0, 1000).coins, 0);
    assert_eq!(sync::set_coins(&d, 999, 1000).coins, 999);
    assert_eq!(sync::set_coins(&d, 1000, 1000).coins, 1000);
    assert_eq!(sync::set_coins(&d, 5000, 1000).coins, 1000);
    assert_eq!(
        sync::set_coins(&d, i64::MAX, i32::MAX as u32).coins,
        i32::MAX as u32
    );
}

#[test]
fn stats_count_by_category() {
    let catalog = test_catalog();
    let d = sync::toggle_challenge(&catalog, &SaveData::default(), "AchA", true);
    let d = sync::toggle_challenge(&catalog, &d, "AchD", true);

    let challenges = sync::challenge_stats(&catalog, &d);
    assert_eq!(challenges.total, 4);
    assert_eq!(challenges.unlocked, 2);
    let items = challenges
        .by_category
        .iter()
        .find(|count| count.category == ChallengeCategory::Items)
        .expect("items category");
    assert_eq!((items.unlocked, items.total), (1, 3));

    let logbook = sync::logbook_stats(&catalog, &d);
    assert_eq!(logbook.total, 5);
    assert_eq!(logbook.unlocked, 1);
    assert_eq!(logbook.by_category.len(), LogbookCategory::ALL.len());
}
