//! Unlock synchronization between challenges and logbook entries.
//!
//! Every operation takes the current [`SaveData`] by reference and returns
//! the next one. Unknown achievements, ids and tokens never fail; they only
//! affect the sets they name directly.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Challenge, ChallengeCategory, LogbookCategory, LogbookEntry};
use crate::profile::SaveData;

/// Clamps `value` into `0..=max` and stores it as the coin count.
pub fn set_coins(data: &SaveData, value: i64, max: u32) -> SaveData {
    let clamped = value.clamp(0, i64::from(max)) as u32;
    if i64::from(clamped) != value {
        debug!("coin value {value} clamped to {clamped}");
    }
    SaveData {
        coins: clamped,
        ..data.clone()
    }
}

pub fn toggle_challenge(
    catalog: &Catalog,
    data: &SaveData,
    achievement: &str,
    enable: bool,
) -> SaveData {
    let mut next = data.clone();
    if enable {
        grant_achievement(catalog, &mut next, achievement, true);
    } else {
        revoke_achievement(catalog, &mut next, achievement);
    }
    next
}

/// Toggles one logbook entry and carries the change over to the challenges
/// that unlock it.
///
/// Enabling marks every linked challenge complete without queueing a new
/// achievement notification. Disabling locks a linked challenge only when
/// none of its other entries is still discovered.
pub fn toggle_logbook_entry(
    catalog: &Catalog,
    data: &SaveData,
    entry_id: &str,
    enable: bool,
) -> SaveData {
    let mut next = data.clone();
    let Some(entry) = catalog.logbook_entry(entry_id) else {
        debug!("ignoring toggle for unknown logbook entry '{entry_id}'");
        return next;
    };
    let linked = catalog.challenges_for_logbook_entry(entry_id);

    if enable {
        grant_entry(&mut next, entry);
        for challenge in linked {
            grant_achievement(catalog, &mut next, &challenge.achievement, false);
        }
        return next;
    }

    revoke_entry(&mut next, entry);
    let to_disable: Vec<&Challenge> = linked
        .into_iter()
        .filter(|challenge| only_entry_left(catalog, &next, challenge, entry))
        .collect();
    for challenge in to_disable {
        revoke_achievement(catalog, &mut next, &challenge.achievement);
    }
    next
}

/// Grants every challenge and every logbook entry. Pending achievement
/// notifications are cleared.
pub fn unlock_all(catalog: &Catalog, data: &SaveData) -> SaveData {
    let mut next = data.clone();
    for challenge in catalog.challenges() {
        next.achievements.insert(challenge.achievement.clone());
        grant_challenge_tokens(catalog, &mut next, challenge);
    }
    for entry in catalog.logbook_entries() {
        grant_entry(&mut next, entry);
    }
    next.unviewed_achievements.clear();
    debug!(
        "unlocked {} challenges and {} logbook entries",
        catalog.challenges().len(),
        catalog.logbook_entries().len()
    );
    next
}

/// Discovers every logbook entry and completes the challenges linked to
/// item and equipment entries.
pub fn unlock_all_logbook(catalog: &Catalog, data: &SaveData) -> SaveData {
    let mut next = data.clone();
    for entry in catalog.logbook_entries() {
        grant_entry(&mut next, entry);
    }
    for challenge in catalog.challenges() {
        if catalog.has_logbook_connection(&challenge.id) {
            grant_achievement(catalog, &mut next, &challenge.achievement, false);
        }
    }
    next
}

/// Locks every challenge. Logbook entries that no challenge links to keep
/// whatever state the game gave them.
pub fn lock_all_challenges(catalog: &Catalog, data: &SaveData) -> SaveData {
    let mut next = data.clone();
    next.achievements.clear();
    next.unviewed_achievements.clear();
    next.viewed_unlockables.clear();
    next.unlocks.clear();
    for challenge in catalog.challenges() {
        for entry in catalog.logbook_entries_for_challenge(&challenge.id) {
            revoke_entry(&mut next, entry);
        }
    }
    next
}

/// Forgets every logbook entry and locks exactly the challenges that link
/// to at least one of them.
pub fn lock_all_logbook(catalog: &Catalog, data: &SaveData) -> SaveData {
    let mut next = data.clone();
    for entry in catalog.logbook_entries() {
        revoke_entry(&mut next, entry);
    }
    for challenge in catalog.challenges() {
        if catalog.has_logbook_connection(&challenge.id) {
            revoke_achievement(catalog, &mut next, &challenge.achievement);
        }
    }
    next
}

pub fn is_challenge_unlocked(data: &SaveData, challenge: &Challenge) -> bool {
    data.achievements.contains(&challenge.achievement)
}

pub fn is_logbook_entry_unlocked(data: &SaveData, entry: &LogbookEntry) -> bool {
    data.viewed_viewables.contains(&entry.unlock_token)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount<C> {
    pub category: C,
    pub unlocked: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeStats {
    pub total: usize,
    pub unlocked: usize,
    /// Size of the raw achievement list, including tokens the catalog does
    /// not know.
    pub achievements_in_save: usize,
    pub by_category: Vec<CategoryCount<ChallengeCategory>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogbookStats {
    pub total: usize,
    pub unlocked: usize,
    pub by_category: Vec<CategoryCount<LogbookCategory>>,
}

pub fn challenge_stats(catalog: &Catalog, data: &SaveData) -> ChallengeStats {
    let by_category: Vec<_> = ChallengeCategory::ALL
        .iter()
        .map(|&category| {
            let mut count = CategoryCount {
                category,
                unlocked: 0,
                total: 0,
            };
            for challenge in catalog.challenges().iter().filter(|c| c.category == category) {
                count.total += 1;
                if is_challenge_unlocked(data, challenge) {
                    count.unlocked += 1;
                }
            }
            count
        })
        .collect();

    ChallengeStats {
        total: catalog.challenges().len(),
        unlocked: by_category.iter().map(|count| count.unlocked).sum(),
        achievements_in_save: data.achievements.len(),
        by_category,
    }
}

pub fn logbook_stats(catalog: &Catalog, data: &SaveData) -> LogbookStats {
    let by_category: Vec<_> = LogbookCategory::ALL
        .iter()
        .map(|&category| {
            let entries = catalog
                .logbook_entries()
                .iter()
                .filter(|entry| entry.category == category);
            let (total, unlocked) = entries.fold((0, 0), |(total, unlocked), entry| {
                (
                    total + 1,
                    unlocked + usize::from(is_logbook_entry_unlocked(data, entry)),
                )
            });
            CategoryCount {
                category,
                unlocked,
                total,
            }
        })
        .collect();

    LogbookStats {
        total: catalog.logbook_entries().len(),
        unlocked: by_category.iter().map(|count| count.unlocked).sum(),
        by_category,
    }
}

fn grant_achievement(catalog: &Catalog, data: &mut SaveData, achievement: &str, notify: bool) {
    data.achievements.insert(achievement.to_string());
    if notify {
        data.unviewed_achievements.insert(achievement.to_string());
    }
    for challenge in catalog.challenges_for_achievement(achievement) {
        grant_challenge_tokens(catalog, data, challenge);
    }
}

fn grant_challenge_tokens(catalog: &Catalog, data: &mut SaveData, challenge: &Challenge) {
    for token in &challenge.unlocks {
        data.viewed_unlockables.insert(token.clone());
        data.unlocks.insert(token.clone());
    }
    for entry in catalog.logbook_entries_for_challenge(&challenge.id) {
        grant_entry(data, entry);
    }
}

fn revoke_achievement(catalog: &Catalog, data: &mut SaveData, achievement: &str) {
    data.achievements.remove(achievement);
    data.unviewed_achievements.remove(achievement);

    for challenge in catalog.challenges_for_achievement(achievement) {
        for token in &challenge.unlocks {
            if !granted_by_enabled_challenge(catalog, data, token) {
                data.viewed_unlockables.remove(token);
                data.unlocks.remove(token);
            }
        }
        for entry in catalog.logbook_entries_for_challenge(&challenge.id) {
            let still_provided = catalog
                .challenges_for_logbook_entry(&entry.id)
                .iter()
                .any(|other| data.achievements.contains(&other.achievement));
            if !still_provided {
                revoke_entry(data, entry);
            }
        }
    }
}

fn granted_by_enabled_challenge(catalog: &Catalog, data: &SaveData, token: &str) -> bool {
    catalog
        .challenges_for_unlock_token(token)
        .iter()
        .any(|challenge| data.achievements.contains(&challenge.achievement))
}

/// True when `entry` was the last discovered entry keeping `challenge`
/// unlocked. Entries of every challenge sharing its achievement count,
/// since locking one of them locks them all. Expects `entry` to be revoked
/// already.
fn only_entry_left(
    catalog: &Catalog,
    data: &SaveData,
    challenge: &Challenge,
    entry: &LogbookEntry,
) -> bool {
    !catalog
        .challenges_for_achievement(&challenge.achievement)
        .into_iter()
        .flat_map(|sibling| catalog.logbook_entries_for_challenge(&sibling.id))
        .any(|other| other.id != entry.id && data.viewed_viewables.contains(&other.unlock_token))
}

fn grant_entry(data: &mut SaveData, entry: &LogbookEntry) {
    data.viewed_viewables.insert(entry.unlock_token.clone());
    data.unlocks.insert(entry.unlock_token.clone());
    if let Some(pickup) = &entry.pickup_token {
        data.discovered_pickups.insert(pickup.clone());
    }
}

fn revoke_entry(data: &mut SaveData, entry: &LogbookEntry) {
    data.viewed_viewables.remove(&entry.unlock_token);
    data.unlocks.remove(&entry.unlock_token);
    if let Some(pickup) = &entry.pickup_token {
        data.discovered_pickups.remove(pickup);
    }
}
