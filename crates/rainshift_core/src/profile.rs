//! Typed projection of a `UserProfile` document and the inverse write-back.
//!
//! [`extract`] reads the fields the editor models into [`SaveData`];
//! [`apply`] writes a (possibly edited) [`SaveData`] onto a deep copy of the
//! document, touching only the elements whose modelled value changed.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core_api::{CoreError, CoreErrorCode};
use crate::xml::{Document, Element, Node};

pub const ROOT_ELEMENT: &str = "UserProfile";
pub const DEFAULT_NAME: &str = "Unknown";

const NAME: &str = "name";
const COINS: &str = "coins";
const ACHIEVEMENTS: &str = "achievementsList";
const UNVIEWED_ACHIEVEMENTS: &str = "unviewedAchievementsList";
const VIEWED_UNLOCKABLES: &str = "viewedUnlockablesList";
const VIEWED_VIEWABLES: &str = "viewedViewablesList";
const DISCOVERED_PICKUPS: &str = "discoveredPickups";
const STATS: &str = "stats";
const STAT: &str = "stat";
const STAT_NAME_ATTRIBUTE: &str = "name";
const UNLOCK: &str = "unlock";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub name: String,
    pub coins: u32,
    pub achievements: BTreeSet<String>,
    pub unviewed_achievements: BTreeSet<String>,
    pub viewed_unlockables: BTreeSet<String>,
    pub viewed_viewables: BTreeSet<String>,
    pub unlocks: BTreeSet<String>,
    pub discovered_pickups: BTreeSet<String>,
    pub stats: BTreeMap<String, String>,
}

/// Checks that the document looks like a profile save.
pub fn validate(document: &Document) -> Result<(), CoreError> {
    let root = profile_root(document)?;
    if root.child(COINS).is_none() {
        return Err(CoreError::new(
            CoreErrorCode::InvalidStructure,
            "not a valid profile save: missing coins element",
        ));
    }
    Ok(())
}

pub fn extract(document: &Document) -> Result<SaveData, CoreError> {
    let root = profile_root(document)?;

    let name = root
        .child(NAME)
        .map(Element::text)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string());
    let coins = root
        .child(COINS)
        .map_or(0, |coins| parse_coins(&coins.text()));

    let mut stats = BTreeMap::new();
    let mut unlocks = BTreeSet::new();
    if let Some(stats_element) = root.child(STATS) {
        for element in stats_element.elements() {
            match element.name.as_str() {
                STAT => match element.attribute(STAT_NAME_ATTRIBUTE) {
                    Some(key) if !key.is_empty() => {
                        stats.insert(key.to_string(), element.text());
                    }
                    _ => warn!("skipping stat record without a name attribute"),
                },
                UNLOCK => {
                    let token = element.text();
                    if !token.is_empty() {
                        unlocks.insert(token);
                    }
                }
                _ => {}
            }
        }
    }

    let data = SaveData {
        name,
        coins,
        achievements: read_list(root, ACHIEVEMENTS),
        unviewed_achievements: read_list(root, UNVIEWED_ACHIEVEMENTS),
        viewed_unlockables: read_list(root, VIEWED_UNLOCKABLES),
        viewed_viewables: read_list(root, VIEWED_VIEWABLES),
        unlocks,
        discovered_pickups: read_list(root, DISCOVERED_PICKUPS),
        stats,
    };
    debug!(
        "extracted profile '{}': {} coins, {} achievements, {} unlocks, {} stats",
        data.name,
        data.coins,
        data.achievements.len(),
        data.unlocks.len(),
        data.stats.len()
    );
    Ok(data)
}

/// Writes `data` onto a copy of `document`. The input is never modified.
///
/// Fields whose value equals what `document` already holds are left
/// byte-for-byte as they were, so an unedited session serializes back to
/// the same tree.
pub fn apply(document: &Document, data: &SaveData) -> Result<Document, CoreError> {
    let before = extract(document).map_err(|e| {
        CoreError::new(
            CoreErrorCode::InvalidStructure,
            format!("cannot apply changes: {}", e.message),
        )
    })?;

    let mut result = document.clone();
    let root = &mut result.root;

    if data.name != before.name {
        root.child_or_insert(NAME).set_text(data.name.as_str());
    }
    if data.coins != before.coins {
        root.child_or_insert(COINS).set_text(data.coins.to_string());
    }

    write_list(root, ACHIEVEMENTS, &before.achievements, &data.achievements);
    write_list(
        root,
        UNVIEWED_ACHIEVEMENTS,
        &before.unviewed_achievements,
        &data.unviewed_achievements,
    );
    write_list(
        root,
        VIEWED_UNLOCKABLES,
        &before.viewed_unlockables,
        &data.viewed_unlockables,
    );
    write_list(
        root,
        VIEWED_VIEWABLES,
        &before.viewed_viewables,
        &data.viewed_viewables,
    );
    write_list(
        root,
        DISCOVERED_PICKUPS,
        &before.discovered_pickups,
        &data.discovered_pickups,
    );

    let stats_changed = data.stats != before.stats;
    let unlocks_changed = data.unlocks != before.unlocks;
    if stats_changed || unlocks_changed {
        let needs_element = root.child(STATS).is_some()
            || !data.stats.is_empty()
            || !data.unlocks.is_empty();
        if needs_element {
            let stats_element = root.child_or_insert(STATS);
            if stats_changed {
                write_stats(stats_element, &data.stats);
            }
            if unlocks_changed {
                write_unlocks(stats_element, &data.unlocks);
            }
        }
    }

    debug!(
        "applied profile changes (stats changed: {stats_changed}, unlocks changed: {unlocks_changed})"
    );
    Ok(result)
}

fn profile_root(document: &Document) -> Result<&Element, CoreError> {
    if document.root.name == ROOT_ELEMENT {
        Ok(&document.root)
    } else {
        Err(CoreError::new(
            CoreErrorCode::InvalidStructure,
            format!(
                "not a valid profile save: missing {ROOT_ELEMENT} element (root is <{}>)",
                document.root.name
            ),
        ))
    }
}

fn read_list(root: &Element, tag: &str) -> BTreeSet<String> {
    root.child(tag)
        .map(|element| {
            element
                .text()
                .split_whitespace()
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn write_list(root: &mut Element, tag: &str, before: &BTreeSet<String>, after: &BTreeSet<String>) {
    if before == after {
        return;
    }
    if root.child(tag).is_none() && after.is_empty() {
        return;
    }
    let joined = after
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    root.child_or_insert(tag).set_text(joined);
}

fn write_stats(stats_element: &mut Element, stats: &BTreeMap<String, String>) {
    let mut seen = BTreeSet::new();
    stats_element.retain_elements(|element| {
        if element.name != STAT {
            return true;
        }
        match element.attribute(STAT_NAME_ATTRIBUTE) {
            Some(key) if !key.is_empty() => stats.contains_key(key),
            _ => true,
        }
    });

    let mut last_stat = None;
    for (position, node) in stats_element.children.iter_mut().enumerate() {
        let Node::Element(element) = node else {
            continue;
        };
        if element.name != STAT {
            continue;
        }
        last_stat = Some(position);
        let Some(key) = element
            .attribute(STAT_NAME_ATTRIBUTE)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
        else {
            continue;
        };
        if let Some(value) = stats.get(&key) {
            if element.text() != *value {
                element.set_text(value.as_str());
            }
        }
        seen.insert(key);
    }

    let mut insert_at = last_stat.map_or(0, |position| position + 1);
    for (key, value) in stats {
        if seen.contains(key) {
            continue;
        }
        let mut element = Element::with_text(STAT, value.as_str());
        element.set_attribute(STAT_NAME_ATTRIBUTE, key.as_str());
        stats_element
            .children
            .insert(insert_at, Node::Element(element));
        insert_at += 1;
    }
}

fn write_unlocks(stats_element: &mut Element, unlocks: &BTreeSet<String>) {
    stats_element.retain_elements(|element| element.name != UNLOCK);
    for token in unlocks {
        stats_element.push_element(Element::with_text(UNLOCK, token.as_str()));
    }
}

/// Reads a coin count the way the game's loader tolerates it: leading
/// digits only, negatives as zero, saturating at `u32::MAX`.
fn parse_coins(text: &str) -> u32 {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits: &str = {
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };

    if digits.is_empty() {
        if !text.is_empty() {
            warn!("coins value '{text}' is not a number, using 0");
        }
        return 0;
    }
    if negative {
        warn!("coins value '{text}' is negative, using 0");
        return 0;
    }

    match digits.parse::<u32>() {
        Ok(value) => value,
        Err(_) => {
            warn!("coins value '{text}' exceeds {}, clamping", u32::MAX);
            u32::MAX
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_coins;

    #[test]
    fn parse_coins_follows_leading_digits() {
        assert_eq!(parse_coins("100"), 100);
        assert_eq!(parse_coins(" 42 "), 42);
        assert_eq!(parse_coins("17abc"), 17);
        assert_eq!(parse_coins("+5"), 5);
    }

    #[test]
    fn parse_coins_handles_out_of_range_values() {
        assert_eq!(parse_coins(""), 0);
        assert_eq!(parse_coins("abc"), 0);
        assert_eq!(parse_coins("-3"), 0);
        assert_eq!(parse_coins("99999999999999999999"), u32::MAX);
    }
}
