use std::collections::BTreeMap;

use crate::core_api::{CoreError, CoreErrorCode};

use super::{Challenge, LogbookEntry};

/// Lookup tables over catalog positions. Built once per catalog.
#[derive(Debug, Clone, Default)]
pub(super) struct CrossReference {
    challenge_by_id: BTreeMap<String, usize>,
    entry_by_id: BTreeMap<String, usize>,
    challenges_by_achievement: BTreeMap<String, Vec<usize>>,
    challenge_to_entries: Vec<Vec<usize>>,
    entry_to_challenges: Vec<Vec<usize>>,
    token_to_entry: BTreeMap<String, usize>,
    token_to_challenges: BTreeMap<String, Vec<usize>>,
}

impl CrossReference {
    pub(super) fn build(
        challenges: &[Challenge],
        entries: &[LogbookEntry],
    ) -> Result<Self, CoreError> {
        let mut index = Self {
            challenge_to_entries: vec![Vec::new(); challenges.len()],
            entry_to_challenges: vec![Vec::new(); entries.len()],
            ..Self::default()
        };

        for (position, entry) in entries.iter().enumerate() {
            if index.entry_by_id.insert(entry.id.clone(), position).is_some() {
                return Err(catalog_error(format!(
                    "duplicate logbook entry id '{}'",
                    entry.id
                )));
            }
            if !entry.category.links_to_challenges() {
                continue;
            }
            if let Some(previous) = index
                .token_to_entry
                .insert(entry.unlock_token.clone(), position)
            {
                return Err(catalog_error(format!(
                    "logbook entries '{}' and '{}' share unlock token '{}'",
                    entries[previous].id, entry.id, entry.unlock_token
                )));
            }
        }

        for (position, challenge) in challenges.iter().enumerate() {
            if index
                .challenge_by_id
                .insert(challenge.id.clone(), position)
                .is_some()
            {
                return Err(catalog_error(format!(
                    "duplicate challenge id '{}'",
                    challenge.id
                )));
            }
            index
                .challenges_by_achievement
                .entry(challenge.achievement.clone())
                .or_default()
                .push(position);

            for token in &challenge.unlocks {
                let granted_by = index.token_to_challenges.entry(token.clone()).or_default();
                if !granted_by.contains(&position) {
                    granted_by.push(position);
                }

                let Some(&entry) = index.token_to_entry.get(token) else {
                    continue;
                };
                let linked = &mut index.challenge_to_entries[position];
                if linked.contains(&entry) {
                    continue;
                }
                linked.push(entry);
                index.entry_to_challenges[entry].push(position);
            }
        }

        // Logbook edits lock a whole achievement, so its challenges must agree
        // on whether they have logbook links.
        for (achievement, group) in &index.challenges_by_achievement {
            let linked = group
                .iter()
                .filter(|&&position| !index.challenge_to_entries[position].is_empty())
                .count();
            if linked > 0 && linked < group.len() {
                let ids: Vec<&str> = group
                    .iter()
                    .map(|&position| challenges[position].id.as_str())
                    .collect();
                return Err(catalog_error(format!(
                    "achievement '{achievement}' is shared by challenges with and without logbook links: {}",
                    ids.join(", ")
                )));
            }
        }

        Ok(index)
    }

    pub(super) fn challenge_index(&self, id: &str) -> Option<usize> {
        self.challenge_by_id.get(id).copied()
    }

    pub(super) fn entry_index(&self, id: &str) -> Option<usize> {
        self.entry_by_id.get(id).copied()
    }

    pub(super) fn challenges_for_achievement(&self, achievement: &str) -> &[usize] {
        self.challenges_by_achievement
            .get(achievement)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(super) fn entries_for_challenge(&self, challenge: usize) -> &[usize] {
        &self.challenge_to_entries[challenge]
    }

    pub(super) fn challenges_for_entry(&self, entry: usize) -> &[usize] {
        &self.entry_to_challenges[entry]
    }

    pub(super) fn entry_for_token(&self, token: &str) -> Option<usize> {
        self.token_to_entry.get(token).copied()
    }

    pub(super) fn challenges_for_token(&self, token: &str) -> &[usize] {
        self.token_to_challenges
            .get(token)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(super) fn linked_challenge_count(&self) -> usize {
        self.challenge_to_entries
            .iter()
            .filter(|entries| !entries.is_empty())
            .count()
    }
}

fn catalog_error(message: String) -> CoreError {
    CoreError::new(CoreErrorCode::Catalog, message)
}
