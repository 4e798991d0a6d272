//! Cleanup of mode, genre and tag lists before they are counted or compared.
//!
//! The store lists many modes that say nothing about how people play together, a few
//! content flags filed as genres, and tags that repeat a mode or a genre. Reports and the
//! similarity ranking work on the cleaned lists.

use crate::core::record::OutputRecord;
use std::collections::HashSet;

/// Modes about player count or location. Every other mode is dropped.
pub const RELEVANT_MODES: [&str; 11] = [
    "Single-player",
    "Multi-player",
    "Remote Play Together",
    "PvP",
    "Online PvP",
    "Co-op",
    "Online Co-op",
    "Shared/Split Screen Co-op",
    "Shared/Split Screen",
    "Cross-Platform Multiplayer",
    "Shared/Split Screen PvP",
];

/// All `Shared/Split Screen*` modes collapse into this one.
pub const SPLIT_SCREEN_MODE: &str = "Shared/Split Screen";

pub const IRRELEVANT_GENRES: [&str; 6] = [
    "Nudity",
    "Sexual Content",
    "Early Access",
    "Massively Multiplayer",
    "Free to Play",
    "Gore",
];

/// Tags that restate a mode.
pub const IRRELEVANT_TAGS: [&str; 9] = [
    "Singleplayer",
    "Co-op",
    "Multiplayer",
    "Online Co-Op",
    "Local Co-op",
    "Local Multiplayer",
    "PvP",
    "Split Screen",
    "Asynchronous Multiplayer",
];

/// Relevance rules bound to one catalog.
///
/// A tag is dropped when any game in the catalog uses it as a relevant genre.
#[derive(Debug, Clone, Default)]
pub struct RelevanceRules {
    catalog_genres: HashSet<String>,
}

impl RelevanceRules {
    pub fn for_catalog(records: &[OutputRecord]) -> Self {
        let catalog_genres = records
            .iter()
            .flat_map(|record| relevant_genres(&record.genres))
            .cloned()
            .collect();
        RelevanceRules { catalog_genres }
    }

    /// Keeps relevant modes in order, with split-screen variants merged at the end.
    pub fn modes(&self, modes: &[String]) -> Vec<String> {
        let mut kept: Vec<String> = modes
            .iter()
            .filter(|mode| RELEVANT_MODES.contains(&mode.as_str()))
            .cloned()
            .collect();
        if kept.iter().any(|mode| mode.starts_with(SPLIT_SCREEN_MODE)) {
            kept.retain(|mode| !mode.starts_with(SPLIT_SCREEN_MODE));
            kept.push(SPLIT_SCREEN_MODE.to_string());
        }
        kept
    }

    pub fn genres(&self, genres: &[String]) -> Vec<String> {
        relevant_genres(genres).cloned().collect()
    }

    pub fn tags(&self, tags: &[String]) -> Vec<String> {
        tags.iter()
            .filter(|tag| !IRRELEVANT_TAGS.contains(&tag.as_str()))
            .filter(|tag| !self.catalog_genres.contains(tag.as_str()))
            .cloned()
            .collect()
    }

    pub fn apply(&self, record: &OutputRecord) -> OutputRecord {
        OutputRecord {
            mode: self.modes(&record.mode),
            genres: self.genres(&record.genres),
            tags: self.tags(&record.tags),
            ..record.clone()
        }
    }
}

fn relevant_genres(genres: &[String]) -> impl Iterator<Item = &String> {
    genres
        .iter()
        .filter(|genre| !IRRELEVANT_GENRES.contains(&genre.as_str()))
}

/// Applies [`RelevanceRules`] built from `records` to every record, keeping order.
pub fn normalize_catalog(records: &[OutputRecord]) -> Vec<OutputRecord> {
    let rules = RelevanceRules::for_catalog(records);
    records.iter().map(|record| rules.apply(record)).collect()
}
