//! Ranks the titles most like a given one.
//!
//! Each title is reduced to numeric features on a roughly `[0, 1]` scale: price
//! quantile, difficulty, log duration and rating. Set-valued fields are compared with
//! Jaccard distance. The per-feature differences are combined by root mean square and
//! reported as `1 - rmse`, so higher means closer.

use crate::core::record::OutputRecord;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

/// Number of titles returned when no limit is given.
pub const DEFAULT_SIMILAR_LIMIT: usize = 9;

/// Difficulty labels from easiest to hardest.
pub const DIFFICULTY_LEVELS: [&str; 9] = [
    "Simple",
    "Simple-Easy",
    "Easy",
    "Easy-Just Right",
    "Just Right",
    "Just Right-Tough",
    "Tough",
    "Tough-Unforgiving",
    "Unforgiving",
];

/// Price range is cut into this many equal steps above the cheapest title.
const PRICE_STEPS: usize = 10;
const DIFFICULTY_SCALE: f64 = 5.0;
const DURATION_SCALE: f64 = 1648.0;
const RATING_SCALE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarTitle {
    pub id: Value,
    pub name: Value,
    pub similarity: f64,
}

struct Features<'a> {
    record: &'a OutputRecord,
    price: f64,
    difficulty: f64,
    duration: f64,
    rating: f64,
}

/// Position of the title whose `id` renders as `id`.
pub fn find_title(catalog: &[OutputRecord], id: &str) -> Option<usize> {
    catalog.iter().position(|record| display_value(&record.id) == id)
}

/// Up to `limit` titles most similar to `catalog[target]`, closest first.
///
/// Titles sharing the target's `id` are skipped. Ties keep catalog order.
pub fn similar_titles(catalog: &[OutputRecord], target: usize, limit: usize) -> Vec<SimilarTitle> {
    let Some(target_record) = catalog.get(target) else {
        return Vec::new();
    };
    let prices = PriceScale::from_catalog(catalog);
    let target_features = Features::of(target_record, &prices);

    let mut ranked: Vec<SimilarTitle> = catalog
        .iter()
        .filter(|record| record.id != target_record.id)
        .map(|record| {
            let features = Features::of(record, &prices);
            SimilarTitle {
                id: record.id.clone(),
                name: record.name.clone(),
                similarity: 1.0 - rmse(&target_features.differences(&features)),
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    ranked.truncate(limit);
    ranked
}

impl<'a> Features<'a> {
    fn of(record: &'a OutputRecord, prices: &PriceScale) -> Self {
        Features {
            record,
            price: prices.quantile(number(&record.price)),
            difficulty: difficulty_level(&record.difficulty) / DIFFICULTY_SCALE,
            duration: log_duration(number(&record.duration)),
            rating: record.rating / RATING_SCALE,
        }
    }

    fn differences(&self, other: &Features<'_>) -> Vec<f64> {
        let mut diffs = vec![
            other.price - self.price,
            jaccard_distance(&other.record.mode, &self.record.mode),
            jaccard_distance(&other.record.genres, &self.record.genres),
        ];
        // Relevance cleanup can leave a title with no tags.
        if !other.record.tags.is_empty() && !self.record.tags.is_empty() {
            diffs.push(jaccard_distance(&other.record.tags, &self.record.tags));
        }
        diffs.push(other.difficulty - self.difficulty);
        diffs.push(other.duration - self.duration);
        diffs.push(other.rating - self.rating);
        diffs
    }
}

/// Maps a price to one of eleven evenly spaced buckets between the catalog minimum and
/// maximum, reported as `0.0, 0.1, ..., 1.0`.
struct PriceScale {
    min: f64,
    max: f64,
}

impl PriceScale {
    fn from_catalog(catalog: &[OutputRecord]) -> Self {
        let prices = catalog.iter().map(|record| number(&record.price));
        let (min, max) = prices.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p), hi.max(p))
        });
        if min > max {
            return PriceScale { min: 0.0, max: 0.0 };
        }
        PriceScale { min, max }
    }

    fn quantile(&self, price: f64) -> f64 {
        let span = self.max - self.min;
        let buckets = (PRICE_STEPS + 1) as f64;
        let passed = (1..=PRICE_STEPS)
            .filter(|step| self.min + span * (*step as f64) / buckets <= price)
            .count();
        passed as f64 / PRICE_STEPS as f64
    }
}

/// `1.0` for `Simple` up to `5.0` for `Unforgiving`; unknown labels score `0.5`.
fn difficulty_level(difficulty: &Value) -> f64 {
    let position = difficulty
        .as_str()
        .and_then(|label| DIFFICULTY_LEVELS.iter().position(|level| *level == label));
    match position {
        Some(index) => 0.5 * index as f64 + 1.0,
        None => 0.5,
    }
}

fn log_duration(duration: f64) -> f64 {
    if duration > 0.0 {
        duration.log10() / DURATION_SCALE
    } else {
        0.0
    }
}

fn jaccard_distance(a: &[String], b: &[String]) -> f64 {
    let a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    let shared = a.intersection(&b).count();
    1.0 - shared as f64 / union as f64
}

fn rmse(diffs: &[f64]) -> f64 {
    let squared: f64 = diffs.iter().map(|d| d * d).sum();
    (squared / diffs.len() as f64).sqrt()
}

fn number(value: &Value) -> f64 {
    value.as_f64().unwrap_or(0.0)
}

/// Strings render without quotes; other values render as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
