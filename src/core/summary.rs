use crate::core::record::OutputRecord;
use crate::core::relevance::normalize_catalog;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How many games list a given genre, mode, or tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingStats {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

/// Aggregate view over a transformed catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub total_games: usize,
    pub rating: Option<RatingStats>,
    pub genres: Vec<CategoryCount>,
    pub modes: Vec<CategoryCount>,
    pub tags: Vec<CategoryCount>,
}

impl CatalogSummary {
    /// Counts each dimension after relevance cleanup and keeps the `top` most frequent
    /// entries.
    ///
    /// A game contributes once per entry it lists, so a game with two genres adds to
    /// both. Duplicate entries within one game are counted each time they appear.
    pub fn from_records(records: &[OutputRecord], top: usize) -> Self {
        let catalog = normalize_catalog(records);
        CatalogSummary {
            total_games: catalog.len(),
            rating: rating_stats(&catalog),
            genres: top_counts(catalog.iter().map(|r| &r.genres), top),
            modes: top_counts(catalog.iter().map(|r| &r.mode), top),
            tags: top_counts(catalog.iter().map(|r| &r.tags), top),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Catalog Summary ===\n\n");
        out.push_str(&format!("Games: {}\n", self.total_games));
        match &self.rating {
            Some(stats) => out.push_str(&format!(
                "Rating: min {:.2}, mean {:.2}, max {:.2}\n",
                stats.min, stats.mean, stats.max
            )),
            None => out.push_str("Rating: n/a\n"),
        }
        out.push_str(&render_section("Genres", &self.genres));
        out.push_str(&render_section("Modes", &self.modes));
        out.push_str(&render_section("Tags", &self.tags));
        out
    }
}

fn rating_stats(records: &[OutputRecord]) -> Option<RatingStats> {
    if records.is_empty() {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for record in records {
        min = min.min(record.rating);
        max = max.max(record.rating);
        sum += record.rating;
    }
    Some(RatingStats {
        min,
        mean: sum / records.len() as f64,
        max,
    })
}

fn top_counts<'a, I>(lists: I, top: usize) -> Vec<CategoryCount>
where
    I: Iterator<Item = &'a Vec<String>>,
{
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for list in lists {
        for entry in list {
            *counts.entry(entry.as_str()).or_insert(0) += 1;
        }
    }
    let mut sorted: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(name, count)| CategoryCount {
            name: name.to_string(),
            count,
        })
        .collect();
    sorted.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    sorted.truncate(top);
    sorted
}

fn render_section(title: &str, counts: &[CategoryCount]) -> String {
    let mut out = format!("\n{}:\n", title);
    if counts.is_empty() {
        out.push_str("  (none)\n");
    }
    for entry in counts {
        out.push_str(&format!("  {:<32} {}\n", entry.name, entry.count));
    }
    out
}
