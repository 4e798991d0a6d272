//! Fixed field configuration for the catalog transformation.
//!
//! Rules are compile-time constants: there is no runtime knob for which fields are
//! required or how they are renamed.

/// Source fields that must all be present and non-null for a record to survive.
pub const REQUIRED_FIELDS: [&str; 12] = [
    "sid",
    "store_url",
    "published_store",
    "image",
    "name",
    "current_price",
    "platforms",
    "categories",
    "genres",
    "tags",
    "gfq_difficulty",
    "hltb_complete",
];

/// Source fields stored as comma-joined strings and normalized into lists.
pub const LIST_FIELDS: [&str; 4] = ["platforms", "genres", "tags", "categories"];

pub const LANGUAGES_FIELD: &str = "languages";

/// Token that must appear verbatim in the split `languages` value.
pub const REQUIRED_LANGUAGE: &str = "English";

pub const LIST_SEPARATOR: char = ',';

pub const META_SCORE_FIELD: &str = "meta_score";
pub const GROUP_RANK_SCORE_FIELD: &str = "grnk_score";
pub const IGDB_SCORE_FIELD: &str = "igdb_score";

/// Scores averaged into the composite rating.
pub const SCORE_FIELDS: [&str; 3] = [META_SCORE_FIELD, GROUP_RANK_SCORE_FIELD, IGDB_SCORE_FIELD];

/// Name of the derived field holding the composite rating.
pub const COMPOSITE_SCORE_FIELD: &str = "composite_score";

/// Source to output renames, in output order.
pub const OUTPUT_MAPPING: [(&str, &str); 13] = [
    ("sid", "id"),
    ("store_url", "url"),
    ("published_store", "date"),
    ("image", "image"),
    ("name", "name"),
    ("current_price", "price"),
    ("platforms", "os"),
    ("categories", "mode"),
    ("genres", "genres"),
    ("tags", "tags"),
    ("gfq_difficulty", "difficulty"),
    ("hltb_complete", "duration"),
    (COMPOSITE_SCORE_FIELD, "rating"),
];
