pub mod config;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod relevance;
pub mod schema;
pub mod similarity;
pub mod summary;
pub mod transformer;

pub use config::{CatalogConfig, ConfigLoader, ConfigValidator};
pub use error::{AppError, ErrorCategory, ErrorReporter};
pub use pipeline::{load_json_array, run_transform, TransformOutcome};
pub use record::{OutputRecord, RawRecord, RecordError, ScoreTriple};
pub use relevance::{normalize_catalog, RelevanceRules};
pub use similarity::{similar_titles, SimilarTitle};
pub use summary::{CatalogSummary, CategoryCount, RatingStats};
pub use transformer::{CompletenessFilter, LanguageFilter, RecordFilter, RecordTransformer};
