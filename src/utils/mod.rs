//! Utility helpers: atomic JSON file output.
pub mod serialization;

pub use serialization::save_pretty_json;
