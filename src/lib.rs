// Main library file for the property feed converter

// Export modules for each stage of the pipeline
pub mod error;
pub mod feed;
pub mod loader;
pub mod pipeline;
pub mod record;
pub mod writer;

// Re-export key types for convenience
pub use error::FeedError;
pub use feed::{parse_feed, Feed, Floorplan, Property, Room};
pub use loader::FeedSource;
pub use pipeline::{city_filter, map_property, total_bedrooms, FeedPipeline};
pub use record::PropertyRecord;
pub use writer::write_records;
