use std::fs;
use std::path::PathBuf;

use crate::error::FeedError;
use crate::feed::{parse_feed, Feed};

// Where the feed comes from. The variant is an explicit caller decision and
// is never inferred from the shape of the location string.
#[derive(Debug, Clone)]
pub enum FeedSource {
    File(PathBuf),
    Url(String),
}

impl FeedSource {
    // Retrieve the raw feed text. One blocking read, file or HTTP; any
    // retrieval failure (including a non-success status) is a Transport error.
    pub fn fetch(&self) -> Result<String, FeedError> {
        match self {
            FeedSource::File(path) => fs::read_to_string(path).map_err(|e| {
                FeedError::Transport(format!("failed to read {}: {}", path.display(), e))
            }),
            FeedSource::Url(url) => {
                let response = reqwest::blocking::get(url)
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| FeedError::Transport(format!("GET {} failed: {}", url, e)))?;
                response
                    .text()
                    .map_err(|e| FeedError::Transport(format!("GET {} failed: {}", url, e)))
            }
        }
    }

    pub fn load(&self) -> Result<Feed, FeedError> {
        let xml = self.fetch()?;
        parse_feed(&xml)
    }
}

// Sample feed path (the actual file is stored in the samples directory)
pub const SAMPLE_FEED_PATH: &str = "samples/sample_feed.xml";
