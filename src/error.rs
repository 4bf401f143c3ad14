use thiserror::Error;

// Error types for the feed pipeline
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("feed retrieval failed: {0}")]
    Transport(String),

    #[error("XML parse error: {0}")]
    Parse(String),

    #[error("property '{property}': missing required field {path}")]
    MissingField {
        property: String,
        path: &'static str,
    },

    #[error("property '{property}': invalid numeric value '{value}' for {path}")]
    InvalidNumber {
        property: String,
        path: &'static str,
        value: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FeedError {
    pub(crate) fn missing(property: &str, path: &'static str) -> Self {
        FeedError::MissingField {
            property: property.to_string(),
            path,
        }
    }
}
