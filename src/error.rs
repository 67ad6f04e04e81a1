//! Error types for placeholder parsing and rendering

use thiserror::Error;

/// Result type alias for chart operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or querying charts
#[derive(Error, Debug)]
pub enum Error {
    /// Line placeholder without its JSON payload
    #[error("chart placeholder has no data-chart--data attribute")]
    MissingData,

    /// Malformed JSON or wrong shape in a payload attribute
    #[error("invalid JSON in {attr}: {source}")]
    InvalidJson {
        attr: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A chart placeholder must contain exactly one canvas
    #[error("expected exactly one canvas in chart placeholder, found {0}")]
    CanvasCount(usize),

    /// Tooltip lookup past the last dataset
    #[error("dataset index {0} out of range")]
    DatasetOutOfRange(usize),

    /// Tooltip lookup past the last point of a dataset
    #[error("point index {0} out of range")]
    PointOutOfRange(usize),

    /// Tooltip lookup past the last series label
    #[error("series label index {0} out of range")]
    LabelOutOfRange(usize),

    /// Backend failure while drawing
    #[error("rendering failed: {0}")]
    Render(String),
}
