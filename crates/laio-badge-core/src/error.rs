pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// Builder-side validation failures. The embed path never produces these; it falls back to
/// defaults instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be {max} characters or less")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} can only contain letters, numbers, spaces, hyphens, and underscores")]
    InvalidCharacters { field: &'static str },

    #[error("Invalid hex color format (use #RRGGBB): {input}")]
    InvalidColor { input: String },
}

/// Reasons a collector request does not produce an event record.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Missing required fields: t, slug")]
    MissingFields,

    #[error("Invalid event type: {event_type}")]
    InvalidEventType { event_type: String },

    #[error("Malformed tracking body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Malformed request URL: {0}")]
    MalformedUrl(#[from] url::ParseError),
}

impl IngestError {
    /// Rejections the collector reports with `400`. Everything else is swallowed so a badge
    /// never sees a failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingFields | Self::InvalidEventType { .. })
    }
}
