//! Error types for the renderer.
//!
//! [`DrawError`] is what a drawing backend reports; [`RenderError`] is what the
//! engine surfaces to the embedding application.

/// Failure reported by a [`crate::draw::DrawContext`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    /// The backend rejected a drawing call (e.g. a non-finite arc radius).
    #[error("drawing call `{call}` failed: {reason}")]
    Backend { call: &'static str, reason: String },
    /// A layer could not draw its own content.
    #[error("layer failed: {0}")]
    Layer(String),
}

/// Error returned by engine operations.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The drawing element could not be located at initialization.
    #[error("drawing element `{element_id}` not found")]
    NotFound { element_id: String },
    /// A frame or setter hit a degenerate value (zero-area surface, non-positive grid size).
    #[error("invalid render state: {0}")]
    InvalidState(String),
    /// The engine was used before a successful `init()`.
    #[error("engine is not initialized")]
    Uninitialized,
    /// A layer name did not match any registry slot.
    #[error("unknown layer `{0}`")]
    UnknownLayer(String),
    /// Configuration values were rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Configuration JSON could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
    /// The host could not schedule a frame.
    #[error("frame pacing failed: {0}")]
    FramePacing(String),
    /// A drawing call failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
}
