use aws_sdk_cloudformation::error::BuildError;

/// Errors that can occur when building requests from a resource model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The SDK rejected the assembled request, e.g. because a required field was absent.
    #[error("invalid request: {0}")]
    Build(#[from] BuildError),

    /// The resource model document could not be deserialized.
    #[error("invalid resource model: {0}")]
    Model(#[from] serde_json::Error),
}
