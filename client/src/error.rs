use thiserror::Error;

/// Errors returned by the related-object manager
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelatedObjectError {
    /// The manager was torn down with `destroy` and accepts no new requests
    #[error("Related-object manager has been destroyed and cannot accept new requests")]
    ManagerDestroyed,
}
