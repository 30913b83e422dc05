use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettlementError {
    #[error("Missing required parameters")]
    MissingParameters,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    /// The transaction fetch could not be completed or returned unusable data.
    #[error("Upstream error: {0}")]
    Upstream(String),
    #[error("Internal server error: {0}")]
    Internal(String),
}
