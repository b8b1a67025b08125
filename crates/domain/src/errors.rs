use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Query has no question section")]
    EmptyQuestion,

    #[error("Invalid owner name: {0}")]
    InvalidOwnerName(String),

    #[error("Failed to write response: {0}")]
    ResponseWrite(String),
}
