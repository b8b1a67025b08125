use async_trait::async_trait;
use rdns6_domain::{DomainError, SynthRecord};

/// Where a handler writes its reply. At most one write per request.
#[async_trait]
pub trait ResponseSink: Send {
    /// Write a reply containing exactly this one answer record.
    async fn send_answer(&mut self, answer: &SynthRecord) -> Result<(), DomainError>;

    /// Write a REFUSED reply (the chain is exhausted, nobody answered).
    async fn send_refused(&mut self) -> Result<(), DomainError>;
}
