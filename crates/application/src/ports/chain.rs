use super::ResponseSink;
use async_trait::async_trait;
use rdns6_domain::{DnsQuery, DomainError};

/// How a handler disposed of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOutcome {
    /// A reply carrying one synthesized answer was written to the sink.
    Answered,
    /// No handler claimed the query; a REFUSED reply was written.
    Refused,
}

/// One link in the query-handling chain.
///
/// A handler either writes exactly one reply to the sink, or delegates to
/// its next handler exactly once and propagates that result unchanged.
#[async_trait]
pub trait ChainHandler: Send + Sync {
    async fn handle(
        &self,
        query: &DnsQuery,
        sink: &mut dyn ResponseSink,
    ) -> Result<ChainOutcome, DomainError>;
}
