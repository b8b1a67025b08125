use super::SynthesizeAnswer;
use crate::ports::{ChainHandler, ChainOutcome, ResponseSink};
use async_trait::async_trait;
use rdns6_domain::{DnsQuery, DomainError, SynthConfig};
use std::sync::Arc;
use tracing::debug;

/// The PTR/AAAA synthesizer link. Answers the queries it can and hands
/// everything else to `next`.
pub struct ReverseSynthHandler {
    synth: SynthesizeAnswer,
    next: Arc<dyn ChainHandler>,
}

impl ReverseSynthHandler {
    pub fn new(config: Arc<SynthConfig>, next: Arc<dyn ChainHandler>) -> Self {
        Self {
            synth: SynthesizeAnswer::new(config),
            next,
        }
    }
}

#[async_trait]
impl ChainHandler for ReverseSynthHandler {
    async fn handle(
        &self,
        query: &DnsQuery,
        sink: &mut dyn ResponseSink,
    ) -> Result<ChainOutcome, DomainError> {
        match self.synth.execute(query) {
            Some(answer) => {
                sink.send_answer(&answer).await?;
                Ok(ChainOutcome::Answered)
            }
            None => {
                debug!(name = %query.name, record_type = %query.record_type, "Delegating to next handler");
                self.next.handle(query, sink).await
            }
        }
    }
}

/// Chain tail for standalone serving: refuses whatever reaches it.
pub struct RefuseHandler;

#[async_trait]
impl ChainHandler for RefuseHandler {
    async fn handle(
        &self,
        _query: &DnsQuery,
        sink: &mut dyn ResponseSink,
    ) -> Result<ChainOutcome, DomainError> {
        sink.send_refused().await?;
        Ok(ChainOutcome::Refused)
    }
}
