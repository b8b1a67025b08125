#![allow(dead_code)]

use async_trait::async_trait;
use rdns6_application::ports::{ChainHandler, ChainOutcome, ResponseSink};
use rdns6_domain::{DnsQuery, DomainError, SynthRecord};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Records everything a handler writes.
#[derive(Default)]
pub struct MockSink {
    pub answers: Vec<SynthRecord>,
    pub refusals: usize,
    pub fail_writes: bool,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty() && self.refusals == 0
    }
}

#[async_trait]
impl ResponseSink for MockSink {
    async fn send_answer(&mut self, answer: &SynthRecord) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::ResponseWrite("mock write failure".to_string()));
        }
        self.answers.push(answer.clone());
        Ok(())
    }

    async fn send_refused(&mut self) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::ResponseWrite("mock write failure".to_string()));
        }
        self.refusals += 1;
        Ok(())
    }
}

/// Next handler that only counts invocations and claims nothing.
#[derive(Default)]
pub struct CountingNext {
    calls: AtomicUsize,
}

impl CountingNext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChainHandler for CountingNext {
    async fn handle(
        &self,
        _query: &DnsQuery,
        _sink: &mut dyn ResponseSink,
    ) -> Result<ChainOutcome, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ChainOutcome::Refused)
    }
}
