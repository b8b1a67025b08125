use super::RecordType;
use std::net::Ipv6Addr;
use std::sync::Arc;

/// One synthesized resource record, built fresh per request and never
/// cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthRecord {
    /// Owner name: always the original question name.
    pub owner: Arc<str>,

    pub ttl: u32,

    pub data: RecordData,
}

/// Type-specific answer payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    /// Target hostname of a PTR answer.
    Ptr(Arc<str>),
    /// Address payload of an AAAA answer.
    Aaaa(Ipv6Addr),
}

impl SynthRecord {
    pub fn ptr(owner: Arc<str>, ttl: u32, target: impl Into<Arc<str>>) -> Self {
        Self {
            owner,
            ttl,
            data: RecordData::Ptr(target.into()),
        }
    }

    pub fn aaaa(owner: Arc<str>, ttl: u32, address: Ipv6Addr) -> Self {
        Self {
            owner,
            ttl,
            data: RecordData::Aaaa(address),
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self.data {
            RecordData::Ptr(_) => RecordType::PTR,
            RecordData::Aaaa(_) => RecordType::AAAA,
        }
    }
}
