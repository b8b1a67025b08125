use super::RecordType;
use std::sync::Arc;

/// The first question of an inbound message. Only this question is ever
/// inspected. `name` is fully qualified (trailing dot), lowercase as it
/// arrives off the wire.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}
