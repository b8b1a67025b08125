use rdns6_domain::{reverse_name, DnsQuery, RecordType, SynthConfig, SynthRecord};
use std::sync::Arc;
use tracing::debug;

/// Classifies a question and produces the synthesized answer, if any.
///
/// PTR questions always get an answer: a preset when the name matches one
/// verbatim, otherwise the algorithmically derived forward name. AAAA
/// questions get an answer only when the name decodes back into an
/// address. Everything else is `None` and left to the rest of the chain.
///
/// Pure and synchronous; the configuration is shared read-only across all
/// in-flight queries.
pub struct SynthesizeAnswer {
    config: Arc<SynthConfig>,
}

impl SynthesizeAnswer {
    pub fn new(config: Arc<SynthConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, query: &DnsQuery) -> Option<SynthRecord> {
        match query.record_type {
            RecordType::PTR => Some(self.ptr_answer(query)),
            RecordType::AAAA => self.aaaa_answer(query),
            _ => None,
        }
    }

    fn ptr_answer(&self, query: &DnsQuery) -> SynthRecord {
        let target = match self.config.presets.get(query.name.as_ref()) {
            Some(preset) => {
                debug!(name = %query.name, target = %preset, "PTR preset hit");
                preset.clone()
            }
            None => reverse_name::ptr_target(&query.name, &self.config.suffix),
        };
        SynthRecord::ptr(query.name.clone(), self.config.ttl, target)
    }

    fn aaaa_answer(&self, query: &DnsQuery) -> Option<SynthRecord> {
        let address = reverse_name::decode_forward(&query.name, &self.config.suffix)?;
        Some(SynthRecord::aaaa(query.name.clone(), self.config.ttl, address))
    }
}
