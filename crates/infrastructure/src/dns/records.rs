use hickory_proto::rr::rdata::{AAAA, PTR};
use hickory_proto::rr::{Name, RData, Record};
use rdns6_domain::{DomainError, RecordData, SynthRecord};

/// Converts a synthesized answer into a wire record: class IN, the
/// configured TTL, owner equal to the original question name.
pub fn to_wire_record(answer: &SynthRecord) -> Result<Record, DomainError> {
    let owner = parse_name(&answer.owner)?;
    let rdata = match &answer.data {
        RecordData::Ptr(target) => RData::PTR(PTR(parse_name(target)?)),
        RecordData::Aaaa(address) => RData::AAAA(AAAA(*address)),
    };
    Ok(Record::from_rdata(owner, answer.ttl, rdata))
}

fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_utf8(name).map_err(|e| DomainError::InvalidOwnerName(format!("{name}: {e}")))
}
