//! rdns6 Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod record_type;
pub mod reverse_name;

pub use config::{CliOverrides, Config, ConfigError, SynthConfig};
pub use dns_query::DnsQuery;
pub use dns_record::{RecordData, SynthRecord};
pub use errors::DomainError;
pub use record_type::RecordType;
