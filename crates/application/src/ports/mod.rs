mod chain;
mod response_sink;

pub use chain::{ChainHandler, ChainOutcome};
pub use response_sink::ResponseSink;
