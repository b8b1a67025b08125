pub mod records;
pub mod response_sink;
pub mod server;

pub use response_sink::HickorySink;
pub use server::SynthServerHandler;
