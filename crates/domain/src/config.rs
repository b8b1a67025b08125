mod errors;
mod logging;
mod root;
mod server;
mod synth;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use synth::SynthConfig;
