use clap::Parser;
use rdns6_application::ports::ChainHandler;
use rdns6_application::use_cases::{RefuseHandler, ReverseSynthHandler};
use rdns6_domain::CliOverrides;
use rdns6_infrastructure::dns::SynthServerHandler;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "rdns6")]
#[command(version)]
#[command(about = "rdns6 - Synthesizes IPv6 reverse (PTR) and forward (AAAA) records on the fly")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Domain under which synthesized forward names live
    #[arg(short = 's', long)]
    suffix: Option<String>,

    /// TTL for synthesized records
    #[arg(long)]
    ttl: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        suffix: cli.suffix,
        ttl: cli.ttl,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting rdns6 v{}", env!("CARGO_PKG_VERSION"));
    info!(
        suffix = %config.synth.suffix,
        ttl = config.synth.ttl,
        presets = config.synth.presets.len(),
        "Synthesizer configured"
    );

    let synth_config = Arc::new(config.synth.clone());
    let chain: Arc<dyn ChainHandler> =
        Arc::new(ReverseSynthHandler::new(synth_config, Arc::new(RefuseHandler)));
    let handler = SynthServerHandler::new(chain);

    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    server::start_dns_server(bind_addr, handler).await
}
