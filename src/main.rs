use clap::Parser;
use gcd_cli::utils::logger;
use gcd_cli::{CliConfig, GcdEngine, StdioPipeline};
use std::io;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("Starting gcd-cli");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let pipeline = StdioPipeline::new(stdin, stdout);
    let mut engine = GcdEngine::new(pipeline);

    match engine.run() {
        Ok(divisor) => {
            tracing::debug!("✅ GCD computed: {}", divisor);
        }
        Err(e) => {
            tracing::error!("❌ GCD computation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
