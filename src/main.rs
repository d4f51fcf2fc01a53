use clap::Parser;
use iss_spotter::core::report::format_pass_times;
use iss_spotter::utils::{logger, validation::Validate};
use iss_spotter::{CliConfig, IssError, PassTimesEngine};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting iss-spotter");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ Lookup failed: {} (Kind: {:?})", e, e.kind());
        eprintln!("It didn't work! {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &CliConfig) -> Result<(), IssError> {
    let config = cli.resolve()?;
    config.validate()?;

    let engine = PassTimesEngine::from_config(&config)?;
    let passes = engine.promise().await?;

    if passes.is_empty() {
        println!("No upcoming passes reported for your location.");
    }
    for line in format_pass_times(&passes) {
        println!("{}", line);
    }

    Ok(())
}
