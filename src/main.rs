use clap::Parser;
use storefront::utils::{logger, validation::Validate};
use storefront::{server, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    logger::init_logger(config.log_format, cli.verbose);
    tracing::info!("Starting storefront");
    tracing::debug!(
        cms = %config.cms.base_url,
        contact_store = %config.contact.store_path,
        "Resolved configuration"
    );

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = server::startup::run(config).await {
        tracing::error!("❌ Server stopped with an error: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        return Err(e.into());
    }

    Ok(())
}
