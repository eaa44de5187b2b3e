use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("storefront=debug,tower_http=debug,info")
        } else {
            EnvFilter::new("storefront=info,tower_http=info,warn")
        }
    })
}

fn report_existing_subscriber(
    installed: Result<(), tracing_subscriber::util::TryInitError>,
) {
    if let Err(e) = installed {
        tracing::debug!("Keeping the already installed subscriber: {}", e);
    }
}

pub fn init_logger(format: LogFormat, verbose: bool) {
    match format {
        LogFormat::Compact => init_compact_logger(verbose),
        LogFormat::Json => init_json_logger(verbose),
    }
}

pub fn init_compact_logger(verbose: bool) {
    let installed = tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
    report_existing_subscriber(installed);
}

pub fn init_json_logger(verbose: bool) {
    let installed = tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init();
    report_existing_subscriber(installed);
}
