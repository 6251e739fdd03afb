use std::time::Duration;

use clap::Parser;
use parcel_watch::utils::{logger, validation::Validate};
use parcel_watch::{
    CarrierFetcher, CliConfig, ConfigProvider, LogNotifier, MonitorEngine, Notifier, PushNotifier,
    WebhookNotifier,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting parcel-watch CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let fetcher = CarrierFetcher::new(config.carrier_url.clone());

    let notifier: Box<dyn Notifier> = if let Some(url) = config.webhook_url.clone() {
        tracing::info!("🔔 Delivering updates through an incoming webhook");
        Box::new(WebhookNotifier::new(url))
    } else if let Some(token) = config.push_token.clone() {
        tracing::info!("🔔 Delivering updates through the push-message API");
        Box::new(PushNotifier::with_token(token))
    } else {
        tracing::warn!("No notification channel configured, updates go to the log only");
        Box::new(LogNotifier)
    };

    let interval = Duration::from_secs(config.interval_min() * 60);
    let engine = MonitorEngine::new(
        fetcher,
        notifier,
        config.package_number().to_string(),
        interval,
    );

    let report = engine.run().await;

    tracing::info!(
        "✅ Monitoring finished after {} cycles, {} notifications sent",
        report.cycles,
        report.notifications
    );
    println!("✅ Package {} delivered", config.package_number());
    println!("📨 {} update notifications sent", report.notifications);

    Ok(())
}
