use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::adapters::carrier::DEFAULT_ENDPOINT;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "parcel-watch")]
#[command(about = "Watches a carrier tracking page and pushes delivery status updates")]
pub struct CliConfig {
    /// Carrier-assigned package number to monitor
    pub package_number: String,

    /// Minutes to wait between polls
    #[arg(long, default_value = "30")]
    pub interval_min: u64,

    /// Incoming-webhook URL to deliver updates to
    #[arg(long)]
    pub webhook_url: Option<String>,

    /// Bearer token for the push-message API
    #[arg(long)]
    pub push_token: Option<String>,

    /// Tracking endpoint override
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub carrier_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn package_number(&self) -> &str {
        &self.package_number
    }

    fn interval_min(&self) -> u64 {
        self.interval_min
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("package_number", &self.package_number)?;
        validation::validate_range("interval_min", self.interval_min, 1, 24 * 60)?;
        validation::validate_url("carrier_url", &self.carrier_url)?;
        if let Some(url) = &self.webhook_url {
            validation::validate_url("webhook_url", url)?;
        }
        Ok(())
    }
}
