pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{CarrierFetcher, LogNotifier, PushNotifier, WebhookNotifier};
pub use crate::config::CliConfig;
pub use crate::core::monitor::{CycleOutcome, MonitorEngine, MonitorReport};
pub use crate::domain::model::{DeliveryEvent, PackageRecord};
pub use crate::domain::ports::{ConfigProvider, Notifier, StatusFetcher};
pub use crate::utils::error::{Result, WatchError};
