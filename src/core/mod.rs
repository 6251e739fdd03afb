pub mod diff;
pub mod monitor;
pub mod report;

pub use crate::domain::model::{DeliveryEvent, PackageRecord};
pub use crate::domain::ports::{ConfigProvider, Notifier, StatusFetcher};
pub use crate::utils::error::Result;
pub use diff::changed;
pub use monitor::{CycleOutcome, MonitorEngine, MonitorReport};
pub use report::render;
