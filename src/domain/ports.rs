use crate::domain::model::PackageRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// One status inquiry against the carrier. An `Err` means "no usable
/// snapshot this cycle"; the scheduler treats it as a skipped cycle, never
/// as fatal.
#[async_trait]
pub trait StatusFetcher: Send + Sync {
    async fn fetch(&self, package_number: &str) -> Result<PackageRecord>;
}

/// Best-effort push of a preformatted text block. Implementations report
/// success or failure through the return value and never error out.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str) -> bool;
}

#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(&self, text: &str) -> bool {
        (**self).notify(text).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn package_number(&self) -> &str;
    fn interval_min(&self) -> u64;
}
