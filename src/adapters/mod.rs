// Adapters layer: concrete implementations for the external systems the
// core only knows as ports (carrier endpoint, notification channels).

pub mod carrier;
pub mod notify;

pub use carrier::CarrierFetcher;
pub use notify::{LogNotifier, PushNotifier, WebhookNotifier};
