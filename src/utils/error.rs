use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Carrier request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Carrier returned status {status}")]
    CarrierStatusError { status: u16 },

    #[error("Tracking page is missing expected element: {selector}")]
    PageShapeError { selector: String },

    #[error("Invalid selector {selector}: {message}")]
    SelectorError { selector: String, message: String },

    #[error("Configuration error: {field}={value}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, WatchError>;

impl WatchError {
    pub fn recovery_suggestion(&self) -> String {
        match self {
            WatchError::RequestError(_) | WatchError::CarrierStatusError { .. } => {
                "Check network connectivity and that the carrier endpoint is reachable".to_string()
            }
            WatchError::PageShapeError { .. } => {
                "The carrier may have changed its page markup; the fetcher selectors need updating"
                    .to_string()
            }
            WatchError::SelectorError { selector, .. } => {
                format!("The CSS selector {} is malformed", selector)
            }
            WatchError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value passed for {}", field)
            }
        }
    }
}
