use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};

use crate::domain::model::{DeliveryEvent, PackageRecord};
use crate::domain::ports::StatusFetcher;
use crate::utils::error::{Result, WatchError};

/// Public tracking endpoint of the carrier.
pub const DEFAULT_ENDPOINT: &str = "https://toi.kuronekoyamato.co.jp/cgi-bin/tneko";

/// Fetches one tracking page per inquiry and parses it into a
/// [`PackageRecord`]. The endpoint is injectable so tests can point the
/// fetcher at a mock server.
pub struct CarrierFetcher {
    client: Client,
    endpoint: String,
}

impl CarrierFetcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for CarrierFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl StatusFetcher for CarrierFetcher {
    async fn fetch(&self, package_number: &str) -> Result<PackageRecord> {
        tracing::debug!("Making carrier request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("number01", package_number)])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Carrier response status: {}", status);
        if !status.is_success() {
            return Err(WatchError::CarrierStatusError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_tracking_page(package_number, &body)
    }
}

fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| WatchError::SelectorError {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn select_text(document: &Html, css: &'static str) -> Result<String> {
    let element = document
        .select(&selector(css)?)
        .next()
        .ok_or_else(|| WatchError::PageShapeError {
            selector: css.to_string(),
        })?;
    Ok(element_text(element))
}

fn parse_tracking_page(package_number: &str, body: &str) -> Result<PackageRecord> {
    let document = Html::parse_document(body);

    let status = select_text(&document, ".tracking-invoice-block-state-title")?;
    let status_detail = select_text(&document, ".tracking-invoice-block-state-summary")?;

    let summary_sel = selector(".tracking-invoice-block-summary li")?;
    let data_sel = selector(".data")?;
    let summary: Vec<ElementRef> = document.select(&summary_sel).collect();
    let package_type = summary_field(&summary, 0, &data_sel)?;
    let delivery_time = summary_field(&summary, 1, &data_sel)?;

    let detail_sel = selector(".tracking-invoice-block-detail li")?;
    let title_sel = selector(".item")?;
    let date_sel = selector(".date")?;
    let name_sel = selector(".name")?;
    let linked_name_sel = selector(".name a")?;

    let mut details = Vec::new();
    for entry in document.select(&detail_sel) {
        // The location shows up either as plain text or as a linked label;
        // both normalize into the same string.
        let name = match entry.select(&linked_name_sel).next() {
            Some(link) => element_text(link),
            None => entry
                .select(&name_sel)
                .next()
                .map(element_text)
                .ok_or_else(|| WatchError::PageShapeError {
                    selector: ".tracking-invoice-block-detail li .name".to_string(),
                })?,
        };

        details.push(DeliveryEvent {
            title: child_text(entry, &title_sel, ".tracking-invoice-block-detail li .item")?,
            date: child_text(entry, &date_sel, ".tracking-invoice-block-detail li .date")?,
            name,
        });
    }

    Ok(PackageRecord::new(
        package_number,
        status,
        status_detail,
        package_type,
        delivery_time,
        details,
    ))
}

fn summary_field(summary: &[ElementRef], index: usize, data_sel: &Selector) -> Result<String> {
    summary
        .get(index)
        .and_then(|entry| entry.select(data_sel).next())
        .map(element_text)
        .ok_or_else(|| WatchError::PageShapeError {
            selector: format!(".tracking-invoice-block-summary li[{}] .data", index),
        })
}

fn child_text(entry: ElementRef, sel: &Selector, described_as: &str) -> Result<String> {
    entry
        .select(sel)
        .next()
        .map(element_text)
        .ok_or_else(|| WatchError::PageShapeError {
            selector: described_as.to_string(),
        })
}
