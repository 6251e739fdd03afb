use anyhow::Result;
use httpmock::prelude::*;
use parcel_watch::core::changed;
use parcel_watch::{CarrierFetcher, StatusFetcher, WatchError};

fn tracking_page(
    status: &str,
    status_detail: &str,
    package_type: &str,
    delivery_time: &str,
    details: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<body>
<div class="tracking-invoice-block-state">
  <h4 class="tracking-invoice-block-state-title">{status}</h4>
  <p class="tracking-invoice-block-state-summary">{status_detail}</p>
</div>
<ul class="tracking-invoice-block-summary">
  <li><div class="item">品名</div><div class="data">{package_type}</div></li>
  <li><div class="item">配達予定日時</div><div class="data">{delivery_time}</div></li>
</ul>
<ol class="tracking-invoice-block-detail">
{details}
</ol>
</body>
</html>"#
    )
}

fn detail_item(title: &str, date: &str, name: &str) -> String {
    format!(
        r#"  <li><div class="item">{title}</div><div class="date">{date}</div><div class="name">{name}</div></li>"#
    )
}

#[tokio::test]
async fn test_fetch_parses_full_tracking_page() -> Result<()> {
    let server = MockServer::start();
    let details = [
        detail_item("荷物受付", "06月01日 10:21", "新宿支店"),
        detail_item("発送済み", "06月01日 14:02", "新宿支店"),
    ]
    .join("\n");
    let page = tracking_page(
        "輸送中",
        "お荷物は輸送中です。",
        "宅急便",
        "6月2日 午前中",
        &details,
    );

    let carrier_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/cgi-bin/tneko")
            .body_contains("number01=390123456789");
        then.status(200)
            .header("Content-Type", "text/html; charset=UTF-8")
            .body(&page);
    });

    let fetcher = CarrierFetcher::new(server.url("/cgi-bin/tneko"));
    let record = fetcher.fetch("390123456789").await?;

    carrier_mock.assert();
    assert_eq!(record.package_number, "390123456789");
    assert_eq!(record.status, "輸送中");
    assert_eq!(record.status_detail, "お荷物は輸送中です。");
    assert!(!record.is_finished);
    assert_eq!(record.package_type, "宅急便");
    assert_eq!(record.delivery_time, "6月2日 午前中");
    assert_eq!(record.details.len(), 2);
    assert_eq!(record.details[0].title, "荷物受付");
    assert_eq!(record.details[0].date, "06月01日 10:21");
    assert_eq!(record.details[0].name, "新宿支店");
    assert_eq!(record.details[1].title, "発送済み");
    Ok(())
}

#[tokio::test]
async fn test_fetch_derives_completion_from_status() -> Result<()> {
    let server = MockServer::start();
    let details = detail_item("配達完了", "06月02日 09:40", "渋谷センター");
    let page = tracking_page(
        "配達完了",
        "このお品物はお届けが済んでおります。",
        "宅急便",
        "-",
        &details,
    );

    server.mock(|when, then| {
        when.method(POST).path("/cgi-bin/tneko");
        then.status(200)
            .header("Content-Type", "text/html; charset=UTF-8")
            .body(&page);
    });

    let fetcher = CarrierFetcher::new(server.url("/cgi-bin/tneko"));
    let record = fetcher.fetch("390123456789").await?;

    assert!(record.is_finished);
    assert!(!record.has_delivery_time());
    Ok(())
}

#[tokio::test]
async fn test_fetch_normalizes_linked_location_label() -> Result<()> {
    let server = MockServer::start();
    let details = [
        detail_item("荷物受付", "06月01日 10:21", "新宿支店"),
        r#"  <li><div class="item">保管中</div><div class="date">06月02日 08:00</div><div class="name"><a href="/chrome/dr/branch/nagoya.html">名古屋営業所</a></div></li>"#.to_string(),
    ]
    .join("\n");
    let page = tracking_page("保管中", "営業所でお荷物を保管しております。", "宅急便", "-", &details);

    server.mock(|when, then| {
        when.method(POST).path("/cgi-bin/tneko");
        then.status(200)
            .header("Content-Type", "text/html; charset=UTF-8")
            .body(&page);
    });

    let fetcher = CarrierFetcher::new(server.url("/cgi-bin/tneko"));
    let record = fetcher.fetch("390123456789").await?;

    // plain and linked labels both normalize into a bare string
    assert_eq!(record.details[0].name, "新宿支店");
    assert_eq!(record.details[1].name, "名古屋営業所");
    Ok(())
}

#[tokio::test]
async fn test_refetching_unchanged_page_yields_equal_records() -> Result<()> {
    let server = MockServer::start();
    let details = detail_item("荷物受付", "06月01日 10:21", "新宿支店");
    let page = tracking_page("輸送中", "お荷物は輸送中です。", "宅急便", "-", &details);

    let carrier_mock = server.mock(|when, then| {
        when.method(POST).path("/cgi-bin/tneko");
        then.status(200)
            .header("Content-Type", "text/html; charset=UTF-8")
            .body(&page);
    });

    let fetcher = CarrierFetcher::new(server.url("/cgi-bin/tneko"));
    let first = fetcher.fetch("390123456789").await?;
    let second = fetcher.fetch("390123456789").await?;

    carrier_mock.assert_hits(2);
    assert_eq!(first, second);
    assert!(!changed(Some(&first), &second));
    Ok(())
}

#[tokio::test]
async fn test_non_success_status_is_a_fetch_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/cgi-bin/tneko");
        then.status(503);
    });

    let fetcher = CarrierFetcher::new(server.url("/cgi-bin/tneko"));
    let result = fetcher.fetch("390123456789").await;

    assert!(matches!(
        result,
        Err(WatchError::CarrierStatusError { status: 503 })
    ));
}

#[tokio::test]
async fn test_page_without_tracking_blocks_is_a_fetch_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/cgi-bin/tneko");
        then.status(200)
            .header("Content-Type", "text/html; charset=UTF-8")
            .body("<html><body><p>ただいまメンテナンス中です。</p></body></html>");
    });

    let fetcher = CarrierFetcher::new(server.url("/cgi-bin/tneko"));
    let result = fetcher.fetch("390123456789").await;

    assert!(matches!(result, Err(WatchError::PageShapeError { .. })));
}
