use crate::domain::model::PackageRecord;

/// Renders a snapshot into the notification text:
///
/// ```text
/// 配達完了 (このお品物はお届けが済んでおります。)
/// 6月1日 午前中
///   06月01日 08:12  荷物受付  (新宿支店)
///   06月01日 09:40  配達完了  (渋谷センター)
/// ```
///
/// The delivery-time line is left out entirely while the carrier still
/// serves its "not available" placeholder. Every history event is rendered,
/// one line each, in the order it was reported.
pub fn render(record: &PackageRecord) -> String {
    let mut text = format!("{} ({})\n", record.status, record.status_detail);

    if record.has_delivery_time() {
        text.push_str(&record.delivery_time);
        text.push('\n');
    }

    for event in &record.details {
        text.push_str(&format!(
            "  {}  {}  ({})\n",
            event.date, event.title, event.name
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DeliveryEvent, DELIVERY_TIME_UNSET};

    fn event(title: &str, date: &str, name: &str) -> DeliveryEvent {
        DeliveryEvent {
            title: title.to_string(),
            date: date.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_one_line_per_event_in_order() {
        let record = PackageRecord::new(
            "390123456789",
            "配達完了",
            "このお品物はお届けが済んでおります。",
            "宅急便",
            DELIVERY_TIME_UNSET,
            vec![
                event("荷物受付", "01月01日 10:00", "Depot1"),
                event("発送済み", "01月01日 18:00", "Depot1"),
                event("配達完了", "01月02日 09:00", "Depot2"),
            ],
        );

        let text = render(&record);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "配達完了 (このお品物はお届けが済んでおります。)");
        assert_eq!(lines[1], "  01月01日 10:00  荷物受付  (Depot1)");
        assert_eq!(lines[2], "  01月01日 18:00  発送済み  (Depot1)");
        assert_eq!(lines[3], "  01月02日 09:00  配達完了  (Depot2)");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_delivery_time_line_present_when_scheduled() {
        let record = PackageRecord::new(
            "390123456789",
            "輸送中",
            "お荷物は輸送中です。",
            "宅急便",
            "6月1日 午前中",
            vec![event("荷物受付", "05月31日 12:00", "Depot1")],
        );

        let lines: Vec<String> = render(&record).lines().map(str::to_string).collect();
        assert_eq!(lines[1], "6月1日 午前中");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_delivery_time_line_omitted_on_sentinel() {
        let record = PackageRecord::new(
            "390123456789",
            "輸送中",
            "お荷物は輸送中です。",
            "宅急便",
            DELIVERY_TIME_UNSET,
            vec![event("荷物受付", "05月31日 12:00", "Depot1")],
        );

        let text = render(&record);
        assert!(!text.contains(DELIVERY_TIME_UNSET));
        // no blank line between the status line and the history
        assert_eq!(text.lines().nth(1).unwrap(), "  05月31日 12:00  荷物受付  (Depot1)");
    }

    #[test]
    fn test_empty_history_renders_status_only() {
        let record = PackageRecord::new(
            "390123456789",
            "伝票番号未登録",
            "伝票番号の登録が確認できません。",
            "",
            DELIVERY_TIME_UNSET,
            vec![],
        );

        assert_eq!(
            render(&record),
            "伝票番号未登録 (伝票番号の登録が確認できません。)\n"
        );
    }
}
