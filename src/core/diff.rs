use crate::domain::model::PackageRecord;

/// Whether the freshly fetched snapshot should be reported.
///
/// With no prior snapshot (first poll) every record counts as changed, so
/// the first successful fetch always produces a notification. Otherwise the
/// comparison is full structural equality over every field including the
/// ordered event history.
pub fn changed(previous: Option<&PackageRecord>, current: &PackageRecord) -> bool {
    match previous {
        None => true,
        Some(previous) => previous != current,
    }
}
