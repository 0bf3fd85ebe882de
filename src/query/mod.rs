//! Read-only queries over a loaded collection.

use crate::models::{record_id, Page, Record};

/// Contiguous window of `records` selected by `page`.
///
/// Missing values default to `offset = 0` and `limit = records.len()`.
/// Negative or oversized values are clamped into range, so this never fails
/// and never wraps around from the end.
pub fn paginate(records: &[Record], page: Page) -> &[Record] {
    let len = records.len();
    let start = clamp_to_len(page.offset.unwrap_or(0), len);
    let take = page.limit.map_or(len, |limit| clamp_to_len(limit, len));
    let end = start.saturating_add(take).min(len);
    &records[start..end]
}

/// First record whose `id` equals `id`, in collection order.
pub fn find_by_id(records: &[Record], id: i64) -> Option<&Record> {
    records.iter().find(|record| record_id(record) == Some(id))
}

fn clamp_to_len(value: i64, len: usize) -> usize {
    if value <= 0 {
        return 0;
    }
    usize::try_from(value).map_or(len, |v| v.min(len))
}
