//! # Id Generation
//!
//! Ids embed their creation time: `comp-<epoch millis>-<seq>`. The timestamp
//! is load-bearing — the canvas placement policy orders components by
//! creation time parsed back out of the id, not by list position. The `seq`
//! counter disambiguates ids minted within the same millisecond.

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);

fn stamped(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let seq = NEXT_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}", prefix, millis, seq)
}

/// Mint a fresh component id
pub fn component_id() -> String {
    stamped("comp")
}

/// Mint a fresh page id
pub fn page_id() -> String {
    stamped("page")
}

/// Parse the `(millis, seq)` creation stamp back out of an id.
///
/// Returns `None` for ids not produced by this scheme (imported data may
/// carry arbitrary ids; those simply never win a "newest" comparison).
pub fn id_timestamp(id: &str) -> Option<(i64, u64)> {
    let mut parts = id.rsplitn(3, '-');
    let seq = parts.next()?.parse::<u64>().ok()?;
    let millis = parts.next()?.parse::<i64>().ok()?;
    parts.next()?;
    Some((millis, seq))
}

/// Pick the most recently created id from an iterator, by embedded
/// timestamp with the sequence counter as tie-breaker.
pub fn newest_id<'a, I>(ids: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    ids.into_iter()
        .filter_map(|id| id_timestamp(id).map(|stamp| (stamp, id)))
        .max_by_key(|(stamp, _)| *stamp)
        .map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = component_id();
        let b = component_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_timestamp_round_trips() {
        let id = component_id();
        let (millis, _) = id_timestamp(&id).expect("stamp should parse");
        assert!(millis > 0);
    }

    #[test]
    fn test_foreign_ids_have_no_stamp() {
        assert_eq!(id_timestamp("a"), None);
        assert_eq!(id_timestamp("comp-abc-def"), None);
    }

    #[test]
    fn test_newest_by_stamp_not_order() {
        let ids = ["comp-200-0", "comp-100-5", "comp-200-1"];
        assert_eq!(newest_id(ids), Some("comp-200-1"));
    }

    #[test]
    fn test_newest_ignores_unstamped() {
        let ids = ["custom", "comp-50-0"];
        assert_eq!(newest_id(ids), Some("comp-50-0"));
    }
}
