//! # TraceLog: issue -> subscription records.
//!
//! Issues appear in the order their first record arrived, which is also the
//! iteration order of the rendered report. Under the hood this is the same
//! lock-guarded list primitive the registry uses, keyed by an
//! insertion-ordered map.

use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::issue::Issue;
use crate::sync::SyncList;
use crate::trace::record::SubscribeRecord;

/// Append-only log of traced subscriptions, grouped by issue.
///
/// Records are never removed by unsubscribe — the log is subscription
/// history, not the live subscriber set.
/// [`Bulletin::reset`](crate::Bulletin::reset) clears the log together with
/// the registry.
pub struct TraceLog<I> {
    records: Mutex<IndexMap<I, SyncList<SubscribeRecord<I>>>>,
}

impl<I: Issue> TraceLog<I> {
    /// Fixed report returned by [`render`](TraceLog::render) when no record
    /// exists for any issue.
    pub const NO_RECORDS: &'static str = "No subscribe records.";

    pub(crate) fn new() -> Self {
        Self {
            records: Mutex::new(IndexMap::new()),
        }
    }

    pub(crate) fn record(&self, record: SubscribeRecord<I>) {
        self.records
            .lock()
            .entry(record.issue)
            .or_default()
            .push(record);
    }

    pub(crate) fn clear(&self) {
        self.records.lock().clear();
    }

    /// Snapshot of the records for `issue`, in subscription order.
    ///
    /// Empty when nothing was ever traced for the issue.
    pub fn records_for(&self, issue: I) -> Vec<SubscribeRecord<I>> {
        let records = self.records.lock();
        match records.get(&issue) {
            Some(list) => list.snapshot(),
            None => Vec::new(),
        }
    }

    /// Renders the whole log as a human-readable report.
    ///
    /// One block per issue with at least one record, in first-record order;
    /// records without an origin show `-`. Same log state, same string —
    /// beyond that the exact formatting carries no stability guarantee.
    pub fn render(&self) -> String {
        use std::fmt::Write;

        let records = self.records.lock();
        if records.is_empty() {
            return Self::NO_RECORDS.to_string();
        }

        let mut out = String::from("issue => {\n  [origin] listeners\n}\n---\n\n");
        for (issue, list) in records.iter() {
            let _ = writeln!(out, "{issue:?} => {{");
            for record in list.snapshot() {
                let origin = record.origin.as_deref().unwrap_or("-");
                let _ = writeln!(out, "  [{origin}] {}", record.listeners);
            }
            out.push_str("}\n\n");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Topic {
        Saved,
        Loaded,
    }

    #[test]
    fn test_render_sentinel_when_empty() {
        let log: TraceLog<Topic> = TraceLog::new();
        assert_eq!(log.render(), TraceLog::<Topic>::NO_RECORDS);
    }

    #[test]
    fn test_records_grouped_by_issue() {
        let log = TraceLog::new();
        log.record(SubscribeRecord::new(Topic::Saved, Some("autosave"), "save banner"));
        log.record(SubscribeRecord::new(Topic::Loaded, None, "loading spinner"));
        log.record(SubscribeRecord::new(Topic::Saved, Some("cloud"), "cloud sync"));

        let saved = log.records_for(Topic::Saved);
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].origin.as_deref(), Some("autosave"));
        assert_eq!(saved[1].origin.as_deref(), Some("cloud"));
        assert_eq!(log.records_for(Topic::Loaded).len(), 1);
    }

    #[test]
    fn test_render_follows_first_record_order() {
        let log = TraceLog::new();
        log.record(SubscribeRecord::new(Topic::Loaded, None, "loading spinner"));
        log.record(SubscribeRecord::new(Topic::Saved, Some("autosave"), "save banner"));
        log.record(SubscribeRecord::new(Topic::Loaded, Some("hud"), "hud refresh"));

        let report = log.render();
        let loaded_at = report.find("Loaded").unwrap();
        let saved_at = report.find("Saved").unwrap();
        assert!(loaded_at < saved_at, "Loaded was traced first:\n{report}");
        assert!(report.contains("[-] loading spinner"));
        assert!(report.contains("[autosave] save banner"));
        assert!(report.contains("[hud] hud refresh"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let log = TraceLog::new();
        log.record(SubscribeRecord::new(Topic::Saved, Some("autosave"), "save banner"));
        assert_eq!(log.render(), log.render());
    }

    #[test]
    fn test_clear_returns_to_sentinel() {
        let log = TraceLog::new();
        log.record(SubscribeRecord::new(Topic::Saved, None, "save banner"));
        log.clear();
        assert_eq!(log.render(), TraceLog::<Topic>::NO_RECORDS);
        assert!(log.records_for(Topic::Saved).is_empty());
    }
}
