//! # SyncList: lock-guarded append-ordered list.
//!
//! [`SyncList`] keeps an internally ordered sequence behind a single
//! [`parking_lot::Mutex`]. Appends are O(1) amortized; removal scans linearly
//! for the first match; [`SyncList::snapshot`] clones the contents under the
//! lock and returns an owned `Vec`, so callers iterate (and run arbitrary
//! code) with no lock held.
//!
//! The lock is held only for the O(n) copy/scan itself — never across caller
//! code. Snapshot first, release, then iterate.

use parking_lot::Mutex;

/// Append-ordered list with mutually exclusive mutation and snapshot.
pub(crate) struct SyncList<T> {
    items: Mutex<Vec<T>>,
}

impl<T> SyncList<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    /// Appends a value, preserving insertion order.
    pub(crate) fn push(&self, value: T) {
        self.items.lock().push(value);
    }

    /// Removes the first element matching `pred`.
    ///
    /// Returns whether a match was found and removed.
    pub(crate) fn remove_first<P>(&self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut items = self.items.lock();
        match items.iter().position(pred) {
            Some(idx) => {
                items.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl<T: Clone> SyncList<T> {
    /// Returns an independent copy of the current contents.
    pub(crate) fn snapshot(&self) -> Vec<T> {
        self.items.lock().clone()
    }
}

impl<T> Default for SyncList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_push_preserves_order() {
        let list = SyncList::new();
        list.push(1);
        list.push(2);
        list.push(3);
        assert_eq!(list.snapshot(), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_first_match_only() {
        let list = SyncList::new();
        list.push(1);
        list.push(2);
        list.push(1);
        assert!(list.remove_first(|v| *v == 1));
        assert_eq!(list.snapshot(), vec![2, 1]);
    }

    #[test]
    fn test_remove_reports_missing() {
        let list = SyncList::new();
        list.push(1);
        assert!(!list.remove_first(|v| *v == 9));
        assert_eq!(list.snapshot(), vec![1]);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let list = SyncList::new();
        list.push("a");
        let snap = list.snapshot();
        list.push("b");
        assert_eq!(snap, vec!["a"]);
        assert_eq!(list.snapshot(), vec!["a", "b"]);
    }

    #[test]
    fn test_concurrent_appends_are_not_lost() {
        let list = Arc::new(SyncList::new());
        let mut handles = Vec::new();
        for t in 0..8i32 {
            let list = Arc::clone(&list);
            handles.push(thread::spawn(move || {
                for i in 0..100 {
                    list.push(t * 100 + i);
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(list.snapshot().len(), 800);
    }
}
