// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bookkeeping for stylesheets mirrored into the isolated document.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

/// Tracks which mirrored stylesheets are still loading.
///
/// Styles are settled once the host has finished collecting stylesheets and
/// every collected one has either loaded or failed.
#[derive(Clone, Debug, Default)]
pub(crate) struct StyleTracker {
    pending: HashSet<String>,
    failed: Vec<String>,
    collected: bool,
}

impl StyleTracker {
    /// Records a stylesheet that is now loading. Returns `false` if it was
    /// already pending.
    pub(crate) fn register(&mut self, href: &str) -> bool {
        if self.pending.contains(href) {
            return false;
        }
        self.pending.insert(String::from(href))
    }

    /// Marks a stylesheet as loaded. Returns `false` if it was not pending.
    pub(crate) fn loaded(&mut self, href: &str) -> bool {
        self.pending.remove(href)
    }

    /// Marks a stylesheet as failed; it no longer blocks readiness.
    pub(crate) fn failed(&mut self, href: &str) -> bool {
        let was_pending = self.pending.remove(href);
        if was_pending {
            self.failed.push(String::from(href));
        }
        was_pending
    }

    /// The host will not register further stylesheets.
    pub(crate) fn finish_collection(&mut self) {
        self.collected = true;
    }

    pub(crate) fn is_settled(&self) -> bool {
        self.collected && self.pending.is_empty()
    }

    pub(crate) fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn failed_hrefs(&self) -> &[String] {
        &self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::StyleTracker;

    #[test]
    fn settles_after_collection_and_loads() {
        let mut styles = StyleTracker::default();
        assert!(!styles.is_settled());

        assert!(styles.register("a.css"));
        assert!(!styles.register("a.css"));
        assert!(styles.register("b.css"));
        styles.finish_collection();
        assert_eq!(styles.pending_len(), 2);
        assert!(!styles.is_settled());

        assert!(styles.loaded("a.css"));
        assert!(!styles.loaded("a.css"));
        assert!(styles.failed("b.css"));
        assert!(styles.is_settled());
        assert_eq!(styles.failed_hrefs(), ["b.css"]);
    }

    #[test]
    fn empty_collection_settles_immediately() {
        let mut styles = StyleTracker::default();
        styles.finish_collection();
        assert!(styles.is_settled());
    }
}
