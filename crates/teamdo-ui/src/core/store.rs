//! App-wide yewdux store.
//!
//! # Design
//! - Only cross-view state lives here; per-view lists stay with their views.

use crate::core::notice::{NoticeDraft, NoticeQueue};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Visible notices.
    pub notices: NoticeQueue,
}

impl AppStore {
    /// Queue a notice.
    pub fn notify(&mut self, draft: NoticeDraft) -> u64 {
        self.notices.push(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_appends_to_queue() {
        let mut store = AppStore::default();
        let id = store.notify(NoticeDraft::error("common.busy"));
        assert_eq!(store.notices.items()[0].id, id);
    }
}
