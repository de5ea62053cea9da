//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Slices stay DOM-free so reducers run under native tests.

#[cfg(target_arch = "wasm32")]
use crate::core::session::LocalRecord;
#[cfg(not(target_arch = "wasm32"))]
use crate::core::session::MemoryRecord;
use crate::core::session::SessionStore;
use crate::models::{Toast, ToastKind};
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Cap on simultaneously visible toasts.
const MAX_TOASTS: usize = 4;

/// Session store bound to browser `localStorage`.
#[cfg(target_arch = "wasm32")]
pub type SessionSlice = SessionStore<LocalRecord>;

/// Session store bound to an in-memory record.
#[cfg(not(target_arch = "wasm32"))]
pub type SessionSlice = SessionStore<MemoryRecord>;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Signed-in user and favorites.
    pub session: SessionSlice,
    /// Transient interface state.
    pub ui: UiSlice,
}

/// Transient interface state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiSlice {
    /// Toasts currently on screen, oldest first.
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl UiSlice {
    /// Queue a toast, evicting the oldest beyond the cap of four.
    pub fn push_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        let id = self.next_toast_id;
        self.next_toast_id = self.next_toast_id.wrapping_add(1);
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
    }

    /// Drop the toast with the given id, if still shown.
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Dispatch handle for the global [`AppStore`].
#[must_use]
pub fn app_dispatch() -> Dispatch<AppStore> {
    Dispatch::<AppStore>::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::SessionPhase;

    #[test]
    fn toast_queue_caps_at_four() {
        let mut ui = UiSlice::default();
        for n in 0..6 {
            ui.push_toast(format!("toast {n}"), ToastKind::Info);
        }
        assert_eq!(ui.toasts.len(), 4);
        let messages: Vec<&str> = ui.toasts.iter().map(|toast| toast.message.as_str()).collect();
        assert_eq!(messages, vec!["toast 2", "toast 3", "toast 4", "toast 5"]);
    }

    #[test]
    fn toast_ids_stay_unique_across_eviction() {
        let mut ui = UiSlice::default();
        for _ in 0..10 {
            ui.push_toast("ping", ToastKind::Success);
        }
        let ids: Vec<u64> = ui.toasts.iter().map(|toast| toast.id).collect();
        assert_eq!(ids, vec![6, 7, 8, 9]);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut ui = UiSlice::default();
        ui.push_toast("one", ToastKind::Info);
        ui.push_toast("two", ToastKind::Error);
        let victim = ui.toasts.first().map(|toast| toast.id).unwrap_or_default();

        ui.dismiss_toast(victim);
        let messages: Vec<&str> = ui.toasts.iter().map(|toast| toast.message.as_str()).collect();
        assert_eq!(messages, vec!["two"]);
    }

    #[test]
    fn store_defaults_to_an_unknown_session() {
        let store = AppStore::default();
        assert_eq!(*store.session.phase(), SessionPhase::Unknown);
        assert!(store.ui.toasts.is_empty());
    }
}
