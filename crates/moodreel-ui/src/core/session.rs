//! Session state: the signed-in user, its durable mirror, and favorites.
//!
//! # Design
//! - Every transition is synchronous so the store tests natively; remote
//!   confirmation lives in the action layer and feeds failures back through
//!   [`SessionStore::reconcile_from_record`].
//! - Favorites apply optimistically: memory and the durable record move
//!   together before the backend confirms.

#[cfg(target_arch = "wasm32")]
use gloo::console;
#[cfg(target_arch = "wasm32")]
use gloo::storage::{LocalStorage, Storage};
use moodreel_api_models::User;
use std::cell::RefCell;
use std::rc::Rc;

/// Durable storage key for the serialized session user.
#[cfg(target_arch = "wasm32")]
const USER_KEY: &str = "moodreel.user";

/// Durable record backend holding at most one serialized [`User`].
pub trait UserRecord {
    /// Read and parse the stored user; `None` on absence or parse failure.
    fn load(&self) -> Option<User>;
    /// Persist the user, replacing any previous record.
    fn save(&self, user: &User);
    /// Remove the record.
    fn clear(&self);
}

/// In-memory record used by native builds and store tests. Clones share the
/// same slot, the way independent handles share one `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryRecord {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryRecord {
    /// Raw serialized record contents.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Replace the raw serialized record contents.
    pub fn set_raw(&self, raw: Option<String>) {
        *self.slot.borrow_mut() = raw;
    }
}

impl UserRecord for MemoryRecord {
    fn load(&self) -> Option<User> {
        self.slot
            .borrow()
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
    }

    fn save(&self, user: &User) {
        if let Ok(raw) = serde_json::to_string(user) {
            *self.slot.borrow_mut() = Some(raw);
        }
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// Durable record backed by browser `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct LocalRecord;

#[cfg(target_arch = "wasm32")]
impl UserRecord for LocalRecord {
    fn load(&self) -> Option<User> {
        LocalStorage::get::<User>(USER_KEY).ok()
    }

    fn save(&self, user: &User) {
        if let Err(err) = LocalStorage::set(USER_KEY, user) {
            console::error!("session record write failed", err.to_string());
        }
    }

    fn clear(&self) {
        LocalStorage::delete(USER_KEY);
    }
}

/// Lifecycle of the session across one process run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Durable record not read yet.
    #[default]
    Unknown,
    /// No signed-in user.
    Anonymous,
    /// A user is signed in.
    Authenticated(User),
}

/// A favorites mutation to plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FavoriteChange {
    /// Append the id. No membership check; the list may hold duplicates.
    Add(String),
    /// Drop every occurrence of the id.
    Remove(String),
}

/// Authoritative holder of the signed-in user, mirrored to a durable record.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<R: UserRecord> {
    phase: SessionPhase,
    record: R,
}

impl<R: UserRecord> SessionStore<R> {
    /// Store over the given record backend, starting `Unknown`.
    #[must_use]
    pub const fn new(record: R) -> Self {
        Self {
            phase: SessionPhase::Unknown,
            record,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match &self.phase {
            SessionPhase::Authenticated(user) => Some(user),
            SessionPhase::Unknown | SessionPhase::Anonymous => None,
        }
    }

    /// Whether a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.phase, SessionPhase::Authenticated(_))
    }

    /// Read the durable record; absence or parse failure means `Anonymous`.
    pub fn restore(&mut self) {
        self.phase = match self.record.load() {
            Some(user) => SessionPhase::Authenticated(user),
            None => SessionPhase::Anonymous,
        };
    }

    /// Install the user returned by login or signup and persist it.
    pub fn apply_login(&mut self, user: User) {
        self.record.save(&user);
        self.phase = SessionPhase::Authenticated(user);
    }

    /// Clear in-memory and durable state. Idempotent.
    pub fn logout(&mut self) {
        self.record.clear();
        self.phase = SessionPhase::Anonymous;
    }

    /// Plan the favorites list after the change; `None` when not signed in.
    #[must_use]
    pub fn favorites_with(&self, change: &FavoriteChange) -> Option<Vec<String>> {
        let user = self.user()?;
        let favorites = match change {
            FavoriteChange::Add(id) => {
                let mut next = user.favorites.clone();
                next.push(id.clone());
                next
            }
            FavoriteChange::Remove(id) => user
                .favorites
                .iter()
                .filter(|existing| *existing != id)
                .cloned()
                .collect(),
        };
        Some(favorites)
    }

    /// Optimistic step: apply the list in memory and mirror it to the
    /// record, before any remote confirmation. No-op when not signed in.
    pub fn apply_favorites(&mut self, favorites: Vec<String>) {
        if let SessionPhase::Authenticated(user) = &mut self.phase {
            user.favorites = favorites;
            self.record.save(user);
        }
    }

    /// Failure step: re-read the durable record as it is now. A mutation
    /// issued after the failed call has already overwritten the record, so
    /// that later value wins and the earlier failed change is not restored.
    /// A missing or unparseable record leaves memory unchanged.
    pub fn reconcile_from_record(&mut self) {
        if let Some(user) = self.record.load() {
            self.phase = SessionPhase::Authenticated(user);
        }
    }

    /// Whether the id is in the signed-in user's favorites.
    #[must_use]
    pub fn is_favorite(&self, movie_id: &str) -> bool {
        self.user()
            .is_some_and(|user| user.favorites.iter().any(|id| id == movie_id))
    }
}

impl<R: UserRecord> PartialEq for SessionStore<R> {
    fn eq(&self, other: &Self) -> bool {
        self.phase == other.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_user() -> User {
        User {
            id: "u-1".to_string(),
            email: "user@example.com".to_string(),
            name: "Demo User".to_string(),
            favorites: Vec::new(),
        }
    }

    fn authed_store() -> (SessionStore<MemoryRecord>, MemoryRecord) {
        let record = MemoryRecord::default();
        let mut store = SessionStore::new(record.clone());
        store.restore();
        store.apply_login(demo_user());
        (store, record)
    }

    fn apply(store: &mut SessionStore<MemoryRecord>, change: &FavoriteChange) {
        let next = store.favorites_with(change).expect("signed in");
        store.apply_favorites(next);
    }

    fn favorites_of(store: &SessionStore<MemoryRecord>) -> Vec<String> {
        store.user().expect("signed in").favorites.clone()
    }

    #[test]
    fn starts_unknown_until_restored() {
        let mut store = SessionStore::new(MemoryRecord::default());
        assert_eq!(*store.phase(), SessionPhase::Unknown);
        store.restore();
        assert_eq!(*store.phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn restore_reads_the_persisted_user() {
        let record = MemoryRecord::default();
        record.save(&demo_user());

        let mut store = SessionStore::new(record);
        store.restore();
        assert_eq!(store.user(), Some(&demo_user()));
    }

    #[test]
    fn restore_treats_garbage_as_no_session() {
        let record = MemoryRecord::default();
        record.set_raw(Some("{not json".to_string()));

        let mut store = SessionStore::new(record);
        store.restore();
        assert_eq!(*store.phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn login_persists_and_authenticates() {
        let record = MemoryRecord::default();
        let mut store = SessionStore::new(record.clone());
        store.restore();

        store.apply_login(demo_user());
        assert!(store.is_authenticated());
        assert_eq!(record.load(), Some(demo_user()));
    }

    #[test]
    fn favorite_sequences_keep_memory_and_record_converged() {
        let (mut store, record) = authed_store();

        apply(&mut store, &FavoriteChange::Add("a".to_string()));
        assert_eq!(favorites_of(&store), vec!["a"]);
        assert_eq!(record.load().expect("record").favorites, vec!["a"]);

        apply(&mut store, &FavoriteChange::Add("b".to_string()));
        assert_eq!(favorites_of(&store), vec!["a", "b"]);
        assert_eq!(record.load().expect("record").favorites, vec!["a", "b"]);

        apply(&mut store, &FavoriteChange::Remove("a".to_string()));
        assert_eq!(favorites_of(&store), vec!["b"]);
        assert_eq!(record.load().expect("record").favorites, vec!["b"]);
    }

    #[test]
    fn add_never_checks_membership() {
        let (mut store, _record) = authed_store();
        apply(&mut store, &FavoriteChange::Add("a".to_string()));
        apply(&mut store, &FavoriteChange::Add("a".to_string()));
        assert_eq!(favorites_of(&store), vec!["a", "a"]);
    }

    #[test]
    fn remove_drops_every_occurrence() {
        let (mut store, _record) = authed_store();
        apply(&mut store, &FavoriteChange::Add("a".to_string()));
        apply(&mut store, &FavoriteChange::Add("a".to_string()));
        apply(&mut store, &FavoriteChange::Remove("a".to_string()));
        assert!(favorites_of(&store).is_empty());
    }

    #[test]
    fn planning_requires_a_session() {
        let mut store = SessionStore::new(MemoryRecord::default());
        store.restore();
        assert_eq!(store.favorites_with(&FavoriteChange::Add("a".to_string())), None);
    }

    #[test]
    fn is_favorite_is_true_right_after_the_optimistic_step() {
        let (mut store, _record) = authed_store();
        let next = store
            .favorites_with(&FavoriteChange::Add("603".to_string()))
            .expect("signed in");
        store.apply_favorites(next);
        assert!(store.is_favorite("603"));
    }

    #[test]
    fn is_favorite_is_false_when_anonymous() {
        let mut store = SessionStore::new(MemoryRecord::default());
        store.restore();
        assert!(!store.is_favorite("603"));
    }

    #[test]
    fn logout_clears_memory_and_record() {
        let (mut store, record) = authed_store();
        apply(&mut store, &FavoriteChange::Add("a".to_string()));

        store.logout();
        assert!(!store.is_favorite("a"));
        assert_eq!(*store.phase(), SessionPhase::Anonymous);
        assert_eq!(record.raw(), None);

        // Logging out again stays a no-op.
        store.logout();
        assert_eq!(*store.phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn reconcile_rolls_back_to_the_latest_record_value() {
        let (mut store, record) = authed_store();

        // Two optimistic updates race; the second owns the record when the
        // first call's failure arrives.
        apply(&mut store, &FavoriteChange::Add("a".to_string()));
        apply(&mut store, &FavoriteChange::Add("b".to_string()));

        store.reconcile_from_record();
        assert_eq!(favorites_of(&store), vec!["a", "b"]);
        assert_eq!(record.load().expect("record").favorites, vec!["a", "b"]);
    }

    #[test]
    fn reconcile_without_a_record_keeps_state() {
        let (mut store, record) = authed_store();
        apply(&mut store, &FavoriteChange::Add("a".to_string()));

        record.set_raw(None);
        store.reconcile_from_record();
        assert_eq!(favorites_of(&store), vec!["a"]);
    }

    #[test]
    fn record_round_trip_preserves_field_and_order() {
        let record = MemoryRecord::default();
        let user = User {
            favorites: vec!["3".to_string(), "1".to_string(), "2".to_string()],
            ..demo_user()
        };
        record.save(&user);
        assert_eq!(record.load(), Some(user));
    }
}
