//! The admin session: stored credentials, invalidation events and the route guard.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "adminToken";
/// Storage key of the signed-in user id.
pub const USER_ID_KEY: &str = "userId";

/// Key/value storage backing a session.
///
/// Browser local storage at runtime; [`MemoryStore`] in tests.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory [`SessionStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// What a successful login hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub user_id: Option<String>,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidationReason {
    /// The admin clicked logout.
    Logout,
    /// The backend rejected the token (HTTP 401).
    Rejected,
}

impl InvalidationReason {
    /// Notice shown on the login view after the session ends, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            InvalidationReason::Logout => None,
            InvalidationReason::Rejected => Some("Your session has expired. Please sign in again."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn,
    Invalidated { reason: InvalidationReason },
}

impl SessionEvent {
    pub fn description(&self) -> &'static str {
        match self {
            SessionEvent::SignedIn => "signed in",
            SessionEvent::Invalidated {
                reason: InvalidationReason::Logout,
            } => "logged out",
            SessionEvent::Invalidated {
                reason: InvalidationReason::Rejected,
            } => "token rejected",
        }
    }
}

type Subscriber = Rc<dyn Fn(&SessionEvent)>;

/// Handle to the admin session. Clones share the same store and subscribers.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn SessionStore>,
    subscribers: Rc<RefCell<Vec<(u64, Subscriber)>>>,
    next_id: Rc<Cell<u64>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.subscribers, &other.subscribers)
    }
}

impl Session {
    /// Open a session over `store`, picking up any credentials already in it.
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// A session backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// The stored bearer token. Blank tokens count as absent.
    pub fn token(&self) -> Option<String> {
        self.store
            .get(TOKEN_KEY)
            .filter(|t| !t.trim().is_empty())
    }

    pub fn user_id(&self) -> Option<String> {
        self.store.get(USER_ID_KEY).filter(|id| !id.is_empty())
    }

    pub fn credentials(&self) -> Option<Credentials> {
        self.token().map(|token| Credentials {
            token,
            user_id: self.user_id(),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist `credentials` and notify subscribers.
    pub fn sign_in(&self, credentials: Credentials) {
        self.store.set(TOKEN_KEY, &credentials.token);
        match credentials.user_id.as_deref() {
            Some(id) => self.store.set(USER_ID_KEY, id),
            None => self.store.remove(USER_ID_KEY),
        }
        tracing::info!("admin session started");
        self.emit(&SessionEvent::SignedIn);
    }

    pub fn logout(&self) {
        self.invalidate(InvalidationReason::Logout);
    }

    /// Clear stored credentials and notify subscribers.
    pub fn invalidate(&self, reason: InvalidationReason) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_ID_KEY);
        let event = SessionEvent::Invalidated { reason };
        tracing::info!("admin session ended: {}", event.description());
        self.emit(&event);
    }

    /// Register a callback for session events. Returns an id for
    /// [`Session::unsubscribe`].
    pub fn subscribe(&self, callback: impl Fn(&SessionEvent) + 'static) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: u64) {
        self.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    fn emit(&self, event: &SessionEvent) {
        // Callbacks may subscribe or sign out in turn.
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in subscribers {
            callback(event);
        }
    }
}

/// Outcome of the route guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    RedirectToLogin,
    RedirectToDashboard,
}

/// Decide whether a view may render.
///
/// Every view but login requires a session; login itself bounces signed-in
/// admins to the dashboard.
pub fn check_access(authenticated: bool, on_login_view: bool) -> Access {
    match (authenticated, on_login_view) {
        (true, true) => Access::RedirectToDashboard,
        (false, false) => Access::RedirectToLogin,
        _ => Access::Granted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials {
            token: "tok-1".to_string(),
            user_id: Some("admin-7".to_string()),
        }
    }

    #[test]
    fn sign_in_persists_both_keys() {
        let store = Rc::new(MemoryStore::new());
        let session = Session::new(Rc::clone(&store));
        assert!(!session.is_authenticated());

        session.sign_in(creds());
        assert_eq!(session.credentials(), Some(creds()));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok-1"));
        assert_eq!(store.get(USER_ID_KEY).as_deref(), Some("admin-7"));
    }

    #[test]
    fn restores_from_existing_store() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "kept");
        let session = Session::new(store);
        assert_eq!(session.token().as_deref(), Some("kept"));
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn blank_token_is_not_a_session() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "  ");
        assert!(!Session::new(store).is_authenticated());
    }

    #[test]
    fn invalidation_clears_and_notifies() {
        let session = Session::in_memory();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = session.subscribe(move |e| sink.borrow_mut().push(e.clone()));

        session.sign_in(creds());
        session.invalidate(InvalidationReason::Rejected);
        assert!(!session.is_authenticated());
        assert_eq!(session.user_id(), None);

        session.unsubscribe(id);
        session.logout();
        assert_eq!(
            *seen.borrow(),
            vec![
                SessionEvent::SignedIn,
                SessionEvent::Invalidated {
                    reason: InvalidationReason::Rejected
                },
            ]
        );
    }

    #[test]
    fn subscriber_may_reenter_session() {
        let session = Session::in_memory();
        let inner = session.clone();
        session.subscribe(move |e| {
            if *e == SessionEvent::SignedIn {
                inner.subscribe(|_| {});
            }
        });
        session.sign_in(creds());
        assert_eq!(session.subscribers.borrow().len(), 2);
    }

    #[test]
    fn guard_table() {
        assert_eq!(check_access(false, false), Access::RedirectToLogin);
        assert_eq!(check_access(false, true), Access::Granted);
        assert_eq!(check_access(true, false), Access::Granted);
        assert_eq!(check_access(true, true), Access::RedirectToDashboard);
    }
}
