use dioxus::prelude::*;
use std::rc::Rc;

use crate::{client::model::error::ApiError, model::auth::AdminUserDto};

#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    /// Initial state - haven't checked the session yet
    Initializing,
    /// Admin is signed in
    Authenticated(AdminUserDto),
    /// No active session
    NotLoggedIn,
    /// Failed to check the session
    Error(ApiError),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    /// Whether the session check has finished, successfully or not.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Initializing)
    }

    pub fn admin(&self) -> Option<&AdminUserDto> {
        match self {
            AuthState::Authenticated(admin) => Some(admin),
            _ => None,
        }
    }
}

impl From<Result<Option<AdminUserDto>, ApiError>> for AuthState {
    fn from(result: Result<Option<AdminUserDto>, ApiError>) -> Self {
        match result {
            Ok(Some(admin)) => AuthState::Authenticated(admin),
            Ok(None) => AuthState::NotLoggedIn,
            Err(err) => AuthState::Error(err),
        }
    }
}

type AuthListener = Rc<dyn Fn(&AuthState)>;

/// Callbacks interested in sign-in state changes.
#[derive(Default)]
pub struct AuthListeners {
    next_id: u64,
    listeners: Vec<(u64, AuthListener)>,
}

impl AuthListeners {
    pub fn subscribe(&mut self, listener: AuthListener) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: u64) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Listeners to call for a change, cloned so callbacks may subscribe or unsubscribe.
    fn snapshot(&self) -> Vec<AuthListener> {
        self.listeners.iter().map(|(_, l)| l.clone()).collect()
    }
}

/// Registration handle returned by [`AuthContext::on_auth_change`].
///
/// Dropping the handle removes the callback.
pub struct Unsubscribe {
    listeners: Signal<AuthListeners>,
    id: u64,
}

impl Drop for Unsubscribe {
    fn drop(&mut self) {
        // The signal is gone once the app root unmounts.
        if let Ok(mut listeners) = self.listeners.try_write() {
            listeners.unsubscribe(self.id);
        }
    }
}

/// Signed-in admin shared through context from the app root.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
    listeners: Signal<AuthListeners>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
            listeners: Signal::new(AuthListeners::default()),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    /// Replaces the state and notifies every registered callback.
    pub fn set(&mut self, state: AuthState) {
        self.inner.set(state.clone());
        let listeners = self.listeners.peek().snapshot();
        for listener in listeners {
            listener(&state);
        }
    }

    /// Registers `callback` for every later state change.
    pub fn on_auth_change(&mut self, callback: impl Fn(&AuthState) + 'static) -> Unsubscribe {
        let id = self.listeners.write().subscribe(Rc::new(callback));
        Unsubscribe {
            listeners: self.listeners,
            id,
        }
    }

    /// Drops to logged out when an API call reports the session is no longer valid,
    /// which sends the admin area back to the login page.
    pub fn handle_unauthorized(&mut self, err: &ApiError) {
        if err.status == 401 || (err.status == 403 && self.inner.peek().is_authenticated()) {
            self.set(AuthState::NotLoggedIn);
        }
    }

    /// Re-reads the session from the server.
    #[cfg(feature = "web")]
    pub async fn refresh(&mut self) {
        let state = AuthState::from(crate::client::api::auth::get_current_admin().await);
        self.set(state);
    }

    #[cfg(feature = "web")]
    pub async fn logout(&mut self) {
        if let Err(err) = crate::client::api::auth::logout().await {
            dioxus_logger::tracing::error!("Failed to sign out: {}", err);
        }
        self.set(AuthState::NotLoggedIn);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::model::auth::AdminRole;

    fn admin() -> AdminUserDto {
        AdminUserDto {
            uid: "uid-1".to_string(),
            email: "admin@masjid.my".to_string(),
            display_name: "Pentadbir".to_string(),
            role: AdminRole::Admin,
        }
    }

    #[test]
    fn maps_session_lookup_results() {
        assert!(AuthState::from(Ok(Some(admin()))).is_authenticated());
        assert_eq!(AuthState::from(Ok(None)), AuthState::NotLoggedIn);

        let errored = AuthState::from(Err(ApiError::new(500, "Ralat dalaman pelayan")));
        assert!(errored.is_resolved());
        assert!(errored.admin().is_none());
        assert!(!AuthState::Initializing.is_resolved());
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = AuthListeners::default();

        let first = calls.clone();
        let first_id = listeners.subscribe(Rc::new(move |s: &AuthState| {
            first.borrow_mut().push(("first", s.is_authenticated()))
        }));
        let second = calls.clone();
        listeners.subscribe(Rc::new(move |s: &AuthState| {
            second.borrow_mut().push(("second", s.is_authenticated()))
        }));

        listeners.unsubscribe(first_id);
        for listener in listeners.snapshot() {
            listener(&AuthState::Authenticated(admin()));
        }

        assert_eq!(listeners.len(), 1);
        assert_eq!(*calls.borrow(), vec![("second", true)]);
    }
}
