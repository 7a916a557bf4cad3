//! Type-safe session access.
//!
//! The only state kept in the session is the uid of the signed-in admin profile.
//! Everything else (display name, role, active flag) is re-read from the
//! `admin_user` table on each request by `AuthGuard`.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_ADMIN_UID: &str = "auth:admin_uid";

/// Authentication session management.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the signed-in admin's uid, establishing a logged-in session.
    ///
    /// The session id is rotated first, so an id issued before sign-in is never
    /// authenticated.
    ///
    /// # Returns
    /// - `Ok(())` - Uid stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_admin_uid(&self, uid: &str) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_ADMIN_UID, uid.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the signed-in admin's uid.
    ///
    /// # Returns
    /// - `Ok(Some(uid))` - An admin is signed in
    /// - `Ok(None)` - Nobody is signed in
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn admin_uid(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_ADMIN_UID).await?)
    }

    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.admin_uid().await?.is_some())
    }

    /// Clears all data from the session.
    ///
    /// Used on logout and whenever a sign-in or guard check denies access, so a
    /// rejected profile never keeps a half-authenticated session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
