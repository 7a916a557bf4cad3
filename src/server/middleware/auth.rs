use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::admin_user::AdminUserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::admin_user::AdminUser,
};

pub enum Permission {
    /// Super admin or admin role.
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the signed-in admin profile if it satisfies every permission.
    ///
    /// The profile is re-read on every call. A profile that has been removed,
    /// deactivated or demoted out of the admin area clears the session, so the next
    /// request is treated as logged out.
    ///
    /// # Returns
    /// - `Ok(AdminUser)` - Signed in with every permission
    /// - `Err(AuthError::NotLoggedIn)` - No uid in session
    /// - `Err(AuthError::ProfileNotFound)` - Profile deleted since sign-in
    /// - `Err(AuthError::AccountInactive)` - Profile deactivated since sign-in
    /// - `Err(AuthError::RoleNotPermitted)` - Role does not grant a permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<AdminUser, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(uid) = auth_session.admin_uid().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let admin_repo = AdminUserRepository::new(self.db);
        let Some(admin) = admin_repo.find_by_uid(&uid).await? else {
            tracing::warn!("Admin profile {} no longer exists, clearing session", uid);
            auth_session.clear().await;
            return Err(AuthError::ProfileNotFound.into());
        };

        if !admin.active {
            tracing::warn!("Admin profile {} is inactive, clearing session", uid);
            auth_session.clear().await;
            return Err(AuthError::AccountInactive.into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !admin.role.can_access_admin() {
                        tracing::warn!("Admin profile {} lost admin role, clearing session", uid);
                        auth_session.clear().await;
                        return Err(AuthError::RoleNotPermitted.into());
                    }
                }
            }
        }

        Ok(admin)
    }
}
