use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::admin_user::AdminUserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::admin_user::AdminUser,
    service::identity::IdentityProvider,
};

/// Admin sign-in against the identity provider and the `admin_user` profiles.
///
/// The provider decides whether the credentials are valid; the stored profile decides
/// whether that identity may enter the admin area. Any denial leaves the session
/// empty, never partially authenticated.
pub struct AuthService<'a> {
    /// Database connection for admin profile lookups.
    pub db: &'a DatabaseConnection,
    /// Credential sign-in backend.
    pub identity: &'a dyn IdentityProvider,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `identity` - Identity provider used to verify credentials
    pub fn new(db: &'a DatabaseConnection, identity: &'a dyn IdentityProvider) -> Self {
        Self { db, identity }
    }

    /// Signs in with email and password and stores the admin uid in the session.
    ///
    /// # Arguments
    /// - `session` - Session of the requesting client
    /// - `email` - Submitted email, trimmed before use
    /// - `password` - Submitted password
    ///
    /// # Returns
    /// - `Ok(AdminUser)` - Signed in; `last_login` updated
    /// - `Err(AuthError::*)` - Provider rejected the credentials, or the profile is
    ///   missing, inactive, or lacks an admin role; the session is cleared
    /// - `Err(AppError::StorageErr)` - Profile lookup failed
    pub async fn login(
        &self,
        session: &Session,
        email: &str,
        password: &str,
    ) -> Result<AdminUser, AppError> {
        let auth_session = AuthSession::new(session);
        // Drop any previous sign-in before trying a new one
        auth_session.clear().await;

        let identity = self.identity.sign_in(email.trim(), password).await?;

        let admin_repo = AdminUserRepository::new(self.db);
        let admin = match admin_repo.find_by_uid(&identity.uid).await? {
            None => Err(AuthError::ProfileNotFound),
            Some(admin) if !admin.active => Err(AuthError::AccountInactive),
            Some(admin) if !admin.role.can_access_admin() => Err(AuthError::RoleNotPermitted),
            Some(admin) => Ok(admin),
        };

        let admin = match admin {
            Ok(admin) => admin,
            Err(e) => {
                tracing::warn!("Denied sign-in for {} ({}): {:?}", identity.email, identity.uid, e);
                auth_session.clear().await;
                return Err(e.into());
            }
        };

        admin_repo.touch_last_login(&admin.uid).await?;
        auth_session.set_admin_uid(&admin.uid).await?;

        tracing::info!("{} signed in as {}", admin.display_name, admin.role.label());

        Ok(admin)
    }

    /// Ends the current session.
    pub async fn logout(session: &Session) {
        AuthSession::new(session).clear().await;
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use test_utils::{builder::TestBuilder, factory};

    use super::*;
    use crate::server::service::identity::Identity;

    /// Accepts one password for every email, using the email as the uid.
    struct StubProvider;

    #[async_trait]
    impl IdentityProvider for StubProvider {
        async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
            if password != "betul" {
                return Err(AuthError::WrongPassword);
            }
            Ok(Identity {
                uid: email.to_string(),
                email: email.to_string(),
            })
        }
    }

    /// Expected: Ok(AdminUser) with session uid and last_login set
    #[tokio::test]
    async fn signs_in_active_admin() -> Result<(), AppError> {
        let mut test = TestBuilder::new()
            .with_table(entity::prelude::AdminUser)
            .build()
            .await
            .unwrap();
        let (db, session) = test.db_and_session().await.unwrap();
        factory::admin_user::AdminUserFactory::new(db)
            .uid("imam@masjid.test")
            .build()
            .await?;

        let admin = AuthService::new(db, &StubProvider)
            .login(session, " imam@masjid.test ", "betul")
            .await?;

        assert_eq!(admin.uid, "imam@masjid.test");
        assert_eq!(
            AuthSession::new(session).admin_uid().await?,
            Some("imam@masjid.test".to_string())
        );
        let stored = AdminUserRepository::new(db)
            .find_by_uid("imam@masjid.test")
            .await?
            .unwrap();
        assert!(stored.last_login.is_some());

        Ok(())
    }

    /// Tests the session id issued before sign-in is replaced.
    ///
    /// Expected: a different, saved session id after login
    #[tokio::test]
    async fn rotates_session_id_on_sign_in() -> Result<(), AppError> {
        let mut test = TestBuilder::new()
            .with_table(entity::prelude::AdminUser)
            .build()
            .await
            .unwrap();
        let (db, session) = test.db_and_session().await.unwrap();
        factory::admin_user::AdminUserFactory::new(db)
            .uid("imam@masjid.test")
            .build()
            .await?;

        session.insert("visited", true).await?;
        session.save().await?;
        let before = session.id();
        assert!(before.is_some());

        AuthService::new(db, &StubProvider)
            .login(session, "imam@masjid.test", "betul")
            .await?;
        session.save().await?;

        let after = session.id();
        assert!(after.is_some());
        assert_ne!(before, after);
        assert!(AuthSession::new(session).is_authenticated().await?);

        Ok(())
    }

    /// Expected: Err(AuthError::WrongPassword) passed through from the provider
    #[tokio::test]
    async fn passes_through_provider_errors() -> Result<(), AppError> {
        let mut test = TestBuilder::new()
            .with_table(entity::prelude::AdminUser)
            .build()
            .await
            .unwrap();
        let (db, session) = test.db_and_session().await.unwrap();

        let result = AuthService::new(db, &StubProvider)
            .login(session, "imam@masjid.test", "salah")
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::WrongPassword))
        ));

        Ok(())
    }

    /// Tests every profile denial leaves the session empty.
    ///
    /// Expected: ProfileNotFound, AccountInactive and RoleNotPermitted, each with
    /// no uid in session
    #[tokio::test]
    async fn denies_and_clears_session() -> Result<(), AppError> {
        let mut test = TestBuilder::new()
            .with_table(entity::prelude::AdminUser)
            .build()
            .await
            .unwrap();
        let (db, session) = test.db_and_session().await.unwrap();
        factory::admin_user::AdminUserFactory::new(db)
            .uid("inactive@masjid.test")
            .active(false)
            .build()
            .await?;
        factory::admin_user::AdminUserFactory::new(db)
            .uid("staff@masjid.test")
            .role("staff")
            .build()
            .await?;

        let cases = [
            ("missing@masjid.test", AuthError::ProfileNotFound),
            ("inactive@masjid.test", AuthError::AccountInactive),
            ("staff@masjid.test", AuthError::RoleNotPermitted),
        ];

        let service = AuthService::new(db, &StubProvider);
        for (email, expected) in cases {
            let result = service.login(session, email, "betul").await;

            match result {
                Err(AppError::AuthErr(e)) => assert_eq!(e, expected),
                other => panic!("Expected {:?}, got {:?}", expected, other.map(|a| a.uid)),
            }
            assert!(!AuthSession::new(session).is_authenticated().await?);
        }

        Ok(())
    }
}
