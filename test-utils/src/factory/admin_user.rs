//! Admin user factory for creating test admin profiles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for admin profiles.
///
/// # Example
///
/// ```rust,ignore
/// let admin = AdminUserFactory::new(&db)
///     .uid("uid-123")
///     .role("super_admin")
///     .build()
///     .await?;
/// ```
pub struct AdminUserFactory<'a> {
    db: &'a DatabaseConnection,
    uid: String,
    email: String,
    display_name: String,
    role: String,
    active: bool,
}

impl<'a> AdminUserFactory<'a> {
    /// Creates a new AdminUserFactory with default values.
    ///
    /// Defaults:
    /// - uid: `"uid-{id}"`
    /// - email: `"admin{id}@masjid.test"`
    /// - display_name: `"Admin {id}"`
    /// - role: `"admin"`
    /// - active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the row
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            uid: format!("uid-{}", id),
            email: format!("admin{}@masjid.test", id),
            display_name: format!("Admin {}", id),
            role: "admin".to_string(),
            active: true,
        }
    }

    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = uid.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the role (`super_admin`, `admin` or `staff`).
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Inserts the admin profile.
    ///
    /// # Returns
    /// - `Ok(entity::admin_user::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::admin_user::Model, DbErr> {
        let now = Utc::now();
        entity::admin_user::ActiveModel {
            uid: ActiveValue::Set(self.uid),
            email: ActiveValue::Set(self.email),
            display_name: ActiveValue::Set(self.display_name),
            role: ActiveValue::Set(self.role),
            active: ActiveValue::Set(self.active),
            last_login: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active `admin` profile with default values.
pub async fn create_admin_user(
    db: &DatabaseConnection,
) -> Result<entity::admin_user::Model, DbErr> {
    AdminUserFactory::new(db).build().await
}
