//! Admin profile repository.
//!
//! Profiles are keyed by the identity provider's uid and are only ever created by
//! the legacy import or by hand; the application itself only reads them and stamps
//! `last_login`.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Condition, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
};

use crate::server::{
    data::document::DocumentStore,
    error::{storage::StorageError, AppError},
    model::admin_user::{AdminUser, UpsertAdminUserParam},
};

/// Repository providing database operations for admin profiles.
pub struct AdminUserRepository<'a> {
    db: &'a DatabaseConnection,
    store: DocumentStore<'a>,
}

impl<'a> AdminUserRepository<'a> {
    /// Creates a new AdminUserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            store: DocumentStore::new(db),
        }
    }

    /// Finds an admin profile by identity provider uid.
    ///
    /// # Returns
    /// - `Ok(Some(AdminUser))` - Profile found
    /// - `Ok(None)` - No profile for that uid
    /// - `Err(AppError::StorageErr)` - Query failed
    /// - `Err(AppError::InternalErr)` - Stored role is unknown
    pub async fn find_by_uid(&self, uid: &str) -> Result<Option<AdminUser>, AppError> {
        self.store
            .get_by_id::<entity::prelude::AdminUser, _>(uid.to_string())
            .await?
            .map(AdminUser::from_entity)
            .transpose()
    }

    /// Counts profiles that are allowed to be active.
    pub async fn count_active(&self) -> Result<u64, StorageError> {
        self.store
            .count::<entity::prelude::AdminUser>(
                Condition::all().add(entity::admin_user::Column::Active.eq(true)),
            )
            .await
    }

    /// Records a successful sign-in.
    ///
    /// # Returns
    /// - `Ok(())` - Timestamp stored, or no profile with that uid
    /// - `Err(StorageError)` - Update failed
    pub async fn touch_last_login(&self, uid: &str) -> Result<(), StorageError> {
        self.store
            .update::<entity::prelude::AdminUser, _>(entity::admin_user::ActiveModel {
                uid: ActiveValue::Unchanged(uid.to_string()),
                last_login: ActiveValue::Set(Some(Utc::now())),
                ..Default::default()
            })
            .await?;

        Ok(())
    }

    /// Inserts a profile or replaces the email, name, role and active flag of an
    /// existing one with the same uid.
    ///
    /// # Returns
    /// - `Ok(AdminUser)` - Created or updated profile
    /// - `Err(AppError::StorageErr)` - Upsert failed
    pub async fn upsert(&self, param: UpsertAdminUserParam) -> Result<AdminUser, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::AdminUser::insert(entity::admin_user::ActiveModel {
            uid: ActiveValue::Set(param.uid),
            email: ActiveValue::Set(param.email),
            display_name: ActiveValue::Set(param.display_name),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            active: ActiveValue::Set(param.active),
            last_login: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::admin_user::Column::Uid)
                .update_columns([
                    entity::admin_user::Column::Email,
                    entity::admin_user::Column::DisplayName,
                    entity::admin_user::Column::Role,
                    entity::admin_user::Column::Active,
                    entity::admin_user::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
        .map_err(|e| StorageError::new("admin_user", "upsert", e))?;

        AdminUser::from_entity(entity)
    }
}
