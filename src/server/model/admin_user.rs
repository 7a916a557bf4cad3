//! Admin profile domain model.
//!
//! The identity provider only proves who someone is. Whether they may use the admin
//! area is decided by the profile stored under their provider uid.

use chrono::{DateTime, Utc};

use crate::{
    model::auth::{AdminRole, AdminUserDto},
    server::{error::AppError, model::parse_stored},
};

/// Admin profile keyed by identity provider uid.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminUser {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub role: AdminRole,
    /// Inactive profiles are refused at sign-in and on every guarded request.
    pub active: bool,
    pub last_login: Option<DateTime<Utc>>,
}

impl AdminUser {
    /// Whether this profile may enter the admin area.
    pub fn can_sign_in(&self) -> bool {
        self.active && self.role.can_access_admin()
    }

    /// Converts the admin profile to a DTO for API responses.
    pub fn into_dto(self) -> AdminUserDto {
        AdminUserDto {
            uid: self.uid,
            email: self.email,
            display_name: self.display_name,
            role: self.role,
        }
    }

    /// Converts an entity model to an admin profile at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(AdminUser)` - Converted profile
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored role is unknown
    pub fn from_entity(entity: entity::admin_user::Model) -> Result<Self, AppError> {
        Ok(Self {
            role: parse_stored("admin_user", "role", &entity.role)?,
            uid: entity.uid,
            email: entity.email,
            display_name: entity.display_name,
            active: entity.active,
            last_login: entity.last_login,
        })
    }
}

/// Parameters for creating or replacing an admin profile.
#[derive(Debug, Clone)]
pub struct UpsertAdminUserParam {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub role: AdminRole,
    pub active: bool,
}
