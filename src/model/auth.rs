use serde::{Deserialize, Serialize};

use crate::model::string_enum;

string_enum! {
    AdminRole as "admin role" {
        SuperAdmin => "super_admin", "Super Admin";
        Admin => "admin", "Pentadbir";
        Staff => "staff", "Kakitangan";
    }
}

impl AdminRole {
    /// Roles allowed to sign in to the admin area.
    pub fn can_access_admin(&self) -> bool {
        matches!(self, AdminRole::SuperAdmin | AdminRole::Admin)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// The signed-in admin as seen by the client.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AdminUserDto {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub role: AdminRole,
}
