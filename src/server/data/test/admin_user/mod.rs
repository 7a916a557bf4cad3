use crate::{
    model::auth::AdminRole,
    server::{
        data::admin_user::AdminUserRepository, error::AppError,
        model::admin_user::UpsertAdminUserParam,
    },
};
use entity::prelude::AdminUser;
use test_utils::{builder::TestBuilder, factory};

mod count_active;
mod find_by_uid;
mod touch_last_login;
mod upsert;
