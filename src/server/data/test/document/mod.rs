use crate::server::{
    data::document::{Cursor, DocumentStore, ListQuery},
    error::AppError,
};
use chrono::Utc;
use entity::prelude::{Announcement, Member};
use sea_orm::{
    sea_query::{Condition, Order},
    ActiveValue, ColumnTrait,
};
use test_utils::{builder::TestBuilder, factory};

mod add;
mod list;
mod paginate;
mod search_by_substring;
mod update;
