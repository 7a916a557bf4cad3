//! Member repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Condition, Order},
    ActiveValue, ColumnTrait, DatabaseConnection,
};

use crate::{
    model::member::MemberStatus,
    server::{
        data::document::{DocumentStore, ListQuery},
        error::{storage::StorageError, AppError},
        model::member::{Member, MemberParam},
    },
};

type MemberEntity = entity::prelude::Member;

/// Repository providing database operations for members.
pub struct MemberRepository<'a> {
    store: DocumentStore<'a>,
}

impl<'a> MemberRepository<'a> {
    /// Creates a new MemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            store: DocumentStore::new(db),
        }
    }

    /// Inserts a member, stamping both timestamps.
    ///
    /// # Returns
    /// - `Ok(Member)` - Created member with its id
    /// - `Err(AppError)` - Insert failed
    pub async fn add(&self, param: MemberParam) -> Result<Member, AppError> {
        self.add_at(param, None).await
    }

    /// Inserts a member with an explicit creation time, used when importing
    /// records that already have one.
    pub async fn add_at(
        &self,
        param: MemberParam,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Member, AppError> {
        let mut active = active_model(param);
        if let Some(created_at) = created_at {
            active.created_at = ActiveValue::Set(created_at);
            active.updated_at = ActiveValue::Set(created_at);
        }

        let entity = self.store.add::<MemberEntity, _>(active).await?;

        Member::from_entity(entity)
    }

    /// Replaces the editable fields of a member and stamps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Updated member
    /// - `Ok(None)` - No member with that id
    /// - `Err(AppError)` - Update failed
    pub async fn update(&self, id: i32, param: MemberParam) -> Result<Option<Member>, AppError> {
        let mut active = active_model(param);
        active.id = ActiveValue::Unchanged(id);

        self.store
            .update::<MemberEntity, _>(active)
            .await?
            .map(Member::from_entity)
            .transpose()
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Member>, AppError> {
        self.store
            .get_by_id::<MemberEntity, _>(id)
            .await?
            .map(Member::from_entity)
            .transpose()
    }

    /// Returns every member, newest first.
    pub async fn get_all(&self) -> Result<Vec<Member>, AppError> {
        self.store
            .list::<MemberEntity>(
                ListQuery::new().order_by(entity::member::Column::CreatedAt, Order::Desc),
            )
            .await?
            .into_iter()
            .map(Member::from_entity)
            .collect()
    }

    /// Finds members whose name contains `term`, ignoring case.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<Member>, AppError> {
        self.store
            .search_by_substring::<MemberEntity>(entity::member::Column::FullName, term)
            .await?
            .into_iter()
            .map(Member::from_entity)
            .collect()
    }

    /// Whether a member with the same IC number and name exists, also matching the
    /// creation time when one is given.
    ///
    /// IC numbers are not unique, so the IC alone does not identify a member.
    pub async fn exists_matching(
        &self,
        ic_number: &str,
        full_name: &str,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<bool, StorageError> {
        let mut condition = Condition::all()
            .add(entity::member::Column::IcNumber.eq(ic_number))
            .add(entity::member::Column::FullName.eq(full_name));
        if let Some(created_at) = created_at {
            condition = condition.add(entity::member::Column::CreatedAt.eq(created_at));
        }

        let count = self.store.count::<MemberEntity>(condition).await?;

        Ok(count > 0)
    }

    /// Counts members, optionally only active ones.
    pub async fn count(&self, active_only: bool) -> Result<u64, StorageError> {
        let mut condition = Condition::all();
        if active_only {
            condition = condition
                .add(entity::member::Column::Status.eq(MemberStatus::Active.as_str()));
        }

        self.store.count::<MemberEntity>(condition).await
    }

    /// Deletes a member.
    ///
    /// # Returns
    /// - `Ok(true)` - Member deleted
    /// - `Ok(false)` - No member with that id
    /// - `Err(StorageError)` - Delete failed
    pub async fn delete(&self, id: i32) -> Result<bool, StorageError> {
        self.store.delete::<MemberEntity, _>(id).await
    }
}

fn active_model(param: MemberParam) -> entity::member::ActiveModel {
    entity::member::ActiveModel {
        full_name: ActiveValue::Set(param.full_name),
        ic_number: ActiveValue::Set(param.ic_number),
        phone_number: ActiveValue::Set(param.phone_number),
        email: ActiveValue::Set(param.email),
        address: ActiveValue::Set(param.address),
        postcode: ActiveValue::Set(param.postcode),
        city: ActiveValue::Set(param.city),
        state: ActiveValue::Set(param.state),
        date_of_birth: ActiveValue::Set(param.date_of_birth),
        gender: ActiveValue::Set(param.gender.as_str().to_string()),
        status: ActiveValue::Set(param.status.as_str().to_string()),
        notes: ActiveValue::Set(param.notes),
        ..Default::default()
    }
}
