//! Generic document access over SeaORM entities.
//!
//! Every table the application owns is a `Collection`. `DocumentStore` offers the same
//! small set of operations for all of them: get by id, list with constraints, add and
//! update with timestamp stamping, delete, count, cursor pagination and a naive
//! substring search. Each failure is reported as a `StorageError` naming the collection
//! and the operation.
//!
//! `search_by_substring` loads the whole collection and filters in memory. That is
//! fine for a community sized dataset and deliberately not index backed.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Condition, ConditionExpression, Order},
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, ModelTrait, PaginatorTrait, PrimaryKeyTrait, QueryFilter, QueryOrder,
    QuerySelect, Value,
};

use crate::server::error::storage::StorageError;

/// A table addressable through `DocumentStore`.
pub trait Collection: EntityTrait {
    /// Collection name used in errors and logs.
    const NAME: &'static str;

    fn created_at_column() -> Self::Column;

    fn updated_at_column() -> Self::Column;
}

/// A collection with an integer id that supports cursor pagination.
pub trait CursorCollection: Collection {
    fn id_column() -> Self::Column;

    /// Position of `model` in `(created_at, id)` descending order.
    fn cursor_of(model: &Self::Model) -> Cursor;
}

/// Position after which the next page starts.
///
/// Serialized as an opaque `<nanos>_<id>` token for clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub created_at: DateTime<Utc>,
    pub id: i32,
}

impl Cursor {
    pub fn encode(&self) -> String {
        let nanos = self
            .created_at
            .timestamp_nanos_opt()
            .unwrap_or_else(|| self.created_at.timestamp_micros().saturating_mul(1_000));
        format!("{}_{}", nanos, self.id)
    }

    /// Parses a token produced by `encode`, `None` when malformed.
    pub fn decode(token: &str) -> Option<Self> {
        let (nanos, id) = token.split_once('_')?;
        Some(Self {
            created_at: DateTime::from_timestamp_nanos(nanos.parse().ok()?),
            id: id.parse().ok()?,
        })
    }
}

/// One page of a cursor paginated listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Cursor of the last item, present when more items follow.
    pub next_cursor: Option<Cursor>,
    pub has_more: bool,
}

/// Constraints for `DocumentStore::list`.
pub struct ListQuery<E: EntityTrait> {
    condition: Condition,
    order: Vec<(E::Column, Order)>,
    limit: Option<u64>,
}

impl<E: EntityTrait> Default for ListQuery<E> {
    fn default() -> Self {
        Self {
            condition: Condition::all(),
            order: Vec::new(),
            limit: None,
        }
    }
}

impl<E: EntityTrait> ListQuery<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a condition; all conditions must hold.
    pub fn filter(mut self, expr: impl Into<ConditionExpression>) -> Self {
        self.condition = self.condition.add(expr);
        self
    }

    pub fn order_by(mut self, column: E::Column, order: Order) -> Self {
        self.order.push((column, order));
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

fn failed<E: Collection>(operation: &'static str) -> impl FnOnce(DbErr) -> StorageError {
    move |source| StorageError::new(E::NAME, operation, source)
}

/// Generic operations shared by every repository.
pub struct DocumentStore<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentStore<'a> {
    /// Creates a new DocumentStore instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches one document by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Document found
    /// - `Ok(None)` - No document with that id
    /// - `Err(StorageError)` - Query failed
    pub async fn get_by_id<E, K>(&self, id: K) -> Result<Option<E::Model>, StorageError>
    where
        E: Collection,
        K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        E::find_by_id(id)
            .one(self.db)
            .await
            .map_err(failed::<E>("get_by_id"))
    }

    /// Lists documents matching `query`.
    ///
    /// # Arguments
    /// - `query` - Conditions, ordering and optional limit
    ///
    /// # Returns
    /// - `Ok(Vec<model>)` - Matching documents in the requested order
    /// - `Err(StorageError)` - Query failed
    pub async fn list<E>(&self, query: ListQuery<E>) -> Result<Vec<E::Model>, StorageError>
    where
        E: Collection,
    {
        let mut select = E::find().filter(query.condition);
        for (column, order) in query.order {
            select = select.order_by(column, order);
        }
        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }

        select.all(self.db).await.map_err(failed::<E>("list"))
    }

    /// Inserts a document, stamping `created_at` and `updated_at` with the current
    /// time unless the caller already set them.
    ///
    /// # Returns
    /// - `Ok(model)` - Inserted document with its generated id
    /// - `Err(StorageError)` - Insert failed
    pub async fn add<E, A>(&self, mut active: A) -> Result<E::Model, StorageError>
    where
        E: Collection,
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        let now: Value = Utc::now().into();
        if active.is_not_set(E::created_at_column()) {
            active.set(E::created_at_column(), now.clone());
        }
        if active.is_not_set(E::updated_at_column()) {
            active.set(E::updated_at_column(), now);
        }

        active.insert(self.db).await.map_err(failed::<E>("add"))
    }

    /// Applies the fields set on `active` to an existing document and stamps
    /// `updated_at`. `created_at` is never touched.
    ///
    /// The primary key must be present on `active` as an unchanged value.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Updated document
    /// - `Ok(None)` - No document with that id
    /// - `Err(StorageError)` - Update failed
    pub async fn update<E, A>(&self, mut active: A) -> Result<Option<E::Model>, StorageError>
    where
        E: Collection,
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        active.set(E::updated_at_column(), Utc::now().into());
        active.not_set(E::created_at_column());

        match active.update(self.db).await {
            Ok(model) => Ok(Some(model)),
            Err(DbErr::RecordNotFound(_)) | Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(StorageError::new(E::NAME, "update", e)),
        }
    }

    /// Deletes a document by primary key.
    ///
    /// # Returns
    /// - `Ok(true)` - Document deleted
    /// - `Ok(false)` - No document with that id
    /// - `Err(StorageError)` - Delete failed
    pub async fn delete<E, K>(&self, id: K) -> Result<bool, StorageError>
    where
        E: Collection,
        K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let result = E::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(failed::<E>("delete"))?;

        Ok(result.rows_affected > 0)
    }

    /// Counts documents matching `condition`.
    pub async fn count<E>(&self, condition: Condition) -> Result<u64, StorageError>
    where
        E: Collection,
        E::Model: Sync,
    {
        E::find()
            .filter(condition)
            .count(self.db)
            .await
            .map_err(failed::<E>("count"))
    }

    /// Returns up to `page_size` documents matching `condition`, newest first, starting
    /// after `cursor`.
    ///
    /// Fetches one extra row to decide `has_more` without a second query.
    ///
    /// # Returns
    /// - `Ok(Page)` - Items plus continuation cursor
    /// - `Err(StorageError)` - Query failed
    pub async fn paginate<E>(
        &self,
        page_size: u64,
        cursor: Option<Cursor>,
        condition: Condition,
    ) -> Result<Page<E::Model>, StorageError>
    where
        E: CursorCollection,
    {
        let mut condition = condition;
        if let Some(cursor) = cursor {
            condition = condition.add(
                Condition::any()
                    .add(E::created_at_column().lt(cursor.created_at))
                    .add(
                        Condition::all()
                            .add(E::created_at_column().eq(cursor.created_at))
                            .add(E::id_column().lt(cursor.id)),
                    ),
            );
        }

        let mut items = E::find()
            .filter(condition)
            .order_by(E::created_at_column(), Order::Desc)
            .order_by(E::id_column(), Order::Desc)
            .limit(page_size + 1)
            .all(self.db)
            .await
            .map_err(failed::<E>("paginate"))?;

        let has_more = items.len() as u64 > page_size;
        items.truncate(page_size as usize);
        let next_cursor = if has_more {
            items.last().map(E::cursor_of)
        } else {
            None
        };

        Ok(Page {
            items,
            next_cursor,
            has_more,
        })
    }

    /// Returns documents whose `field` contains `term`, ignoring case.
    ///
    /// Loads the whole collection; non-text columns never match.
    pub async fn search_by_substring<E>(
        &self,
        field: E::Column,
        term: &str,
    ) -> Result<Vec<E::Model>, StorageError>
    where
        E: Collection,
    {
        let needle = term.to_lowercase();
        let all = E::find()
            .order_by(E::created_at_column(), Order::Desc)
            .all(self.db)
            .await
            .map_err(failed::<E>("search_by_substring"))?;

        Ok(all
            .into_iter()
            .filter(|model| match model.get(field) {
                Value::String(Some(value)) => value.to_lowercase().contains(&needle),
                _ => false,
            })
            .collect())
    }
}

impl Collection for entity::prelude::AdminUser {
    const NAME: &'static str = "admin_user";

    fn created_at_column() -> Self::Column {
        entity::admin_user::Column::CreatedAt
    }

    fn updated_at_column() -> Self::Column {
        entity::admin_user::Column::UpdatedAt
    }
}

impl Collection for entity::prelude::Member {
    const NAME: &'static str = "member";

    fn created_at_column() -> Self::Column {
        entity::member::Column::CreatedAt
    }

    fn updated_at_column() -> Self::Column {
        entity::member::Column::UpdatedAt
    }
}

impl CursorCollection for entity::prelude::Member {
    fn id_column() -> Self::Column {
        entity::member::Column::Id
    }

    fn cursor_of(model: &Self::Model) -> Cursor {
        Cursor {
            created_at: model.created_at,
            id: model.id,
        }
    }
}

impl Collection for entity::prelude::Donation {
    const NAME: &'static str = "donation";

    fn created_at_column() -> Self::Column {
        entity::donation::Column::CreatedAt
    }

    fn updated_at_column() -> Self::Column {
        entity::donation::Column::UpdatedAt
    }
}

impl Collection for entity::prelude::Announcement {
    const NAME: &'static str = "announcement";

    fn created_at_column() -> Self::Column {
        entity::announcement::Column::CreatedAt
    }

    fn updated_at_column() -> Self::Column {
        entity::announcement::Column::UpdatedAt
    }
}

impl CursorCollection for entity::prelude::Announcement {
    fn id_column() -> Self::Column {
        entity::announcement::Column::Id
    }

    fn cursor_of(model: &Self::Model) -> Cursor {
        Cursor {
            created_at: model.created_at,
            id: model.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_round_trips_through_token() {
        let cursor = Cursor {
            created_at: DateTime::from_timestamp_nanos(1_760_000_000_123_456_789),
            id: 42,
        };

        let token = cursor.encode();

        assert_eq!(token, "1760000000123456789_42");
        assert_eq!(Cursor::decode(&token), Some(cursor));
    }

    #[test]
    fn rejects_malformed_cursor_tokens() {
        assert_eq!(Cursor::decode(""), None);
        assert_eq!(Cursor::decode("abc_1"), None);
        assert_eq!(Cursor::decode("123"), None);
        assert_eq!(Cursor::decode("123_x"), None);
    }
}
