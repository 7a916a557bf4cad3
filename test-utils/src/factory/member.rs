//! Member factory for creating test member rows.

use crate::factory::helpers::{ic_number_for, next_id};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for members.
///
/// # Example
///
/// ```rust,ignore
/// let member = MemberFactory::new(&db)
///     .full_name("Ahmad bin Ali")
///     .status("inactive")
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    full_name: String,
    ic_number: String,
    phone_number: String,
    email: Option<String>,
    address: String,
    city: String,
    state: String,
    gender: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - full_name: `"Ahli {id}"`
    /// - ic_number: `"900101-14-{id}"`
    /// - phone_number: `"012-3456789"`
    /// - email: `None`
    /// - address: `"No. {id}, Jalan Masjid"`, city `"Shah Alam"`, state `"Selangor"`
    /// - gender: `"male"`, status: `"active"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            full_name: format!("Ahli {}", id),
            ic_number: ic_number_for(id),
            phone_number: "012-3456789".to_string(),
            email: None,
            address: format!("No. {}, Jalan Masjid", id),
            city: "Shah Alam".to_string(),
            state: "Selangor".to_string(),
            gender: "male".to_string(),
            status: "active".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn ic_number(mut self, ic_number: impl Into<String>) -> Self {
        self.ic_number = ic_number.into();
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Sets the status (`active` or `inactive`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Overrides the creation timestamp, used to control listing order.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Inserts the member.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            full_name: ActiveValue::Set(self.full_name),
            ic_number: ActiveValue::Set(self.ic_number),
            phone_number: ActiveValue::Set(self.phone_number),
            email: ActiveValue::Set(self.email),
            address: ActiveValue::Set(self.address),
            postcode: ActiveValue::Set("40000".to_string()),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            date_of_birth: ActiveValue::Set(None),
            gender: ActiveValue::Set(self.gender),
            status: ActiveValue::Set(self.status),
            notes: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active member with default values.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_members_with_unique_ic_numbers() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Member).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_member(db).await?;
        let second = create_member(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.ic_number, second.ic_number);
        assert_eq!(first.status, "active");

        Ok(())
    }
}
