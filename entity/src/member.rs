use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    /// Stored in `123456-12-1234` form.
    pub ic_number: String,
    pub phone_number: String,
    pub email: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub postcode: String,
    pub city: String,
    pub state: String,
    pub date_of_birth: Option<Date>,
    /// `male` or `female`.
    pub gender: String,
    /// `active` or `inactive`.
    pub status: String,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
