use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "donation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub donor_name: Option<String>,
    /// Opaque reference to a member row, never joined.
    pub member_id: Option<i32>,
    /// Amount in sen (1/100 ringgit).
    pub amount_sen: i64,
    pub category: String,
    pub payment_method: String,
    /// Transaction date, independent of `created_at`.
    pub date: Date,
    pub reference_number: Option<String>,
    pub notes: Option<String>,
    pub created_by: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
