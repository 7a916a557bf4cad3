use chrono::{DateTime, FixedOffset};
use sea_orm::DatabaseConnection;

use crate::{
    model::member::{MemberFormDto, MemberListQuery},
    server::{
        data::member::MemberRepository,
        error::AppError,
        listing::{
            export::{export_csv, member_columns, member_export_filename, CsvExport},
            record::MemberFilter,
            ListingQuery,
        },
        model::member::{Member, MemberParam},
    },
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads every member and applies the search and filters in memory.
    ///
    /// # Returns
    /// - `Ok(Vec<Member>)` - Matching members, newest first
    /// - `Err(AppError)` - Storage failure
    pub async fn list(
        &self,
        query: MemberListQuery,
        now: DateTime<FixedOffset>,
    ) -> Result<Vec<Member>, AppError> {
        let members = MemberRepository::new(self.db).get_all().await?;

        Ok(ListingQuery::<MemberFilter>::from(query).apply(members, now))
    }

    /// Members whose name contains `term`, for the donor picker.
    pub async fn lookup(&self, term: &str) -> Result<Vec<Member>, AppError> {
        if term.trim().is_empty() {
            return Ok(Vec::new());
        }

        MemberRepository::new(self.db).search_by_name(term.trim()).await
    }

    pub async fn get(&self, id: i32) -> Result<Member, AppError> {
        MemberRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn create(&self, dto: MemberFormDto) -> Result<Member, AppError> {
        let param = MemberParam::from_dto(dto)?;

        MemberRepository::new(self.db).add(param).await
    }

    pub async fn update(&self, id: i32, dto: MemberFormDto) -> Result<Member, AppError> {
        let param = MemberParam::from_dto(dto)?;

        MemberRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MemberRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }

    /// Exports the filtered member list in the order it is displayed.
    pub async fn export(
        &self,
        query: MemberListQuery,
        now: DateTime<FixedOffset>,
    ) -> Result<CsvExport, AppError> {
        let members = self.list(query, now).await?;

        Ok(CsvExport {
            filename: member_export_filename(now.date_naive()),
            bytes: export_csv(&members, &member_columns())?,
        })
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Ahli tidak dijumpai".to_string())
}
