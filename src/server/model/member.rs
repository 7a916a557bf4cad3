//! Member domain model and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::member::{Gender, MemberDto, MemberFormDto, MemberStatus},
    server::{
        error::AppError,
        model::{non_blank, parse_stored},
    },
};

/// Community member record.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub full_name: String,
    /// Stored as entered, `123456-12-1234`.
    pub ic_number: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub address: String,
    pub postcode: String,
    pub city: String,
    pub state: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    pub status: MemberStatus,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Converts the member domain model to a DTO for API responses.
    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            full_name: self.full_name,
            ic_number: self.ic_number,
            phone_number: self.phone_number,
            email: self.email,
            address: self.address,
            postcode: self.postcode,
            city: self.city,
            state: self.state,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            status: self.status,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a member domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Member)` - Converted member
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored gender or status is unknown
    pub fn from_entity(entity: entity::member::Model) -> Result<Self, AppError> {
        Ok(Self {
            gender: parse_stored("member", "gender", &entity.gender)?,
            status: parse_stored("member", "status", &entity.status)?,
            id: entity.id,
            full_name: entity.full_name,
            ic_number: entity.ic_number,
            phone_number: entity.phone_number,
            email: entity.email,
            address: entity.address,
            postcode: entity.postcode,
            city: entity.city,
            state: entity.state,
            date_of_birth: entity.date_of_birth,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Fields written when creating or editing a member.
///
/// Built from a form that has already passed validation; text is trimmed and a
/// blank email becomes `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberParam {
    pub full_name: String,
    pub ic_number: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub address: String,
    pub postcode: String,
    pub city: String,
    pub state: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    pub status: MemberStatus,
    pub notes: String,
}

impl MemberParam {
    /// Validates the submitted form and converts it to write parameters.
    ///
    /// # Returns
    /// - `Ok(MemberParam)` - Trimmed parameters
    /// - `Err(AppError::ValidationErr)` - One or more fields are invalid
    pub fn from_dto(dto: MemberFormDto) -> Result<Self, AppError> {
        dto.validate()?;

        Ok(Self {
            full_name: dto.full_name.trim().to_string(),
            ic_number: dto.ic_number.trim().to_string(),
            phone_number: dto.phone_number.trim().to_string(),
            email: non_blank(dto.email),
            address: dto.address.trim().to_string(),
            postcode: dto.postcode.trim().to_string(),
            city: dto.city.trim().to_string(),
            state: dto.state,
            date_of_birth: dto.date_of_birth,
            gender: dto.gender,
            status: dto.status,
            notes: dto.notes.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_form_and_drops_blank_email() {
        let dto = MemberFormDto {
            full_name: "  Siti Aminah ".to_string(),
            ic_number: "850505-10-1234".to_string(),
            phone_number: "013-4567890".to_string(),
            email: Some("   ".to_string()),
            address: "Lot 5".to_string(),
            postcode: "43000".to_string(),
            city: "Kajang".to_string(),
            state: "Selangor".to_string(),
            gender: Gender::Female,
            ..MemberFormDto::default()
        };

        let param = MemberParam::from_dto(dto).unwrap();

        assert_eq!(param.full_name, "Siti Aminah");
        assert_eq!(param.email, None);
        assert_eq!(param.gender, Gender::Female);
    }

    #[test]
    fn rejects_invalid_form() {
        let result = MemberParam::from_dto(MemberFormDto::default());

        assert!(matches!(result, Err(AppError::ValidationErr(_))));
    }
}
