//! One-time import of documents exported from the previous document store.
//!
//! The export holds documents in both the unified shape and the older, narrower
//! shapes. Older fields are converted on the way in:
//!
//! - announcement `status: draft|published` becomes `published`, with category
//!   `general` and priority `medium`
//! - donation `type: general|zakat|sadaqah` becomes category `derma|zakat|sedekah`
//! - member `membershipStatus` becomes `status` and `name` becomes `full_name`
//!
//! Rows already present are skipped, so the import can run on every start.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::str::FromStr;

use crate::{
    model::{
        announcement::{AnnouncementCategory, Priority},
        auth::AdminRole,
        donation::{DonationCategory, PaymentMethod, MAX_DONATION_SEN},
        member::{Gender, MemberStatus},
    },
    server::{
        data::{
            admin_user::AdminUserRepository, announcement::AnnouncementRepository,
            donation::DonationRepository, member::MemberRepository,
        },
        error::{internal::InternalError, AppError},
        model::{
            admin_user::UpsertAdminUserParam,
            announcement::{AnnouncementAuthor, AnnouncementParam},
            donation::{CreateDonationParam, ANONYMOUS_DONOR},
            member::MemberParam,
            non_blank,
        },
    },
};

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct LegacyExport {
    admin_users: Vec<LegacyAdminUser>,
    members: Vec<LegacyMember>,
    donations: Vec<LegacyDonation>,
    announcements: Vec<LegacyAnnouncement>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyAdminUser {
    uid: String,
    email: String,
    display_name: String,
    role: String,
    #[serde(default = "default_true")]
    active: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyMember {
    full_name: Option<String>,
    name: Option<String>,
    ic_number: String,
    phone_number: String,
    email: Option<String>,
    address: String,
    #[serde(default)]
    postcode: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    state: String,
    date_of_birth: Option<DateTime<Utc>>,
    gender: String,
    status: Option<String>,
    membership_status: Option<String>,
    #[serde(default)]
    notes: String,
    created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyDonation {
    donor_name: Option<String>,
    /// Amount in ringgit.
    amount: f64,
    category: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    payment_method: String,
    date: DateTime<Utc>,
    reference_number: Option<String>,
    notes: Option<String>,
    created_by: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyAnnouncement {
    title: String,
    content: String,
    category: Option<String>,
    priority: Option<String>,
    published: Option<bool>,
    status: Option<String>,
    #[serde(default)]
    author: String,
    #[serde(default)]
    author_id: String,
    created_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

/// Rows written by an import, per collection.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub admin_users: usize,
    pub members: usize,
    pub donations: usize,
    pub announcements: usize,
    /// Rows already present or with values that could not be converted.
    pub skipped: usize,
}

pub struct LegacyImportService<'a> {
    db: &'a DatabaseConnection,
    utc_offset: FixedOffset,
}

impl<'a> LegacyImportService<'a> {
    /// Creates a new LegacyImportService.
    ///
    /// # Arguments
    /// - `db` - Database connection to import into
    /// - `utc_offset` - Mosque's local offset, used to turn donation timestamps
    ///   into transaction dates
    pub fn new(db: &'a DatabaseConnection, utc_offset: FixedOffset) -> Self {
        Self { db, utc_offset }
    }

    /// Imports a JSON export.
    ///
    /// # Returns
    /// - `Ok(ImportReport)` - Counts of written and skipped rows
    /// - `Err(AppError::InternalErr)` - File is not a valid export
    /// - `Err(AppError::StorageErr)` - A write failed; rows before it stay written
    pub async fn import_json(&self, raw: &str) -> Result<ImportReport, AppError> {
        let export: LegacyExport =
            serde_json::from_str(raw).map_err(|e| InternalError::LegacyImport {
                path: "<json>".to_string(),
                reason: e.to_string(),
            })?;

        let mut report = ImportReport::default();

        let admin_repo = AdminUserRepository::new(self.db);
        for doc in export.admin_users {
            match convert_admin_user(doc) {
                Ok(param) => {
                    admin_repo.upsert(param).await?;
                    report.admin_users += 1;
                }
                Err(reason) => skip(&mut report, "admin user", &reason),
            }
        }

        let member_repo = MemberRepository::new(self.db);
        for doc in export.members {
            let created_at = doc.created_at;
            match convert_member(doc) {
                Ok(param) => {
                    if member_repo
                        .exists_matching(&param.ic_number, &param.full_name, created_at)
                        .await?
                    {
                        let reason =
                            format!("{} ({}) already imported", param.full_name, param.ic_number);
                        skip(&mut report, "member", &reason);
                        continue;
                    }
                    member_repo.add_at(param, created_at).await?;
                    report.members += 1;
                }
                Err(reason) => skip(&mut report, "member", &reason),
            }
        }

        let donation_repo = DonationRepository::new(self.db);
        for doc in export.donations {
            match convert_donation(doc, &self.utc_offset) {
                Ok((param, created_at)) => {
                    if donation_repo
                        .exists_matching(
                            param.date,
                            param.amount_sen,
                            param.donor_name.as_deref(),
                            created_at,
                        )
                        .await?
                    {
                        let reason =
                            format!("{} sen on {} already imported", param.amount_sen, param.date);
                        skip(&mut report, "donation", &reason);
                        continue;
                    }
                    donation_repo.add(param, Some(created_at)).await?;
                    report.donations += 1;
                }
                Err(reason) => skip(&mut report, "donation", &reason),
            }
        }

        let announcement_repo = AnnouncementRepository::new(self.db);
        for doc in export.announcements {
            let created_at = doc.created_at;
            match convert_announcement(doc) {
                Ok((param, author)) => {
                    if announcement_repo
                        .exists_matching(&param.title, created_at)
                        .await?
                    {
                        let reason = format!("'{}' already imported", param.title);
                        skip(&mut report, "announcement", &reason);
                        continue;
                    }
                    announcement_repo
                        .add(param, author, Some(created_at))
                        .await?;
                    report.announcements += 1;
                }
                Err(reason) => skip(&mut report, "announcement", &reason),
            }
        }

        Ok(report)
    }
}

fn skip(report: &mut ImportReport, kind: &str, reason: &str) {
    tracing::warn!("Skipping legacy {}: {}", kind, reason);
    report.skipped += 1;
}

fn parse<T: FromStr>(value: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    T::from_str(value).map_err(|e| e.to_string())
}

fn convert_admin_user(doc: LegacyAdminUser) -> Result<UpsertAdminUserParam, String> {
    Ok(UpsertAdminUserParam {
        role: parse::<AdminRole>(&doc.role)?,
        uid: doc.uid,
        email: doc.email,
        display_name: doc.display_name,
        active: doc.active,
    })
}

fn convert_member(doc: LegacyMember) -> Result<MemberParam, String> {
    let full_name = doc
        .full_name
        .or(doc.name)
        .ok_or_else(|| format!("member {} has no name", doc.ic_number))?;
    let status = doc
        .status
        .or(doc.membership_status)
        .unwrap_or_else(|| MemberStatus::Active.as_str().to_string());

    Ok(MemberParam {
        full_name,
        phone_number: doc.phone_number,
        email: non_blank(doc.email),
        address: doc.address,
        postcode: doc.postcode,
        city: doc.city,
        state: doc.state,
        date_of_birth: doc.date_of_birth.map(|d| d.date_naive()),
        gender: parse::<Gender>(&doc.gender)?,
        status: parse::<MemberStatus>(&status)?,
        notes: doc.notes,
        ic_number: doc.ic_number,
    })
}

/// Maps the three-way donation `type` onto the unified categories.
fn category_from_type(kind: &str) -> Result<DonationCategory, String> {
    match kind {
        "general" => Ok(DonationCategory::Derma),
        "zakat" => Ok(DonationCategory::Zakat),
        "sadaqah" => Ok(DonationCategory::Sedekah),
        other => Err(format!("unknown donation type '{}'", other)),
    }
}

fn convert_donation(
    doc: LegacyDonation,
    offset: &FixedOffset,
) -> Result<(CreateDonationParam, DateTime<Utc>), String> {
    let amount_sen = (doc.amount * 100.0).round() as i64;
    if amount_sen <= 0 {
        return Err(format!("donation amount {} is not positive", doc.amount));
    }
    if amount_sen > MAX_DONATION_SEN {
        return Err(format!("donation amount {} is above the limit", doc.amount));
    }

    let category = match (doc.category, doc.kind) {
        (Some(category), _) => parse::<DonationCategory>(&category)?,
        (None, Some(kind)) => category_from_type(&kind)?,
        (None, None) => DonationCategory::Derma,
    };

    let date: NaiveDate = doc.date.with_timezone(offset).date_naive();
    // Undated imports get local midnight of the transaction date so reruns match
    let created_at = match doc.created_at {
        Some(created_at) => created_at,
        None => date
            .and_time(NaiveTime::MIN)
            .and_local_timezone(*offset)
            .single()
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or(doc.date),
    };

    let donor_name = non_blank(doc.donor_name).filter(|name| name != ANONYMOUS_DONOR);

    Ok((
        CreateDonationParam {
            donor_name,
            member_id: None,
            amount_sen,
            category,
            payment_method: parse::<PaymentMethod>(&doc.payment_method)?,
            date,
            reference_number: non_blank(doc.reference_number),
            notes: non_blank(doc.notes),
            created_by: non_blank(doc.created_by),
        },
        created_at,
    ))
}

fn convert_announcement(
    doc: LegacyAnnouncement,
) -> Result<(AnnouncementParam, AnnouncementAuthor), String> {
    let published = match (doc.published, doc.status.as_deref()) {
        (Some(published), _) => published,
        (None, Some("published")) => true,
        (None, Some("draft")) | (None, None) => false,
        (None, Some(other)) => return Err(format!("unknown announcement status '{}'", other)),
    };

    let category = match doc.category {
        Some(category) => parse::<AnnouncementCategory>(&category)?,
        None => AnnouncementCategory::General,
    };
    let priority = match doc.priority {
        Some(priority) => parse::<Priority>(&priority)?,
        None => Priority::Medium,
    };

    Ok((
        AnnouncementParam {
            title: doc.title,
            content: doc.content,
            category,
            priority,
            published,
        },
        AnnouncementAuthor {
            uid: doc.author_id,
            display_name: doc.author,
        },
    ))
}

#[cfg(test)]
mod tests {
    use test_utils::builder::TestBuilder;

    use super::*;

    fn malaysia() -> FixedOffset {
        FixedOffset::east_opt(8 * 3600).unwrap()
    }

    #[test]
    fn converts_announcement_status_with_defaults() {
        let doc: LegacyAnnouncement = serde_json::from_str(
            r#"{"title":"Gotong-royong","content":"Sabtu ini","status":"published",
                "author":"Admin","authorId":"uid-1","createdAt":"2024-03-01T02:00:00Z"}"#,
        )
        .unwrap();

        let (param, author) = convert_announcement(doc).unwrap();

        assert!(param.published);
        assert_eq!(param.category, AnnouncementCategory::General);
        assert_eq!(param.priority, Priority::Medium);
        assert_eq!(author.uid, "uid-1");
    }

    #[test]
    fn converts_donation_type_and_ringgit_amount() {
        let cases = [
            ("general", DonationCategory::Derma),
            ("zakat", DonationCategory::Zakat),
            ("sadaqah", DonationCategory::Sedekah),
        ];

        for (kind, expected) in cases {
            let doc: LegacyDonation = serde_json::from_str(&format!(
                r#"{{"donorName":"Tanpa Nama","amount":12.5,"type":"{}",
                    "paymentMethod":"cash","date":"2024-02-29T16:30:00Z"}}"#,
                kind
            ))
            .unwrap();

            let (param, created_at) = convert_donation(doc, &malaysia()).unwrap();

            assert_eq!(param.category, expected);
            assert_eq!(param.amount_sen, 1_250);
            assert_eq!(param.donor_name, None);
            // 16:30 UTC is already 1 March in UTC+8
            assert_eq!(param.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
            assert_eq!(created_at.to_rfc3339(), "2024-02-29T16:00:00+00:00");
        }
    }

    #[test]
    fn rejects_unknown_donation_type() {
        let doc: LegacyDonation = serde_json::from_str(
            r#"{"amount":10,"type":"infaq","paymentMethod":"cash","date":"2024-03-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert!(convert_donation(doc, &malaysia()).is_err());
    }

    #[test]
    fn rejects_donation_above_limit() {
        let doc: LegacyDonation = serde_json::from_str(
            r#"{"amount":50000000000000000,"category":"derma","paymentMethod":"cash",
                "date":"2024-03-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert!(convert_donation(doc, &malaysia()).is_err());
    }

    #[test]
    fn converts_member_name_and_membership_status() {
        let doc: LegacyMember = serde_json::from_str(
            r#"{"name":"Ahmad bin Ali","icNumber":"900101-14-5678","phoneNumber":"012-3456789",
                "address":"Jalan Masjid","gender":"male","membershipStatus":"inactive"}"#,
        )
        .unwrap();

        let param = convert_member(doc).unwrap();

        assert_eq!(param.full_name, "Ahmad bin Ali");
        assert_eq!(param.status, MemberStatus::Inactive);
        assert_eq!(param.email, None);
    }

    /// Tests a rerun of the same export writes nothing new.
    ///
    /// Expected: first run imports every row, second run skips every row
    #[tokio::test]
    async fn second_import_skips_existing_rows() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let raw = r#"{
            "adminUsers": [{"uid":"uid-1","email":"imam@masjid.test","displayName":"Imam","role":"super_admin"}],
            "members": [{"fullName":"Siti","icNumber":"850505-10-1234","phoneNumber":"013-1234567",
                         "address":"Kg Baru","gender":"female","status":"active",
                         "createdAt":"2024-01-01T00:00:00Z"},
                        {"fullName":"Zainab","icNumber":"850505-10-1234","phoneNumber":"013-7654321",
                         "address":"Kg Baru","gender":"female","status":"active",
                         "createdAt":"2024-01-01T00:05:00Z"},
                        {"name":"Ismail","icNumber":"700707-07-7007","phoneNumber":"019-7007007",
                         "address":"Kg Baru","gender":"male","membershipStatus":"active"}],
            "donations": [{"donorName":"Siti","amount":50,"category":"wakaf","paymentMethod":"online",
                           "date":"2024-01-02T00:00:00Z","createdAt":"2024-01-02T01:00:00Z"}],
            "announcements": [{"title":"Kuliah","content":"Maghrib","status":"draft",
                               "createdAt":"2024-01-03T00:00:00Z"}]
        }"#;

        let service = LegacyImportService::new(db, malaysia());
        let first = service.import_json(raw).await?;
        assert_eq!(
            first,
            ImportReport {
                admin_users: 1,
                members: 3,
                donations: 1,
                announcements: 1,
                skipped: 0,
            }
        );
        // Members sharing an IC number are still separate rows
        let members = MemberRepository::new(db).get_all().await?;
        assert_eq!(
            members
                .iter()
                .filter(|m| m.ic_number == "850505-10-1234")
                .count(),
            2
        );

        let second = service.import_json(raw).await?;
        assert_eq!(second.members + second.donations + second.announcements, 0);
        assert_eq!(second.skipped, 5);
        assert_eq!(MemberRepository::new(db).get_all().await?.len(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_malformed_export() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = LegacyImportService::new(db, malaysia())
            .import_json("[not an export")
            .await;

        assert!(matches!(result, Err(AppError::InternalErr(_))));
    }
}
