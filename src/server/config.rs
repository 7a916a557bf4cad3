use chrono::FixedOffset;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const DEFAULT_PRAYER_API_URL: &str =
    "https://www.e-solat.gov.my/index.php?r=esolatApi/TakwimSolat";
const DEFAULT_PRAYER_ZONE: &str = "SGR01";
const DEFAULT_UTC_OFFSET_HOURS: i32 = 8;

pub struct Config {
    pub database_url: String,

    pub identity_api_key: String,
    pub identity_base_url: String,

    pub prayer_api_url: String,
    pub prayer_zone: String,

    /// Local offset used for "today" in date buckets and prayer countdowns.
    pub utc_offset: FixedOffset,

    /// JSON export in the legacy document shapes, imported once at startup.
    pub legacy_import_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            identity_api_key: required("IDENTITY_API_KEY")?,
            identity_base_url: optional("IDENTITY_BASE_URL")
                .unwrap_or_else(|| DEFAULT_IDENTITY_BASE_URL.to_string()),
            prayer_api_url: optional("PRAYER_API_URL")
                .unwrap_or_else(|| DEFAULT_PRAYER_API_URL.to_string()),
            prayer_zone: optional("PRAYER_ZONE").unwrap_or_else(|| DEFAULT_PRAYER_ZONE.to_string()),
            utc_offset: parse_utc_offset(optional("UTC_OFFSET_HOURS"))?,
            legacy_import_file: optional("LEGACY_IMPORT_FILE"),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parses a whole-hour UTC offset, defaulting to Malaysia (UTC+8).
fn parse_utc_offset(value: Option<String>) -> Result<FixedOffset, ConfigError> {
    let invalid = |value: &str| ConfigError::InvalidEnvVar {
        name: "UTC_OFFSET_HOURS".to_string(),
        value: value.to_string(),
    };

    let hours = match value {
        Some(ref raw) => raw.trim().parse::<i32>().map_err(|_| invalid(raw))?,
        None => DEFAULT_UTC_OFFSET_HOURS,
    };

    FixedOffset::east_opt(hours * 3600).ok_or_else(|| invalid(&hours.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_malaysia_offset() {
        let offset = parse_utc_offset(None).unwrap();
        assert_eq!(offset.local_minus_utc(), 8 * 3600);
    }

    #[test]
    fn parses_custom_offset() {
        let offset = parse_utc_offset(Some("-5".to_string())).unwrap();
        assert_eq!(offset.local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn rejects_out_of_range_or_garbage_offset() {
        assert!(matches!(
            parse_utc_offset(Some("abc".to_string())),
            Err(ConfigError::InvalidEnvVar { .. })
        ));
        assert!(matches!(
            parse_utc_offset(Some("30".to_string())),
            Err(ConfigError::InvalidEnvVar { .. })
        ));
    }
}
