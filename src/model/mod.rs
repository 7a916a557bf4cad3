//! Data transfer objects shared by the web client and the API server.
//!
//! Everything here is plain serde data. Enumerations are serialized as the same
//! lowercase strings the database stores, so one representation flows from the
//! table through the API to the page.

pub mod announcement;
pub mod api;
pub mod auth;
pub mod dashboard;
pub mod donation;
pub mod member;
pub mod prayer;

use thiserror::Error;

/// A stored or submitted enum value that matches no known variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a string-backed enum with its stored value and Malay label.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $($variant:ident => $value:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Value stored in the database and sent over the API.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            /// Malay display label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($value => Ok($name::$variant),)+
                    _ => Err($crate::model::UnknownVariant {
                        kind: $kind,
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use string_enum;

#[cfg(test)]
mod tests {
    use super::member::MemberStatus;
    use std::str::FromStr;

    #[test]
    fn parses_stored_values_and_rejects_unknown() {
        assert_eq!(MemberStatus::from_str("active"), Ok(MemberStatus::Active));
        assert_eq!(MemberStatus::Inactive.as_str(), "inactive");

        let err = MemberStatus::from_str("pending").unwrap_err();
        assert_eq!(err.kind, "member status");
        assert_eq!(err.value, "pending");
    }
}
