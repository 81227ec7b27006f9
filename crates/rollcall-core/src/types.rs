//! Shared domain types for the rollcall admin services

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platform role tiers, ordered from least to most privileged
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular member with no administrative access
    Member,
    /// School ambassador, the minimum tier for the admin dashboard
    Ambassador,
    /// Regional coordinator
    Coordinator,
    /// Platform administrator
    Admin,
}

impl Role {
    /// Whether this role satisfies the given minimum tier
    #[must_use]
    pub fn meets(self, minimum: Self) -> bool {
        self >= minimum
    }

    /// Canonical lowercase name, matching the database representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Ambassador => "ambassador",
            Self::Coordinator => "coordinator",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "member" => Ok(Self::Member),
            "ambassador" => Ok(Self::Ambassador),
            "coordinator" => Ok(Self::Coordinator),
            "admin" => Ok(Self::Admin),
            other => Err(crate::Error::Validation {
                field: "role".to_string(),
                message: format!("unknown role: {other}"),
            }),
        }
    }
}

/// School classification tag
///
/// Two tags get dedicated badge styling on the dashboard; anything else
/// renders with the default badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchoolTag {
    /// Historically Black college or university
    Hbcu,
    /// Hispanic-serving institution
    Hsi,
    /// Any other tag value, kept verbatim
    Other(String),
}

impl SchoolTag {
    /// Parse a raw tag string as stored in the database
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "hbcu" => Self::Hbcu,
            "hsi" => Self::Hsi,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    /// Human-readable label for the badge
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Hbcu => "HBCU",
            Self::Hsi => "HSI",
            Self::Other(raw) => raw,
        }
    }

    /// CSS class selecting the badge color
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Hbcu => "badge-hbcu",
            Self::Hsi => "badge-hsi",
            Self::Other(_) => "badge-default",
        }
    }
}

impl fmt::Display for SchoolTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
