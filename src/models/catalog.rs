//! Catalog entities: the reference records schedules point at.

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, sqlx::Type,
)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
pub enum Severity {
    #[default]
    #[display("minor")]
    #[serde(alias = "minor", rename(serialize = "minor"))]
    Minor,
    #[display("moderate")]
    #[serde(alias = "moderate", rename(serialize = "moderate"))]
    Moderate,
    #[display("severe")]
    #[serde(alias = "severe", rename(serialize = "severe"))]
    Severe,
    #[display("critical")]
    #[serde(alias = "critical", rename(serialize = "critical"))]
    Critical,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Frequency {
    pub id: i64,
    pub name: String,
    pub interval_days: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub food_type: Option<String>,
    pub amount: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Medication {
    pub id: i64,
    pub name: String,
    pub med_type: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Vaccine reads always embed the referenced frequency.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Vaccine {
    pub id: i64,
    pub name: String,
    pub mandatory: bool,
    pub frequency_id: i64,
    pub notes: Option<String>,
    pub frequency: Frequency,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Injury {
    pub id: i64,
    pub description: String,
    pub severity: Severity,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Recurring check reads always embed the referenced frequency.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Check {
    pub id: i64,
    pub description: String,
    pub frequency_id: i64,
    pub notes: Option<String>,
    pub frequency: Frequency,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
