use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, sqlx::Type,
)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
pub enum Gender {
    #[display("male")]
    #[serde(alias = "male", rename(serialize = "male"))]
    Male,
    #[display("female")]
    #[serde(alias = "female", rename(serialize = "female"))]
    Female,
    #[default]
    #[display("unknown")]
    #[serde(alias = "unknown", rename(serialize = "unknown"))]
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub pet_type: String,
    pub breed: String,
    pub gender: Gender,
    pub birthday: NaiveDate,
    pub admission_date: NaiveDate,
    pub location_id: Option<i64>,
    pub picture: Option<String>,
    pub nickname: Option<String>,
    pub notes: Option<String>,
    pub adopted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
