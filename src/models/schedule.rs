//! Join rows binding a pet to a catalog entity plus temporal metadata.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct PetFood {
    pub id: i64,
    pub pet_id: i64,
    pub food_id: i64,
    pub frequency_id: i64,
    pub amount: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct MedicationSchedule {
    pub id: i64,
    pub pet_id: i64,
    pub medication_id: i64,
    pub frequency_id: i64,
    pub date_started: NaiveDate,
    pub date_ended: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct VaccinationSchedule {
    pub id: i64,
    pub pet_id: i64,
    pub vaccine_id: i64,
    pub frequency_id: Option<i64>,
    pub date_given: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct ChecksSchedule {
    pub id: i64,
    pub pet_id: i64,
    pub check_id: i64,
    pub frequency_id: i64,
    pub date_done: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct InjuryReport {
    pub id: i64,
    pub pet_id: i64,
    pub injury_id: i64,
    pub date_of_injury: NaiveDate,
    pub report_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct PetAdoption {
    pub id: i64,
    pub pet_id: i64,
    pub adopter_name: String,
    pub adoption_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
