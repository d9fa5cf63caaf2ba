use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{clean, clean_opt, reject_blank, reject_future_date, require_text, require_value};
use crate::models;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PetFoodPayload {
    pub pet_id: Option<i64>,
    pub food_id: Option<i64>,
    pub frequency_id: Option<i64>,
    pub amount: Option<String>,
    pub notes: Option<String>,
}

impl PetFoodPayload {
    pub fn validate_create(&self) -> Vec<String> {
        let mut errors = vec![];
        require_value(&self.pet_id, "pet_id", &mut errors);
        require_value(&self.food_id, "food_id", &mut errors);
        require_value(&self.frequency_id, "frequency_id", &mut errors);
        errors
    }

    pub fn validate_update(&self) -> Vec<String> {
        vec![]
    }

    pub fn into_new_pet_food(self) -> models::schedule::PetFood {
        let now = Utc::now();
        models::schedule::PetFood {
            id: 0,
            pet_id: self.pet_id.unwrap_or_default(),
            food_id: self.food_id.unwrap_or_default(),
            frequency_id: self.frequency_id.unwrap_or_default(),
            amount: clean_opt(self.amount),
            notes: clean_opt(self.notes),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_to(self, pet_food: &mut models::schedule::PetFood) {
        if let Some(pet_id) = self.pet_id {
            pet_food.pet_id = pet_id;
        }
        if let Some(food_id) = self.food_id {
            pet_food.food_id = food_id;
        }
        if let Some(frequency_id) = self.frequency_id {
            pet_food.frequency_id = frequency_id;
        }
        if self.amount.is_some() {
            pet_food.amount = clean_opt(self.amount);
        }
        if self.notes.is_some() {
            pet_food.notes = clean_opt(self.notes);
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MedicationSchedulePayload {
    pub pet_id: Option<i64>,
    pub medication_id: Option<i64>,
    pub frequency_id: Option<i64>,
    pub date_started: Option<NaiveDate>,
    pub date_ended: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl MedicationSchedulePayload {
    pub fn validate_create(&self) -> Vec<String> {
        let mut errors = vec![];
        require_value(&self.pet_id, "pet_id", &mut errors);
        require_value(&self.medication_id, "medication_id", &mut errors);
        require_value(&self.frequency_id, "frequency_id", &mut errors);
        require_value(&self.date_started, "date_started", &mut errors);
        errors
    }

    pub fn validate_update(&self) -> Vec<String> {
        vec![]
    }

    pub fn into_new_schedule(self) -> models::schedule::MedicationSchedule {
        let now = Utc::now();
        models::schedule::MedicationSchedule {
            id: 0,
            pet_id: self.pet_id.unwrap_or_default(),
            medication_id: self.medication_id.unwrap_or_default(),
            frequency_id: self.frequency_id.unwrap_or_default(),
            date_started: self.date_started.unwrap_or_default(),
            date_ended: self.date_ended,
            notes: clean_opt(self.notes),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_to(self, schedule: &mut models::schedule::MedicationSchedule) {
        if let Some(pet_id) = self.pet_id {
            schedule.pet_id = pet_id;
        }
        if let Some(medication_id) = self.medication_id {
            schedule.medication_id = medication_id;
        }
        if let Some(frequency_id) = self.frequency_id {
            schedule.frequency_id = frequency_id;
        }
        if let Some(date_started) = self.date_started {
            schedule.date_started = date_started;
        }
        if self.date_ended.is_some() {
            schedule.date_ended = self.date_ended;
        }
        if self.notes.is_some() {
            schedule.notes = clean_opt(self.notes);
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct VaccinationSchedulePayload {
    pub pet_id: Option<i64>,
    pub vaccine_id: Option<i64>,
    pub frequency_id: Option<i64>,
    pub date_given: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl VaccinationSchedulePayload {
    fn format_errors(&self) -> Vec<String> {
        let mut errors = vec![];
        reject_future_date(&self.date_given, "date_given", &mut errors);
        errors
    }

    pub fn validate_create(&self) -> Vec<String> {
        let mut errors = self.format_errors();
        require_value(&self.pet_id, "pet_id", &mut errors);
        require_value(&self.vaccine_id, "vaccine_id", &mut errors);
        require_value(&self.date_given, "date_given", &mut errors);
        errors
    }

    pub fn validate_update(&self) -> Vec<String> {
        self.format_errors()
    }

    pub fn into_new_schedule(self) -> models::schedule::VaccinationSchedule {
        let now = Utc::now();
        models::schedule::VaccinationSchedule {
            id: 0,
            pet_id: self.pet_id.unwrap_or_default(),
            vaccine_id: self.vaccine_id.unwrap_or_default(),
            frequency_id: self.frequency_id,
            date_given: self.date_given.unwrap_or_default(),
            notes: clean_opt(self.notes),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_to(self, schedule: &mut models::schedule::VaccinationSchedule) {
        if let Some(pet_id) = self.pet_id {
            schedule.pet_id = pet_id;
        }
        if let Some(vaccine_id) = self.vaccine_id {
            schedule.vaccine_id = vaccine_id;
        }
        if self.frequency_id.is_some() {
            schedule.frequency_id = self.frequency_id;
        }
        if let Some(date_given) = self.date_given {
            schedule.date_given = date_given;
        }
        if self.notes.is_some() {
            schedule.notes = clean_opt(self.notes);
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ChecksSchedulePayload {
    pub pet_id: Option<i64>,
    pub check_id: Option<i64>,
    pub frequency_id: Option<i64>,
    pub date_done: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl ChecksSchedulePayload {
    pub fn validate_create(&self) -> Vec<String> {
        let mut errors = vec![];
        require_value(&self.pet_id, "pet_id", &mut errors);
        require_value(&self.check_id, "check_id", &mut errors);
        require_value(&self.frequency_id, "frequency_id", &mut errors);
        errors
    }

    pub fn validate_update(&self) -> Vec<String> {
        vec![]
    }

    pub fn into_new_schedule(self) -> models::schedule::ChecksSchedule {
        let now = Utc::now();
        models::schedule::ChecksSchedule {
            id: 0,
            pet_id: self.pet_id.unwrap_or_default(),
            check_id: self.check_id.unwrap_or_default(),
            frequency_id: self.frequency_id.unwrap_or_default(),
            date_done: self.date_done,
            notes: clean_opt(self.notes),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_to(self, schedule: &mut models::schedule::ChecksSchedule) {
        if let Some(pet_id) = self.pet_id {
            schedule.pet_id = pet_id;
        }
        if let Some(check_id) = self.check_id {
            schedule.check_id = check_id;
        }
        if let Some(frequency_id) = self.frequency_id {
            schedule.frequency_id = frequency_id;
        }
        if self.date_done.is_some() {
            schedule.date_done = self.date_done;
        }
        if self.notes.is_some() {
            schedule.notes = clean_opt(self.notes);
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct InjuryReportPayload {
    pub pet_id: Option<i64>,
    pub injury_id: Option<i64>,
    pub date_of_injury: Option<NaiveDate>,
    pub report_notes: Option<String>,
}

impl InjuryReportPayload {
    fn format_errors(&self) -> Vec<String> {
        let mut errors = vec![];
        reject_future_date(&self.date_of_injury, "date_of_injury", &mut errors);
        errors
    }

    pub fn validate_create(&self) -> Vec<String> {
        let mut errors = self.format_errors();
        require_value(&self.pet_id, "pet_id", &mut errors);
        require_value(&self.injury_id, "injury_id", &mut errors);
        require_value(&self.date_of_injury, "date_of_injury", &mut errors);
        errors
    }

    pub fn validate_update(&self) -> Vec<String> {
        self.format_errors()
    }

    pub fn into_new_report(self) -> models::schedule::InjuryReport {
        let now = Utc::now();
        models::schedule::InjuryReport {
            id: 0,
            pet_id: self.pet_id.unwrap_or_default(),
            injury_id: self.injury_id.unwrap_or_default(),
            date_of_injury: self.date_of_injury.unwrap_or_default(),
            report_notes: clean_opt(self.report_notes),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_to(self, report: &mut models::schedule::InjuryReport) {
        if let Some(pet_id) = self.pet_id {
            report.pet_id = pet_id;
        }
        if let Some(injury_id) = self.injury_id {
            report.injury_id = injury_id;
        }
        if let Some(date_of_injury) = self.date_of_injury {
            report.date_of_injury = date_of_injury;
        }
        if self.report_notes.is_some() {
            report.report_notes = clean_opt(self.report_notes);
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PetAdoptionPayload {
    pub pet_id: Option<i64>,
    pub adopter_name: Option<String>,
    pub adoption_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl PetAdoptionPayload {
    fn format_errors(&self) -> Vec<String> {
        let mut errors = vec![];
        reject_blank(&self.adopter_name, "adopter_name", &mut errors);
        reject_future_date(&self.adoption_date, "adoption_date", &mut errors);
        errors
    }

    pub fn validate_create(&self) -> Vec<String> {
        let mut errors = self.format_errors();
        require_value(&self.pet_id, "pet_id", &mut errors);
        require_text(&self.adopter_name, "adopter_name", &mut errors);
        require_value(&self.adoption_date, "adoption_date", &mut errors);
        errors
    }

    pub fn validate_update(&self) -> Vec<String> {
        self.format_errors()
    }

    pub fn into_new_adoption(self) -> models::schedule::PetAdoption {
        let now = Utc::now();
        models::schedule::PetAdoption {
            id: 0,
            pet_id: self.pet_id.unwrap_or_default(),
            adopter_name: clean(self.adopter_name.unwrap_or_default()),
            adoption_date: self.adoption_date.unwrap_or_default(),
            notes: clean_opt(self.notes),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_to(self, adoption: &mut models::schedule::PetAdoption) {
        if let Some(pet_id) = self.pet_id {
            adoption.pet_id = pet_id;
        }
        if let Some(adopter_name) = self.adopter_name {
            adoption.adopter_name = clean(adopter_name);
        }
        if let Some(adoption_date) = self.adoption_date {
            adoption.adoption_date = adoption_date;
        }
        if self.notes.is_some() {
            adoption.notes = clean_opt(self.notes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vaccination_rejects_future_date_given() {
        let payload = VaccinationSchedulePayload {
            pet_id: Some(1),
            vaccine_id: Some(1),
            date_given: Some(Utc::now().date_naive() + chrono::Duration::days(1)),
            ..VaccinationSchedulePayload::default()
        };
        assert_eq!(
            payload.validate_create(),
            vec!["date_given must not be in the future"]
        );
    }

    #[test]
    fn test_medication_schedule_requires_core_fields() {
        let errors = MedicationSchedulePayload::default().validate_create();
        assert!(errors.iter().any(|e| e.contains("pet_id")));
        assert!(errors.iter().any(|e| e.contains("medication_id")));
        assert!(errors.iter().any(|e| e.contains("date_started")));
    }

    #[test]
    fn test_injury_report_rejects_future_injury_date() {
        let payload = InjuryReportPayload {
            pet_id: Some(1),
            injury_id: Some(1),
            date_of_injury: Some(Utc::now().date_naive() + chrono::Duration::days(2)),
            ..InjuryReportPayload::default()
        };
        assert!(
            payload
                .validate_create()
                .contains(&"date_of_injury must not be in the future".to_string())
        );
    }

    #[test]
    fn test_adoption_rejects_future_adoption_date() {
        let payload = PetAdoptionPayload {
            pet_id: Some(1),
            adopter_name: Some("Jordan Alvarez".into()),
            adoption_date: Some(Utc::now().date_naive() + chrono::Duration::days(1)),
            ..PetAdoptionPayload::default()
        };
        assert_eq!(
            payload.validate_create(),
            vec!["adoption_date must not be in the future"]
        );
    }
}
