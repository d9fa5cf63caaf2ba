use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{clean, clean_opt, reject_blank, require_text, require_value};
use crate::models;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FrequencyPayload {
    pub name: Option<String>,
    pub interval_days: Option<i64>,
}

impl FrequencyPayload {
    fn format_errors(&self) -> Vec<String> {
        let mut errors = vec![];
        reject_blank(&self.name, "name", &mut errors);
        if let Some(interval_days) = self.interval_days {
            if interval_days <= 0 {
                errors.push("interval_days must be a positive integer".into());
            }
        }
        errors
    }

    pub fn validate_create(&self) -> Vec<String> {
        let mut errors = self.format_errors();
        require_text(&self.name, "name", &mut errors);
        require_value(&self.interval_days, "interval_days", &mut errors);
        errors
    }

    pub fn validate_update(&self) -> Vec<String> {
        self.format_errors()
    }

    pub fn into_new_frequency(self) -> models::catalog::Frequency {
        let now = Utc::now();
        models::catalog::Frequency {
            id: 0,
            name: clean(self.name.unwrap_or_default()),
            interval_days: self.interval_days.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_to(self, frequency: &mut models::catalog::Frequency) {
        if let Some(name) = self.name {
            frequency.name = clean(name);
        }
        if let Some(interval_days) = self.interval_days {
            frequency.interval_days = interval_days;
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FoodPayload {
    pub name: Option<String>,
    pub food_type: Option<String>,
    pub amount: Option<String>,
    pub notes: Option<String>,
}

impl FoodPayload {
    pub fn validate_create(&self) -> Vec<String> {
        let mut errors = vec![];
        require_text(&self.name, "name", &mut errors);
        reject_blank(&self.name, "name", &mut errors);
        errors
    }

    pub fn validate_update(&self) -> Vec<String> {
        let mut errors = vec![];
        reject_blank(&self.name, "name", &mut errors);
        errors
    }

    pub fn into_new_food(self) -> models::catalog::Food {
        let now = Utc::now();
        models::catalog::Food {
            id: 0,
            name: clean(self.name.unwrap_or_default()),
            food_type: clean_opt(self.food_type),
            amount: clean_opt(self.amount),
            notes: clean_opt(self.notes),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_to(self, food: &mut models::catalog::Food) {
        if let Some(name) = self.name {
            food.name = clean(name);
        }
        if self.food_type.is_some() {
            food.food_type = clean_opt(self.food_type);
        }
        if self.amount.is_some() {
            food.amount = clean_opt(self.amount);
        }
        if self.notes.is_some() {
            food.notes = clean_opt(self.notes);
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MedicationPayload {
    pub name: Option<String>,
    pub med_type: Option<String>,
    pub notes: Option<String>,
}

impl MedicationPayload {
    pub fn validate_create(&self) -> Vec<String> {
        let mut errors = vec![];
        require_text(&self.name, "name", &mut errors);
        reject_blank(&self.name, "name", &mut errors);
        errors
    }

    pub fn validate_update(&self) -> Vec<String> {
        let mut errors = vec![];
        reject_blank(&self.name, "name", &mut errors);
        errors
    }

    pub fn into_new_medication(self) -> models::catalog::Medication {
        let now = Utc::now();
        models::catalog::Medication {
            id: 0,
            name: clean(self.name.unwrap_or_default()),
            med_type: clean_opt(self.med_type),
            notes: clean_opt(self.notes),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_to(self, medication: &mut models::catalog::Medication) {
        if let Some(name) = self.name {
            medication.name = clean(name);
        }
        if self.med_type.is_some() {
            medication.med_type = clean_opt(self.med_type);
        }
        if self.notes.is_some() {
            medication.notes = clean_opt(self.notes);
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct VaccinePayload {
    pub name: Option<String>,
    pub mandatory: Option<bool>,
    pub frequency_id: Option<i64>,
    pub notes: Option<String>,
}

impl VaccinePayload {
    pub fn validate_create(&self) -> Vec<String> {
        let mut errors = vec![];
        require_text(&self.name, "name", &mut errors);
        reject_blank(&self.name, "name", &mut errors);
        require_value(&self.frequency_id, "frequency_id", &mut errors);
        errors
    }

    pub fn validate_update(&self) -> Vec<String> {
        let mut errors = vec![];
        reject_blank(&self.name, "name", &mut errors);
        errors
    }

    pub fn into_new_vaccine(self) -> models::catalog::Vaccine {
        let now = Utc::now();
        models::catalog::Vaccine {
            id: 0,
            name: clean(self.name.unwrap_or_default()),
            mandatory: self.mandatory.unwrap_or(false),
            frequency_id: self.frequency_id.unwrap_or_default(),
            notes: clean_opt(self.notes),
            frequency: models::catalog::Frequency::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_to(self, vaccine: &mut models::catalog::Vaccine) {
        if let Some(name) = self.name {
            vaccine.name = clean(name);
        }
        if let Some(mandatory) = self.mandatory {
            vaccine.mandatory = mandatory;
        }
        if let Some(frequency_id) = self.frequency_id {
            vaccine.frequency_id = frequency_id;
        }
        if self.notes.is_some() {
            vaccine.notes = clean_opt(self.notes);
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct InjuryPayload {
    pub description: Option<String>,
    pub severity: Option<models::catalog::Severity>,
    pub notes: Option<String>,
}

impl InjuryPayload {
    pub fn validate_create(&self) -> Vec<String> {
        let mut errors = vec![];
        require_text(&self.description, "description", &mut errors);
        reject_blank(&self.description, "description", &mut errors);
        require_value(&self.severity, "severity", &mut errors);
        errors
    }

    pub fn validate_update(&self) -> Vec<String> {
        let mut errors = vec![];
        reject_blank(&self.description, "description", &mut errors);
        errors
    }

    pub fn into_new_injury(self) -> models::catalog::Injury {
        let now = Utc::now();
        models::catalog::Injury {
            id: 0,
            description: clean(self.description.unwrap_or_default()),
            severity: self.severity.unwrap_or_default(),
            notes: clean_opt(self.notes),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_to(self, injury: &mut models::catalog::Injury) {
        if let Some(description) = self.description {
            injury.description = clean(description);
        }
        if let Some(severity) = self.severity {
            injury.severity = severity;
        }
        if self.notes.is_some() {
            injury.notes = clean_opt(self.notes);
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CheckPayload {
    pub description: Option<String>,
    pub frequency_id: Option<i64>,
    pub notes: Option<String>,
}

impl CheckPayload {
    pub fn validate_create(&self) -> Vec<String> {
        let mut errors = vec![];
        require_text(&self.description, "description", &mut errors);
        reject_blank(&self.description, "description", &mut errors);
        require_value(&self.frequency_id, "frequency_id", &mut errors);
        errors
    }

    pub fn validate_update(&self) -> Vec<String> {
        let mut errors = vec![];
        reject_blank(&self.description, "description", &mut errors);
        errors
    }

    pub fn into_new_check(self) -> models::catalog::Check {
        let now = Utc::now();
        models::catalog::Check {
            id: 0,
            description: clean(self.description.unwrap_or_default()),
            frequency_id: self.frequency_id.unwrap_or_default(),
            notes: clean_opt(self.notes),
            frequency: models::catalog::Frequency::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_to(self, check: &mut models::catalog::Check) {
        if let Some(description) = self.description {
            check.description = clean(description);
        }
        if let Some(frequency_id) = self.frequency_id {
            check.frequency_id = frequency_id;
        }
        if self.notes.is_some() {
            check.notes = clean_opt(self.notes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_requires_name_and_interval() {
        let errors = FrequencyPayload::default().validate_create();
        assert!(errors.iter().any(|e| e.contains("name")));
        assert!(errors.iter().any(|e| e.contains("interval_days")));
    }

    #[test]
    fn test_frequency_rejects_non_positive_interval() {
        let payload = FrequencyPayload {
            name: Some("Weekly".into()),
            interval_days: Some(0),
        };
        assert_eq!(
            payload.validate_create(),
            vec!["interval_days must be a positive integer"]
        );
    }

    #[test]
    fn test_vaccine_requires_frequency() {
        let payload = VaccinePayload {
            name: Some("Rabies".into()),
            ..VaccinePayload::default()
        };
        assert_eq!(payload.validate_create(), vec!["frequency_id is required"]);
    }

    #[test]
    fn test_food_create_missing_name_mentions_field() {
        let payload = FoodPayload {
            food_type: Some("Dry".into()),
            amount: Some("5kg".into()),
            ..FoodPayload::default()
        };
        assert_eq!(payload.validate_create(), vec!["name is required"]);
    }

    #[test]
    fn test_food_partial_update_keeps_unspecified_fields() {
        let mut food = FoodPayload {
            name: Some("Kibble".into()),
            food_type: Some("Dry".into()),
            amount: Some("5kg".into()),
            ..FoodPayload::default()
        }
        .into_new_food();

        FoodPayload {
            notes: Some("new bag".into()),
            ..FoodPayload::default()
        }
        .apply_to(&mut food);

        assert_eq!(food.name, "Kibble");
        assert_eq!(food.food_type.as_deref(), Some("Dry"));
        assert_eq!(food.notes.as_deref(), Some("new bag"));
    }

    #[test]
    fn test_injury_requires_severity() {
        let payload = InjuryPayload {
            description: Some("broken leg".into()),
            ..InjuryPayload::default()
        };
        assert_eq!(payload.validate_create(), vec!["severity is required"]);
    }
}
