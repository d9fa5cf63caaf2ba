use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{clean, clean_opt, reject_blank, require_text, require_value};
use crate::models;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PetPayload {
    pub name: Option<String>,
    pub pet_type: Option<String>,
    pub breed: Option<String>,
    pub gender: Option<models::pet::Gender>,
    pub birthday: Option<NaiveDate>,
    pub admission_date: Option<NaiveDate>,
    pub location_id: Option<i64>,
    pub picture: Option<String>,
    pub nickname: Option<String>,
    pub notes: Option<String>,
    pub adopted: Option<bool>,
}

impl PetPayload {
    fn format_errors(&self) -> Vec<String> {
        let mut errors = vec![];
        reject_blank(&self.name, "name", &mut errors);
        reject_blank(&self.pet_type, "pet_type", &mut errors);
        reject_blank(&self.breed, "breed", &mut errors);
        errors
    }

    pub fn validate_create(&self) -> Vec<String> {
        let mut errors = self.format_errors();
        require_text(&self.name, "name", &mut errors);
        require_text(&self.pet_type, "pet_type", &mut errors);
        require_text(&self.breed, "breed", &mut errors);
        require_value(&self.gender, "gender", &mut errors);
        require_value(&self.birthday, "birthday", &mut errors);
        require_value(&self.admission_date, "admission_date", &mut errors);
        errors
    }

    pub fn validate_update(&self) -> Vec<String> {
        self.format_errors()
    }

    /// Builds the model for insertion. Only valid after `validate_create`.
    pub fn into_new_pet(self) -> models::pet::Pet {
        let now = Utc::now();
        models::pet::Pet {
            id: 0,
            name: clean(self.name.unwrap_or_default()),
            pet_type: clean(self.pet_type.unwrap_or_default()),
            breed: clean(self.breed.unwrap_or_default()),
            gender: self.gender.unwrap_or_default(),
            birthday: self.birthday.unwrap_or_default(),
            admission_date: self.admission_date.unwrap_or_default(),
            location_id: self.location_id,
            picture: clean_opt(self.picture),
            nickname: clean_opt(self.nickname),
            notes: clean_opt(self.notes),
            adopted: self.adopted.unwrap_or(false),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges the present fields over the stored record (partial update).
    pub fn apply_to(self, pet: &mut models::pet::Pet) {
        if let Some(name) = self.name {
            pet.name = clean(name);
        }
        if let Some(pet_type) = self.pet_type {
            pet.pet_type = clean(pet_type);
        }
        if let Some(breed) = self.breed {
            pet.breed = clean(breed);
        }
        if let Some(gender) = self.gender {
            pet.gender = gender;
        }
        if let Some(birthday) = self.birthday {
            pet.birthday = birthday;
        }
        if let Some(admission_date) = self.admission_date {
            pet.admission_date = admission_date;
        }
        if self.location_id.is_some() {
            pet.location_id = self.location_id;
        }
        if self.picture.is_some() {
            pet.picture = clean_opt(self.picture);
        }
        if self.nickname.is_some() {
            pet.nickname = clean_opt(self.nickname);
        }
        if self.notes.is_some() {
            pet.notes = clean_opt(self.notes);
        }
        if let Some(adopted) = self.adopted {
            pet.adopted = adopted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> PetPayload {
        PetPayload {
            name: Some("Firulais".into()),
            pet_type: Some("dog".into()),
            breed: Some("mutt".into()),
            gender: Some(models::pet::Gender::Male),
            birthday: Some(NaiveDate::from_ymd_opt(2020, 3, 1).unwrap()),
            admission_date: Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
            ..PetPayload::default()
        }
    }

    #[test]
    fn test_validate_create_full_payload_passes() {
        assert!(full_payload().validate_create().is_empty());
    }

    #[test]
    fn test_validate_create_missing_name_mentions_field() {
        let payload = PetPayload {
            name: None,
            ..full_payload()
        };
        let errors = payload.validate_create();
        assert!(errors.iter().any(|e| e.contains("name")));
    }

    #[test]
    fn test_validate_update_ignores_absent_fields() {
        let payload = PetPayload {
            notes: Some("prefers wet food".into()),
            ..PetPayload::default()
        };
        assert!(payload.validate_update().is_empty());
    }

    #[test]
    fn test_apply_to_merges_only_present_fields() {
        let mut pet = full_payload().into_new_pet();
        let payload = PetPayload {
            nickname: Some("Firu".into()),
            ..PetPayload::default()
        };

        payload.apply_to(&mut pet);

        assert_eq!(pet.name, "Firulais");
        assert_eq!(pet.nickname.as_deref(), Some("Firu"));
    }
}
