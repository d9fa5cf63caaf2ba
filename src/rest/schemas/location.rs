use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{clean, clean_opt, reject_blank, require_text};
use crate::models;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LocationPayload {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

impl LocationPayload {
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

    pub fn into_new_location(self) -> models::location::Location {
        let now = Utc::now();
        models::location::Location {
            id: 0,
            name: clean(self.name.unwrap_or_default()),
            address: clean_opt(self.address),
            phone: clean_opt(self.phone),
            notes: clean_opt(self.notes),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_to(self, location: &mut models::location::Location) {
        if let Some(name) = self.name {
            location.name = clean(name);
        }
        if self.address.is_some() {
            location.address = clean_opt(self.address);
        }
        if self.phone.is_some() {
            location.phone = clean_opt(self.phone);
        }
        if self.notes.is_some() {
            location.notes = clean_opt(self.notes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_create_requires_name() {
        let errors = LocationPayload::default().validate_create();
        assert_eq!(errors, vec!["name is required"]);
    }

    #[test]
    fn test_validate_create_rejects_blank_name() {
        let payload = LocationPayload {
            name: Some("   ".into()),
            ..LocationPayload::default()
        };
        assert!(
            payload
                .validate_create()
                .iter()
                .any(|e| e.contains("name"))
        );
    }
}
