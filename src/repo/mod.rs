pub mod sqlite;
pub mod sqlite_queries;

use crate::models;
use async_trait::async_trait;

/// Storage contract every REST resource goes through.
///
/// Reads of soft-deletable entities (pet, location, food, medication,
/// vaccine) only ever see active rows; deletes return whether a row was
/// actually removed (or soft-marked) so callers can answer not-found.
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait ShelterRepo {
    // pets
    async fn get_all_pets(&self) -> anyhow::Result<Vec<models::pet::Pet>>;

    async fn get_pet_by_id(&self, pet_id: i64) -> anyhow::Result<Option<models::pet::Pet>>;

    async fn insert_pet(&self, pet: &models::pet::Pet) -> anyhow::Result<i64>;

    async fn update_pet(&self, pet: &models::pet::Pet) -> anyhow::Result<()>;

    /// Soft-marks the pet and hard-deletes its schedule and adoption rows.
    async fn delete_pet(&self, pet_id: i64) -> anyhow::Result<bool>;

    // locations
    async fn get_all_locations(&self) -> anyhow::Result<Vec<models::location::Location>>;

    async fn get_location_by_id(
        &self,
        location_id: i64,
    ) -> anyhow::Result<Option<models::location::Location>>;

    async fn insert_location(&self, location: &models::location::Location) -> anyhow::Result<i64>;

    async fn update_location(&self, location: &models::location::Location) -> anyhow::Result<()>;

    /// Soft-marks the location and nullifies `pet.location_id` references.
    async fn delete_location(&self, location_id: i64) -> anyhow::Result<bool>;

    // frequencies
    async fn get_all_frequencies(&self) -> anyhow::Result<Vec<models::catalog::Frequency>>;

    async fn get_frequency_by_id(
        &self,
        frequency_id: i64,
    ) -> anyhow::Result<Option<models::catalog::Frequency>>;

    async fn get_frequency_by_name(
        &self,
        name: &str,
    ) -> anyhow::Result<Option<models::catalog::Frequency>>;

    async fn insert_frequency(
        &self,
        frequency: &models::catalog::Frequency,
    ) -> anyhow::Result<i64>;

    async fn update_frequency(&self, frequency: &models::catalog::Frequency)
        -> anyhow::Result<()>;

    /// Hard delete; vaccines, checks and schedule rows referencing the
    /// frequency go with it through the schema-level cascade.
    async fn delete_frequency(&self, frequency_id: i64) -> anyhow::Result<bool>;

    // foods
    async fn get_all_foods(&self) -> anyhow::Result<Vec<models::catalog::Food>>;

    async fn get_food_by_id(&self, food_id: i64) -> anyhow::Result<Option<models::catalog::Food>>;

    async fn insert_food(&self, food: &models::catalog::Food) -> anyhow::Result<i64>;

    async fn update_food(&self, food: &models::catalog::Food) -> anyhow::Result<()>;

    async fn delete_food(&self, food_id: i64) -> anyhow::Result<bool>;

    // medications
    async fn get_all_medications(&self) -> anyhow::Result<Vec<models::catalog::Medication>>;

    async fn get_medication_by_id(
        &self,
        medication_id: i64,
    ) -> anyhow::Result<Option<models::catalog::Medication>>;

    async fn insert_medication(
        &self,
        medication: &models::catalog::Medication,
    ) -> anyhow::Result<i64>;

    async fn update_medication(
        &self,
        medication: &models::catalog::Medication,
    ) -> anyhow::Result<()>;

    async fn delete_medication(&self, medication_id: i64) -> anyhow::Result<bool>;

    // vaccines (reads embed the referenced frequency)
    async fn get_all_vaccines(&self) -> anyhow::Result<Vec<models::catalog::Vaccine>>;

    async fn get_vaccine_by_id(
        &self,
        vaccine_id: i64,
    ) -> anyhow::Result<Option<models::catalog::Vaccine>>;

    async fn get_vaccine_by_name(
        &self,
        name: &str,
    ) -> anyhow::Result<Option<models::catalog::Vaccine>>;

    async fn insert_vaccine(&self, vaccine: &models::catalog::Vaccine) -> anyhow::Result<i64>;

    async fn update_vaccine(&self, vaccine: &models::catalog::Vaccine) -> anyhow::Result<()>;

    async fn delete_vaccine(&self, vaccine_id: i64) -> anyhow::Result<bool>;

    // injuries
    async fn get_all_injuries(&self) -> anyhow::Result<Vec<models::catalog::Injury>>;

    async fn get_injury_by_id(
        &self,
        injury_id: i64,
    ) -> anyhow::Result<Option<models::catalog::Injury>>;

    async fn insert_injury(&self, injury: &models::catalog::Injury) -> anyhow::Result<i64>;

    async fn update_injury(&self, injury: &models::catalog::Injury) -> anyhow::Result<()>;

    async fn delete_injury(&self, injury_id: i64) -> anyhow::Result<bool>;

    // checks (reads embed the referenced frequency)
    async fn get_all_checks(&self) -> anyhow::Result<Vec<models::catalog::Check>>;

    async fn get_check_by_id(
        &self,
        check_id: i64,
    ) -> anyhow::Result<Option<models::catalog::Check>>;

    async fn insert_check(&self, check: &models::catalog::Check) -> anyhow::Result<i64>;

    async fn update_check(&self, check: &models::catalog::Check) -> anyhow::Result<()>;

    async fn delete_check(&self, check_id: i64) -> anyhow::Result<bool>;

    // pet foods
    async fn get_all_pet_foods(&self) -> anyhow::Result<Vec<models::schedule::PetFood>>;

    async fn get_pet_food_by_id(
        &self,
        pet_food_id: i64,
    ) -> anyhow::Result<Option<models::schedule::PetFood>>;

    async fn insert_pet_food(&self, pet_food: &models::schedule::PetFood) -> anyhow::Result<i64>;

    async fn update_pet_food(&self, pet_food: &models::schedule::PetFood) -> anyhow::Result<()>;

    async fn delete_pet_food(&self, pet_food_id: i64) -> anyhow::Result<bool>;

    // medication schedules
    async fn get_all_medication_schedules(
        &self,
    ) -> anyhow::Result<Vec<models::schedule::MedicationSchedule>>;

    async fn get_medication_schedule_by_id(
        &self,
        schedule_id: i64,
    ) -> anyhow::Result<Option<models::schedule::MedicationSchedule>>;

    async fn insert_medication_schedule(
        &self,
        schedule: &models::schedule::MedicationSchedule,
    ) -> anyhow::Result<i64>;

    async fn update_medication_schedule(
        &self,
        schedule: &models::schedule::MedicationSchedule,
    ) -> anyhow::Result<()>;

    async fn delete_medication_schedule(&self, schedule_id: i64) -> anyhow::Result<bool>;

    // vaccination schedules
    async fn get_all_vaccination_schedules(
        &self,
    ) -> anyhow::Result<Vec<models::schedule::VaccinationSchedule>>;

    async fn get_vaccination_schedule_by_id(
        &self,
        schedule_id: i64,
    ) -> anyhow::Result<Option<models::schedule::VaccinationSchedule>>;

    async fn insert_vaccination_schedule(
        &self,
        schedule: &models::schedule::VaccinationSchedule,
    ) -> anyhow::Result<i64>;

    async fn update_vaccination_schedule(
        &self,
        schedule: &models::schedule::VaccinationSchedule,
    ) -> anyhow::Result<()>;

    async fn delete_vaccination_schedule(&self, schedule_id: i64) -> anyhow::Result<bool>;

    // check schedules
    async fn get_all_checks_schedules(
        &self,
    ) -> anyhow::Result<Vec<models::schedule::ChecksSchedule>>;

    async fn get_checks_schedule_by_id(
        &self,
        schedule_id: i64,
    ) -> anyhow::Result<Option<models::schedule::ChecksSchedule>>;

    async fn insert_checks_schedule(
        &self,
        schedule: &models::schedule::ChecksSchedule,
    ) -> anyhow::Result<i64>;

    async fn update_checks_schedule(
        &self,
        schedule: &models::schedule::ChecksSchedule,
    ) -> anyhow::Result<()>;

    async fn delete_checks_schedule(&self, schedule_id: i64) -> anyhow::Result<bool>;

    // injury reports
    async fn get_all_injury_reports(
        &self,
    ) -> anyhow::Result<Vec<models::schedule::InjuryReport>>;

    async fn get_injury_report_by_id(
        &self,
        report_id: i64,
    ) -> anyhow::Result<Option<models::schedule::InjuryReport>>;

    async fn insert_injury_report(
        &self,
        report: &models::schedule::InjuryReport,
    ) -> anyhow::Result<i64>;

    async fn update_injury_report(
        &self,
        report: &models::schedule::InjuryReport,
    ) -> anyhow::Result<()>;

    async fn delete_injury_report(&self, report_id: i64) -> anyhow::Result<bool>;

    // adoptions
    async fn get_all_pet_adoptions(
        &self,
    ) -> anyhow::Result<Vec<models::schedule::PetAdoption>>;

    async fn get_pet_adoption_by_id(
        &self,
        adoption_id: i64,
    ) -> anyhow::Result<Option<models::schedule::PetAdoption>>;

    async fn get_pet_adoption_by_pet_id(
        &self,
        pet_id: i64,
    ) -> anyhow::Result<Option<models::schedule::PetAdoption>>;

    /// Inserts the adoption and raises the pet's adopted flag in one
    /// transaction.
    async fn insert_pet_adoption(
        &self,
        adoption: &models::schedule::PetAdoption,
    ) -> anyhow::Result<i64>;

    async fn update_pet_adoption(
        &self,
        adoption: &models::schedule::PetAdoption,
    ) -> anyhow::Result<()>;

    /// Removes the adoption and clears the pet's adopted flag in one
    /// transaction.
    async fn delete_pet_adoption(&self, adoption_id: i64) -> anyhow::Result<bool>;
}

pub type ImplShelterRepo = Box<dyn ShelterRepo>;
