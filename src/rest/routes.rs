//! REST route configuration.
//!
//! The resource-name to handler mapping is spelled out here, statically,
//! and resolved when the server is configured. Every resource follows the
//! same contract under `/api/v1`:
//!
//! - `GET    /api/v1/<plural>` - list the collection
//! - `POST   /api/v1/<plural>` - create (201, csrf-guarded)
//! - `GET    /api/v1/<plural>/{id}` - read one
//! - `PUT    /api/v1/<plural>/{id}` - partial update (csrf-guarded)
//! - `PATCH  /api/v1/<plural>/{id}` - partial update (csrf-guarded)
//! - `DELETE /api/v1/<plural>/{id}` - delete (204, csrf-guarded)
//!
//! Plus `GET /api/v1/session/token` for the CSRF credential pair.

use super::{catalog, location, pet, schedule, session};
use ntex::web;

/// CSRF credential issuance.
pub fn session(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/session").service((session::issue_csrf_token,)));
}

/// Core entities: pets and locations.
pub fn core(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/pets").service((
        pet::list_pets,
        pet::create_pet,
        pet::get_pet,
        pet::update_pet,
        pet::patch_pet,
        pet::delete_pet,
    )))
    .service(web::scope("/api/v1/locations").service((
        location::list_locations,
        location::create_location,
        location::get_location,
        location::update_location,
        location::patch_location,
        location::delete_location,
    )));
}

/// Catalog resources: frequencies, foods, medications, vaccines,
/// injuries, checks.
pub fn catalog(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/frequencies").service((
        catalog::list_frequencies,
        catalog::create_frequency,
        catalog::get_frequency,
        catalog::update_frequency,
        catalog::patch_frequency,
        catalog::delete_frequency,
    )))
    .service(web::scope("/api/v1/foods").service((
        catalog::list_foods,
        catalog::create_food,
        catalog::get_food,
        catalog::update_food,
        catalog::patch_food,
        catalog::delete_food,
    )))
    .service(web::scope("/api/v1/medications").service((
        catalog::list_medications,
        catalog::create_medication,
        catalog::get_medication,
        catalog::update_medication,
        catalog::patch_medication,
        catalog::delete_medication,
    )))
    .service(web::scope("/api/v1/vaccines").service((
        catalog::list_vaccines,
        catalog::create_vaccine,
        catalog::get_vaccine,
        catalog::update_vaccine,
        catalog::patch_vaccine,
        catalog::delete_vaccine,
    )))
    .service(web::scope("/api/v1/injuries").service((
        catalog::list_injuries,
        catalog::create_injury,
        catalog::get_injury,
        catalog::update_injury,
        catalog::patch_injury,
        catalog::delete_injury,
    )))
    .service(web::scope("/api/v1/checks").service((
        catalog::list_checks,
        catalog::create_check,
        catalog::get_check,
        catalog::update_check,
        catalog::patch_check,
        catalog::delete_check,
    )));
}

/// Schedule/join resources binding pets to catalog records.
pub fn schedules(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/pet_foods").service((
        schedule::list_pet_foods,
        schedule::create_pet_food,
        schedule::get_pet_food,
        schedule::update_pet_food,
        schedule::patch_pet_food,
        schedule::delete_pet_food,
    )))
    .service(web::scope("/api/v1/medication_schedules").service((
        schedule::list_medication_schedules,
        schedule::create_medication_schedule,
        schedule::get_medication_schedule,
        schedule::update_medication_schedule,
        schedule::patch_medication_schedule,
        schedule::delete_medication_schedule,
    )))
    .service(web::scope("/api/v1/vaccination_schedules").service((
        schedule::list_vaccination_schedules,
        schedule::create_vaccination_schedule,
        schedule::get_vaccination_schedule,
        schedule::update_vaccination_schedule,
        schedule::patch_vaccination_schedule,
        schedule::delete_vaccination_schedule,
    )))
    .service(web::scope("/api/v1/checks_schedules").service((
        schedule::list_checks_schedules,
        schedule::create_checks_schedule,
        schedule::get_checks_schedule,
        schedule::update_checks_schedule,
        schedule::patch_checks_schedule,
        schedule::delete_checks_schedule,
    )))
    .service(web::scope("/api/v1/injury_reports").service((
        schedule::list_injury_reports,
        schedule::create_injury_report,
        schedule::get_injury_report,
        schedule::update_injury_report,
        schedule::patch_injury_report,
        schedule::delete_injury_report,
    )))
    .service(web::scope("/api/v1/pet_adoptions").service((
        schedule::list_pet_adoptions,
        schedule::create_pet_adoption,
        schedule::get_pet_adoption,
        schedule::update_pet_adoption,
        schedule::patch_pet_adoption,
        schedule::delete_pet_adoption,
    )));
}
