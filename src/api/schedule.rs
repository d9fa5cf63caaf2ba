//! Schedule and join rows: pet foods, medication/vaccination/check
//! schedules, injury reports, and adoptions.

use super::ensure_valid;
use crate::{
    models, repo,
    rest::{
        errors::{RegistryError, from_repo_error},
        schemas,
    },
};

// -- pet foods ---------------------------------------------------------

pub async fn list_pet_foods(
    repo: &repo::ImplShelterRepo,
) -> Result<Vec<models::schedule::PetFood>, RegistryError> {
    repo.get_all_pet_foods().await.map_err(from_repo_error)
}

pub async fn get_pet_food(
    pet_food_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<models::schedule::PetFood, RegistryError> {
    repo.get_pet_food_by_id(pet_food_id)
        .await
        .map_err(from_repo_error)?
        .ok_or(RegistryError::NotFound)
}

pub async fn create_pet_food(
    payload: schemas::schedule::PetFoodPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::schedule::PetFood, RegistryError> {
    ensure_valid(payload.validate_create())?;

    let pet_food_id = repo
        .insert_pet_food(&payload.into_new_pet_food())
        .await
        .map_err(from_repo_error)?;

    get_pet_food(pet_food_id, repo).await
}

pub async fn update_pet_food(
    pet_food_id: i64,
    payload: schemas::schedule::PetFoodPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::schedule::PetFood, RegistryError> {
    ensure_valid(payload.validate_update())?;

    let mut pet_food = get_pet_food(pet_food_id, repo).await?;
    payload.apply_to(&mut pet_food);

    repo.update_pet_food(&pet_food)
        .await
        .map_err(from_repo_error)?;

    get_pet_food(pet_food_id, repo).await
}

pub async fn delete_pet_food(
    pet_food_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<(), RegistryError> {
    if !repo
        .delete_pet_food(pet_food_id)
        .await
        .map_err(from_repo_error)?
    {
        return Err(RegistryError::NotFound);
    }
    Ok(())
}

// -- medication schedules ----------------------------------------------

/// An end date may never precede the start date; checked on the merged
/// record so a partial update cannot sneak an inverted range in.
fn medication_date_errors(schedule: &models::schedule::MedicationSchedule) -> Vec<String> {
    if let Some(date_ended) = schedule.date_ended {
        if date_ended < schedule.date_started {
            return vec!["date_ended must not precede date_started".into()];
        }
    }
    vec![]
}

pub async fn list_medication_schedules(
    repo: &repo::ImplShelterRepo,
) -> Result<Vec<models::schedule::MedicationSchedule>, RegistryError> {
    repo.get_all_medication_schedules()
        .await
        .map_err(from_repo_error)
}

pub async fn get_medication_schedule(
    schedule_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<models::schedule::MedicationSchedule, RegistryError> {
    repo.get_medication_schedule_by_id(schedule_id)
        .await
        .map_err(from_repo_error)?
        .ok_or(RegistryError::NotFound)
}

pub async fn create_medication_schedule(
    payload: schemas::schedule::MedicationSchedulePayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::schedule::MedicationSchedule, RegistryError> {
    ensure_valid(payload.validate_create())?;

    let schedule = payload.into_new_schedule();
    ensure_valid(medication_date_errors(&schedule))?;

    let schedule_id = repo
        .insert_medication_schedule(&schedule)
        .await
        .map_err(from_repo_error)?;

    get_medication_schedule(schedule_id, repo).await
}

pub async fn update_medication_schedule(
    schedule_id: i64,
    payload: schemas::schedule::MedicationSchedulePayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::schedule::MedicationSchedule, RegistryError> {
    ensure_valid(payload.validate_update())?;

    let mut schedule = get_medication_schedule(schedule_id, repo).await?;
    payload.apply_to(&mut schedule);
    ensure_valid(medication_date_errors(&schedule))?;

    repo.update_medication_schedule(&schedule)
        .await
        .map_err(from_repo_error)?;

    get_medication_schedule(schedule_id, repo).await
}

pub async fn delete_medication_schedule(
    schedule_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<(), RegistryError> {
    if !repo
        .delete_medication_schedule(schedule_id)
        .await
        .map_err(from_repo_error)?
    {
        return Err(RegistryError::NotFound);
    }
    Ok(())
}

// -- vaccination schedules ---------------------------------------------

pub async fn list_vaccination_schedules(
    repo: &repo::ImplShelterRepo,
) -> Result<Vec<models::schedule::VaccinationSchedule>, RegistryError> {
    repo.get_all_vaccination_schedules()
        .await
        .map_err(from_repo_error)
}

pub async fn get_vaccination_schedule(
    schedule_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<models::schedule::VaccinationSchedule, RegistryError> {
    repo.get_vaccination_schedule_by_id(schedule_id)
        .await
        .map_err(from_repo_error)?
        .ok_or(RegistryError::NotFound)
}

pub async fn create_vaccination_schedule(
    payload: schemas::schedule::VaccinationSchedulePayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::schedule::VaccinationSchedule, RegistryError> {
    ensure_valid(payload.validate_create())?;

    let schedule_id = repo
        .insert_vaccination_schedule(&payload.into_new_schedule())
        .await
        .map_err(from_repo_error)?;

    get_vaccination_schedule(schedule_id, repo).await
}

pub async fn update_vaccination_schedule(
    schedule_id: i64,
    payload: schemas::schedule::VaccinationSchedulePayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::schedule::VaccinationSchedule, RegistryError> {
    ensure_valid(payload.validate_update())?;

    let mut schedule = get_vaccination_schedule(schedule_id, repo).await?;
    payload.apply_to(&mut schedule);

    repo.update_vaccination_schedule(&schedule)
        .await
        .map_err(from_repo_error)?;

    get_vaccination_schedule(schedule_id, repo).await
}

pub async fn delete_vaccination_schedule(
    schedule_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<(), RegistryError> {
    if !repo
        .delete_vaccination_schedule(schedule_id)
        .await
        .map_err(from_repo_error)?
    {
        return Err(RegistryError::NotFound);
    }
    Ok(())
}

// -- check schedules ---------------------------------------------------

pub async fn list_checks_schedules(
    repo: &repo::ImplShelterRepo,
) -> Result<Vec<models::schedule::ChecksSchedule>, RegistryError> {
    repo.get_all_checks_schedules()
        .await
        .map_err(from_repo_error)
}

pub async fn get_checks_schedule(
    schedule_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<models::schedule::ChecksSchedule, RegistryError> {
    repo.get_checks_schedule_by_id(schedule_id)
        .await
        .map_err(from_repo_error)?
        .ok_or(RegistryError::NotFound)
}

pub async fn create_checks_schedule(
    payload: schemas::schedule::ChecksSchedulePayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::schedule::ChecksSchedule, RegistryError> {
    ensure_valid(payload.validate_create())?;

    let schedule_id = repo
        .insert_checks_schedule(&payload.into_new_schedule())
        .await
        .map_err(from_repo_error)?;

    get_checks_schedule(schedule_id, repo).await
}

pub async fn update_checks_schedule(
    schedule_id: i64,
    payload: schemas::schedule::ChecksSchedulePayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::schedule::ChecksSchedule, RegistryError> {
    ensure_valid(payload.validate_update())?;

    let mut schedule = get_checks_schedule(schedule_id, repo).await?;
    payload.apply_to(&mut schedule);

    repo.update_checks_schedule(&schedule)
        .await
        .map_err(from_repo_error)?;

    get_checks_schedule(schedule_id, repo).await
}

pub async fn delete_checks_schedule(
    schedule_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<(), RegistryError> {
    if !repo
        .delete_checks_schedule(schedule_id)
        .await
        .map_err(from_repo_error)?
    {
        return Err(RegistryError::NotFound);
    }
    Ok(())
}

// -- injury reports ----------------------------------------------------

pub async fn list_injury_reports(
    repo: &repo::ImplShelterRepo,
) -> Result<Vec<models::schedule::InjuryReport>, RegistryError> {
    repo.get_all_injury_reports().await.map_err(from_repo_error)
}

pub async fn get_injury_report(
    report_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<models::schedule::InjuryReport, RegistryError> {
    repo.get_injury_report_by_id(report_id)
        .await
        .map_err(from_repo_error)?
        .ok_or(RegistryError::NotFound)
}

pub async fn create_injury_report(
    payload: schemas::schedule::InjuryReportPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::schedule::InjuryReport, RegistryError> {
    ensure_valid(payload.validate_create())?;

    let report_id = repo
        .insert_injury_report(&payload.into_new_report())
        .await
        .map_err(from_repo_error)?;

    get_injury_report(report_id, repo).await
}

pub async fn update_injury_report(
    report_id: i64,
    payload: schemas::schedule::InjuryReportPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::schedule::InjuryReport, RegistryError> {
    ensure_valid(payload.validate_update())?;

    let mut report = get_injury_report(report_id, repo).await?;
    payload.apply_to(&mut report);

    repo.update_injury_report(&report)
        .await
        .map_err(from_repo_error)?;

    get_injury_report(report_id, repo).await
}

pub async fn delete_injury_report(
    report_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<(), RegistryError> {
    if !repo
        .delete_injury_report(report_id)
        .await
        .map_err(from_repo_error)?
    {
        return Err(RegistryError::NotFound);
    }
    Ok(())
}

// -- adoptions ---------------------------------------------------------

pub async fn list_pet_adoptions(
    repo: &repo::ImplShelterRepo,
) -> Result<Vec<models::schedule::PetAdoption>, RegistryError> {
    repo.get_all_pet_adoptions().await.map_err(from_repo_error)
}

pub async fn get_pet_adoption(
    adoption_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<models::schedule::PetAdoption, RegistryError> {
    repo.get_pet_adoption_by_id(adoption_id)
        .await
        .map_err(from_repo_error)?
        .ok_or(RegistryError::NotFound)
}

pub async fn create_pet_adoption(
    payload: schemas::schedule::PetAdoptionPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::schedule::PetAdoption, RegistryError> {
    ensure_valid(payload.validate_create())?;

    let adoption = payload.into_new_adoption();

    // one adoption record per pet
    if repo
        .get_pet_adoption_by_pet_id(adoption.pet_id)
        .await
        .map_err(from_repo_error)?
        .is_some()
    {
        return Err(RegistryError::Validation(vec![
            "pet already has an adoption record".into(),
        ]));
    }

    let adoption_id = repo
        .insert_pet_adoption(&adoption)
        .await
        .map_err(from_repo_error)?;

    get_pet_adoption(adoption_id, repo).await
}

pub async fn update_pet_adoption(
    adoption_id: i64,
    payload: schemas::schedule::PetAdoptionPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::schedule::PetAdoption, RegistryError> {
    ensure_valid(payload.validate_update())?;

    let mut adoption = get_pet_adoption(adoption_id, repo).await?;
    payload.apply_to(&mut adoption);

    repo.update_pet_adoption(&adoption)
        .await
        .map_err(from_repo_error)?;

    get_pet_adoption(adoption_id, repo).await
}

pub async fn delete_pet_adoption(
    adoption_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<(), RegistryError> {
    if !repo
        .delete_pet_adoption(adoption_id)
        .await
        .map_err(from_repo_error)?
    {
        return Err(RegistryError::NotFound);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MockShelterRepo;
    use chrono::{NaiveDate, Utc};
    use mockall::predicate::*;

    fn create_test_medication_schedule(id: i64) -> models::schedule::MedicationSchedule {
        models::schedule::MedicationSchedule {
            id,
            pet_id: 1,
            medication_id: 2,
            frequency_id: 3,
            date_started: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            date_ended: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn create_test_adoption(id: i64, pet_id: i64) -> models::schedule::PetAdoption {
        models::schedule::PetAdoption {
            id,
            pet_id,
            adopter_name: "Sam Reyes".to_string(),
            adoption_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[ntex::test]
    async fn test_create_medication_schedule_rejects_inverted_dates() {
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(MockShelterRepo::new());

        let payload = schemas::schedule::MedicationSchedulePayload {
            pet_id: Some(1),
            medication_id: Some(2),
            frequency_id: Some(3),
            date_started: Some(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
            date_ended: Some(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()),
            notes: None,
        };

        assert!(matches!(
            create_medication_schedule(payload, &mock_repo).await,
            Err(RegistryError::Validation(errors))
                if errors == vec!["date_ended must not precede date_started"]
        ));
    }

    #[ntex::test]
    async fn test_update_medication_schedule_checks_merged_dates() {
        let mut mock_repo = MockShelterRepo::new();
        mock_repo
            .expect_get_medication_schedule_by_id()
            .with(eq(8))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(Some(create_test_medication_schedule(8))) }));
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(mock_repo);

        // only date_ended arrives; the stored date_started makes it invalid
        let payload = schemas::schedule::MedicationSchedulePayload {
            date_ended: Some(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()),
            ..schemas::schedule::MedicationSchedulePayload::default()
        };

        assert!(matches!(
            update_medication_schedule(8, payload, &mock_repo).await,
            Err(RegistryError::Validation(_))
        ));
    }

    #[ntex::test]
    async fn test_create_vaccination_schedule_rejects_future_date() {
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(MockShelterRepo::new());

        let payload = schemas::schedule::VaccinationSchedulePayload {
            pet_id: Some(1),
            vaccine_id: Some(2),
            date_given: Some(Utc::now().date_naive() + chrono::Duration::days(1)),
            ..schemas::schedule::VaccinationSchedulePayload::default()
        };

        assert!(matches!(
            create_vaccination_schedule(payload, &mock_repo).await,
            Err(RegistryError::Validation(errors))
                if errors == vec!["date_given must not be in the future"]
        ));
    }

    #[ntex::test]
    async fn test_create_adoption_rejects_second_record_for_pet() {
        let mut mock_repo = MockShelterRepo::new();
        mock_repo
            .expect_get_pet_adoption_by_pet_id()
            .with(eq(4))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(Some(create_test_adoption(1, 4))) }));
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(mock_repo);

        let payload = schemas::schedule::PetAdoptionPayload {
            pet_id: Some(4),
            adopter_name: Some("Sam Reyes".into()),
            adoption_date: Some(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()),
            notes: None,
        };

        assert!(matches!(
            create_pet_adoption(payload, &mock_repo).await,
            Err(RegistryError::Validation(errors))
                if errors == vec!["pet already has an adoption record"]
        ));
    }

    #[ntex::test]
    async fn test_delete_injury_report_not_found() {
        let mut mock_repo = MockShelterRepo::new();
        mock_repo
            .expect_delete_injury_report()
            .with(eq(77))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(false) }));
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(mock_repo);

        assert!(matches!(
            delete_injury_report(77, &mock_repo).await,
            Err(RegistryError::NotFound)
        ));
    }
}
