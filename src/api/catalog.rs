//! Catalog maintenance: frequencies, foods, medications, vaccines,
//! injuries, and recurring checks.

use super::ensure_valid;
use crate::{
    models, repo,
    rest::{
        errors::{RegistryError, from_repo_error},
        schemas,
    },
};

// -- frequencies -------------------------------------------------------

pub async fn list_frequencies(
    repo: &repo::ImplShelterRepo,
) -> Result<Vec<models::catalog::Frequency>, RegistryError> {
    repo.get_all_frequencies().await.map_err(from_repo_error)
}

pub async fn get_frequency(
    frequency_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<models::catalog::Frequency, RegistryError> {
    repo.get_frequency_by_id(frequency_id)
        .await
        .map_err(from_repo_error)?
        .ok_or(RegistryError::NotFound)
}

/// Frequency names are globally unique; a named message beats the bare
/// constraint failure the store would raise.
async fn ensure_frequency_name_free(
    name: &str,
    current_id: Option<i64>,
    repo: &repo::ImplShelterRepo,
) -> Result<(), RegistryError> {
    if let Some(existing) = repo
        .get_frequency_by_name(name)
        .await
        .map_err(from_repo_error)?
    {
        if Some(existing.id) != current_id {
            return Err(RegistryError::Validation(vec![
                "name has already been taken".into(),
            ]));
        }
    }
    Ok(())
}

pub async fn create_frequency(
    payload: schemas::catalog::FrequencyPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::catalog::Frequency, RegistryError> {
    ensure_valid(payload.validate_create())?;

    let frequency = payload.into_new_frequency();
    ensure_frequency_name_free(&frequency.name, None, repo).await?;

    let frequency_id = repo
        .insert_frequency(&frequency)
        .await
        .map_err(from_repo_error)?;

    get_frequency(frequency_id, repo).await
}

pub async fn update_frequency(
    frequency_id: i64,
    payload: schemas::catalog::FrequencyPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::catalog::Frequency, RegistryError> {
    ensure_valid(payload.validate_update())?;

    let mut frequency = get_frequency(frequency_id, repo).await?;
    payload.apply_to(&mut frequency);
    ensure_frequency_name_free(&frequency.name, Some(frequency_id), repo).await?;

    repo.update_frequency(&frequency)
        .await
        .map_err(from_repo_error)?;

    get_frequency(frequency_id, repo).await
}

/// Hard delete. The schema cascade takes the dependent vaccines, checks
/// and schedule rows along.
pub async fn delete_frequency(
    frequency_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<(), RegistryError> {
    if !repo
        .delete_frequency(frequency_id)
        .await
        .map_err(from_repo_error)?
    {
        return Err(RegistryError::NotFound);
    }
    Ok(())
}

// -- foods -------------------------------------------------------------

pub async fn list_foods(
    repo: &repo::ImplShelterRepo,
) -> Result<Vec<models::catalog::Food>, RegistryError> {
    repo.get_all_foods().await.map_err(from_repo_error)
}

pub async fn get_food(
    food_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<models::catalog::Food, RegistryError> {
    repo.get_food_by_id(food_id)
        .await
        .map_err(from_repo_error)?
        .ok_or(RegistryError::NotFound)
}

pub async fn create_food(
    payload: schemas::catalog::FoodPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::catalog::Food, RegistryError> {
    ensure_valid(payload.validate_create())?;

    let food_id = repo
        .insert_food(&payload.into_new_food())
        .await
        .map_err(from_repo_error)?;

    get_food(food_id, repo).await
}

pub async fn update_food(
    food_id: i64,
    payload: schemas::catalog::FoodPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::catalog::Food, RegistryError> {
    ensure_valid(payload.validate_update())?;

    let mut food = get_food(food_id, repo).await?;
    payload.apply_to(&mut food);

    repo.update_food(&food).await.map_err(from_repo_error)?;

    get_food(food_id, repo).await
}

pub async fn delete_food(food_id: i64, repo: &repo::ImplShelterRepo) -> Result<(), RegistryError> {
    if !repo.delete_food(food_id).await.map_err(from_repo_error)? {
        return Err(RegistryError::NotFound);
    }
    Ok(())
}

// -- medications -------------------------------------------------------

pub async fn list_medications(
    repo: &repo::ImplShelterRepo,
) -> Result<Vec<models::catalog::Medication>, RegistryError> {
    repo.get_all_medications().await.map_err(from_repo_error)
}

pub async fn get_medication(
    medication_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<models::catalog::Medication, RegistryError> {
    repo.get_medication_by_id(medication_id)
        .await
        .map_err(from_repo_error)?
        .ok_or(RegistryError::NotFound)
}

pub async fn create_medication(
    payload: schemas::catalog::MedicationPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::catalog::Medication, RegistryError> {
    ensure_valid(payload.validate_create())?;

    let medication_id = repo
        .insert_medication(&payload.into_new_medication())
        .await
        .map_err(from_repo_error)?;

    get_medication(medication_id, repo).await
}

pub async fn update_medication(
    medication_id: i64,
    payload: schemas::catalog::MedicationPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::catalog::Medication, RegistryError> {
    ensure_valid(payload.validate_update())?;

    let mut medication = get_medication(medication_id, repo).await?;
    payload.apply_to(&mut medication);

    repo.update_medication(&medication)
        .await
        .map_err(from_repo_error)?;

    get_medication(medication_id, repo).await
}

pub async fn delete_medication(
    medication_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<(), RegistryError> {
    if !repo
        .delete_medication(medication_id)
        .await
        .map_err(from_repo_error)?
    {
        return Err(RegistryError::NotFound);
    }
    Ok(())
}

// -- vaccines ----------------------------------------------------------

pub async fn list_vaccines(
    repo: &repo::ImplShelterRepo,
) -> Result<Vec<models::catalog::Vaccine>, RegistryError> {
    repo.get_all_vaccines().await.map_err(from_repo_error)
}

pub async fn get_vaccine(
    vaccine_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<models::catalog::Vaccine, RegistryError> {
    repo.get_vaccine_by_id(vaccine_id)
        .await
        .map_err(from_repo_error)?
        .ok_or(RegistryError::NotFound)
}

async fn ensure_vaccine_name_free(
    name: &str,
    current_id: Option<i64>,
    repo: &repo::ImplShelterRepo,
) -> Result<(), RegistryError> {
    if let Some(existing) = repo
        .get_vaccine_by_name(name)
        .await
        .map_err(from_repo_error)?
    {
        if Some(existing.id) != current_id {
            return Err(RegistryError::Validation(vec![
                "name has already been taken".into(),
            ]));
        }
    }
    Ok(())
}

pub async fn create_vaccine(
    payload: schemas::catalog::VaccinePayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::catalog::Vaccine, RegistryError> {
    ensure_valid(payload.validate_create())?;

    let vaccine = payload.into_new_vaccine();
    ensure_vaccine_name_free(&vaccine.name, None, repo).await?;

    let vaccine_id = repo
        .insert_vaccine(&vaccine)
        .await
        .map_err(from_repo_error)?;

    get_vaccine(vaccine_id, repo).await
}

pub async fn update_vaccine(
    vaccine_id: i64,
    payload: schemas::catalog::VaccinePayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::catalog::Vaccine, RegistryError> {
    ensure_valid(payload.validate_update())?;

    let mut vaccine = get_vaccine(vaccine_id, repo).await?;
    payload.apply_to(&mut vaccine);
    ensure_vaccine_name_free(&vaccine.name, Some(vaccine_id), repo).await?;

    repo.update_vaccine(&vaccine)
        .await
        .map_err(from_repo_error)?;

    get_vaccine(vaccine_id, repo).await
}

pub async fn delete_vaccine(
    vaccine_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<(), RegistryError> {
    if !repo
        .delete_vaccine(vaccine_id)
        .await
        .map_err(from_repo_error)?
    {
        return Err(RegistryError::NotFound);
    }
    Ok(())
}

// -- injuries ----------------------------------------------------------

pub async fn list_injuries(
    repo: &repo::ImplShelterRepo,
) -> Result<Vec<models::catalog::Injury>, RegistryError> {
    repo.get_all_injuries().await.map_err(from_repo_error)
}

pub async fn get_injury(
    injury_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<models::catalog::Injury, RegistryError> {
    repo.get_injury_by_id(injury_id)
        .await
        .map_err(from_repo_error)?
        .ok_or(RegistryError::NotFound)
}

pub async fn create_injury(
    payload: schemas::catalog::InjuryPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::catalog::Injury, RegistryError> {
    ensure_valid(payload.validate_create())?;

    let injury_id = repo
        .insert_injury(&payload.into_new_injury())
        .await
        .map_err(from_repo_error)?;

    get_injury(injury_id, repo).await
}

pub async fn update_injury(
    injury_id: i64,
    payload: schemas::catalog::InjuryPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::catalog::Injury, RegistryError> {
    ensure_valid(payload.validate_update())?;

    let mut injury = get_injury(injury_id, repo).await?;
    payload.apply_to(&mut injury);

    repo.update_injury(&injury).await.map_err(from_repo_error)?;

    get_injury(injury_id, repo).await
}

pub async fn delete_injury(
    injury_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<(), RegistryError> {
    if !repo
        .delete_injury(injury_id)
        .await
        .map_err(from_repo_error)?
    {
        return Err(RegistryError::NotFound);
    }
    Ok(())
}

// -- checks ------------------------------------------------------------

pub async fn list_checks(
    repo: &repo::ImplShelterRepo,
) -> Result<Vec<models::catalog::Check>, RegistryError> {
    repo.get_all_checks().await.map_err(from_repo_error)
}

pub async fn get_check(
    check_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<models::catalog::Check, RegistryError> {
    repo.get_check_by_id(check_id)
        .await
        .map_err(from_repo_error)?
        .ok_or(RegistryError::NotFound)
}

pub async fn create_check(
    payload: schemas::catalog::CheckPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::catalog::Check, RegistryError> {
    ensure_valid(payload.validate_create())?;

    let check_id = repo
        .insert_check(&payload.into_new_check())
        .await
        .map_err(from_repo_error)?;

    get_check(check_id, repo).await
}

pub async fn update_check(
    check_id: i64,
    payload: schemas::catalog::CheckPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::catalog::Check, RegistryError> {
    ensure_valid(payload.validate_update())?;

    let mut check = get_check(check_id, repo).await?;
    payload.apply_to(&mut check);

    repo.update_check(&check).await.map_err(from_repo_error)?;

    get_check(check_id, repo).await
}

pub async fn delete_check(
    check_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<(), RegistryError> {
    if !repo
        .delete_check(check_id)
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
    use chrono::Utc;
    use mockall::predicate::*;

    fn create_test_frequency(id: i64, name: &str, interval_days: i64) -> models::catalog::Frequency {
        models::catalog::Frequency {
            id,
            name: name.to_string(),
            interval_days,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn create_test_vaccine(id: i64, name: &str, frequency_id: i64) -> models::catalog::Vaccine {
        models::catalog::Vaccine {
            id,
            name: name.to_string(),
            mandatory: true,
            frequency_id,
            notes: None,
            frequency: create_test_frequency(frequency_id, "Weekly", 7),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[ntex::test]
    async fn test_create_frequency_rejects_taken_name() {
        let mut mock_repo = MockShelterRepo::new();
        mock_repo
            .expect_get_frequency_by_name()
            .with(eq("Weekly"))
            .times(1)
            .returning(|_| {
                Box::pin(async move { Ok(Some(create_test_frequency(1, "Weekly", 7))) })
            });
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(mock_repo);

        let payload = schemas::catalog::FrequencyPayload {
            name: Some("Weekly".into()),
            interval_days: Some(7),
        };

        assert!(matches!(
            create_frequency(payload, &mock_repo).await,
            Err(RegistryError::Validation(errors)) if errors == vec!["name has already been taken"]
        ));
    }

    #[ntex::test]
    async fn test_create_frequency_returns_persisted_record() {
        let mut mock_repo = MockShelterRepo::new();
        mock_repo
            .expect_get_frequency_by_name()
            .times(1)
            .returning(|_| Box::pin(async move { Ok(None) }));
        mock_repo
            .expect_insert_frequency()
            .withf(|f| f.name == "Weekly" && f.interval_days == 7)
            .times(1)
            .returning(|_| Box::pin(async move { Ok(5) }));
        mock_repo
            .expect_get_frequency_by_id()
            .with(eq(5))
            .times(1)
            .returning(|_| {
                Box::pin(async move { Ok(Some(create_test_frequency(5, "Weekly", 7))) })
            });
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(mock_repo);

        let payload = schemas::catalog::FrequencyPayload {
            name: Some("Weekly".into()),
            interval_days: Some(7),
        };

        let result = create_frequency(payload, &mock_repo).await;

        assert!(result.is_ok_and(|f| f.id == 5 && f.interval_days == 7));
    }

    #[ntex::test]
    async fn test_update_frequency_allows_keeping_own_name() {
        let mut mock_repo = MockShelterRepo::new();
        mock_repo
            .expect_get_frequency_by_id()
            .with(eq(5))
            .times(2)
            .returning(|_| {
                Box::pin(async move { Ok(Some(create_test_frequency(5, "Weekly", 7))) })
            });
        mock_repo
            .expect_get_frequency_by_name()
            .with(eq("Weekly"))
            .times(1)
            .returning(|_| {
                Box::pin(async move { Ok(Some(create_test_frequency(5, "Weekly", 7))) })
            });
        mock_repo
            .expect_update_frequency()
            .withf(|f| f.interval_days == 10)
            .times(1)
            .returning(|_| Box::pin(async move { Ok(()) }));
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(mock_repo);

        let payload = schemas::catalog::FrequencyPayload {
            name: None,
            interval_days: Some(10),
        };

        assert!(update_frequency(5, payload, &mock_repo).await.is_ok());
    }

    #[ntex::test]
    async fn test_create_vaccine_requires_unique_name() {
        let mut mock_repo = MockShelterRepo::new();
        mock_repo
            .expect_get_vaccine_by_name()
            .with(eq("Rabies"))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(Some(create_test_vaccine(1, "Rabies", 1))) }));
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(mock_repo);

        let payload = schemas::catalog::VaccinePayload {
            name: Some("Rabies".into()),
            mandatory: Some(true),
            frequency_id: Some(1),
            notes: None,
        };

        assert!(matches!(
            create_vaccine(payload, &mock_repo).await,
            Err(RegistryError::Validation(_))
        ));
    }

    #[ntex::test]
    async fn test_get_vaccine_embeds_frequency() {
        let mut mock_repo = MockShelterRepo::new();
        mock_repo
            .expect_get_vaccine_by_id()
            .with(eq(2))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(Some(create_test_vaccine(2, "Rabies", 1))) }));
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(mock_repo);

        let result = get_vaccine(2, &mock_repo).await;

        assert!(result.is_ok_and(|v| v.frequency.interval_days == 7));
    }

    #[ntex::test]
    async fn test_delete_frequency_not_found() {
        let mut mock_repo = MockShelterRepo::new();
        mock_repo
            .expect_delete_frequency()
            .with(eq(42))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(false) }));
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(mock_repo);

        assert!(matches!(
            delete_frequency(42, &mock_repo).await,
            Err(RegistryError::NotFound)
        ));
    }
}
