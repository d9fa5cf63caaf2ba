//! Pet management: the core entity every schedule row hangs off.

use super::ensure_valid;
use crate::{
    models, repo,
    rest::{
        errors::{RegistryError, from_repo_error},
        schemas,
    },
};

pub async fn list_pets(
    repo: &repo::ImplShelterRepo,
) -> Result<Vec<models::pet::Pet>, RegistryError> {
    repo.get_all_pets().await.map_err(from_repo_error)
}

pub async fn get_pet(
    pet_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<models::pet::Pet, RegistryError> {
    repo.get_pet_by_id(pet_id)
        .await
        .map_err(from_repo_error)?
        .ok_or(RegistryError::NotFound)
}

pub async fn create_pet(
    payload: schemas::pet::PetPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::pet::Pet, RegistryError> {
    ensure_valid(payload.validate_create())?;

    let pet_id = repo
        .insert_pet(&payload.into_new_pet())
        .await
        .map_err(from_repo_error)?;

    get_pet(pet_id, repo).await
}

/// Partial update: absent payload fields keep the stored values.
pub async fn update_pet(
    pet_id: i64,
    payload: schemas::pet::PetPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::pet::Pet, RegistryError> {
    ensure_valid(payload.validate_update())?;

    let mut pet = get_pet(pet_id, repo).await?;
    payload.apply_to(&mut pet);

    repo.update_pet(&pet).await.map_err(from_repo_error)?;

    get_pet(pet_id, repo).await
}

pub async fn delete_pet(pet_id: i64, repo: &repo::ImplShelterRepo) -> Result<(), RegistryError> {
    if !repo.delete_pet(pet_id).await.map_err(from_repo_error)? {
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

    fn create_test_pet(id: i64, name: &str) -> models::pet::Pet {
        models::pet::Pet {
            id,
            name: name.to_string(),
            pet_type: "dog".to_string(),
            breed: "mutt".to_string(),
            gender: models::pet::Gender::Female,
            birthday: NaiveDate::from_ymd_opt(2021, 5, 20).unwrap(),
            admission_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            location_id: None,
            picture: None,
            nickname: None,
            notes: None,
            adopted: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[ntex::test]
    async fn test_create_pet_missing_required_fields_never_hits_the_store() {
        let mock_repo = MockShelterRepo::new();
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(mock_repo);

        let result = create_pet(schemas::pet::PetPayload::default(), &mock_repo).await;

        match result {
            Err(RegistryError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("name")));
                assert!(errors.iter().any(|e| e.contains("birthday")));
            }
            other => panic!("expected validation failure, got {:?}", other.map(|p| p.id)),
        }
    }

    #[ntex::test]
    async fn test_create_pet_returns_persisted_record() {
        let mut mock_repo = MockShelterRepo::new();
        mock_repo
            .expect_insert_pet()
            .times(1)
            .returning(|_| Box::pin(async move { Ok(7) }));
        mock_repo
            .expect_get_pet_by_id()
            .with(eq(7))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(Some(create_test_pet(7, "Luna"))) }));
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(mock_repo);

        let payload = schemas::pet::PetPayload {
            name: Some("Luna".into()),
            pet_type: Some("dog".into()),
            breed: Some("mutt".into()),
            gender: Some(models::pet::Gender::Female),
            birthday: Some(NaiveDate::from_ymd_opt(2021, 5, 20).unwrap()),
            admission_date: Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
            ..schemas::pet::PetPayload::default()
        };

        let result = create_pet(payload, &mock_repo).await;

        assert!(result.is_ok_and(|pet| pet.id == 7 && pet.name == "Luna"));
    }

    #[ntex::test]
    async fn test_update_pet_merges_partial_payload() {
        let mut mock_repo = MockShelterRepo::new();
        mock_repo
            .expect_get_pet_by_id()
            .with(eq(3))
            .times(2)
            .returning(|_| Box::pin(async move { Ok(Some(create_test_pet(3, "Rocky"))) }));
        mock_repo
            .expect_update_pet()
            .withf(|pet| pet.name == "Rocky" && pet.nickname.as_deref() == Some("Rock"))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(()) }));
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(mock_repo);

        let payload = schemas::pet::PetPayload {
            nickname: Some("Rock".into()),
            ..schemas::pet::PetPayload::default()
        };

        let result = update_pet(3, payload, &mock_repo).await;

        assert!(result.is_ok());
    }

    #[ntex::test]
    async fn test_get_pet_not_found() {
        let mut mock_repo = MockShelterRepo::new();
        mock_repo
            .expect_get_pet_by_id()
            .with(eq(99))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(None) }));
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(mock_repo);

        assert!(matches!(
            get_pet(99, &mock_repo).await,
            Err(RegistryError::NotFound)
        ));
    }

    #[ntex::test]
    async fn test_delete_pet_not_found() {
        let mut mock_repo = MockShelterRepo::new();
        mock_repo
            .expect_delete_pet()
            .with(eq(99))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(false) }));
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(mock_repo);

        assert!(matches!(
            delete_pet(99, &mock_repo).await,
            Err(RegistryError::NotFound)
        ));
    }
}
