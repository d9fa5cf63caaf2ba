//! Shelter locations. Pets reference a location optionally and survive its
//! deletion with a nullified reference.

use super::ensure_valid;
use crate::{
    models, repo,
    rest::{
        errors::{RegistryError, from_repo_error},
        schemas,
    },
};

pub async fn list_locations(
    repo: &repo::ImplShelterRepo,
) -> Result<Vec<models::location::Location>, RegistryError> {
    repo.get_all_locations().await.map_err(from_repo_error)
}

pub async fn get_location(
    location_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<models::location::Location, RegistryError> {
    repo.get_location_by_id(location_id)
        .await
        .map_err(from_repo_error)?
        .ok_or(RegistryError::NotFound)
}

pub async fn create_location(
    payload: schemas::location::LocationPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::location::Location, RegistryError> {
    ensure_valid(payload.validate_create())?;

    let location_id = repo
        .insert_location(&payload.into_new_location())
        .await
        .map_err(from_repo_error)?;

    get_location(location_id, repo).await
}

pub async fn update_location(
    location_id: i64,
    payload: schemas::location::LocationPayload,
    repo: &repo::ImplShelterRepo,
) -> Result<models::location::Location, RegistryError> {
    ensure_valid(payload.validate_update())?;

    let mut location = get_location(location_id, repo).await?;
    payload.apply_to(&mut location);

    repo.update_location(&location)
        .await
        .map_err(from_repo_error)?;

    get_location(location_id, repo).await
}

pub async fn delete_location(
    location_id: i64,
    repo: &repo::ImplShelterRepo,
) -> Result<(), RegistryError> {
    if !repo
        .delete_location(location_id)
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

    fn create_test_location(id: i64, name: &str) -> models::location::Location {
        models::location::Location {
            id,
            name: name.to_string(),
            address: Some("12 Kennel Row".to_string()),
            phone: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[ntex::test]
    async fn test_create_location_requires_name() {
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(MockShelterRepo::new());

        let result =
            create_location(schemas::location::LocationPayload::default(), &mock_repo).await;

        assert!(matches!(
            result,
            Err(RegistryError::Validation(errors)) if errors == vec!["name is required"]
        ));
    }

    #[ntex::test]
    async fn test_delete_location_reports_not_found() {
        let mut mock_repo = MockShelterRepo::new();
        mock_repo
            .expect_delete_location()
            .with(eq(4))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(false) }));
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(mock_repo);

        assert!(matches!(
            delete_location(4, &mock_repo).await,
            Err(RegistryError::NotFound)
        ));
    }

    #[ntex::test]
    async fn test_get_location_found() {
        let mut mock_repo = MockShelterRepo::new();
        mock_repo
            .expect_get_location_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(Some(create_test_location(1, "Main barn"))) }));
        let mock_repo: Box<dyn repo::ShelterRepo> = Box::new(mock_repo);

        let result = get_location(1, &mock_repo).await;

        assert!(result.is_ok_and(|l| l.name == "Main barn"));
    }
}
