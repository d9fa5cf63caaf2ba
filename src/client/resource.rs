//! Generic collection-resource abstraction.
//!
//! Manages an in-memory list of records for one endpoint on top of the
//! fetch abstraction. Local state only ever mutates on a confirmed success;
//! every failure is normalized into a message for the caller to present.

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use super::http::{ApiClient, ClientError, RequestConfig};
use crate::models;

/// Transport seam so the collection logic can be exercised without a
/// network.
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait ApiTransport {
    async fn fetch(&self, path: &str, config: RequestConfig)
        -> Result<Option<Value>, ClientError>;
}

#[async_trait]
impl ApiTransport for ApiClient {
    async fn fetch(
        &self,
        path: &str,
        config: RequestConfig,
    ) -> Result<Option<Value>, ClientError> {
        ApiClient::fetch(self, path, config).await
    }
}

pub type ImplApiTransport = Box<dyn ApiTransport>;

/// A record of a uniform shape: serializable both ways with an integer id.
pub trait ResourceRecord: DeserializeOwned + Serialize + Clone {
    fn record_id(&self) -> i64;
}

impl ResourceRecord for models::pet::Pet {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl ResourceRecord for models::location::Location {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl ResourceRecord for models::catalog::Frequency {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl ResourceRecord for models::catalog::Food {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl ResourceRecord for models::catalog::Medication {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl ResourceRecord for models::catalog::Vaccine {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl ResourceRecord for models::catalog::Injury {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl ResourceRecord for models::catalog::Check {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl ResourceRecord for models::schedule::PetFood {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl ResourceRecord for models::schedule::MedicationSchedule {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl ResourceRecord for models::schedule::VaccinationSchedule {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl ResourceRecord for models::schedule::ChecksSchedule {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl ResourceRecord for models::schedule::InjuryReport {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl ResourceRecord for models::schedule::PetAdoption {
    fn record_id(&self) -> i64 {
        self.id
    }
}

/// `None` (no body) on a collection read is an empty collection.
fn decode_records<T: ResourceRecord>(body: Option<Value>) -> Result<Vec<T>, ClientError> {
    match body {
        None => Ok(vec![]),
        Some(value) => serde_json::from_value(value)
            .map_err(|e| ClientError::new(format!("response records could not be decoded: {e}"))),
    }
}

/// A single-record operation without a body is a failure, not a success.
fn decode_record<T: ResourceRecord>(body: Option<Value>) -> Result<T, ClientError> {
    let value = body.ok_or_else(|| ClientError::new("response body was empty"))?;
    serde_json::from_value(value)
        .map_err(|e| ClientError::new(format!("response record could not be decoded: {e}")))
}

pub struct ResourceClient<T> {
    transport: ImplApiTransport,
    endpoint: String,
    pub records: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: ResourceRecord> ResourceClient<T> {
    /// Fetch-all runs once on construction unless explicitly opted out.
    pub async fn connect(
        transport: ImplApiTransport,
        endpoint: impl Into<String>,
        auto_fetch: bool,
    ) -> Self {
        let mut client = Self {
            transport,
            endpoint: endpoint.into(),
            records: vec![],
            loading: false,
            error: None,
        };

        if auto_fetch {
            // the failure, if any, stays in client.error for the caller
            let _ = client.fetch_all().await;
        }

        client
    }

    fn item_path(&self, id: i64) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    /// Replaces the local list with the server collection. Loading clears
    /// on every path, success or failure, so it can never stick.
    pub async fn fetch_all(&mut self) -> Result<(), ClientError> {
        self.loading = true;
        self.error = None;

        let outcome = self
            .transport
            .fetch(&self.endpoint, RequestConfig::get())
            .await;

        self.loading = false;

        match outcome.and_then(decode_records) {
            Ok(records) => {
                self.records = records;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Single-record read; never touches the local list.
    pub async fn fetch_one(&self, id: i64) -> Result<T, ClientError> {
        decode_record(
            self.transport
                .fetch(&self.item_path(id), RequestConfig::get())
                .await?,
        )
    }

    /// Appends the created record on success; no local mutation otherwise.
    pub async fn create(&mut self, record: Value) -> Result<T, ClientError> {
        let created: T = decode_record(
            self.transport
                .fetch(&self.endpoint, RequestConfig::post(record))
                .await?,
        )?;

        self.records.push(created.clone());
        Ok(created)
    }

    /// Replaces the matching local entry (by id) on success.
    pub async fn update(&mut self, id: i64, record: Value) -> Result<T, ClientError> {
        let updated: T = decode_record(
            self.transport
                .fetch(&self.item_path(id), RequestConfig::put(record))
                .await?,
        )?;

        if let Some(entry) = self
            .records
            .iter_mut()
            .find(|entry| entry.record_id() == id)
        {
            *entry = updated.clone();
        }
        Ok(updated)
    }

    /// Removes the matching local entry on success; the list is untouched
    /// on failure.
    pub async fn delete(&mut self, id: i64) -> Result<(), ClientError> {
        self.transport
            .fetch(&self.item_path(id), RequestConfig::delete())
            .await?;

        self.records.retain(|entry| entry.record_id() != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn create_test_food_value(id: i64, name: &str) -> Value {
        serde_json::to_value(models::catalog::Food {
            id,
            name: name.to_string(),
            food_type: Some("Dry".to_string()),
            amount: Some("5kg".to_string()),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
        .unwrap()
    }

    fn boxed(mock: MockApiTransport) -> ImplApiTransport {
        Box::new(mock)
    }

    #[ntex::test]
    async fn test_fetch_all_empty_collection_is_not_a_failure() {
        let mut mock = MockApiTransport::new();
        mock.expect_fetch()
            .withf(|path, config| path == "/api/v1/foods" && config.method == reqwest::Method::GET)
            .times(1)
            .returning(|_, _| Box::pin(async move { Ok(Some(json!([]))) }));

        let mut client: ResourceClient<models::catalog::Food> =
            ResourceClient::connect(boxed(mock), "/api/v1/foods", false).await;

        assert!(client.fetch_all().await.is_ok());
        assert!(client.records.is_empty());
        assert!(!client.loading);
        assert!(client.error.is_none());
    }

    #[ntex::test]
    async fn test_fetch_all_null_response_yields_empty_list() {
        let mut mock = MockApiTransport::new();
        mock.expect_fetch()
            .times(1)
            .returning(|_, _| Box::pin(async move { Ok(None) }));

        let mut client: ResourceClient<models::catalog::Food> =
            ResourceClient::connect(boxed(mock), "/api/v1/foods", false).await;

        assert!(client.fetch_all().await.is_ok());
        assert!(client.records.is_empty());
    }

    #[ntex::test]
    async fn test_fetch_all_failure_sets_error_and_clears_loading() {
        let mut mock = MockApiTransport::new();
        mock.expect_fetch().times(1).returning(|_, _| {
            Box::pin(async move { Err(ClientError::new("request failed with status 500")) })
        });

        let mut client: ResourceClient<models::catalog::Food> =
            ResourceClient::connect(boxed(mock), "/api/v1/foods", false).await;

        assert!(client.fetch_all().await.is_err());
        assert!(!client.loading);
        assert_eq!(
            client.error.as_deref(),
            Some("request failed with status 500")
        );
    }

    #[ntex::test]
    async fn test_connect_auto_fetches_by_default() {
        let mut mock = MockApiTransport::new();
        mock.expect_fetch().times(1).returning(|_, _| {
            Box::pin(async move { Ok(Some(json!([create_test_food_value(1, "Kibble")]))) })
        });

        let client: ResourceClient<models::catalog::Food> =
            ResourceClient::connect(boxed(mock), "/api/v1/foods", true).await;

        assert_eq!(client.records.len(), 1);
        assert_eq!(client.records[0].name, "Kibble");
    }

    #[ntex::test]
    async fn test_connect_opt_out_performs_no_fetch() {
        let mock = MockApiTransport::new();

        let client: ResourceClient<models::catalog::Food> =
            ResourceClient::connect(boxed(mock), "/api/v1/foods", false).await;

        assert!(client.records.is_empty());
    }

    #[ntex::test]
    async fn test_create_appends_returned_record() {
        let mut mock = MockApiTransport::new();
        mock.expect_fetch()
            .withf(|path, config| {
                path == "/api/v1/foods" && config.method == reqwest::Method::POST
            })
            .times(1)
            .returning(|_, _| {
                Box::pin(async move { Ok(Some(create_test_food_value(3, "Kibble"))) })
            });

        let mut client: ResourceClient<models::catalog::Food> =
            ResourceClient::connect(boxed(mock), "/api/v1/foods", false).await;

        let created = client.create(json!({"name": "Kibble"})).await;

        assert!(created.is_ok_and(|food| food.id == 3));
        assert_eq!(client.records.len(), 1);
    }

    #[ntex::test]
    async fn test_create_with_empty_response_mutates_nothing() {
        let mut mock = MockApiTransport::new();
        mock.expect_fetch()
            .times(1)
            .returning(|_, _| Box::pin(async move { Ok(None) }));

        let mut client: ResourceClient<models::catalog::Food> =
            ResourceClient::connect(boxed(mock), "/api/v1/foods", false).await;

        assert!(client.create(json!({"name": "Kibble"})).await.is_err());
        assert!(client.records.is_empty());
    }

    #[ntex::test]
    async fn test_update_replaces_matching_entry() {
        let mut mock = MockApiTransport::new();
        mock.expect_fetch()
            .withf(|_, config| config.method == reqwest::Method::GET)
            .times(1)
            .returning(|_, _| Box::pin(async move { Ok(Some(json!([create_test_food_value(3, "Kibble")]))) }));
        mock.expect_fetch()
            .withf(|path, config| {
                path == "/api/v1/foods/3" && config.method == reqwest::Method::PUT
            })
            .times(1)
            .returning(|_, _| {
                Box::pin(async move { Ok(Some(create_test_food_value(3, "Kibble Plus"))) })
            });

        let mut client: ResourceClient<models::catalog::Food> =
            ResourceClient::connect(boxed(mock), "/api/v1/foods", true).await;

        let updated = client.update(3, json!({"name": "Kibble Plus"})).await;

        assert!(updated.is_ok());
        assert_eq!(client.records[0].name, "Kibble Plus");
    }

    #[ntex::test]
    async fn test_delete_removes_matching_entry() {
        let mut mock = MockApiTransport::new();
        mock.expect_fetch()
            .withf(|_, config| config.method == reqwest::Method::GET)
            .times(1)
            .returning(|_, _| Box::pin(async move { Ok(Some(json!([create_test_food_value(3, "Kibble")]))) }));
        mock.expect_fetch()
            .withf(|path, config| {
                path == "/api/v1/foods/3" && config.method == reqwest::Method::DELETE
            })
            .times(1)
            .returning(|_, _| Box::pin(async move { Ok(None) }));

        let mut client: ResourceClient<models::catalog::Food> =
            ResourceClient::connect(boxed(mock), "/api/v1/foods", true).await;

        assert!(client.delete(3).await.is_ok());
        assert!(client.records.is_empty());
    }

    #[ntex::test]
    async fn test_delete_failure_leaves_list_untouched() {
        let mut mock = MockApiTransport::new();
        mock.expect_fetch()
            .withf(|_, config| config.method == reqwest::Method::GET)
            .times(1)
            .returning(|_, _| Box::pin(async move { Ok(Some(json!([create_test_food_value(3, "Kibble")]))) }));
        mock.expect_fetch()
            .withf(|_, config| config.method == reqwest::Method::DELETE)
            .times(1)
            .returning(|_, _| {
                Box::pin(async move { Err(ClientError::new("request failed with status 404")) })
            });

        let mut client: ResourceClient<models::catalog::Food> =
            ResourceClient::connect(boxed(mock), "/api/v1/foods", true).await;

        assert!(client.delete(3).await.is_err());
        assert_eq!(client.records.len(), 1);
    }

    #[ntex::test]
    async fn test_fetch_one_does_not_touch_local_list() {
        let mut mock = MockApiTransport::new();
        mock.expect_fetch()
            .withf(|path, _| path == "/api/v1/foods/9")
            .times(1)
            .returning(|_, _| {
                Box::pin(async move { Ok(Some(create_test_food_value(9, "Wet food"))) })
            });

        let client: ResourceClient<models::catalog::Food> =
            ResourceClient::connect(boxed(mock), "/api/v1/foods", false).await;

        let food = client.fetch_one(9).await;

        assert!(food.is_ok_and(|f| f.name == "Wet food"));
        assert!(client.records.is_empty());
    }
}
