use crate::models;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, Row, SqlitePool, sqlite::SqliteRow};

use super::{ShelterRepo, sqlite_queries};

const SCHEMA: &str = include_str!("schema.sql");

#[derive(Clone)]
pub struct SqlxShelterRepo {
    pub db_pool: SqlitePool,
}

impl SqlxShelterRepo {
    /// Applies the schema DDL; safe to run on every start.
    pub async fn apply_schema(&self) -> anyhow::Result<()> {
        sqlx::raw_sql(SCHEMA).execute(&self.db_pool).await?;
        Ok(())
    }
}

impl FromRow<'_, SqliteRow> for models::pet::Pet {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            pet_type: row.try_get("pet_type")?,
            breed: row.try_get("breed")?,
            gender: row.try_get("gender")?,
            birthday: row.try_get("birthday")?,
            admission_date: row.try_get("admission_date")?,
            location_id: row.try_get("location_id")?,
            picture: row.try_get("picture")?,
            nickname: row.try_get("nickname")?,
            notes: row.try_get("notes")?,
            adopted: row.try_get("adopted")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

fn frequency_from_joined_row(row: &SqliteRow) -> sqlx::Result<models::catalog::Frequency> {
    Ok(models::catalog::Frequency {
        id: row.try_get("frequency_id")?,
        name: row.try_get("frequency_name")?,
        interval_days: row.try_get("interval_days")?,
        created_at: row.try_get("frequency_created_at")?,
        updated_at: row.try_get("frequency_updated_at")?,
    })
}

impl FromRow<'_, SqliteRow> for models::catalog::Vaccine {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            mandatory: row.try_get("mandatory")?,
            frequency_id: row.try_get("frequency_id")?,
            notes: row.try_get("notes")?,
            frequency: frequency_from_joined_row(row)?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::catalog::Check {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            description: row.try_get("description")?,
            frequency_id: row.try_get("frequency_id")?,
            notes: row.try_get("notes")?,
            frequency: frequency_from_joined_row(row)?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl ShelterRepo for SqlxShelterRepo {
    async fn get_all_pets(&self) -> anyhow::Result<Vec<models::pet::Pet>> {
        Ok(
            sqlx::query_as::<_, models::pet::Pet>(sqlite_queries::QUERY_GET_ALL_PETS)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_pet_by_id(&self, pet_id: i64) -> anyhow::Result<Option<models::pet::Pet>> {
        Ok(
            sqlx::query_as::<_, models::pet::Pet>(sqlite_queries::QUERY_GET_PET_BY_ID)
                .bind(pet_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn insert_pet(&self, pet: &models::pet::Pet) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_PET)
            .bind(&pet.name)
            .bind(&pet.pet_type)
            .bind(&pet.breed)
            .bind(pet.gender)
            .bind(pet.birthday)
            .bind(pet.admission_date)
            .bind(pet.location_id)
            .bind(&pet.picture)
            .bind(&pet.nickname)
            .bind(&pet.notes)
            .bind(pet.adopted)
            .bind(pet.created_at)
            .bind(pet.updated_at)
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn update_pet(&self, pet: &models::pet::Pet) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_UPDATE_PET)
            .bind(pet.id)
            .bind(&pet.name)
            .bind(&pet.pet_type)
            .bind(&pet.breed)
            .bind(pet.gender)
            .bind(pet.birthday)
            .bind(pet.admission_date)
            .bind(pet.location_id)
            .bind(&pet.picture)
            .bind(&pet.nickname)
            .bind(&pet.notes)
            .bind(pet.adopted)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn delete_pet(&self, pet_id: i64) -> anyhow::Result<bool> {
        let mut transaction = self.db_pool.begin().await?;

        for query in sqlite_queries::QUERY_DELETE_PET_SCHEDULES {
            sqlx::query(query)
                .bind(pet_id)
                .execute(&mut *transaction)
                .await?;
        }

        let deleted = sqlx::query(sqlite_queries::QUERY_SOFT_DELETE_PET)
            .bind(pet_id)
            .bind(Utc::now())
            .execute(&mut *transaction)
            .await?
            .rows_affected();

        transaction.commit().await?;

        Ok(deleted > 0)
    }

    async fn get_all_locations(&self) -> anyhow::Result<Vec<models::location::Location>> {
        Ok(sqlx::query_as::<_, models::location::Location>(
            sqlite_queries::QUERY_GET_ALL_LOCATIONS,
        )
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn get_location_by_id(
        &self,
        location_id: i64,
    ) -> anyhow::Result<Option<models::location::Location>> {
        Ok(sqlx::query_as::<_, models::location::Location>(
            sqlite_queries::QUERY_GET_LOCATION_BY_ID,
        )
        .bind(location_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn insert_location(&self, location: &models::location::Location) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_LOCATION)
            .bind(&location.name)
            .bind(&location.address)
            .bind(&location.phone)
            .bind(&location.notes)
            .bind(location.created_at)
            .bind(location.updated_at)
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn update_location(&self, location: &models::location::Location) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_UPDATE_LOCATION)
            .bind(location.id)
            .bind(&location.name)
            .bind(&location.address)
            .bind(&location.phone)
            .bind(&location.notes)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn delete_location(&self, location_id: i64) -> anyhow::Result<bool> {
        let mut transaction = self.db_pool.begin().await?;
        let now = Utc::now();

        sqlx::query(sqlite_queries::QUERY_UNLINK_LOCATION_PETS)
            .bind(location_id)
            .bind(now)
            .execute(&mut *transaction)
            .await?;

        let deleted = sqlx::query(sqlite_queries::QUERY_SOFT_DELETE_LOCATION)
            .bind(location_id)
            .bind(now)
            .execute(&mut *transaction)
            .await?
            .rows_affected();

        transaction.commit().await?;

        Ok(deleted > 0)
    }

    async fn get_all_frequencies(&self) -> anyhow::Result<Vec<models::catalog::Frequency>> {
        Ok(sqlx::query_as::<_, models::catalog::Frequency>(
            sqlite_queries::QUERY_GET_ALL_FREQUENCIES,
        )
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn get_frequency_by_id(
        &self,
        frequency_id: i64,
    ) -> anyhow::Result<Option<models::catalog::Frequency>> {
        Ok(sqlx::query_as::<_, models::catalog::Frequency>(
            sqlite_queries::QUERY_GET_FREQUENCY_BY_ID,
        )
        .bind(frequency_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn get_frequency_by_name(
        &self,
        name: &str,
    ) -> anyhow::Result<Option<models::catalog::Frequency>> {
        Ok(sqlx::query_as::<_, models::catalog::Frequency>(
            sqlite_queries::QUERY_GET_FREQUENCY_BY_NAME,
        )
        .bind(name)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn insert_frequency(
        &self,
        frequency: &models::catalog::Frequency,
    ) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_FREQUENCY)
            .bind(&frequency.name)
            .bind(frequency.interval_days)
            .bind(frequency.created_at)
            .bind(frequency.updated_at)
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn update_frequency(
        &self,
        frequency: &models::catalog::Frequency,
    ) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_UPDATE_FREQUENCY)
            .bind(frequency.id)
            .bind(&frequency.name)
            .bind(frequency.interval_days)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn delete_frequency(&self, frequency_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_DELETE_FREQUENCY)
            .bind(frequency_id)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn get_all_foods(&self) -> anyhow::Result<Vec<models::catalog::Food>> {
        Ok(
            sqlx::query_as::<_, models::catalog::Food>(sqlite_queries::QUERY_GET_ALL_FOODS)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_food_by_id(&self, food_id: i64) -> anyhow::Result<Option<models::catalog::Food>> {
        Ok(
            sqlx::query_as::<_, models::catalog::Food>(sqlite_queries::QUERY_GET_FOOD_BY_ID)
                .bind(food_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn insert_food(&self, food: &models::catalog::Food) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_FOOD)
            .bind(&food.name)
            .bind(&food.food_type)
            .bind(&food.amount)
            .bind(&food.notes)
            .bind(food.created_at)
            .bind(food.updated_at)
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn update_food(&self, food: &models::catalog::Food) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_UPDATE_FOOD)
            .bind(food.id)
            .bind(&food.name)
            .bind(&food.food_type)
            .bind(&food.amount)
            .bind(&food.notes)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn delete_food(&self, food_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_SOFT_DELETE_FOOD)
            .bind(food_id)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn get_all_medications(&self) -> anyhow::Result<Vec<models::catalog::Medication>> {
        Ok(sqlx::query_as::<_, models::catalog::Medication>(
            sqlite_queries::QUERY_GET_ALL_MEDICATIONS,
        )
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn get_medication_by_id(
        &self,
        medication_id: i64,
    ) -> anyhow::Result<Option<models::catalog::Medication>> {
        Ok(sqlx::query_as::<_, models::catalog::Medication>(
            sqlite_queries::QUERY_GET_MEDICATION_BY_ID,
        )
        .bind(medication_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn insert_medication(
        &self,
        medication: &models::catalog::Medication,
    ) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_MEDICATION)
            .bind(&medication.name)
            .bind(&medication.med_type)
            .bind(&medication.notes)
            .bind(medication.created_at)
            .bind(medication.updated_at)
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn update_medication(
        &self,
        medication: &models::catalog::Medication,
    ) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_UPDATE_MEDICATION)
            .bind(medication.id)
            .bind(&medication.name)
            .bind(&medication.med_type)
            .bind(&medication.notes)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn delete_medication(&self, medication_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_SOFT_DELETE_MEDICATION)
            .bind(medication_id)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn get_all_vaccines(&self) -> anyhow::Result<Vec<models::catalog::Vaccine>> {
        Ok(
            sqlx::query_as::<_, models::catalog::Vaccine>(sqlite_queries::QUERY_GET_ALL_VACCINES)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_vaccine_by_id(
        &self,
        vaccine_id: i64,
    ) -> anyhow::Result<Option<models::catalog::Vaccine>> {
        Ok(
            sqlx::query_as::<_, models::catalog::Vaccine>(sqlite_queries::QUERY_GET_VACCINE_BY_ID)
                .bind(vaccine_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn get_vaccine_by_name(
        &self,
        name: &str,
    ) -> anyhow::Result<Option<models::catalog::Vaccine>> {
        Ok(sqlx::query_as::<_, models::catalog::Vaccine>(
            sqlite_queries::QUERY_GET_VACCINE_BY_NAME,
        )
        .bind(name)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn insert_vaccine(&self, vaccine: &models::catalog::Vaccine) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_VACCINE)
            .bind(&vaccine.name)
            .bind(vaccine.mandatory)
            .bind(vaccine.frequency_id)
            .bind(&vaccine.notes)
            .bind(vaccine.created_at)
            .bind(vaccine.updated_at)
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn update_vaccine(&self, vaccine: &models::catalog::Vaccine) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_UPDATE_VACCINE)
            .bind(vaccine.id)
            .bind(&vaccine.name)
            .bind(vaccine.mandatory)
            .bind(vaccine.frequency_id)
            .bind(&vaccine.notes)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn delete_vaccine(&self, vaccine_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_SOFT_DELETE_VACCINE)
            .bind(vaccine_id)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn get_all_injuries(&self) -> anyhow::Result<Vec<models::catalog::Injury>> {
        Ok(
            sqlx::query_as::<_, models::catalog::Injury>(sqlite_queries::QUERY_GET_ALL_INJURIES)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_injury_by_id(
        &self,
        injury_id: i64,
    ) -> anyhow::Result<Option<models::catalog::Injury>> {
        Ok(
            sqlx::query_as::<_, models::catalog::Injury>(sqlite_queries::QUERY_GET_INJURY_BY_ID)
                .bind(injury_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn insert_injury(&self, injury: &models::catalog::Injury) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_INJURY)
            .bind(&injury.description)
            .bind(injury.severity)
            .bind(&injury.notes)
            .bind(injury.created_at)
            .bind(injury.updated_at)
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn update_injury(&self, injury: &models::catalog::Injury) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_UPDATE_INJURY)
            .bind(injury.id)
            .bind(&injury.description)
            .bind(injury.severity)
            .bind(&injury.notes)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn delete_injury(&self, injury_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_DELETE_INJURY)
            .bind(injury_id)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn get_all_checks(&self) -> anyhow::Result<Vec<models::catalog::Check>> {
        Ok(
            sqlx::query_as::<_, models::catalog::Check>(sqlite_queries::QUERY_GET_ALL_CHECKS)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_check_by_id(
        &self,
        check_id: i64,
    ) -> anyhow::Result<Option<models::catalog::Check>> {
        Ok(
            sqlx::query_as::<_, models::catalog::Check>(sqlite_queries::QUERY_GET_CHECK_BY_ID)
                .bind(check_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn insert_check(&self, check: &models::catalog::Check) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_CHECK)
            .bind(&check.description)
            .bind(check.frequency_id)
            .bind(&check.notes)
            .bind(check.created_at)
            .bind(check.updated_at)
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn update_check(&self, check: &models::catalog::Check) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_UPDATE_CHECK)
            .bind(check.id)
            .bind(&check.description)
            .bind(check.frequency_id)
            .bind(&check.notes)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn delete_check(&self, check_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_DELETE_CHECK)
            .bind(check_id)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn get_all_pet_foods(&self) -> anyhow::Result<Vec<models::schedule::PetFood>> {
        Ok(
            sqlx::query_as::<_, models::schedule::PetFood>(sqlite_queries::QUERY_GET_ALL_PET_FOODS)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_pet_food_by_id(
        &self,
        pet_food_id: i64,
    ) -> anyhow::Result<Option<models::schedule::PetFood>> {
        Ok(sqlx::query_as::<_, models::schedule::PetFood>(
            sqlite_queries::QUERY_GET_PET_FOOD_BY_ID,
        )
        .bind(pet_food_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn insert_pet_food(&self, pet_food: &models::schedule::PetFood) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_PET_FOOD)
            .bind(pet_food.pet_id)
            .bind(pet_food.food_id)
            .bind(pet_food.frequency_id)
            .bind(&pet_food.amount)
            .bind(&pet_food.notes)
            .bind(pet_food.created_at)
            .bind(pet_food.updated_at)
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn update_pet_food(&self, pet_food: &models::schedule::PetFood) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_UPDATE_PET_FOOD)
            .bind(pet_food.id)
            .bind(pet_food.pet_id)
            .bind(pet_food.food_id)
            .bind(pet_food.frequency_id)
            .bind(&pet_food.amount)
            .bind(&pet_food.notes)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn delete_pet_food(&self, pet_food_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_DELETE_PET_FOOD)
            .bind(pet_food_id)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn get_all_medication_schedules(
        &self,
    ) -> anyhow::Result<Vec<models::schedule::MedicationSchedule>> {
        Ok(sqlx::query_as::<_, models::schedule::MedicationSchedule>(
            sqlite_queries::QUERY_GET_ALL_MEDICATION_SCHEDULES,
        )
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn get_medication_schedule_by_id(
        &self,
        schedule_id: i64,
    ) -> anyhow::Result<Option<models::schedule::MedicationSchedule>> {
        Ok(sqlx::query_as::<_, models::schedule::MedicationSchedule>(
            sqlite_queries::QUERY_GET_MEDICATION_SCHEDULE_BY_ID,
        )
        .bind(schedule_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn insert_medication_schedule(
        &self,
        schedule: &models::schedule::MedicationSchedule,
    ) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_MEDICATION_SCHEDULE)
            .bind(schedule.pet_id)
            .bind(schedule.medication_id)
            .bind(schedule.frequency_id)
            .bind(schedule.date_started)
            .bind(schedule.date_ended)
            .bind(&schedule.notes)
            .bind(schedule.created_at)
            .bind(schedule.updated_at)
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn update_medication_schedule(
        &self,
        schedule: &models::schedule::MedicationSchedule,
    ) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_UPDATE_MEDICATION_SCHEDULE)
            .bind(schedule.id)
            .bind(schedule.pet_id)
            .bind(schedule.medication_id)
            .bind(schedule.frequency_id)
            .bind(schedule.date_started)
            .bind(schedule.date_ended)
            .bind(&schedule.notes)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn delete_medication_schedule(&self, schedule_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_DELETE_MEDICATION_SCHEDULE)
            .bind(schedule_id)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn get_all_vaccination_schedules(
        &self,
    ) -> anyhow::Result<Vec<models::schedule::VaccinationSchedule>> {
        Ok(sqlx::query_as::<_, models::schedule::VaccinationSchedule>(
            sqlite_queries::QUERY_GET_ALL_VACCINATION_SCHEDULES,
        )
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn get_vaccination_schedule_by_id(
        &self,
        schedule_id: i64,
    ) -> anyhow::Result<Option<models::schedule::VaccinationSchedule>> {
        Ok(sqlx::query_as::<_, models::schedule::VaccinationSchedule>(
            sqlite_queries::QUERY_GET_VACCINATION_SCHEDULE_BY_ID,
        )
        .bind(schedule_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn insert_vaccination_schedule(
        &self,
        schedule: &models::schedule::VaccinationSchedule,
    ) -> anyhow::Result<i64> {
        Ok(
            sqlx::query(sqlite_queries::QUERY_INSERT_VACCINATION_SCHEDULE)
                .bind(schedule.pet_id)
                .bind(schedule.vaccine_id)
                .bind(schedule.frequency_id)
                .bind(schedule.date_given)
                .bind(&schedule.notes)
                .bind(schedule.created_at)
                .bind(schedule.updated_at)
                .execute(&self.db_pool)
                .await?
                .last_insert_rowid(),
        )
    }

    async fn update_vaccination_schedule(
        &self,
        schedule: &models::schedule::VaccinationSchedule,
    ) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_UPDATE_VACCINATION_SCHEDULE)
            .bind(schedule.id)
            .bind(schedule.pet_id)
            .bind(schedule.vaccine_id)
            .bind(schedule.frequency_id)
            .bind(schedule.date_given)
            .bind(&schedule.notes)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn delete_vaccination_schedule(&self, schedule_id: i64) -> anyhow::Result<bool> {
        Ok(
            sqlx::query(sqlite_queries::QUERY_DELETE_VACCINATION_SCHEDULE)
                .bind(schedule_id)
                .execute(&self.db_pool)
                .await?
                .rows_affected()
                > 0,
        )
    }

    async fn get_all_checks_schedules(
        &self,
    ) -> anyhow::Result<Vec<models::schedule::ChecksSchedule>> {
        Ok(sqlx::query_as::<_, models::schedule::ChecksSchedule>(
            sqlite_queries::QUERY_GET_ALL_CHECKS_SCHEDULES,
        )
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn get_checks_schedule_by_id(
        &self,
        schedule_id: i64,
    ) -> anyhow::Result<Option<models::schedule::ChecksSchedule>> {
        Ok(sqlx::query_as::<_, models::schedule::ChecksSchedule>(
            sqlite_queries::QUERY_GET_CHECKS_SCHEDULE_BY_ID,
        )
        .bind(schedule_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn insert_checks_schedule(
        &self,
        schedule: &models::schedule::ChecksSchedule,
    ) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_CHECKS_SCHEDULE)
            .bind(schedule.pet_id)
            .bind(schedule.check_id)
            .bind(schedule.frequency_id)
            .bind(schedule.date_done)
            .bind(&schedule.notes)
            .bind(schedule.created_at)
            .bind(schedule.updated_at)
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn update_checks_schedule(
        &self,
        schedule: &models::schedule::ChecksSchedule,
    ) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_UPDATE_CHECKS_SCHEDULE)
            .bind(schedule.id)
            .bind(schedule.pet_id)
            .bind(schedule.check_id)
            .bind(schedule.frequency_id)
            .bind(schedule.date_done)
            .bind(&schedule.notes)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn delete_checks_schedule(&self, schedule_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_DELETE_CHECKS_SCHEDULE)
            .bind(schedule_id)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn get_all_injury_reports(
        &self,
    ) -> anyhow::Result<Vec<models::schedule::InjuryReport>> {
        Ok(sqlx::query_as::<_, models::schedule::InjuryReport>(
            sqlite_queries::QUERY_GET_ALL_INJURY_REPORTS,
        )
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn get_injury_report_by_id(
        &self,
        report_id: i64,
    ) -> anyhow::Result<Option<models::schedule::InjuryReport>> {
        Ok(sqlx::query_as::<_, models::schedule::InjuryReport>(
            sqlite_queries::QUERY_GET_INJURY_REPORT_BY_ID,
        )
        .bind(report_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn insert_injury_report(
        &self,
        report: &models::schedule::InjuryReport,
    ) -> anyhow::Result<i64> {
        Ok(sqlx::query(sqlite_queries::QUERY_INSERT_INJURY_REPORT)
            .bind(report.pet_id)
            .bind(report.injury_id)
            .bind(report.date_of_injury)
            .bind(&report.report_notes)
            .bind(report.created_at)
            .bind(report.updated_at)
            .execute(&self.db_pool)
            .await?
            .last_insert_rowid())
    }

    async fn update_injury_report(
        &self,
        report: &models::schedule::InjuryReport,
    ) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_UPDATE_INJURY_REPORT)
            .bind(report.id)
            .bind(report.pet_id)
            .bind(report.injury_id)
            .bind(report.date_of_injury)
            .bind(&report.report_notes)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn delete_injury_report(&self, report_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_DELETE_INJURY_REPORT)
            .bind(report_id)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn get_all_pet_adoptions(
        &self,
    ) -> anyhow::Result<Vec<models::schedule::PetAdoption>> {
        Ok(sqlx::query_as::<_, models::schedule::PetAdoption>(
            sqlite_queries::QUERY_GET_ALL_PET_ADOPTIONS,
        )
        .fetch_all(&self.db_pool)
        .await?)
    }

    async fn get_pet_adoption_by_id(
        &self,
        adoption_id: i64,
    ) -> anyhow::Result<Option<models::schedule::PetAdoption>> {
        Ok(sqlx::query_as::<_, models::schedule::PetAdoption>(
            sqlite_queries::QUERY_GET_PET_ADOPTION_BY_ID,
        )
        .bind(adoption_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn get_pet_adoption_by_pet_id(
        &self,
        pet_id: i64,
    ) -> anyhow::Result<Option<models::schedule::PetAdoption>> {
        Ok(sqlx::query_as::<_, models::schedule::PetAdoption>(
            sqlite_queries::QUERY_GET_PET_ADOPTION_BY_PET_ID,
        )
        .bind(pet_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn insert_pet_adoption(
        &self,
        adoption: &models::schedule::PetAdoption,
    ) -> anyhow::Result<i64> {
        let mut transaction = self.db_pool.begin().await?;

        let adoption_id = sqlx::query(sqlite_queries::QUERY_INSERT_PET_ADOPTION)
            .bind(adoption.pet_id)
            .bind(&adoption.adopter_name)
            .bind(adoption.adoption_date)
            .bind(&adoption.notes)
            .bind(adoption.created_at)
            .bind(adoption.updated_at)
            .execute(&mut *transaction)
            .await?
            .last_insert_rowid();

        sqlx::query(sqlite_queries::QUERY_SET_PET_ADOPTED_FLAG)
            .bind(adoption.pet_id)
            .bind(true)
            .bind(Utc::now())
            .execute(&mut *transaction)
            .await?;

        transaction.commit().await?;

        Ok(adoption_id)
    }

    async fn update_pet_adoption(
        &self,
        adoption: &models::schedule::PetAdoption,
    ) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_UPDATE_PET_ADOPTION)
            .bind(adoption.id)
            .bind(adoption.pet_id)
            .bind(&adoption.adopter_name)
            .bind(adoption.adoption_date)
            .bind(&adoption.notes)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    async fn delete_pet_adoption(&self, adoption_id: i64) -> anyhow::Result<bool> {
        let mut transaction = self.db_pool.begin().await?;

        let pet_id: Option<i64> =
            sqlx::query_scalar("SELECT pet_id FROM pet_adoption WHERE id = $1;")
                .bind(adoption_id)
                .fetch_optional(&mut *transaction)
                .await?;

        let deleted = sqlx::query(sqlite_queries::QUERY_DELETE_PET_ADOPTION)
            .bind(adoption_id)
            .execute(&mut *transaction)
            .await?
            .rows_affected();

        if let Some(pet_id) = pet_id {
            sqlx::query(sqlite_queries::QUERY_SET_PET_ADOPTED_FLAG)
                .bind(pet_id)
                .bind(false)
                .bind(Utc::now())
                .execute(&mut *transaction)
                .await?;
        }

        transaction.commit().await?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    // one connection so the in-memory database survives across queries
    async fn create_test_repo() -> SqlxShelterRepo {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .pragma("foreign_keys", "ON");
        let db_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();

        let repo = SqlxShelterRepo { db_pool };
        repo.apply_schema().await.unwrap();
        repo
    }

    fn create_test_pet(name: &str) -> models::pet::Pet {
        models::pet::Pet {
            id: 0,
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

    fn create_test_frequency(name: &str, interval_days: i64) -> models::catalog::Frequency {
        models::catalog::Frequency {
            id: 0,
            name: name.to_string(),
            interval_days,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[ntex::test]
    async fn test_insert_and_get_pet_roundtrip() {
        let repo = create_test_repo().await;

        let pet_id = repo.insert_pet(&create_test_pet("Luna")).await.unwrap();
        let stored = repo.get_pet_by_id(pet_id).await.unwrap().unwrap();

        assert_eq!(stored.id, pet_id);
        assert_eq!(stored.name, "Luna");
        assert_eq!(stored.gender, models::pet::Gender::Female);
        assert_eq!(stored.birthday, NaiveDate::from_ymd_opt(2021, 5, 20).unwrap());
    }

    #[ntex::test]
    async fn test_soft_deleted_pet_leaves_list_and_read() {
        let repo = create_test_repo().await;
        let pet_id = repo.insert_pet(&create_test_pet("Luna")).await.unwrap();

        assert!(repo.delete_pet(pet_id).await.unwrap());
        assert!(repo.get_pet_by_id(pet_id).await.unwrap().is_none());
        assert!(repo.get_all_pets().await.unwrap().is_empty());
        // second delete finds nothing to mark
        assert!(!repo.delete_pet(pet_id).await.unwrap());
    }

    #[ntex::test]
    async fn test_update_food_is_readable_with_same_values() {
        let repo = create_test_repo().await;
        let now = Utc::now();

        let food_id = repo
            .insert_food(&models::catalog::Food {
                id: 0,
                name: "Kibble".to_string(),
                food_type: Some("Dry".to_string()),
                amount: Some("5kg".to_string()),
                notes: None,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();

        let mut food = repo.get_food_by_id(food_id).await.unwrap().unwrap();
        food.notes = Some("new bag".to_string());
        repo.update_food(&food).await.unwrap();

        let stored = repo.get_food_by_id(food_id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Kibble");
        assert_eq!(stored.food_type.as_deref(), Some("Dry"));
        assert_eq!(stored.notes.as_deref(), Some("new bag"));
    }

    #[ntex::test]
    async fn test_vaccine_read_embeds_frequency() {
        let repo = create_test_repo().await;
        let now = Utc::now();

        let frequency_id = repo
            .insert_frequency(&create_test_frequency("Weekly", 7))
            .await
            .unwrap();
        let vaccine_id = repo
            .insert_vaccine(&models::catalog::Vaccine {
                id: 0,
                name: "Rabies".to_string(),
                mandatory: true,
                frequency_id,
                notes: None,
                frequency: models::catalog::Frequency::default(),
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();

        let stored = repo.get_vaccine_by_id(vaccine_id).await.unwrap().unwrap();
        assert_eq!(stored.frequency.interval_days, 7);
        assert_eq!(stored.frequency.name, "Weekly");
    }

    #[ntex::test]
    async fn test_frequency_delete_cascades_to_vaccines() {
        let repo = create_test_repo().await;
        let now = Utc::now();

        let frequency_id = repo
            .insert_frequency(&create_test_frequency("Weekly", 7))
            .await
            .unwrap();
        let vaccine_id = repo
            .insert_vaccine(&models::catalog::Vaccine {
                id: 0,
                name: "Rabies".to_string(),
                mandatory: true,
                frequency_id,
                notes: None,
                frequency: models::catalog::Frequency::default(),
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();

        assert!(repo.delete_frequency(frequency_id).await.unwrap());
        assert!(repo.get_vaccine_by_id(vaccine_id).await.unwrap().is_none());
    }

    #[ntex::test]
    async fn test_vaccine_insert_rejects_missing_frequency() {
        let repo = create_test_repo().await;
        let now = Utc::now();

        let result = repo
            .insert_vaccine(&models::catalog::Vaccine {
                id: 0,
                name: "Rabies".to_string(),
                mandatory: true,
                frequency_id: 12345,
                notes: None,
                frequency: models::catalog::Frequency::default(),
                created_at: now,
                updated_at: now,
            })
            .await;

        let err = result.unwrap_err().to_string();
        assert!(err.contains("FOREIGN KEY constraint failed"), "{err}");
    }

    #[ntex::test]
    async fn test_delete_pet_removes_its_schedule_rows() {
        let repo = create_test_repo().await;
        let now = Utc::now();

        let pet_id = repo.insert_pet(&create_test_pet("Luna")).await.unwrap();
        let frequency_id = repo
            .insert_frequency(&create_test_frequency("Daily", 1))
            .await
            .unwrap();
        let medication_id = repo
            .insert_medication(&models::catalog::Medication {
                id: 0,
                name: "Antibiotic".to_string(),
                med_type: None,
                notes: None,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();
        let schedule_id = repo
            .insert_medication_schedule(&models::schedule::MedicationSchedule {
                id: 0,
                pet_id,
                medication_id,
                frequency_id,
                date_started: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                date_ended: None,
                notes: None,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();

        assert!(repo.delete_pet(pet_id).await.unwrap());
        assert!(
            repo.get_medication_schedule_by_id(schedule_id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[ntex::test]
    async fn test_location_delete_nullifies_pet_reference() {
        let repo = create_test_repo().await;
        let now = Utc::now();

        let location_id = repo
            .insert_location(&models::location::Location {
                id: 0,
                name: "Main barn".to_string(),
                address: None,
                phone: None,
                notes: None,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();

        let pet_id = repo
            .insert_pet(&models::pet::Pet {
                location_id: Some(location_id),
                ..create_test_pet("Luna")
            })
            .await
            .unwrap();

        assert!(repo.delete_location(location_id).await.unwrap());

        let stored = repo.get_pet_by_id(pet_id).await.unwrap().unwrap();
        assert!(stored.location_id.is_none());
    }

    #[ntex::test]
    async fn test_adoption_toggles_pet_adopted_flag() {
        let repo = create_test_repo().await;
        let now = Utc::now();

        let pet_id = repo.insert_pet(&create_test_pet("Luna")).await.unwrap();
        let adoption_id = repo
            .insert_pet_adoption(&models::schedule::PetAdoption {
                id: 0,
                pet_id,
                adopter_name: "Sam Reyes".to_string(),
                adoption_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                notes: None,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();

        assert!(repo.get_pet_by_id(pet_id).await.unwrap().unwrap().adopted);

        assert!(repo.delete_pet_adoption(adoption_id).await.unwrap());
        assert!(!repo.get_pet_by_id(pet_id).await.unwrap().unwrap().adopted);
    }

    #[ntex::test]
    async fn test_soft_deleted_vaccine_name_can_be_reused() {
        let repo = create_test_repo().await;
        let now = Utc::now();

        let frequency_id = repo
            .insert_frequency(&create_test_frequency("Weekly", 7))
            .await
            .unwrap();
        let vaccine = models::catalog::Vaccine {
            id: 0,
            name: "Rabies".to_string(),
            mandatory: true,
            frequency_id,
            notes: None,
            frequency: models::catalog::Frequency::default(),
            created_at: now,
            updated_at: now,
        };

        let first_id = repo.insert_vaccine(&vaccine).await.unwrap();
        assert!(repo.delete_vaccine(first_id).await.unwrap());

        // the partial unique index only guards active rows
        assert!(repo.insert_vaccine(&vaccine).await.is_ok());
    }
}
