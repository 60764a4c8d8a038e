//! `SQLite` implementation of [`HandyModelRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use handyhub_app::ports::HandyModelRepository;
use handyhub_domain::error::HandyError;
use handyhub_domain::handy_model::HandyModel;
use handyhub_domain::id::{BrandId, HandyModelId};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`HandyModel`].
struct Wrapper(HandyModel);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<HandyModel> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let battery_life: u32 = row.try_get("battery_life")?;
        let serial_number: String = row.try_get("serial_number")?;
        let brand_id: String = row.try_get("brand_id")?;

        let id = HandyModelId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let brand_id =
            BrandId::from_str(&brand_id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(HandyModel {
            id,
            name,
            battery_life,
            serial_number,
            brand_id,
        }))
    }
}

const INSERT: &str = "INSERT INTO handy_models (id, name, battery_life, serial_number, brand_id) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM handy_models WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM handy_models ORDER BY seq";
const UPDATE: &str = "UPDATE handy_models SET name = ?, battery_life = ?, serial_number = ?, brand_id = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM handy_models WHERE id = ?";

/// `SQLite`-backed phone model repository.
///
/// Listing returns rows in insertion order.
pub struct SqliteHandyModelRepository {
    pool: SqlitePool,
}

impl SqliteHandyModelRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl HandyModelRepository for SqliteHandyModelRepository {
    fn create(
        &self,
        model: HandyModel,
    ) -> impl Future<Output = Result<HandyModel, HandyError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(model.id.to_string())
                .bind(&model.name)
                .bind(model.battery_life)
                .bind(&model.serial_number)
                .bind(model.brand_id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(model)
        }
    }

    fn get_by_id(
        &self,
        id: HandyModelId,
    ) -> impl Future<Output = Result<Option<HandyModel>, HandyError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<HandyModel>, HandyError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        model: HandyModel,
    ) -> impl Future<Output = Result<Option<HandyModel>, HandyError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&model.name)
                .bind(model.battery_life)
                .bind(&model.serial_number)
                .bind(model.brand_id.to_string())
                .bind(model.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok((result.rows_affected() > 0).then_some(model))
        }
    }

    fn delete(&self, id: HandyModelId) -> impl Future<Output = Result<bool, HandyError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteHandyModelRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteHandyModelRepository::new(db.pool().clone())
    }

    fn test_model(name: &str) -> HandyModel {
        HandyModel::builder()
            .name(name)
            .battery_life(24)
            .serial_number("SN1")
            .brand_id(BrandId::from_str("11111111-1111-1111-1111-111111111111").unwrap())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_model_when_valid() {
        let repo = setup().await;
        let model = test_model("Pixel 7");
        let id = model.id;

        repo.create(model.clone()).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched, model);
    }

    #[tokio::test]
    async fn should_return_none_when_model_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(HandyModelId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_models_in_insertion_order() {
        let repo = setup().await;
        for name in ["c", "a", "b"] {
            repo.create(test_model(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[tokio::test]
    async fn should_update_model_when_exists() {
        let repo = setup().await;
        let mut model = test_model("Pixel 7");
        let id = model.id;
        repo.create(model.clone()).await.unwrap();

        model.name = "Pixel 8".to_string();
        model.battery_life = 30;
        let updated = repo.update(model).await.unwrap();
        assert!(updated.is_some());

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Pixel 8");
        assert_eq!(fetched.battery_life, 30);
    }

    #[tokio::test]
    async fn should_return_none_when_updating_missing_model() {
        let repo = setup().await;
        let result = repo.update(test_model("ghost")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_delete_model_when_exists() {
        let repo = setup().await;
        let model = test_model("Pixel 7");
        let id = model.id;
        repo.create(model).await.unwrap();

        assert!(repo.delete(id).await.unwrap());

        let result = repo.get_by_id(id).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_report_false_when_deleting_missing_model() {
        let repo = setup().await;
        assert!(!repo.delete(HandyModelId::new()).await.unwrap());
    }

    #[tokio::test]
    async fn should_reject_duplicate_id() {
        let repo = setup().await;
        let model = test_model("Pixel 7");
        repo.create(model.clone()).await.unwrap();

        let result = repo.create(model).await;
        assert!(matches!(result, Err(HandyError::Storage(_))));
    }
}
