//! `SQLite` implementation of [`ApartmentRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use flatshop_app::ports::ApartmentRepository;
use flatshop_domain::apartment::{Apartment, ApartmentDraft, ApartmentPatch};
use flatshop_domain::error::FlatshopError;
use flatshop_domain::id::ApartmentId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Apartment`].
struct Wrapper(Apartment);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Apartment> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Apartment {
            id: ApartmentId::new(row.try_get("id")?),
            title: row.try_get("title")?,
            address: row.try_get("address")?,
            image_link: row.try_get("image_link")?,
            description: row.try_get("description")?,
            square_meters: row.try_get("square_meters")?,
            bedrooms: row.try_get("bedrooms")?,
            price: row.try_get("price")?,
            favourite: row.try_get("favourite")?,
        }))
    }
}

const SELECT_BY_ID: &str = "SELECT id, title, address, image_link, description, \
     square_meters, bedrooms, price, favourite FROM apartments WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, title, address, image_link, description, \
     square_meters, bedrooms, price, favourite FROM apartments ORDER BY id";
const INSERT: &str = "INSERT INTO apartments \
     (title, address, image_link, description, square_meters, bedrooms, price, favourite) \
     VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING id";
const UPDATE: &str = "UPDATE apartments SET \
     title = COALESCE(?, title), \
     address = COALESCE(?, address), \
     image_link = COALESCE(?, image_link), \
     description = COALESCE(?, description), \
     square_meters = COALESCE(?, square_meters), \
     bedrooms = COALESCE(?, bedrooms), \
     price = COALESCE(?, price), \
     favourite = COALESCE(?, favourite) \
     WHERE id = ?";
const TOGGLE_FAVOURITE: &str = "UPDATE apartments SET favourite = NOT favourite WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM apartments WHERE id = ?";

/// `SQLite`-backed apartment repository.
pub struct SqliteApartmentRepository {
    pool: SqlitePool,
}

impl SqliteApartmentRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ApartmentRepository for SqliteApartmentRepository {
    fn create(
        &self,
        draft: ApartmentDraft,
    ) -> impl Future<Output = Result<Apartment, FlatshopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let id: i64 = sqlx::query_scalar(INSERT)
                .bind(&draft.title)
                .bind(&draft.address)
                .bind(&draft.image_link)
                .bind(&draft.description)
                .bind(draft.square_meters)
                .bind(draft.bedrooms)
                .bind(draft.price)
                .bind(draft.favourite)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Apartment::from_draft(ApartmentId::new(id), draft))
        }
    }

    fn get_by_id(
        &self,
        id: ApartmentId,
    ) -> impl Future<Output = Result<Option<Apartment>, FlatshopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Apartment>, FlatshopError>> + Send {
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
        id: ApartmentId,
        patch: ApartmentPatch,
    ) -> impl Future<Output = Result<bool, FlatshopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(patch.title)
                .bind(patch.address)
                .bind(patch.image_link)
                .bind(patch.description)
                .bind(patch.square_meters)
                .bind(patch.bedrooms)
                .bind(patch.price)
                .bind(patch.favourite)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn toggle_favourite(
        &self,
        id: ApartmentId,
    ) -> impl Future<Output = Result<bool, FlatshopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(TOGGLE_FAVOURITE)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn delete(&self, id: ApartmentId) -> impl Future<Output = Result<bool, FlatshopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
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

    async fn setup() -> SqliteApartmentRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteApartmentRepository::new(db.pool().clone())
    }

    fn test_draft() -> ApartmentDraft {
        ApartmentDraft::default()
            .title("Loft")
            .address("1 Main St")
            .image_link("https://img.example/loft.png")
            .description("Bright and quiet")
            .square_meters(50)
            .bedrooms(2)
            .price(100.0)
    }

    #[tokio::test]
    async fn should_create_and_retrieve_apartment() {
        let repo = setup().await;

        let created = repo.create(test_draft()).await.unwrap();
        assert!(created.id.as_i64() > 0);

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_none_when_apartment_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(ApartmentId::new(999_999)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_apartments_ordered_by_id() {
        let repo = setup().await;
        assert!(repo.get_all().await.unwrap().is_empty());

        let first = repo.create(test_draft()).await.unwrap();
        let second = repo
            .create(ApartmentDraft::default().title("Studio"))
            .await
            .unwrap();

        let all = repo.get_all().await.unwrap();
        let ids: Vec<ApartmentId> = all.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn should_keep_fields_missing_from_patch() {
        let repo = setup().await;
        let created = repo.create(test_draft()).await.unwrap();

        let patch = ApartmentPatch {
            price: Some(200.0),
            ..ApartmentPatch::default()
        };
        assert!(repo.update(created.id, patch).await.unwrap());

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(
            fetched,
            Apartment {
                price: 200.0,
                ..created
            }
        );
    }

    #[tokio::test]
    async fn should_write_explicit_zero_values_from_patch() {
        let repo = setup().await;
        let created = repo
            .create(test_draft().favourite(true))
            .await
            .unwrap();

        let patch = ApartmentPatch {
            title: Some(String::new()),
            square_meters: Some(0),
            favourite: Some(false),
            ..ApartmentPatch::default()
        };
        repo.update(created.id, patch).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "");
        assert_eq!(fetched.square_meters, 0);
        assert!(!fetched.favourite);
        assert_eq!(fetched.address, "1 Main St");
    }

    #[tokio::test]
    async fn should_report_no_match_when_updating_missing_apartment() {
        let repo = setup().await;
        let patch = ApartmentPatch {
            title: Some("ghost".to_string()),
            ..ApartmentPatch::default()
        };
        assert!(!repo.update(ApartmentId::new(42), patch).await.unwrap());
    }

    #[tokio::test]
    async fn should_flip_favourite_in_place() {
        let repo = setup().await;
        let created = repo.create(test_draft()).await.unwrap();

        assert!(repo.toggle_favourite(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().unwrap().favourite);

        assert!(repo.toggle_favourite(created.id).await.unwrap());
        assert!(!repo.get_by_id(created.id).await.unwrap().unwrap().favourite);

        assert!(!repo.toggle_favourite(ApartmentId::new(999)).await.unwrap());
    }

    #[tokio::test]
    async fn should_delete_apartment_when_exists() {
        let repo = setup().await;
        let created = repo.create(test_draft()).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());

        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn should_not_reuse_id_of_deleted_apartment() {
        let repo = setup().await;
        let first = repo.create(test_draft()).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(test_draft()).await.unwrap();
        assert!(second.id > first.id);
    }
}
