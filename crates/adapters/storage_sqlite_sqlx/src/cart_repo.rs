//! `SQLite` implementation of [`CartRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use flatshop_app::ports::CartRepository;
use flatshop_domain::cart::{CartItem, CartItemDraft};
use flatshop_domain::error::FlatshopError;
use flatshop_domain::id::{ApartmentId, CartItemId, UserId};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`CartItem`].
struct Wrapper(CartItem);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(CartItem {
            id: CartItemId::new(row.try_get("id")?),
            apartment_id: ApartmentId::new(row.try_get("apartment_id")?),
            user_id: UserId::new(row.try_get("user_id")?),
            quantity: row.try_get("quantity")?,
        }))
    }
}

// The conflict branch adds one regardless of the requested quantity, saturating
// at `i32::MAX` so the row can still be read back into a `CartItem`.
const UPSERT: &str = "INSERT INTO cart (apartment_id, user_id, quantity) VALUES (?, ?, ?) \
     ON CONFLICT (apartment_id, user_id) \
     DO UPDATE SET quantity = MIN(cart.quantity + 1, 2147483647) \
     RETURNING id";
const SELECT_BY_USER: &str =
    "SELECT id, apartment_id, user_id, quantity FROM cart WHERE user_id = ? ORDER BY id";
const DELETE_PAIR: &str = "DELETE FROM cart WHERE user_id = ? AND apartment_id = ?";

/// `SQLite`-backed cart repository.
pub struct SqliteCartRepository {
    pool: SqlitePool,
}

impl SqliteCartRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CartRepository for SqliteCartRepository {
    fn add(
        &self,
        draft: CartItemDraft,
    ) -> impl Future<Output = Result<CartItem, FlatshopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let id: i64 = sqlx::query_scalar(UPSERT)
                .bind(draft.apartment_id.as_i64())
                .bind(draft.user_id.as_i64())
                .bind(draft.quantity)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(CartItem::from_draft(CartItemId::new(id), draft))
        }
    }

    fn find_by_user(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<CartItem>, FlatshopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_USER)
                .bind(user_id.as_i64())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn remove(
        &self,
        user_id: UserId,
        apartment_id: ApartmentId,
    ) -> impl Future<Output = Result<bool, FlatshopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_PAIR)
                .bind(user_id.as_i64())
                .bind(apartment_id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
