use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::cards::repo_types::{Card, CardPatch, NewCard};
use crate::error::StoreError;

#[async_trait]
pub trait CardRepo: Send + Sync {
    async fn insert(&self, new: NewCard) -> Result<Card, StoreError>;
    async fn list(&self) -> Result<Vec<Card>, StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Card>, StoreError>;
    /// Applies `patch` to the card if it exists, in a single statement.
    async fn update(&self, id: Uuid, patch: CardPatch) -> Result<Option<Card>, StoreError>;
    /// Deletes the card if it exists and returns the row as it was.
    async fn delete(&self, id: Uuid) -> Result<Option<Card>, StoreError>;
}

#[derive(Clone)]
pub struct PgCardRepo {
    db: PgPool,
}

impl PgCardRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CardRepo for PgCardRepo {
    async fn insert(&self, new: NewCard) -> Result<Card, StoreError> {
        sqlx::query_as::<_, Card>(
            r#"
            INSERT INTO "Card" (title, description, image_url, category, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, image_url, category, status, created_at, updated_at
            "#,
        )
        .bind(new.title)
        .bind(new.description)
        .bind(new.image_url)
        .bind(new.category)
        .bind(new.status)
        .fetch_one(&self.db)
        .await
        .map_err(StoreError::from_sqlx)
    }

    async fn list(&self) -> Result<Vec<Card>, StoreError> {
        sqlx::query_as::<_, Card>(
            r#"
            SELECT id, title, description, image_url, category, status, created_at, updated_at
            FROM "Card"
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(StoreError::from_sqlx)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Card>, StoreError> {
        sqlx::query_as::<_, Card>(
            r#"
            SELECT id, title, description, image_url, category, status, created_at, updated_at
            FROM "Card"
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(StoreError::from_sqlx)
    }

    async fn update(&self, id: Uuid, patch: CardPatch) -> Result<Option<Card>, StoreError> {
        sqlx::query_as::<_, Card>(
            r#"
            UPDATE "Card"
               SET title       = COALESCE($2, title),
                   description = COALESCE($3, description),
                   image_url   = COALESCE($4, image_url),
                   category    = COALESCE($5, category),
                   status      = COALESCE($6, status),
                   updated_at  = now()
             WHERE id = $1
            RETURNING id, title, description, image_url, category, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.image_url)
        .bind(patch.category)
        .bind(patch.status)
        .fetch_optional(&self.db)
        .await
        .map_err(StoreError::from_sqlx)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Card>, StoreError> {
        sqlx::query_as::<_, Card>(
            r#"
            DELETE FROM "Card"
             WHERE id = $1
            RETURNING id, title, description, image_url, category, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(StoreError::from_sqlx)
    }
}
