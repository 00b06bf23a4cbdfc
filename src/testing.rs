//! In-memory stand-ins for the Postgres repositories.

use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::cards::repo::CardRepo;
use crate::cards::repo_types::{Card, CardPatch, NewCard};
use crate::error::StoreError;
use crate::users::repo::UserRepo;
use crate::users::repo_types::{NewUser, UserPatch, UserRecord};

#[derive(Default)]
pub struct MemoryCardRepo {
    rows: Mutex<Vec<Card>>,
}

#[async_trait]
impl CardRepo for MemoryCardRepo {
    async fn insert(&self, new: NewCard) -> Result<Card, StoreError> {
        let now = OffsetDateTime::now_utc();
        let card = Card {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            image_url: new.image_url,
            category: new.category,
            status: new.status,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(card.clone());
        Ok(card)
    }

    async fn list(&self) -> Result<Vec<Card>, StoreError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Card>, StoreError> {
        Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn update(&self, id: Uuid, patch: CardPatch) -> Result<Option<Card>, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(card) = rows.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        if let Some(v) = patch.title {
            card.title = v;
        }
        if let Some(v) = patch.description {
            card.description = v;
        }
        if patch.image_url.is_some() {
            card.image_url = patch.image_url;
        }
        if patch.category.is_some() {
            card.category = patch.category;
        }
        if let Some(v) = patch.status {
            card.status = v;
        }
        card.updated_at = OffsetDateTime::now_utc();
        Ok(Some(card.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Card>, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let pos = rows.iter().position(|c| c.id == id);
        Ok(pos.map(|i| rows.remove(i)))
    }
}

/// Enforces the unique email index the way Postgres would.
#[derive(Default)]
pub struct MemoryUserRepo {
    rows: Mutex<Vec<UserRecord>>,
}

impl MemoryUserRepo {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

fn email_taken() -> StoreError {
    StoreError::UniqueViolation("User_email_key".into())
}

#[async_trait]
impl UserRepo for MemoryUserRepo {
    async fn insert(&self, new: NewUser) -> Result<UserRecord, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == new.email) {
            return Err(email_taken());
        }
        let now = OffsetDateTime::now_utc();
        let user = UserRecord {
            id: Uuid::new_v4(),
            email: new.email,
            password_hash: new.password_hash,
            name: new.name,
            role: new.role,
            created_at: now,
            updated_at: now,
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<Option<UserRecord>, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        // No row matched: nothing is written, so the unique index never fires.
        let Some(idx) = rows.iter().position(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(email) = &patch.email {
            if rows.iter().any(|u| u.id != id && &u.email == email) {
                return Err(email_taken());
            }
        }
        let user = &mut rows[idx];
        if let Some(v) = patch.email {
            user.email = v;
        }
        if let Some(v) = patch.password_hash {
            user.password_hash = v;
        }
        if patch.name.is_some() {
            user.name = patch.name;
        }
        if let Some(v) = patch.role {
            user.role = v;
        }
        user.updated_at = OffsetDateTime::now_utc();
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let pos = rows.iter().position(|u| u.id == id);
        Ok(pos.map(|i| rows.remove(i)))
    }
}

/// Every call fails as if the pool were exhausted.
pub struct FailingUserRepo;

#[async_trait]
impl UserRepo for FailingUserRepo {
    async fn insert(&self, _new: NewUser) -> Result<UserRecord, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<UserRecord>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _id: Uuid, _patch: UserPatch) -> Result<Option<UserRecord>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

/// Sees no existing email on lookup but loses the insert to a concurrent
/// writer, as two simultaneous creates with the same email would.
pub struct RacingInsertUserRepo;

#[async_trait]
impl UserRepo for RacingInsertUserRepo {
    async fn insert(&self, _new: NewUser) -> Result<UserRecord, StoreError> {
        Err(email_taken())
    }

    async fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        Ok(None)
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(None)
    }

    async fn update(&self, _id: Uuid, _patch: UserPatch) -> Result<Option<UserRecord>, StoreError> {
        Ok(None)
    }

    async fn delete(&self, _id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        Ok(None)
    }
}
