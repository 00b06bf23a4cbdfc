use crate::cards::{repo::PgCardRepo, services::CardService};
use crate::users::{repo::PgUserRepo, services::UserService};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub cards: CardService,
    pub users: UserService,
}

impl AppState {
    /// Wires both resource services onto one shared Postgres pool.
    pub fn from_pool(db: PgPool) -> Self {
        Self {
            cards: CardService::new(Arc::new(PgCardRepo::new(db.clone()))),
            users: UserService::new(Arc::new(PgUserRepo::new(db))),
        }
    }
}

#[cfg(test)]
impl AppState {
    pub fn fake() -> Self {
        use crate::testing::{MemoryCardRepo, MemoryUserRepo};

        Self {
            cards: CardService::new(Arc::new(MemoryCardRepo::default())),
            users: UserService::new(Arc::new(MemoryUserRepo::default())),
        }
    }
}
