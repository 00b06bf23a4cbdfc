use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::cards::dto::{CreateCardRequest, DeletedCardResponse, UpdateCardRequest};
use crate::cards::repo::CardRepo;
use crate::cards::repo_types::{Card, NewCard, DEFAULT_STATUS};
use crate::error::AppError;

const ENTITY: &str = "Card";

#[derive(Clone)]
pub struct CardService {
    repo: Arc<dyn CardRepo>,
}

impl CardService {
    pub fn new(repo: Arc<dyn CardRepo>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: CreateCardRequest) -> Result<Card, AppError> {
        let card = self
            .repo
            .insert(NewCard {
                title: input.title,
                description: input.description,
                image_url: input.image_url,
                category: input.category,
                status: input.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            })
            .await?;
        info!(card_id = %card.id, "card created");
        Ok(card)
    }

    pub async fn find_all(&self) -> Result<Vec<Card>, AppError> {
        Ok(self.repo.list().await?)
    }

    pub async fn find_one(&self, id: &str) -> Result<Card, AppError> {
        let uuid = parse_id(id)?;
        self.repo
            .find_by_id(uuid)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, id))
    }

    pub async fn update(&self, id: &str, input: UpdateCardRequest) -> Result<Card, AppError> {
        let uuid = parse_id(id)?;
        let card = self
            .repo
            .update(uuid, input.into())
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, id))?;
        debug!(card_id = %card.id, "card updated");
        Ok(card)
    }

    pub async fn remove(&self, id: &str) -> Result<DeletedCardResponse, AppError> {
        let uuid = parse_id(id)?;
        let card = self
            .repo
            .delete(uuid)
            .await?
            .ok_or_else(|| AppError::not_found(ENTITY, id))?;
        info!(card_id = %card.id, "card deleted");
        Ok(DeletedCardResponse {
            message: format!("Card with ID {id} has been successfully deleted"),
            deleted_card: card,
        })
    }
}

// An id that is not a UUID can never match a stored card.
fn parse_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::not_found(ENTITY, id))
}
