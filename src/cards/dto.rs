use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::cards::repo_types::{Card, CardPatch};

/// Request body for `POST /cards`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCardRequest {
    #[validate(length(min = 1, message = "title should not be empty"))]
    #[schema(example = "hello")]
    pub title: String,
    #[validate(length(min = 1, message = "description should not be empty"))]
    #[schema(example = "hello_t")]
    pub description: String,
    #[schema(example = "https://example.com/image.jpg")]
    pub image_url: Option<String>,
    #[schema(example = "technology")]
    pub category: Option<String>,
    #[schema(example = "active")]
    pub status: Option<String>,
}

/// Request body for `PATCH /cards/:id`. Absent fields are left as they are.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCardRequest {
    #[validate(length(min = 1, message = "title should not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "description should not be empty"))]
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl From<UpdateCardRequest> for CardPatch {
    fn from(req: UpdateCardRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            image_url: req.image_url,
            category: req.category,
            status: req.status,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletedCardResponse {
    pub message: String,
    pub deleted_card: Card,
}
