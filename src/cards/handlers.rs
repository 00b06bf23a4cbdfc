use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    cards::{
        dto::{CreateCardRequest, DeletedCardResponse, UpdateCardRequest},
        repo_types::Card,
    },
    error::AppError,
    extract::ValidatedJson,
    state::AppState,
};

pub fn card_routes() -> Router<AppState> {
    Router::new()
        .route("/cards", get(list_cards).post(create_card))
        .route(
            "/cards/:id",
            get(get_card).patch(update_card).delete(delete_card),
        )
}

/// Create a new card
#[utoipa::path(
    post,
    path = "/cards",
    tag = "cards",
    request_body = CreateCardRequest,
    responses(
        (status = 201, description = "The card has been successfully created.", body = Card),
        (status = 400, description = "Invalid request body", body = ErrorBody),
    )
)]
#[instrument(skip(state, body))]
pub async fn create_card(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateCardRequest>,
) -> Result<(StatusCode, Json<Card>), AppError> {
    let card = state.cards.create(body).await?;
    Ok((StatusCode::CREATED, Json(card)))
}

/// Get all cards
#[utoipa::path(
    get,
    path = "/cards",
    tag = "cards",
    responses((status = 200, description = "Return all cards", body = [Card]))
)]
#[instrument(skip(state))]
pub async fn list_cards(State(state): State<AppState>) -> Result<Json<Vec<Card>>, AppError> {
    Ok(Json(state.cards.find_all().await?))
}

/// Get a card by id
#[utoipa::path(
    get,
    path = "/cards/{id}",
    tag = "cards",
    params(("id" = String, Path, description = "The ID of the card to retrieve")),
    responses(
        (status = 200, description = "Return the card", body = Card),
        (status = 404, description = "Card not found", body = ErrorBody),
    )
)]
#[instrument(skip(state))]
pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Card>, AppError> {
    Ok(Json(state.cards.find_one(&id).await?))
}

/// Update a card
#[utoipa::path(
    patch,
    path = "/cards/{id}",
    tag = "cards",
    params(("id" = String, Path, description = "The ID of the card to update")),
    request_body = UpdateCardRequest,
    responses(
        (status = 200, description = "The card has been successfully updated.", body = Card),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 404, description = "Card not found", body = ErrorBody),
    )
)]
#[instrument(skip(state, body))]
pub async fn update_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateCardRequest>,
) -> Result<Json<Card>, AppError> {
    Ok(Json(state.cards.update(&id, body).await?))
}

/// Delete a card
#[utoipa::path(
    delete,
    path = "/cards/{id}",
    tag = "cards",
    params(("id" = String, Path, description = "The ID of the card to delete")),
    responses(
        (status = 200, description = "The card has been successfully deleted.", body = DeletedCardResponse),
        (status = 404, description = "Card not found", body = ErrorBody),
    )
)]
#[instrument(skip(state))]
pub async fn delete_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedCardResponse>, AppError> {
    Ok(Json(state.cards.remove(&id).await?))
}
