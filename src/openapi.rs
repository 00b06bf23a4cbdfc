use axum::{
    response::{Html, Json},
    routing::get,
    Router,
};
use utoipa::OpenApi;

use crate::cards::{dto as card_dto, handlers as card_handlers, repo_types::Card};
use crate::error::ErrorBody;
use crate::state::AppState;
use crate::users::{
    dto as user_dto, handlers as user_handlers,
    repo_types::{PublicUser, Role, UserRecord},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Cardboard API", description = "Cards and users", version = "1.0"),
    paths(
        card_handlers::create_card,
        card_handlers::list_cards,
        card_handlers::get_card,
        card_handlers::update_card,
        card_handlers::delete_card,
        user_handlers::create_user,
        user_handlers::list_users,
        user_handlers::get_user,
        user_handlers::update_user,
        user_handlers::delete_user,
    ),
    components(schemas(
        Card,
        card_dto::CreateCardRequest,
        card_dto::UpdateCardRequest,
        card_dto::DeletedCardResponse,
        PublicUser,
        UserRecord,
        Role,
        user_dto::CreateUserRequest,
        user_dto::UpdateUserRequest,
        user_dto::DeletedUserResponse,
        ErrorBody,
    )),
    tags(
        (name = "cards", description = "Card management"),
        (name = "users", description = "User management"),
    )
)]
pub struct ApiDoc;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

pub fn docs_routes() -> Router<AppState> {
    Router::new()
        .route(OPENAPI_JSON_PATH, get(|| async { Json(ApiDoc::openapi()) }))
        .route("/api", get(serve_docs))
}

/// Interactive docs page rendered by Stoplight Elements from the CDN,
/// reading the generated document above.
pub async fn serve_docs() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8"/>
  <title>Cardboard API</title>
  <script src="https://unpkg.com/@stoplight/elements@latest/web-components.min.js"></script>
  <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements@latest/styles.min.css">
</head>
<body>
  <elements-api apiDescriptionUrl="/api-docs/openapi.json" router="hash" layout="sidebar"></elements-api>
</body>
</html>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_both_resources() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().expect("paths");
        assert!(paths.contains_key("/cards"));
        assert!(paths.contains_key("/cards/{id}"));
        assert!(paths.contains_key("/users"));
        assert!(paths.contains_key("/users/{id}"));
        assert!(doc["components"]["schemas"].get("Card").is_some());
    }

    #[tokio::test]
    async fn docs_page_points_at_the_generated_document() {
        let Html(page) = serve_docs().await;
        assert!(page.contains(&format!("apiDescriptionUrl=\"{OPENAPI_JSON_PATH}\"")));
    }
}
