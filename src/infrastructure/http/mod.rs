//! HTTP REST API routes

mod character_routes;
mod combat_routes;
mod game_routes;
mod image_routes;
mod status_routes;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::application::error::GameError;
use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/", get(game_routes::welcome))
        // Status checks
        .route("/api/status", post(status_routes::create_status_check))
        .route("/api/status", get(status_routes::list_status_checks))
        // Character routes
        .route(
            "/api/character/create",
            post(character_routes::create_character),
        )
        .route("/api/character/{id}", get(character_routes::get_character))
        .route(
            "/api/character/abilities/{class}",
            get(character_routes::class_abilities),
        )
        // Game session routes
        .route("/api/game/initialize", get(game_routes::initialize_game))
        .route("/api/game/{id}", get(game_routes::get_game_state))
        .route("/api/story/scenes", get(game_routes::list_story_scenes))
        .route("/api/enemies", get(game_routes::list_enemies))
        // Images
        .route("/api/image/generate", post(image_routes::generate_image))
        // Combat routes
        .route("/api/combat/start", post(combat_routes::start_combat))
        .route("/api/combat/{id}", get(combat_routes::get_combat))
        .route("/api/combat/{id}/end", post(combat_routes::end_combat))
}

/// Map a service error onto the status code and message returned to clients
pub(crate) fn error_response(err: GameError) -> (StatusCode, String) {
    match err {
        GameError::Validation(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        GameError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        GameError::Repository(_) => {
            tracing::error!("Request failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, Response},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::application::ports::outbound::RepositoryError;
    use crate::infrastructure::config::AppConfig;
    use crate::infrastructure::imagen::UnconfiguredImageGenerator;
    use crate::infrastructure::persistence::SqliteRepository;

    async fn app() -> Router {
        app_with_repository().await.0
    }

    async fn app_with_repository() -> (Router, SqliteRepository) {
        let repository = SqliteRepository::in_memory().await.unwrap();
        let state = AppState::with_components(
            AppConfig::default(),
            repository.clone(),
            Arc::new(UnconfiguredImageGenerator),
        );
        (create_routes().with_state(Arc::new(state)), repository)
    }

    async fn stored_character_count(repository: &SqliteRepository) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM characters")
            .fetch_one(repository.pool())
            .await
            .unwrap();
        count
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        };
        app.clone().oneshot(request.unwrap()).await.unwrap()
    }

    async fn json_body(response: Response<Body>) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_error_response_codes() {
        assert_eq!(
            error_response(GameError::Validation("bad".into())).0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_response(GameError::not_found("Game state", "x")).0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_response(RepositoryError::Database("down".into()).into()).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_welcome() {
        let app = app().await;
        let response = send(&app, "GET", "/api/", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["message"].as_str().unwrap().contains("Eldritch"));
    }

    #[tokio::test]
    async fn test_unknown_class_is_rejected() {
        let (app, repository) = app_with_repository().await;
        let response = send(
            &app,
            "POST",
            "/api/character/create",
            Some(json!({"name": "Nobody", "character_class": "bard"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(stored_character_count(&repository).await, 0);

        let response = send(&app, "GET", "/api/character/abilities/bard", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_join_unknown_session_stores_nothing() {
        let (app, repository) = app_with_repository().await;
        let response = send(
            &app,
            "POST",
            "/api/character/create",
            Some(json!({
                "name": "Ghost",
                "character_class": "witch",
                "game_state_id": crate::domain::value_objects::GameSessionId::new().to_string(),
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(stored_character_count(&repository).await, 0);
    }

    #[tokio::test]
    async fn test_get_unknown_character() {
        let app = app().await;
        let uri = format!(
            "/api/character/{}",
            crate::domain::value_objects::CharacterId::new()
        );
        assert_eq!(send(&app, "GET", &uri, None).await.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            send(&app, "GET", "/api/character/nope", None).await.status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_class_abilities() {
        let app = app().await;
        let response = send(&app, "GET", "/api/character/abilities/detective", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["character_class"], "detective");
        assert_eq!(body["abilities"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_combat_for_unknown_session_is_not_found() {
        let app = app().await;
        let uri = format!(
            "/api/combat/start?game_state_id={}",
            crate::domain::value_objects::GameSessionId::new()
        );
        let response = send(&app, "POST", &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, "POST", "/api/combat/start?game_state_id=nope", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_initialize_create_and_fight() {
        let app = app().await;

        let response = send(&app, "GET", "/api/game/initialize?player_id=randolph", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["game_state"]["player_id"], "randolph");
        assert_eq!(body["game_state"]["current_scene"], "character_creation");
        assert_eq!(body["story_scenes"].as_array().unwrap().len(), 2);
        assert_eq!(body["enemies"].as_array().unwrap().len(), 3);
        let game_state_id = body["game_state"]["id"].as_str().unwrap().to_string();

        let response = send(
            &app,
            "POST",
            "/api/character/create",
            Some(json!({
                "name": "Murphy",
                "character_class": "detective",
                "game_state_id": game_state_id,
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let character = json_body(response).await;
        assert_eq!(character["max_hp"], 90);
        assert_eq!(character["sprite_image"]["mime_type"], "image/svg+xml");
        let character_id = character["id"].as_str().unwrap().to_string();

        let response = send(&app, "GET", &format!("/api/game/{game_state_id}"), None).await;
        let session = json_body(response).await;
        assert_eq!(session["party"][0]["id"], character_id.as_str());

        let response = send(&app, "GET", &format!("/api/character/{character_id}"), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["name"], "Murphy");

        let response = send(
            &app,
            "POST",
            &format!("/api/combat/start?game_state_id={game_state_id}"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let combat = json_body(response).await;
        let turn_order = combat["turn_order"].as_array().unwrap();
        assert_eq!(turn_order.len(), 3);
        assert!(turn_order.contains(&json!(format!("character:{character_id}"))));
        assert_eq!(combat["is_active"], true);
        assert_eq!(combat["current_turn"], 0);

        let combat_id = combat["id"].as_str().unwrap().to_string();
        let response = send(&app, "POST", &format!("/api/combat/{combat_id}/end"), None).await;
        assert_eq!(json_body(response).await["is_active"], false);

        let response = send(&app, "GET", &format!("/api/combat/{combat_id}"), None).await;
        assert_eq!(json_body(response).await["is_active"], false);
    }

    #[tokio::test]
    async fn test_image_generation_falls_back_to_placeholder() {
        let app = app().await;
        let response = send(
            &app,
            "POST",
            "/api/image/generate",
            Some(json!({"prompt": "a ruined lighthouse", "image_type": "background"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["mime_type"], "image/svg+xml");
        assert!(body["error_message"].is_string());
    }

    #[tokio::test]
    async fn test_status_checks() {
        let app = app().await;
        let response = send(
            &app,
            "POST",
            "/api/status",
            Some(json!({"client_name": "lantern"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["client_name"], "lantern");

        let response = send(&app, "GET", "/api/status", None).await;
        assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_listings() {
        let app = app().await;
        let scenes = json_body(send(&app, "GET", "/api/story/scenes", None).await).await;
        assert_eq!(scenes["scenes"][0]["title"], "The Whispering Shadows");

        let enemies = json_body(send(&app, "GET", "/api/enemies", None).await).await;
        assert_eq!(enemies["enemies"][0]["type"], "cultist");
    }
}
