
use lotto_types::{
    ApiError, DeleteResponse, Draw, NOT_UNIQUE, Player, PlayerStanding, REQUIRED,
    SanitizeRequest, SanitizeResponse,
};
use test_helpers::*;

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_memory_app();

    let response = warp::test::request()
        .method("GET")
        .path("/health")
        .reply(&app)
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.body(), "OK");
}

#[tokio::test]
async fn test_register_and_list_players() {
    let app = create_memory_app();

    let response = warp::test::request()
        .method("POST")
        .path("/players")
        .json(&player_form("Ana", &[1, 2, 3, 4, 5, 6]))
        .reply(&app)
        .await;
    assert_eq!(response.status(), 201);
    let created: Player = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(created.name, "Ana");
    assert_eq!(created.numbers, vec![1, 2, 3, 4, 5, 6]);

    let response = warp::test::request()
        .method("GET")
        .path("/players")
        .reply(&app)
        .await;
    assert_eq!(response.status(), 200);
    let players: Vec<Player> = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(players, vec![created]);
}

#[tokio::test]
async fn test_invalid_player_returns_field_errors() {
    let app = create_memory_app();

    let response = warp::test::request()
        .method("POST")
        .path("/players")
        .json(&player_form("", &[9, 9, 1, 2, 3, 4]))
        .reply(&app)
        .await;

    assert_eq!(response.status(), 422);
    match serde_json::from_slice::<ApiError>(response.body()).unwrap() {
        ApiError::Validation { errors } => {
            assert_eq!(errors.get("name"), Some(REQUIRED));
            assert_eq!(errors.get("duplicate"), Some(NOT_UNIQUE));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_duplicate_draw_conflict() {
    let app = create_database_app().await;

    let first = warp::test::request()
        .method("POST")
        .path("/draws")
        .json(&draw_form("100", &[1, 2, 3, 4, 5, 6]))
        .reply(&app)
        .await;
    assert_eq!(first.status(), 201);

    let second = warp::test::request()
        .method("POST")
        .path("/draws")
        .json(&draw_form("100", &[10, 20, 30, 40, 50, 60]))
        .reply(&app)
        .await;
    assert_eq!(second.status(), 409);
    let error: ApiError = serde_json::from_slice(second.body()).unwrap();
    assert_eq!(
        error,
        ApiError::DuplicateDraw {
            game_id: "100".to_string()
        }
    );

    let response = warp::test::request()
        .method("GET")
        .path("/draws")
        .reply(&app)
        .await;
    let draws: Vec<Draw> = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(draws.len(), 1);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let app = create_memory_app();

    warp::test::request()
        .method("POST")
        .path("/draws")
        .json(&draw_form("Mega 2750", &[1, 2, 3, 4, 5, 6]))
        .reply(&app)
        .await;

    let response = warp::test::request()
        .method("DELETE")
        .path("/draws?gameId=Mega%202750")
        .reply(&app)
        .await;
    assert_eq!(response.status(), 200);
    let body: DeleteResponse = serde_json::from_slice(response.body()).unwrap();
    assert!(body.removed);

    let response = warp::test::request()
        .method("DELETE")
        .path("/draws?gameId=Mega%202750")
        .reply(&app)
        .await;
    assert_eq!(response.status(), 200);
    let body: DeleteResponse = serde_json::from_slice(response.body()).unwrap();
    assert!(!body.removed);

    let response = warp::test::request()
        .method("DELETE")
        .path("/players/not-a-player")
        .reply(&app)
        .await;
    assert_eq!(response.status(), 200);
    let body: DeleteResponse = serde_json::from_slice(response.body()).unwrap();
    assert!(!body.removed);
}

#[tokio::test]
async fn test_standings_over_api() {
    let app = create_database_app().await;

    warp::test::request()
        .method("POST")
        .path("/players")
        .json(&player_form("Ana", &[1, 2, 3, 4, 5, 6]))
        .reply(&app)
        .await;
    for (id, numbers) in [("A", [1u8, 2, 3, 10, 11, 12]), ("B", [4, 5, 6, 20, 21, 22])] {
        let response = warp::test::request()
            .method("POST")
            .path("/draws")
            .json(&draw_form(id, &numbers))
            .reply(&app)
            .await;
        assert_eq!(response.status(), 201);
    }

    let response = warp::test::request()
        .method("GET")
        .path("/standings")
        .reply(&app)
        .await;
    assert_eq!(response.status(), 200);

    let standings: Vec<PlayerStanding> = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(standings.len(), 1);
    assert!(standings[0].result.is_winner);
    assert_eq!(standings[0].result.matched_count(), 6);
}

#[tokio::test]
async fn test_export_download() {
    let app = create_memory_app();

    warp::test::request()
        .method("POST")
        .path("/players")
        .json(&player_form("Ana", &[1, 2, 3, 4, 5, 6]))
        .reply(&app)
        .await;

    let response = warp::test::request()
        .method("GET")
        .path("/export.csv")
        .reply(&app)
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"],
        "text/csv; charset=utf-8"
    );
    let disposition = response.headers()["content-disposition"].to_str().unwrap();
    assert!(disposition.starts_with("attachment; filename=\"lottery-export-"));

    let body = std::str::from_utf8(response.body()).unwrap();
    assert!(body.starts_with("REGISTERED DRAWS\n"));
    assert!(body.contains("Ana,1,2,3,4,5,6,0"));
}

#[tokio::test]
async fn test_sanitize_rejects_values_above_sixty() {
    let app = create_memory_app();

    let response = warp::test::request()
        .method("POST")
        .path("/input/sanitize")
        .json(&SanitizeRequest {
            current: "7".to_string(),
            typed: "75".to_string(),
        })
        .reply(&app)
        .await;
    assert_eq!(response.status(), 200);
    let body: SanitizeResponse = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(
        body,
        SanitizeResponse {
            value: "7".to_string(),
            accepted: false
        }
    );

    let response = warp::test::request()
        .method("POST")
        .path("/input/sanitize")
        .json(&SanitizeRequest {
            current: "".to_string(),
            typed: "4x2".to_string(),
        })
        .reply(&app)
        .await;
    let body: SanitizeResponse = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body.value, "42");
    assert!(body.accepted);
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = create_memory_app();

    let response = warp::test::request()
        .method("POST")
        .path("/players")
        .header("content-type", "application/json")
        .body("{not json")
        .reply(&app)
        .await;

    assert_eq!(response.status(), 400);
}
