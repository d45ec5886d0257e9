use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use zelig::api::client::{ApiError, GuideApi, HttpGuideApi};
use zelig::api::types::{Direction, RiskColor};

// ============================================================================
// Helper Functions
// ============================================================================

async fn mock_api() -> (MockServer, HttpGuideApi) {
    let server = MockServer::start().await;
    let api = HttpGuideApi::new(&server.uri()).unwrap();
    (server, api)
}

// ============================================================================
// Chat Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_chat_sends_query_and_returns_response() {
    let (server, api) = mock_api().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({"query": "Where is Fes?"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"response": "Fes is in the north of Morocco."})),
        )
        .mount(&server)
        .await;

    let reply = api.chat("Where is Fes?").await.unwrap();
    assert_eq!(reply, "Fes is in the north of Morocco.");
}

#[tokio::test]
async fn test_chat_error_status_carries_body() {
    let (server, api) = mock_api().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(503).set_body_string("model warming up"))
        .mount(&server)
        .await;

    let err = api.chat("hello").await.unwrap_err();
    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "model warming up");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_chat_malformed_body_is_parse_error() {
    let (server, api) = mock_api().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string("{\"answer\": \"wrong shape\"}"),
        )
        .mount(&server)
        .await;

    let err = api.chat("hello").await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_chat_unreachable_server_is_network_error() {
    // Nothing listens on this port.
    let api = HttpGuideApi::new("http://127.0.0.1:1").unwrap();
    let err = api.chat("hello").await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
}

// ============================================================================
// Translate Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_translate_to_darija() {
    let (server, api) = mock_api().await;

    Mock::given(method("POST"))
        .and(path("/api/translate"))
        .and(body_json(json!({"text": "Hello friend", "target": "darija"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"translation": "Salam sahbi"})))
        .mount(&server)
        .await;

    let result = api.translate("Hello friend", Direction::ToDarija).await.unwrap();
    assert_eq!(result, "Salam sahbi");
}

#[tokio::test]
async fn test_translate_to_english_sends_other_target() {
    let (server, api) = mock_api().await;

    Mock::given(method("POST"))
        .and(path("/api/translate"))
        .and(body_json(json!({"text": "wakha", "target": "english"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"translation": "okay"})))
        .mount(&server)
        .await;

    let result = api.translate("wakha", Direction::ToEnglish).await.unwrap();
    assert_eq!(result, "okay");
}

// ============================================================================
// Security Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_check_city_returns_full_report() {
    let (server, api) = mock_api().await;

    Mock::given(method("GET"))
        .and(path("/api/security/Tangier"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "city": "Tangier",
            "city_ar": "طنجة",
            "risk_level": "Low",
            "risk_color": "green",
            "recommendation": "Enjoy the medina.",
            "sources_count": 12,
            "hits": {"crime": 1, "accident": 0}
        })))
        .mount(&server)
        .await;

    let report = api.check_city("Tangier").await.unwrap();
    assert_eq!(report.city, "Tangier");
    assert_eq!(report.city_ar.as_deref(), Some("طنجة"));
    assert_eq!(report.risk_color, RiskColor::Green);
    assert_eq!(report.sources_count, 12);
    assert_eq!(report.hits.unwrap().get("crime"), Some(&1));
}

#[tokio::test]
async fn test_check_city_encodes_spaces_in_path() {
    let (server, api) = mock_api().await;

    // The client percent-encodes path segments.
    Mock::given(method("GET"))
        .and(path("/api/security/El%20Jadida"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "city": "El Jadida",
            "risk_level": "Low",
            "recommendation": "All calm."
        })))
        .mount(&server)
        .await;

    let report = api.check_city("El Jadida").await.unwrap();
    assert_eq!(report.city, "El Jadida");
    // Optional fields absent: color degrades to Unknown.
    assert_eq!(report.risk_color, RiskColor::Unknown);
}

#[tokio::test]
async fn test_check_city_not_found_is_api_error() {
    let (server, api) = mock_api().await;

    Mock::given(method("GET"))
        .and(path("/api/security/Atlantis"))
        .respond_with(ResponseTemplate::new(404).set_body_string("unknown city"))
        .mount(&server)
        .await;

    let err = api.check_city("Atlantis").await.unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 404, .. }), "got {err:?}");
}

// ============================================================================
// Social Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_feed_returns_posts_in_order() {
    let (server, api) = mock_api().await;

    Mock::given(method("GET"))
        .and(path("/api/social"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"username": "aya", "content": "Mint tea in Jemaa el-Fna"},
            {"username": "karim", "content": "Sunrise over Merzouga", "image_url": "http://img/1.jpg"}
        ])))
        .mount(&server)
        .await;

    let posts = api.feed().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].username, "aya");
    assert_eq!(posts[0].image_url, None);
    assert_eq!(posts[1].image_url.as_deref(), Some("http://img/1.jpg"));
}

#[tokio::test]
async fn test_post_sends_both_fields_and_returns_created_entry() {
    let (server, api) = mock_api().await;

    Mock::given(method("POST"))
        .and(path("/api/social"))
        .and(body_json(json!({"username": "aya", "content": "Lovely riad"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "username": "aya",
            "content": "Lovely riad"
        })))
        .mount(&server)
        .await;

    let created = api.post("aya", "Lovely riad").await.unwrap();
    assert_eq!(created.username, "aya");
    assert_eq!(created.content, "Lovely riad");
}

#[tokio::test]
async fn test_post_server_error_is_api_error() {
    let (server, api) = mock_api().await;

    Mock::given(method("POST"))
        .and(path("/api/social"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&server)
        .await;

    let err = api.post("aya", "hi").await.unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 500, .. }), "got {err:?}");
}
