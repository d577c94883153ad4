use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::util::ServiceExt;

use chat_widget_host::config::StubMode;
use chat_widget_host::models::{ChatbotReply, ErrorReply, HealthStatus};
use chat_widget_host::routes::create_router;
use chat_widget_host::service::stub_service::{StubService, FALLBACK_REPLY};

fn app(mode: StubMode) -> Router {
    create_router(StubService::new(mode), "does-not-exist")
}

fn chatbot_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chatbot")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_echo_reply() {
    let response = app(StubMode::Echo)
        .oneshot(chatbot_request(r#"{"message": "  hello "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let reply: ChatbotReply = read_json(response).await;
    assert_eq!(reply.response, "Você perguntou: hello");
}

#[tokio::test]
async fn test_fallback_reply() {
    let response = app(StubMode::Fallback)
        .oneshot(chatbot_request(r#"{"message": "prevenção"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let reply: ChatbotReply = read_json(response).await;
    assert_eq!(reply.response, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_empty_message_is_bad_request() {
    let response = app(StubMode::Echo)
        .oneshot(chatbot_request(r#"{"message": "   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let err: ErrorReply = read_json(response).await;
    assert_eq!(err.error, "Mensagem vazia");
}

#[tokio::test]
async fn test_missing_message_is_bad_request() {
    for body in [r#"{"text": "hello"}"#, r#"{"message": 42}"#, "not json", ""] {
        let response = app(StubMode::Echo)
            .oneshot(chatbot_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let err: ErrorReply = read_json(response).await;
        assert_eq!(err.error, "Corpo da requisição deve conter 'message'");
    }
}

#[tokio::test]
async fn test_fail_mode_returns_server_error() {
    let response = app(StubMode::Fail)
        .oneshot(chatbot_request(r#"{"message": "hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let err: ErrorReply = read_json(response).await;
    assert_eq!(err.error, "Falha simulada do chatbot");
}

#[tokio::test]
async fn test_health() {
    let response = app(StubMode::Echo)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let health: HealthStatus = read_json(response).await;
    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn test_cross_origin_requests_allowed() {
    let mut request = chatbot_request(r#"{"message": "hello"}"#);
    request
        .headers_mut()
        .insert("origin", "http://127.0.0.1:8080".parse().unwrap());

    let response = app(StubMode::Echo).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_serves_widget_bundle() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>widget</html>").unwrap();
    let app = create_router(StubService::default(), dir.path());

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"<html>widget</html>");
}

#[tokio::test]
async fn test_unknown_path_without_bundle_is_not_found() {
    let response = app(StubMode::Echo)
        .oneshot(Request::get("/missing.js").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
