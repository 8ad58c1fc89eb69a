//! Tests for the Generative Language client against a mocked upstream.

mod common;

use std::sync::Arc;

use chrono::Utc;
use mockito::{Matcher, Server};

use common::{INSTITUTE, closed_port_url};
use hostelhub::assistant::{
    AiError, AiErrorKind, AiOutcome, Assistant, CHAT_FALLBACK, ChatContext, GeminiClient,
    LanguageModel, SUMMARY_FALLBACK,
};
use hostelhub::config::AiSettings;
use hostelhub::models::seed;

const PATH: &str = "/v1beta/models/gemini-test:generateContent";

fn settings(base_url: &str) -> AiSettings {
    AiSettings {
        base_url: base_url.to_string(),
        model: "gemini-test".to_string(),
        api_key_var: "HOSTELHUB_TEST_UNUSED_KEY".to_string(),
        timeout: None,
    }
}

fn client(base_url: &str) -> GeminiClient {
    GeminiClient::new(&settings(base_url))
        .expect("client builds")
        .with_api_key("test-key")
}

fn assistant(base_url: &str) -> Assistant {
    Assistant::new(Arc::new(client(base_url)), INSTITUTE)
}

const OK_BODY: &str = r#"{
    "candidates": [{
        "content": {
            "parts": [{"text": "Breakfast needs attention. "}, {"text": "Cook parathas longer."}],
            "role": "model"
        },
        "finishReason": "STOP",
        "index": 0
    }]
}"#;

#[tokio::test]
async fn test_generate_returns_joined_candidate_text() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": "hello"}]}],
            "systemInstruction": {"parts": [{"text": "be brief"}]}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(OK_BODY)
        .create_async()
        .await;

    let text = client(&server.url()).generate("hello", Some("be brief")).await.unwrap();

    assert_eq!(text, "Breakfast needs attention. Cook parathas longer.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(500)
        .with_body("internal")
        .create_async()
        .await;

    let err = client(&server.url()).generate("hello", None).await.unwrap_err();

    assert!(matches!(err, AiError::Status { status: 500, .. }));
    assert_eq!(err.kind(), AiErrorKind::Upstream);
}

#[tokio::test]
async fn test_rejected_key_maps_to_unauthorized() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(403)
        .with_body(r#"{"error": {"status": "PERMISSION_DENIED"}}"#)
        .create_async()
        .await;

    let err = client(&server.url()).generate("hello", None).await.unwrap_err();

    assert_eq!(err.kind(), AiErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_malformed_body_maps_to_malformed() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let err = client(&server.url()).generate("hello", None).await.unwrap_err();

    assert_eq!(err.kind(), AiErrorKind::Malformed);
}

#[tokio::test]
async fn test_no_candidates_is_empty_response() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(r#"{"candidates": []}"#)
        .create_async()
        .await;

    let err = client(&server.url()).generate("hello", None).await.unwrap_err();

    assert!(matches!(err, AiError::EmptyResponse));
}

#[tokio::test]
async fn test_summarize_network_failure_returns_fallback() {
    let outcome = assistant(&closed_port_url())
        .summarize(&seed::mess_feedbacks(Utc::now()))
        .await;

    assert_eq!(outcome.text(), SUMMARY_FALLBACK);
    assert_eq!(outcome.error_kind(), Some(AiErrorKind::Network));
}

#[tokio::test]
async fn test_chat_upstream_failure_returns_fallback() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(503)
        .with_body("overloaded")
        .create_async()
        .await;

    let outcome = assistant(&server.url())
        .chat("Where is the mess hall?", &ChatContext::default())
        .await;

    assert_eq!(
        outcome,
        AiOutcome::Fallback { kind: AiErrorKind::Upstream, text: CHAT_FALLBACK }
    );
}

#[tokio::test]
async fn test_chat_sends_snapshot_and_system_instruction() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("Leaking tap in washroom".to_string()),
            Matcher::Regex("Sohan Lal".to_string()),
            Matcher::Regex("User asks: Is there a guest meal today\\?".to_string()),
            Matcher::Regex("helpful assistant for NITJ hostel residents".to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"Yes, Sohan Lal for lunch."}]}}]}"#)
        .create_async()
        .await;

    let now = Utc::now();
    let context = ChatContext {
        maintenance_requests: seed::maintenance_requests(now),
        mess_feedbacks: seed::mess_feedbacks(now),
        guest_meals: seed::guest_meals(),
    };
    let outcome = assistant(&server.url())
        .chat("Is there a guest meal today?", &context)
        .await;

    assert_eq!(outcome, AiOutcome::Generated("Yes, Sohan Lal for lunch.".to_string()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_credential_never_reaches_the_network() {
    let mut server = Server::new_async().await;
    let mock = server.mock("POST", PATH).expect(0).create_async().await;

    let client = GeminiClient::new(&settings(&server.url())).unwrap();
    let outcome = Assistant::new(Arc::new(client), INSTITUTE).summarize(&[]).await;

    assert_eq!(outcome.text(), SUMMARY_FALLBACK);
    assert_eq!(outcome.error_kind(), Some(AiErrorKind::MissingCredential));
    mock.assert_async().await;
}
