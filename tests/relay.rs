use findn::core::PlatformSettings;
use findn::profile::{Platform, ProfileData};
use findn::relay::{
    AnalysisSession, MessageTransport, PageScraper, RelayClient, RelayError, RelayMessage,
    RelayReply, RelayWorker, SessionError,
};
use findn::types::BackendStatus;
use serde_json::{json, Value};
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

const LINKEDIN_HTML: &str = include_str!("fixtures/linkedin_profile.html");

// Nothing listens on the discard port.
const DEAD_BACKEND: &str = "http://127.0.0.1:9";

fn analysis() -> Value {
    json!({
        "connections": [{"title": "Mathematicians", "subtitle": "Shared interests", "link": ""}],
        "communication_starters": [{"prompt": "What are you computing lately?"}],
        "interest_expansions": [{"topic": "Looms", "why": "Punched cards"}]
    })
}

fn profile() -> ProfileData {
    let mut profile = ProfileData::new(Platform::Linkedin);
    profile.name = "Ada Lovelace".to_string();
    profile
}

#[tokio::test]
async fn test_analyze_unwraps_successful_envelope() {
    let mock_server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/analyze"))
        .and(matchers::body_partial_json(
            json!({"profileData": {"platform": "linkedin", "name": "Ada Lovelace"}}),
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": analysis()})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RelayClient::new(&mock_server.uri()).unwrap();
    let result = client.analyze(&profile()).await.unwrap();

    assert_eq!(result.connections[0].title, "Mathematicians");
    assert_eq!(result.interest_expansions[0].why, "Punched cards");
}

#[tokio::test]
async fn test_analyze_surfaces_backend_error_message() {
    let mock_server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "success": false,
            "error": "API rate limit exceeded. Please try again later."
        })))
        .mount(&mock_server)
        .await;

    let client = RelayClient::new(&mock_server.uri()).unwrap();
    let error = client.analyze(&profile()).await.unwrap_err();

    assert_eq!(
        error.to_string(),
        "API rate limit exceeded. Please try again later."
    );
}

#[tokio::test]
async fn test_analyze_falls_back_to_status_code() {
    let mock_server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = RelayClient::new(&mock_server.uri()).unwrap();
    let error = client.analyze(&profile()).await.unwrap_err();

    assert_eq!(error.to_string(), "Backend API error: 502");
}

#[tokio::test]
async fn test_analyze_rejects_unsuccessful_ok_response() {
    let mock_server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
        .mount(&mock_server)
        .await;

    let client = RelayClient::new(&mock_server.uri()).unwrap();
    let error = client.analyze(&profile()).await.unwrap_err();

    assert_eq!(error.to_string(), "Backend returned unsuccessful response");
}

#[tokio::test]
async fn test_analyze_rewrites_connection_failure() {
    let client = RelayClient::new(DEAD_BACKEND).unwrap();
    let error = client.analyze(&profile()).await.unwrap_err();

    assert!(matches!(error, RelayError::Unreachable { .. }));
    assert_eq!(
        error.to_string(),
        "Cannot connect to Findn AI backend. Make sure the server is running on http://127.0.0.1:9"
    );
}

#[tokio::test]
async fn test_check_status() {
    let healthy = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&healthy)
        .await;

    let failing = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&failing)
        .await;

    let status = |url: String| async move { RelayClient::new(&url).unwrap().check_status().await };

    assert_eq!(status(healthy.uri()).await, BackendStatus::Connected);
    assert_eq!(status(failing.uri()).await, BackendStatus::Error);
    assert_eq!(status(DEAD_BACKEND.to_string()).await, BackendStatus::Offline);
}

#[tokio::test]
async fn test_worker_relays_analysis_and_status() {
    let mock_server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/analyze"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": analysis()})),
        )
        .mount(&mock_server)
        .await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let (relay, worker) = RelayWorker::new(RelayClient::new(&mock_server.uri()).unwrap()).spawn();

    let reply = relay
        .send(RelayMessage::AnalyzeProfile {
            profile_data: profile(),
        })
        .await
        .unwrap();
    match reply {
        Some(RelayReply::Analysis(envelope)) => assert!(envelope.success),
        other => panic!("unexpected reply: {:?}", other),
    }

    let reply = relay.send(RelayMessage::CheckBackendStatus).await.unwrap();
    assert_eq!(
        serde_json::to_value(&reply).unwrap(),
        json!({"success": true, "status": "connected"})
    );

    drop(relay);
    worker.await.unwrap();
}

#[tokio::test]
async fn test_worker_wraps_failures_in_envelope() {
    let (relay, _worker) = RelayWorker::new(RelayClient::new(DEAD_BACKEND).unwrap()).spawn();

    let reply = relay
        .send(RelayMessage::AnalyzeProfile {
            profile_data: profile(),
        })
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&reply).unwrap(),
        json!({
            "success": false,
            "error": "Cannot connect to Findn AI backend. Make sure the server is running on http://127.0.0.1:9"
        })
    );
}

#[tokio::test]
async fn test_session_end_to_end() {
    let mock_server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/analyze"))
        .and(matchers::body_partial_json(json!({
            "profileData": {
                "platform": "linkedin",
                "name": "Ada Lovelace",
                "company": "Analytical Engines Ltd"
            }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": analysis()})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (relay, _worker) = RelayWorker::new(RelayClient::new(&mock_server.uri()).unwrap()).spawn();
    let session = AnalysisSession::new(relay, PlatformSettings::default());
    let page = PageScraper::new("https://www.linkedin.com/in/ada-lovelace/", LINKEDIN_HTML);

    let result = session.analyze_page(&page).await.unwrap();
    assert_eq!(result.communication_starters[0].prompt, "What are you computing lately?");
    assert_eq!(session.check_backend_status().await, BackendStatus::Error);
}

#[tokio::test]
async fn test_session_reports_backend_error() {
    let (relay, _worker) = RelayWorker::new(RelayClient::new(DEAD_BACKEND).unwrap()).spawn();
    let session = AnalysisSession::new(relay, PlatformSettings::default());
    let page = PageScraper::new("https://www.linkedin.com/in/ada-lovelace/", LINKEDIN_HTML);

    let error = session.analyze_page(&page).await.unwrap_err();
    assert!(matches!(error, SessionError::Analysis(ref message) if message.starts_with("Cannot connect")));
    assert_eq!(session.check_backend_status().await, BackendStatus::Offline);
}
