//! Unit tests for the auth command

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::commands::auth::*;
use crate::ui::TestUserInterface;
use openhue_runtime::deps::UserInterface;
use openhue_runtime::{HueClient, HueError, TransportConfig};

struct TestFixture {
    ui: Arc<TestUserInterface>,
    server: MockServer,
}

impl TestFixture {
    async fn new() -> Self {
        Self {
            ui: Arc::new(TestUserInterface::new()),
            server: MockServer::start().await,
        }
    }

    async fn respond_with(&self, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/api"))
            .and(body_json(json!({
                "devicetype": "openhue#cli",
                "generateclientkey": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    fn client(&self) -> HueClient {
        HueClient::from_parts(self.server.uri(), Vec::new(), &TransportConfig::default()).unwrap()
    }

    fn to_deps(&self) -> AuthDependencies {
        AuthDependencies {
            ui: self.ui.clone() as Arc<dyn UserInterface>,
            client: self.client(),
        }
    }
}

#[tokio::test]
async fn test_request_key_success() {
    let fixture = TestFixture::new().await;
    fixture
        .respond_with(json!([{"success": {"username": "new-key", "clientkey": "ABCDEF"}}]))
        .await;

    let paired = request_key(&fixture.client()).await.unwrap();

    assert_eq!(paired.key, "new-key");
    assert_eq!(paired.client_key.as_deref(), Some("ABCDEF"));
}

#[tokio::test]
async fn test_request_key_without_client_key() {
    let fixture = TestFixture::new().await;
    fixture
        .respond_with(json!([{"success": {"username": "only-user"}}]))
        .await;

    let paired = request_key(&fixture.client()).await.unwrap();

    assert_eq!(paired.key, "only-user");
    assert!(paired.client_key.is_none());
}

#[tokio::test]
async fn test_request_key_bridge_error() {
    let fixture = TestFixture::new().await;
    fixture
        .respond_with(json!([{"error": {
            "type": 101,
            "address": "",
            "description": "link button not pressed"
        }}]))
        .await;

    let err = request_key(&fixture.client()).await.unwrap_err();

    match err {
        HueError::Pairing { kind, description } => {
            assert_eq!(kind, LINK_BUTTON_NOT_PRESSED);
            assert_eq!(description, "link button not pressed");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_request_key_empty_response() {
    let fixture = TestFixture::new().await;
    fixture.respond_with(json!([])).await;

    let err = request_key(&fixture.client()).await.unwrap_err();
    assert!(matches!(err, HueError::Pairing { kind: 0, .. }));
}

#[tokio::test]
async fn test_auth_prints_key() {
    let fixture = TestFixture::new().await;
    fixture
        .respond_with(json!([{"success": {"username": "new-key", "clientkey": "ABCDEF"}}]))
        .await;

    let paired = execute_with_deps(&fixture.to_deps()).await.unwrap();
    assert_eq!(paired.key, "new-key");

    let output = fixture.ui.get_output();
    assert!(output.iter().any(|s| s.contains("Pairing with bridge")));
    assert!(output.iter().any(|s| s == "Key: new-key"));
    assert!(output.iter().any(|s| s == "Client key: ABCDEF"));
}

#[tokio::test]
async fn test_auth_link_button_hint() {
    let fixture = TestFixture::new().await;
    fixture
        .respond_with(json!([{"error": {"type": 101, "description": "link button not pressed"}}]))
        .await;

    let result = execute_with_deps(&fixture.to_deps()).await;
    assert!(result.is_err());

    let output = fixture.ui.get_output();
    assert!(output.iter().any(|s| s.contains("Press the link button")));
}
