//! Bridge discovery through the public discovery endpoint

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use openhue_runtime::config::{DEFAULT_REQUEST_TIMEOUT_SECS, DISCOVERY_URL};
use openhue_runtime::deps::{MessageStyle, UserInterface};

/// A bridge announced by the discovery endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiscoveredBridge {
    /// Bridge identifier
    pub id: String,
    /// Address of the bridge on the local network
    #[serde(rename = "internalipaddress")]
    pub address: String,
    /// HTTPS port, when announced
    #[serde(default)]
    pub port: Option<u16>,
}

/// Dependencies for the discover command
pub struct DiscoverDependencies {
    /// User interface for output
    pub ui: Arc<dyn UserInterface>,
    /// Regular HTTP client; the discovery service has a valid certificate
    pub http: reqwest::Client,
    /// Discovery endpoint
    pub url: String,
}

/// Execute the discover command with injected dependencies
pub async fn execute_with_deps(deps: &DiscoverDependencies) -> Result<Vec<DiscoveredBridge>> {
    deps.ui
        .print_styled("→ Looking for Hue bridges", MessageStyle::Cyan);

    let response = deps
        .http
        .get(&deps.url)
        .send()
        .await
        .context("Failed to reach the discovery service")?
        .error_for_status()
        .context("Discovery service returned an error")?;

    let bridges: Vec<DiscoveredBridge> = response
        .json()
        .await
        .context("Failed to parse discovery response")?;
    tracing::debug!("Discovery returned {} bridge(s)", bridges.len());

    if bridges.is_empty() {
        deps.ui
            .print_styled("No bridge found on this network", MessageStyle::Warning);
        return Ok(bridges);
    }

    for bridge in &bridges {
        deps.ui.print(&format!("{}\t{}", bridge.address, bridge.id));
    }

    Ok(bridges)
}

/// Certificate-validating HTTP client for the discovery service
pub fn discovery_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")
}

/// Execute the discover command with default dependencies
pub async fn execute() -> Result<()> {
    use crate::ui::RealUserInterface;

    let deps = DiscoverDependencies {
        ui: Arc::new(RealUserInterface),
        http: discovery_client(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))?,
        url: DISCOVERY_URL.to_string(),
    };

    execute_with_deps(&deps).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::TestUserInterface;
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn run(
        response: ResponseTemplate,
        timeout: Duration,
    ) -> (Arc<TestUserInterface>, Result<Vec<DiscoveredBridge>>) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(response)
            .mount(&server)
            .await;

        let ui = Arc::new(TestUserInterface::new());
        let deps = DiscoverDependencies {
            ui: ui.clone(),
            http: discovery_client(timeout).unwrap(),
            url: server.uri(),
        };
        let result = execute_with_deps(&deps).await;
        (ui, result)
    }

    #[tokio::test]
    async fn test_discover_lists_bridges() {
        let (ui, result) = run(
            ResponseTemplate::new(200).set_body_json(json!([
                {"id": "001788fffe100491", "internalipaddress": "192.168.1.2", "port": 443},
                {"id": "001788fffe09a168", "internalipaddress": "192.168.1.3"}
            ])),
            Duration::from_secs(5),
        )
        .await;

        let bridges = result.unwrap();
        assert_eq!(bridges.len(), 2);
        assert_eq!(bridges[0].address, "192.168.1.2");
        assert_eq!(bridges[0].port, Some(443));
        assert_eq!(bridges[1].port, None);

        let output = ui.get_output();
        assert!(output.contains(&"192.168.1.2\t001788fffe100491".to_string()));
    }

    #[tokio::test]
    async fn test_discover_nothing_found() {
        let (ui, result) = run(
            ResponseTemplate::new(200).set_body_json(json!([])),
            Duration::from_secs(5),
        )
        .await;

        assert!(result.unwrap().is_empty());
        assert!(ui.get_output().iter().any(|s| s.contains("No bridge found")));
    }

    #[tokio::test]
    async fn test_discover_service_error() {
        let (_ui, result) = run(ResponseTemplate::new(429), Duration::from_secs(5)).await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Discovery service returned an error"));
    }

    #[tokio::test]
    async fn test_discover_times_out() {
        let (_ui, result) = run(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
            Duration::from_millis(200),
        )
        .await;

        let err = result.unwrap_err();
        let source = err.downcast_ref::<reqwest::Error>().unwrap();
        assert!(source.is_timeout(), "{err:?}");
    }
}
