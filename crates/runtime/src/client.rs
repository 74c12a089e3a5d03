//! HTTP client for the Hue bridge's local REST API
//!
//! The bridge serves HTTPS with a self-signed certificate, so every client
//! built here skips certificate validation. The relaxed policy lives on the
//! client's own transport and never leaks into other HTTP clients.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Method, Request, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{APPLICATION_KEY_HEADER, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::error::HueError;
use crate::settings::Settings;

/// Hook run on every outgoing request before it is sent
pub trait RequestEditor: Send + Sync {
    /// Modify the request in place
    fn edit(&self, request: &mut Request) -> Result<(), HueError>;
}

/// Adds the `hue-application-key` header to each request
#[derive(Debug, Clone)]
pub struct ApplicationKeyAuth {
    value: HeaderValue,
}

impl ApplicationKeyAuth {
    /// Build the hook, rejecting keys that cannot travel in a header
    pub fn new(key: &str) -> Result<Self, HueError> {
        let mut value = HeaderValue::from_str(key).map_err(|_| HueError::InvalidApplicationKey)?;
        value.set_sensitive(true);
        Ok(Self { value })
    }
}

impl RequestEditor for ApplicationKeyAuth {
    fn edit(&self, request: &mut Request) -> Result<(), HueError> {
        request.headers_mut().insert(
            HeaderName::from_static(APPLICATION_KEY_HEADER),
            self.value.clone(),
        );
        Ok(())
    }
}

/// Transport settings applied to a single client
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Accept certificates that fail chain validation
    pub accept_invalid_certs: bool,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            accept_invalid_certs: true,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl TransportConfig {
    fn build(&self) -> Result<reqwest::Client, HueError> {
        reqwest::ClientBuilder::new()
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .timeout(self.timeout)
            .build()
            .map_err(HueError::ClientBuild)
    }
}

/// Client bound to one bridge
#[derive(Clone)]
pub struct HueClient {
    base_url: String,
    http: reqwest::Client,
    accept_invalid_certs: bool,
    editors: Vec<Arc<dyn RequestEditor>>,
}

impl std::fmt::Debug for HueClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HueClient")
            .field("base_url", &self.base_url)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("editors", &self.editors.len())
            .finish_non_exhaustive()
    }
}

impl HueClient {
    /// Authenticated client for `https://<settings.bridge>`
    pub fn new(settings: &Settings) -> Result<Self, HueError> {
        let auth = ApplicationKeyAuth::new(&settings.key)?;
        Self::from_parts(
            bridge_url(&settings.bridge),
            vec![Arc::new(auth)],
            &TransportConfig::default(),
        )
    }

    /// Client for `https://<host>` without an application key, used for pairing
    pub fn no_auth(host: &str) -> Result<Self, HueError> {
        Self::from_parts(bridge_url(host), Vec::new(), &TransportConfig::default())
    }

    /// Client for an arbitrary base URL with explicit editors and transport
    pub fn from_parts(
        base_url: impl Into<String>,
        editors: Vec<Arc<dyn RequestEditor>>,
        transport: &TransportConfig,
    ) -> Result<Self, HueError> {
        let base_url = base_url.into();
        tracing::debug!("Building client for {}", base_url);

        Ok(Self {
            base_url,
            http: transport.build()?,
            accept_invalid_certs: transport.accept_invalid_certs,
            editors,
        })
    }

    /// Base URL every request is resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether the transport accepts certificates that fail validation
    pub const fn accepts_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    /// Resolve `path` against the base URL
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Build a request for `path` with every editor applied
    pub fn request(&self, method: Method, path: &str) -> Result<Request, HueError> {
        self.finish(self.http.request(method, self.url(path)))
    }

    /// Build a request carrying a JSON body with every editor applied
    pub fn request_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Request, HueError> {
        self.finish(self.http.request(method, self.url(path)).json(body))
    }

    fn finish(&self, builder: RequestBuilder) -> Result<Request, HueError> {
        let mut request = builder.build()?;
        for editor in &self.editors {
            editor.edit(&mut request)?;
        }
        Ok(request)
    }

    /// Send a prepared request and decode the JSON response
    pub async fn send<T: DeserializeOwned>(&self, request: Request) -> Result<T, HueError> {
        tracing::debug!("{} {}", request.method(), request.url());
        let response = self.http.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HueError::Status { status, body });
        }

        Ok(response.json().await?)
    }

    /// `GET` a path and decode the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HueError> {
        self.send(self.request(Method::GET, path)?).await
    }

    /// `POST` a JSON body to a path and decode the JSON response
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, HueError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request_json(Method::POST, path, body)?).await
    }
}

fn bridge_url(host: &str) -> String {
    format!("https://{}", host.trim_end_matches('/'))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
