//! Executing transport for the Houzat API client.
//!
//! # Overview
//! The core crate builds requests and parses responses without touching the
//! network; this crate performs the actual HTTP round-trip and hands back
//! mapped view models. [`HouzatApi`] is the chokepoint every page-level
//! fetch goes through: one call per operation, one error type, no caching,
//! no retries.
//!
//! # Design
//! - ureq's status-as-error behavior is disabled so 4xx/5xx responses come
//!   back as data and the core classifies them against the backend's error
//!   envelope. Only failures of the round-trip itself become
//!   `ApiError::Network`, which reports status 0.
//! - The base URL is resolved exactly once, at construction, from the
//!   `HOUZAT_API_BASE_URL` environment variable with a local-development
//!   default. Nothing mutates it afterwards.
//! - [`RequestSeq`] covers the one ordering concern this layer has: letting
//!   a caller discard a stale response that arrives after a newer fetch.

use std::fmt::Display;

use houzat_core::HouzatClient;

mod latest;

pub use houzat_core::{
    ApiError, Designer, DesignerPage, DesignerQuery, HttpMethod, HttpRequest, HttpResponse,
    Project,
};
pub use latest::{Generation, RequestSeq};

/// Environment variable naming the backend base URL.
pub const BASE_URL_ENV: &str = "HOUZAT_API_BASE_URL";

/// Local-development backend, used when [`BASE_URL_ENV`] is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Read the base URL from the environment, falling back to
/// [`DEFAULT_BASE_URL`].
pub fn base_url_from_env() -> String {
    std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// Blocking Houzat API client: executes requests built by the core and
/// returns mapped view models.
#[derive(Debug)]
pub struct HouzatApi {
    client: HouzatClient,
    agent: ureq::Agent,
}

impl HouzatApi {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            client: HouzatClient::new(base_url),
            agent,
        }
    }

    /// Construct against the environment-configured base URL.
    pub fn from_env() -> Self {
        Self::new(&base_url_from_env())
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Fetch one page of designers matching `query`.
    pub fn designers(&self, query: &DesignerQuery) -> Result<DesignerPage, ApiError> {
        let response = self.execute(self.client.build_designers(query))?;
        let parsed = self.client.parse_designers(response)?;
        Ok(DesignerPage::from(&parsed))
    }

    /// Fetch a single designer profile, nested projects included.
    pub fn designer_detail(&self, id: impl Display) -> Result<Designer, ApiError> {
        let response = self.execute(self.client.build_designer_detail(id))?;
        let parsed = self.client.parse_designer_detail(response)?;
        Ok(Designer::from(&parsed.data))
    }

    /// Fetch a single project with its full image gallery.
    pub fn project_detail(&self, id: impl Display) -> Result<Project, ApiError> {
        let response = self.execute(self.client.build_project_detail(id))?;
        let parsed = self.client.parse_project_detail(response)?;
        Ok(Project::from(&parsed.data))
    }

    /// Execute an `HttpRequest` over the wire.
    ///
    /// The typed operations above are built on this. It is public as the
    /// escape hatch for caller-customized requests: extra or overridden
    /// headers via [`HttpRequest::with_header`], methods and bodies the
    /// read API never issues itself. Only transport-level failures are
    /// wrapped here; errors from the core's parse methods pass through
    /// untouched, so nothing is ever double-wrapped.
    pub fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        log::debug!("{:?} {}", req.method, req.path);

        let result = match (&req.method, &req.body) {
            (HttpMethod::Get, _) => {
                let mut builder = self.agent.get(&req.path);
                for (name, value) in &req.headers {
                    builder = builder.header(name, value);
                }
                builder.call()
            }
            (HttpMethod::Post, body) => {
                let mut builder = self.agent.post(&req.path);
                for (name, value) in &req.headers {
                    builder = builder.header(name, value);
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        log::debug!("{} <- {}", status.as_u16(), req.path);

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            headers: Vec::new(),
            body,
        })
    }
}
