//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — the caller (host) is responsible for executing
//! the actual I/O. This separation keeps the core deterministic and easy to
//! test: the transport crate is the only place a socket is opened.
//!
//! All fields use owned types (`String`, `Vec`) so values can be stored,
//! logged, or replayed without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `HouzatClient::build_*` methods. The caller is responsible for
/// executing this request against the network and returning the corresponding
/// `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Set a header, replacing any existing header with the same name.
    ///
    /// Builders install default headers first, so a caller-supplied value
    /// always wins on a conflicting key.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `HouzatClient::parse_*` methods for status classification and
/// deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    /// Reason phrase for `status` ("Not Found", "Internal Server Error").
    /// Used to synthesize an error message when a failure body carries no
    /// parseable envelope. Empty when the executor cannot supply one.
    pub status_text: String,
    /// Response headers as received. The parse methods read none of them,
    /// so executors may leave this empty.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_header_replaces_case_insensitively() {
        let req = HttpRequest {
            method: HttpMethod::Get,
            path: "/designers/".to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: None,
        }
        .with_header("content-type", "text/plain");

        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "text/plain".to_string())]
        );
    }
}
