//! API client core for the Houzat marketplace frontend.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The executing transport
//! performs the actual HTTP round-trip, making the core fully deterministic
//! and testable.
//!
//! # Design
//! - `HouzatClient` is stateless — it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (classifies status, decodes the envelope), so the I/O boundary is
//!   explicit.
//! - Wire shapes ([`wire`]) and view models ([`model`]) are separate types;
//!   [`map`] owns the fallback rules between them and is pure and total.
//! - Every failure is a single [`ApiError`] carrying a message, an HTTP
//!   status (0 for non-HTTP failures), and the raw error payload.

pub mod client;
pub mod error;
pub mod http;
pub mod map;
pub mod model;
pub mod query;
pub mod wire;

pub use client::HouzatClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use model::{Designer, DesignerPage, Project};
pub use query::DesignerQuery;
