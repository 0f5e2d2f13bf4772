//! Frontend view models.
//!
//! # Design
//! These are the shapes pages render. Required fields are always populated:
//! the mapping layer substitutes a documented fallback wherever the backend
//! left a nullable field empty, so no `Option` appears here unless the page
//! genuinely treats absence differently from a placeholder (contact fields,
//! project cost). Ids are strings regardless of the backend's numeric type.
//!
//! Instances are built fresh from every response and carry no identity
//! beyond the `id` field. Nothing is cached or deduplicated.

use serde::Serialize;

use crate::wire::Pagination;

/// A designer as rendered by listing and profile pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Designer {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub reviews_count: u32,
    pub location: String,
    pub verified: bool,
    pub specialties: Vec<String>,
    pub price_range: String,
    pub portfolio: Vec<String>,
    pub description: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub typical_job_cost: Option<String>,
    /// Populated only from detail responses; listings leave it empty.
    pub projects: Vec<Project>,
}

/// A project as rendered in galleries and on the project detail page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub location: String,
    pub image_count: u32,
    pub thumbnail: String,
    pub cost: Option<String>,
    /// Flattened gallery URLs; populated only from detail responses.
    pub images: Vec<String>,
}

/// One page of mapped designers plus the backend's pagination metadata,
/// passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignerPage {
    pub designers: Vec<Designer>,
    pub pagination: Pagination,
}
