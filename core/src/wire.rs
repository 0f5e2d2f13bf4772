//! Backend wire shapes for the Houzat API.
//!
//! # Design
//! These types mirror the backend's JSON payloads field for field, nullable
//! columns as `Option`. They are deliberately separate from the view models
//! in [`crate::model`]: the wire layer tracks whatever the backend emits,
//! the view layer tracks what pages render, and [`crate::map`] owns the
//! fallback rules between the two. A few detail fields arrive in camelCase
//! straight from the backend serializer; serde renames cover those.
//!
//! Optional lists carry `#[serde(default)]` so an omitted array deserializes
//! as empty instead of failing the whole envelope.

use serde::{Deserialize, Serialize};

/// One designer as returned inside the paginated collection response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignerListing {
    pub id: i64,
    pub business_name: String,
    pub category: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    pub typical_job_cost: Option<String>,
    pub project_count: u32,
    pub featured_image: Option<String>,
    pub intro: Option<String>,
    pub created_at: String,
}

/// Pagination metadata attached to collection responses, passed through to
/// the view layer unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
    pub count: u64,
}

/// Envelope for `GET /designers/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignerListingResponse {
    pub success: bool,
    pub data: Vec<DesignerListing>,
    pub pagination: Pagination,
}

/// Abbreviated project as nested inside a designer detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectBasic {
    pub id: i64,
    pub project_id: String,
    pub name: String,
    pub location: Option<String>,
    pub thumbnail: Option<String>,
    pub image_count: u32,
    pub project_cost: Option<String>,
    pub url: Option<String>,
    pub created_at: String,
}

/// Full designer record from `GET /designers/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignerDetail {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    #[serde(rename = "typicalJobCost")]
    pub typical_job_cost: Option<String>,
    #[serde(rename = "priceRange")]
    pub price_range: Option<String>,
    pub followers: Option<String>,
    pub socials: Option<String>,
    pub services_provided: Option<String>,
    pub areas_served: Option<String>,
    pub professional_information: Option<String>,
    pub additional_addresses: Option<String>,
    #[serde(default)]
    pub portfolio: Vec<String>,
    #[serde(default)]
    pub projects: Vec<ProjectBasic>,
    pub rating: f64,
    #[serde(rename = "reviewsCount")]
    pub reviews_count: u32,
    pub verified: bool,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Envelope for `GET /designers/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignerDetailResponse {
    pub success: bool,
    pub data: DesignerDetail,
}

/// One gallery image nested inside a project detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: i64,
    pub image_id: String,
    pub title: Option<String>,
    pub image_url: String,
    pub created_at: String,
}

/// Full project record from `GET /projects/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub id: i64,
    pub project_id: String,
    pub name: String,
    pub project_title: Option<String>,
    pub location: Option<String>,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
    pub image_count: u32,
    pub project_cost: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageRecord>,
    pub created_at: String,
}

/// Envelope for `GET /projects/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetailResponse {
    pub success: bool,
    pub data: ProjectDetail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_deserializes_nullable_fields_as_none() {
        let raw = r#"{
            "id": 7,
            "business_name": "Studio Verde",
            "category": null,
            "address": null,
            "phone_number": null,
            "website": null,
            "typical_job_cost": null,
            "project_count": 3,
            "featured_image": null,
            "intro": null,
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let listing: DesignerListing = serde_json::from_str(raw).unwrap();
        assert_eq!(listing.id, 7);
        assert!(listing.category.is_none());
        assert!(listing.featured_image.is_none());
    }

    #[test]
    fn detail_accepts_camel_case_backend_keys() {
        let raw = r#"{
            "id": 1,
            "name": "Atelier North",
            "description": null,
            "category": null,
            "location": null,
            "phone": null,
            "website": null,
            "typicalJobCost": "$10,000",
            "priceRange": "$$",
            "followers": null,
            "socials": null,
            "services_provided": null,
            "areas_served": null,
            "professional_information": null,
            "additional_addresses": null,
            "portfolio": [],
            "projects": [],
            "rating": 4.8,
            "reviewsCount": 12,
            "verified": true,
            "specialties": [],
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z"
        }"#;
        let detail: DesignerDetail = serde_json::from_str(raw).unwrap();
        assert_eq!(detail.typical_job_cost.as_deref(), Some("$10,000"));
        assert_eq!(detail.price_range.as_deref(), Some("$$"));
        assert_eq!(detail.reviews_count, 12);
    }

    #[test]
    fn project_detail_tolerates_missing_images_array() {
        let raw = r#"{
            "id": 4,
            "project_id": "p-4",
            "name": "Loft",
            "project_title": null,
            "location": null,
            "thumbnail": null,
            "image": null,
            "image_count": 0,
            "project_cost": null,
            "url": null,
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let detail: ProjectDetail = serde_json::from_str(raw).unwrap();
        assert!(detail.images.is_empty());
    }
}
