//! In-memory stand-in for the Houzat backend API, used by tests.
//!
//! Serves the three read endpoints with the same envelopes, query handling,
//! and error bodies as the real backend: `GET /designers/` (filtered,
//! ordered, paginated), `GET /designers/{id}/`, and `GET /projects/{id}/`.
//! Data is seeded at startup and never mutated.
//!
//! Response types here are defined independently from the client core's wire
//! types; the end-to-end test catches any schema drift between the two.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

mod seed;

pub use seed::{seed_designers, DesignerRecord, ImageRow, ProjectRecord};

const DEFAULT_PAGE_SIZE: u32 = 20;
const MAX_PAGE_SIZE: u32 = 100;

pub type Db = Arc<Vec<DesignerRecord>>;

#[derive(Debug, Serialize, Deserialize)]
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

#[derive(Debug, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListingResponse {
    pub success: bool,
    pub data: Vec<DesignerListing>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, Deserialize)]
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

#[derive(Debug, Serialize, Deserialize)]
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
    pub portfolio: Vec<String>,
    pub projects: Vec<ProjectBasic>,
    pub rating: f64,
    #[serde(rename = "reviewsCount")]
    pub reviews_count: u32,
    pub verified: bool,
    pub specialties: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DesignerDetailResponse {
    pub success: bool,
    pub data: DesignerDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImageOut {
    pub id: i64,
    pub image_id: String,
    pub title: Option<String>,
    pub image_url: String,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
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
    pub images: Vec<ImageOut>,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectDetailResponse {
    pub success: bool,
    pub data: ProjectDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

/// Query parameters for the listing endpoint. Numeric parameters arrive as
/// strings and fall back to defaults when unparseable, like the real
/// backend's tolerant view layer.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

pub fn app() -> Router {
    let db: Db = Arc::new(seed_designers());
    Router::new()
        .route("/designers/", get(list_designers))
        .route("/designers/{id}/", get(designer_detail))
        .route("/projects/{id}/", get(project_detail))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn opt_contains_ci(haystack: &Option<String>, needle: &str) -> bool {
    haystack.as_deref().is_some_and(|h| contains_ci(h, needle))
}

async fn list_designers(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Json<ListingResponse> {
    let mut rows: Vec<&DesignerRecord> = db
        .iter()
        .filter(|d| match params.category.as_deref() {
            Some(category) if !category.is_empty() => opt_contains_ci(&d.category, category),
            _ => true,
        })
        .filter(|d| match params.search.as_deref() {
            Some(term) if !term.is_empty() => {
                contains_ci(&d.business_name, term)
                    || opt_contains_ci(&d.address, term)
                    || opt_contains_ci(&d.category, term)
            }
            _ => true,
        })
        .collect();

    sort_rows(&mut rows, params.ordering.as_deref().unwrap_or("id"));

    let page = params
        .page
        .as_deref()
        .and_then(|p| p.parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1);
    let page_size = params
        .page_size
        .as_deref()
        .and_then(|p| p.parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .min(MAX_PAGE_SIZE);

    let total = rows.len() as u64;
    let total_pages = (total as u32).div_ceil(page_size);
    let offset = (u64::from(page - 1) * u64::from(page_size)) as usize;
    let data: Vec<DesignerListing> = rows
        .into_iter()
        .skip(offset)
        .take(page_size as usize)
        .map(listing_row)
        .collect();

    Json(ListingResponse {
        success: true,
        pagination: Pagination {
            total,
            page,
            page_size,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
            count: data.len() as u64,
        },
        data,
    })
}

fn sort_rows(rows: &mut [&DesignerRecord], ordering: &str) {
    let (descending, key) = match ordering.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, ordering),
    };
    match key {
        "business_name" => rows.sort_by(|a, b| a.business_name.cmp(&b.business_name)),
        "created_at" => rows.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        // Unknown keys fall back to the default id ordering.
        _ => rows.sort_by_key(|d| d.id),
    }
    if descending {
        rows.reverse();
    }
}

fn listing_row(record: &DesignerRecord) -> DesignerListing {
    DesignerListing {
        id: record.id,
        business_name: record.business_name.clone(),
        category: record.category.clone(),
        address: record.address.clone(),
        phone_number: record.phone_number.clone(),
        website: record.website.clone(),
        typical_job_cost: record.typical_job_cost.clone(),
        project_count: record.projects.len() as u32,
        // Same rule as the real serializer: the first project's cover image.
        featured_image: record
            .projects
            .first()
            .and_then(|p| p.thumbnail.clone().or_else(|| p.image.clone())),
        intro: record.intro.clone(),
        created_at: record.created_at.clone(),
    }
}

async fn designer_detail(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<DesignerDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let record = db
        .iter()
        .find(|d| d.id == id)
        .ok_or_else(|| not_found("Designer not found"))?;

    let projects = record.projects.iter().map(project_row).collect();
    Ok(Json(DesignerDetailResponse {
        success: true,
        data: DesignerDetail {
            id: record.id,
            name: record.business_name.clone(),
            description: record.intro.clone(),
            category: record.category.clone(),
            location: record.address.clone(),
            phone: record.phone_number.clone(),
            website: record.website.clone(),
            typical_job_cost: record.typical_job_cost.clone(),
            price_range: record.price_range.clone(),
            followers: record.followers.clone(),
            socials: None,
            services_provided: record.services_provided.clone(),
            areas_served: None,
            professional_information: None,
            additional_addresses: None,
            portfolio: record.portfolio.clone(),
            projects,
            rating: record.rating,
            reviews_count: record.reviews_count,
            verified: record.verified,
            specialties: Vec::new(),
            created_at: record.created_at.clone(),
            updated_at: record.updated_at.clone(),
        },
    }))
}

fn project_row(project: &ProjectRecord) -> ProjectBasic {
    ProjectBasic {
        id: project.id,
        project_id: project.project_id.clone(),
        name: project.name.clone(),
        location: project.location.clone(),
        thumbnail: project.thumbnail.clone(),
        image_count: project.images.len() as u32,
        project_cost: project.project_cost.clone(),
        url: project.url.clone(),
        created_at: project.created_at.clone(),
    }
}

async fn project_detail(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<ProjectDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let project = db
        .iter()
        .flat_map(|d| d.projects.iter())
        .find(|p| p.id == id)
        .ok_or_else(|| not_found("Project not found"))?;

    let images = project
        .images
        .iter()
        .map(|img| ImageOut {
            id: img.id,
            image_id: img.image_id.clone(),
            title: img.title.clone(),
            image_url: img.image_url.clone(),
            created_at: img.created_at.clone(),
        })
        .collect();

    Ok(Json(ProjectDetailResponse {
        success: true,
        data: ProjectDetail {
            id: project.id,
            project_id: project.project_id.clone(),
            name: project.name.clone(),
            project_title: project.project_title.clone(),
            location: project.location.clone(),
            thumbnail: project.thumbnail.clone(),
            image: project.image.clone(),
            image_count: project.images.len() as u32,
            project_cost: project.project_cost.clone(),
            url: project.url.clone(),
            images,
            created_at: project.created_at.clone(),
        },
    }))
}

fn not_found(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            error: "not_found".to_string(),
            message: message.to_string(),
        }),
    )
}
