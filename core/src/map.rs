//! Wire-to-view-model mapping with fallback defaults.
//!
//! # Design
//! Every conversion here is pure and total: any well-formed wire record maps
//! to a complete view model, with a literal placeholder substituted for each
//! absent field. An empty string counts as absent, matching how the backend
//! sometimes stores cleared columns. Fields the pages never render are
//! dropped; nothing here performs I/O or fails.
//!
//! The listing conversion pins `rating` to 4.5 and `reviews_count` to 0.
//! The listing endpoint does not supply either value, and the pages expect
//! them, so the stub is deliberate and covered by tests. Detail conversions
//! take both straight from the wire.

use crate::model::{Designer, DesignerPage, Project};
use crate::wire::{
    DesignerDetail, DesignerListing, DesignerListingResponse, ProjectBasic, ProjectDetail,
};

pub const UNKNOWN_DESIGNER: &str = "Unknown Designer";
pub const UNTITLED_PROJECT: &str = "Untitled Project";
pub const LOCATION_NOT_SPECIFIED: &str = "Location not specified";
pub const PRICE_ON_REQUEST: &str = "Price on request";
pub const NO_DESCRIPTION: &str = "No description available";

/// Rating shown for listing rows until the backend supplies real ratings.
pub const LISTING_RATING_STUB: f64 = 4.5;

/// `Some` only when the value is present and non-empty.
fn filled(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(str::to_owned)
}

fn filled_or(value: &Option<String>, fallback: &str) -> String {
    filled(value).unwrap_or_else(|| fallback.to_string())
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

impl From<&DesignerListing> for Designer {
    fn from(listing: &DesignerListing) -> Self {
        Designer {
            id: listing.id.to_string(),
            name: non_empty_or(&listing.business_name, UNKNOWN_DESIGNER),
            rating: LISTING_RATING_STUB,
            reviews_count: 0,
            location: filled_or(&listing.address, LOCATION_NOT_SPECIFIED),
            verified: true,
            specialties: Vec::new(),
            price_range: filled_or(&listing.typical_job_cost, PRICE_ON_REQUEST),
            portfolio: filled(&listing.featured_image).into_iter().collect(),
            description: filled_or(&listing.intro, NO_DESCRIPTION),
            phone: filled(&listing.phone_number),
            website: filled(&listing.website),
            address: filled(&listing.address),
            typical_job_cost: filled(&listing.typical_job_cost),
            projects: Vec::new(),
        }
    }
}

impl From<&DesignerDetail> for Designer {
    fn from(detail: &DesignerDetail) -> Self {
        Designer {
            id: detail.id.to_string(),
            name: non_empty_or(&detail.name, UNKNOWN_DESIGNER),
            rating: detail.rating,
            reviews_count: detail.reviews_count,
            location: filled_or(&detail.location, LOCATION_NOT_SPECIFIED),
            verified: detail.verified,
            specialties: Vec::new(),
            price_range: filled(&detail.price_range)
                .or_else(|| filled(&detail.typical_job_cost))
                .unwrap_or_else(|| PRICE_ON_REQUEST.to_string()),
            portfolio: detail.portfolio.clone(),
            description: filled_or(&detail.description, NO_DESCRIPTION),
            phone: filled(&detail.phone),
            website: filled(&detail.website),
            address: filled(&detail.location),
            typical_job_cost: filled(&detail.typical_job_cost),
            projects: detail.projects.iter().map(Project::from).collect(),
        }
    }
}

impl From<&ProjectBasic> for Project {
    fn from(basic: &ProjectBasic) -> Self {
        Project {
            id: basic.id.to_string(),
            name: non_empty_or(&basic.name, UNTITLED_PROJECT),
            location: filled_or(&basic.location, LOCATION_NOT_SPECIFIED),
            image_count: basic.image_count,
            thumbnail: filled(&basic.thumbnail).unwrap_or_default(),
            cost: filled(&basic.project_cost),
            images: Vec::new(),
        }
    }
}

impl From<&ProjectDetail> for Project {
    fn from(detail: &ProjectDetail) -> Self {
        let name = if detail.name.is_empty() {
            filled(&detail.project_title).unwrap_or_else(|| UNTITLED_PROJECT.to_string())
        } else {
            detail.name.clone()
        };
        Project {
            id: detail.id.to_string(),
            name,
            location: filled_or(&detail.location, LOCATION_NOT_SPECIFIED),
            image_count: detail.image_count,
            thumbnail: filled(&detail.thumbnail)
                .or_else(|| filled(&detail.image))
                .unwrap_or_default(),
            cost: filled(&detail.project_cost),
            images: detail.images.iter().map(|img| img.image_url.clone()).collect(),
        }
    }
}

impl From<&DesignerListingResponse> for DesignerPage {
    fn from(response: &DesignerListingResponse) -> Self {
        DesignerPage {
            designers: response.data.iter().map(Designer::from).collect(),
            pagination: response.pagination.clone(),
        }
    }
}
