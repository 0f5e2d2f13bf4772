//! Deterministic seed data shared by the mock endpoints.
//!
//! Three designers covering the interesting shapes: a fully populated record
//! with projects and gallery images, a sparse record where most nullable
//! columns are empty, and a record in a different category and city so
//! filter tests have something to exclude.

#[derive(Debug, Clone)]
pub struct ImageRow {
    pub id: i64,
    pub image_id: String,
    pub title: Option<String>,
    pub image_url: String,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct ProjectRecord {
    pub id: i64,
    pub project_id: String,
    pub name: String,
    pub project_title: Option<String>,
    pub location: Option<String>,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
    pub project_cost: Option<String>,
    pub url: Option<String>,
    pub images: Vec<ImageRow>,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct DesignerRecord {
    pub id: i64,
    pub business_name: String,
    pub category: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    pub typical_job_cost: Option<String>,
    pub price_range: Option<String>,
    pub intro: Option<String>,
    pub followers: Option<String>,
    pub services_provided: Option<String>,
    pub portfolio: Vec<String>,
    pub rating: f64,
    pub reviews_count: u32,
    pub verified: bool,
    pub projects: Vec<ProjectRecord>,
    pub created_at: String,
    pub updated_at: String,
}

fn image(id: i64, slug: &str, title: Option<&str>) -> ImageRow {
    ImageRow {
        id,
        image_id: format!("img-{slug}"),
        title: title.map(str::to_string),
        image_url: format!("https://img.houzat.example/{slug}.jpg"),
        created_at: "2024-04-01T00:00:00Z".to_string(),
    }
}

pub fn seed_designers() -> Vec<DesignerRecord> {
    vec![
        DesignerRecord {
            id: 1,
            business_name: "Casa Mia Interiors".to_string(),
            category: Some("Interior Designers".to_string()),
            address: Some("Hauz Khas, New Delhi".to_string()),
            phone_number: Some("+91 11 4000 0000".to_string()),
            website: Some("https://casamia.example".to_string()),
            typical_job_cost: Some("$5,000 - $20,000".to_string()),
            price_range: Some("$$$".to_string()),
            intro: Some("Warm contemporary homes with handmade detailing.".to_string()),
            followers: Some("2.4k".to_string()),
            services_provided: Some("Full home design, turnkey execution".to_string()),
            portfolio: vec![
                "https://img.houzat.example/casa-mia-1.jpg".to_string(),
                "https://img.houzat.example/casa-mia-2.jpg".to_string(),
            ],
            rating: 4.6,
            reviews_count: 31,
            verified: true,
            projects: vec![
                ProjectRecord {
                    id: 101,
                    project_id: "cm-101".to_string(),
                    name: "Golf Links Duplex".to_string(),
                    project_title: None,
                    location: Some("Golf Links, New Delhi".to_string()),
                    thumbnail: Some("https://img.houzat.example/cm-101-cover.jpg".to_string()),
                    image: None,
                    project_cost: Some("$14,000".to_string()),
                    url: None,
                    images: vec![
                        image(1, "cm-101-living", Some("Living room")),
                        image(2, "cm-101-kitchen", Some("Kitchen")),
                        image(3, "cm-101-study", None),
                    ],
                    created_at: "2024-02-01T00:00:00Z".to_string(),
                },
                ProjectRecord {
                    id: 102,
                    project_id: "cm-102".to_string(),
                    name: String::new(),
                    project_title: Some("Sunlit Loft".to_string()),
                    location: Some("Shahpur Jat, New Delhi".to_string()),
                    thumbnail: None,
                    image: Some("https://img.houzat.example/cm-102-cover.jpg".to_string()),
                    project_cost: None,
                    url: Some("https://casamia.example/loft".to_string()),
                    images: vec![
                        image(4, "cm-102-hall", None),
                        image(5, "cm-102-bedroom", Some("Bedroom")),
                    ],
                    created_at: "2024-02-15T00:00:00Z".to_string(),
                },
            ],
            created_at: "2024-01-05T00:00:00Z".to_string(),
            updated_at: "2024-02-15T00:00:00Z".to_string(),
        },
        DesignerRecord {
            id: 2,
            business_name: "Atelier North".to_string(),
            category: Some("Interior Designers".to_string()),
            address: Some("Bandra West, Mumbai".to_string()),
            phone_number: None,
            website: None,
            typical_job_cost: None,
            price_range: None,
            intro: None,
            followers: None,
            services_provided: None,
            portfolio: Vec::new(),
            rating: 4.1,
            reviews_count: 27,
            verified: false,
            projects: vec![ProjectRecord {
                id: 103,
                project_id: "an-103".to_string(),
                name: "Courtyard House".to_string(),
                project_title: None,
                location: None,
                thumbnail: None,
                image: None,
                project_cost: None,
                url: None,
                images: Vec::new(),
                created_at: "2024-03-01T00:00:00Z".to_string(),
            }],
            created_at: "2024-01-10T00:00:00Z".to_string(),
            updated_at: "2024-03-01T00:00:00Z".to_string(),
        },
        DesignerRecord {
            id: 3,
            business_name: "Verde Modular Kitchens".to_string(),
            category: Some("Kitchen & Bath Designers".to_string()),
            address: Some("Indiranagar, Bengaluru".to_string()),
            phone_number: Some("+91 80 2500 0000".to_string()),
            website: None,
            typical_job_cost: Some("$2,000 - $8,000".to_string()),
            price_range: None,
            intro: Some("Modular kitchens and wardrobes.".to_string()),
            followers: None,
            services_provided: Some("Kitchen design".to_string()),
            portfolio: vec!["https://img.houzat.example/verde-1.jpg".to_string()],
            rating: 4.8,
            reviews_count: 12,
            verified: true,
            projects: Vec::new(),
            created_at: "2024-01-20T00:00:00Z".to_string(),
            updated_at: "2024-01-20T00:00:00Z".to_string(),
        },
    ]
}
