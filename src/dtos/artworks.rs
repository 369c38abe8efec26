use crate::models::Artwork;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateArtworkRequest {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    #[validate(url(message = "Invalid image URL"))]
    pub image_url: String,
    // artist_name is server-computed from this reference, never accepted as input
    pub artist_id: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct ArtworkResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: String,
    pub artist_id: Option<String>,
    pub artist_name: Option<String>,
    pub categories: Vec<String>,
    pub available: bool,
    pub created_at: String,
}

impl From<Artwork> for ArtworkResponse {
    fn from(artwork: Artwork) -> Self {
        Self {
            id: artwork.id,
            title: artwork.title,
            description: artwork.description,
            price: artwork.price,
            image_url: artwork.image_url,
            artist_id: artwork.artist_id,
            artist_name: artwork.artist_name,
            categories: artwork.categories,
            available: artwork.available,
            created_at: artwork.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ArtworkListParams {
    pub category: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct FeaturedParams {
    pub limit: Option<i64>,
}
