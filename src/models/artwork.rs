use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artwork {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: String,
    /// Weak reference to an artist `_id`. Not enforced by the store.
    pub artist_id: Option<String>,
    /// Display name snapshot taken from the referenced artist at creation time.
    /// Never refreshed afterwards.
    pub artist_name: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub available: bool,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Artwork {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        description: Option<String>,
        price: f64,
        image_url: String,
        artist_id: Option<String>,
        artist_name: Option<String>,
        categories: Vec<String>,
        available: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            price,
            image_url,
            artist_id,
            artist_name,
            categories,
            available,
            created_at: Utc::now(),
        }
    }
}
