use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Artist {
    pub fn new(
        name: String,
        email: String,
        bio: Option<String>,
        avatar_url: Option<String>,
        website: Option<String>,
        instagram: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            bio,
            avatar_url,
            website,
            instagram,
            created_at: Utc::now(),
        }
    }
}
