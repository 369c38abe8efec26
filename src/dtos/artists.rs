use crate::models::Artist;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateArtistRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub bio: Option<String>,
    #[validate(url(message = "Invalid avatar URL"))]
    pub avatar_url: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ArtistResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub created_at: String,
}

impl From<Artist> for ArtistResponse {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            email: artist.email,
            bio: artist.bio,
            avatar_url: artist.avatar_url,
            website: artist.website,
            instagram: artist.instagram,
            created_at: artist.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ArtistListParams {
    pub limit: Option<i64>,
}
