use crate::dtos::{ArtworkListParams, ArtworkResponse, CreateArtworkRequest, FeaturedParams};
use crate::error::AppError;
use crate::models::Artwork;
use crate::services::ARTWORK_COLLECTION;
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mongodb::bson::doc;
use validator::Validate;

pub async fn list_artworks(
    State(state): State<AppState>,
    Query(params): Query<ArtworkListParams>,
) -> Result<impl IntoResponse, AppError> {
    let limit = params.limit.unwrap_or(100).max(1);

    let mut filter = doc! {};
    if let Some(category) = params.category {
        filter.insert("categories", doc! { "$in": [category] });
    }

    let artworks: Vec<Artwork> = state.db.query(ARTWORK_COLLECTION, filter, limit, None).await?;

    let response: Vec<ArtworkResponse> = artworks.into_iter().map(ArtworkResponse::from).collect();

    Ok(Json(response))
}

pub async fn create_artwork(
    State(state): State<AppState>,
    Json(request): Json<CreateArtworkRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    // Best-effort display name snapshot: a failed lookup must never block creation,
    // so the error path is logged and discarded.
    let artist_name = match &request.artist_id {
        Some(artist_id) => match state.db.artist_display_name(artist_id).await {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(
                    artist_id = %artist_id,
                    error = %e,
                    "Artist lookup failed, creating artwork without artist name"
                );
                None
            }
        },
        None => None,
    };

    let artwork = Artwork::new(
        request.title,
        request.description,
        request.price,
        request.image_url,
        request.artist_id,
        artist_name,
        request.categories,
        request.available,
    );

    let artwork_id = state.db.insert(ARTWORK_COLLECTION, &artwork).await?;

    tracing::info!(artwork_id = %artwork_id, "Artwork created");

    Ok((StatusCode::CREATED, Json(ArtworkResponse::from(artwork))))
}

pub async fn featured_artworks(
    State(state): State<AppState>,
    Query(params): Query<FeaturedParams>,
) -> Result<impl IntoResponse, AppError> {
    let limit = params.limit.unwrap_or(8).max(1);

    let artworks: Vec<Artwork> = state
        .db
        .query(
            ARTWORK_COLLECTION,
            doc! { "available": true },
            limit,
            Some(doc! { "created_at": -1 }),
        )
        .await?;

    let response: Vec<ArtworkResponse> = artworks.into_iter().map(ArtworkResponse::from).collect();

    Ok(Json(response))
}
