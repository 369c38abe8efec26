use crate::dtos::{ArtistListParams, ArtistResponse, CreateArtistRequest};
use crate::error::AppError;
use crate::models::Artist;
use crate::services::ARTIST_COLLECTION;
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mongodb::bson::doc;
use validator::Validate;

pub async fn list_artists(
    State(state): State<AppState>,
    Query(params): Query<ArtistListParams>,
) -> Result<impl IntoResponse, AppError> {
    let limit = params.limit.unwrap_or(50).max(1);

    let artists: Vec<Artist> = state
        .db
        .query(ARTIST_COLLECTION, doc! {}, limit, None)
        .await?;

    let response: Vec<ArtistResponse> = artists.into_iter().map(ArtistResponse::from).collect();

    Ok(Json(response))
}

pub async fn create_artist(
    State(state): State<AppState>,
    Json(request): Json<CreateArtistRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    let artist = Artist::new(
        request.name,
        request.email,
        request.bio,
        request.avatar_url,
        request.website,
        request.instagram,
    );

    let artist_id = state.db.insert(ARTIST_COLLECTION, &artist).await?;

    tracing::info!(artist_id = %artist_id, "Artist created");

    Ok((StatusCode::CREATED, Json(ArtistResponse::from(artist))))
}
