use crate::error::AppError;
use crate::models::{Artist, Artwork};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{FindOptions, IndexOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use serde::{de::DeserializeOwned, Serialize};

pub const ARTIST_COLLECTION: &str = "artist";
pub const ARTWORK_COLLECTION: &str = "artwork";

#[derive(Clone)]
pub struct GalleryDb {
    client: MongoClient,
    db: Database,
}

impl GalleryDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for gallery-service");

        let artworks = self.artworks();

        // Compound index on (available, created_at desc) backing the featured query
        let featured_index = IndexModel::builder()
            .keys(doc! { "available": 1, "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("featured_lookup".to_string())
                    .build(),
            )
            .build();

        artworks.create_index(featured_index, None).await.map_err(|e| {
            tracing::error!(
                "Failed to create featured index on artwork collection: {}",
                e
            );
            AppError::from(e)
        })?;
        tracing::info!("Created index on artwork.(available, created_at)");

        // Multikey index on categories for the category filter
        let categories_index = IndexModel::builder()
            .keys(doc! { "categories": 1 })
            .options(
                IndexOptions::builder()
                    .name("categories_idx".to_string())
                    .build(),
            )
            .build();

        artworks
            .create_index(categories_index, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create categories index on artwork collection: {}",
                    e
                );
                AppError::from(e)
            })?;
        tracing::info!("Created index on artwork.categories");

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    /// Insert a record into the named collection and return its new identity.
    pub async fn insert<T>(&self, collection: &str, record: &T) -> Result<String, AppError>
    where
        T: Serialize,
    {
        let result = self
            .db
            .collection::<T>(collection)
            .insert_one(record, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert into {}: {}", collection, e);
                AppError::from(e)
            })?;

        result
            .inserted_id
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| {
                AppError::DatabaseError(anyhow::anyhow!(
                    "inserted id for {} is not a string",
                    collection
                ))
            })
    }

    /// Fetch up to `limit` records matching `filter`, with an optional sort.
    pub async fn query<T>(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
        sort: Option<Document>,
    ) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        let find_options = FindOptions::builder().sort(sort).limit(limit).build();

        let cursor = self
            .db
            .collection::<T>(collection)
            .find(filter, find_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query {}: {}", collection, e);
                AppError::from(e)
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect records from {}: {}", collection, e);
            AppError::from(e)
        })
    }

    pub async fn find_by_id<T>(&self, collection: &str, id: &str) -> Result<Option<T>, AppError>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        self.db
            .collection::<T>(collection)
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to find record in {}: {}", collection, e);
                AppError::from(e)
            })
    }

    /// Look up an artist's display name for the creation-time snapshot.
    /// Callers treat the error path as best-effort and may discard it.
    pub async fn artist_display_name(&self, artist_id: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .find_by_id::<Artist>(ARTIST_COLLECTION, artist_id)
            .await?
            .map(|artist| artist.name))
    }

    pub async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db
            .list_collection_names(None)
            .await
            .map_err(AppError::from)
    }

    pub fn artists(&self) -> Collection<Artist> {
        self.db.collection(ARTIST_COLLECTION)
    }

    pub fn artworks(&self) -> Collection<Artwork> {
        self.db.collection(ARTWORK_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
