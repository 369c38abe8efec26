pub mod database;

pub use database::{GalleryDb, ARTIST_COLLECTION, ARTWORK_COLLECTION};
