pub mod app;
pub mod artists;
pub mod artworks;
pub mod health;

pub use app::{root, test_database};
pub use artists::{create_artist, list_artists};
pub use artworks::{create_artwork, featured_artworks, list_artworks};
pub use health::health_check;
