pub mod artists;
pub mod artworks;

pub use artists::{ArtistListParams, ArtistResponse, CreateArtistRequest};
pub use artworks::{
    ArtworkListParams, ArtworkResponse, CreateArtworkRequest, FeaturedParams,
};
