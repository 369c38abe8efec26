pub mod artist;
pub mod artwork;

pub use artist::Artist;
pub use artwork::Artwork;
