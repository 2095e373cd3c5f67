pub mod asset;
pub mod crop;
pub mod error;
pub mod geometry;
pub mod viewport;
