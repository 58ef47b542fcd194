//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. One statement per call;
//! transaction boundaries are the implicit per-statement default.

pub mod category_repo;
pub mod image_repo;
pub mod place_repo;
pub mod video_repo;

pub use category_repo::CategoryRepo;
pub use image_repo::ImageRepo;
pub use place_repo::PlaceRepo;
pub use video_repo::VideoRepo;
