pub mod export;
pub mod painter;
pub mod scene;

// Re-export specific items to keep the API clean for the rest of the app
pub use export::export_image;
pub use scene::{AtomScene, Camera, PointKind, ProjectedPoint};
