pub mod health;
pub mod kml;

pub use health::health_check;
pub use kml::{generate_kml, generate_kml_batch, not_found, validate_kml};
