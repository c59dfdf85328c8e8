//! service-core: Shared infrastructure for the KML generation service.
pub mod config;
pub mod error;
pub mod observability;
