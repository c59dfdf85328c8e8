//! kml-service: converts natural-language geographic requests into KML
//! documents via a generative text provider, and validates the result
//! before returning it.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;
