pub mod generator;
pub mod providers;
pub mod validator;

pub use generator::{BatchOutcome, GenerateError, KmlGenerator};
