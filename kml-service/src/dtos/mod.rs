pub mod kml;

pub use kml::{
    BatchFailure, BatchSuccess, GenerateKmlBatchRequest, GenerateKmlBatchResponse,
    GenerateKmlRequest, GenerateKmlResponse, ValidateKmlRequest, ValidateKmlResponse,
};
