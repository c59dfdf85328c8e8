//! Structural KML sanity check.
//!
//! This is a substring presence test, not an XML parse: tokens appearing
//! inside comments or attribute text would incorrectly validate, and
//! equivalent content under different casing or self-closing syntax
//! (e.g., `<Document/>`) would incorrectly fail. Callers rely on this
//! exact behavior, so any move to a real XML parser changes the contract.

use thiserror::Error;

/// Elements that must all appear verbatim.
const REQUIRED_ELEMENTS: [&str; 5] = ["<?xml", "<kml", "<Document>", "</Document>", "</kml>"];

/// At least one of these must appear for the document to contain any
/// geographic content.
const CONTENT_ELEMENTS: [&str; 6] = [
    "<Camera>",
    "<LookAt>",
    "<gx:FlyTo>",
    "<Placemark>",
    "<LineString>",
    "<Polygon>",
];

/// Why a document failed the structural check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KmlIssue {
    #[error("Missing required KML element: {0}")]
    MissingElement(&'static str),

    #[error("KML missing geographic content")]
    NoGeographicContent,
}

/// Check that the KML has the required elements, reporting the first
/// missing one.
pub fn check_kml(kml: &str) -> Result<(), KmlIssue> {
    for element in REQUIRED_ELEMENTS {
        if !kml.contains(element) {
            return Err(KmlIssue::MissingElement(element));
        }
    }

    if !CONTENT_ELEMENTS.iter().any(|e| kml.contains(e)) {
        return Err(KmlIssue::NoGeographicContent);
    }

    Ok(())
}

/// Boolean form of [`check_kml`].
pub fn is_valid_kml(kml: &str) -> bool {
    check_kml(kml).is_ok()
}
