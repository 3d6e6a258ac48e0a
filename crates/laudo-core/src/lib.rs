//! laudo-core
//!
//! Pure domain types for the abdominal ultrasound report: the findings
//! record, validated measurements, focal-finding lists and the ellipsoid
//! volume formula. Nothing here performs I/O.

pub mod error;
pub mod findings;
pub mod measurement;
pub mod models;
pub mod paths;
pub mod volume;

pub use error::CoreError;
pub use findings::FindingId;
pub use measurement::Measurement;
pub use models::record::FindingsRecord;
