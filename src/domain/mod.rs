// ============================================================================
// Domain Models Module
// The vector value type, its configuration and error taxonomy
// ============================================================================

pub mod config;
pub mod errors;
pub mod vector;

pub use config::VectorConfig;
pub use errors::{Operation, VectorError, VectorResult};
pub use vector::{AngleUnit, Vector};
