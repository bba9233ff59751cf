//! Shared protocol types for the deadpandr client
//!
//! Contains the generation parameters, the wire messages for the generate and
//! export endpoints, and the logging bootstrap used by the binary.

pub mod types;
pub mod errors;
pub mod messages;
pub mod logging;

pub use types::*;
pub use errors::*;

pub use messages::{GenerateRequest, GenerateResponse, ErrorResponse, ExportRequest};
