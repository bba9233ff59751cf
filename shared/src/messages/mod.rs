//! Wire messages exchanged with the generation service
//!
//! - `generate`: joke generation request and its success/failure bodies
//! - `export`: result set export request

pub mod generate;
pub mod export;

pub use generate::{GenerateRequest, GenerateResponse, ErrorResponse};
pub use export::ExportRequest;
