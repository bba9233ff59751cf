//! deadpandr client library
//!
//! Builds parameterized comedy generation requests, runs them against the
//! remote generation service, and exports the results as files.

pub mod config;
pub mod core;
pub mod error;
pub mod export_pipeline;
pub mod services;
pub mod session_impl;
pub mod traits;

// Re-export main types
pub use config::ClientSettings;
pub use error::{ClientError, ClientResult};
pub use export_pipeline::{export_results, SavedFile};
pub use session_impl::Session;
pub use traits::*;
pub use services::{RealComedyApi, RealFileSink};
