//! Core client logic with no I/O
//!
//! - `labels`: nearest-neighbour display labels for the madness control
//! - `configuration`: user parameters and payload construction
//! - `state`: session status machine and result set
//! - `export`: export artifacts and naming
//! - `render`: text listing of results

pub mod labels;
pub mod configuration;
pub mod state;
pub mod export;
pub mod render;

pub use labels::{resolve, madness_label, MADNESS_LABELS};
pub use configuration::Configuration;
pub use state::{SessionState, SessionStatus, status_messages};
pub use export::{DownloadedFile, export_filename, EXPORT_BASENAME};
pub use render::render_results;
