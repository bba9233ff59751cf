//! Client services implementations

pub mod api_client;
pub mod file_sink;

#[cfg(test)]
pub mod tests;

pub use api_client::*;
pub use file_sink::*;
