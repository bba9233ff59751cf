//! Tests for client services
//!
//! HTTP behaviour is exercised against a local wiremock server, file output
//! against a temporary directory.
