//! Environment Configuration Test
//!
//! Verifies that client settings are loaded from `DEADPANDR_*` variables.
//! Everything runs in one test because the variables are process-wide.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use assert_matches::assert_matches;
use deadpandr::config::{ENV_API_URL, ENV_OUTPUT_DIR, ENV_TIMEOUT_SECS};
use deadpandr::{ClientError, ClientSettings};

fn clear_vars() {
    for key in [ENV_API_URL, ENV_TIMEOUT_SECS, ENV_OUTPUT_DIR] {
        env::remove_var(key);
    }
}

#[test]
fn test_env_based_configuration() {
    clear_vars();

    let settings = ClientSettings::from_env().unwrap();
    assert_eq!(settings.api_url.as_str(), "https://deadpandr.onrender.com/");
    assert_eq!(settings.timeout, Duration::from_secs(120));
    assert_eq!(settings.output_dir, PathBuf::from("."));

    env::set_var(ENV_API_URL, "http://h:1/api");
    env::set_var(ENV_TIMEOUT_SECS, " 7 ");
    env::set_var(ENV_OUTPUT_DIR, "exports");
    let settings = ClientSettings::from_env().unwrap();
    assert_eq!(settings.api_url.as_str(), "http://h:1/api");
    assert_eq!(settings.timeout, Duration::from_secs(7));
    assert_eq!(settings.output_dir, PathBuf::from("exports"));
    assert_eq!(settings.endpoint("/generate"), "http://h:1/api/generate");

    env::set_var(ENV_TIMEOUT_SECS, "abc");
    let err = ClientSettings::from_env().unwrap_err();
    assert_matches!(err, ClientError::Config { ref message } if message.contains("got 'abc'"));

    env::set_var(ENV_TIMEOUT_SECS, "0");
    assert_matches!(ClientSettings::from_env(), Err(ClientError::Config { .. }));

    env::set_var(ENV_TIMEOUT_SECS, "7");
    env::set_var(ENV_API_URL, "ftp://example.com");
    let err = ClientSettings::from_env().unwrap_err();
    assert_matches!(err, ClientError::Config { ref message } if message.contains("ftp"));

    clear_vars();
}
