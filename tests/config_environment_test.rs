// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Defaults, overrides and rejected values for storage, history and sensitivity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use physio_sandbox::config::{ConfigError, SandboxConfig, HISTORY_LIMIT_ENV, STORAGE_DIR_ENV};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const TOP_N_ENV: &str = "PHYSIO_SENSITIVITY_TOP_N";

fn clear_env() {
    for name in [STORAGE_DIR_ENV, HISTORY_LIMIT_ENV, TOP_N_ENV] {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = SandboxConfig::from_env().unwrap();
    assert_eq!(config.history_limit, 50);
    assert_eq!(config.sensitivity.top_n, 5);
    assert!(config.storage_dir.ends_with("physio-sandbox"));
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_env();
    env::set_var(STORAGE_DIR_ENV, "/tmp/physio-test-store");
    env::set_var(HISTORY_LIMIT_ENV, "200");
    env::set_var(TOP_N_ENV, "3");
    let config = SandboxConfig::from_env();
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.storage_dir, PathBuf::from("/tmp/physio-test-store"));
    assert_eq!(config.history_limit, 200);
    assert_eq!(config.sensitivity.top_n, 3);
    assert!(config.summary().contains("history_limit=200"));
}

#[test]
#[serial]
fn test_unparseable_history_limit_is_rejected() {
    clear_env();
    env::set_var(HISTORY_LIMIT_ENV, "lots");
    let result = SandboxConfig::from_env();
    clear_env();
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_out_of_range_history_limit_is_rejected() {
    clear_env();
    env::set_var(HISTORY_LIMIT_ENV, "0");
    let result = SandboxConfig::from_env();
    clear_env();
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}
