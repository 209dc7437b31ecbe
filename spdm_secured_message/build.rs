// Copyright (c) 2021 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

use serde::Deserialize;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const CONFIG_ENV: &str = "SPDM_SECMES_CONFIG";
const DEFAULT_CONFIG: &str = "etc/config.json";

#[derive(Debug, PartialEq, Deserialize)]
struct SpdmSecmesConfig {
    psk_config: PskConfig,
    session_config: SessionConfig,
}

#[derive(Debug, PartialEq, Deserialize)]
struct PskConfig {
    max_psk_hint_size: usize,
}

#[derive(Debug, PartialEq, Deserialize)]
struct SessionConfig {
    max_spdm_session_sequence_number: u64,
}

impl SpdmSecmesConfig {
    fn validate(&self) -> Result<(), String> {
        // PSKHintLength is a 16-bit field in PSK_EXCHANGE.
        if self.psk_config.max_psk_hint_size == 0 || self.psk_config.max_psk_hint_size > 0xFFFF
        {
            return Err(format!(
                "max_psk_hint_size must be in 1..=65535, got {}",
                self.psk_config.max_psk_hint_size
            ));
        }
        if self.session_config.max_spdm_session_sequence_number == 0 {
            return Err("max_spdm_session_sequence_number must not be 0".into());
        }
        Ok(())
    }
}

const CONFIG_TEMPLATE: &str = "// Generated by build.rs from {config_path}. Do not edit.

/// Capacity of the PSK hint buffer in a session context.
pub const MAX_SPDM_PSK_HINT_SIZE: usize = {max_psk_hint_size};

/// Sequence number ceiling a session manager provisions into a new context.
pub const DEFAULT_MAX_SPDM_SESSION_SEQUENCE_NUMBER: u64 = {max_seq};
";

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let config_path = match env::var(CONFIG_ENV) {
        Ok(path) => PathBuf::from(path),
        Err(_) => manifest_dir.join(DEFAULT_CONFIG),
    };
    println!("cargo:rerun-if-env-changed={}", CONFIG_ENV);
    println!("cargo:rerun-if-changed={}", config_path.display());
    println!("cargo:rerun-if-changed=build.rs");

    let config_json = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", config_path.display(), e));
    let config: SpdmSecmesConfig = serde_json::from_str(&config_json)
        .unwrap_or_else(|e| panic!("invalid {}: {}", config_path.display(), e));
    if let Err(e) = config.validate() {
        panic!("invalid {}: {}", config_path.display(), e);
    }

    let rendered = CONFIG_TEMPLATE
        .replace("{config_path}", &config_path.display().to_string())
        .replace(
            "{max_psk_hint_size}",
            &config.psk_config.max_psk_hint_size.to_string(),
        )
        .replace(
            "{max_seq}",
            &format!(
                "0x{:X}",
                config.session_config.max_spdm_session_sequence_number
            ),
        );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    write_config(&out_dir.join("config.rs"), &rendered);
}

fn write_config(path: &Path, rendered: &str) {
    let mut file = fs::File::create(path)
        .unwrap_or_else(|e| panic!("cannot create {}: {}", path.display(), e));
    file.write_all(rendered.as_bytes())
        .unwrap_or_else(|e| panic!("cannot write {}: {}", path.display(), e));
}
