// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

#![allow(unused)]

use log::LevelFilter;
use simple_logger::SimpleLogger;
use spdm_secured_message::common::*;
use spdm_secured_message::protocol::*;

// A new logger enables the user to choose log level by setting a `SPDM_LOG` environment variable.
// Use the `Error` level by default.
pub fn new_logger_from_env() -> SimpleLogger {
    let level = match std::env::var("SPDM_LOG") {
        Ok(x) => match x.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            _ => LevelFilter::Error,
        },
        _ => LevelFilter::Error,
    };

    SimpleLogger::new().with_utc_timestamps().with_level(level)
}

/// Install the logger once per test binary; later calls are no-ops.
pub fn init_logger() {
    let _ = new_logger_from_env().init();
}

pub fn create_context(
    base_hash_algo: SpdmBaseHashAlgo,
    dhe_algo: SpdmDheAlgo,
    aead_algo: SpdmAeadAlgo,
) -> SpdmSecuredMessageContext {
    let mut context = SpdmSecuredMessageContext::with_default_sequence_limit();
    context
        .set_algorithms(
            SpdmVersion::SpdmVersion12,
            SecuredMessageVersion::SecuredMessageVersion11,
            base_hash_algo,
            dhe_algo,
            aead_algo,
            SpdmKeyScheduleAlgo::SPDM_KEY_SCHEDULE,
        )
        .unwrap();
    context
}

pub fn create_secret_param(
    aead_algo: SpdmAeadAlgo,
    seed: u8,
    sequence_number: u64,
) -> SpdmSessionSecretParam {
    let key_size = aead_algo.get_key_size() as usize;
    let iv_size = aead_algo.get_iv_size() as usize;
    let mut key = [0u8; SPDM_MAX_AEAD_KEY_SIZE];
    let mut iv = [0u8; SPDM_MAX_AEAD_IV_SIZE];
    for (i, b) in key.iter_mut().enumerate() {
        *b = seed.wrapping_add(i as u8);
    }
    for (i, b) in iv.iter_mut().enumerate() {
        *b = seed.wrapping_mul(3).wrapping_add(i as u8);
    }
    SpdmSessionSecretParam {
        encryption_key: SpdmAeadKeyStruct::from_slice(&key[..key_size]).unwrap(),
        salt: SpdmAeadIvStruct::from_slice(&iv[..iv_size]).unwrap(),
        sequence_number,
    }
}

pub fn create_application_secret(
    aead_algo: SpdmAeadAlgo,
    request_sequence_number: u64,
    response_sequence_number: u64,
) -> SpdmSessionApplicationSecret {
    SpdmSessionApplicationSecret {
        request_data_secret: SpdmDirectionDataSecretStruct::default(),
        response_data_secret: SpdmDirectionDataSecretStruct::default(),
        request_direction: create_secret_param(aead_algo, 0x10, request_sequence_number),
        response_direction: create_secret_param(aead_algo, 0x80, response_sequence_number),
    }
}
