// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

use crate::common::util::{create_application_secret, create_context, init_logger};
use codec::{Codec, Writer};
use spdm_secured_message::common::*;
use spdm_secured_message::error::*;
use spdm_secured_message::protocol::*;

fn exported_blob(aead_algo: SpdmAeadAlgo) -> (SpdmSecuredMessageContext, Vec<u8>) {
    let mut context = create_context(
        SpdmBaseHashAlgo::TPM_ALG_SHA_256,
        SpdmDheAlgo::SECP_256_R1,
        aead_algo,
    );
    context
        .set_application_secret(create_application_secret(aead_algo, 0x100, 0x200))
        .unwrap();
    let mut blob = vec![0u8; context.get_session_keys_size()];
    let mut size = blob.len();
    context.export_session_keys(&mut blob, &mut size).unwrap();
    (context, blob)
}

#[test]
fn test_session_keys_every_aead() {
    init_logger();

    for aead_algo in [
        SpdmAeadAlgo::AES_128_GCM,
        SpdmAeadAlgo::AES_256_GCM,
        SpdmAeadAlgo::CHACHA20_POLY1305,
        SpdmAeadAlgo::SM4_GCM,
    ] {
        let (context, blob) = exported_blob(aead_algo);
        let key_size = aead_algo.get_key_size() as usize;
        let iv_size = aead_algo.get_iv_size() as usize;
        assert_eq!(blob.len(), 12 + 2 * (key_size + iv_size + 8));

        let mut target = create_context(
            SpdmBaseHashAlgo::TPM_ALG_SHA_256,
            SpdmDheAlgo::SECP_256_R1,
            aead_algo,
        );
        assert!(target.import_session_keys(&blob).is_ok());
        assert_eq!(
            target.get_application_secret().request_direction,
            context.get_application_secret().request_direction
        );
        assert_eq!(target.get_request_data_sequence_number(), 0x100);
        assert_eq!(target.get_response_data_sequence_number(), 0x200);
    }
}

#[test]
fn test_session_keys_capacity_is_min_of_slice_and_size() {
    init_logger();

    let (context, blob) = exported_blob(SpdmAeadAlgo::AES_128_GCM);
    let mut out = vec![0u8; blob.len() + 16];

    let mut size = blob.len() - 1;
    assert_eq!(
        context.export_session_keys(&mut out, &mut size),
        Err(SPDM_STATUS_BUFFER_TOO_SMALL)
    );
    assert_eq!(size, blob.len());

    let mut size = usize::MAX;
    assert_eq!(
        context.export_session_keys(&mut out[..blob.len() - 1], &mut size),
        Err(SPDM_STATUS_BUFFER_TOO_SMALL)
    );
    assert_eq!(size, blob.len());

    let mut size = usize::MAX;
    assert!(context.export_session_keys(&mut out, &mut size).is_ok());
    assert_eq!(size, blob.len());
    assert_eq!(&out[..size], &blob[..]);
}

#[test]
fn test_session_keys_import_is_all_or_nothing() {
    init_logger();

    let (_, blob) = exported_blob(SpdmAeadAlgo::AES_256_GCM);
    let mut target = create_context(
        SpdmBaseHashAlgo::TPM_ALG_SHA_256,
        SpdmDheAlgo::SECP_256_R1,
        SpdmAeadAlgo::AES_256_GCM,
    );

    let mut longer = blob.clone();
    longer.push(0);
    assert_eq!(
        target.import_session_keys(&longer),
        Err(SPDM_STATUS_INVALID_MSG_SIZE)
    );
    assert_eq!(
        target.import_session_keys(&[]),
        Err(SPDM_STATUS_INVALID_MSG_SIZE)
    );

    let mut wrong_version = blob.clone();
    wrong_version[..4].copy_from_slice(&0u32.to_le_bytes());
    assert_eq!(
        target.import_session_keys(&wrong_version),
        Err(SPDM_STATUS_INVALID_MSG_FIELD)
    );
    assert!(target.get_application_secret().is_zeroed());
}

#[test]
fn test_session_keys_struct_matches_context_export() {
    let (context, blob) = exported_blob(SpdmAeadAlgo::AES_256_GCM);
    let keys = SpdmSessionKeysStruct {
        version: SPDM_SECURE_SESSION_KEYS_STRUCT_VERSION,
        aead_key_size: 32,
        aead_iv_size: 12,
        request_direction: context.get_application_secret().request_direction.clone(),
        response_direction: context.get_application_secret().response_direction.clone(),
    };
    let mut out = [0u8; 116];
    let mut writer = Writer::init(&mut out);
    assert_eq!(keys.encode(&mut writer), Ok(116));
    assert_eq!(&out[..], &blob[..]);
}

#[test]
fn test_session_keys_export_before_application_secret() {
    init_logger();

    let context = create_context(
        SpdmBaseHashAlgo::TPM_ALG_SHA_384,
        SpdmDheAlgo::SECP_384_R1,
        SpdmAeadAlgo::AES_256_GCM,
    );
    let mut size = 0usize;
    assert_eq!(
        context.export_session_keys(&mut [], &mut size),
        Err(SPDM_STATUS_BUFFER_TOO_SMALL)
    );
    assert_eq!(size, 116);
    let mut blob = vec![0xFFu8; size];
    assert!(context.export_session_keys(&mut blob, &mut size).is_ok());
    assert_eq!(size, 116);
    assert!(blob[12..].iter().all(|b| *b == 0));
}
