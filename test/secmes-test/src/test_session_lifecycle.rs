// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

use crate::common::util::{create_application_secret, create_context, init_logger};
use spdm_secured_message::common::*;
use spdm_secured_message::config;
use spdm_secured_message::error::*;
use spdm_secured_message::protocol::*;

#[test]
fn test_dhe_session_to_resumption() {
    init_logger();

    let mut requester = create_context(
        SpdmBaseHashAlgo::TPM_ALG_SHA_384,
        SpdmDheAlgo::SECP_384_R1,
        SpdmAeadAlgo::AES_256_GCM,
    );
    requester.set_session_type(SpdmSessionType::SpdmSessionTypeEncMac);
    assert_eq!(requester.get_hash_size(), 48);
    assert_eq!(requester.get_aead_key_size(), 32);

    let dhe_secret = [0xDEu8; 32];
    assert!(requester.import_dhe_secret(&dhe_secret).is_ok());
    requester.set_session_state(SpdmSessionState::SpdmSessionHandshaking);
    assert_eq!(
        requester.get_master_secret().dhe_secret.as_ref(),
        &dhe_secret[..]
    );

    requester
        .set_derived_master_secret(
            SpdmHandshakeSecretStruct::from_slice(&[0x01u8; 48]).unwrap(),
            SpdmMasterSecretStruct::from_slice(&[0x02u8; 48]).unwrap(),
        )
        .unwrap();
    requester.set_export_master_secret(&[0x03u8; 48]).unwrap();

    requester.set_session_state(SpdmSessionState::SpdmSessionEstablished);
    assert!(requester.get_master_secret().is_zeroed());
    assert!(requester.get_handshake_secret().is_zeroed());

    requester
        .set_application_secret(create_application_secret(SpdmAeadAlgo::AES_256_GCM, 3, 4))
        .unwrap();
    assert_eq!(
        requester.next_sequence_number(SpdmKeyDirection::Request),
        Ok(3)
    );

    // size query, then export
    let mut size = 0usize;
    assert_eq!(
        requester.export_session_keys(&mut [], &mut size),
        Err(SPDM_STATUS_BUFFER_TOO_SMALL)
    );
    assert_eq!(size, requester.get_session_keys_size());
    let mut blob = vec![0u8; size];
    assert!(requester.export_session_keys(&mut blob, &mut size).is_ok());
    assert_eq!(size, blob.len());

    let mut resumed = create_context(
        SpdmBaseHashAlgo::TPM_ALG_SHA_384,
        SpdmDheAlgo::SECP_384_R1,
        SpdmAeadAlgo::AES_256_GCM,
    );
    assert!(resumed.import_session_keys(&blob).is_ok());
    assert_eq!(
        resumed.get_application_secret().request_direction,
        requester.get_application_secret().request_direction
    );
    assert_eq!(
        resumed.get_application_secret().response_direction,
        requester.get_application_secret().response_direction
    );
    assert_eq!(resumed.get_request_data_sequence_number(), 4);
    assert_eq!(resumed.get_response_data_sequence_number(), 4);

    let mut export_master_secret = [0u8; SPDM_MAX_HASH_SIZE];
    let mut export_size = export_master_secret.len();
    requester
        .export_master_secret(&mut export_master_secret, &mut export_size)
        .unwrap();
    assert_eq!(&export_master_secret[..export_size], &[0x03u8; 48][..]);
    requester.clear_export_master_secret();
    assert!(requester.is_export_master_secret_cleared());
}

#[test]
fn test_psk_session() {
    init_logger();

    let mut context = SpdmSecuredMessageContext::with_default_sequence_limit();
    context.set_use_psk(true);
    context
        .set_algorithms(
            SpdmVersion::SpdmVersion11,
            SecuredMessageVersion::SecuredMessageVersion10,
            SpdmBaseHashAlgo::TPM_ALG_SHA_256,
            SpdmDheAlgo::empty(),
            SpdmAeadAlgo::CHACHA20_POLY1305,
            SpdmKeyScheduleAlgo::SPDM_KEY_SCHEDULE,
        )
        .unwrap();
    assert_eq!(context.get_dhe_key_size(), 0);

    let hint = [0x5Cu8; config::MAX_SPDM_PSK_HINT_SIZE];
    assert!(context.set_psk_hint(&hint).is_ok());
    assert_eq!(context.get_psk_hint(), Some(&hint[..]));
    let long_hint = [0x5Cu8; config::MAX_SPDM_PSK_HINT_SIZE + 1];
    assert_eq!(
        context.set_psk_hint(&long_hint),
        Err(SPDM_STATUS_INVALID_PARAMETER)
    );

    assert_eq!(
        context.import_dhe_secret(&[]),
        Err(SPDM_STATUS_INVALID_STATE_LOCAL)
    );
    assert!(context.get_master_secret().dhe_secret.is_empty());

    context.set_session_state(SpdmSessionState::SpdmSessionHandshaking);
    context.set_session_state(SpdmSessionState::SpdmSessionEstablished);
    assert_eq!(
        context.get_session_state(),
        SpdmSessionState::SpdmSessionEstablished
    );
    assert!(context.get_master_secret().is_zeroed());
}

#[test]
fn test_sequence_number_ceiling() {
    init_logger();

    let mut context = create_context(
        SpdmBaseHashAlgo::TPM_ALG_SHA_256,
        SpdmDheAlgo::SECP_256_R1,
        SpdmAeadAlgo::AES_128_GCM,
    );
    assert_eq!(
        context.get_max_spdm_session_sequence_number(),
        config::DEFAULT_MAX_SPDM_SESSION_SEQUENCE_NUMBER
    );
    context.set_max_spdm_session_sequence_number(3);
    for expected in 0..3u64 {
        assert_eq!(
            context.next_sequence_number(SpdmKeyDirection::Response),
            Ok(expected)
        );
    }
    assert_eq!(
        context.next_sequence_number(SpdmKeyDirection::Response),
        Err(SPDM_STATUS_SEQUENCE_NUMBER_OVERFLOW)
    );
    assert_eq!(context.get_request_data_sequence_number(), 0);
}

#[test]
fn test_init_wipes_context() {
    init_logger();

    let mut context = create_context(
        SpdmBaseHashAlgo::TPM_ALG_SHA_512,
        SpdmDheAlgo::FFDHE_4096,
        SpdmAeadAlgo::AES_256_GCM,
    );
    context.import_dhe_secret(&[0x77u8; 512]).unwrap();
    context
        .set_application_secret(create_application_secret(SpdmAeadAlgo::AES_256_GCM, 1, 2))
        .unwrap();
    context.init();
    assert!(context.get_master_secret().is_zeroed());
    assert!(context.get_application_secret().is_zeroed());
    assert_eq!(context.get_algo_size(), SpdmSessionAlgoSize::default());
    assert!(get_context_size() > 0);
}
