#![no_main]

use libfuzzer_sys::fuzz_target;
use spdm_secured_message::common::SpdmSecuredMessageContext;
use spdm_secured_message::protocol::*;

fuzz_target!(|data: &[u8]| {
    for aead in [
        SpdmAeadAlgo::AES_128_GCM,
        SpdmAeadAlgo::AES_256_GCM,
        SpdmAeadAlgo::CHACHA20_POLY1305,
        SpdmAeadAlgo::SM4_GCM,
    ] {
        let mut context = SpdmSecuredMessageContext::new();
        let _ = context.set_algorithms(
            SpdmVersion::SpdmVersion12,
            SecuredMessageVersion::SecuredMessageVersion11,
            SpdmBaseHashAlgo::TPM_ALG_SHA_384,
            SpdmDheAlgo::SECP_384_R1,
            aead,
            SpdmKeyScheduleAlgo::SPDM_KEY_SCHEDULE,
        );
        if context.import_session_keys(data).is_ok() {
            let mut out = [0u8; 128];
            let mut out_size = out.len();
            let _ = context.export_session_keys(&mut out, &mut out_size);
            assert_eq!(&out[..out_size], data);
        }
    }
});
