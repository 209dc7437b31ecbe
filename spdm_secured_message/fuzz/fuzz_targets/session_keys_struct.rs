#![no_main]

use codec::Codec;
use libfuzzer_sys::fuzz_target;
use spdm_secured_message::common::SpdmSessionKeysStruct;

fuzz_target!(|data: &[u8]| {
    let _ = SpdmSessionKeysStruct::read_header(data);
    let _ = SpdmSessionKeysStruct::read_bytes(data);
});
