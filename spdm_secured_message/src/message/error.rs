// Copyright (c) 2020 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

use codec::enum_builder;
use codec::{Codec, Reader, Writer};

enum_builder! {
    @U8
    EnumName: SpdmErrorCode;
    EnumVal{
        SpdmErrorInvalidRequest => 0x1,
        SpdmErrorBusy => 0x3,
        SpdmErrorUnexpectedRequest => 0x4,
        SpdmErrorUnspecified => 0x5,
        SpdmErrorDecryptError => 0x6,
        SpdmErrorUnsupportedRequest => 0x7,
        SpdmErrorRequestInFlight => 0x8,
        SpdmErrorInvalidResponseCode => 0x9,
        SpdmErrorSessionLimitExceeded => 0xA,
        SpdmErrorSessionRequired => 0xB,
        SpdmErrorResetRequired => 0xC,
        SpdmErrorResponseTooLarge => 0xD,
        SpdmErrorRequestTooLarge => 0xE,
        SpdmErrorLargeResponse => 0xF,
        SpdmErrorMessageLost => 0x10,
        SpdmErrorVersionMismatch => 0x41,
        SpdmErrorResponseNotReady => 0x42,
        SpdmErrorRequestResynch => 0x43,
        SpdmErrorVendorDefined => 0xFF
    }
}
impl Default for SpdmErrorCode {
    fn default() -> SpdmErrorCode {
        SpdmErrorCode::Unknown(0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpdmErrorResponseNotReadyExtData {
    pub rdt_exponent: u8,
    pub request_code: u8,
    pub token: u8,
    pub rdtm: u8,
}

impl Codec for SpdmErrorResponseNotReadyExtData {
    fn encode(&self, bytes: &mut Writer) -> Result<usize, codec::EncodeErr> {
        let mut cnt = 0usize;
        cnt += self.rdt_exponent.encode(bytes)?;
        cnt += self.request_code.encode(bytes)?;
        cnt += self.token.encode(bytes)?;
        cnt += self.rdtm.encode(bytes)?;
        Ok(cnt)
    }

    fn read(r: &mut Reader) -> Option<SpdmErrorResponseNotReadyExtData> {
        let rdt_exponent = u8::read(r)?;
        let request_code = u8::read(r)?;
        let token = u8::read(r)?;
        let rdtm = u8::read(r)?;
        Some(SpdmErrorResponseNotReadyExtData {
            rdt_exponent,
            request_code,
            token,
            rdtm,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpdmErrorExtendedData {
    None,
    ResponseNotReady(SpdmErrorResponseNotReadyExtData),
}

impl Default for SpdmErrorExtendedData {
    fn default() -> Self {
        SpdmErrorExtendedData::None
    }
}

/// The last ERROR response observed on a session, kept for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpdmErrorStruct {
    pub error_code: SpdmErrorCode,
    pub session_id: u32,
    pub extended_error_data: SpdmErrorExtendedData,
}

impl SpdmErrorStruct {
    pub fn is_empty(&self) -> bool {
        *self == SpdmErrorStruct::default()
    }
}
