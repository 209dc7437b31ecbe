// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

use core::{
    convert::TryFrom,
    fmt::{self, Debug},
};

use codec::{Codec, Reader, Writer};

/// Reference: https://github.com/DMTF/libspdm/blob/main/include/library/spdm_return_status.h

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusSeverity {
    SUCCESS = 0,
    ERROR = 8,
}

impl Default for StatusSeverity {
    fn default() -> Self {
        Self::ERROR
    }
}

impl TryFrom<u8> for StatusSeverity {
    type Error = ();

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::SUCCESS),
            8 => Ok(Self::ERROR),
            _ => Err(()),
        }
    }
}

#[repr(u16)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusCodeCore {
    SUCCESS = 0,
    INVALID_PARAMETER = 1,
    INVALID_STATE_LOCAL = 3,
    INVALID_MSG_FIELD = 5,
    INVALID_MSG_SIZE = 6,
    BUFFER_TOO_SMALL = 13,
}

impl TryFrom<u16> for StatusCodeCore {
    type Error = ();

    fn try_from(value: u16) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::SUCCESS),
            1 => Ok(Self::INVALID_PARAMETER),
            3 => Ok(Self::INVALID_STATE_LOCAL),
            5 => Ok(Self::INVALID_MSG_FIELD),
            6 => Ok(Self::INVALID_MSG_SIZE),
            13 => Ok(Self::BUFFER_TOO_SMALL),
            _ => Err(()),
        }
    }
}

impl Default for StatusCodeCore {
    fn default() -> Self {
        Self::INVALID_PARAMETER
    }
}

#[repr(u16)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusCodeCrypto {
    CRYPTO_ERROR = 0,
    SEQUENCE_NUMBER_OVERFLOW = 2,
}

impl TryFrom<u16> for StatusCodeCrypto {
    type Error = ();

    fn try_from(value: u16) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::CRYPTO_ERROR),
            2 => Ok(Self::SEQUENCE_NUMBER_OVERFLOW),
            _ => Err(()),
        }
    }
}

impl Default for StatusCodeCrypto {
    fn default() -> Self {
        Self::CRYPTO_ERROR
    }
}

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusCode {
    SUCCESS,
    CORE(StatusCodeCore),
    CRYPTO(StatusCodeCrypto),
}

impl Default for StatusCode {
    fn default() -> Self {
        Self::CORE(StatusCodeCore::default())
    }
}

const STATUS_SOURCE_SUCCESS: u32 = 0;
const STATUS_SOURCE_CORE: u32 = 1;
const STATUS_SOURCE_CRYPTO: u32 = 2;

impl StatusCode {
    /// The low 24 bits of the return code: source in bits 16..24,
    /// code in bits 0..16.
    fn to_bits(self) -> u32 {
        match self {
            StatusCode::SUCCESS => STATUS_SOURCE_SUCCESS << 16,
            StatusCode::CORE(c) => (STATUS_SOURCE_CORE << 16) + c as u32,
            StatusCode::CRYPTO(c) => (STATUS_SOURCE_CRYPTO << 16) + c as u32,
        }
    }

    fn from_bits(bits: u32) -> Option<Self> {
        let source = (bits & 0x00_FF_00_00) >> 16;
        let code = (bits & 0x00_00_FF_FF) as u16;
        match source {
            STATUS_SOURCE_SUCCESS if code == 0 => Some(StatusCode::SUCCESS),
            STATUS_SOURCE_CORE => StatusCodeCore::try_from(code).ok().map(StatusCode::CORE),
            STATUS_SOURCE_CRYPTO => StatusCodeCrypto::try_from(code)
                .ok()
                .map(StatusCode::CRYPTO),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct SpdmStatus {
    pub severity: StatusSeverity,
    pub status_code: StatusCode,
}

impl Codec for SpdmStatus {
    fn encode(&self, bytes: &mut Writer) -> Result<usize, codec::EncodeErr> {
        self.get_u32().encode(bytes)
    }

    fn read(r: &mut Reader) -> Option<Self> {
        let sc = u32::read(r)?;
        let severity = ((sc & 0xF0_00_00_00) >> 28) as u8;
        let severity = StatusSeverity::try_from(severity).ok()?;
        if (sc & 0x0F_00_00_00) != 0 {
            return None; //the reserve field
        }
        let status_code = StatusCode::from_bits(sc & 0x00_FF_FF_FF)?;

        Some(Self {
            severity,
            status_code,
        })
    }
}

impl SpdmStatus {
    /// return the u32 encoding
    pub fn get_u32(&self) -> u32 {
        ((((self.severity as u8) & 0x0F) as u32) << 28) | self.status_code.to_bits()
    }

    /// get SpdmStatus structure from u32 value
    pub fn from_u32(status: u32) -> Option<Self> {
        Self::read_bytes(&status.to_le_bytes())
    }

    /// Returns true if severity is StatusSeverity::SUCCESS else it returns false.
    pub fn spdm_status_is_success(&self) -> bool {
        self.severity == StatusSeverity::SUCCESS
    }

    /// Returns true if severity is StatusSeverity::ERROR else it returns false.
    pub fn spdm_status_is_error(&self) -> bool {
        self.severity == StatusSeverity::ERROR
    }
}

impl fmt::Display for SpdmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Severity: {:?}, Status: {:?}, Code: 0x{:08x}",
            self.severity,
            self.status_code,
            self.get_u32()
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpdmStatus {}

#[macro_export]
macro_rules! spdm_return_status {
    ($severity:expr,  $status_code:expr) => {
        SpdmStatus {
            severity: $severity,
            status_code: $status_code,
        }
    };
}

pub use spdm_return_status;

pub const SPDM_STATUS_SUCCESS: SpdmStatus =
    spdm_return_status!(StatusSeverity::SUCCESS, StatusCode::SUCCESS);

/* - Core Errors - */

/* The function input parameter is invalid. */
pub const SPDM_STATUS_INVALID_PARAMETER: SpdmStatus = spdm_return_status!(
    StatusSeverity::ERROR,
    StatusCode::CORE(StatusCodeCore::INVALID_PARAMETER)
);

/* Unable to complete operation due to caller's state. */
pub const SPDM_STATUS_INVALID_STATE_LOCAL: SpdmStatus = spdm_return_status!(
    StatusSeverity::ERROR,
    StatusCode::CORE(StatusCodeCore::INVALID_STATE_LOCAL)
);

/* The supplied structure contains one or more invalid fields. */
pub const SPDM_STATUS_INVALID_MSG_FIELD: SpdmStatus = spdm_return_status!(
    StatusSeverity::ERROR,
    StatusCode::CORE(StatusCodeCore::INVALID_MSG_FIELD)
);

/* The supplied structure's size is invalid. */
pub const SPDM_STATUS_INVALID_MSG_SIZE: SpdmStatus = spdm_return_status!(
    StatusSeverity::ERROR,
    StatusCode::CORE(StatusCodeCore::INVALID_MSG_SIZE)
);

/* Unable to return data because caller does not provide big enough buffer. */
pub const SPDM_STATUS_BUFFER_TOO_SMALL: SpdmStatus = spdm_return_status!(
    StatusSeverity::ERROR,
    StatusCode::CORE(StatusCodeCore::BUFFER_TOO_SMALL)
);

/* - Cryptography Errors - */

/*  AEAD sequence number overflow. */
pub const SPDM_STATUS_SEQUENCE_NUMBER_OVERFLOW: SpdmStatus = spdm_return_status!(
    StatusSeverity::ERROR,
    StatusCode::CRYPTO(StatusCodeCrypto::SEQUENCE_NUMBER_OVERFLOW)
);

pub type SpdmResult<T = ()> = core::result::Result<T, SpdmStatus>;
