// Copyright (c) 2020 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

use super::session::SpdmSessionSecretParam;
use crate::protocol::{
    SpdmAeadIvStruct, SpdmAeadKeyStruct, SPDM_MAX_AEAD_IV_SIZE, SPDM_MAX_AEAD_KEY_SIZE,
};
use codec::{Codec, Reader, Writer};

pub const SPDM_SECURE_SESSION_KEYS_STRUCT_VERSION: u32 = 1;

// version, aead_key_size, aead_iv_size
pub const SPDM_SECURE_SESSION_KEYS_HEADER_SIZE: usize = 12;

const SEQUENCE_NUMBER_SIZE: usize = 8;

/// Size of an exported session keys blob for the given AEAD sizes.
pub fn get_session_keys_size(aead_key_size: usize, aead_iv_size: usize) -> usize {
    SPDM_SECURE_SESSION_KEYS_HEADER_SIZE
        + 2 * (aead_key_size + aead_iv_size + SEQUENCE_NUMBER_SIZE)
}

/// Application keys of both directions as carried across a session
/// resumption.
///
/// All integers are little endian:
/// version, aead_key_size, aead_iv_size, then request key, salt and
/// sequence number, then the same for the response direction.
#[derive(Debug, Default)]
pub struct SpdmSessionKeysStruct {
    pub version: u32,
    pub aead_key_size: u32,
    pub aead_iv_size: u32,
    pub request_direction: SpdmSessionSecretParam,
    pub response_direction: SpdmSessionSecretParam,
}

impl SpdmSessionKeysStruct {
    /// Peek at the header without reading the keys.
    pub fn read_header(bytes: &[u8]) -> Option<(u32, u32, u32)> {
        let mut r = Reader::init(bytes);
        let version = u32::read(&mut r)?;
        let aead_key_size = u32::read(&mut r)?;
        let aead_iv_size = u32::read(&mut r)?;
        Some((version, aead_key_size, aead_iv_size))
    }

    // Keys and salts go out at the declared sizes from their fixed storage,
    // so unset or shorter secrets are zero padded.
    fn encode_direction(
        &self,
        direction: &SpdmSessionSecretParam,
        bytes: &mut Writer,
    ) -> Result<usize, codec::EncodeErr> {
        let aead_key_size = self.aead_key_size as usize;
        let aead_iv_size = self.aead_iv_size as usize;
        if aead_key_size > SPDM_MAX_AEAD_KEY_SIZE || aead_iv_size > SPDM_MAX_AEAD_IV_SIZE {
            return Err(codec::EncodeErr);
        }
        let mut cnt = 0usize;
        cnt += bytes
            .extend_from_slice(&direction.encryption_key.data[..aead_key_size])
            .ok_or(codec::EncodeErr)?;
        cnt += bytes
            .extend_from_slice(&direction.salt.data[..aead_iv_size])
            .ok_or(codec::EncodeErr)?;
        cnt += direction.sequence_number.encode(bytes)?;
        Ok(cnt)
    }

    fn read_direction(
        r: &mut Reader,
        aead_key_size: usize,
        aead_iv_size: usize,
    ) -> Option<SpdmSessionSecretParam> {
        let encryption_key = SpdmAeadKeyStruct::from_slice(r.take(aead_key_size)?)?;
        let salt = SpdmAeadIvStruct::from_slice(r.take(aead_iv_size)?)?;
        let sequence_number = u64::read(r)?;
        Some(SpdmSessionSecretParam {
            encryption_key,
            salt,
            sequence_number,
        })
    }
}

impl Codec for SpdmSessionKeysStruct {
    fn encode(&self, bytes: &mut Writer) -> Result<usize, codec::EncodeErr> {
        let mut cnt = 0usize;
        cnt += self.version.encode(bytes)?;
        cnt += self.aead_key_size.encode(bytes)?;
        cnt += self.aead_iv_size.encode(bytes)?;
        cnt += self.encode_direction(&self.request_direction, bytes)?;
        cnt += self.encode_direction(&self.response_direction, bytes)?;
        Ok(cnt)
    }

    fn read(r: &mut Reader) -> Option<SpdmSessionKeysStruct> {
        let version = u32::read(r)?;
        let aead_key_size = u32::read(r)?;
        let aead_iv_size = u32::read(r)?;
        if aead_key_size as usize > SPDM_MAX_AEAD_KEY_SIZE
            || aead_iv_size as usize > SPDM_MAX_AEAD_IV_SIZE
        {
            return None;
        }
        let request_direction =
            Self::read_direction(r, aead_key_size as usize, aead_iv_size as usize)?;
        let response_direction =
            Self::read_direction(r, aead_key_size as usize, aead_iv_size as usize)?;
        Some(SpdmSessionKeysStruct {
            version,
            aead_key_size,
            aead_iv_size,
            request_direction,
            response_direction,
        })
    }
}
