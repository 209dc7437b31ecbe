// Copyright (c) 2020 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

use crate::config;
use codec::{Codec, Reader, Writer};
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const SHA256_DIGEST_SIZE: usize = 32;
pub const SHA384_DIGEST_SIZE: usize = 48;
pub const SHA512_DIGEST_SIZE: usize = 64;
pub const SHA3_256_DIGEST_SIZE: usize = 32;
pub const SHA3_384_DIGEST_SIZE: usize = 48;
pub const SHA3_512_DIGEST_SIZE: usize = 64;
pub const SM3_256_DIGEST_SIZE: usize = 32;

pub const FFDHE_2048_KEY_SIZE: usize = 256;
pub const FFDHE_3072_KEY_SIZE: usize = 384;
pub const FFDHE_4096_KEY_SIZE: usize = 512;
pub const SECP_256_R1_KEY_SIZE: usize = 32 * 2;
pub const SECP_384_R1_KEY_SIZE: usize = 48 * 2;
pub const SECP_521_R1_KEY_SIZE: usize = 66 * 2;
pub const SM2_P256_KEY_SIZE: usize = 32 * 2;

pub const AEAD_AES_128_GCM_KEY_SIZE: usize = 16;
pub const AEAD_AES_256_GCM_KEY_SIZE: usize = 32;
pub const AEAD_CHACHA20_POLY1305_KEY_SIZE: usize = 32;
pub const AEAD_SM4_GCM_KEY_SIZE: usize = 16;

pub const AEAD_AES_128_GCM_IV_SIZE: usize = 12;
pub const AEAD_AES_256_GCM_IV_SIZE: usize = 12;
pub const AEAD_CHACHA20_POLY1305_IV_SIZE: usize = 12;
pub const AEAD_SM4_GCM_IV_SIZE: usize = 12;

pub const AEAD_AES_128_GCM_TAG_SIZE: usize = 16;
pub const AEAD_AES_256_GCM_TAG_SIZE: usize = 16;
pub const AEAD_CHACHA20_POLY1305_TAG_SIZE: usize = 16;
pub const AEAD_SM4_GCM_TAG_SIZE: usize = 16;

pub const SPDM_MAX_HASH_SIZE: usize = 64;
pub const SPDM_MAX_DHE_KEY_SIZE: usize = FFDHE_4096_KEY_SIZE;
pub const SPDM_MAX_AEAD_KEY_SIZE: usize = 32;
pub const SPDM_MAX_AEAD_IV_SIZE: usize = 12;

bitflags! {
    #[derive(Default)]
    pub struct SpdmBaseHashAlgo: u32 {
        const TPM_ALG_SHA_256 = 0b0000_0001;
        const TPM_ALG_SHA_384 = 0b0000_0010;
        const TPM_ALG_SHA_512 = 0b0000_0100;
        const TPM_ALG_SHA3_256 = 0b0000_1000;
        const TPM_ALG_SHA3_384 = 0b0001_0000;
        const TPM_ALG_SHA3_512 = 0b0010_0000;
        const TPM_ALG_SM3_256 = 0b0100_0000;
        const VALID_MASK = Self::TPM_ALG_SHA_256.bits
            | Self::TPM_ALG_SHA_384.bits
            | Self::TPM_ALG_SHA_512.bits
            | Self::TPM_ALG_SHA3_256.bits
            | Self::TPM_ALG_SHA3_384.bits
            | Self::TPM_ALG_SHA3_512.bits
            | Self::TPM_ALG_SM3_256.bits;
    }
}

impl SpdmBaseHashAlgo {
    /// Digest size in bytes, or 0 unless exactly one known algorithm is set.
    pub fn get_size(&self) -> u16 {
        match *self {
            SpdmBaseHashAlgo::TPM_ALG_SHA_256 => SHA256_DIGEST_SIZE as u16,
            SpdmBaseHashAlgo::TPM_ALG_SHA_384 => SHA384_DIGEST_SIZE as u16,
            SpdmBaseHashAlgo::TPM_ALG_SHA_512 => SHA512_DIGEST_SIZE as u16,
            SpdmBaseHashAlgo::TPM_ALG_SHA3_256 => SHA3_256_DIGEST_SIZE as u16,
            SpdmBaseHashAlgo::TPM_ALG_SHA3_384 => SHA3_384_DIGEST_SIZE as u16,
            SpdmBaseHashAlgo::TPM_ALG_SHA3_512 => SHA3_512_DIGEST_SIZE as u16,
            SpdmBaseHashAlgo::TPM_ALG_SM3_256 => SM3_256_DIGEST_SIZE as u16,
            _ => 0,
        }
    }

    /// return true if no more than one is selected
    /// return false if two or more is selected
    pub fn is_no_more_than_one_selected(&self) -> bool {
        self.bits() == 0 || self.bits() & (self.bits() - 1) == 0
    }

    pub fn is_valid(&self) -> bool {
        (self.bits & Self::VALID_MASK.bits) != 0
    }

    pub fn is_valid_one_select(&self) -> bool {
        self.is_no_more_than_one_selected() && self.is_valid()
    }
}

impl Codec for SpdmBaseHashAlgo {
    fn encode(&self, bytes: &mut Writer) -> Result<usize, codec::EncodeErr> {
        self.bits().encode(bytes)
    }

    fn read(r: &mut Reader) -> Option<SpdmBaseHashAlgo> {
        let bits = u32::read(r)?;

        SpdmBaseHashAlgo::from_bits(bits & SpdmBaseHashAlgo::VALID_MASK.bits)
    }
}

bitflags! {
    #[derive(Default)]
    pub struct SpdmDheAlgo: u16 {
        const FFDHE_2048 = 0b0000_0001;
        const FFDHE_3072 = 0b0000_0010;
        const FFDHE_4096 = 0b0000_0100;
        const SECP_256_R1 = 0b0000_1000;
        const SECP_384_R1 = 0b0001_0000;
        const SECP_521_R1 = 0b0010_0000;
        const SM2_P256 = 0b0100_0000;
        const VALID_MASK = Self::FFDHE_2048.bits
            | Self::FFDHE_3072.bits
            | Self::FFDHE_4096.bits
            | Self::SECP_256_R1.bits
            | Self::SECP_384_R1.bits
            | Self::SECP_521_R1.bits
            | Self::SM2_P256.bits;
    }
}

impl SpdmDheAlgo {
    /// Public key size in bytes, which also bounds the shared secret.
    /// 0 unless exactly one known group is set.
    pub fn get_size(&self) -> u16 {
        match *self {
            SpdmDheAlgo::FFDHE_2048 => FFDHE_2048_KEY_SIZE as u16,
            SpdmDheAlgo::FFDHE_3072 => FFDHE_3072_KEY_SIZE as u16,
            SpdmDheAlgo::FFDHE_4096 => FFDHE_4096_KEY_SIZE as u16,
            SpdmDheAlgo::SECP_256_R1 => SECP_256_R1_KEY_SIZE as u16,
            SpdmDheAlgo::SECP_384_R1 => SECP_384_R1_KEY_SIZE as u16,
            SpdmDheAlgo::SECP_521_R1 => SECP_521_R1_KEY_SIZE as u16,
            SpdmDheAlgo::SM2_P256 => SM2_P256_KEY_SIZE as u16,
            _ => 0,
        }
    }

    /// return true if no more than one is selected
    /// return false if two or more is selected
    pub fn is_no_more_than_one_selected(&self) -> bool {
        self.bits() == 0 || self.bits() & (self.bits() - 1) == 0
    }

    pub fn is_valid(&self) -> bool {
        (self.bits & Self::VALID_MASK.bits) != 0
    }

    pub fn is_valid_one_select(&self) -> bool {
        self.is_no_more_than_one_selected() && self.is_valid()
    }
}

impl Codec for SpdmDheAlgo {
    fn encode(&self, bytes: &mut Writer) -> Result<usize, codec::EncodeErr> {
        self.bits().encode(bytes)
    }

    fn read(r: &mut Reader) -> Option<SpdmDheAlgo> {
        let bits = u16::read(r)?;

        SpdmDheAlgo::from_bits(bits & SpdmDheAlgo::VALID_MASK.bits)
    }
}

bitflags! {
    #[derive(Default)]
    pub struct SpdmAeadAlgo: u16 {
        const AES_128_GCM = 0b0000_0001;
        const AES_256_GCM = 0b0000_0010;
        const CHACHA20_POLY1305 = 0b0000_0100;
        const SM4_GCM = 0b0000_1000;
        const VALID_MASK = Self::AES_128_GCM.bits
            | Self::AES_256_GCM.bits
            | Self::CHACHA20_POLY1305.bits
            | Self::SM4_GCM.bits;
    }
}

impl SpdmAeadAlgo {
    pub fn get_key_size(&self) -> u16 {
        match *self {
            SpdmAeadAlgo::AES_128_GCM => AEAD_AES_128_GCM_KEY_SIZE as u16,
            SpdmAeadAlgo::AES_256_GCM => AEAD_AES_256_GCM_KEY_SIZE as u16,
            SpdmAeadAlgo::CHACHA20_POLY1305 => AEAD_CHACHA20_POLY1305_KEY_SIZE as u16,
            SpdmAeadAlgo::SM4_GCM => AEAD_SM4_GCM_KEY_SIZE as u16,
            _ => 0,
        }
    }
    pub fn get_iv_size(&self) -> u16 {
        match *self {
            SpdmAeadAlgo::AES_128_GCM => AEAD_AES_128_GCM_IV_SIZE as u16,
            SpdmAeadAlgo::AES_256_GCM => AEAD_AES_256_GCM_IV_SIZE as u16,
            SpdmAeadAlgo::CHACHA20_POLY1305 => AEAD_CHACHA20_POLY1305_IV_SIZE as u16,
            SpdmAeadAlgo::SM4_GCM => AEAD_SM4_GCM_IV_SIZE as u16,
            _ => 0,
        }
    }
    pub fn get_tag_size(&self) -> u16 {
        match *self {
            SpdmAeadAlgo::AES_128_GCM => AEAD_AES_128_GCM_TAG_SIZE as u16,
            SpdmAeadAlgo::AES_256_GCM => AEAD_AES_256_GCM_TAG_SIZE as u16,
            SpdmAeadAlgo::CHACHA20_POLY1305 => AEAD_CHACHA20_POLY1305_TAG_SIZE as u16,
            SpdmAeadAlgo::SM4_GCM => AEAD_SM4_GCM_TAG_SIZE as u16,
            _ => 0,
        }
    }

    /// return true if no more than one is selected
    /// return false if two or more is selected
    pub fn is_no_more_than_one_selected(&self) -> bool {
        self.bits() == 0 || self.bits() & (self.bits() - 1) == 0
    }

    pub fn is_valid(&self) -> bool {
        (self.bits & Self::VALID_MASK.bits) != 0
    }

    pub fn is_valid_one_select(&self) -> bool {
        self.is_no_more_than_one_selected() && self.is_valid()
    }
}

impl Codec for SpdmAeadAlgo {
    fn encode(&self, bytes: &mut Writer) -> Result<usize, codec::EncodeErr> {
        self.bits().encode(bytes)
    }

    fn read(r: &mut Reader) -> Option<SpdmAeadAlgo> {
        let bits = u16::read(r)?;

        SpdmAeadAlgo::from_bits(bits & SpdmAeadAlgo::VALID_MASK.bits)
    }
}

bitflags! {
    #[derive(Default)]
    pub struct SpdmKeyScheduleAlgo: u16 {
        const SPDM_KEY_SCHEDULE = 0b0000_0001;
        const VALID_MASK = Self::SPDM_KEY_SCHEDULE.bits;
    }
}

impl SpdmKeyScheduleAlgo {
    /// return true if no more than one is selected
    /// return false if two or more is selected
    pub fn is_no_more_than_one_selected(&self) -> bool {
        self.bits() == 0 || self.bits() & (self.bits() - 1) == 0
    }

    pub fn is_valid(&self) -> bool {
        (self.bits & Self::VALID_MASK.bits) != 0
    }

    pub fn is_valid_one_select(&self) -> bool {
        self.is_no_more_than_one_selected() && self.is_valid()
    }
}

impl Codec for SpdmKeyScheduleAlgo {
    fn encode(&self, bytes: &mut Writer) -> Result<usize, codec::EncodeErr> {
        self.bits().encode(bytes)
    }

    fn read(r: &mut Reader) -> Option<SpdmKeyScheduleAlgo> {
        let bits = u16::read(r)?;

        SpdmKeyScheduleAlgo::from_bits(bits & SpdmKeyScheduleAlgo::VALID_MASK.bits)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpdmPskHintStruct {
    pub data_size: u16,
    pub data: [u8; config::MAX_SPDM_PSK_HINT_SIZE],
}
impl Default for SpdmPskHintStruct {
    fn default() -> SpdmPskHintStruct {
        SpdmPskHintStruct {
            data_size: 0,
            data: [0u8; config::MAX_SPDM_PSK_HINT_SIZE],
        }
    }
}
impl AsRef<[u8]> for SpdmPskHintStruct {
    fn as_ref(&self) -> &[u8] {
        &self.data[0..(self.data_size as usize)]
    }
}
impl SpdmPskHintStruct {
    /// None if `value` does not fit.
    pub fn from_slice(value: &[u8]) -> Option<Self> {
        if value.len() > config::MAX_SPDM_PSK_HINT_SIZE {
            return None;
        }
        let mut hint = SpdmPskHintStruct {
            data_size: value.len() as u16,
            ..Default::default()
        };
        hint.data[..value.len()].copy_from_slice(value);
        Some(hint)
    }
}

// Secret byte buffers: fixed capacity, used length, wiped on drop.
// Debug never prints the bytes.
macro_rules! create_sensitive_datatype {
    (Name: $name:ident, Size: $size:expr) => {
        /// Equality compares the used bytes with a plain slice comparison.
        /// It is not constant time; do not use it to check secrets.
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct $name {
            pub data_size: u16,
            pub data: [u8; $size],
        }

        impl Default for $name {
            fn default() -> $name {
                $name {
                    data_size: 0,
                    data: [0u8; $size],
                }
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.data[0..(self.data_size as usize)]
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_ref() == other.as_ref()
            }
        }

        impl Eq for $name {}

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("data_size", &self.data_size)
                    .finish_non_exhaustive()
            }
        }

        impl $name {
            /// None if `value` is larger than the capacity.
            pub fn from_slice(value: &[u8]) -> Option<Self> {
                if value.len() > $size {
                    return None;
                }
                let mut s = $name::default();
                s.data[..value.len()].copy_from_slice(value);
                s.data_size = value.len() as u16;
                Some(s)
            }

            pub fn is_empty(&self) -> bool {
                self.data_size == 0
            }

            /// true if every byte of the backing storage is zero.
            pub fn is_zeroed(&self) -> bool {
                self.data_size == 0 && self.data.iter().all(|b| *b == 0)
            }
        }
    };
}

create_sensitive_datatype!(Name: SpdmDheFinalKeyStruct, Size: SPDM_MAX_DHE_KEY_SIZE);
create_sensitive_datatype!(Name: SpdmHandshakeSecretStruct, Size: SPDM_MAX_HASH_SIZE);
create_sensitive_datatype!(
    Name: SpdmDirectionHandshakeSecretStruct,
    Size: SPDM_MAX_HASH_SIZE
);
create_sensitive_datatype!(Name: SpdmFinishedKeyStruct, Size: SPDM_MAX_HASH_SIZE);
create_sensitive_datatype!(Name: SpdmMasterSecretStruct, Size: SPDM_MAX_HASH_SIZE);
create_sensitive_datatype!(
    Name: SpdmDirectionDataSecretStruct,
    Size: SPDM_MAX_HASH_SIZE
);
create_sensitive_datatype!(Name: SpdmAeadKeyStruct, Size: SPDM_MAX_AEAD_KEY_SIZE);
create_sensitive_datatype!(Name: SpdmAeadIvStruct, Size: SPDM_MAX_AEAD_IV_SIZE);
create_sensitive_datatype!(Name: SpdmExportMasterSecretStruct, Size: SPDM_MAX_HASH_SIZE);
