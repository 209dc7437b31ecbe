// Copyright (c) 2020 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

use codec::enum_builder;

enum_builder! {
    @U8
    EnumName: SpdmVersion;
    EnumVal{
        SpdmVersion10 => 0x10,
        SpdmVersion11 => 0x11,
        SpdmVersion12 => 0x12,
        SpdmVersion13 => 0x13
    }
}

impl Default for SpdmVersion {
    fn default() -> SpdmVersion {
        SpdmVersion::Unknown(0)
    }
}

enum_builder! {
    @U8
    EnumName: SecuredMessageVersion;
    EnumVal{
        SecuredMessageVersion10 => 0x10,
        SecuredMessageVersion11 => 0x11,
        SecuredMessageVersion12 => 0x12
    }
}

impl Default for SecuredMessageVersion {
    fn default() -> SecuredMessageVersion {
        SecuredMessageVersion::Unknown(0)
    }
}

impl SpdmVersion {
    pub fn is_known(&self) -> bool {
        !matches!(self, SpdmVersion::Unknown(_))
    }
}

impl SecuredMessageVersion {
    pub fn is_known(&self) -> bool {
        !matches!(self, SecuredMessageVersion::Unknown(_))
    }
}
