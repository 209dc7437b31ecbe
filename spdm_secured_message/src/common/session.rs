// Copyright (c) 2020 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

use super::session_keys::{
    get_session_keys_size, SpdmSessionKeysStruct, SPDM_SECURE_SESSION_KEYS_STRUCT_VERSION,
};
use crate::config;
use crate::error::{
    SpdmResult, SPDM_STATUS_BUFFER_TOO_SMALL, SPDM_STATUS_INVALID_MSG_FIELD,
    SPDM_STATUS_INVALID_MSG_SIZE, SPDM_STATUS_INVALID_PARAMETER, SPDM_STATUS_INVALID_STATE_LOCAL,
    SPDM_STATUS_SEQUENCE_NUMBER_OVERFLOW,
};
use crate::message::SpdmErrorStruct;
use crate::protocol::*;

use codec::enum_builder;
use codec::{Codec, Writer};
use zeroize::{Zeroize, ZeroizeOnDrop};

enum_builder! {
    @U8
    EnumName: SpdmSessionState;
    EnumVal{
        // Before send KEY_EXCHANGE/PSK_EXCHANGE
        // or after END_SESSION
        SpdmSessionNotStarted => 0x0,
        // After send KEY_EXHCNAGE, before send FINISH
        SpdmSessionHandshaking => 0x1,
        // After send FINISH, before END_SESSION
        SpdmSessionEstablished => 0x2
    }
}
impl Default for SpdmSessionState {
    fn default() -> SpdmSessionState {
        SpdmSessionState::SpdmSessionNotStarted
    }
}

enum_builder! {
    @U8
    EnumName: SpdmSessionType;
    EnumVal{
        SpdmSessionTypeNone => 0x0,
        SpdmSessionTypeMacOnly => 0x1,
        SpdmSessionTypeEncMac => 0x2
    }
}
impl Default for SpdmSessionType {
    fn default() -> SpdmSessionType {
        SpdmSessionType::SpdmSessionTypeNone
    }
}

enum_builder! {
    @U8
    EnumName: SpdmSequenceNumberEndian;
    EnumVal{
        SpdmSeqNumEncLittleDecLittle => 0x0,
        SpdmSeqNumEncBigDecBig => 0x1,
        SpdmSeqNumEncLittleDecBoth => 0x2,
        SpdmSeqNumEncBigDecBoth => 0x3
    }
}
impl Default for SpdmSequenceNumberEndian {
    fn default() -> SpdmSequenceNumberEndian {
        SpdmSequenceNumberEndian::SpdmSeqNumEncLittleDecLittle
    }
}

impl SpdmSequenceNumberEndian {
    fn encode_big(&self) -> bool {
        matches!(
            self,
            SpdmSequenceNumberEndian::SpdmSeqNumEncBigDecBig
                | SpdmSequenceNumberEndian::SpdmSeqNumEncBigDecBoth
        )
    }

    fn decode_both(&self) -> bool {
        matches!(
            self,
            SpdmSequenceNumberEndian::SpdmSeqNumEncLittleDecBoth
                | SpdmSequenceNumberEndian::SpdmSeqNumEncBigDecBoth
        )
    }

    /// Write the leading `out.len()` bytes (at most 8) of the sequence
    /// number in the encode endian. Returns the number of bytes written.
    pub fn encode_sequence_number(&self, sequence_number: u64, out: &mut [u8]) -> usize {
        let bytes = if self.encode_big() {
            sequence_number.to_be_bytes()
        } else {
            sequence_number.to_le_bytes()
        };
        let len = out.len().min(bytes.len());
        out[..len].copy_from_slice(&bytes[..len]);
        len
    }

    /// true if `wire` is an acceptable encoding of `sequence_number` for
    /// the receiver.
    pub fn accepts(&self, wire: &[u8], sequence_number: u64) -> bool {
        if wire.len() > 8 {
            return false;
        }
        let le = sequence_number.to_le_bytes();
        let be = sequence_number.to_be_bytes();
        let (primary, other) = if self.encode_big() {
            (&be, &le)
        } else {
            (&le, &be)
        };
        if wire == &primary[..wire.len()] {
            return true;
        }
        self.decode_both() && wire == &other[..wire.len()]
    }
}

/// Which way the keys protect traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpdmKeyDirection {
    Request,
    Response,
}

/// How the session shared secret was established.
///
/// DHE sessions carry a DHE secret; PSK sessions never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpdmKeyExchangeMode {
    Dhe,
    Psk,
}

impl Default for SpdmKeyExchangeMode {
    fn default() -> Self {
        SpdmKeyExchangeMode::Dhe
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpdmSessionCryptoParam {
    pub base_hash_algo: SpdmBaseHashAlgo,
    pub dhe_algo: SpdmDheAlgo,
    pub aead_algo: SpdmAeadAlgo,
    pub key_schedule_algo: SpdmKeyScheduleAlgo,
}

/// Sizes derived from [`SpdmSessionCryptoParam`]. Only produced by
/// [`SpdmSessionAlgoSize::from_crypto_param`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpdmSessionAlgoSize {
    pub hash_size: u16,
    pub dhe_key_size: u16,
    pub aead_key_size: u16,
    pub aead_iv_size: u16,
    pub aead_tag_size: u16,
}

impl SpdmSessionAlgoSize {
    pub fn from_crypto_param(crypto_param: &SpdmSessionCryptoParam) -> Self {
        SpdmSessionAlgoSize {
            hash_size: crypto_param.base_hash_algo.get_size(),
            dhe_key_size: crypto_param.dhe_algo.get_size(),
            aead_key_size: crypto_param.aead_algo.get_key_size(),
            aead_iv_size: crypto_param.aead_algo.get_iv_size(),
            aead_tag_size: crypto_param.aead_algo.get_tag_size(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SpdmSessionMasterSecret {
    pub dhe_secret: SpdmDheFinalKeyStruct,
    pub handshake_secret: SpdmHandshakeSecretStruct,
    pub master_secret: SpdmMasterSecretStruct,
}

impl SpdmSessionMasterSecret {
    pub fn is_zeroed(&self) -> bool {
        self.dhe_secret.is_zeroed()
            && self.handshake_secret.is_zeroed()
            && self.master_secret.is_zeroed()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SpdmSessionSecretParam {
    pub encryption_key: SpdmAeadKeyStruct,
    pub salt: SpdmAeadIvStruct,
    pub sequence_number: u64,
}

impl SpdmSessionSecretParam {
    pub fn is_zeroed(&self) -> bool {
        self.encryption_key.is_zeroed() && self.salt.is_zeroed() && self.sequence_number == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SpdmSessionHandshakeSecret {
    pub request_handshake_secret: SpdmDirectionHandshakeSecretStruct,
    pub response_handshake_secret: SpdmDirectionHandshakeSecretStruct,
    pub request_finished_key: SpdmFinishedKeyStruct,
    pub response_finished_key: SpdmFinishedKeyStruct,
    pub request_direction: SpdmSessionSecretParam,
    pub response_direction: SpdmSessionSecretParam,
}

impl SpdmSessionHandshakeSecret {
    pub fn is_zeroed(&self) -> bool {
        self.request_handshake_secret.is_zeroed()
            && self.response_handshake_secret.is_zeroed()
            && self.request_finished_key.is_zeroed()
            && self.response_finished_key.is_zeroed()
            && self.request_direction.is_zeroed()
            && self.response_direction.is_zeroed()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SpdmSessionApplicationSecret {
    pub request_data_secret: SpdmDirectionDataSecretStruct,
    pub response_data_secret: SpdmDirectionDataSecretStruct,
    pub request_direction: SpdmSessionSecretParam,
    pub response_direction: SpdmSessionSecretParam,
}

impl SpdmSessionApplicationSecret {
    pub fn is_zeroed(&self) -> bool {
        self.request_data_secret.is_zeroed()
            && self.response_data_secret.is_zeroed()
            && self.request_direction.is_zeroed()
            && self.response_direction.is_zeroed()
    }
}

/// Size in bytes of [`SpdmSecuredMessageContext`], for session managers
/// that reserve context storage up front.
pub fn get_context_size() -> usize {
    core::mem::size_of::<SpdmSecuredMessageContext>()
}

/// Per-session secured message state.
///
/// The owner (a session manager) serializes all access; every mutator
/// takes `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct SpdmSecuredMessageContext {
    session_type: SpdmSessionType,
    key_exchange_mode: SpdmKeyExchangeMode,
    session_state: SpdmSessionState,
    version: SpdmVersion,
    secured_message_version: SecuredMessageVersion,
    crypto_param: SpdmSessionCryptoParam,
    algo_size: SpdmSessionAlgoSize,
    psk_hint: SpdmPskHintStruct,
    master_secret: SpdmSessionMasterSecret,
    handshake_secret: SpdmSessionHandshakeSecret,
    application_secret: SpdmSessionApplicationSecret,
    export_master_secret: SpdmExportMasterSecretStruct,
    max_spdm_session_sequence_number: u64,
    sequence_number_endian: SpdmSequenceNumberEndian,
    last_spdm_error: SpdmErrorStruct,
}

impl SpdmSecuredMessageContext {
    /// An all-zero context.
    pub fn new() -> Self {
        SpdmSecuredMessageContext::default()
    }

    /// An all-zero context whose sequence number ceiling is the
    /// configured default, as a session manager provisions it.
    pub fn with_default_sequence_limit() -> Self {
        let mut context = SpdmSecuredMessageContext::new();
        context.max_spdm_session_sequence_number =
            config::DEFAULT_MAX_SPDM_SESSION_SEQUENCE_NUMBER;
        context
    }

    /// Wipe every secret and reset every field to its zero value.
    pub fn init(&mut self) {
        self.clear_handshake_secret();
        self.clear_master_secret();
        self.application_secret.zeroize();
        self.export_master_secret.zeroize();
        *self = SpdmSecuredMessageContext::new();
    }

    pub fn set_use_psk(&mut self, use_psk: bool) {
        self.key_exchange_mode = if use_psk {
            SpdmKeyExchangeMode::Psk
        } else {
            SpdmKeyExchangeMode::Dhe
        };
    }

    pub fn get_use_psk(&self) -> bool {
        self.key_exchange_mode == SpdmKeyExchangeMode::Psk
    }

    pub fn get_key_exchange_mode(&self) -> SpdmKeyExchangeMode {
        self.key_exchange_mode
    }

    pub fn set_session_type(&mut self, session_type: SpdmSessionType) {
        self.session_type = session_type;
    }

    pub fn get_session_type(&self) -> SpdmSessionType {
        self.session_type
    }

    /// Record the negotiated algorithms and recompute every derived size.
    ///
    /// The hash and AEAD selections must name exactly one algorithm. The
    /// DHE selection may be empty (PSK sessions) but not ambiguous. On
    /// error nothing is changed.
    pub fn set_algorithms(
        &mut self,
        version: SpdmVersion,
        secured_message_version: SecuredMessageVersion,
        base_hash_algo: SpdmBaseHashAlgo,
        dhe_algo: SpdmDheAlgo,
        aead_algo: SpdmAeadAlgo,
        key_schedule_algo: SpdmKeyScheduleAlgo,
    ) -> SpdmResult {
        if !base_hash_algo.is_valid_one_select()
            || !aead_algo.is_valid_one_select()
            || !dhe_algo.is_no_more_than_one_selected()
            || !key_schedule_algo.is_no_more_than_one_selected()
        {
            error!(
                "invalid algorithm selection: hash {:?} dhe {:?} aead {:?} key_schedule {:?}\n",
                base_hash_algo, dhe_algo, aead_algo, key_schedule_algo
            );
            return Err(SPDM_STATUS_INVALID_PARAMETER);
        }

        let crypto_param = SpdmSessionCryptoParam {
            base_hash_algo,
            dhe_algo,
            aead_algo,
            key_schedule_algo,
        };
        self.algo_size = SpdmSessionAlgoSize::from_crypto_param(&crypto_param);
        self.crypto_param = crypto_param;
        self.version = version;
        self.secured_message_version = secured_message_version;

        debug!(
            "session algorithms set: {:?}, sizes {:?}\n",
            self.crypto_param, self.algo_size
        );
        Ok(())
    }

    pub fn get_version(&self) -> SpdmVersion {
        self.version
    }

    pub fn get_secured_message_version(&self) -> SecuredMessageVersion {
        self.secured_message_version
    }

    pub fn get_crypto_param(&self) -> SpdmSessionCryptoParam {
        self.crypto_param.clone()
    }

    pub fn get_algo_size(&self) -> SpdmSessionAlgoSize {
        self.algo_size
    }

    pub fn get_hash_size(&self) -> usize {
        self.algo_size.hash_size as usize
    }

    pub fn get_dhe_key_size(&self) -> usize {
        self.algo_size.dhe_key_size as usize
    }

    pub fn get_aead_key_size(&self) -> usize {
        self.algo_size.aead_key_size as usize
    }

    pub fn get_aead_iv_size(&self) -> usize {
        self.algo_size.aead_iv_size as usize
    }

    pub fn get_aead_tag_size(&self) -> usize {
        self.algo_size.aead_tag_size as usize
    }

    /// Rejects hints longer than `config::MAX_SPDM_PSK_HINT_SIZE`; the
    /// previous hint is kept.
    pub fn set_psk_hint(&mut self, psk_hint: &[u8]) -> SpdmResult {
        match SpdmPskHintStruct::from_slice(psk_hint) {
            Some(hint) => {
                self.psk_hint = hint;
                Ok(())
            }
            None => {
                error!(
                    "psk_hint too long: {} > {}\n",
                    psk_hint.len(),
                    config::MAX_SPDM_PSK_HINT_SIZE
                );
                Err(SPDM_STATUS_INVALID_PARAMETER)
            }
        }
    }

    pub fn get_psk_hint(&self) -> Option<&[u8]> {
        if self.psk_hint.data_size == 0 {
            None
        } else {
            Some(self.psk_hint.as_ref())
        }
    }

    pub fn set_max_spdm_session_sequence_number(&mut self, max_spdm_session_sequence_number: u64) {
        self.max_spdm_session_sequence_number = max_spdm_session_sequence_number;
    }

    pub fn get_max_spdm_session_sequence_number(&self) -> u64 {
        self.max_spdm_session_sequence_number
    }

    pub fn set_sequence_number_endian(&mut self, sequence_number_endian: SpdmSequenceNumberEndian) {
        self.sequence_number_endian = sequence_number_endian;
    }

    pub fn get_sequence_number_endian(&self) -> SpdmSequenceNumberEndian {
        self.sequence_number_endian
    }

    /// Entering `SpdmSessionEstablished` wipes the handshake secrets and
    /// the master secret group. Transition order is not checked.
    pub fn set_session_state(&mut self, session_state: SpdmSessionState) {
        debug!(
            "session state {:?} -> {:?}\n",
            self.session_state, session_state
        );
        self.session_state = session_state;
        if session_state == SpdmSessionState::SpdmSessionEstablished {
            self.clear_handshake_secret();
            self.clear_master_secret();
        }
    }

    pub fn get_session_state(&self) -> SpdmSessionState {
        self.session_state
    }

    pub fn clear_handshake_secret(&mut self) {
        debug!("clear handshake secret\n");
        self.handshake_secret.zeroize();
    }

    pub fn clear_master_secret(&mut self) {
        debug!("clear master secret\n");
        self.master_secret.zeroize();
    }

    /// Store the DHE shared secret.
    ///
    /// The secret may be shorter than the group's key size but never
    /// longer. Not allowed on PSK sessions.
    pub fn import_dhe_secret(&mut self, dhe_secret: &[u8]) -> SpdmResult {
        if self.key_exchange_mode == SpdmKeyExchangeMode::Psk {
            error!("dhe secret import on a psk session\n");
            return Err(SPDM_STATUS_INVALID_STATE_LOCAL);
        }
        if dhe_secret.len() > self.get_dhe_key_size() {
            error!(
                "dhe secret too long: {} > {}\n",
                dhe_secret.len(),
                self.get_dhe_key_size()
            );
            return Err(SPDM_STATUS_INVALID_PARAMETER);
        }
        self.master_secret.dhe_secret =
            SpdmDheFinalKeyStruct::from_slice(dhe_secret).ok_or(SPDM_STATUS_INVALID_PARAMETER)?;
        Ok(())
    }

    pub fn get_master_secret(&self) -> &SpdmSessionMasterSecret {
        &self.master_secret
    }

    /// Install the key schedule's handshake secret and master secret.
    /// Both must fit in the negotiated hash size.
    pub fn set_derived_master_secret(
        &mut self,
        handshake_secret: SpdmHandshakeSecretStruct,
        master_secret: SpdmMasterSecretStruct,
    ) -> SpdmResult {
        let hash_size = self.get_hash_size();
        if handshake_secret.as_ref().len() > hash_size || master_secret.as_ref().len() > hash_size
        {
            return Err(SPDM_STATUS_INVALID_PARAMETER);
        }
        self.master_secret.handshake_secret = handshake_secret;
        self.master_secret.master_secret = master_secret;
        Ok(())
    }

    pub fn get_handshake_secret(&self) -> &SpdmSessionHandshakeSecret {
        &self.handshake_secret
    }

    pub fn set_handshake_secret(&mut self, handshake_secret: SpdmSessionHandshakeSecret) -> SpdmResult {
        let hash_size = self.get_hash_size();
        if handshake_secret.request_handshake_secret.as_ref().len() > hash_size
            || handshake_secret.response_handshake_secret.as_ref().len() > hash_size
            || handshake_secret.request_finished_key.as_ref().len() > hash_size
            || handshake_secret.response_finished_key.as_ref().len() > hash_size
        {
            return Err(SPDM_STATUS_INVALID_PARAMETER);
        }
        self.check_secret_param(&handshake_secret.request_direction)?;
        self.check_secret_param(&handshake_secret.response_direction)?;
        self.handshake_secret = handshake_secret;
        Ok(())
    }

    pub fn get_application_secret(&self) -> &SpdmSessionApplicationSecret {
        &self.application_secret
    }

    pub fn set_application_secret(
        &mut self,
        application_secret: SpdmSessionApplicationSecret,
    ) -> SpdmResult {
        let hash_size = self.get_hash_size();
        if application_secret.request_data_secret.as_ref().len() > hash_size
            || application_secret.response_data_secret.as_ref().len() > hash_size
        {
            return Err(SPDM_STATUS_INVALID_PARAMETER);
        }
        self.check_secret_param(&application_secret.request_direction)?;
        self.check_secret_param(&application_secret.response_direction)?;
        self.application_secret = application_secret;
        Ok(())
    }

    // key and salt must match the negotiated AEAD exactly
    fn check_secret_param(&self, secret_param: &SpdmSessionSecretParam) -> SpdmResult {
        if secret_param.encryption_key.as_ref().len() != self.get_aead_key_size()
            || secret_param.salt.as_ref().len() != self.get_aead_iv_size()
        {
            return Err(SPDM_STATUS_INVALID_PARAMETER);
        }
        Ok(())
    }

    /// The export master secret may not exceed the negotiated hash size.
    pub fn set_export_master_secret(&mut self, export_master_secret: &[u8]) -> SpdmResult {
        if export_master_secret.len() > self.get_hash_size() {
            return Err(SPDM_STATUS_INVALID_PARAMETER);
        }
        self.export_master_secret = SpdmExportMasterSecretStruct::from_slice(export_master_secret)
            .ok_or(SPDM_STATUS_INVALID_PARAMETER)?;
        Ok(())
    }

    /// Copy the export master secret (hash size bytes) into
    /// `export_master_secret`.
    ///
    /// The usable capacity is `min(export_master_secret.len(),
    /// *export_master_secret_size)`. A short buffer is an error and
    /// `*export_master_secret_size` receives the required size; nothing is
    /// ever truncated.
    pub fn export_master_secret(
        &self,
        export_master_secret: &mut [u8],
        export_master_secret_size: &mut usize,
    ) -> SpdmResult {
        let hash_size = self.get_hash_size();
        let capacity = export_master_secret.len().min(*export_master_secret_size);
        if capacity < hash_size {
            *export_master_secret_size = hash_size;
            return Err(SPDM_STATUS_BUFFER_TOO_SMALL);
        }
        export_master_secret[..hash_size]
            .copy_from_slice(&self.export_master_secret.data[..hash_size]);
        *export_master_secret_size = hash_size;
        Ok(())
    }

    pub fn clear_export_master_secret(&mut self) {
        self.export_master_secret.zeroize();
    }

    pub fn is_export_master_secret_cleared(&self) -> bool {
        self.export_master_secret.is_zeroed()
    }

    /// Size of the blob [`Self::export_session_keys`] produces for the
    /// negotiated AEAD.
    pub fn get_session_keys_size(&self) -> usize {
        get_session_keys_size(self.get_aead_key_size(), self.get_aead_iv_size())
    }

    /// Serialize the application keys for session resumption.
    ///
    /// Keys and salts are written at the negotiated AEAD sizes. Unset or
    /// shorter ones come out zero padded.
    ///
    /// The usable capacity is `min(session_keys.len(), *session_keys_size)`.
    /// If it is too small, `*session_keys_size` receives the required size
    /// and `SPDM_STATUS_BUFFER_TOO_SMALL` is returned, so callers can query
    /// with a zero size first.
    pub fn export_session_keys(
        &self,
        session_keys: &mut [u8],
        session_keys_size: &mut usize,
    ) -> SpdmResult {
        let required = self.get_session_keys_size();
        let capacity = session_keys.len().min(*session_keys_size);
        if capacity < required {
            *session_keys_size = required;
            return Err(SPDM_STATUS_BUFFER_TOO_SMALL);
        }

        let keys = SpdmSessionKeysStruct {
            version: SPDM_SECURE_SESSION_KEYS_STRUCT_VERSION,
            aead_key_size: self.get_aead_key_size() as u32,
            aead_iv_size: self.get_aead_iv_size() as u32,
            request_direction: self.application_secret.request_direction.clone(),
            response_direction: self.application_secret.response_direction.clone(),
        };
        let mut writer = Writer::init(&mut session_keys[..required]);
        let used = keys
            .encode(&mut writer)
            .map_err(|_| SPDM_STATUS_INVALID_PARAMETER)?;
        if used != required {
            return Err(SPDM_STATUS_INVALID_PARAMETER);
        }
        *session_keys_size = used;
        Ok(())
    }

    /// Install application keys produced by [`Self::export_session_keys`].
    ///
    /// The blob must be exactly [`Self::get_session_keys_size`] long and
    /// carry the current struct version and this context's AEAD sizes.
    /// Either all six fields are installed or none.
    pub fn import_session_keys(&mut self, session_keys: &[u8]) -> SpdmResult {
        let required = self.get_session_keys_size();
        if session_keys.len() != required {
            error!(
                "session keys size mismatch: {} != {}\n",
                session_keys.len(),
                required
            );
            return Err(SPDM_STATUS_INVALID_MSG_SIZE);
        }

        let (version, aead_key_size, aead_iv_size) =
            SpdmSessionKeysStruct::read_header(session_keys).ok_or(SPDM_STATUS_INVALID_MSG_SIZE)?;
        if version != SPDM_SECURE_SESSION_KEYS_STRUCT_VERSION
            || aead_key_size as usize != self.get_aead_key_size()
            || aead_iv_size as usize != self.get_aead_iv_size()
        {
            error!(
                "session keys header mismatch: version {} key {} iv {}\n",
                version, aead_key_size, aead_iv_size
            );
            return Err(SPDM_STATUS_INVALID_MSG_FIELD);
        }

        let mut keys =
            SpdmSessionKeysStruct::read_bytes(session_keys).ok_or(SPDM_STATUS_INVALID_MSG_FIELD)?;
        self.application_secret.request_direction = core::mem::take(&mut keys.request_direction);
        self.application_secret.response_direction = core::mem::take(&mut keys.response_direction);
        Ok(())
    }

    pub fn get_request_data_sequence_number(&self) -> u64 {
        self.application_secret.request_direction.sequence_number
    }

    pub fn get_response_data_sequence_number(&self) -> u64 {
        self.application_secret.response_direction.sequence_number
    }

    /// Hand out the current application sequence number of `direction`
    /// and advance it. Fails once the ceiling is reached.
    pub fn next_sequence_number(&mut self, direction: SpdmKeyDirection) -> SpdmResult<u64> {
        let max = self.max_spdm_session_sequence_number;
        let secret_param = match direction {
            SpdmKeyDirection::Request => &mut self.application_secret.request_direction,
            SpdmKeyDirection::Response => &mut self.application_secret.response_direction,
        };
        let sequence_number = secret_param.sequence_number;
        if sequence_number >= max || sequence_number == u64::MAX {
            error!("{:?} sequence number exhausted\n", direction);
            return Err(SPDM_STATUS_SEQUENCE_NUMBER_OVERFLOW);
        }
        secret_param.sequence_number = sequence_number + 1;
        Ok(sequence_number)
    }

    pub fn get_last_spdm_error(&self) -> SpdmErrorStruct {
        self.last_spdm_error
    }

    pub fn set_last_spdm_error(&mut self, last_spdm_error: &SpdmErrorStruct) {
        self.last_spdm_error = *last_spdm_error;
    }
}
