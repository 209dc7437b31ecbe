// Copyright (c) 2020 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Secured message session context for SPDM.
//!
//! One [`common::session::SpdmSecuredMessageContext`] exists per SPDM
//! session. It records the negotiated algorithms and their derived sizes,
//! drives the secret lifecycle as the session state advances, and
//! exports/imports the application keys for session resumption.

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
extern crate log;

#[macro_use]
extern crate bitflags;

extern crate codec;

pub mod protocol;
#[macro_use]
pub mod error;
pub mod common;
pub mod message;

pub mod config;

pub use common::session::get_context_size;
