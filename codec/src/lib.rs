// Copyright (c) 2020 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

#![forbid(unsafe_code)]
#![no_std]

pub mod codec;
pub use crate::codec::*;

#[allow(unused_macros)]
#[macro_use]
pub mod macros;
