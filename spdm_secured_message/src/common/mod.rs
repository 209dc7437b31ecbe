// Copyright (c) 2020 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

pub mod session;
pub mod session_keys;

pub use session::*;
pub use session_keys::*;
