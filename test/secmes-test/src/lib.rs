// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

#![forbid(unsafe_code)]

pub mod common;

#[cfg(test)]
mod test_session_lifecycle;
#[cfg(test)]
mod test_session_keys;
