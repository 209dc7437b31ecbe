// Copyright (c) 2020 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

mod algo;
mod version;
pub use algo::*;
pub use version::*;
