// Copyright (c) 2021 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

include!(concat!(env!("OUT_DIR"), "/config.rs"));
