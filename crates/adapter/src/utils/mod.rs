// Copyright (C) 2026 Tron Adapter Developers
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod format;

pub use format::{
    format_amount, hex_with_prefix, null_as_empty, parse_hex_u256, parse_quantity, quantity,
    strip_hex_prefix,
};
