// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use anyhow::anyhow;

use crate::denom::NATIVE_TERRA_DECIMALS;

/// Formats an integer amount of base units as a decimal string.
///
/// Amounts of any size are accepted. The fraction is trimmed of trailing zeros
/// but always keeps one digit, so `1000000` at 6 decimals is `1.0` and `1` is
/// `0.000001`.
pub fn format_units(value: &str, decimals: u32) -> anyhow::Result<String> {
    let value = value.trim();
    let (sign, digits) = match value.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", value),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(anyhow!("invalid integer amount '{}'", value));
    }

    let decimals = decimals as usize;
    let padded = format!(
        "{:0>width$}",
        digits.trim_start_matches('0'),
        width = decimals + 1
    );
    let (whole, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = match fraction.trim_end_matches('0') {
        "" => "0",
        fraction => fraction,
    };
    // No negative zero.
    let sign = if whole == "0" && fraction == "0" { "" } else { sign };
    Ok(format!("{}{}.{}", sign, whole, fraction))
}

/// Formats a native Terra balance (in micro units) for display.
pub fn format_native_balance(balance: &str) -> anyhow::Result<String> {
    format_units(balance, NATIVE_TERRA_DECIMALS)
}
