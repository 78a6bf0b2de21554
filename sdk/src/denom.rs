// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

/// Decimals of every native Terra denomination.
pub const NATIVE_TERRA_DECIMALS: u32 = 6;
/// Display symbol of `uluna` on Terra Classic.
pub const LUNA_CLASSIC_SYMBOL: &str = "LUNC";

const LUNA_DENOM: &str = "uluna";
const ICON_BASE_URL: &str = "https://assets.terra.money/icon/60";

/// Returns true for native stablecoin denominations such as `uusd` or `ukrw`.
pub fn is_native_terra(denom: &str) -> bool {
    denom.starts_with('u') && denom.chars().count() == 4
}

/// Returns true for any native denomination, including `uluna`.
pub fn is_native_denom(denom: &str) -> bool {
    is_native_terra(denom) || denom == LUNA_DENOM
}

/// Maps a native denomination to its display symbol.
///
/// `uluna` is `LUNC`; stablecoins are the first two letters of the unit followed
/// by `TC` (`uusd` is `USTC`). Anything else is an empty string.
pub fn format_native_denom(denom: &str) -> String {
    if denom == LUNA_DENOM {
        return LUNA_CLASSIC_SYMBOL.to_owned();
    }
    if !is_native_terra(denom) {
        return String::new();
    }
    let unit: String = denom.chars().skip(1).take(2).collect();
    format!("{}TC", unit.to_uppercase())
}

/// Returns the icon URL for a native token symbol.
pub fn native_icon_url(symbol: &str) -> String {
    let name = if symbol == LUNA_CLASSIC_SYMBOL {
        "Luna"
    } else {
        let mut chars = symbol.chars();
        chars.next_back();
        chars.as_str()
    };
    format!("{}/{}.png", ICON_BASE_URL, name)
}
