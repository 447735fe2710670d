use anchor_lang::prelude::*;

use crate::{
    constants::{ADDRESS_BYTES, ADDRESS_HEX_LEN, ADDRESS_PREFIX, BPS_PER_PERCENT},
    errors::ErrorCode,
};

/// Checks the account identifier format: "0x" followed by 40 hex characters.
/// Mixed-case checksums are accepted but not verified.
pub fn is_valid_address(address: &str) -> bool {
    address
        .strip_prefix(ADDRESS_PREFIX)
        .map(|hex| hex.len() == ADDRESS_HEX_LEN && hex.bytes().all(|b| b.is_ascii_hexdigit()))
        .unwrap_or(false)
}

/// Decodes a formatted address into its 20 raw bytes
pub fn decode_address(address: &str) -> Result<[u8; ADDRESS_BYTES]> {
    let address = address.trim();
    require!(is_valid_address(address), ErrorCode::InvalidAddress);

    let bytes = hex::decode(&address[ADDRESS_PREFIX.len()..])
        .map_err(|_| ErrorCode::InvalidAddress)?;

    bytes
        .try_into()
        .map_err(|_| ErrorCode::InvalidAddress.into())
}

/// Converts a percentage into whole basis points, rounding to nearest.
/// Negative and NaN inputs give 0; out-of-range values saturate.
pub fn percent_to_bps(percent: f64) -> u32 {
    (percent * BPS_PER_PERCENT).round() as u32
}

/// Parses a whole-token decimal amount ("1000000", "1,000,000.5") into base
/// units scaled by `decimals`. Zero, signs, exponents and excess fractional
/// digits are rejected.
pub fn parse_token_amount(amount: &str, decimals: u8) -> Result<u128> {
    let cleaned: String = amount.trim().chars().filter(|c| *c != ',' && *c != '_').collect();

    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };

    require!(
        !(whole.is_empty() && fraction.is_empty()),
        ErrorCode::InvalidTotalSupply
    );
    require!(
        whole.bytes().all(|b| b.is_ascii_digit()) && fraction.bytes().all(|b| b.is_ascii_digit()),
        ErrorCode::InvalidTotalSupply
    );
    require!(
        fraction.len() <= decimals as usize,
        ErrorCode::InvalidTotalSupply
    );

    let scale = 10u128
        .checked_pow(decimals as u32)
        .ok_or(ErrorCode::MathOverflow)?;

    let whole_units = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<u128>()
            .map_err(|_| ErrorCode::MathOverflow)?
            .checked_mul(scale)
            .ok_or(ErrorCode::MathOverflow)?
    };

    // Right-pad the fraction to `decimals` digits
    let fraction_units = if fraction.is_empty() {
        0
    } else {
        let padding = 10u128
            .checked_pow((decimals as usize - fraction.len()) as u32)
            .ok_or(ErrorCode::MathOverflow)?;
        fraction
            .parse::<u128>()
            .map_err(|_| ErrorCode::MathOverflow)?
            .checked_mul(padding)
            .ok_or(ErrorCode::MathOverflow)?
    };

    let total = whole_units
        .checked_add(fraction_units)
        .ok_or(ErrorCode::MathOverflow)?;

    require!(total > 0, ErrorCode::InvalidTotalSupply);

    Ok(total)
}
