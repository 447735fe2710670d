use anchor_lang::prelude::*;
use thiserror::Error;

use crate::{
    constants::{MAX_DECIMALS, MAX_SYMBOL_LEN, MAX_TOTAL_TAX_PERCENT},
    state::Mechanism,
};

/// Checked errors raised while assembling a deployment payload
#[error_code]
pub enum ErrorCode {
    #[msg("Tax configuration failed validation")]
    InvalidTaxConfiguration,

    #[msg("Address must be 0x followed by 40 hex characters")]
    InvalidAddress,

    #[msg("Total supply must be a positive decimal amount")]
    InvalidTotalSupply,

    #[msg("Mechanism shares must sum to 10000 bps or be all zero")]
    InvalidShareTotal,

    #[msg("Tax rate cannot exceed 2500 bps (25%)")]
    TaxExceedsCap,

    #[msg("Taxed mechanism has no destination address")]
    MissingDestination,

    #[msg("Math overflow")]
    MathOverflow,
}

/// User-facing validation failure. Display strings are shown verbatim by the UI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Token name is required")]
    MissingName,

    #[error("Token symbol is required")]
    MissingSymbol,

    #[error("Token symbol must be {} characters or fewer", MAX_SYMBOL_LEN)]
    SymbolTooLong,

    #[error("Total supply must be a positive number")]
    InvalidTotalSupply,

    #[error("Total buy tax cannot exceed {}%", MAX_TOTAL_TAX_PERCENT)]
    BuyTaxExceedsCap,

    #[error("Total sell tax cannot exceed {}%", MAX_TOTAL_TAX_PERCENT)]
    SellTaxExceedsCap,

    #[error("Invalid {mechanism} address: {address}")]
    InvalidAddress { mechanism: Mechanism, address: String },

    #[error("Yield token address required when yield tax > 0")]
    MissingYieldToken,

    #[error("Support token address required when support tax > 0")]
    MissingSupportToken,

    #[error("{mechanism} address required when its tax share > 0")]
    MissingDestination { mechanism: Mechanism },

    #[error("{mechanism} tax share set on a row without an address")]
    UnassignedShare { mechanism: Mechanism },

    #[error("{mechanism} tax share must be a non-negative number")]
    InvalidShare { mechanism: Mechanism },

    #[error("Decimals cannot exceed {}", MAX_DECIMALS)]
    DecimalsTooLarge,

    #[error("Max wallet must be between 0 and 100%")]
    InvalidMaxWallet,

    #[error("Max transaction must be between 0 and 100%")]
    InvalidMaxTransaction,
}
