//! Shared fixtures for tax-forge integration tests

#![allow(dead_code)]

use tax_forge::{AddressEntry, TaxAllocations, TokenFormData};

pub const TREASURY_WALLET: &str = "0xAAAAaaaaAAAAaaaaAAAAaaaaAAAAaaaaAAAAaaaa";
pub const MARKETING_WALLET: &str = "0xBBBBbbbbBBBBbbbbBBBBbbbbBBBBbbbbBBBBbbbb";
pub const LP_WALLET: &str = "0xcccccccccccccccccccccccccccccccccccccccc";
pub const YIELD_TOKEN: &str = "0xdddddddddddddddddddddddddddddddddddddddd";
pub const SUPPORT_TOKEN: &str = "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee";
pub use tax_forge::constants::DEAD_ADDRESS;

/// Form with valid metadata and the given allocations
pub fn form_with(allocations: TaxAllocations) -> TokenFormData {
    TokenFormData {
        name: "Forge Token".to_string(),
        symbol: "FORGE".to_string(),
        total_supply: "1000000".to_string(),
        decimals: 18,
        allocations,
        ..TokenFormData::default()
    }
}

/// Treasury 5% and Burn 1%, both unified
pub fn treasury_and_burn() -> TaxAllocations {
    TaxAllocations {
        treasury: vec![AddressEntry::new(TREASURY_WALLET, 5.0)],
        burn: vec![AddressEntry::new(DEAD_ADDRESS, 1.0)],
        ..TaxAllocations::default()
    }
}

/// Every mechanism in use, split and unified entries mixed
pub fn all_mechanisms() -> TaxAllocations {
    TaxAllocations {
        treasury: vec![
            AddressEntry::new(TREASURY_WALLET, 2.0),
            AddressEntry::new_split(MARKETING_WALLET, 1.0, 2.5),
        ],
        burn: vec![AddressEntry::new(DEAD_ADDRESS, 1.0)],
        reflection: tax_forge::ShareInput::unified(1.5),
        liquidity: vec![AddressEntry::new(LP_WALLET, 2.0)],
        r#yield: vec![AddressEntry::new_split(YIELD_TOKEN, 1.25, 0.75)],
        support: vec![AddressEntry::new(SUPPORT_TOKEN, 0.5)],
    }
}
