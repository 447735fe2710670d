//! Tests for mechanism share normalization and tax rate conversion

mod helpers;

use helpers::{all_mechanisms, treasury_and_burn, DEAD_ADDRESS, TREASURY_WALLET};
use tax_forge::{
    build_basis_point_tax_totals, compute_totals, normalize, normalize_direction, AddressEntry,
    Mechanism, ShareInput, TaxAllocations, TaxRates, TradeDirection,
};

#[test]
fn test_treasury_and_burn_scenario() {
    let allocations = treasury_and_burn();

    let totals = compute_totals(&allocations);
    assert_eq!(totals.buy(), 6.0);
    assert_eq!(totals.sell(), 6.0);

    // 5/6 and 1/6 of 10000, leftover unit to the larger remainder (Burn)
    let shares = normalize(&allocations);
    assert_eq!(shares.get(Mechanism::Treasury), 8333);
    assert_eq!(shares.get(Mechanism::Burn), 1667);
    for mechanism in [
        Mechanism::Reflection,
        Mechanism::Liquidity,
        Mechanism::Yield,
        Mechanism::Support,
    ] {
        assert_eq!(shares.get(mechanism), 0);
    }
    assert_eq!(shares.total(), 10_000);
}

#[test]
fn test_zero_allocation_gives_zero_shares() {
    let allocations = TaxAllocations {
        treasury: vec![AddressEntry::new(TREASURY_WALLET, 0.0)],
        burn: vec![AddressEntry::new(DEAD_ADDRESS, 0.0)],
        ..TaxAllocations::default()
    };
    assert_eq!(normalize(&allocations).shares, [0; 6]);
    assert_eq!(normalize(&TaxAllocations::default()).shares, [0; 6]);
}

#[test]
fn test_all_mechanisms_buy_and_sell() {
    let allocations = all_mechanisms();

    let buy = normalize_direction(&allocations, TradeDirection::Buy);
    assert_eq!(buy.shares, [3243, 1081, 1622, 2162, 1351, 541]);
    assert_eq!(buy.total(), 10_000);

    let sell = normalize_direction(&allocations, TradeDirection::Sell);
    assert_eq!(sell.shares, [4390, 976, 1463, 1951, 732, 488]);
    assert_eq!(sell.total(), 10_000);
}

#[test]
fn test_normalize_is_buy_direction() {
    let allocations = all_mechanisms();
    assert_eq!(
        normalize(&allocations),
        normalize_direction(&allocations, TradeDirection::Buy)
    );
}

#[test]
fn test_normalize_is_deterministic() {
    // Six equal remainders: leftover units follow mechanism order
    let allocations = TaxAllocations {
        treasury: vec![AddressEntry::new(TREASURY_WALLET, 1.0)],
        burn: vec![AddressEntry::new(DEAD_ADDRESS, 1.0)],
        reflection: ShareInput::unified(1.0),
        liquidity: vec![AddressEntry::new(TREASURY_WALLET, 1.0)],
        r#yield: vec![AddressEntry::new(TREASURY_WALLET, 1.0)],
        support: vec![AddressEntry::new(TREASURY_WALLET, 1.0)],
    };

    let first = normalize(&allocations);
    let second = normalize(&allocations);
    assert_eq!(first, second);
    assert_eq!(first.shares, [1667, 1667, 1667, 1667, 1666, 1666]);
}

#[test]
fn test_double_weight_gets_double_share() {
    let allocations = TaxAllocations {
        liquidity: vec![AddressEntry::new(TREASURY_WALLET, 4.0)],
        reflection: ShareInput::unified(2.0),
        ..TaxAllocations::default()
    };
    let shares = normalize(&allocations);
    let liquidity = shares.get(Mechanism::Liquidity) as i32;
    let reflection = shares.get(Mechanism::Reflection) as i32;
    assert!((liquidity - 2 * reflection).abs() <= 1);
    assert_eq!(shares.total(), 10_000);
}

#[test]
fn test_multiple_entries_sum_within_mechanism() {
    let allocations = TaxAllocations {
        treasury: vec![
            AddressEntry::new(TREASURY_WALLET, 1.5),
            AddressEntry::new(DEAD_ADDRESS, 1.5),
        ],
        burn: vec![AddressEntry::new(DEAD_ADDRESS, 1.5)],
        ..TaxAllocations::default()
    };
    assert_eq!(normalize(&allocations).shares, [6667, 3333, 0, 0, 0, 0]);
}

#[test]
fn test_split_entries_normalize_independently_per_direction() {
    let allocations = TaxAllocations {
        treasury: vec![AddressEntry::new_split(TREASURY_WALLET, 3.0, 0.0)],
        reflection: ShareInput::split(0.0, 2.0),
        ..TaxAllocations::default()
    };
    assert_eq!(normalize(&allocations).get(Mechanism::Treasury), 10_000);
    assert_eq!(
        normalize_direction(&allocations, TradeDirection::Sell).get(Mechanism::Reflection),
        10_000
    );
}

#[test]
fn test_normalize_tolerates_invalid_input() {
    let allocations = TaxAllocations {
        treasury: vec![AddressEntry::new(TREASURY_WALLET, 40.0)],
        burn: vec![AddressEntry::new(DEAD_ADDRESS, -5.0)],
        reflection: ShareInput::unified(f64::NAN),
        ..TaxAllocations::default()
    };
    // Over-cap and malformed input still produce a well-formed share set
    assert_eq!(normalize(&allocations).shares, [10_000, 0, 0, 0, 0, 0]);
}

#[test]
fn test_basis_point_tax_totals() {
    assert_eq!(
        build_basis_point_tax_totals(&treasury_and_burn()),
        TaxRates { buy_tax_bps: 600, sell_tax_bps: 600 }
    );
    assert_eq!(
        build_basis_point_tax_totals(&all_mechanisms()),
        TaxRates { buy_tax_bps: 925, sell_tax_bps: 1025 }
    );
    assert_eq!(
        build_basis_point_tax_totals(&TaxAllocations::default()),
        TaxRates::default()
    );
}

#[test]
fn test_basis_point_tax_totals_rounding() {
    let allocations = TaxAllocations {
        treasury: vec![
            AddressEntry::new(TREASURY_WALLET, 0.1),
            AddressEntry::new(TREASURY_WALLET, 0.2),
        ],
        reflection: ShareInput::unified(5.95),
        ..TaxAllocations::default()
    };
    assert_eq!(build_basis_point_tax_totals(&allocations).buy_tax_bps, 625);
}
