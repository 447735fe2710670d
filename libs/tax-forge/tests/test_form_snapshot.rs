//! Tests for JSON form snapshots as posted by the UI

mod helpers;

use helpers::{DEAD_ADDRESS, TREASURY_WALLET, YIELD_TOKEN};
use serde_json::json;
use tax_forge::{
    normalize, validate, AddressEntry, LegacyMechanismFields, Mechanism, TaxAllocations,
    TokenFormData,
};

#[test]
fn test_deserialize_camel_case_form() {
    let form: TokenFormData = serde_json::from_value(json!({
        "name": "Snapshot",
        "symbol": "SNAP",
        "totalSupply": "500000",
        "decimals": 9,
        "branding": { "website": "https://example.org", "logoUri": "ipfs://logo" },
        "allocations": {
            "treasury": [{ "address": TREASURY_WALLET, "buyShare": 5, "split": false }],
            "burn": [{ "address": DEAD_ADDRESS, "buyShare": 1 }],
            "reflection": { "buyShare": 0.5, "sellShare": 1.5, "split": true },
            "yield": [{ "address": YIELD_TOKEN, "buyShare": 2, "sellShare": 0, "split": true }]
        },
        "limits": { "maxWalletPercent": 2 },
        "features": { "antiBot": true }
    }))
    .unwrap();

    assert_eq!(form.decimals, 9);
    assert_eq!(form.branding.logo_uri, "ipfs://logo");
    assert_eq!(form.allocations.treasury, vec![AddressEntry::new(TREASURY_WALLET, 5.0)]);
    assert_eq!(
        form.allocations.r#yield,
        vec![AddressEntry::new_split(YIELD_TOKEN, 2.0, 0.0)]
    );
    assert!(form.allocations.reflection.split);
    assert!(form.allocations.liquidity.is_empty());
    assert_eq!(form.limits.max_wallet_percent, Some(2.0));
    assert_eq!(form.limits.max_transaction_percent, None);
    // Omitted toggles keep their defaults
    assert!(form.features.anti_bot);
    assert!(form.features.trading_enabled);

    assert!(validate(&form).valid);
}

#[test]
fn test_missing_fields_use_defaults() {
    let form: TokenFormData = serde_json::from_value(json!({ "name": "Bare" })).unwrap();
    let defaults = TokenFormData::default();

    assert_eq!(form.total_supply, defaults.total_supply);
    assert_eq!(form.decimals, defaults.decimals);
    assert_eq!(form.allocations, defaults.allocations);
}

#[test]
fn test_serialize_uses_ui_field_names() {
    let value = serde_json::to_value(TokenFormData::default()).unwrap();
    assert!(value.get("totalSupply").is_some());
    assert!(value["allocations"].get("yield").is_some());
    assert_eq!(value["allocations"]["burn"][0]["address"], DEAD_ADDRESS);
    assert_eq!(value["allocations"]["burn"][0]["buyShare"], 0.0);
}

#[test]
fn test_legacy_mechanism_shapes_collapse() {
    let single: LegacyMechanismFields = serde_json::from_value(json!({
        "address": TREASURY_WALLET,
        "share": 5
    }))
    .unwrap();
    let multi: LegacyMechanismFields = serde_json::from_value(json!({
        "address": "",
        "share": 0,
        "addresses": [
            { "address": DEAD_ADDRESS, "buyShare": 0.5 },
            { "address": DEAD_ADDRESS, "buyShare": 0.5 }
        ]
    }))
    .unwrap();

    let allocations = TaxAllocations {
        treasury: single.into_entries(),
        burn: multi.into_entries(),
        ..TaxAllocations::default()
    };

    assert_eq!(allocations.primary_address(Mechanism::Treasury), Some(TREASURY_WALLET));
    assert_eq!(allocations.burn.len(), 2);
    assert_eq!(normalize(&allocations).shares, [8333, 1667, 0, 0, 0, 0]);
}
