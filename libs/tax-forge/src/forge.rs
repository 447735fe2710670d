use anchor_lang::prelude::*;
use tracing::{debug, warn};

use crate::{
    constants::{ADDRESS_BYTES, BPS_DENOMINATOR, MAX_TAX_BPS},
    engine::{
        build_address_share_lists, build_basis_point_tax_totals, normalize_direction, validate,
        AddressShareLists, NormalizedShareSet, TaxRates,
    },
    errors::ErrorCode,
    state::{FeatureToggles, Mechanism, TokenFormData, TradeDirection},
    utils::{decode_address, parse_token_amount, percent_to_bps},
};

/// Destination in encoded form
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RecipientParam {
    pub address: [u8; ADDRESS_BYTES],
    pub share_bps: u16,
}

/// All destinations of one mechanism (shares sum to 10000 bps)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MechanismRecipients {
    pub mechanism: Mechanism,
    pub recipients: Vec<RecipientParam>,
}

/// Single-address fields read by pre-multi-address contracts (zero = unset)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LegacyAddresses {
    pub treasury: [u8; ADDRESS_BYTES],
    pub burn: [u8; ADDRESS_BYTES],
    pub liquidity: [u8; ADDRESS_BYTES],
    pub yield_token: [u8; ADDRESS_BYTES],
    pub support_token: [u8; ADDRESS_BYTES],
}

/// Deployment arguments for a new token, ready for borsh encoding
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ForgeParams {
    pub name: String,
    pub symbol: String,
    /// Supply in base units (whole tokens * 10^decimals)
    pub total_supply: u128,
    pub decimals: u8,
    pub tax_rates: TaxRates,
    pub buy_shares: NormalizedShareSet,
    pub sell_shares: NormalizedShareSet,
    pub recipients: Vec<MechanismRecipients>,
    pub legacy_addresses: LegacyAddresses,
    /// Basis points of supply, 0 = unlimited
    pub max_wallet_bps: u16,
    /// Basis points of supply, 0 = unlimited
    pub max_transaction_bps: u16,
    pub features: FeatureToggles,
}

/// Builds the deployment payload from a form snapshot.
///
/// Rejects forms that fail [`validate`], then runs
/// [`check_contract_invariants`] on the computed rates, shares and
/// destinations before anything leaves this crate.
pub fn build_forge_params(form: &TokenFormData) -> Result<ForgeParams> {
    let validation = validate(form);
    if !validation.valid {
        for message in validation.messages() {
            warn!(%message, "rejected forge configuration");
        }
        return err!(ErrorCode::InvalidTaxConfiguration);
    }

    let allocations = &form.allocations;
    let total_supply = parse_token_amount(&form.total_supply, form.decimals)?;

    let tax_rates = build_basis_point_tax_totals(allocations);
    let buy_shares = normalize_direction(allocations, TradeDirection::Buy);
    let sell_shares = normalize_direction(allocations, TradeDirection::Sell);
    let share_lists = build_address_share_lists(allocations);
    check_contract_invariants(&tax_rates, [&buy_shares, &sell_shares], &share_lists)?;

    let recipients = share_lists
        .iter()
        .map(|(mechanism, list)| -> Result<MechanismRecipients> {
            let recipients = list
                .iter()
                .map(|share| -> Result<RecipientParam> {
                    Ok(RecipientParam {
                        address: decode_address(&share.address)?,
                        share_bps: share.share_bps,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(MechanismRecipients {
                mechanism,
                recipients,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let primary = |mechanism: Mechanism| -> Result<[u8; ADDRESS_BYTES]> {
        match allocations.primary_address(mechanism) {
            Some(address) => decode_address(address),
            None => Ok([0u8; ADDRESS_BYTES]),
        }
    };
    let legacy_addresses = LegacyAddresses {
        treasury: primary(Mechanism::Treasury)?,
        burn: primary(Mechanism::Burn)?,
        liquidity: primary(Mechanism::Liquidity)?,
        yield_token: primary(Mechanism::Yield)?,
        support_token: primary(Mechanism::Support)?,
    };

    let limit_bps = |percent: Option<f64>| {
        percent
            .map(|p| percent_to_bps(p).min(BPS_DENOMINATOR) as u16)
            .unwrap_or(0)
    };

    debug!(
        symbol = %form.symbol,
        buy_tax_bps = tax_rates.buy_tax_bps,
        sell_tax_bps = tax_rates.sell_tax_bps,
        "built forge params"
    );

    Ok(ForgeParams {
        name: form.name.trim().to_string(),
        symbol: form.symbol.trim().to_string(),
        total_supply,
        decimals: form.decimals,
        tax_rates,
        buy_shares,
        sell_shares,
        recipients,
        legacy_addresses,
        max_wallet_bps: limit_bps(form.limits.max_wallet_percent),
        max_transaction_bps: limit_bps(form.limits.max_transaction_percent),
        features: form.features,
    })
}

/// Conditions the token contract rejects at deployment.
///
/// Forms that pass [`validate`] always satisfy these; the checks guard the
/// encoded payload itself.
pub fn check_contract_invariants(
    tax_rates: &TaxRates,
    share_sets: [&NormalizedShareSet; 2],
    share_lists: &AddressShareLists,
) -> Result<()> {
    require!(
        tax_rates.buy_tax_bps <= MAX_TAX_BPS && tax_rates.sell_tax_bps <= MAX_TAX_BPS,
        ErrorCode::TaxExceedsCap
    );

    for shares in share_sets {
        require!(
            shares.is_empty() || shares.total() == BPS_DENOMINATOR,
            ErrorCode::InvalidShareTotal
        );
    }

    // Every mechanism holding revenue must be able to pay it out
    for mechanism in Mechanism::ALL.into_iter().filter(|m| m.has_addresses()) {
        let funded = share_sets.iter().any(|shares| shares.get(mechanism) > 0);
        require!(
            !funded || !share_lists.get(mechanism).is_empty(),
            ErrorCode::MissingDestination
        );
    }

    Ok(())
}
