use tracing::debug;

use crate::{
    constants::{MAX_DECIMALS, MAX_SYMBOL_LEN, MAX_TAX_BPS},
    errors::ValidationError,
    state::{Mechanism, TokenFormData},
    utils::{is_valid_address, parse_token_amount, percent_to_bps},
};

use super::compute_totals;

/// Outcome of [`validate`]. Errors are listed in check order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Error strings as displayed to the user
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Checks a form snapshot and reports every violated constraint at once
pub fn validate(form: &TokenFormData) -> ValidationResult {
    let mut errors = Vec::new();
    let allocations = &form.allocations;
    let totals = compute_totals(allocations);

    if form.name.trim().is_empty() {
        errors.push(ValidationError::MissingName);
    }

    let symbol = form.symbol.trim();
    if symbol.is_empty() {
        errors.push(ValidationError::MissingSymbol);
    } else if symbol.chars().count() > MAX_SYMBOL_LEN {
        errors.push(ValidationError::SymbolTooLong);
    }

    if parse_token_amount(&form.total_supply, form.decimals.min(MAX_DECIMALS)).is_err() {
        errors.push(ValidationError::InvalidTotalSupply);
    }

    // Shares carry two decimals, so the cap is compared in whole bps and
    // float noise in the sum cannot push 25% over it
    if percent_to_bps(totals.buy()) > u32::from(MAX_TAX_BPS) {
        errors.push(ValidationError::BuyTaxExceedsCap);
    }
    if percent_to_bps(totals.sell()) > u32::from(MAX_TAX_BPS) {
        errors.push(ValidationError::SellTaxExceedsCap);
    }

    for mechanism in Mechanism::ALL {
        for entry in allocations.entries(mechanism) {
            let address = entry.address.trim();
            if !address.is_empty() && !is_valid_address(address) {
                errors.push(ValidationError::InvalidAddress {
                    mechanism,
                    address: address.to_string(),
                });
            }
        }
    }

    for (mechanism, error) in [
        (Mechanism::Yield, ValidationError::MissingYieldToken),
        (Mechanism::Support, ValidationError::MissingSupportToken),
    ] {
        let active = !totals.mechanism(mechanism).is_zero();
        let has_token = allocations.entries(mechanism).iter().any(|e| e.has_address());
        if active && !has_token {
            errors.push(error);
        }
    }

    // Burn falls back to the dead address
    for mechanism in [Mechanism::Treasury, Mechanism::Liquidity] {
        let active = !totals.mechanism(mechanism).is_zero();
        let has_destination = allocations.entries(mechanism).iter().any(|e| e.has_address());
        if active && !has_destination {
            errors.push(ValidationError::MissingDestination { mechanism });
        }
    }

    // A blank row's share would be folded into the other rows
    for mechanism in Mechanism::ALL {
        let entries = allocations.entries(mechanism);
        let has_destination = entries.iter().any(|e| e.has_address());
        let stranded = entries
            .iter()
            .any(|e| !e.has_address() && !e.shares.contribution().is_zero());
        if has_destination && stranded {
            errors.push(ValidationError::UnassignedShare { mechanism });
        }
    }

    for mechanism in Mechanism::ALL {
        if !allocations
            .share_inputs(mechanism)
            .iter()
            .all(|shares| shares.is_well_formed())
        {
            errors.push(ValidationError::InvalidShare { mechanism });
        }
    }

    if form.decimals > MAX_DECIMALS {
        errors.push(ValidationError::DecimalsTooLarge);
    }

    let within_supply = |percent: f64| percent > 0.0 && percent <= 100.0;
    if let Some(percent) = form.limits.max_wallet_percent {
        if !within_supply(percent) {
            errors.push(ValidationError::InvalidMaxWallet);
        }
    }
    if let Some(percent) = form.limits.max_transaction_percent {
        if !within_supply(percent) {
            errors.push(ValidationError::InvalidMaxTransaction);
        }
    }

    if !errors.is_empty() {
        debug!(count = errors.len(), "form failed validation");
    }
    ValidationResult::from_errors(errors)
}
