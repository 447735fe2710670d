//! Tax allocation engine
//!
//! Pure functions over a form snapshot. Nothing here retains state between
//! calls, so the UI can recompute totals and validation on every edit.
//!
//! Two different basis-point quantities come out of the engine:
//!
//! - [`TaxRates`]: the combined tax *rate* per direction (e.g. 6.25% = 625 bps)
//! - [`NormalizedShareSet`]: how that rate's revenue is *divided* between the
//!   six mechanisms, always summing to exactly 10000 bps

mod address_shares;
pub mod apportion;
mod validation;

pub use address_shares::*;
pub use validation::*;

use anchor_lang::prelude::*;
use tracing::{debug, trace};

use crate::{
    constants::{BPS_DENOMINATOR, MECHANISM_COUNT},
    state::{DirectionTotals, Mechanism, TaxAllocations, TradeDirection},
    utils::percent_to_bps,
};

use apportion::apportion;

/// Per-mechanism and global buy/sell percentage totals
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AllocationTotals {
    pub mechanisms: [DirectionTotals; MECHANISM_COUNT],
    pub global: DirectionTotals,
}

impl AllocationTotals {
    pub fn mechanism(&self, mechanism: Mechanism) -> DirectionTotals {
        self.mechanisms[mechanism.index()]
    }

    pub fn buy(&self) -> f64 {
        self.global.buy
    }

    pub fn sell(&self) -> f64 {
        self.global.sell
    }
}

/// Sums every entry's effective contribution per mechanism and globally.
/// Empty mechanisms contribute zero.
pub fn compute_totals(allocations: &TaxAllocations) -> AllocationTotals {
    let mut totals = AllocationTotals::default();

    for mechanism in Mechanism::ALL {
        let mut mechanism_totals = DirectionTotals::default();
        for shares in allocations.share_inputs(mechanism) {
            mechanism_totals += shares.contribution();
        }
        totals.mechanisms[mechanism.index()] = mechanism_totals;
        totals.global += mechanism_totals;
    }

    trace!(buy = totals.global.buy, sell = totals.global.sell, "computed allocation totals");
    totals
}

/// Each mechanism's proportion of the collected tax, in basis points
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalizedShareSet {
    pub shares: [u16; MECHANISM_COUNT],
}

impl NormalizedShareSet {
    pub fn get(&self, mechanism: Mechanism) -> u16 {
        self.shares[mechanism.index()]
    }

    pub fn total(&self) -> u32 {
        self.shares.iter().map(|&s| u32::from(s)).sum()
    }

    /// No tax configured in this direction
    pub fn is_empty(&self) -> bool {
        self.shares.iter().all(|&s| s == 0)
    }
}

/// Apportions the buy-side totals of all six mechanisms into 10000 bps.
///
/// Callers are expected to have run [`validate`] first; this function does
/// not re-check caps. It never fails: the result sums to exactly 10000, or
/// is all zeros when no buy tax is configured.
pub fn normalize(allocations: &TaxAllocations) -> NormalizedShareSet {
    normalize_direction(allocations, TradeDirection::Buy)
}

/// Same apportionment as [`normalize`] over either direction's totals
pub fn normalize_direction(
    allocations: &TaxAllocations,
    direction: TradeDirection,
) -> NormalizedShareSet {
    let totals = compute_totals(allocations);
    let weights: Vec<f64> = totals
        .mechanisms
        .iter()
        .map(|t| t.get(direction))
        .collect();

    let mut shares = [0u16; MECHANISM_COUNT];
    // Every unit is bounded by BPS_DENOMINATOR, which fits u16
    for (share, units) in shares.iter_mut().zip(apportion(&weights, BPS_DENOMINATOR)) {
        *share = units as u16;
    }

    debug!(?direction, ?shares, "normalized mechanism shares");
    NormalizedShareSet { shares }
}

/// Combined tax rate per direction, in basis points
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaxRates {
    pub buy_tax_bps: u16,
    pub sell_tax_bps: u16,
}

/// Global percentage totals converted to basis points (x100, rounded)
pub fn build_basis_point_tax_totals(allocations: &TaxAllocations) -> TaxRates {
    let totals = compute_totals(allocations);
    let to_bps = |percent: f64| u16::try_from(percent_to_bps(percent)).unwrap_or(u16::MAX);

    TaxRates {
        buy_tax_bps: to_bps(totals.buy()),
        sell_tax_bps: to_bps(totals.sell()),
    }
}
