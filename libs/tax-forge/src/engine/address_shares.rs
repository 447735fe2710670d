use tracing::trace;

use crate::{
    constants::{BPS_DENOMINATOR, MECHANISM_COUNT},
    state::{Mechanism, TaxAllocations},
};

use super::apportion::apportion;

/// A destination and its cut of the mechanism's revenue
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressShare {
    pub address: String,
    /// Basis points of the mechanism's revenue (entries sum to 10000)
    pub share_bps: u16,
}

/// Per-mechanism destination lists, indexed by [`Mechanism::index`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressShareLists {
    pub lists: [Vec<AddressShare>; MECHANISM_COUNT],
}

impl AddressShareLists {
    pub fn get(&self, mechanism: Mechanism) -> &[AddressShare] {
        &self.lists[mechanism.index()]
    }

    /// Mechanisms with at least one destination, in mechanism order
    pub fn iter(&self) -> impl Iterator<Item = (Mechanism, &[AddressShare])> {
        Mechanism::ALL
            .into_iter()
            .map(move |m| (m, self.get(m)))
            .filter(|(_, list)| !list.is_empty())
    }
}

/// Splits each mechanism's revenue between its own destinations.
///
/// Entries are weighted by their combined buy + sell contribution and
/// apportioned into 10000 bps within the mechanism. Blank rows are skipped.
/// When every usable entry weighs zero the mechanism is split evenly. A
/// mechanism without usable entries gets its default destination at 10000
/// (Burn), or an empty list.
pub fn build_address_share_lists(allocations: &TaxAllocations) -> AddressShareLists {
    let mut lists = AddressShareLists::default();

    for mechanism in Mechanism::ALL.into_iter().filter(|m| m.has_addresses()) {
        let entries: Vec<_> = allocations
            .entries(mechanism)
            .iter()
            .filter(|e| e.has_address())
            .collect();

        let list: Vec<AddressShare> = if entries.is_empty() {
            mechanism
                .default_destination()
                .map(|address| AddressShare {
                    address: address.to_string(),
                    share_bps: BPS_DENOMINATOR as u16,
                })
                .into_iter()
                .collect()
        } else {
            let mut weights: Vec<f64> = entries
                .iter()
                .map(|e| {
                    let contribution = e.shares.contribution();
                    contribution.buy + contribution.sell
                })
                .collect();
            if !weights.iter().any(|w| w.is_finite() && *w > 0.0) {
                weights = vec![1.0; entries.len()];
            }

            entries
                .iter()
                .zip(apportion(&weights, BPS_DENOMINATOR))
                .map(|(entry, units)| AddressShare {
                    address: entry.address.trim().to_string(),
                    share_bps: units as u16,
                })
                .collect()
        };

        trace!(%mechanism, destinations = list.len(), "built address shares");
        lists.lists[mechanism.index()] = list;
    }

    lists
}
