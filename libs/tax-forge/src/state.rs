use std::fmt;

use anchor_lang::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{DEAD_ADDRESS, DEFAULT_DECIMALS, DEFAULT_TOTAL_SUPPLY, MECHANISM_COUNT};

/// Fee-routing mechanism a token can apply its transfer tax toward.
///
/// Declaration order is significant: it is the index order of every
/// per-mechanism array and the tie-break order of the apportionment.
#[derive(
    AnchorSerialize,
    AnchorDeserialize,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "camelCase")]
pub enum Mechanism {
    Treasury,
    Burn,
    Reflection,
    Liquidity,
    Yield,
    Support,
}

impl Mechanism {
    pub const ALL: [Mechanism; MECHANISM_COUNT] = [
        Mechanism::Treasury,
        Mechanism::Burn,
        Mechanism::Reflection,
        Mechanism::Liquidity,
        Mechanism::Yield,
        Mechanism::Support,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Reflection pays every holder and has no destination addresses
    pub fn has_addresses(self) -> bool {
        self != Mechanism::Reflection
    }

    /// Destination used when the mechanism is configured without addresses
    pub fn default_destination(self) -> Option<&'static str> {
        match self {
            Mechanism::Burn => Some(DEAD_ADDRESS),
            _ => None,
        }
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mechanism::Treasury => "Treasury",
            Mechanism::Burn => "Burn",
            Mechanism::Reflection => "Reflection",
            Mechanism::Liquidity => "Liquidity",
            Mechanism::Yield => "Yield",
            Mechanism::Support => "Support",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TradeDirection {
    Buy,
    Sell,
}

/// Buy/sell percentage pair as entered in the form
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareInput {
    /// Percentage (0-25) charged on purchases; also on sales when not split
    pub buy_share: f64,
    /// Percentage charged on sales, only read when `split` is set
    pub sell_share: f64,
    pub split: bool,
}

impl ShareInput {
    pub fn unified(share: f64) -> Self {
        Self {
            buy_share: share,
            sell_share: 0.0,
            split: false,
        }
    }

    pub fn split(buy_share: f64, sell_share: f64) -> Self {
        Self {
            buy_share,
            sell_share,
            split: true,
        }
    }

    /// Effective contribution to each direction.
    /// A unified share applies identically to buys and sells.
    pub fn contribution(&self) -> DirectionTotals {
        DirectionTotals {
            buy: self.buy_share,
            sell: if self.split {
                self.sell_share
            } else {
                self.buy_share
            },
        }
    }

    pub fn is_well_formed(&self) -> bool {
        let DirectionTotals { buy, sell } = self.contribution();
        buy.is_finite() && buy >= 0.0 && sell.is_finite() && sell >= 0.0
    }
}

/// One destination (wallet or external token) within a mechanism
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressEntry {
    pub address: String,
    #[serde(flatten)]
    pub shares: ShareInput,
}

impl AddressEntry {
    pub fn new(address: impl Into<String>, share: f64) -> Self {
        Self {
            address: address.into(),
            shares: ShareInput::unified(share),
        }
    }

    pub fn new_split(address: impl Into<String>, buy_share: f64, sell_share: f64) -> Self {
        Self {
            address: address.into(),
            shares: ShareInput::split(buy_share, sell_share),
        }
    }

    /// Blank rows left in the form carry no destination
    pub fn has_address(&self) -> bool {
        !self.address.trim().is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DirectionTotals {
    pub buy: f64,
    pub sell: f64,
}

impl DirectionTotals {
    pub fn get(&self, direction: TradeDirection) -> f64 {
        match direction {
            TradeDirection::Buy => self.buy,
            TradeDirection::Sell => self.sell,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.buy == 0.0 && self.sell == 0.0
    }
}

impl std::ops::AddAssign for DirectionTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.buy += rhs.buy;
        self.sell += rhs.sell;
    }
}

/// Borrowed view of a single mechanism's configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MechanismAllocation<'a> {
    /// Treasury, Burn, Liquidity, Yield and Support route to explicit destinations
    Addresses(&'a [AddressEntry]),
    /// Reflection distributes to all holders
    Scalar(&'a ShareInput),
}

/// Tax configuration for all six mechanisms
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxAllocations {
    pub treasury: Vec<AddressEntry>,
    pub burn: Vec<AddressEntry>,
    pub reflection: ShareInput,
    pub liquidity: Vec<AddressEntry>,
    pub r#yield: Vec<AddressEntry>,
    pub support: Vec<AddressEntry>,
}

impl TaxAllocations {
    pub fn allocation(&self, mechanism: Mechanism) -> MechanismAllocation<'_> {
        match mechanism {
            Mechanism::Treasury => MechanismAllocation::Addresses(&self.treasury),
            Mechanism::Burn => MechanismAllocation::Addresses(&self.burn),
            Mechanism::Reflection => MechanismAllocation::Scalar(&self.reflection),
            Mechanism::Liquidity => MechanismAllocation::Addresses(&self.liquidity),
            Mechanism::Yield => MechanismAllocation::Addresses(&self.r#yield),
            Mechanism::Support => MechanismAllocation::Addresses(&self.support),
        }
    }

    /// Address entries of a mechanism (always empty for Reflection)
    pub fn entries(&self, mechanism: Mechanism) -> &[AddressEntry] {
        match self.allocation(mechanism) {
            MechanismAllocation::Addresses(entries) => entries,
            MechanismAllocation::Scalar(_) => &[],
        }
    }

    /// Every share input of a mechanism, in entry order
    pub fn share_inputs(&self, mechanism: Mechanism) -> Vec<&ShareInput> {
        match self.allocation(mechanism) {
            MechanismAllocation::Addresses(entries) => entries.iter().map(|e| &e.shares).collect(),
            MechanismAllocation::Scalar(shares) => vec![shares],
        }
    }

    /// Single-address field kept for contracts that predate multi-address routing
    pub fn primary_address(&self, mechanism: Mechanism) -> Option<&str> {
        self.entries(mechanism)
            .iter()
            .find(|e| e.has_address())
            .map(|e| e.address.trim())
            .or_else(|| mechanism.default_destination())
    }
}

/// Older per-mechanism shape: an optional single address with scalar shares,
/// alongside an optional multi-address array.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyMechanismFields {
    pub address: Option<String>,
    pub share: f64,
    pub sell_share: f64,
    pub split: bool,
    pub addresses: Option<Vec<AddressEntry>>,
}

impl LegacyMechanismFields {
    /// Collapses both shapes into one entry list. A non-empty address array wins.
    pub fn into_entries(self) -> Vec<AddressEntry> {
        match (self.addresses, self.address) {
            (Some(addresses), _) if !addresses.is_empty() => addresses,
            (_, Some(address)) if !address.trim().is_empty() => vec![AddressEntry {
                address,
                shares: ShareInput {
                    buy_share: self.share,
                    sell_share: self.sell_share,
                    split: self.split,
                },
            }],
            _ => Vec::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenBranding {
    pub description: String,
    pub website: String,
    pub twitter: String,
    pub telegram: String,
    pub logo_uri: String,
}

/// Anti-whale limits as a percentage of total supply (None = unlimited)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenLimits {
    pub max_wallet_percent: Option<f64>,
    pub max_transaction_percent: Option<f64>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureToggles {
    pub trading_enabled: bool,
    pub anti_bot: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            trading_enabled: true,
            anti_bot: false,
        }
    }
}

/// Everything the user enters on the forge form
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenFormData {
    pub name: String,
    pub symbol: String,
    /// Whole-token amount as a decimal string
    pub total_supply: String,
    pub decimals: u8,
    pub branding: TokenBranding,
    pub allocations: TaxAllocations,
    pub limits: TokenLimits,
    pub features: FeatureToggles,
}

impl Default for TokenFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            symbol: String::new(),
            total_supply: DEFAULT_TOTAL_SUPPLY.to_string(),
            decimals: DEFAULT_DECIMALS,
            branding: TokenBranding::default(),
            allocations: TaxAllocations {
                burn: vec![AddressEntry::new(DEAD_ADDRESS, 0.0)],
                ..TaxAllocations::default()
            },
            limits: TokenLimits::default(),
            features: FeatureToggles::default(),
        }
    }
}
