// Basis points
pub const BPS_DENOMINATOR: u32 = 10_000;     // 100%
pub const BPS_PER_PERCENT: f64 = 100.0;

// Tax caps (per direction, combined across all mechanisms)
pub const MAX_TOTAL_TAX_PERCENT: u8 = 25;
pub const MAX_TAX_BPS: u16 = 2_500;          // 25%

// Mechanisms: Treasury, Burn, Reflection, Liquidity, Yield, Support
pub const MECHANISM_COUNT: usize = 6;

// Token metadata limits
pub const MAX_SYMBOL_LEN: usize = 11;
pub const MAX_DECIMALS: u8 = 18;

// Account identifiers: "0x" + 40 hex chars (20 bytes)
pub const ADDRESS_PREFIX: &str = "0x";
pub const ADDRESS_HEX_LEN: usize = 40;
pub const ADDRESS_BYTES: usize = 20;

// Default Burn destination
pub const DEAD_ADDRESS: &str = "0x000000000000000000000000000000000000dEaD";

// Fresh form defaults
pub const DEFAULT_TOTAL_SUPPLY: &str = "1000000000";
pub const DEFAULT_DECIMALS: u8 = 18;
