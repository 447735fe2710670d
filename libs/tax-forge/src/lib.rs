//! Tax allocation core for fee-on-transfer token deployment.
//!
//! Takes the forge form's per-mechanism tax inputs and produces a validity
//! judgment plus an integer, contract-ready configuration whose mechanism
//! shares sum to exactly 10000 basis points.
//!
//! ```ignore
//! use tax_forge::{build_forge_params, validate, AddressEntry, TokenFormData};
//!
//! let mut form = TokenFormData::default();
//! form.name = "Forge".into();
//! form.symbol = "FRG".into();
//! form.allocations.treasury.push(AddressEntry::new(treasury_wallet, 5.0));
//!
//! let result = validate(&form);
//! if result.valid {
//!     let params = build_forge_params(&form)?;
//! }
//! ```

pub mod constants;
pub mod engine;
pub mod errors;
pub mod forge;
pub mod state;
pub mod utils;

pub use engine::{
    build_address_share_lists, build_basis_point_tax_totals, compute_totals, normalize,
    normalize_direction, validate, AddressShare, AddressShareLists, AllocationTotals,
    NormalizedShareSet, TaxRates, ValidationResult,
};
pub use errors::{ErrorCode, ValidationError};
pub use forge::{build_forge_params, ForgeParams};
pub use state::*;
