//! Token Buyer Types
//!
//! Shared models, traits and the error taxonomy for the token buyer.
//! The ledger and router traits live here so adapters and services can be
//! swapped independently.

pub mod constants;
pub mod identity;
pub mod ledger;
pub mod models;
pub mod router;
pub mod swaps;

// Re-export for convenience
pub use rust_decimal;
pub use serde_json;

pub use identity::{IdentityError, SigningIdentity};

pub use ledger::{LedgerError, LedgerResult, LedgerRpc, RawTokenAccount};

pub use models::{
	from_smallest_units, to_smallest_units, AssetReference, BalanceSnapshot, NativeBalance,
	SecretString,
};

pub use router::{RouterError, RouterResult, SwapRouter};

pub use swaps::{AcquireError, ErrorKind, RouterResponse, SwapOutcome, SwapRequest};
