//! Shared domain models used by the ledger reader, the swap orchestrator and the adapters

pub mod amount;
pub mod asset;
pub mod balance;
pub mod secret_string;

pub use amount::{from_smallest_units, to_smallest_units};
pub use asset::AssetReference;
pub use balance::{BalanceSnapshot, NativeBalance};
pub use secret_string::SecretString;
