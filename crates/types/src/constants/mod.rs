//! Ledger constants and configuration limits

pub mod limits;
pub mod solana;

pub use limits::*;
pub use solana::*;
