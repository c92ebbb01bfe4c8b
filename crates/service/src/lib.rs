//! Token Buyer Service
//!
//! Balance reading, swap orchestration and outcome classification.

pub mod buyer;
pub mod ledger;
pub mod outcome;
pub mod swap;

pub use buyer::{AcquisitionReport, BalanceReading, TokenBuyer};
pub use ledger::LedgerReader;
pub use outcome::{classify, ExplorerLinks};
pub use swap::SwapOrchestrator;
