//! Well-known Solana addresses, unit exponents and endpoints

use rust_decimal::Decimal;

/// Wrapped SOL mint; routers use it to denote the native coin
pub const NATIVE_MINT: &str = "So11111111111111111111111111111111111111112";

/// SPL Token program that owns classic token accounts
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// Decimal exponent of SOL (1 SOL = 10^9 lamports)
pub const NATIVE_DECIMALS: u8 = 9;

/// Exponent applied to every raw token amount read from account bytes.
///
/// Token balances are not scaled by the mint's own decimals, so readings for
/// mints with a different exponent are approximate. Treat them as an
/// informational delta, never as an authoritative amount.
pub const ASSUMED_TOKEN_DECIMALS: u8 = 6;

/// SOL spent when the caller does not name an amount (0.05)
pub const DEFAULT_SPEND_AMOUNT: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

pub const DEFAULT_ROUTER_ENDPOINT: &str = "https://lite-api.jup.ag/ultra/v1";

pub const DEFAULT_EXPLORER_TX_URL: &str = "https://solscan.io/tx/";

/// Environment variable holding the base58 wallet secret by default
pub const DEFAULT_PRIVATE_KEY_ENV: &str = "BUYER_PRIVATE_KEY";
