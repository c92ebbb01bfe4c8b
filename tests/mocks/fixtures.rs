//! Wallets, token accounts and transactions used across tests

#![allow(dead_code)]

use std::sync::Arc;

use ed25519_dalek::SigningKey;
use token_buyer::{SecretString, SigningIdentity};

/// USDC mint, used as the purchase target
pub const TARGET_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
/// Some other mint the wallet also holds
pub const OTHER_MINT: &str = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";

pub fn keypair_bytes(seed: u8) -> [u8; 64] {
	SigningKey::from_bytes(&[seed; 32]).to_keypair_bytes()
}

/// Base58 wallet secret as it would appear in the environment
pub fn wallet_secret(seed: u8) -> SecretString {
	SecretString::new(bs58::encode(keypair_bytes(seed)).into_string())
}

pub fn identity(seed: u8) -> Arc<SigningIdentity> {
	Arc::new(SigningIdentity::from_bytes(&keypair_bytes(seed)).unwrap())
}

/// Minimal legacy transaction with one empty signature slot.
///
/// Message: header [1, 0, 1], keys [fee payer, program], blockhash, no
/// instructions.
pub fn unsigned_transaction(fee_payer: &[u8; 32]) -> Vec<u8> {
	let mut transaction = vec![1u8];
	transaction.extend_from_slice(&[0u8; 64]);
	transaction.extend_from_slice(&[1, 0, 1, 2]);
	transaction.extend_from_slice(fee_payer);
	transaction.extend_from_slice(&[7u8; 32]);
	transaction.extend_from_slice(&[9u8; 32]);
	transaction.push(0);
	transaction
}

/// Signature slot and message of a single-signer transaction
pub fn split_transaction(transaction: &[u8]) -> ([u8; 64], &[u8]) {
	let mut signature = [0u8; 64];
	signature.copy_from_slice(&transaction[1..65]);
	(signature, &transaction[65..])
}
