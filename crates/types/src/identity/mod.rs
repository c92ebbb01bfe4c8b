//! Signing identity derived from a wallet secret
//!
//! The secret is a base58 string decoding to a 64-byte Solana keypair:
//! a 32-byte ed25519 seed followed by the matching 32-byte public key.

use ed25519_dalek::{Signer, SigningKey, KEYPAIR_LENGTH, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
use std::fmt;
use thiserror::Error;
use zeroize::Zeroize;

use crate::SecretString;

/// Errors raised while deriving an identity. Messages never echo key material.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
	#[error("invalid key material: {reason}")]
	InvalidKeyMaterial { reason: String },
}

impl IdentityError {
	fn invalid(reason: impl Into<String>) -> Self {
		Self::InvalidKeyMaterial {
			reason: reason.into(),
		}
	}
}

/// Wallet keypair plus its derived base58 address.
///
/// Created once per process and shared by reference. The signing key is
/// zeroized when the identity is dropped and is never printed.
pub struct SigningIdentity {
	key: SigningKey,
	address: String,
}

impl SigningIdentity {
	/// Derive an identity from a base58-encoded keypair secret
	pub fn from_base58(secret: &SecretString) -> Result<Self, IdentityError> {
		let mut bytes = bs58::decode(secret.expose_secret().trim())
			.into_vec()
			.map_err(|_| IdentityError::invalid("secret is not valid base58"))?;
		let identity = Self::from_bytes(&bytes);
		bytes.zeroize();
		identity
	}

	/// Derive an identity from raw keypair bytes
	///
	/// Fails unless `secret` is exactly 64 bytes and its trailing public key
	/// matches the one derived from the leading seed.
	pub fn from_bytes(secret: &[u8]) -> Result<Self, IdentityError> {
		let keypair = <&[u8; KEYPAIR_LENGTH]>::try_from(secret).map_err(|_| {
			IdentityError::invalid(format!(
				"expected {} bytes, decoded {}",
				KEYPAIR_LENGTH,
				secret.len()
			))
		})?;
		let key = SigningKey::from_keypair_bytes(keypair)
			.map_err(|_| IdentityError::invalid("public key does not match secret seed"))?;
		let address = bs58::encode(key.verifying_key().as_bytes()).into_string();

		Ok(Self { key, address })
	}

	/// Base58 ledger address of this identity
	pub fn public_address(&self) -> &str {
		&self.address
	}

	pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
		self.key.verifying_key().to_bytes()
	}

	/// Sign `message` with the wallet key
	pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
		self.key.sign(message).to_bytes()
	}
}

impl fmt::Debug for SigningIdentity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SigningIdentity")
			.field("address", &self.address)
			.field("key", &"[REDACTED]")
			.finish()
	}
}
