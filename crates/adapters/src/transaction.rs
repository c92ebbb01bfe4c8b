//! Signing of router-built Solana transactions
//!
//! Wire format: compact-u16 signature count, `count` 64-byte signatures, then
//! the message. Legacy and versioned messages are both supported; a
//! versioned message starts with a byte whose high bit is set.

use buyer_types::{RouterError, RouterResult, SigningIdentity};

const SIGNATURE_LEN: usize = 64;
const PUBKEY_LEN: usize = 32;
const MESSAGE_HEADER_LEN: usize = 3;

/// Decode a compact-u16 (1-3 bytes, 7 bits each, low bits first).
///
/// Returns the value and the number of bytes consumed.
pub fn decode_compact_u16(bytes: &[u8]) -> Option<(u16, usize)> {
	let mut value: u32 = 0;
	for (i, byte) in bytes.iter().take(3).enumerate() {
		value |= u32::from(byte & 0x7f) << (7 * i);
		if byte & 0x80 == 0 {
			return u16::try_from(value).ok().map(|v| (v, i + 1));
		}
	}
	None
}

/// First account key of a message, which pays fees and signs in slot 0
fn fee_payer(message: &[u8]) -> Option<&[u8]> {
	let version_prefix = usize::from(message.first()? & 0x80 != 0);
	let keys_offset = version_prefix + MESSAGE_HEADER_LEN;
	let (key_count, len) = decode_compact_u16(message.get(keys_offset..)?)?;
	if key_count == 0 {
		return None;
	}
	let start = keys_offset + len;
	message.get(start..start + PUBKEY_LEN)
}

/// Sign `transaction` in place with `identity` at the fee-payer slot.
///
/// Fails if the bytes are malformed or the fee payer is another account.
pub fn sign_serialized_transaction(
	transaction: &mut [u8],
	identity: &SigningIdentity,
) -> RouterResult<()> {
	let (count, header_len) = decode_compact_u16(transaction).ok_or_else(|| signing_error(
		"unreadable signature count",
	))?;
	if count == 0 {
		return Err(signing_error("transaction expects no signatures"));
	}

	let message_start = header_len + usize::from(count) * SIGNATURE_LEN;
	if transaction.len() <= message_start {
		return Err(signing_error("transaction is truncated"));
	}

	let payer = fee_payer(&transaction[message_start..])
		.ok_or_else(|| signing_error("message has no readable fee payer"))?;
	if payer != identity.public_key_bytes().as_slice() {
		return Err(signing_error("fee payer is not the signing wallet"));
	}

	let signature = identity.sign(&transaction[message_start..]);
	transaction[header_len..header_len + SIGNATURE_LEN].copy_from_slice(&signature);
	Ok(())
}

fn signing_error(reason: &str) -> RouterError {
	RouterError::Signing {
		reason: reason.to_string(),
	}
}
