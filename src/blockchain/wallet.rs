//! Deployer identity derived from a configured private key.
//!
//! # Security
//! - Keys are parsed only to derive the public address
//! - Keys are never logged or serialized from here
//! - Nothing in this module signs anything

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId};

/// Derive the deployer address for a hex-encoded private key.
///
/// Accepts the key with or without a `0x` prefix.
pub fn signer_address(private_key_hex: &str) -> BlockchainResult<Address> {
    let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

    // The parse error quotes offending characters; keep it out of the message.
    let signer: PrivateKeySigner = key_hex
        .parse()
        .map_err(|_| BlockchainError::Wallet("Invalid private key format".to_string()))?;

    Ok(signer.address())
}

/// The account a network would deploy from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployer {
    /// Address derived from the network's first account.
    pub address: Address,
    /// Chain the address would sign for (EIP-155).
    pub chain_id: ChainId,
}

impl Deployer {
    /// Resolve the deployer for a key on a given chain.
    pub fn from_private_key(private_key_hex: &str, chain_id: ChainId) -> BlockchainResult<Self> {
        let address = signer_address(private_key_hex)?;

        tracing::debug!(
            address = %address,
            chain_id = %chain_id,
            "Deployer address derived"
        );

        Ok(Self { address, chain_id })
    }
}
