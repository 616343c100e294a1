use codec::{Decode, DecodeWithMemTracking, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::ecosystem::token;

/// Metadata container for the ledger's currency
#[derive(Encode, Decode, DecodeWithMemTracking, Eq, PartialEq, Clone, Debug, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct CurrencyMetadata {
  pub name: Vec<u8>,
  pub symbol: Vec<u8>,
  pub decimals: u8,
}

/// Metadata of the launch token as advertised to wallets and explorers
pub fn token_metadata() -> CurrencyMetadata {
  CurrencyMetadata {
    name: token::NAME.to_vec(),
    symbol: token::SYMBOL.to_vec(),
    decimals: token::DECIMALS,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn token_metadata_matches_constants() {
    let metadata = token_metadata();
    assert_eq!(metadata.name, b"VROOM".to_vec());
    assert_eq!(metadata.symbol, b"VROOM".to_vec());
    assert_eq!(metadata.decimals, 18);
  }
}
