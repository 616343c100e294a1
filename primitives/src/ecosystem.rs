//! Ecosystem Constants for the Taxed Launch Token
//!
//! This module centralizes token identity, genesis supply and the fundamental fee and
//! distribution parameters of the ledger.
//!
//! These constants are the single source of truth for the ledger pallet and for any
//! runtime or deployment tooling that configures it.

/// Balance type alias for consistency across ecosystem
pub type Balance = u128;

/// Token identity advertised through the ledger's metadata.
pub mod token {
  /// Human-readable token name
  pub const NAME: &[u8] = b"VROOM";

  /// Ticker symbol
  pub const SYMBOL: &[u8] = b"VROOM";

  /// Fractional decimal digits of the fixed-point balance representation
  pub const DECIMALS: u8 = 18;
}

/// Ecosystem parameters defining supply, fee and distribution constants.
pub mod params {
  use super::Balance;
  use sp_arithmetic::Percent;

  /// One whole token in base units (10^18).
  pub const UNIT: Balance = 1_000_000_000_000_000_000;

  /// Total supply credited to the deployer at genesis (3,000,000,000 tokens).
  ///
  /// There is no mint or burn path after genesis; the sum of all balances equals this
  /// value for the lifetime of the ledger.
  pub const TOTAL_SUPPLY: Balance = 3_000_000_000 * UNIT;

  /// Launch buy fee (30%).
  ///
  /// Charged on transfers out of a registered AMM pair and credited to the tax sink.
  pub const DEFAULT_BUY_FEE: Percent = Percent::from_percent(30);

  /// Launch sell fee (30%).
  ///
  /// Charged on transfers into a registered AMM pair and credited to the tax sink.
  pub const DEFAULT_SELL_FEE: Percent = Percent::from_percent(30);

  /// Highest configurable fee in whole percent.
  ///
  /// A fee at this ceiling routes the full gross amount to the tax sink; anything above
  /// would credit more than was debited.
  pub const MAX_FEE_PERCENT: u8 = 100;

  /// Maximum number of entries accepted by a single batch distribution.
  pub const MAX_BATCH_SIZE: u32 = 100;

  /// Team allocation moved to the development wallet after genesis (300,000,000 tokens).
  pub const TEAM_ALLOCATION: Balance = 300_000_000 * UNIT;

  /// Token side of the bootstrap liquidity seeded into the AMM pool (2,090,700,000 tokens).
  pub const LIQUIDITY_SEED: Balance = 2_090_700_000 * UNIT;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn supply_is_three_billion_whole_tokens() {
    assert_eq!(params::TOTAL_SUPPLY / params::UNIT, 3_000_000_000);
    assert_eq!(params::TOTAL_SUPPLY % params::UNIT, 0);
  }

  #[test]
  fn unit_matches_decimals() {
    assert_eq!(params::UNIT, 10u128.pow(token::DECIMALS as u32));
  }

  #[test]
  fn default_fees_within_ceiling() {
    assert!(params::DEFAULT_BUY_FEE.deconstruct() <= params::MAX_FEE_PERCENT);
    assert!(params::DEFAULT_SELL_FEE.deconstruct() <= params::MAX_FEE_PERCENT);
  }

  #[test]
  fn launch_allocations_fit_in_supply() {
    let allocated = params::TEAM_ALLOCATION + params::LIQUIDITY_SEED;
    assert!(
      allocated < params::TOTAL_SUPPLY,
      "Launch allocations must leave room for pre-sale distribution"
    );
  }
}
