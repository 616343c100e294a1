use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use polkadot_sdk::sp_runtime::Percent;
use scale_info::TypeInfo;

pub use primitives::Balance;

/// Direction of a transfer relative to the registered AMM pairs
#[derive(
  Clone, Copy, Debug, Decode, DecodeWithMemTracking, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo,
)]
pub enum TradeDirection {
  /// Tokens leave a pair: the counterparty is buying
  Buy,
  /// Tokens enter a pair: the sender is selling
  Sell,
  /// Neither side is a pair
  Peer,
}

impl TradeDirection {
  /// Sender side wins when both parties are pairs, so pair-to-pair moves count as buys.
  pub fn classify(from_is_pair: bool, to_is_pair: bool) -> Self {
    match (from_is_pair, to_is_pair) {
      (true, _) => TradeDirection::Buy,
      (false, true) => TradeDirection::Sell,
      (false, false) => TradeDirection::Peer,
    }
  }

  pub fn is_trade(&self) -> bool {
    !matches!(self, TradeDirection::Peer)
  }
}

/// Launch phase of the ledger
#[derive(
  Clone,
  Copy,
  Debug,
  Default,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
)]
pub enum TradingState {
  /// Only privileged senders may move tokens
  #[default]
  Disabled,
  /// Open to everyone; there is no way back
  Enabled,
}

impl TradingState {
  pub fn is_enabled(&self) -> bool {
    matches!(self, TradingState::Enabled)
  }

  /// Consumes the current state and yields the enabled one.
  ///
  /// Returns `None` when trading is already enabled.
  pub fn enable(self) -> Option<Self> {
    match self {
      TradingState::Disabled => Some(TradingState::Enabled),
      TradingState::Enabled => None,
    }
  }
}

/// Buy and sell tax rates, always written together
#[derive(
  Clone,
  Copy,
  Debug,
  Default,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
)]
pub struct FeeConfig {
  pub buy: Percent,
  pub sell: Percent,
}

impl FeeConfig {
  pub fn from_percents(buy: u8, sell: u8) -> Self {
    Self {
      buy: Percent::from_percent(buy),
      sell: Percent::from_percent(sell),
    }
  }

  /// Rate charged for a transfer in the given direction
  pub fn rate_for(&self, direction: TradeDirection) -> Percent {
    match direction {
      TradeDirection::Buy => self.buy,
      TradeDirection::Sell => self.sell,
      TradeDirection::Peer => Percent::zero(),
    }
  }
}

/// Split of a gross transfer amount into the recipient's share and the tax
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FeeSplit {
  pub fee: Balance,
  pub net: Balance,
}

impl FeeSplit {
  pub fn untaxed(amount: Balance) -> Self {
    Self {
      fee: 0,
      net: amount,
    }
  }

  /// Fee rounds down, so `fee + net == amount` for every rate up to 100%.
  pub fn apply(rate: Percent, amount: Balance) -> Self {
    let fee = rate.mul_floor(amount);
    Self {
      fee,
      net: amount.saturating_sub(fee),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn direction_follows_pair_membership() {
    assert_eq!(TradeDirection::classify(true, false), TradeDirection::Buy);
    assert_eq!(TradeDirection::classify(false, true), TradeDirection::Sell);
    assert_eq!(TradeDirection::classify(false, false), TradeDirection::Peer);
    assert_eq!(TradeDirection::classify(true, true), TradeDirection::Buy);
    assert!(!TradeDirection::Peer.is_trade());
    assert!(TradeDirection::Sell.is_trade());
  }

  #[test]
  fn trading_state_enables_once() {
    let state = TradingState::default();
    assert!(!state.is_enabled());
    let enabled = state.enable().unwrap();
    assert!(enabled.is_enabled());
    assert_eq!(enabled.enable(), None);
  }

  #[test]
  fn peer_rate_is_always_zero() {
    let fees = FeeConfig::from_percents(30, 25);
    assert_eq!(fees.rate_for(TradeDirection::Buy), Percent::from_percent(30));
    assert_eq!(fees.rate_for(TradeDirection::Sell), Percent::from_percent(25));
    assert_eq!(fees.rate_for(TradeDirection::Peer), Percent::zero());
  }

  #[test]
  fn fee_split_rounds_down_and_conserves() {
    let split = FeeSplit::apply(Percent::from_percent(30), 100);
    assert_eq!(split, FeeSplit { fee: 30, net: 70 });

    // 30% of 7 is 2.1
    let split = FeeSplit::apply(Percent::from_percent(30), 7);
    assert_eq!(split, FeeSplit { fee: 2, net: 5 });

    for amount in [0u128, 1, 3, 99, 1_000_000_000_000_000_001, u128::MAX] {
      for pct in [0u8, 1, 30, 99, 100] {
        let split = FeeSplit::apply(Percent::from_percent(pct), amount);
        assert_eq!(split.fee + split.net, amount);
      }
    }
  }

  #[test]
  fn full_rate_takes_everything() {
    let split = FeeSplit::apply(Percent::from_percent(100), 12_345);
    assert_eq!(split, FeeSplit { fee: 12_345, net: 0 });
    assert_eq!(FeeSplit::untaxed(12_345), FeeSplit { fee: 0, net: 12_345 });
  }
}
