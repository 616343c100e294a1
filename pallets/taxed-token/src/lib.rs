//! Taxed Token Pallet
//!
//! Fixed-supply fungible ledger for a launch token traded against AMM pairs. Transfers out of
//! a registered pair pay the buy fee, transfers into one pay the sell fee, and every fee lands
//! in the configured tax sink. Until the owner enables trading only privileged accounts can move
//! tokens, which lets the deployer seed liquidity and distribute allocations before launch.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod types;
pub use types::{FeeConfig, FeeSplit, TradeDirection, TradingState};

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

/// Log target of the ledger
pub const LOG_TARGET: &str = "runtime::taxed-token";

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use crate::types::{FeeConfig, FeeSplit, TradeDirection, TradingState};
  use alloc::vec::Vec;
  use frame::deps::sp_runtime::{
    DispatchError, Percent,
    traits::{TrailingZeroInput, Zero},
  };
  use frame::prelude::*;
  use primitives::{
    Balance, CurrencyMetadata,
    params::{DEFAULT_BUY_FEE, DEFAULT_SELL_FEE, MAX_FEE_PERCENT},
  };

  /// Configuration trait for the taxed token pallet
  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Supply credited to the genesis owner; nothing is minted afterwards
    #[pallet::constant]
    type InitialSupply: Get<Balance>;

    /// Account receiving every fee taken from buys and sells
    #[pallet::constant]
    type TaxSink: Get<Self::AccountId>;

    /// Maximum number of entries in a single batch distribution
    #[pallet::constant]
    type MaxBatchSize: Get<u32>;

    /// Name, symbol and decimals of the token
    type Metadata: Get<CurrencyMetadata>;

    /// Weight information
    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// Total supply, fixed at genesis
  #[pallet::storage]
  #[pallet::getter(fn total_supply)]
  pub type TotalSupply<T: Config> = StorageValue<_, Balance, ValueQuery>;

  /// Token balance per account
  #[pallet::storage]
  pub type Balances<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, Balance, ValueQuery>;

  /// Amount a spender may move on behalf of an owner: (owner, spender) => amount
  #[pallet::storage]
  pub type Allowances<T: Config> = StorageDoubleMap<
    _,
    Blake2_128Concat,
    T::AccountId,
    Blake2_128Concat,
    T::AccountId,
    Balance,
    ValueQuery,
  >;

  /// Administrative owner; empty once ownership is renounced
  #[pallet::storage]
  #[pallet::getter(fn owner)]
  pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  /// Launch phase
  #[pallet::storage]
  #[pallet::getter(fn trading_state)]
  pub type Trading<T: Config> = StorageValue<_, TradingState, ValueQuery>;

  /// Current buy and sell rates
  #[pallet::storage]
  pub type Fees<T: Config> = StorageValue<_, FeeConfig, ValueQuery>;

  /// Registered AMM pair accounts
  #[pallet::storage]
  pub type AmmPairs<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

  /// Accounts exempt from the trading gate and the transaction ceiling; they still pay fees
  #[pallet::storage]
  pub type ExcludedFromMaxTx<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

  /// Ceiling on a single transfer between non-privileged accounts
  #[pallet::storage]
  #[pallet::getter(fn max_tx_amount)]
  pub type MaxTxAmount<T: Config> = StorageValue<_, Balance, OptionQuery>;

  /// Events for the taxed token pallet
  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// Tokens moved; `amount` was debited from the sender and `received` credited to the
    /// recipient, the difference went to the tax sink
    Transferred {
      from: T::AccountId,
      to: T::AccountId,
      amount: Balance,
      received: Balance,
      fee: Balance,
      direction: TradeDirection,
    },
    /// Allowance set
    Approval {
      owner: T::AccountId,
      spender: T::AccountId,
      amount: Balance,
    },
    /// Owner distributed tokens to a batch of recipients
    BatchDistributed {
      from: T::AccountId,
      recipients: u32,
      total: Balance,
    },
    /// Trading opened to everyone
    TradingEnabled,
    /// Buy and sell fees replaced
    FeesUpdated {
      old_buy_fee: Percent,
      old_sell_fee: Percent,
      new_buy_fee: Percent,
      new_sell_fee: Percent,
    },
    /// AMM pair registered
    AmmPairAdded { pair: T::AccountId },
    /// Account exempted from the transaction ceiling
    ExcludedFromMaxTx { account: T::AccountId },
    /// Transaction ceiling changed
    MaxTxAmountUpdated {
      old_amount: Option<Balance>,
      new_amount: Option<Balance>,
    },
    /// Ownership moved or renounced
    OwnershipTransferred {
      previous_owner: Option<T::AccountId>,
      new_owner: Option<T::AccountId>,
    },
  }

  /// Errors for the taxed token pallet
  #[pallet::error]
  pub enum Error<T> {
    /// Recipient is the null account
    InvalidRecipient,
    /// Spender is the null account
    InvalidSpender,
    /// New owner is the null account
    InvalidOwner,
    /// Sender balance is below the requested amount
    InsufficientBalance,
    /// Allowance is below the requested amount
    InsufficientAllowance,
    /// Trading is not enabled and the sender is not privileged
    TradingDisabled,
    /// Caller is not the owner
    Unauthorized,
    /// Trading was already enabled
    AlreadyEnabled,
    /// Pair is already registered
    PairAlreadyRegistered,
    /// Fee above 100%
    FeeTooHigh,
    /// Batch holds more entries than allowed
    BatchTooLarge,
    /// Transfer exceeds the transaction ceiling
    ExceedsMaxTxAmount,
  }

  #[pallet::hooks]
  impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
    #[cfg(feature = "try-runtime")]
    fn try_state(_n: BlockNumberFor<T>) -> Result<(), frame::deps::sp_runtime::TryRuntimeError> {
      Self::do_try_state()
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Move `amount` from the caller to `to`, taxing buys and sells
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::transfer())]
    pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: Balance) -> DispatchResult {
      let from = ensure_signed(origin)?;
      Self::do_transfer(&from, &to, amount)
    }

    /// Move `amount` from `from` to `to` against the caller's allowance.
    ///
    /// The fee treatment depends on `from` and `to` only; the spender confers no exemption.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::transfer_from())]
    pub fn transfer_from(
      origin: OriginFor<T>,
      from: T::AccountId,
      to: T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      let spender = ensure_signed(origin)?;
      let allowance = Allowances::<T>::get(&from, &spender);
      ensure!(allowance >= amount, Error::<T>::InsufficientAllowance);
      Self::do_transfer(&from, &to, amount)?;
      if allowance != Balance::MAX {
        Allowances::<T>::insert(&from, &spender, allowance.saturating_sub(amount));
      }
      Ok(())
    }

    /// Set the allowance of `spender` over the caller's tokens
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::approve())]
    pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: Balance) -> DispatchResult {
      let owner = ensure_signed(origin)?;
      ensure!(spender != Self::null_account(), Error::<T>::InvalidSpender);
      Self::set_allowance(owner, spender, amount);
      Ok(())
    }

    /// Raise the allowance of `spender`, saturating at unlimited
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::increase_allowance())]
    pub fn increase_allowance(
      origin: OriginFor<T>,
      spender: T::AccountId,
      added: Balance,
    ) -> DispatchResult {
      let owner = ensure_signed(origin)?;
      ensure!(spender != Self::null_account(), Error::<T>::InvalidSpender);
      let amount = Allowances::<T>::get(&owner, &spender).saturating_add(added);
      Self::set_allowance(owner, spender, amount);
      Ok(())
    }

    /// Lower the allowance of `spender`; going below zero is an error
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::decrease_allowance())]
    pub fn decrease_allowance(
      origin: OriginFor<T>,
      spender: T::AccountId,
      subtracted: Balance,
    ) -> DispatchResult {
      let owner = ensure_signed(origin)?;
      let amount = Allowances::<T>::get(&owner, &spender)
        .checked_sub(subtracted)
        .ok_or(Error::<T>::InsufficientAllowance)?;
      Self::set_allowance(owner, spender, amount);
      Ok(())
    }

    /// Distribute the owner's tokens to many recipients without fees.
    ///
    /// Entries pairing the null account with a zero amount are padding and are skipped. The
    /// whole batch is validated before any balance moves.
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::multi_transfer(entries.len() as u32))]
    pub fn multi_transfer(
      origin: OriginFor<T>,
      entries: Vec<(T::AccountId, Balance)>,
    ) -> DispatchResult {
      let owner = Self::ensure_owner(origin)?;
      ensure!(
        entries.len() <= T::MaxBatchSize::get() as usize,
        Error::<T>::BatchTooLarge
      );

      let null = Self::null_account();
      let mut payouts = Vec::with_capacity(entries.len());
      let mut total: Balance = 0;
      for (recipient, amount) in entries {
        if recipient == null {
          ensure!(amount.is_zero(), Error::<T>::InvalidRecipient);
          continue;
        }
        total = total
          .checked_add(amount)
          .ok_or(Error::<T>::InsufficientBalance)?;
        payouts.push((recipient, amount));
      }
      ensure!(
        Balances::<T>::get(&owner) >= total,
        Error::<T>::InsufficientBalance
      );

      Balances::<T>::mutate(&owner, |balance| *balance = balance.saturating_sub(total));
      for (recipient, amount) in &payouts {
        Balances::<T>::mutate(recipient, |balance| *balance = balance.saturating_add(*amount));
        Self::deposit_event(Event::Transferred {
          from: owner.clone(),
          to: recipient.clone(),
          amount: *amount,
          received: *amount,
          fee: 0,
          direction: TradeDirection::Peer,
        });
      }

      log::debug!(
        target: LOG_TARGET,
        "batch of {} distributed, {} tokens total",
        payouts.len(),
        total
      );
      Self::deposit_event(Event::BatchDistributed {
        from: owner,
        recipients: payouts.len() as u32,
        total,
      });
      Ok(())
    }

    /// Open transfers to everyone; cannot be undone
    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::enable_trading())]
    pub fn enable_trading(origin: OriginFor<T>) -> DispatchResult {
      Self::ensure_owner(origin)?;
      let enabled = Trading::<T>::get()
        .enable()
        .ok_or(Error::<T>::AlreadyEnabled)?;
      Trading::<T>::put(enabled);
      log::debug!(target: LOG_TARGET, "trading enabled");
      Self::deposit_event(Event::TradingEnabled);
      Ok(())
    }

    /// Replace both fee rates, in whole percent
    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::update_fees())]
    pub fn update_fees(origin: OriginFor<T>, buy_fee: u8, sell_fee: u8) -> DispatchResult {
      Self::ensure_owner(origin)?;
      ensure!(
        buy_fee <= MAX_FEE_PERCENT && sell_fee <= MAX_FEE_PERCENT,
        Error::<T>::FeeTooHigh
      );
      let old = Fees::<T>::get();
      let new = FeeConfig::from_percents(buy_fee, sell_fee);
      Fees::<T>::put(new);
      log::debug!(target: LOG_TARGET, "fees set to buy {:?} sell {:?}", new.buy, new.sell);
      Self::deposit_event(Event::FeesUpdated {
        old_buy_fee: old.buy,
        old_sell_fee: old.sell,
        new_buy_fee: new.buy,
        new_sell_fee: new.sell,
      });
      Ok(())
    }

    /// Register an AMM pair account
    #[pallet::call_index(8)]
    #[pallet::weight(T::WeightInfo::add_amm_pair())]
    pub fn add_amm_pair(origin: OriginFor<T>, pair: T::AccountId) -> DispatchResult {
      Self::ensure_owner(origin)?;
      ensure!(
        !AmmPairs::<T>::contains_key(&pair),
        Error::<T>::PairAlreadyRegistered
      );
      AmmPairs::<T>::insert(&pair, ());
      Self::deposit_event(Event::AmmPairAdded { pair });
      Ok(())
    }

    /// Exempt an account from the trading gate and the transaction ceiling.
    ///
    /// Adding an account twice is a no-op.
    #[pallet::call_index(9)]
    #[pallet::weight(T::WeightInfo::add_excluded_from_max_tx_amount())]
    pub fn add_excluded_from_max_tx_amount(
      origin: OriginFor<T>,
      account: T::AccountId,
    ) -> DispatchResult {
      Self::ensure_owner(origin)?;
      if !ExcludedFromMaxTx::<T>::contains_key(&account) {
        ExcludedFromMaxTx::<T>::insert(&account, ());
        Self::deposit_event(Event::ExcludedFromMaxTx { account });
      }
      Ok(())
    }

    /// Set or lift the transaction ceiling
    #[pallet::call_index(10)]
    #[pallet::weight(T::WeightInfo::update_max_tx_amount())]
    pub fn update_max_tx_amount(
      origin: OriginFor<T>,
      new_amount: Option<Balance>,
    ) -> DispatchResult {
      Self::ensure_owner(origin)?;
      let old_amount = MaxTxAmount::<T>::get();
      MaxTxAmount::<T>::set(new_amount);
      Self::deposit_event(Event::MaxTxAmountUpdated {
        old_amount,
        new_amount,
      });
      Ok(())
    }

    /// Hand ownership to another account
    #[pallet::call_index(11)]
    #[pallet::weight(T::WeightInfo::transfer_ownership())]
    pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
      let previous_owner = Self::ensure_owner(origin)?;
      ensure!(new_owner != Self::null_account(), Error::<T>::InvalidOwner);
      Owner::<T>::put(&new_owner);
      log::debug!(target: LOG_TARGET, "ownership moved to {:?}", new_owner);
      Self::deposit_event(Event::OwnershipTransferred {
        previous_owner: Some(previous_owner),
        new_owner: Some(new_owner),
      });
      Ok(())
    }

    /// Give up ownership for good; every owner-only call fails afterwards
    #[pallet::call_index(12)]
    #[pallet::weight(T::WeightInfo::renounce_ownership())]
    pub fn renounce_ownership(origin: OriginFor<T>) -> DispatchResult {
      let previous_owner = Self::ensure_owner(origin)?;
      Owner::<T>::kill();
      log::debug!(target: LOG_TARGET, "ownership renounced");
      Self::deposit_event(Event::OwnershipTransferred {
        previous_owner: Some(previous_owner),
        new_owner: None,
      });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// All-zero account, never a valid recipient
    pub fn null_account() -> T::AccountId {
      T::AccountId::decode(&mut TrailingZeroInput::zeroes())
        .expect("infinite length input; no invalid inputs for type; qed")
    }

    pub fn balance_of(who: &T::AccountId) -> Balance {
      Balances::<T>::get(who)
    }

    pub fn allowance(owner: &T::AccountId, spender: &T::AccountId) -> Balance {
      Allowances::<T>::get(owner, spender)
    }

    pub fn buy_fee() -> Percent {
      Fees::<T>::get().buy
    }

    pub fn sell_fee() -> Percent {
      Fees::<T>::get().sell
    }

    pub fn is_amm_pair(who: &T::AccountId) -> bool {
      AmmPairs::<T>::contains_key(who)
    }

    pub fn is_excluded_from_max_tx(who: &T::AccountId) -> bool {
      ExcludedFromMaxTx::<T>::contains_key(who)
    }

    pub fn trading_enabled() -> bool {
      Trading::<T>::get().is_enabled()
    }

    pub fn tax_sink() -> T::AccountId {
      T::TaxSink::get()
    }

    pub fn metadata() -> CurrencyMetadata {
      T::Metadata::get()
    }

    pub fn is_owner(who: &T::AccountId) -> bool {
      Owner::<T>::get().as_ref() == Some(who)
    }

    /// Owner or exempt account; bypasses the trading gate and the transaction ceiling
    pub fn is_privileged(who: &T::AccountId) -> bool {
      Self::is_owner(who) || Self::is_excluded_from_max_tx(who)
    }

    /// Direction of a transfer between `from` and `to`
    pub fn classify(from: &T::AccountId, to: &T::AccountId) -> TradeDirection {
      TradeDirection::classify(Self::is_amm_pair(from), Self::is_amm_pair(to))
    }

    /// Fee that a transfer of `amount` from `from` to `to` would pay right now
    pub fn quote_fee(from: &T::AccountId, to: &T::AccountId, amount: Balance) -> FeeSplit {
      Self::fee_split(from, to, Self::classify(from, to), amount)
    }

    /// Only the owner's own transfers skip the tax; the max-tx exemption set does not.
    fn fee_split(
      from: &T::AccountId,
      to: &T::AccountId,
      direction: TradeDirection,
      amount: Balance,
    ) -> FeeSplit {
      if !direction.is_trade() || Self::is_owner(from) || Self::is_owner(to) {
        FeeSplit::untaxed(amount)
      } else {
        FeeSplit::apply(Fees::<T>::get().rate_for(direction), amount)
      }
    }

    /// Check the caller is the current owner and return it
    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
      let who = ensure_signed(origin)?;
      match Owner::<T>::get() {
        Some(owner) if owner == who => Ok(who),
        _ => {
          log::debug!(target: LOG_TARGET, "privileged call rejected for {:?}", who);
          Err(Error::<T>::Unauthorized.into())
        }
      }
    }

    fn set_allowance(owner: T::AccountId, spender: T::AccountId, amount: Balance) {
      Allowances::<T>::insert(&owner, &spender, amount);
      Self::deposit_event(Event::Approval {
        owner,
        spender,
        amount,
      });
    }

    /// Core transfer. Every check runs before the first write.
    pub fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: Balance) -> DispatchResult {
      ensure!(*to != Self::null_account(), Error::<T>::InvalidRecipient);
      ensure!(
        Balances::<T>::get(from) >= amount,
        Error::<T>::InsufficientBalance
      );

      let from_privileged = Self::is_privileged(from);
      ensure!(
        from_privileged || Self::trading_enabled(),
        Error::<T>::TradingDisabled
      );

      if !from_privileged && !Self::is_privileged(to) {
        if let Some(cap) = MaxTxAmount::<T>::get() {
          ensure!(amount <= cap, Error::<T>::ExceedsMaxTxAmount);
        }
      }

      let direction = Self::classify(from, to);
      let split = Self::fee_split(from, to, direction, amount);

      // Sequential mutations keep self-transfers consistent
      Balances::<T>::mutate(from, |balance| *balance = balance.saturating_sub(amount));
      Balances::<T>::mutate(to, |balance| *balance = balance.saturating_add(split.net));
      if !split.fee.is_zero() {
        Balances::<T>::mutate(T::TaxSink::get(), |balance| {
          *balance = balance.saturating_add(split.fee)
        });
        log::trace!(
          target: LOG_TARGET,
          "{:?} of {} taxed {}",
          direction,
          amount,
          split.fee
        );
      }

      Self::deposit_event(Event::Transferred {
        from: from.clone(),
        to: to.clone(),
        amount,
        received: split.net,
        fee: split.fee,
        direction,
      });
      Ok(())
    }
  }

  #[cfg(any(feature = "try-runtime", test))]
  impl<T: Config> Pallet<T> {
    /// Sum of all balances equals the total supply
    pub fn do_try_state() -> Result<(), DispatchError> {
      let circulating = Balances::<T>::iter_values().fold(0u128, |acc, b| acc.saturating_add(b));
      ensure!(
        circulating == TotalSupply::<T>::get(),
        "balances do not add up to the total supply"
      );
      Ok(())
    }
  }

  /// Genesis configuration
  #[pallet::genesis_config]
  pub struct GenesisConfig<T: Config> {
    /// Receives the whole initial supply and the owner role
    pub owner: Option<T::AccountId>,
    /// Buy fee in whole percent
    pub buy_fee: u8,
    /// Sell fee in whole percent
    pub sell_fee: u8,
    pub max_tx_amount: Option<Balance>,
    pub amm_pairs: Vec<T::AccountId>,
    pub excluded_from_max_tx: Vec<T::AccountId>,
    pub trading_enabled: bool,
  }

  impl<T: Config> Default for GenesisConfig<T> {
    fn default() -> Self {
      Self {
        owner: None,
        buy_fee: DEFAULT_BUY_FEE.deconstruct(),
        sell_fee: DEFAULT_SELL_FEE.deconstruct(),
        max_tx_amount: None,
        amm_pairs: Vec::new(),
        excluded_from_max_tx: Vec::new(),
        trading_enabled: false,
      }
    }
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      assert!(
        self.buy_fee <= MAX_FEE_PERCENT && self.sell_fee <= MAX_FEE_PERCENT,
        "Genesis fee above 100%"
      );
      Fees::<T>::put(FeeConfig::from_percents(self.buy_fee, self.sell_fee));

      if let Some(owner) = &self.owner {
        let supply = T::InitialSupply::get();
        Balances::<T>::insert(owner, supply);
        TotalSupply::<T>::put(supply);
        Owner::<T>::put(owner);
      }

      MaxTxAmount::<T>::set(self.max_tx_amount);
      for pair in &self.amm_pairs {
        assert!(
          !AmmPairs::<T>::contains_key(pair),
          "Duplicate AMM pair in genesis"
        );
        AmmPairs::<T>::insert(pair, ());
      }
      for account in &self.excluded_from_max_tx {
        ExcludedFromMaxTx::<T>::insert(account, ());
      }
      if self.trading_enabled {
        Trading::<T>::put(TradingState::Enabled);
      }
    }
  }
}
