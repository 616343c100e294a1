#![cfg(feature = "runtime-benchmarks")]

use super::*;
use alloc::vec::Vec;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_system::RawOrigin;
use primitives::Balance;

const SEED: u32 = 0;

/// Installs a fresh owner distinct from the whitelisted caller
fn set_owner<T: Config>() -> T::AccountId {
  let owner: T::AccountId = account("owner", 0, SEED);
  Owner::<T>::put(&owner);
  owner
}

/// Credits `who` while keeping the supply in step with the balances
fn fund<T: Config>(who: &T::AccountId, amount: Balance) {
  Balances::<T>::mutate(who, |balance| *balance = balance.saturating_add(amount));
  TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(amount));
}

/// Trading open and a registered pair, so transfers take the taxed path
fn launched<T: Config>() -> T::AccountId {
  let pair: T::AccountId = account("pair", 0, SEED);
  AmmPairs::<T>::insert(&pair, ());
  Trading::<T>::put(TradingState::Enabled);
  Fees::<T>::put(FeeConfig::from_percents(30, 30));
  pair
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn transfer() {
    set_owner::<T>();
    let pair = launched::<T>();
    let caller: T::AccountId = whitelisted_caller();
    fund::<T>(&caller, 1_000_000);

    #[extrinsic_call]
    _(RawOrigin::Signed(caller.clone()), pair.clone(), 1_000);

    assert_eq!(Balances::<T>::get(&pair), 700);
    assert_eq!(Balances::<T>::get(T::TaxSink::get()), 300);
  }

  #[benchmark]
  fn transfer_from() {
    set_owner::<T>();
    let pair = launched::<T>();
    let holder: T::AccountId = account("holder", 0, SEED);
    let caller: T::AccountId = whitelisted_caller();
    fund::<T>(&holder, 1_000_000);
    Allowances::<T>::insert(&holder, &caller, 5_000);

    #[extrinsic_call]
    _(
      RawOrigin::Signed(caller.clone()),
      holder.clone(),
      pair.clone(),
      1_000,
    );

    assert_eq!(Allowances::<T>::get(&holder, &caller), 4_000);
  }

  #[benchmark]
  fn approve() {
    let caller: T::AccountId = whitelisted_caller();
    let spender: T::AccountId = account("spender", 0, SEED);

    #[extrinsic_call]
    _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000);

    assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000);
  }

  #[benchmark]
  fn increase_allowance() {
    let caller: T::AccountId = whitelisted_caller();
    let spender: T::AccountId = account("spender", 0, SEED);
    Allowances::<T>::insert(&caller, &spender, 1_000);

    #[extrinsic_call]
    _(RawOrigin::Signed(caller.clone()), spender.clone(), 500);

    assert_eq!(Allowances::<T>::get(&caller, &spender), 1_500);
  }

  #[benchmark]
  fn decrease_allowance() {
    let caller: T::AccountId = whitelisted_caller();
    let spender: T::AccountId = account("spender", 0, SEED);
    Allowances::<T>::insert(&caller, &spender, 1_000);

    #[extrinsic_call]
    _(RawOrigin::Signed(caller.clone()), spender.clone(), 400);

    assert_eq!(Allowances::<T>::get(&caller, &spender), 600);
  }

  #[benchmark]
  fn multi_transfer(n: Linear<0, { T::MaxBatchSize::get() }>) {
    let owner = set_owner::<T>();
    fund::<T>(&owner, 1_000_000);
    let entries: Vec<(T::AccountId, Balance)> = (0..n)
      .map(|i| (account("recipient", i, SEED), 100))
      .collect();

    #[extrinsic_call]
    _(RawOrigin::Signed(owner.clone()), entries);

    assert_eq!(
      Balances::<T>::get(&owner),
      1_000_000 - 100 * n as Balance
    );
  }

  #[benchmark]
  fn enable_trading() {
    let owner = set_owner::<T>();

    #[extrinsic_call]
    _(RawOrigin::Signed(owner));

    assert!(Trading::<T>::get().is_enabled());
  }

  #[benchmark]
  fn update_fees() {
    let owner = set_owner::<T>();

    #[extrinsic_call]
    _(RawOrigin::Signed(owner), 5, 10);

    assert_eq!(Fees::<T>::get(), FeeConfig::from_percents(5, 10));
  }

  #[benchmark]
  fn add_amm_pair() {
    let owner = set_owner::<T>();
    let pair: T::AccountId = account("pair", 1, SEED);

    #[extrinsic_call]
    _(RawOrigin::Signed(owner), pair.clone());

    assert!(AmmPairs::<T>::contains_key(&pair));
  }

  #[benchmark]
  fn add_excluded_from_max_tx_amount() {
    let owner = set_owner::<T>();
    let router: T::AccountId = account("router", 0, SEED);

    #[extrinsic_call]
    _(RawOrigin::Signed(owner), router.clone());

    assert!(ExcludedFromMaxTx::<T>::contains_key(&router));
  }

  #[benchmark]
  fn update_max_tx_amount() {
    let owner = set_owner::<T>();

    #[extrinsic_call]
    _(RawOrigin::Signed(owner), Some(1_000_000));

    assert_eq!(MaxTxAmount::<T>::get(), Some(1_000_000));
  }

  #[benchmark]
  fn transfer_ownership() {
    let owner = set_owner::<T>();
    let successor: T::AccountId = account("successor", 0, SEED);

    #[extrinsic_call]
    _(RawOrigin::Signed(owner), successor.clone());

    assert_eq!(Owner::<T>::get(), Some(successor));
  }

  #[benchmark]
  fn renounce_ownership() {
    let owner = set_owner::<T>();

    #[extrinsic_call]
    _(RawOrigin::Signed(owner));

    assert_eq!(Owner::<T>::get(), None);
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
