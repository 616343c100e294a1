#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn transfer() -> Weight;
	fn transfer_from() -> Weight;
	fn approve() -> Weight;
	fn increase_allowance() -> Weight;
	fn decrease_allowance() -> Weight;
	fn multi_transfer(n: u32) -> Weight;
	fn enable_trading() -> Weight;
	fn update_fees() -> Weight;
	fn add_amm_pair() -> Weight;
	fn add_excluded_from_max_tx_amount() -> Weight;
	fn update_max_tx_amount() -> Weight;
	fn transfer_ownership() -> Weight;
	fn renounce_ownership() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Storage: `TaxedToken::Balances` (r:3 w:3)
	/// Storage: `TaxedToken::Owner` (r:1 w:0)
	/// Storage: `TaxedToken::ExcludedFromMaxTx` (r:2 w:0)
	/// Storage: `TaxedToken::AmmPairs` (r:2 w:0)
	/// Storage: `TaxedToken::Trading` (r:1 w:0)
	/// Storage: `TaxedToken::MaxTxAmount` (r:1 w:0)
	/// Storage: `TaxedToken::Fees` (r:1 w:0)
	fn transfer() -> Weight {
		Weight::from_parts(35_000_000, 6196)
			.saturating_add(T::DbWeight::get().reads(11))
			.saturating_add(T::DbWeight::get().writes(3))
	}
	fn transfer_from() -> Weight {
		Weight::from_parts(42_000_000, 6196)
			.saturating_add(T::DbWeight::get().reads(12))
			.saturating_add(T::DbWeight::get().writes(4))
	}
	fn approve() -> Weight {
		Weight::from_parts(15_000_000, 3593)
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn increase_allowance() -> Weight {
		Weight::from_parts(17_000_000, 3593)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn decrease_allowance() -> Weight {
		Weight::from_parts(17_000_000, 3593)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	/// The range of component `n` is `[0, 100]`.
	fn multi_transfer(n: u32) -> Weight {
		Weight::from_parts(20_000_000, 3593)
			.saturating_add(Weight::from_parts(9_000_000, 2603).saturating_mul(n.into()))
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
			.saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(n.into())))
			.saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(n.into())))
	}
	fn enable_trading() -> Weight {
		Weight::from_parts(12_000_000, 1489)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn update_fees() -> Weight {
		Weight::from_parts(12_000_000, 1489)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn add_amm_pair() -> Weight {
		Weight::from_parts(14_000_000, 3509)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn add_excluded_from_max_tx_amount() -> Weight {
		Weight::from_parts(14_000_000, 3509)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn update_max_tx_amount() -> Weight {
		Weight::from_parts(12_000_000, 1489)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(12_000_000, 1489)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn renounce_ownership() -> Weight {
		Weight::from_parts(11_000_000, 1489)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
}

impl WeightInfo for () {
	fn transfer() -> Weight {
		Weight::from_parts(35_000_000, 6196)
	}
	fn transfer_from() -> Weight {
		Weight::from_parts(42_000_000, 6196)
	}
	fn approve() -> Weight {
		Weight::from_parts(15_000_000, 3593)
	}
	fn increase_allowance() -> Weight {
		Weight::from_parts(17_000_000, 3593)
	}
	fn decrease_allowance() -> Weight {
		Weight::from_parts(17_000_000, 3593)
	}
	fn multi_transfer(n: u32) -> Weight {
		Weight::from_parts(20_000_000, 3593)
			.saturating_add(Weight::from_parts(9_000_000, 2603).saturating_mul(n.into()))
	}
	fn enable_trading() -> Weight {
		Weight::from_parts(12_000_000, 1489)
	}
	fn update_fees() -> Weight {
		Weight::from_parts(12_000_000, 1489)
	}
	fn add_amm_pair() -> Weight {
		Weight::from_parts(14_000_000, 3509)
	}
	fn add_excluded_from_max_tx_amount() -> Weight {
		Weight::from_parts(14_000_000, 3509)
	}
	fn update_max_tx_amount() -> Weight {
		Weight::from_parts(12_000_000, 1489)
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(12_000_000, 1489)
	}
	fn renounce_ownership() -> Weight {
		Weight::from_parts(11_000_000, 1489)
	}
}
