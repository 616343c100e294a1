extern crate alloc;

use crate as pallet_taxed_token;
use polkadot_sdk::frame_support::{
  construct_runtime, derive_impl, parameter_types,
  traits::{ConstU32, ConstU64, ConstU128},
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{
  CurrencyMetadata,
  ecosystem::params::{MAX_BATCH_SIZE, TOTAL_SUPPLY},
  token_metadata,
};

type Block = frame_system::mocking::MockBlock<Test>;

pub const NULL: u64 = 0;
pub const OWNER: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const CHARLIE: u64 = 4;
pub const PAIR: u64 = 10;
pub const ROUTER: u64 = 11;
pub const TAX_SINK: u64 = 0xdead;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    TaxedToken: pallet_taxed_token,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = u64;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
}

parameter_types! {
  pub TokenMetadata: CurrencyMetadata = token_metadata();
}

impl pallet_taxed_token::Config for Test {
  type InitialSupply = ConstU128<TOTAL_SUPPLY>;
  type TaxSink = ConstU64<TAX_SINK>;
  type MaxBatchSize = ConstU32<MAX_BATCH_SIZE>;
  type Metadata = TokenMetadata;
  type WeightInfo = ();
}

/// Genesis with `OWNER` holding the supply and launch defaults everywhere else
pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  build_ext(pallet_taxed_token::GenesisConfig::<Test> {
    owner: Some(OWNER),
    ..Default::default()
  })
}

/// Launched ledger: trading open and `PAIR` registered
pub fn new_trading_ext() -> polkadot_sdk::sp_io::TestExternalities {
  build_ext(pallet_taxed_token::GenesisConfig::<Test> {
    owner: Some(OWNER),
    amm_pairs: alloc::vec![PAIR],
    trading_enabled: true,
    ..Default::default()
  })
}

pub fn build_ext(
  genesis: pallet_taxed_token::GenesisConfig<Test>,
) -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  genesis.assimilate_storage(&mut t).unwrap();

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| System::set_block_number(1));
  ext
}
