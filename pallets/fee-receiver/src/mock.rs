use crate as pallet_fee_receiver;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime,
  traits::{ConstU32, ConstU64, ConstU128, Get},
};
use polkadot_sdk::frame_system::{EnsureRoot, EnsureSigned};
use polkadot_sdk::sp_runtime::{
  BuildStorage,
  traits::{BlakeTwo256, IdentityLookup},
};

type Block = polkadot_sdk::frame_system::mocking::MockBlock<Test>;
type Balance = u128;
type AccountId = u64;

/// Token held by the receiver in most tests.
pub const FEE_ASSET: u32 = 1;
/// Receiver's seeded token balance.
pub const FEE_ASSET_FUNDS: Balance = 500;
/// Receiver's seeded native balance.
pub const NATIVE_FUNDS: Balance = 300;

construct_runtime!(
  pub enum Test {
    System: polkadot_sdk::frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Assets: polkadot_sdk::pallet_assets,
    FeeReceiver: pallet_fee_receiver,
  }
);

impl polkadot_sdk::frame_system::Config for Test {
  type BaseCallFilter = polkadot_sdk::frame_support::traits::Everything;
  type BlockWeights = ();
  type BlockLength = ();
  type DbWeight = ();
  type RuntimeOrigin = RuntimeOrigin;
  type RuntimeCall = RuntimeCall;
  type Nonce = u64;
  type Hash = polkadot_sdk::sp_core::H256;
  type Hashing = BlakeTwo256;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Block = Block;
  type RuntimeEvent = RuntimeEvent;
  type BlockHashCount = ConstU64<250>;
  type Version = ();
  type PalletInfo = PalletInfo;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<Balance>;
  type OnNewAccount = ();
  type OnKilledAccount = ();
  type SystemWeightInfo = ();
  type SS58Prefix = ();
  type OnSetCode = ();
  type MaxConsumers = ConstU32<16>;
  type RuntimeTask = ();
  type ExtensionsWeightInfo = ();
  type SingleBlockMigrations = ();
  type MultiBlockMigrator = ();
  type PreInherents = ();
  type PostInherents = ();
  type PostTransactions = ();
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ConstU32<50>;
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = Balance;
  type RuntimeEvent = RuntimeEvent;
  type DustRemoval = ();
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = RuntimeHoldReason;
  type RuntimeFreezeReason = RuntimeFreezeReason;
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_assets::Config for Test {
  type RuntimeEvent = RuntimeEvent;
  type Balance = Balance;
  type AssetId = u32;
  type AssetIdParameter = u32;
  type Currency = Balances;
  type CreateOrigin = EnsureSigned<AccountId>;
  type ForceOrigin = EnsureRoot<AccountId>;
  type AssetDeposit = ConstU128<1>;
  type AssetAccountDeposit = ConstU128<1>;
  type MetadataDepositBase = ConstU128<1>;
  type MetadataDepositPerByte = ConstU128<1>;
  type ApprovalDeposit = ConstU128<1>;
  type StringLimit = ConstU32<50>;
  type Freezer = ();
  type Extra = ();
  type ReserveData = ();
  type WeightInfo = ();
  type RemoveItemsLimit = ConstU32<1000>;
  type CallbackHandle = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = ();
  type Holder = ();
}

pub struct ReceiverPalletId;
impl Get<PalletId> for ReceiverPalletId {
  fn get() -> PalletId {
    PalletId(*primitives::pallet_ids::FEE_RECEIVER_PALLET_ID)
  }
}

impl pallet_fee_receiver::Config for Test {
  type AdminOrigin = EnsureRoot<AccountId>;
  type Currency = Balances;
  type PalletId = ReceiverPalletId;
  type WeightInfo = ();
}

pub fn receiver() -> AccountId {
  FeeReceiver::account_id()
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = polkadot_sdk::frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances: vec![(1, 1000), (2, 1000), (receiver(), NATIVE_FUNDS)],
    dev_accounts: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  polkadot_sdk::pallet_assets::GenesisConfig::<Test> {
    assets: vec![(FEE_ASSET, 1, true, 1)],
    metadata: vec![],
    accounts: vec![(FEE_ASSET, receiver(), FEE_ASSET_FUNDS)],
    reserves: vec![],
    next_asset_id: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_fee_receiver::GenesisConfig::<Test>::default()
    .assimilate_storage(&mut t)
    .unwrap();

  t.into()
}
