use crate as pallet_bot_refill;
use crate::{ComponentResolver, NativeConversion};
use polkadot_sdk::frame_support::traits::fungible::Mutate as NativeMutate;
use polkadot_sdk::frame_support::traits::fungibles::Mutate;
use polkadot_sdk::frame_support::traits::tokens::{Fortitude, Precision, Preservation};
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl,
  traits::{ConstU32, ConstU128, Get},
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage, DispatchError,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{ComponentId, well_known};
use std::cell::RefCell;

pub const CALLER: u64 = 1;
pub const STRANGER: u64 = 2;
pub const FEE_SOURCE: u64 = 10;
pub const BOT: u64 = 20;

/// Fee source's seeded wrapped-native balance.
pub const WRAPPED_FUNDS: u128 = 400;
/// Fee source's seeded stable balance.
pub const STABLE_FUNDS: u128 = 900;

thread_local! {
    pub static SWAP_RATE: RefCell<u128> = const { RefCell::new(2) };
    pub static SWAP_FAILS: RefCell<bool> = const { RefCell::new(false) };
    pub static FEE_SOURCE_SET: RefCell<bool> = const { RefCell::new(true) };
}

/// Native units credited per stable unit sold.
pub fn set_swap_rate(rate: u128) {
  SWAP_RATE.with(|r| *r.borrow_mut() = rate);
}

pub fn fail_swaps(fail: bool) {
  SWAP_FAILS.with(|f| *f.borrow_mut() = fail);
}

pub fn clear_fee_source() {
  FEE_SOURCE_SET.with(|s| *s.borrow_mut() = false);
}

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Assets: polkadot_sdk::pallet_assets,
    BotRefill: pallet_bot_refill,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = u64;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<u128>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = u128;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_assets::Config for Test {
  type RuntimeEvent = RuntimeEvent;
  type Balance = u128;
  type AssetId = u32;
  type AssetIdParameter = u32;
  type Currency = Balances;
  type CreateOrigin = polkadot_sdk::frame_support::traits::AsEnsureOriginWithArg<
    frame_system::EnsureSigned<Self::AccountId>,
  >;
  type ForceOrigin = frame_system::EnsureRoot<Self::AccountId>;
  type AssetDeposit = ConstU128<1>;
  type AssetAccountDeposit = ConstU128<1>;
  type MetadataDepositBase = ConstU128<1>;
  type MetadataDepositPerByte = ConstU128<1>;
  type ApprovalDeposit = ConstU128<1>;
  type StringLimit = ConstU32<50>;
  type Freezer = ();
  type Extra = ();
  type CallbackHandle = ();
  type WeightInfo = ();
  type RemoveItemsLimit = ConstU32<5>;
  type Holder = ();
  type ReserveData = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = ();
}

pub struct MockConversion;
impl NativeConversion<u64> for MockConversion {
  fn redeem_wrapped(who: &u64, amount: u128) -> Result<(), DispatchError> {
    Assets::burn_from(
      well_known::WNATIVE,
      who,
      amount,
      Preservation::Expendable,
      Precision::Exact,
      Fortitude::Polite,
    )?;
    Balances::mint_into(who, amount)?;
    Ok(())
  }

  fn swap_to_native(
    who: &u64,
    asset_in: u32,
    amount_in: u128,
    min_out: u128,
  ) -> Result<u128, DispatchError> {
    if SWAP_FAILS.with(|f| *f.borrow()) {
      return Err(DispatchError::Other("conversion offline"));
    }

    let out = amount_in * SWAP_RATE.with(|r| *r.borrow());
    if out < min_out {
      return Err(DispatchError::Other("slippage limit hit"));
    }

    Assets::burn_from(
      asset_in,
      who,
      amount_in,
      Preservation::Expendable,
      Precision::Exact,
      Fortitude::Polite,
    )?;
    Balances::mint_into(who, out)?;
    Ok(out)
  }
}

pub struct FixedComponents;
impl ComponentResolver<u64> for FixedComponents {
  fn resolve(component: ComponentId) -> Option<u64> {
    match component {
      ComponentId::FeeSource => FEE_SOURCE_SET.with(|s| *s.borrow()).then_some(FEE_SOURCE),
      ComponentId::Executor => None,
    }
  }
}

pub struct RefillPalletId;
impl Get<PalletId> for RefillPalletId {
  fn get() -> PalletId {
    PalletId(*primitives::pallet_ids::BOT_REFILL_PALLET_ID)
  }
}

impl pallet_bot_refill::Config for Test {
  type AdminOrigin = frame_system::EnsureRoot<u64>;
  type Assets = Assets;
  type Currency = Balances;
  type NativeConversion = MockConversion;
  type ComponentResolver = FixedComponents;
  type WrappedNativeAsset = ConstU32<{ well_known::WNATIVE }>;
  type ConversionAsset = ConstU32<{ well_known::DAI }>;
  type PalletId = RefillPalletId;
  type WeightInfo = ();
}

pub fn refiller() -> u64 {
  BotRefill::account_id()
}

/// Grant the refiller an allowance over the fee source's tokens.
pub fn approve_refiller(asset: u32, amount: u128) {
  polkadot_sdk::frame_support::assert_ok!(Assets::approve_transfer(
    RuntimeOrigin::signed(FEE_SOURCE),
    asset,
    refiller(),
    amount
  ));
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances: vec![(CALLER, 1000), (STRANGER, 1000), (FEE_SOURCE, 1000)],
    dev_accounts: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  polkadot_sdk::pallet_assets::GenesisConfig::<Test> {
    assets: vec![
      (well_known::WNATIVE, FEE_SOURCE, true, 1),
      (well_known::DAI, FEE_SOURCE, true, 1),
    ],
    metadata: vec![],
    accounts: vec![
      (well_known::WNATIVE, FEE_SOURCE, WRAPPED_FUNDS),
      (well_known::DAI, FEE_SOURCE, STABLE_FUNDS),
    ],
    reserves: vec![],
    next_asset_id: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_bot_refill::GenesisConfig::<Test> {
    initial_callers: vec![CALLER],
    initial_bots: vec![BOT],
  }
  .assimilate_storage(&mut t)
  .unwrap();

  SWAP_RATE.with(|r| *r.borrow_mut() = 2);
  SWAP_FAILS.with(|f| *f.borrow_mut() = false);
  FEE_SOURCE_SET.with(|s| *s.borrow_mut() = true);

  t.into()
}
