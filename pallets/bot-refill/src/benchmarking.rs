use crate::*;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_support::traits::{
  EnsureOrigin, Get,
  fungible::Mutate as NativeMutate,
  fungibles::{
    Create as FungiblesCreate, Inspect as FungiblesInspect, Mutate as FungiblesMutate,
    approvals::Mutate as ApprovalMutate,
  },
};
use polkadot_sdk::frame_system;
use polkadot_sdk::frame_system::RawOrigin;
use primitives::{Balance, ComponentId};

const REFILL_AMOUNT: Balance = 1_000;

#[benchmarks(
  where
    T::Assets: FungiblesCreate<T::AccountId, AssetId = u32, Balance = Balance>,
)]
mod benches {
  use super::*;

  #[benchmark]
  fn refill() {
    let caller: T::AccountId = whitelisted_caller();
    let bot: T::AccountId = account("bot", 0, 0);
    ApprovedCallers::<T>::insert(&caller, ());
    ApprovedBots::<T>::insert(&bot, ());

    let fee_source = T::ComponentResolver::resolve(ComponentId::FeeSource)
      .expect("benchmark runtime wires a fee source");
    let refiller = Pallet::<T>::account_id();
    let wrapped = T::WrappedNativeAsset::get();

    // Native funds cover the fee source's approval deposit
    <T::Currency as NativeMutate<T::AccountId>>::mint_into(&fee_source, REFILL_AMOUNT)
      .expect("minting into the fee source succeeds");
    if !T::Assets::asset_exists(wrapped) {
      <T::Assets as FungiblesCreate<T::AccountId>>::create(wrapped, fee_source.clone(), true, 1)
        .expect("creating the wrapped asset succeeds");
    }
    T::Assets::mint_into(wrapped, &fee_source, REFILL_AMOUNT * 2)
      .expect("minting into the fee source succeeds");
    T::Assets::approve(wrapped, &fee_source, &refiller, REFILL_AMOUNT * 2)
      .expect("approving the refiller succeeds");

    #[extrinsic_call]
    refill(RawOrigin::Signed(caller), REFILL_AMOUNT, bot.clone());

    assert!(frame_system::Pallet::<T>::account_exists(&bot));
  }

  #[benchmark]
  fn set_refill_caller() {
    let origin =
      T::AdminOrigin::try_successful_origin().expect("AdminOrigin must have a successful origin");
    let who: T::AccountId = account("caller", 0, 0);

    #[extrinsic_call]
    set_refill_caller(origin as T::RuntimeOrigin, who.clone(), true);

    assert!(ApprovedCallers::<T>::contains_key(&who));
  }

  #[benchmark]
  fn set_bot() {
    let origin =
      T::AdminOrigin::try_successful_origin().expect("AdminOrigin must have a successful origin");
    let bot: T::AccountId = account("bot", 0, 0);

    #[extrinsic_call]
    set_bot(origin as T::RuntimeOrigin, bot.clone(), true);

    assert!(ApprovedBots::<T>::contains_key(&bot));
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
