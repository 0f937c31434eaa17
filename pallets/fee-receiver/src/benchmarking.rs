use crate::*;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_support::traits::{
  EnsureOrigin,
  fungible::Mutate as NativeMutate,
  fungibles::Mutate as FungiblesMutate,
};
use polkadot_sdk::frame_system::RawOrigin;
use polkadot_sdk::pallet_assets;
use polkadot_sdk::sp_runtime::{DispatchResult, traits::StaticLookup};

fn setup_token<T: Config>(asset_id: T::AssetId) -> DispatchResult
where
  <T as pallet_assets::Config>::AssetId: Copy,
  <T as pallet_assets::Config>::AssetIdParameter:
    From<<T as pallet_assets::Config>::AssetId> + Copy,
  T::Balance: From<u32>,
{
  let receiver = Pallet::<T>::account_id();
  pallet_assets::Pallet::<T>::force_create(
    RawOrigin::Root.into(),
    asset_id.into(),
    T::Lookup::unlookup(receiver.clone()),
    true,
    1u32.into(),
  )?;
  <pallet_assets::Pallet<T> as FungiblesMutate<T::AccountId>>::mint_into(
    asset_id,
    &receiver,
    1_000u32.into(),
  )?;
  Ok(())
}

#[benchmarks(
  where
    <T as polkadot_sdk::pallet_assets::Config>::AssetId: Copy + From<u32>,
    <T as polkadot_sdk::pallet_assets::Config>::AssetIdParameter:
      From<<T as polkadot_sdk::pallet_assets::Config>::AssetId> + Copy,
    T::Balance: From<u32>,
)]
mod benches {
  use super::*;

  #[benchmark]
  fn withdraw_token() {
    let asset_id: T::AssetId = 7u32.into();
    setup_token::<T>(asset_id).expect("token setup succeeds");
    let origin =
      T::AdminOrigin::try_successful_origin().expect("AdminOrigin must have a successful origin");
    let to: T::AccountId = account("recipient", 0, 0);

    #[extrinsic_call]
    withdraw_token(origin as T::RuntimeOrigin, asset_id, to.clone(), 500u32.into());

    assert_eq!(
      pallet_assets::Pallet::<T>::balance(asset_id, &to),
      500u32.into()
    );
  }

  #[benchmark]
  fn withdraw_native() {
    let receiver = Pallet::<T>::account_id();
    <T::Currency as NativeMutate<T::AccountId>>::mint_into(&receiver, 1_000u32.into())
      .expect("minting into the receiver succeeds");
    let origin =
      T::AdminOrigin::try_successful_origin().expect("AdminOrigin must have a successful origin");
    let to: T::AccountId = account("recipient", 0, 0);

    #[extrinsic_call]
    withdraw_native(origin as T::RuntimeOrigin, to, 500u32.into());
  }

  #[benchmark]
  fn approve_spender() {
    let asset_id: T::AssetId = 7u32.into();
    setup_token::<T>(asset_id).expect("token setup succeeds");
    let receiver = Pallet::<T>::account_id();
    // Native funds cover the approval deposit
    <T::Currency as NativeMutate<T::AccountId>>::mint_into(&receiver, 1_000u32.into())
      .expect("minting into the receiver succeeds");
    let origin =
      T::AdminOrigin::try_successful_origin().expect("AdminOrigin must have a successful origin");
    let spender: T::AccountId = account("spender", 0, 0);

    // Pre-existing allowance exercises the cancel-then-grant path
    Pallet::<T>::approve_spender(
      T::AdminOrigin::try_successful_origin()
        .expect("AdminOrigin must have a successful origin"),
      asset_id,
      spender.clone(),
      100u32.into(),
    )
    .expect("initial approval succeeds");

    #[extrinsic_call]
    approve_spender(origin as T::RuntimeOrigin, asset_id, spender, 200u32.into());
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
