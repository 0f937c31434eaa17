use crate::*;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_support::traits::{EnsureOrigin, Get};
use polkadot_sdk::frame_system::RawOrigin;

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn add_new_proxy() {
    let caller: T::AccountId = whitelisted_caller();

    #[extrinsic_call]
    add_new_proxy(RawOrigin::Signed(caller.clone()));

    assert_eq!(UserProxies::<T>::get(&caller).len(), 1);
  }

  #[benchmark]
  fn add_to_pool() {
    let origin =
      T::AdminOrigin::try_successful_origin().expect("AdminOrigin must have a successful origin");
    let count = T::MaxPoolTopUp::get();

    #[extrinsic_call]
    add_to_pool(origin as T::RuntimeOrigin, count);

    assert_eq!(Pallet::<T>::pool_size(), count);
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
