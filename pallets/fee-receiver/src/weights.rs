#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn withdraw_token() -> Weight;
	fn withdraw_native() -> Weight;
	fn approve_spender() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	fn withdraw_token() -> Weight {
		Weight::from_parts(45_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn withdraw_native() -> Weight {
		Weight::from_parts(35_000_000, 3000)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn approve_spender() -> Weight {
		Weight::from_parts(55_000_000, 4000)
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().writes(3))
	}
}

impl WeightInfo for () {
	fn withdraw_token() -> Weight {
		Weight::from_parts(45_000_000, 3500)
	}
	fn withdraw_native() -> Weight {
		Weight::from_parts(35_000_000, 3000)
	}
	fn approve_spender() -> Weight {
		Weight::from_parts(55_000_000, 4000)
	}
}
