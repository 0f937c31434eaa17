//! Fee Receiver Pallet
//!
//! Custodies collected protocol fees (native currency and tokens) at a
//! pallet-derived account and exposes admin-gated withdrawal and
//! token-approval management. A withdrawal amount of zero is the sentinel for
//! "the whole current balance".
//!
//! Approval deposits for `pallet-assets` allowances are reserved from the
//! receiver account, so it must be kept funded with native currency for
//! `approve_spender` to succeed.

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

#[frame::pallet]
pub mod pallet {
  use crate::weights::WeightInfo as _;
  use frame::deps::{
    frame_support::{
      storage::with_storage_layer,
      traits::{
        EnsureOrigin,
        fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
        fungibles::{Mutate as FungiblesMutate, approvals::Inspect as ApprovalInspect},
        tokens::Preservation,
      },
    },
    sp_runtime::{
      DispatchResult,
      traits::{AccountIdConversion, StaticLookup, Zero},
    },
  };
  use frame::prelude::*;
  use polkadot_sdk::pallet_assets;

  #[pallet::config]
  pub trait Config: frame_system::Config + pallet_assets::Config {
    /// Origin allowed to move custodied funds (e.g. a multisig or Root)
    type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// Native currency interface
    type Currency: NativeInspect<Self::AccountId, Balance = Self::Balance>
      + NativeMutate<Self::AccountId, Balance = Self::Balance>;

    /// Pallet ID for deriving the custodial account
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    type WeightInfo: crate::weights::WeightInfo;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// Custodied tokens left the receiver.
    TokenWithdrawn {
      asset_id: T::AssetId,
      to: T::AccountId,
      amount: T::Balance,
    },
    /// Custodied native currency left the receiver.
    NativeWithdrawn {
      to: T::AccountId,
      amount: T::Balance,
    },
    /// A spender's token allowance over the receiver was set.
    SpenderApproved {
      asset_id: T::AssetId,
      spender: T::AccountId,
      amount: T::Balance,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// The receiver holds less than the requested amount.
    InsufficientBalance,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T>
  where
    <T as pallet_assets::Config>::AssetId: Copy,
    <T as pallet_assets::Config>::AssetIdParameter:
      From<<T as pallet_assets::Config>::AssetId> + Copy,
  {
    /// Move `amount` of a custodied token to `to`; zero means the whole
    /// current balance.
    #[pallet::call_index(0)]
    #[pallet::weight(<T as crate::pallet::Config>::WeightInfo::withdraw_token())]
    pub fn withdraw_token(
      origin: OriginFor<T>,
      asset_id: T::AssetId,
      to: T::AccountId,
      amount: T::Balance,
    ) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;

      let receiver = Self::account_id();
      let held = pallet_assets::Pallet::<T>::balance(asset_id, &receiver);
      let amount = if amount.is_zero() { held } else { amount };
      ensure!(amount <= held, Error::<T>::InsufficientBalance);
      if amount.is_zero() {
        // Draining an empty balance is a no-op
        return Ok(());
      }

      <pallet_assets::Pallet<T> as FungiblesMutate<T::AccountId>>::transfer(
        asset_id,
        &receiver,
        &to,
        amount,
        Preservation::Expendable,
      )?;

      Self::deposit_event(Event::TokenWithdrawn {
        asset_id,
        to,
        amount,
      });

      Ok(())
    }

    /// Move `amount` of custodied native currency to `to`; zero means the
    /// whole current balance.
    #[pallet::call_index(1)]
    #[pallet::weight(<T as crate::pallet::Config>::WeightInfo::withdraw_native())]
    pub fn withdraw_native(
      origin: OriginFor<T>,
      to: T::AccountId,
      amount: T::Balance,
    ) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;

      let receiver = Self::account_id();
      let held = <<T as Config>::Currency as NativeInspect<T::AccountId>>::balance(&receiver);
      let amount = if amount.is_zero() { held } else { amount };
      ensure!(amount <= held, Error::<T>::InsufficientBalance);
      if amount.is_zero() {
        return Ok(());
      }

      <<T as Config>::Currency as NativeMutate<T::AccountId>>::transfer(
        &receiver,
        &to,
        amount,
        Preservation::Expendable,
      )?;

      Self::deposit_event(Event::NativeWithdrawn { to, amount });

      Ok(())
    }

    /// Set `spender`'s allowance over the receiver's tokens to exactly
    /// `amount`; zero revokes.
    ///
    /// `pallet-assets` approvals are additive, so any existing approval is
    /// cancelled before the new amount is granted. Cancel and re-grant run
    /// in one storage layer to keep the allowance transition atomic.
    #[pallet::call_index(2)]
    #[pallet::weight(<T as crate::pallet::Config>::WeightInfo::approve_spender())]
    pub fn approve_spender(
      origin: OriginFor<T>,
      asset_id: T::AssetId,
      spender: T::AccountId,
      amount: T::Balance,
    ) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;

      let receiver = Self::account_id();

      with_storage_layer(|| -> DispatchResult {
        let current = <pallet_assets::Pallet<T> as ApprovalInspect<T::AccountId>>::allowance(
          asset_id, &receiver, &spender,
        );

        if !current.is_zero() {
          pallet_assets::Pallet::<T>::cancel_approval(
            frame_system::RawOrigin::Signed(receiver.clone()).into(),
            <T as pallet_assets::Config>::AssetIdParameter::from(asset_id),
            T::Lookup::unlookup(spender.clone()),
          )?;
        }

        if !amount.is_zero() {
          pallet_assets::Pallet::<T>::approve_transfer(
            frame_system::RawOrigin::Signed(receiver.clone()).into(),
            <T as pallet_assets::Config>::AssetIdParameter::from(asset_id),
            T::Lookup::unlookup(spender.clone()),
            amount,
          )?;
        }

        Self::deposit_event(Event::SpenderApproved {
          asset_id,
          spender,
          amount,
        });

        Ok(())
      })
    }
  }

  impl<T: Config> Pallet<T> {
    /// Get the custodial account ID (derived from PalletId)
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }
  }

  /// Genesis configuration ensuring the custodial account is ED-free
  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    #[serde(skip)]
    pub _marker: core::marker::PhantomData<T>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      // Custodial account survives zero native balance via provider reference
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
    }
  }
}
