//! Bot Refill Pallet
//!
//! Keeps automation bot accounts funded with native currency. Refills are
//! paid for by a designated fee-source account: the pallet pulls tokens it
//! has been approved to spend, converts them to native currency, and
//! forwards the proceeds to the bot.
//!
//! Two funding paths exist. If the fee source holds enough of the
//! wrapped-native asset, exactly the requested amount is pulled and redeemed
//! 1:1. Otherwise the fee source's stable-asset holdings are pulled (bounded
//! by the allowance) and market-sold; the swap must yield at least the
//! requested amount, and all proceeds go to the bot.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

#[frame::pallet]
pub mod pallet {
  use super::WeightInfo;
  use alloc::vec::Vec;
  use frame::deps::{
    frame_support::{
      storage::with_storage_layer,
      traits::{
        EnsureOrigin,
        fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
        fungibles::{
          Inspect as FungiblesInspect, Mutate as FungiblesMutate,
          approvals::{Inspect as ApprovalInspect, Mutate as ApprovalMutate},
        },
        tokens::{Fortitude, Preservation},
      },
    },
    sp_runtime::{DispatchError, DispatchResult, traits::AccountIdConversion},
  };
  use frame::prelude::*;
  use primitives::{AssetInspector, AssetKind, Balance, ComponentId};

  /// Conversion service turning custodied tokens into native currency.
  pub trait NativeConversion<AccountId> {
    /// Burn `amount` of the wrapped-native asset held by `who` and credit
    /// the same amount of native currency. Exact 1:1.
    fn redeem_wrapped(who: &AccountId, amount: Balance) -> DispatchResult;

    /// Market-sell `amount_in` of `asset_in` held by `who` for native
    /// currency, failing unless at least `min_out` is received. Returns the
    /// native amount credited to `who`.
    fn swap_to_native(
      who: &AccountId,
      asset_in: u32,
      amount_in: Balance,
      min_out: Balance,
    ) -> Result<Balance, DispatchError>;
  }

  /// Lookup for protocol component accounts wired in by the runtime.
  pub trait ComponentResolver<AccountId> {
    fn resolve(component: ComponentId) -> Option<AccountId>;
  }

  #[pallet::config]
  pub trait Config: frame_system::Config {
    /// Origin allowed to manage the caller and bot whitelists
    type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// Asset management interface for fungible tokens
    type Assets: FungiblesInspect<Self::AccountId, AssetId = u32, Balance = Balance>
      + FungiblesMutate<Self::AccountId, AssetId = u32, Balance = Balance>
      + ApprovalInspect<Self::AccountId, AssetId = u32, Balance = Balance>
      + ApprovalMutate<Self::AccountId, AssetId = u32, Balance = Balance>;

    /// Native currency interface
    type Currency: NativeInspect<Self::AccountId, Balance = Balance>
      + NativeMutate<Self::AccountId, Balance = Balance>;

    /// Conversion service behind both funding paths
    type NativeConversion: NativeConversion<Self::AccountId>;

    /// Resolver locating the fee-source account
    type ComponentResolver: ComponentResolver<Self::AccountId>;

    /// Asset redeemable 1:1 for native currency
    #[pallet::constant]
    type WrappedNativeAsset: Get<u32>;

    /// Stable asset market-sold on the conversion path
    #[pallet::constant]
    type ConversionAsset: Get<u32>;

    /// Pallet ID for deriving the refiller account
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  #[pallet::hooks]
  impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
    fn integrity_test() {
      assert!(
        AssetKind::Local(T::WrappedNativeAsset::get()).is_wrapped(),
        "WrappedNativeAsset must carry the wrapped-native id namespace",
      );
      assert!(
        AssetKind::Local(T::ConversionAsset::get()).is_stable(),
        "ConversionAsset must carry the stable id namespace",
      );
    }
  }

  /// Accounts allowed to trigger refills.
  #[pallet::storage]
  pub type ApprovedCallers<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

  /// Approved refill destinations.
  #[pallet::storage]
  pub type ApprovedBots<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A bot received native currency.
    BotRefilled {
      bot: T::AccountId,
      requested: Balance,
      delivered: Balance,
      converted: bool,
    },
    /// A refill caller was approved or revoked.
    RefillCallerUpdated {
      who: T::AccountId,
      approved: bool,
    },
    /// A bot destination was approved or revoked.
    BotUpdated {
      bot: T::AccountId,
      approved: bool,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// The caller is not on the refill whitelist.
    CallerNotApproved,
    /// The destination is not an approved bot.
    BotNotApproved,
    /// No fee-source account is wired in.
    FeeSourceNotSet,
    /// The fee source's allowance cannot cover the refill.
    InsufficientApproval,
    /// The conversion service failed to produce enough native currency.
    ConversionFailed,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Refill `bot` with `amount` native currency, funded by the fee-source
    /// account's token approvals.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::refill())]
    pub fn refill(origin: OriginFor<T>, amount: Balance, bot: T::AccountId) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      ensure!(
        ApprovedCallers::<T>::contains_key(&caller),
        Error::<T>::CallerNotApproved
      );
      ensure!(
        ApprovedBots::<T>::contains_key(&bot),
        Error::<T>::BotNotApproved
      );
      let fee_source =
        T::ComponentResolver::resolve(ComponentId::FeeSource).ok_or(Error::<T>::FeeSourceNotSet)?;

      // A failed pull, redemption or swap must leave no partial movement
      with_storage_layer(|| -> DispatchResult {
        let refiller = Self::account_id();
        let wrapped = T::WrappedNativeAsset::get();

        let (delivered, converted) = if T::Assets::balance(wrapped, &fee_source) >= amount {
          ensure!(
            T::Assets::allowance(wrapped, &fee_source, &refiller) >= amount,
            Error::<T>::InsufficientApproval
          );
          T::Assets::transfer_from(wrapped, &fee_source, &refiller, &refiller, amount)?;
          T::NativeConversion::redeem_wrapped(&refiller, amount)
            .map_err(|_| Error::<T>::ConversionFailed)?;
          (amount, false)
        } else {
          let stable = T::ConversionAsset::get();
          let available = T::Assets::reducible_balance(
            stable,
            &fee_source,
            Preservation::Expendable,
            Fortitude::Polite,
          );
          let pull = available.min(T::Assets::allowance(stable, &fee_source, &refiller));
          ensure!(pull > 0, Error::<T>::InsufficientApproval);
          T::Assets::transfer_from(stable, &fee_source, &refiller, &refiller, pull)?;
          let proceeds = T::NativeConversion::swap_to_native(&refiller, stable, pull, amount)
            .map_err(|_| Error::<T>::ConversionFailed)?;
          (proceeds, true)
        };

        <T::Currency as NativeMutate<T::AccountId>>::transfer(
          &refiller,
          &bot,
          delivered,
          Preservation::Expendable,
        )?;

        Self::deposit_event(Event::BotRefilled {
          bot,
          requested: amount,
          delivered,
          converted,
        });

        Ok(())
      })
    }

    /// Approve or revoke an account's right to trigger refills.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::set_refill_caller())]
    pub fn set_refill_caller(
      origin: OriginFor<T>,
      who: T::AccountId,
      approved: bool,
    ) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;

      if approved {
        ApprovedCallers::<T>::insert(&who, ());
      } else {
        ApprovedCallers::<T>::remove(&who);
      }
      Self::deposit_event(Event::RefillCallerUpdated { who, approved });

      Ok(())
    }

    /// Approve or revoke a bot as a refill destination.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::set_bot())]
    pub fn set_bot(origin: OriginFor<T>, bot: T::AccountId, approved: bool) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;

      if approved {
        ApprovedBots::<T>::insert(&bot, ());
      } else {
        ApprovedBots::<T>::remove(&bot);
      }
      Self::deposit_event(Event::BotUpdated { bot, approved });

      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Get the refiller's account ID (derived from PalletId)
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }
  }

  /// Genesis configuration: seeds the whitelists and keeps the refiller
  /// account ED-free.
  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    pub initial_callers: Vec<T::AccountId>,
    pub initial_bots: Vec<T::AccountId>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
      for who in &self.initial_callers {
        ApprovedCallers::<T>::insert(who, ());
      }
      for bot in &self.initial_bots {
        ApprovedBots::<T>::insert(bot, ());
      }
    }
  }
}
