//! Proxy Registry Pallet
//!
//! Issues per-user proxy accounts, optionally drawing from a pre-created pool
//! to amortize the cost of proxy creation across many users.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

/// Account factory and ownership-transfer primitive behind proxy issuance.
///
/// The controller consumes this seam for both allocation paths; `Pallet<T>`
/// ships a built-in implementation deriving deterministic sub-accounts, and
/// runtimes may substitute an external factory.
pub trait ProxyProvider<AccountId> {
  fn create_proxy(
    initial_owner: &AccountId,
  ) -> Result<AccountId, frame::deps::sp_runtime::DispatchError>;

  fn transfer_ownership(
    proxy: &AccountId,
    new_owner: &AccountId,
  ) -> frame::deps::sp_runtime::DispatchResult;
}


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

#[frame::pallet]
pub mod pallet {
  use crate::{ProxyProvider, weights::WeightInfo as _};
  use alloc::vec::Vec;
  use frame::deps::{
    frame_support::{storage::with_storage_layer, traits::EnsureOrigin},
    sp_runtime::{DispatchError, DispatchResult, traits::AccountIdConversion},
  };
  use frame::prelude::*;

  #[pallet::config]
  pub trait Config: frame_system::Config {
    /// Origin allowed to pre-create proxies for the pool (e.g. Governance or Root)
    type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// Account factory and ownership-transfer primitive used for allocation.
    ///
    /// Point this at `Pallet<Self>` to use the built-in derived-account
    /// factory, or at an external provider.
    type ProxyProvider: ProxyProvider<Self::AccountId>;

    /// Pallet ID for deriving the controller account and proxy sub-accounts
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Upper bound on proxies a single user can accumulate
    #[pallet::constant]
    type MaxProxiesPerUser: Get<u32>;

    /// Upper bound on pre-created proxies waiting in the pool
    #[pallet::constant]
    type MaxPoolSize: Get<u32>;

    /// Largest batch accepted by a single pool top-up
    #[pallet::constant]
    type MaxPoolTopUp: Get<u32>;

    type WeightInfo: crate::weights::WeightInfo;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// Ordered reserve of pre-created, currently-unowned proxies.
  ///
  /// Entries are owned by the controller account until consumed; consumption
  /// pops from the back. A pooled proxy never appears in any user's list
  /// before it is consumed.
  #[pallet::storage]
  pub type ProxyPool<T: Config> =
    StorageValue<_, BoundedVec<T::AccountId, T::MaxPoolSize>, ValueQuery>;

  /// Append-only allocation history per user, in allocation order.
  #[pallet::storage]
  #[pallet::getter(fn user_proxies)]
  pub type UserProxies<T: Config> = StorageMap<
    _,
    Blake2_128Concat,
    T::AccountId,
    BoundedVec<T::AccountId, T::MaxProxiesPerUser>,
    ValueQuery,
  >;

  /// Current owner of every proxy minted by the built-in provider.
  ///
  /// Pooled and freshly-minted proxies point at the controller account;
  /// assignment rewrites the entry to the user and nothing ever clears it.
  #[pallet::storage]
  #[pallet::getter(fn proxy_owner)]
  pub type ProxyOwner<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, T::AccountId, OptionQuery>;

  /// Built-in provider's account-derivation counter.
  #[pallet::storage]
  pub type NextProxyIndex<T: Config> = StorageValue<_, u64, ValueQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A proxy was assigned to a user.
    ProxyAssigned {
      owner: T::AccountId,
      proxy: T::AccountId,
      from_pool: bool,
    },
    /// The pool was topped up with freshly created proxies.
    PoolToppedUp { count: u32, pool_size: u32 },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// The underlying account factory could not create a proxy.
    ProxyCreationFailed,
    /// Ownership could not be handed to the new owner.
    OwnershipTransferFailed,
    /// The caller already holds the maximum number of proxies.
    TooManyProxies,
    /// The top-up would push the pool past its capacity.
    PoolCapacityExceeded,
    /// A top-up of zero proxies is meaningless.
    ZeroCount,
    /// The top-up batch exceeds the per-call limit.
    TopUpTooLarge,
    /// The proxy handle is not known to the built-in provider.
    UnknownProxy,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Allocate one proxy to the caller.
    ///
    /// Satisfied from the pool when non-empty, otherwise a fresh proxy is
    /// created on the spot. Either way the caller ends up as the owner and
    /// the handle is appended to the caller's allocation history. On any
    /// failure the pool, history, and ownership records are left untouched.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::add_new_proxy())]
    pub fn add_new_proxy(origin: OriginFor<T>) -> DispatchResult {
      let who = ensure_signed(origin)?;

      // The whole allocation is one storage layer: a failed transfer or a
      // full user list must not leak the pool pop or a half-created proxy.
      with_storage_layer(|| -> DispatchResult {
        // Consume the pool before creating anything new
        let (proxy, from_pool) = match ProxyPool::<T>::mutate(|pool| pool.pop()) {
          Some(pooled) => (pooled, true),
          None => {
            let controller = Self::account_id();
            let fresh = T::ProxyProvider::create_proxy(&controller)
              .map_err(|_| Error::<T>::ProxyCreationFailed)?;
            (fresh, false)
          }
        };

        T::ProxyProvider::transfer_ownership(&proxy, &who)
          .map_err(|_| Error::<T>::OwnershipTransferFailed)?;

        UserProxies::<T>::try_mutate(&who, |proxies| {
          proxies
            .try_push(proxy.clone())
            .map_err(|_| Error::<T>::TooManyProxies)
        })?;

        Self::deposit_event(Event::ProxyAssigned {
          owner: who,
          proxy,
          from_pool,
        });

        Ok(())
      })
    }

    /// Pre-create `count` proxies owned by the controller and park them in
    /// the pool.
    ///
    /// If any creation in the batch fails, the whole batch rolls back and
    /// the pool size is unchanged.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::add_to_pool())]
    pub fn add_to_pool(origin: OriginFor<T>, count: u32) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;

      ensure!(count > 0, Error::<T>::ZeroCount);
      ensure!(count <= T::MaxPoolTopUp::get(), Error::<T>::TopUpTooLarge);

      let controller = Self::account_id();

      // A failure anywhere in the batch discards the whole batch: the pool
      // size must never over-count proxies that were not actually created.
      with_storage_layer(|| -> DispatchResult {
        ProxyPool::<T>::try_mutate(|pool| -> DispatchResult {
          for _ in 0..count {
            let proxy = T::ProxyProvider::create_proxy(&controller)
              .map_err(|_| Error::<T>::ProxyCreationFailed)?;
            pool
              .try_push(proxy)
              .map_err(|_| Error::<T>::PoolCapacityExceeded)?;
          }
          Ok(())
        })?;

        Self::deposit_event(Event::PoolToppedUp {
          count,
          pool_size: Self::pool_size(),
        });

        Ok(())
      })
    }
  }

  impl<T: Config> Pallet<T> {
    /// Get the controller's account ID (derived from PalletId)
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    /// Allocation history of `user`, oldest first. Empty for unknown users.
    pub fn proxies_of(user: &T::AccountId) -> Vec<T::AccountId> {
      UserProxies::<T>::get(user).into_inner()
    }

    /// Number of unowned proxies currently parked in the pool.
    pub fn pool_size() -> u32 {
      ProxyPool::<T>::decode_len().unwrap_or(0) as u32
    }
  }

  /// Built-in account factory: proxies are deterministic sub-accounts of the
  /// pallet, materialized with a provider reference so they survive with no
  /// balance. Ownership lives in [`ProxyOwner`] and is rewritten exactly once
  /// per allocation.
  impl<T: Config> ProxyProvider<T::AccountId> for Pallet<T> {
    fn create_proxy(initial_owner: &T::AccountId) -> Result<T::AccountId, DispatchError> {
      let index = NextProxyIndex::<T>::get();
      let next = index
        .checked_add(1)
        .ok_or(Error::<T>::ProxyCreationFailed)?;

      let proxy: T::AccountId = T::PalletId::get().into_sub_account_truncating(index);
      // A sub-account colliding with an existing proxy means the AccountId
      // type is too narrow to hold the derivation preimage.
      ensure!(
        !ProxyOwner::<T>::contains_key(&proxy),
        Error::<T>::ProxyCreationFailed
      );

      NextProxyIndex::<T>::put(next);
      frame_system::Pallet::<T>::inc_providers(&proxy);
      ProxyOwner::<T>::insert(&proxy, initial_owner);

      Ok(proxy)
    }

    fn transfer_ownership(proxy: &T::AccountId, new_owner: &T::AccountId) -> DispatchResult {
      ProxyOwner::<T>::try_mutate(proxy, |owner| match owner {
        Some(current) => {
          *current = new_owner.clone();
          Ok(())
        }
        None => Err(Error::<T>::UnknownProxy.into()),
      })
    }
  }

  /// Genesis configuration ensuring the controller account is ED-free
  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    #[serde(skip)]
    pub _marker: core::marker::PhantomData<T>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      // Controller account survives zero native balance via provider reference
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
    }
  }
}
