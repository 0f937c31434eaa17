//! Ecosystem constants for the proxy automation protocol.
//!
//! Centralizes system-level constants: pallet IDs for deriving pallet-owned
//! accounts, logical component names for the address lookup seam, and the
//! capacity parameters shared by runtime configurations and tests.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Balance type alias for consistency across the protocol
pub type Balance = u128;

/// Logical component names resolvable through the injected address lookup.
///
/// Runtimes map these to live accounts; tests substitute a fixed mapping.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  Ord,
  PartialEq,
  PartialOrd,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum ComponentId {
  /// The address holding collected protocol fees and granting token
  /// allowances to the refill service
  FeeSource,
  /// The automation executor whose operational account gets refilled
  Executor,
}

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// These IDs are used by Polkadot SDK's `PalletId::into_account_truncating()`
/// to deterministically generate accounts for pallet-specific operations.
pub mod pallet_ids {
  /// Proxy Registry pallet ID (proxy allocation controller)
  pub const PROXY_REGISTRY_PALLET_ID: &[u8; 8] = b"prxyreg0";

  /// Fee Receiver pallet ID (protocol fee custodian)
  pub const FEE_RECEIVER_PALLET_ID: &[u8; 8] = b"feercvr0";

  /// Bot Refill pallet ID (executor refill service)
  pub const BOT_REFILL_PALLET_ID: &[u8; 8] = b"botrfll0";
}

/// Protocol parameters shared by runtime configurations and tests.
pub mod params {
  use super::Balance;

  /// Precision scalar for balance-denominated constants (10^12).
  pub const PRECISION: Balance = 1_000_000_000_000;

  /// Amount sentinel on withdraw paths: zero means "whole current balance".
  pub const WITHDRAW_ALL: Balance = 0;

  /// Upper bound on proxies a single user can accumulate.
  pub const MAX_PROXIES_PER_USER: u32 = 64;

  /// Upper bound on pre-created proxies waiting in the pool.
  pub const MAX_POOL_SIZE: u32 = 128;

  /// Largest batch accepted by a single pool top-up.
  pub const MAX_POOL_TOP_UP: u32 = 32;
}
