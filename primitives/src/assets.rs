use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// This enum is the single source of truth for asset identification across the
/// protocol pallets, tying the fee receiver and the refill service to the same
/// type-safe asset handles.
///
/// - `Native`: The system's native token (managed by pallet-balances).
/// - `Local(u32)`: Fungible tokens (managed by pallet-assets).
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
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
pub enum AssetKind {
  /// Native token managed by pallet-balances
  #[default]
  Native,
  /// Fungible token managed by pallet-assets
  Local(u32),
}

impl From<u32> for AssetKind {
  fn from(asset_id: u32) -> Self {
    AssetKind::Local(asset_id)
  }
}

// Bitmask Architecture for Asset Classification
//
// 32-bit ID Structure:
// [ 4 bits: Type ] [ 28 bits: Index/ID ]
//
// Types:
// 0x1... -> Standard Tokens
// 0x2... -> Stablecoins (refill conversion sources)
// 0x3... -> Wrapped representations of the native token

pub const MASK_TYPE: u32 = 0xF000_0000;
pub const MASK_INDEX: u32 = 0x0FFF_FFFF;

pub const TYPE_STD: u32 = 0x1000_0000;
pub const TYPE_STABLE: u32 = 0x2000_0000;
pub const TYPE_WRAPPED: u32 = 0x3000_0000;

/// Helper trait to inspect AssetKind properties
pub trait AssetInspector {
  fn is_native(&self) -> bool;
  fn local_id(&self) -> Option<u32>;

  // Bitmask checks
  fn is_std(&self) -> bool;
  fn is_stable(&self) -> bool;
  fn is_wrapped(&self) -> bool;
}

impl AssetInspector for AssetKind {
  fn is_native(&self) -> bool {
    matches!(self, AssetKind::Native)
  }

  fn local_id(&self) -> Option<u32> {
    match self {
      AssetKind::Local(id) => Some(*id),
      _ => None,
    }
  }

  fn is_std(&self) -> bool {
    match self {
      AssetKind::Local(id) => (id & MASK_TYPE) == TYPE_STD,
      _ => false,
    }
  }

  fn is_stable(&self) -> bool {
    match self {
      AssetKind::Local(id) => (id & MASK_TYPE) == TYPE_STABLE,
      _ => false,
    }
  }

  fn is_wrapped(&self) -> bool {
    match self {
      AssetKind::Local(id) => (id & MASK_TYPE) == TYPE_WRAPPED,
      _ => false,
    }
  }
}

/// Helper to construct compile-time IDs
const fn make_id(type_mask: u32, index: u32) -> u32 {
  type_mask | (index & MASK_INDEX)
}

/// Well-known asset constants serving as system defaults
pub mod well_known {
  use super::*;

  // Standard Tokens (0x1...)
  pub const DOT: u32 = make_id(TYPE_STD, 1);
  pub const ETH: u32 = make_id(TYPE_STD, 2);

  // Stablecoins (0x2...)
  pub const DAI: u32 = make_id(TYPE_STABLE, 1);
  pub const USDC: u32 = make_id(TYPE_STABLE, 2);

  // Wrapped Native (0x3...)
  pub const WNATIVE: u32 = make_id(TYPE_WRAPPED, 1);
}
