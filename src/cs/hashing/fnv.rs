//! # FNV Hash
//!
//! The FNV (Fowler–Noll–Vo) hash used to place keys in the word table. FNV is a simple,
//! fast non-cryptographic hash: every byte of the key is folded into a running 64-bit
//! accumulator with an exclusive-or and a multiplication by a fixed prime, starting from a
//! fixed offset basis.
//!
//! **Note**: FNV is not collision resistant. The table resolves collisions itself, so the
//! only requirement here is that equal byte strings always hash equally.
//!
//! ## Usage
//! - [`fnv1a_hash`] / [`fnv1_hash`] for one-shot hashing of a byte slice.
//! - [`FnvBuildHasher`] plugs the same function into anything generic over
//!   `std::hash::BuildHasher`, including [`Table`](super::open_addressing::Table).
//!
//! ```rust
//! use freq::cs::hashing::fnv::{fnv1a_hash, FnvBuildHasher};
//! use std::hash::{BuildHasher, Hasher};
//!
//! let mut hasher = FnvBuildHasher::default().build_hasher();
//! hasher.write(b"word");
//! assert_eq!(hasher.finish(), fnv1a_hash(b"word"));
//! ```

use std::hash::{BuildHasher, Hasher};

/// Offset basis for 64-bit FNV.
pub const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
/// Prime for 64-bit FNV.
pub const FNV_PRIME: u64 = 0x100000001b3;

/// Which FNV variant: FNV-1 or FNV-1a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FnvVariant {
    /// FNV-1: multiply, then xor.
    Fnv1,
    /// FNV-1a: xor, then multiply. Better avalanche on short keys.
    #[default]
    Fnv1a,
}

impl FnvVariant {
    fn fold(self, mut state: u64, data: &[u8]) -> u64 {
        match self {
            FnvVariant::Fnv1 => {
                for &b in data {
                    state = state.wrapping_mul(FNV_PRIME);
                    state ^= b as u64;
                }
            }
            FnvVariant::Fnv1a => {
                for &b in data {
                    state ^= b as u64;
                    state = state.wrapping_mul(FNV_PRIME);
                }
            }
        }
        state
    }
}

/// The `BuildHasher` handing out [`FnvHasher`]s of one variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct FnvBuildHasher {
    variant: FnvVariant,
}

impl FnvBuildHasher {
    /// Creates a build hasher for the given variant.
    pub fn new(variant: FnvVariant) -> Self {
        Self { variant }
    }

    /// The variant produced hashers use.
    pub fn variant(&self) -> FnvVariant {
        self.variant
    }
}

impl BuildHasher for FnvBuildHasher {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> Self::Hasher {
        FnvHasher {
            state: FNV_OFFSET_BASIS,
            variant: self.variant,
        }
    }
}

/// Streaming FNV state implementing `std::hash::Hasher`.
///
/// Successive `write` calls hash exactly like one call on the concatenated bytes.
#[derive(Debug, Clone)]
pub struct FnvHasher {
    state: u64,
    variant: FnvVariant,
}

impl Default for FnvHasher {
    fn default() -> Self {
        FnvBuildHasher::default().build_hasher()
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        self.state = self.variant.fold(self.state, bytes);
    }
}

/// Returns the 64-bit FNV-1a hash of `data`.
pub fn fnv1a_hash(data: &[u8]) -> u64 {
    FnvVariant::Fnv1a.fold(FNV_OFFSET_BASIS, data)
}

/// Returns the 64-bit FNV-1 hash of `data`.
pub fn fnv1_hash(data: &[u8]) -> u64 {
    FnvVariant::Fnv1.fold(FNV_OFFSET_BASIS, data)
}
