//! Seed derivation and the seeded permutation used to order graders.
//!
//! The seed is the BLAKE3 digest of the assignment identifier. It drives a
//! ChaCha8 stream, whose output is fixed by the algorithm itself, so the same
//! identifier yields the same permutation on every machine and every run.

use blake3::Hasher;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Serialize, Serializer};
use std::fmt;

/// 256-bit seed derived from an assignment identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssignmentSeed([u8; 32]);

impl AssignmentSeed {
    /// Derive the seed for an assignment identifier
    ///
    /// Seed = BLAKE3(identifier as UTF-8). Nothing else about the run
    /// (flags, files to copy, host) feeds into it.
    pub fn derive(identifier: &str) -> Self {
        let mut hasher = Hasher::new();
        hasher.update(identifier.as_bytes());
        Self(*hasher.finalize().as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Fresh generator positioned at the start of this seed's stream
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::from_seed(self.0)
    }

    /// Permute `items` in place with Fisher-Yates over this seed's stream.
    ///
    /// Walks from the last index down, swapping each position with a uniform
    /// pick from `0..=i`. Same seed and same length always give the same
    /// permutation.
    ///
    /// Indices are drawn as `u32`: sampling `usize` would consume 64-bit
    /// words on some targets and 32-bit words on others.
    pub fn permute<T>(&self, items: &mut [T]) {
        let mut rng = self.rng();
        for i in (1..items.len()).rev() {
            let bound = u32::try_from(i).unwrap_or(u32::MAX);
            let j = rng.gen_range(0..=bound) as usize;
            items.swap(i, j);
        }
    }
}

impl fmt::Debug for AssignmentSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssignmentSeed({})", self.to_hex())
    }
}

impl fmt::Display for AssignmentSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for AssignmentSeed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
