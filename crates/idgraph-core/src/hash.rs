//! # Identity Hashing
//!
//! A [`Hasher`] whose output is the last integer written to it.
//!
//! Payload types that already carry a unique number (such as
//! [`PlainEdge`](crate::PlainEdge), or a vertex struct hashing only its id
//! field) can plug this into [`DirectedGraph`](crate::DirectedGraph) to make
//! the derived graph id equal that number verbatim.
//!
//! Only meaningful for payloads whose `Hash` impl writes a single integer;
//! for multi-field payloads the last integer written wins, and arbitrary
//! byte slices fall back to a plain byte fold.

use std::hash::{BuildHasher, Hasher};

/// Hasher that reports the last integer written as the hash value.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityHasher(u64);

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        // Fallback for non-integer writes (str payloads, derive across
        // byte slices). Deterministic, but no longer an identity.
        for &b in bytes {
            self.0 = self.0.rotate_left(8) ^ u64::from(b);
        }
    }

    fn write_u8(&mut self, i: u8) {
        self.0 = u64::from(i);
    }

    fn write_u16(&mut self, i: u16) {
        self.0 = u64::from(i);
    }

    fn write_u32(&mut self, i: u32) {
        self.0 = u64::from(i);
    }

    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }

    fn write_u128(&mut self, i: u128) {
        self.0 = i as u64;
    }

    fn write_usize(&mut self, i: usize) {
        self.0 = i as u64;
    }
}

/// Builds [`IdentityHasher`]s; the `S` parameter of
/// [`DirectedGraph`](crate::DirectedGraph) for id-carrying payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityBuildHasher;

impl BuildHasher for IdentityBuildHasher {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> IdentityHasher {
        IdentityHasher::default()
    }
}
