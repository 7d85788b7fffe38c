//! Unique random address generation.

use std::collections::HashSet;

use rand::Rng;

use crate::mac::{MacAddress, Prefix};

/// Draws addresses under a fixed prefix.
#[derive(Debug, Clone, Copy)]
pub struct AddressPool {
    prefix: Prefix,
}

impl AddressPool {
    pub fn new(prefix: Prefix) -> Self {
        Self { prefix }
    }

    /// One candidate address with a uniformly random 3-octet suffix.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> MacAddress {
        let mut suffix = [0u8; 3];
        rng.fill_bytes(&mut suffix);
        MacAddress::from_parts(self.prefix, suffix)
    }

    /// Generate `total` pairwise-distinct addresses in acceptance order.
    ///
    /// Duplicate draws are discarded and retried with no retry cap; the
    /// 2^24 suffix space makes collisions rare for any supported `total`.
    pub fn generate<R: Rng + ?Sized>(&self, total: usize, rng: &mut R) -> Vec<MacAddress> {
        let mut seen = HashSet::with_capacity(total);
        let mut pool = Vec::with_capacity(total);
        let mut rejected = 0usize;

        while pool.len() < total {
            let candidate = self.draw(rng);
            if seen.insert(candidate) {
                pool.push(candidate);
            } else {
                rejected += 1;
                tracing::trace!(%candidate, "duplicate address drawn, retrying");
            }
        }

        tracing::debug!(prefix = %self.prefix, total, rejected, "address pool generated");
        pool
    }
}
