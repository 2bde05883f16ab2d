/// Polynomial base; one step per byte value.
pub(crate) const BASE: u64 = 256;
/// Large prime modulus. BASE * (MOD - 1) stays below 2^63, so every
/// intermediate product fits in `u64` without overflow.
pub(crate) const MOD: u64 = 1_000_000_007;

/// Rolling polynomial hash over a fixed-width byte window.
///
/// The hash of window `w` is `sum(w[i] * BASE^(m-1-i)) mod MOD`. Sliding the
/// window drops the outgoing byte via the precomputed `BASE^(m-1)` weight and
/// appends the incoming byte in O(1).
#[derive(Clone, Copy, Debug)]
pub struct RollingHash {
    hash: u64,
    /// `BASE^(m-1) mod MOD`, the weight of the window's first byte.
    top_weight: u64,
}

impl RollingHash {
    /// Seed the hash from the initial window contents.
    pub fn new(window: &[u8]) -> Self {
        let mut hash = 0u64;
        let mut top_weight = 1u64;
        for (i, &byte) in window.iter().enumerate() {
            if i < window.len() - 1 {
                top_weight = (top_weight * BASE) % MOD;
            }
            hash = (hash * BASE + byte as u64) % MOD;
        }
        Self { hash, top_weight }
    }

    /// Current window hash.
    #[inline]
    pub fn value(&self) -> u64 {
        self.hash
    }

    /// Slide the window one byte: drop `outgoing`, append `incoming`.
    #[inline]
    pub fn roll(&mut self, outgoing: u8, incoming: u8) {
        let dropped = (outgoing as u64 * self.top_weight) % MOD;
        self.hash = (MOD + self.hash - dropped) % MOD;
        self.hash = (self.hash * BASE + incoming as u64) % MOD;
    }
}
