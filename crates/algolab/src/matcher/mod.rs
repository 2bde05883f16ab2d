//! Rabin-Karp substring search.
//!
//! Purpose
//! - Report every occurrence of a pattern inside a text in expected
//!   O(n + m), using a rolling polynomial hash as a prefilter and an exact
//!   byte comparison as the verdict.
//!
//! Why hash-then-verify
//! - The rolling hash makes sliding the window O(1), but distinct windows
//!   can collide under the modulus. Verifying candidates byte-for-byte keeps
//!   the output exact regardless of collisions; adversarial inputs only cost
//!   time, never correctness.
//!
//! Code cross-refs: `RollingHash`, `find_all_occurrences`

mod rolling;
mod scan;

pub use rolling::RollingHash;
pub use scan::find_all_occurrences;
