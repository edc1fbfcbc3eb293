//! Process-global uniform value source.
//!
//! Every freshly constructed sequence draws its contents from one shared
//! generator, read sequentially under a lock. The stream is seeded from OS
//! entropy on first use; [`reseed`] makes it reproducible.

use std::sync::LazyLock;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Exclusive upper bound of generated values. The lower bound is `0`.
pub const VALUE_UPPER_BOUND: i32 = 100;

static SOURCE: LazyLock<Mutex<StdRng>> = LazyLock::new(|| Mutex::new(StdRng::from_entropy()));

/// Replace the global stream with one derived from `seed`.
pub fn reseed(seed: u64) {
    *SOURCE.lock() = StdRng::seed_from_u64(seed);
}

/// Draw `n` values uniformly from `[0, VALUE_UPPER_BOUND)`.
#[must_use]
pub fn sample_values(n: usize) -> Vec<i32> {
    let mut rng = SOURCE.lock();
    (0..n).map(|_| rng.gen_range(0..VALUE_UPPER_BOUND)).collect()
}

/// Fill `dst` with values drawn from `[0, VALUE_UPPER_BOUND)`.
pub fn fill_values(dst: &mut [i32]) {
    let mut rng = SOURCE.lock();
    for slot in dst.iter_mut() {
        *slot = rng.gen_range(0..VALUE_UPPER_BOUND);
    }
}
