//! Partitioning of items across categories.

use rand::Rng;

/// Split `total` items into `buckets` bucket sizes.
///
/// Every bucket starts at `total / buckets`. The remainder is then handed
/// out one item at a time to a uniformly chosen bucket, with replacement,
/// so a bucket may receive several extra items while another receives
/// none. Sizes are only approximately balanced.
///
/// Returns an empty vector when `buckets` is zero.
pub fn distribute<R: Rng>(rng: &mut R, total: u64, buckets: u64) -> Vec<u64> {
    if buckets == 0 {
        return Vec::new();
    }

    let base = total / buckets;
    let remainder = total - base * buckets;
    let mut sizes = vec![base; buckets as usize];

    for _ in 0..remainder {
        let bucket = rng.random_range(0..sizes.len());
        sizes[bucket] += 1;
    }

    sizes
}
