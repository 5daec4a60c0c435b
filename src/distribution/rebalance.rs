//! Greedy minimum-quota rebalancing.
use tracing::debug;

use super::assignment::CategoryBucket;

/// Tops up every under-quota bucket, in order, with posts taken from the
/// end of the currently largest donor bucket.
///
/// A donor is a bucket holding more than `min_quota` posts. Donors are
/// collected once per under-quota bucket; equal-sized donors are drained in
/// bucket order. Buckets processed earlier may use up donors a later bucket
/// would have needed, and a bucket may stay below quota once donors run out.
///
/// Returns the number of posts moved.
pub(crate) fn rebalance(buckets: &mut [CategoryBucket], min_quota: usize) -> usize {
    let mut moved = 0;

    for target in 0..buckets.len() {
        if buckets[target].posts.len() >= min_quota {
            continue;
        }

        let mut donors: Vec<usize> = (0..buckets.len())
            .filter(|&index| buckets[index].posts.len() > min_quota)
            .collect();

        while buckets[target].posts.len() < min_quota && !donors.is_empty() {
            let slot = largest_donor(buckets, &donors);
            let donor = donors[slot];

            let Some(post) = buckets[donor].posts.pop() else {
                donors.remove(slot);
                continue;
            };
            buckets[target].posts.push(post);
            moved += 1;

            if buckets[donor].posts.len() <= min_quota {
                donors.remove(slot);
            }
        }

        if buckets[target].posts.len() < min_quota {
            debug!(
                category = %buckets[target].category_id,
                size = buckets[target].posts.len(),
                min_quota,
                "no donors left, category stays below quota"
            );
        }
    }

    moved
}

// First largest wins, so ties go to the earlier bucket.
fn largest_donor(buckets: &[CategoryBucket], donors: &[usize]) -> usize {
    let mut best = 0;
    for (slot, &index) in donors.iter().enumerate().skip(1) {
        if buckets[index].posts.len() > buckets[donors[best]].posts.len() {
            best = slot;
        }
    }
    best
}
