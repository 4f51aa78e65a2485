//! Linear sequence partitioning.
//!
//! Splits an ordered sequence of positive weights into a fixed number of
//! contiguous groups so that the largest group sum is as small as possible.
//! The justified-row compositor uses this to decide which images share a
//! row: weights are scaled aspect ratios, so balancing group sums balances
//! row fullness.
//!
//! The implementation is the classic linear-partition dynamic program over
//! flat `(n + 1) x (k + 1)` cost and choice tables, O(n^2 * k) time. Inputs
//! are integers; the float-to-weight scaling happens at the call site, which
//! keeps the table arithmetic exact.

/// Splits `weights` into `groups` contiguous sub-sequences minimizing the
/// maximum group sum.
///
/// The returned groups preserve the original order and cover the input
/// exactly once. When several split points yield the same maximum sum, the
/// earliest split wins, so the result is deterministic for any tie pattern.
///
/// Degenerate inputs never fail: `groups == 0` yields no groups, and
/// `groups >= weights.len()` yields one group per weight.
pub fn partition(weights: &[u64], groups: usize) -> Vec<Vec<u64>> {
    if groups == 0 {
        return Vec::new();
    }

    let n = weights.len();
    if groups >= n {
        return weights.iter().map(|&weight| vec![weight]).collect();
    }

    let mut prefix = vec![0_u64; n + 1];
    for (i, &weight) in weights.iter().enumerate() {
        prefix[i + 1] = prefix[i] + weight;
    }

    // cost[i][j]: minimal achievable maximum-partial-sum over the first i
    // weights split into j groups. choice[i][j]: the x realizing it.
    let stride = groups + 1;
    let idx = |i: usize, j: usize| i * stride + j;
    let mut cost = vec![u64::MAX; (n + 1) * stride];
    let mut choice = vec![0_usize; (n + 1) * stride];

    cost[idx(0, 0)] = 0;
    for i in 1..=n {
        cost[idx(i, 1)] = prefix[i];
    }

    for j in 2..=groups {
        // Every one of the j groups must hold at least one weight.
        for i in j..=n {
            let mut best = u64::MAX;
            let mut best_split = j - 1;

            for x in (j - 1)..i {
                let candidate = cost[idx(x, j - 1)].max(prefix[i] - prefix[x]);
                if candidate < best {
                    best = candidate;
                    best_split = x;
                }
            }

            cost[idx(i, j)] = best;
            choice[idx(i, j)] = best_split;
        }
    }

    // Walk the choice table back from (n, groups) to recover boundaries.
    let mut boundaries = vec![n];
    let mut end = n;
    for j in (2..=groups).rev() {
        end = choice[idx(end, j)];
        boundaries.push(end);
    }
    boundaries.push(0);
    boundaries.reverse();

    boundaries
        .windows(2)
        .map(|bounds| weights[bounds[0]..bounds[1]].to_vec())
        .collect()
}
