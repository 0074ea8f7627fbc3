use log::debug;

use crate::entities::Package;

/// Selects the subset of `packages` whose total size is the maximum
/// achievable without exceeding `max_capacity`, preserving the input's
/// relative order in the result.
///
/// Exhaustive depth-first include-then-skip search over the input sequence.
/// Exponential in the worst case (2^n branches before the capacity cut), so
/// callers must bound the candidate list or use
/// [`optimize_with_budget`]. Deterministic: ties in total size go to the
/// subset depth-first visits first.
pub fn optimize(packages: &[Package], max_capacity: u64) -> Vec<Package> {
    optimize_with_budget(packages, max_capacity, None)
}

/// Same as [`optimize`], but stops after visiting `node_budget` nodes and
/// returns the best subset found so far. `None` means unbounded.
pub fn optimize_with_budget(
    packages: &[Package],
    max_capacity: u64,
    node_budget: Option<u64>,
) -> Vec<Package> {
    let mut best = Best {
        combo: vec![],
        total: 0,
    };
    let mut combo = Vec::with_capacity(packages.len());
    let mut nodes = NodeCounter {
        visited: 0,
        budget: node_budget,
    };
    solve(packages, max_capacity, 0, &mut combo, 0, &mut best, &mut nodes);

    debug!(
        "[TLO] explored {} nodes, best total {}/{max_capacity}",
        nodes.visited, best.total
    );

    best.combo.iter().map(|&i| packages[i].clone()).collect()
}

/// Best combination found so far, as indices into the input
struct Best {
    combo: Vec<usize>,
    total: u64,
}

struct NodeCounter {
    visited: u64,
    budget: Option<u64>,
}

impl NodeCounter {
    fn exhausted(&self) -> bool {
        self.budget.is_some_and(|b| self.visited > b)
    }
}

/// Depth-first traversal with explicit state: `combo` holds the indices of
/// the current combination, `total` their summed size. Whenever `total`
/// beats the best seen, the current combination is recorded. Inclusion of
/// the next package is only attempted while the running total stays within
/// `max_capacity`; exclusion is always available.
fn solve(
    packages: &[Package],
    max_capacity: u64,
    idx: usize,
    combo: &mut Vec<usize>,
    total: u64,
    best: &mut Best,
    nodes: &mut NodeCounter,
) {
    nodes.visited += 1;
    if nodes.exhausted() {
        return;
    }

    if total > best.total {
        best.total = total;
        best.combo = combo.clone();
    }

    if idx == packages.len() {
        return;
    }

    // take the package, if it fits
    if total + packages[idx].size <= max_capacity {
        combo.push(idx);
        solve(
            packages,
            max_capacity,
            idx + 1,
            combo,
            total + packages[idx].size,
            best,
            nodes,
        );
        combo.pop();
    }

    // skip the package
    solve(packages, max_capacity, idx + 1, combo, total, best, nodes);
}
