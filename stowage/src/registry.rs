use itertools::Itertools;
use slotmap::{SlotMap, new_key_type};

use crate::entities::{Package, StorageBin, StorageUnit};
use crate::errors::AllocError;
use crate::util::assertions;

new_key_type! {
    /// Unique key for each [`StorageBin`] in a [`BinRegistry`]
    pub struct BinKey;
}

/// Capacity-ordered set of storage bins, queried by the best-fit allocator.
///
/// The order is built once per [`BinRegistry::load`]. Usage mutations never
/// change a bin's capacity, so the order stays valid for the whole run; this
/// is the invariant that makes the binary search below sound without
/// re-sorting.
#[derive(Debug, Clone, Default)]
pub struct BinRegistry {
    bins: SlotMap<BinKey, StorageBin>,
    /// Keys sorted by (capacity, bin id) ascending
    order: Vec<BinKey>,
}

impl BinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the registry contents with `bins` and rebuilds the
    /// capacity order. The only operation that sorts.
    pub fn load(&mut self, bins: Vec<StorageBin>) {
        self.bins = SlotMap::with_key();
        let mut order = bins.into_iter().map(|b| self.bins.insert(b)).collect_vec();
        order.sort_by_key(|&k| (self.bins[k].capacity, self.bins[k].id));
        self.order = order;
        debug_assert!(assertions::registry_order_correct(self));
    }

    /// Finds the smallest-capacity bin that can still accommodate `pkg`:
    /// `capacity >= pkg.size` and `available_space() >= pkg.size`.
    ///
    /// Narrowing binary search over the capacity order: a midpoint bin that
    /// satisfies both predicates is recorded as the best so far and the
    /// search continues toward smaller capacities; otherwise it moves up.
    /// Availability is only checked at evaluated midpoints, it is not
    /// monotonic in capacity. When several bins share the minimal
    /// qualifying capacity, the one the narrowing encounters first wins.
    pub fn best_fit(&self, pkg: &Package) -> Option<BinKey> {
        let mut best = None;
        let (mut low, mut high) = (0isize, self.order.len() as isize - 1);

        while low <= high {
            let mid = ((low + high) / 2) as usize;
            let bin = &self.bins[self.order[mid]];

            // the bin must fit the size AND have space remaining
            if bin.capacity >= pkg.size && bin.available_space() >= pkg.size {
                best = Some(self.order[mid]);
                high = mid as isize - 1; // try to find a smaller bin that still fits
            } else {
                low = mid as isize + 1;
            }
        }
        best
    }

    /// Claims `amount` units in the bin behind `key`, returning the new
    /// usage on success. Fails with [`AllocError::CapacityExceeded`] if the
    /// bin cannot hold them; the bin is left untouched in that case.
    pub fn occupy(&mut self, key: BinKey, amount: u64) -> Result<u64, AllocError> {
        let bin = &mut self.bins[key];
        bin.occupy_space(amount)?;
        let new_usage = bin.used;
        debug_assert!(assertions::registry_usage_within_capacity(self));
        Ok(new_usage)
    }

    pub fn bin(&self, key: BinKey) -> &StorageBin {
        &self.bins[key]
    }

    /// All bins, in capacity order
    pub fn iter_by_capacity(&self) -> impl Iterator<Item = &StorageBin> {
        self.order.iter().map(|&k| &self.bins[k])
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}
