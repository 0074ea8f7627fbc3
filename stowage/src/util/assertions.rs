use itertools::Itertools;

use crate::registry::BinRegistry;

/// The registry's iteration order is (capacity, bin id) ascending.
pub fn registry_order_correct(registry: &BinRegistry) -> bool {
    registry
        .iter_by_capacity()
        .tuple_windows()
        .all(|(a, b)| (a.capacity, a.id) <= (b.capacity, b.id))
}

/// No bin's used space exceeds its capacity.
pub fn registry_usage_within_capacity(registry: &BinRegistry) -> bool {
    registry.iter_by_capacity().all(|b| b.used <= b.capacity)
}
