use std::collections::VecDeque;

use crate::entities::Package;

/// FIFO queue of packages awaiting bin allocation.
/// Drained strictly in arrival order by [`Warehouse::run_conveyor`](crate::warehouse::Warehouse::run_conveyor).
#[derive(Debug, Clone, Default)]
pub struct Conveyor {
    queue: VecDeque<Package>,
}

impl Conveyor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, pkg: Package) {
        self.queue.push_back(pkg);
    }

    /// Next package in arrival order, `None` when the belt is empty.
    pub fn take(&mut self) -> Option<Package> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
