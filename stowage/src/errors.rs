use thiserror::Error;

/// Errors produced by the core allocation operations.
/// None of these are fatal: every failure is local to one package or
/// operation and the batch or caller proceeds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocError {
    /// The allocator found no bin matching both the size and availability predicate
    #[error("no suitable bin for package {tracking_id}")]
    NoSuitableBin { tracking_id: String },
    /// An occupy attempt would overflow the bin
    #[error("bin {bin_id} cannot take an additional {amount} units")]
    CapacityExceeded { bin_id: u64, amount: u64 },
    /// Undo was requested with nothing loaded on the truck
    #[error("truck is empty, nothing to undo")]
    EmptyStack,
}
