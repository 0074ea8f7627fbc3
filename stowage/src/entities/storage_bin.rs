use crate::errors::AllocError;

/// Capability of any unit of storage: claim space and report what remains.
/// [`StorageBin`] is the only variant today; the trait leaves room for
/// future variants without an inheritance chain.
pub trait StorageUnit {
    /// Claims `amount` units of space, failing with
    /// [`AllocError::CapacityExceeded`] if the unit cannot hold them.
    fn occupy_space(&mut self, amount: u64) -> Result<(), AllocError>;

    /// Space still available in this unit.
    fn available_space(&self) -> u64;
}

/// A storage location with fixed capacity and mutable used space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageBin {
    pub id: u64,
    /// Total capacity, immutable for the lifetime of the bin
    pub capacity: u64,
    /// Space currently claimed by stored packages, `used <= capacity` always
    pub used: u64,
    /// Opaque physical location label (e.g. an aisle/shelf code)
    pub location: String,
}

impl StorageBin {
    pub fn new(id: u64, capacity: u64, used: u64, location: String) -> Self {
        assert!(capacity > 0, "bin {id} must have positive capacity");
        assert!(
            used <= capacity,
            "bin {id} usage ({used}) exceeds capacity ({capacity})"
        );
        Self {
            id,
            capacity,
            used,
            location,
        }
    }
}

impl StorageUnit for StorageBin {
    fn occupy_space(&mut self, amount: u64) -> Result<(), AllocError> {
        // equivalent to `used + amount > capacity` since `used <= capacity`,
        // but cannot wrap for any `amount`
        if amount > self.available_space() {
            return Err(AllocError::CapacityExceeded {
                bin_id: self.id,
                amount,
            });
        }
        self.used += amount;
        Ok(())
    }

    fn available_space(&self) -> u64 {
        self.capacity - self.used
    }
}
