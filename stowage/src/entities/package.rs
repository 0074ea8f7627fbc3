/// A package moving through the warehouse. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Unique within a run
    pub tracking_id: String,
    pub size: u64,
    /// Destination label, carried through untouched by the allocation logic
    pub destination: String,
}

impl Package {
    pub fn new(tracking_id: String, size: u64, destination: String) -> Self {
        assert!(size > 0, "package {tracking_id} must have positive size");
        Self {
            tracking_id,
            size,
            destination,
        }
    }
}
