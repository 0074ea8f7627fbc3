use serde::{Deserialize, Serialize};

/// Warehouse instance: the bin inventory plus the inbound and outbound work.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Full bin inventory
    pub bins: Vec<ExtBin>,
    /// Packages arriving on the conveyor, in arrival order
    #[serde(default)]
    pub conveyor: Vec<ExtPackage>,
    /// Outbound truck to be filled, if any
    #[serde(default)]
    pub truck: Option<ExtTruck>,
}

/// Storage bin as provided by the bin source
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtBin {
    pub bin_id: u64,
    pub capacity: u64,
    /// Space already in use when the inventory is loaded
    #[serde(default)]
    pub current_usage: u64,
    pub location: String,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPackage {
    pub tracking_id: String,
    pub size: u64,
    pub destination: String,
}

/// Truck with a capacity limit and its candidate cargo
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtTruck {
    pub capacity: u64,
    pub candidates: Vec<ExtPackage>,
}
