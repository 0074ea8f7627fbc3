use serde::{Deserialize, Serialize};
use stowage::io::ext_repr::ExtInstance;
use stowage::io::sinks::ShipmentEvent;

use crate::config::BFAConfig;

/// Full report of a warehouse run
#[derive(Serialize, Deserialize, Clone)]
pub struct BFAOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    /// Per-package allocation outcome, in conveyor arrival order
    pub allocations: Vec<ExtAllocation>,
    /// Tracking ids of the packages on the truck, bottom to top
    pub truck_manifest: Vec<String>,
    /// Total size loaded on the truck
    pub truck_load_total: u64,
    /// Shipment log of the run
    pub events: Vec<ShipmentEvent>,
    pub config: BFAConfig,
    pub run_time_ms: u64,
}

/// Outcome of one conveyor package
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtAllocation {
    pub tracking_id: String,
    /// Bin the package was stored in, `None` if it was rejected
    pub bin_id: Option<u64>,
    pub stored: bool,
}
