use anyhow::Result;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::entities::StorageBin;

/// Status of a package after a state-changing warehouse action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageStatus {
    /// Stored in a bin by the allocator
    Stored,
    /// Loaded onto the truck
    Loaded,
    /// Removed from the truck by an undo
    Removed,
}

/// Log entry emitted for every state-changing action. The core only emits
/// these; retaining them is the event sink's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentEvent {
    pub tracking_id: String,
    /// Bin involved, `None` for truck actions
    pub bin_id: Option<u64>,
    pub status: PackageStatus,
    pub timestamp: Timestamp,
}

/// Supplies the full bin set at inventory load time.
pub trait BinSource {
    fn fetch_bins(&self) -> Result<Vec<StorageBin>>;
}

/// Accepts a bin's new usage after every successful allocation, for durable
/// persistence.
pub trait UsageSink {
    fn record_usage(&mut self, bin_id: u64, new_usage: u64) -> Result<()>;
}

/// Accepts a [`ShipmentEvent`] for every state-changing action. Failures
/// are logged and swallowed by the caller, never propagated: the in-memory
/// mutation that triggered the event has already happened.
pub trait EventSink {
    fn record(&mut self, event: ShipmentEvent) -> Result<()>;
}

impl BinSource for Vec<StorageBin> {
    fn fetch_bins(&self) -> Result<Vec<StorageBin>> {
        Ok(self.clone())
    }
}

/// In-memory usage + event log. Stands in for a durable store in the
/// reference binary and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryLog {
    /// (bin id, new usage) pairs in the order they were reported
    pub usages: Vec<(u64, u64)>,
    pub events: Vec<ShipmentEvent>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UsageSink for MemoryLog {
    fn record_usage(&mut self, bin_id: u64, new_usage: u64) -> Result<()> {
        self.usages.push((bin_id, new_usage));
        Ok(())
    }
}

impl EventSink for MemoryLog {
    fn record(&mut self, event: ShipmentEvent) -> Result<()> {
        self.events.push(event);
        Ok(())
    }
}
