use anyhow::Result;
use jiff::Timestamp;
use log::{info, warn};

use crate::conveyor::Conveyor;
use crate::entities::Package;
use crate::errors::AllocError;
use crate::io::sinks::{BinSource, EventSink, PackageStatus, ShipmentEvent, UsageSink};
use crate::registry::BinRegistry;
use crate::truck::TruckStack;

/// Result of one conveyor package passing through the allocator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocOutcome {
    Stored { tracking_id: String, bin_id: u64 },
    /// No bin qualified, or the occupy was refused. The batch continues.
    Rejected {
        tracking_id: String,
        reason: AllocError,
    },
}

/// Owns the full in-memory warehouse state: bin registry, conveyor and
/// truck stack, with the persistence collaborators injected at
/// construction. An explicitly constructed value, passed to whoever needs
/// it; there is no process-wide instance.
pub struct Warehouse<U: UsageSink, E: EventSink> {
    pub registry: BinRegistry,
    pub conveyor: Conveyor,
    pub truck: TruckStack,
    usage_sink: U,
    event_sink: E,
}

impl<U: UsageSink, E: EventSink> Warehouse<U, E> {
    pub fn new(usage_sink: U, event_sink: E) -> Self {
        Self {
            registry: BinRegistry::new(),
            conveyor: Conveyor::new(),
            truck: TruckStack::new(),
            usage_sink,
            event_sink,
        }
    }

    /// Replaces the bin inventory with the full set provided by `source`.
    pub fn load_inventory(&mut self, source: &impl BinSource) -> Result<()> {
        let bins = source.fetch_bins()?;
        info!("[WH] loading inventory: {} bins", bins.len());
        self.registry.load(bins);
        Ok(())
    }

    pub fn add_to_conveyor(&mut self, pkg: Package) {
        self.conveyor.put(pkg);
    }

    /// Drains the conveyor strictly in arrival order, allocating each
    /// package to its best-fit bin. A package that cannot be placed is
    /// reported and skipped; it never aborts the batch.
    pub fn run_conveyor(&mut self) -> Vec<AllocOutcome> {
        info!("[WH] processing {} conveyor packages", self.conveyor.len());

        let mut outcomes = Vec::with_capacity(self.conveyor.len());
        while let Some(pkg) = self.conveyor.take() {
            let outcome = self.store_package(&pkg);
            match &outcome {
                AllocOutcome::Stored {
                    tracking_id,
                    bin_id,
                } => {
                    info!("[WH] stored {tracking_id} (size {}) in bin {bin_id}", pkg.size)
                }
                AllocOutcome::Rejected {
                    tracking_id,
                    reason,
                } => warn!("[WH] rejected {tracking_id} (size {}): {reason}", pkg.size),
            }
            outcomes.push(outcome);
        }
        outcomes
    }

    fn store_package(&mut self, pkg: &Package) -> AllocOutcome {
        let Some(key) = self.registry.best_fit(pkg) else {
            return AllocOutcome::Rejected {
                tracking_id: pkg.tracking_id.clone(),
                reason: AllocError::NoSuitableBin {
                    tracking_id: pkg.tracking_id.clone(),
                },
            };
        };

        match self.registry.occupy(key, pkg.size) {
            Ok(new_usage) => {
                let bin_id = self.registry.bin(key).id;
                if let Err(e) = self.usage_sink.record_usage(bin_id, new_usage) {
                    warn!("[WH] usage sink failed for bin {bin_id}: {e}");
                }
                self.emit_event(&pkg.tracking_id, Some(bin_id), PackageStatus::Stored);
                AllocOutcome::Stored {
                    tracking_id: pkg.tracking_id.clone(),
                    bin_id,
                }
            }
            // cannot happen if best_fit's predicate holds, checked defensively
            Err(reason) => AllocOutcome::Rejected {
                tracking_id: pkg.tracking_id.clone(),
                reason,
            },
        }
    }

    /// Loads a package onto the truck and emits a `LOADED` event.
    pub fn load_truck(&mut self, pkg: Package) {
        info!("[WH] loaded {} onto truck", pkg.tracking_id);
        self.emit_event(&pkg.tracking_id, None, PackageStatus::Loaded);
        self.truck.push(pkg);
    }

    /// Undoes the most recent truck load, returning the removed package.
    /// [`AllocError::EmptyStack`] if nothing is loaded; no event is emitted
    /// in that case.
    pub fn undo_last_load(&mut self) -> Result<Package, AllocError> {
        match self.truck.pop() {
            Some(pkg) => {
                info!("[WH] undo: removed {} from truck", pkg.tracking_id);
                self.emit_event(&pkg.tracking_id, None, PackageStatus::Removed);
                Ok(pkg)
            }
            None => {
                warn!("[WH] truck is empty, nothing to undo");
                Err(AllocError::EmptyStack)
            }
        }
    }

    /// Event sink failures are logged and swallowed: the in-memory action
    /// that triggered the event has already succeeded.
    fn emit_event(&mut self, tracking_id: &str, bin_id: Option<u64>, status: PackageStatus) {
        let event = ShipmentEvent {
            tracking_id: tracking_id.to_string(),
            bin_id,
            status,
            timestamp: Timestamp::now(),
        };
        if let Err(e) = self.event_sink.record(event) {
            warn!("[WH] event sink failed for {tracking_id}: {e}");
        }
    }

    pub fn usage_sink(&self) -> &U {
        &self.usage_sink
    }

    pub fn event_sink(&self) -> &E {
        &self.event_sink
    }

    /// Hands the sinks back to the caller, consuming the warehouse.
    pub fn into_sinks(self) -> (U, E) {
        (self.usage_sink, self.event_sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::StorageBin;
    use crate::io::sinks::MemoryLog;
    use anyhow::anyhow;

    fn bin(id: u64, capacity: u64, used: u64) -> StorageBin {
        StorageBin::new(id, capacity, used, format!("L{id}"))
    }

    fn pkg(id: &str, size: u64) -> Package {
        Package::new(id.into(), size, "NY".into())
    }

    fn warehouse_with(bins: Vec<StorageBin>) -> Warehouse<MemoryLog, MemoryLog> {
        let mut warehouse = Warehouse::new(MemoryLog::new(), MemoryLog::new());
        warehouse.load_inventory(&bins).unwrap();
        warehouse
    }

    #[test]
    fn conveyor_batch_stores_and_reports_per_package() {
        let mut warehouse = warehouse_with(vec![
            bin(1, 50, 0),
            bin(2, 100, 0),
            bin(3, 150, 0),
            bin(4, 200, 0),
            bin(5, 500, 0),
        ]);
        warehouse.add_to_conveyor(pkg("PKG_SMALL", 45));
        warehouse.add_to_conveyor(pkg("PKG_HUGE", 120));
        warehouse.add_to_conveyor(pkg("PKG_MID", 30));

        let outcomes = warehouse.run_conveyor();

        assert_eq!(
            outcomes,
            vec![
                AllocOutcome::Stored {
                    tracking_id: "PKG_SMALL".into(),
                    bin_id: 1
                },
                AllocOutcome::Stored {
                    tracking_id: "PKG_HUGE".into(),
                    bin_id: 3
                },
                AllocOutcome::Stored {
                    tracking_id: "PKG_MID".into(),
                    bin_id: 2
                },
            ]
        );

        let usage_log = warehouse.usage_sink();
        assert_eq!(usage_log.usages, vec![(1, 45), (3, 120), (2, 30)]);

        let statuses: Vec<_> = warehouse
            .event_sink()
            .events
            .iter()
            .map(|e| e.status)
            .collect();
        assert_eq!(statuses, vec![PackageStatus::Stored; 3]);
    }

    #[test]
    fn one_rejection_does_not_abort_the_batch() {
        let mut warehouse = warehouse_with(vec![bin(1, 100, 0)]);
        warehouse.add_to_conveyor(pkg("TOO_BIG", 300));
        warehouse.add_to_conveyor(pkg("FITS", 80));

        let outcomes = warehouse.run_conveyor();

        assert_eq!(
            outcomes[0],
            AllocOutcome::Rejected {
                tracking_id: "TOO_BIG".into(),
                reason: AllocError::NoSuitableBin {
                    tracking_id: "TOO_BIG".into()
                }
            }
        );
        assert_eq!(
            outcomes[1],
            AllocOutcome::Stored {
                tracking_id: "FITS".into(),
                bin_id: 1
            }
        );
        // no usage was persisted for the rejected package
        assert_eq!(warehouse.usage_sink().usages, vec![(1, 80)]);
    }

    #[test]
    fn truck_load_and_undo_emit_events_in_lifo_order() {
        let mut warehouse = warehouse_with(vec![]);
        warehouse.load_truck(pkg("A", 10));
        warehouse.load_truck(pkg("B", 20));
        warehouse.load_truck(pkg("C", 30));

        assert_eq!(warehouse.undo_last_load().unwrap().tracking_id, "C");
        assert_eq!(warehouse.undo_last_load().unwrap().tracking_id, "B");
        assert_eq!(warehouse.truck.loads().len(), 1);

        let events = &warehouse.event_sink().events;
        let statuses: Vec<_> = events.iter().map(|e| (e.tracking_id.as_str(), e.status)).collect();
        assert_eq!(
            statuses,
            vec![
                ("A", PackageStatus::Loaded),
                ("B", PackageStatus::Loaded),
                ("C", PackageStatus::Loaded),
                ("C", PackageStatus::Removed),
                ("B", PackageStatus::Removed),
            ]
        );
    }

    #[test]
    fn undo_on_empty_truck_reports_empty_stack() {
        let mut warehouse = warehouse_with(vec![]);
        assert_eq!(warehouse.undo_last_load().unwrap_err(), AllocError::EmptyStack);
        assert!(warehouse.event_sink().events.is_empty());
    }

    /// Event sink that always fails
    struct BrokenSink;

    impl EventSink for BrokenSink {
        fn record(&mut self, _event: ShipmentEvent) -> Result<()> {
            Err(anyhow!("log table unavailable"))
        }
    }

    #[test]
    fn event_sink_failure_never_rolls_back_the_mutation() {
        let mut warehouse = Warehouse::new(MemoryLog::new(), BrokenSink);
        warehouse.load_inventory(&vec![bin(1, 100, 0)]).unwrap();
        warehouse.add_to_conveyor(pkg("P", 40));

        let outcomes = warehouse.run_conveyor();

        assert_eq!(
            outcomes,
            vec![AllocOutcome::Stored {
                tracking_id: "P".into(),
                bin_id: 1
            }]
        );
        // usage was still persisted and the bin still mutated
        assert_eq!(warehouse.usage_sink().usages, vec![(1, 40)]);
    }
}
