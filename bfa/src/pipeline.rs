use anyhow::Result;
use log::info;
use stowage::io::ext_repr::ExtInstance;
use stowage::io::sinks::MemoryLog;
use stowage::io::{ensure_unique_tracking_ids, import_bins, import_packages};
use stowage::truck;
use stowage::warehouse::{AllocOutcome, Warehouse};

use crate::EPOCH;
use crate::config::BFAConfig;
use crate::io::output::{BFAOutput, ExtAllocation};

/// Runs the full warehouse pipeline on an instance: seed the registry,
/// drain the conveyor through the best-fit allocator, then optimize and
/// load the outbound truck.
pub fn run(ext_instance: ExtInstance, config: BFAConfig) -> Result<BFAOutput> {
    let bins = import_bins(&ext_instance)?;
    let inbound = import_packages(&ext_instance.conveyor)?;

    // tracking ids must be unique across the whole run, so the truck
    // candidates are validated against the conveyor packages up front
    let truck_plan = match &ext_instance.truck {
        Some(ext_truck) => {
            let candidates = import_packages(&ext_truck.candidates)?;
            ensure_unique_tracking_ids(&inbound, &candidates)?;
            Some((ext_truck.capacity, candidates))
        }
        None => None,
    };

    let mut warehouse = Warehouse::new(MemoryLog::new(), MemoryLog::new());
    warehouse.load_inventory(&bins)?;

    for pkg in inbound {
        warehouse.add_to_conveyor(pkg);
    }
    let outcomes = warehouse.run_conveyor();

    if let Some((capacity, candidates)) = truck_plan {
        info!(
            "[BFA] optimizing truck load: {} candidates, capacity {}",
            candidates.len(),
            capacity
        );
        let load = truck::optimize_with_budget(&candidates, capacity, config.optimizer_node_budget);
        for pkg in load {
            warehouse.load_truck(pkg);
        }
    }

    let truck_load_total = warehouse.truck.loads().iter().map(|p| p.size).sum();
    let truck_manifest = warehouse
        .truck
        .loads()
        .iter()
        .map(|p| p.tracking_id.clone())
        .collect();

    let allocations = outcomes
        .iter()
        .map(|outcome| match outcome {
            AllocOutcome::Stored {
                tracking_id,
                bin_id,
            } => ExtAllocation {
                tracking_id: tracking_id.clone(),
                bin_id: Some(*bin_id),
                stored: true,
            },
            AllocOutcome::Rejected { tracking_id, .. } => ExtAllocation {
                tracking_id: tracking_id.clone(),
                bin_id: None,
                stored: false,
            },
        })
        .collect();

    let (_usage_log, event_log) = warehouse.into_sinks();

    Ok(BFAOutput {
        instance: ext_instance,
        allocations,
        truck_manifest,
        truck_load_total,
        events: event_log.events,
        config,
        run_time_ms: EPOCH.elapsed().as_millis() as u64,
    })
}
