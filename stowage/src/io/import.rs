use anyhow::{Result, ensure};
use itertools::Itertools;

use crate::entities::{Package, StorageBin};
use crate::io::ext_repr::{ExtInstance, ExtPackage};

/// Imports the bin inventory of an instance into the library
pub fn import_bins(ext_instance: &ExtInstance) -> Result<Vec<StorageBin>> {
    ensure!(
        ext_instance.bins.iter().map(|b| b.bin_id).all_unique(),
        "All bins should have unique ids. IDs: {:?}",
        ext_instance
            .bins
            .iter()
            .map(|b| b.bin_id)
            .sorted()
            .collect_vec()
    );

    ext_instance
        .bins
        .iter()
        .map(|ext_bin| {
            ensure!(
                ext_bin.capacity > 0,
                "bin {} must have positive capacity",
                ext_bin.bin_id
            );
            ensure!(
                ext_bin.current_usage <= ext_bin.capacity,
                "bin {} usage ({}) exceeds capacity ({})",
                ext_bin.bin_id,
                ext_bin.current_usage,
                ext_bin.capacity
            );
            Ok(StorageBin::new(
                ext_bin.bin_id,
                ext_bin.capacity,
                ext_bin.current_usage,
                ext_bin.location.clone(),
            ))
        })
        .collect()
}

/// Imports a list of packages, validating tracking id uniqueness and sizes
pub fn import_packages(ext_packages: &[ExtPackage]) -> Result<Vec<Package>> {
    ensure!(
        ext_packages.iter().map(|p| &p.tracking_id).all_unique(),
        "All packages should have unique tracking ids. IDs: {:?}",
        ext_packages
            .iter()
            .map(|p| &p.tracking_id)
            .sorted()
            .collect_vec()
    );

    ext_packages
        .iter()
        .map(|ext_pkg| {
            ensure!(
                ext_pkg.size > 0,
                "package {} must have positive size",
                ext_pkg.tracking_id
            );
            Ok(Package::new(
                ext_pkg.tracking_id.clone(),
                ext_pkg.size,
                ext_pkg.destination.clone(),
            ))
        })
        .collect()
}

/// Tracking ids are unique within a run, not just within one list: a
/// package cannot be both inbound on the conveyor and a truck candidate.
pub fn ensure_unique_tracking_ids(inbound: &[Package], candidates: &[Package]) -> Result<()> {
    ensure!(
        inbound
            .iter()
            .chain(candidates)
            .map(|p| &p.tracking_id)
            .all_unique(),
        "All packages in a run should have unique tracking ids. IDs: {:?}",
        inbound
            .iter()
            .chain(candidates)
            .map(|p| &p.tracking_id)
            .sorted()
            .collect_vec()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ext_repr::ExtBin;

    #[test]
    fn duplicate_bin_ids_are_rejected() {
        let ext = ExtInstance {
            name: "dup".into(),
            bins: vec![
                ExtBin {
                    bin_id: 1,
                    capacity: 50,
                    current_usage: 0,
                    location: "A1".into(),
                },
                ExtBin {
                    bin_id: 1,
                    capacity: 100,
                    current_usage: 0,
                    location: "A2".into(),
                },
            ],
            conveyor: vec![],
            truck: None,
        };
        assert!(import_bins(&ext).is_err());
    }

    #[test]
    fn overfull_bins_are_rejected() {
        let ext = ExtInstance {
            name: "overfull".into(),
            bins: vec![ExtBin {
                bin_id: 1,
                capacity: 50,
                current_usage: 60,
                location: "A1".into(),
            }],
            conveyor: vec![],
            truck: None,
        };
        assert!(import_bins(&ext).is_err());
    }

    #[test]
    fn tracking_ids_shared_across_conveyor_and_truck_are_rejected() {
        let inbound = vec![Package::new("PKG_1".into(), 40, "NY".into())];
        let candidates = vec![
            Package::new("BOX_A".into(), 30, "CA".into()),
            Package::new("PKG_1".into(), 20, "TX".into()),
        ];
        assert!(ensure_unique_tracking_ids(&inbound, &candidates).is_err());
        assert!(ensure_unique_tracking_ids(&inbound, &candidates[..1]).is_ok());
    }

    #[test]
    fn zero_sized_packages_are_rejected() {
        let ext_packages = vec![ExtPackage {
            tracking_id: "PKG".into(),
            size: 0,
            destination: "NY".into(),
        }];
        assert!(import_packages(&ext_packages).is_err());
    }
}
