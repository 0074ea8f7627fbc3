pub mod ext_repr;
mod import;
pub mod sinks;

#[doc(inline)]
pub use import::ensure_unique_tracking_ids;
#[doc(inline)]
pub use import::import_bins;
#[doc(inline)]
pub use import::import_packages;
