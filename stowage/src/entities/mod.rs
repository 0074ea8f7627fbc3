mod package;
mod storage_bin;

#[doc(inline)]
pub use package::Package;
#[doc(inline)]
pub use storage_bin::StorageBin;
#[doc(inline)]
pub use storage_bin::StorageUnit;
