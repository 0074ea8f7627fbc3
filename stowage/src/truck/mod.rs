mod optimizer;
mod stack;

#[doc(inline)]
pub use optimizer::optimize;
#[doc(inline)]
pub use optimizer::optimize_with_budget;
#[doc(inline)]
pub use stack::TruckStack;
