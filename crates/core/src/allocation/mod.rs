//! Allocation module - per-asset inheritor ratios and the store that keeps
//! each asset's ratio sum within budget.

mod allocation_model;
mod allocation_store;
mod allocation_traits;
mod ratio_input;


pub use allocation_model::{AllocationMapping, AssetAllocation, Inheritor};
pub use allocation_store::AllocationStore;
pub use allocation_traits::AllocationStoreTrait;
pub use ratio_input::{parse_ratio, RatioInput};
