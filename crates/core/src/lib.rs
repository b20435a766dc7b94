//! Inheritance Core - ratio allocation engine and will assembly.
//!
//! Assets are divided among named inheritors, each holding a percentage
//! ratio of one asset. The allocation store keeps every asset's ratio sum
//! within budget while ratios are added, edited live and removed, and
//! republishes the whole mapping after each change. The surrounding form
//! layer, page navigation and network submission are not part of this crate.

pub mod allocation;
pub mod catalog;
pub mod constants;
pub mod errors;
pub mod events;
pub mod executors;
pub mod settings;
pub mod will;

pub use allocation::{
    AllocationMapping, AllocationStore, AllocationStoreTrait, AssetAllocation, Inheritor,
    RatioInput,
};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
