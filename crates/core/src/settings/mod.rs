//! Engine settings - rounding precision and ratio budget.

mod settings_model;

pub use settings_model::AllocationSettings;
