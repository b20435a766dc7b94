//! Domain events module.
//!
//! Provides domain event types and the sink trait for republishing state
//! after successful mutations. The surrounding form-state layer implements
//! the sink to pick up the latest allocation mapping and executor roster.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
