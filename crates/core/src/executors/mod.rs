//! Executors module - the ordered roster of people who carry out the will.

mod executors_model;
mod executors_service;

pub use executors_model::{format_phone_number, Executor};
pub use executors_service::ExecutorRoster;
