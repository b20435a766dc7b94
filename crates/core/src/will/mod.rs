//! Will module - assembles the finished allocation into a will document.

mod will_builder;
mod will_model;

pub use will_model::{
    Ancestor, ExecutorSummary, FinalMessage, ShareTiming, WillDocument, WillInheritance,
};
