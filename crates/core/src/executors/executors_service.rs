use std::sync::Arc;

use log::debug;

use super::executors_model::{format_phone_number, Executor};
use crate::errors::{Error, Result};
use crate::events::{DomainEvent, DomainEventSink};

/// Ordered executor roster. Always holds at least one executor, and
/// priorities always read `1..=n` in list order after a reorder.
pub struct ExecutorRoster {
    executors: Vec<Executor>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl ExecutorRoster {
    /// Starts with a single blank executor.
    pub fn new(event_sink: Arc<dyn DomainEventSink>) -> Self {
        Self {
            executors: vec![Executor::blank(1)],
            event_sink,
        }
    }

    /// Resumes from a previously published roster; an empty one starts over
    /// with a single blank executor.
    pub fn from_executors(executors: Vec<Executor>, event_sink: Arc<dyn DomainEventSink>) -> Self {
        if executors.is_empty() {
            return Self::new(event_sink);
        }
        Self {
            executors,
            event_sink,
        }
    }

    pub fn executors(&self) -> &[Executor] {
        &self.executors
    }

    pub fn len(&self) -> usize {
        self.executors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executors.is_empty()
    }

    /// Appends a blank executor ranked after the current last one.
    pub fn add(&mut self) {
        let priority = self.executors.len() as u32 + 1;
        self.executors.push(Executor::blank(priority));
        debug!("Added executor with priority {}", priority);
        self.publish();
    }

    /// Removes the last executor. The first one can never be removed.
    pub fn remove_last(&mut self) -> Result<()> {
        if self.executors.len() <= 1 {
            return Err(Error::ConstraintViolation(
                "The first executor cannot be removed".to_string(),
            ));
        }
        self.executors.pop();
        debug!("Removed last executor, {} remain", self.executors.len());
        self.publish();
        Ok(())
    }

    /// Swaps the executor at `index` with the one above it.
    pub fn move_up(&mut self, index: usize) {
        if index == 0 || index >= self.executors.len() {
            return;
        }
        self.executors.swap(index, index - 1);
        self.renumber();
        self.publish();
    }

    /// Swaps the executor at `index` with the one below it.
    pub fn move_down(&mut self, index: usize) {
        if index >= self.executors.len().saturating_sub(1) {
            return;
        }
        self.executors.swap(index, index + 1);
        self.renumber();
        self.publish();
    }

    pub fn set_name(&mut self, index: usize, name: &str) -> Result<()> {
        self.executor_mut(index)?.name = name.to_string();
        self.publish();
        Ok(())
    }

    pub fn set_relation(&mut self, index: usize, relation: &str) -> Result<()> {
        self.executor_mut(index)?.relation = relation.to_string();
        self.publish();
        Ok(())
    }

    /// Stores the phone number in `ddd-dddd-dddd` form.
    pub fn set_phone_number(&mut self, index: usize, raw: &str) -> Result<()> {
        self.executor_mut(index)?.phone_number = format_phone_number(raw);
        self.publish();
        Ok(())
    }

    fn executor_mut(&mut self, index: usize) -> Result<&mut Executor> {
        let len = self.executors.len();
        self.executors.get_mut(index).ok_or_else(|| {
            Error::NotFound(format!("Executor #{} (roster has {})", index, len))
        })
    }

    fn renumber(&mut self) {
        for (i, executor) in self.executors.iter_mut().enumerate() {
            executor.priority = i as u32 + 1;
        }
    }

    fn publish(&self) {
        self.event_sink
            .emit(DomainEvent::executors_changed(self.executors.clone()));
    }
}
