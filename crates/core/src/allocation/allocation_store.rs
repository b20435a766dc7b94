//! In-memory store holding every asset's inheritor list.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::{debug, trace, warn};
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use super::allocation_model::{AllocationMapping, AssetAllocation, Inheritor};
use super::allocation_traits::AllocationStoreTrait;
use super::RatioInput;
use crate::errors::{Error, Result};
use crate::events::{DomainEvent, DomainEventSink};
use crate::settings::AllocationSettings;

/// Owns the allocation mapping and keeps each asset's ratio sum within budget.
///
/// Every mutation builds the next version of the mapping, swaps it in, and
/// publishes a copy through the event sink. Observers only ever see whole
/// mappings.
pub struct AllocationStore {
    mapping: AllocationMapping,
    /// Inheritor id -> input currently shows blank because the user cleared it
    was_zero: HashMap<String, bool>,
    settings: AllocationSettings,
    event_sink: Arc<dyn DomainEventSink>,
}

impl AllocationStore {
    /// Creates an empty store with default settings.
    pub fn new(event_sink: Arc<dyn DomainEventSink>) -> Self {
        Self {
            mapping: AllocationMapping::new(),
            was_zero: HashMap::new(),
            settings: AllocationSettings::default(),
            event_sink,
        }
    }

    /// Creates an empty store with custom settings.
    pub fn with_settings(
        settings: AllocationSettings,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            ..Self::new(event_sink)
        })
    }

    /// Rehydrates a store from a previously published mapping.
    ///
    /// Each allocation's `asset_id` is taken from its key. The mapping is
    /// rejected if any ratio is negative, any asset is over budget, or an
    /// inheritor id repeats within one asset.
    pub fn restore(
        mut mapping: AllocationMapping,
        settings: AllocationSettings,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Result<Self> {
        settings.validate()?;

        for (asset_id, allocation) in mapping.iter_mut() {
            allocation.asset_id = asset_id.clone();
            Self::check_allocation(allocation, settings.ratio_budget).map_err(|e| {
                warn!("Refusing to restore allocation for {}: {}", asset_id, e);
                e
            })?;
        }

        debug!("Restored allocation mapping for {} assets", mapping.len());
        Ok(Self {
            mapping,
            was_zero: HashMap::new(),
            settings,
            event_sink,
        })
    }

    fn check_allocation(allocation: &AssetAllocation, budget: Decimal) -> Result<()> {
        let mut seen = HashSet::new();
        for inheritor in &allocation.inheritors {
            if inheritor.ratio < Decimal::ZERO {
                return Err(Error::ConstraintViolation(format!(
                    "Inheritor {} on asset {} has negative ratio {}",
                    inheritor.id, allocation.asset_id, inheritor.ratio
                )));
            }
            if inheritor.ratio > budget {
                return Err(Error::ConstraintViolation(format!(
                    "Inheritor {} on asset {} has ratio {}, above the budget of {}",
                    inheritor.id, allocation.asset_id, inheritor.ratio, budget
                )));
            }
            if !seen.insert(inheritor.id.as_str()) {
                return Err(Error::ConstraintViolation(format!(
                    "Inheritor id {} appears more than once on asset {}",
                    inheritor.id, allocation.asset_id
                )));
            }
        }

        let total = allocation
            .inheritors
            .iter()
            .try_fold(Decimal::ZERO, |sum, inheritor| sum.checked_add(inheritor.ratio));
        match total {
            Some(total) if total <= budget => Ok(()),
            Some(total) => Err(Error::ConstraintViolation(format!(
                "Ratios on asset {} sum to {}, above the budget of {}",
                allocation.asset_id, total, budget
            ))),
            None => Err(Error::ConstraintViolation(format!(
                "Ratios on asset {} overflow when summed",
                allocation.asset_id
            ))),
        }
    }

    pub fn settings(&self) -> &AllocationSettings {
        &self.settings
    }

    /// Read-only view of the current mapping.
    pub fn mapping(&self) -> &AllocationMapping {
        &self.mapping
    }

    /// Owned copy of the current mapping.
    pub fn snapshot(&self) -> AllocationMapping {
        self.mapping.clone()
    }

    pub fn allocation(&self, asset_id: &str) -> Option<&AssetAllocation> {
        self.mapping.get(asset_id)
    }

    /// Whether the inheritor's input was cleared and should display blank.
    pub fn was_zero(&self, inheritor_id: &str) -> bool {
        self.was_zero.get(inheritor_id).copied().unwrap_or(false)
    }

    /// Text a ratio input should show: blank after the user cleared it,
    /// otherwise the stored ratio.
    pub fn display_ratio(&self, asset_id: &str, inheritor_id: &str) -> Option<String> {
        let inheritor = self.allocation(asset_id)?.find(inheritor_id)?;
        if self.was_zero(inheritor_id) {
            Some(String::new())
        } else {
            Some(inheritor.ratio.to_string())
        }
    }

    /// Blur-commit path for a text field.
    ///
    /// Blank commits as zero; the typed number is normalized to commit
    /// precision and applied as a committed edit. Unparseable text is ignored.
    pub fn commit_typed_ratio(&mut self, asset_id: &str, inheritor_id: &str, raw: &str) {
        let text = if raw.is_empty() { "0" } else { raw };
        let Some(value) = super::parse_ratio(text) else {
            trace!("Ignoring unparseable ratio commit {:?} for {}", raw, inheritor_id);
            return;
        };
        let normalized = value.round_dp_with_strategy(
            self.settings.commit_scale,
            RoundingStrategy::MidpointAwayFromZero,
        );
        self.set_ratio(
            asset_id,
            inheritor_id,
            RatioInput::Text(normalized.to_string()),
            false,
        );
    }

    /// Drops every allocation and display flag.
    pub fn reset(&mut self) {
        debug!("Resetting allocation mapping ({} assets)", self.mapping.len());
        self.mapping = AllocationMapping::new();
        self.was_zero.clear();
    }

    /// Rounds `value` to `scale` places without letting it exceed `ceiling`.
    ///
    /// `value` must already be within `[0, ceiling]`.
    fn round_within(value: Decimal, scale: u32, ceiling: Decimal) -> Decimal {
        let rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
        let rounded = if rounded > ceiling {
            value.round_dp_with_strategy(scale, RoundingStrategy::ToZero)
        } else {
            rounded
        };
        rounded.normalize()
    }

    fn commit(
        &mut self,
        next: AllocationMapping,
        event: impl FnOnce(AllocationMapping) -> DomainEvent,
    ) {
        self.mapping = next;
        self.event_sink.emit(event(self.mapping.clone()));
    }
}

impl AllocationStoreTrait for AllocationStore {
    fn remaining_ratio(&self, asset_id: &str, exclude_inheritor_id: Option<&str>) -> Decimal {
        match self.mapping.get(asset_id) {
            Some(allocation) => {
                self.settings.ratio_budget - allocation.total_ratio(exclude_inheritor_id)
            }
            None => self.settings.ratio_budget,
        }
    }

    fn add_inheritor(&mut self, asset_id: &str, name: &str, relation: &str) -> String {
        let ratio = self.remaining_ratio(asset_id, None).max(Decimal::ZERO);
        let inheritor = Inheritor {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            relation: relation.to_string(),
            ratio,
        };
        let inheritor_id = inheritor.id.clone();

        let mut next = self.mapping.clone();
        next.entry(asset_id.to_string())
            .or_insert_with(|| AssetAllocation::new(asset_id))
            .inheritors
            .push(inheritor);

        debug!(
            "Added inheritor {} to asset {} with ratio {}",
            inheritor_id, asset_id, ratio
        );
        self.commit(next, |mapping| {
            DomainEvent::inheritor_added(asset_id, &inheritor_id, mapping)
        });
        inheritor_id
    }

    fn set_ratio(&mut self, asset_id: &str, inheritor_id: &str, raw: RatioInput, is_typing: bool) {
        let Some(allocation) = self.mapping.get(asset_id) else {
            trace!("Ignoring ratio edit on unknown asset {}", asset_id);
            return;
        };
        let Some(position) = allocation
            .inheritors
            .iter()
            .position(|inheritor| inheritor.id == inheritor_id)
        else {
            trace!("Ignoring ratio edit on unknown inheritor {}", inheritor_id);
            return;
        };
        let other_total = allocation.total_ratio(Some(inheritor_id));

        self.was_zero.insert(inheritor_id.to_string(), raw.is_blank());

        if raw.is_lone_minus() {
            trace!("Ignoring lone minus sign for {}", inheritor_id);
            return;
        }
        let Some(value) = raw.value() else {
            trace!("Ignoring non-numeric ratio {:?} for {}", raw, inheritor_id);
            return;
        };

        let max_possible = (self.settings.ratio_budget - other_total).max(Decimal::ZERO);
        let clamped = value.max(Decimal::ZERO).min(max_possible);
        let scale = if is_typing {
            self.settings.typing_scale
        } else {
            self.settings.commit_scale
        };
        let ratio = Self::round_within(clamped, scale, max_possible);

        let mut next = self.mapping.clone();
        if let Some(allocation) = next.get_mut(asset_id) {
            allocation.inheritors[position].ratio = ratio;
        }

        debug!(
            "Set ratio of {} on asset {} to {} (requested {}, max {}, typing {})",
            inheritor_id, asset_id, ratio, value, max_possible, is_typing
        );
        self.commit(next, |mapping| {
            DomainEvent::ratio_changed(asset_id, inheritor_id, ratio, mapping)
        });
    }

    fn delete_inheritor(&mut self, asset_id: &str, inheritor_id: &str) {
        let exists = self
            .mapping
            .get(asset_id)
            .is_some_and(|allocation| allocation.contains(inheritor_id));
        if !exists {
            trace!(
                "Inheritor {} not present on asset {}, nothing to delete",
                inheritor_id,
                asset_id
            );
            return;
        }

        let mut next = self.mapping.clone();
        if let Some(allocation) = next.get_mut(asset_id) {
            allocation.inheritors.retain(|inheritor| inheritor.id != inheritor_id);
        }
        self.was_zero.remove(inheritor_id);

        debug!("Removed inheritor {} from asset {}", inheritor_id, asset_id);
        self.commit(next, |mapping| {
            DomainEvent::inheritor_removed(asset_id, inheritor_id, mapping)
        });
    }

    fn completion_percentage(&self, asset_id: &str) -> Decimal {
        let total = self
            .mapping
            .get(asset_id)
            .map(|allocation| allocation.total_ratio(None))
            .unwrap_or(Decimal::ZERO);
        total
            .round_dp_with_strategy(
                self.settings.commit_scale,
                RoundingStrategy::MidpointAwayFromZero,
            )
            .min(self.settings.ratio_budget)
            .normalize()
    }
}
