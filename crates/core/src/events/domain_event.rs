//! Domain event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::AllocationMapping;
use crate::executors::Executor;

/// Domain events emitted after successful mutations.
///
/// Allocation events carry the full post-mutation mapping so observers can
/// replace their copy wholesale and never see a partially updated asset.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum DomainEvent {
    /// An inheritor was appended to an asset's list.
    InheritorAdded {
        asset_id: String,
        inheritor_id: String,
        mapping: AllocationMapping,
    },

    /// An inheritor's ratio was replaced.
    RatioChanged {
        asset_id: String,
        inheritor_id: String,
        ratio: Decimal,
        mapping: AllocationMapping,
    },

    /// An inheritor was removed from an asset's list.
    InheritorRemoved {
        asset_id: String,
        inheritor_id: String,
        mapping: AllocationMapping,
    },

    /// The will executor roster changed.
    ExecutorsChanged { executors: Vec<Executor> },
}

impl DomainEvent {
    /// Creates an InheritorAdded event.
    pub fn inheritor_added(asset_id: &str, inheritor_id: &str, mapping: AllocationMapping) -> Self {
        Self::InheritorAdded {
            asset_id: asset_id.to_string(),
            inheritor_id: inheritor_id.to_string(),
            mapping,
        }
    }

    /// Creates a RatioChanged event.
    pub fn ratio_changed(
        asset_id: &str,
        inheritor_id: &str,
        ratio: Decimal,
        mapping: AllocationMapping,
    ) -> Self {
        Self::RatioChanged {
            asset_id: asset_id.to_string(),
            inheritor_id: inheritor_id.to_string(),
            ratio,
            mapping,
        }
    }

    /// Creates an InheritorRemoved event.
    pub fn inheritor_removed(
        asset_id: &str,
        inheritor_id: &str,
        mapping: AllocationMapping,
    ) -> Self {
        Self::InheritorRemoved {
            asset_id: asset_id.to_string(),
            inheritor_id: inheritor_id.to_string(),
            mapping,
        }
    }

    /// Creates an ExecutorsChanged event.
    pub fn executors_changed(executors: Vec<Executor>) -> Self {
        Self::ExecutorsChanged { executors }
    }

    /// The published allocation mapping, if this is an allocation event.
    pub fn mapping(&self) -> Option<&AllocationMapping> {
        match self {
            Self::InheritorAdded { mapping, .. }
            | Self::RatioChanged { mapping, .. }
            | Self::InheritorRemoved { mapping, .. } => Some(mapping),
            Self::ExecutorsChanged { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::{AssetAllocation, Inheritor};
    use rust_decimal_macros::dec;

    fn mapping_with_one_inheritor() -> AllocationMapping {
        let mut allocation = AssetAllocation::new("house-1");
        allocation.inheritors.push(Inheritor {
            id: "inh-1".to_string(),
            name: "Kim".to_string(),
            relation: "spouse".to_string(),
            ratio: dec!(100),
        });
        let mut mapping = AllocationMapping::new();
        mapping.insert("house-1".to_string(), allocation);
        mapping
    }

    #[test]
    fn test_domain_event_serialization() {
        let event = DomainEvent::inheritor_added("house-1", "inh-1", mapping_with_one_inheritor());

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("inheritor_added"));
        assert!(json.contains("\"assetId\":\"house-1\""));

        let deserialized: DomainEvent = serde_json::from_str(&json).unwrap();
        match deserialized {
            DomainEvent::InheritorAdded {
                asset_id,
                inheritor_id,
                mapping,
            } => {
                assert_eq!(asset_id, "house-1");
                assert_eq!(inheritor_id, "inh-1");
                assert_eq!(mapping["house-1"].inheritors[0].ratio, dec!(100));
            }
            _ => panic!("Expected InheritorAdded"),
        }
    }

    #[test]
    fn test_mapping_accessor() {
        let event =
            DomainEvent::ratio_changed("house-1", "inh-1", dec!(50), AllocationMapping::new());
        assert!(event.mapping().is_some());

        let event = DomainEvent::executors_changed(Vec::new());
        assert!(event.mapping().is_none());
    }
}
