//! Allocation domain models.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named party holding a percentage share of one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inheritor {
    pub id: String,
    pub name: String,
    pub relation: String,
    /// Percentage share, 0-100
    pub ratio: Decimal,
}

/// Ordered inheritor list for a single asset.
///
/// An empty list is a valid, persistent state meaning "unallocated".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub asset_id: String,
    pub inheritors: Vec<Inheritor>,
}

impl AssetAllocation {
    pub fn new(asset_id: &str) -> Self {
        Self {
            asset_id: asset_id.to_string(),
            inheritors: Vec::new(),
        }
    }

    /// Sum of all ratios, optionally leaving one inheritor out.
    pub fn total_ratio(&self, exclude_inheritor_id: Option<&str>) -> Decimal {
        self.inheritors
            .iter()
            .filter(|inheritor| Some(inheritor.id.as_str()) != exclude_inheritor_id)
            .map(|inheritor| inheritor.ratio)
            .sum()
    }

    pub fn find(&self, inheritor_id: &str) -> Option<&Inheritor> {
        self.inheritors.iter().find(|i| i.id == inheritor_id)
    }

    pub fn contains(&self, inheritor_id: &str) -> bool {
        self.find(inheritor_id).is_some()
    }
}

/// Asset id -> inheritor list. The engine's entire externally visible state.
pub type AllocationMapping = BTreeMap<String, AssetAllocation>;
