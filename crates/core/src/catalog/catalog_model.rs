//! Asset catalog domain models.
//!
//! The catalog comes from an external collaborator. The allocation engine
//! only uses its ids as opaque keys; the will document reads the rest.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level grouping of assets, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetCategory {
    RealEstate,
    Finance,
    Others,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 3] = [
        AssetCategory::RealEstate,
        AssetCategory::Finance,
        AssetCategory::Others,
    ];
}

/// A single asset as listed by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogAsset {
    pub id: String,
    /// Kind of asset within its category (e.g. "apartment", "savings")
    #[serde(rename = "type")]
    pub asset_type: String,
    /// Free-form detail; finance assets use "<institution> - <account>"
    pub detail: Option<String>,
    /// Street address, for real estate
    pub address: Option<String>,
    /// Monetary value of the whole asset
    pub value: Decimal,
}

/// Assets grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetCatalog {
    pub real_estate: Vec<CatalogAsset>,
    pub finance: Vec<CatalogAsset>,
    pub others: Vec<CatalogAsset>,
}

impl AssetCatalog {
    pub fn assets_in(&self, category: AssetCategory) -> &[CatalogAsset] {
        match category {
            AssetCategory::RealEstate => &self.real_estate,
            AssetCategory::Finance => &self.finance,
            AssetCategory::Others => &self.others,
        }
    }

    /// Every asset with its category, real estate first, then finance, then others.
    pub fn iter(&self) -> impl Iterator<Item = (AssetCategory, &CatalogAsset)> {
        AssetCategory::ALL
            .into_iter()
            .flat_map(move |category| {
                self.assets_in(category)
                    .iter()
                    .map(move |asset| (category, asset))
            })
    }

    pub fn find(&self, asset_id: &str) -> Option<(AssetCategory, &CatalogAsset)> {
        self.iter().find(|(_, asset)| asset.id == asset_id)
    }

    pub fn len(&self) -> usize {
        self.real_estate.len() + self.finance.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn asset(id: &str) -> CatalogAsset {
        CatalogAsset {
            id: id.to_string(),
            asset_type: "apartment".to_string(),
            detail: None,
            address: None,
            value: dec!(1000),
        }
    }

    #[test]
    fn test_iter_walks_categories_in_order() {
        let catalog = AssetCatalog {
            real_estate: vec![asset("re-1"), asset("re-2")],
            finance: vec![asset("fin-1")],
            others: vec![asset("etc-1")],
        };

        let ids: Vec<(AssetCategory, &str)> = catalog
            .iter()
            .map(|(category, asset)| (category, asset.id.as_str()))
            .collect();
        assert_eq!(
            ids,
            vec![
                (AssetCategory::RealEstate, "re-1"),
                (AssetCategory::RealEstate, "re-2"),
                (AssetCategory::Finance, "fin-1"),
                (AssetCategory::Others, "etc-1"),
            ]
        );
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_find() {
        let catalog = AssetCatalog {
            finance: vec![asset("fin-1")],
            ..Default::default()
        };
        assert_eq!(
            catalog.find("fin-1").map(|(category, _)| category),
            Some(AssetCategory::Finance)
        );
        assert!(catalog.find("missing").is_none());
        assert!(AssetCatalog::default().is_empty());
    }

    #[test]
    fn test_deserialize_with_missing_categories() {
        let catalog: AssetCatalog = serde_json::from_str(
            r#"{"realEstate":[
                {"id":"re-1","type":"house","detail":null,"address":"1 Main St","value":250000}
            ]}"#,
        )
        .unwrap();
        assert_eq!(catalog.real_estate[0].asset_type, "house");
        assert_eq!(catalog.real_estate[0].value, dec!(250000));
        assert!(catalog.finance.is_empty());
    }
}
