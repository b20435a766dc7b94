use log::debug;
use rust_decimal::Decimal;

use super::will_model::{
    Ancestor, ExecutorSummary, FinalMessage, ShareTiming, WillDocument, WillInheritance,
};
use crate::allocation::{AllocationMapping, AssetAllocation};
use crate::catalog::{AssetCatalog, AssetCategory, CatalogAsset};
use crate::errors::{Error, Result, ValidationError};
use crate::executors::Executor;

const DETAIL_SEPARATOR: &str = " - ";

impl WillDocument {
    /// Builds the will from the catalog and the published allocation.
    ///
    /// Assets are listed in catalog order. Every asset with an allocation
    /// entry is included, even one whose inheritors were all removed; assets
    /// never allocated are left out. Fails if the mapping names an asset the
    /// catalog does not know.
    pub fn assemble(
        catalog: &AssetCatalog,
        mapping: &AllocationMapping,
        executors: &[Executor],
        final_messages: Vec<FinalMessage>,
        share_timing: Option<ShareTiming>,
    ) -> Result<Self> {
        if let Some(unknown) = mapping.keys().find(|id| catalog.find(id).is_none()) {
            return Err(Error::NotFound(format!(
                "Allocated asset {} is not in the catalog",
                unknown
            )));
        }

        let inheritances: Vec<WillInheritance> = catalog
            .iter()
            .filter_map(|(category, asset)| {
                mapping
                    .get(&asset.id)
                    .map(|allocation| Self::inheritance_for(category, asset, allocation))
            })
            .collect();

        let executors = executors
            .iter()
            .map(|executor| ExecutorSummary {
                name: executor.name.clone(),
                relation: executor.relation.clone(),
                priority: executor.priority,
            })
            .collect();

        debug!(
            "Assembled will with {} inheritances and {} messages",
            inheritances.len(),
            final_messages.len()
        );

        Ok(Self {
            inheritances,
            executors,
            final_messages,
            share_at: share_timing.map(ShareTiming::code),
            created_at: chrono::Utc::now(),
        })
    }

    /// Sum of the values of every asset in the will.
    pub fn total_amount(&self) -> Decimal {
        self.inheritances.iter().map(|i| i.amount).sum()
    }

    /// Serializes the document for the submission layer.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Checks that every executor has a name, the one field the will cannot
    /// go out without.
    pub fn validate_executors(&self) -> Result<()> {
        match self.executors.iter().find(|e| e.name.trim().is_empty()) {
            Some(executor) => Err(Error::Validation(ValidationError::MissingField(format!(
                "executors[{}].name",
                executor.priority
            )))),
            None => Ok(()),
        }
    }

    fn inheritance_for(
        category: AssetCategory,
        asset: &CatalogAsset,
        allocation: &AssetAllocation,
    ) -> WillInheritance {
        let detail = asset.detail.as_deref();
        let mut detail_parts = detail.map(|d| d.split(DETAIL_SEPARATOR)).into_iter().flatten();
        let institution = detail_parts.next();
        let account = detail_parts.next();

        let financial_institution = match category {
            AssetCategory::Finance => institution.map(str::to_string),
            _ => None,
        };
        let name = asset
            .address
            .as_deref()
            .filter(|a| !a.is_empty())
            .or(account.filter(|a| !a.is_empty()))
            .or(detail.filter(|d| !d.is_empty()))
            .map(str::to_string);

        WillInheritance {
            category,
            sub_type: asset.asset_type.clone(),
            financial_institution,
            asset: name,
            amount: asset.value,
            ancestors: allocation
                .inheritors
                .iter()
                .map(|inheritor| Ancestor {
                    name: inheritor.name.clone(),
                    relation: inheritor.relation.clone(),
                    ratio: inheritor.ratio,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::allocation::{AllocationStore, AllocationStoreTrait};
    use crate::events::NoOpDomainEventSink;
    use rust_decimal_macros::dec;

    fn catalog() -> AssetCatalog {
        AssetCatalog {
            real_estate: vec![CatalogAsset {
                id: "re-1".to_string(),
                asset_type: "apartment".to_string(),
                detail: None,
                address: Some("12 River Rd".to_string()),
                value: dec!(500000000),
            }],
            finance: vec![
                CatalogAsset {
                    id: "fin-1".to_string(),
                    asset_type: "savings".to_string(),
                    detail: Some("First Bank - 110-222-333".to_string()),
                    address: None,
                    value: dec!(30000000),
                },
                CatalogAsset {
                    id: "fin-2".to_string(),
                    asset_type: "stocks".to_string(),
                    detail: Some("Broker".to_string()),
                    address: None,
                    value: dec!(1000),
                },
            ],
            others: vec![CatalogAsset {
                id: "etc-1".to_string(),
                asset_type: "car".to_string(),
                detail: Some("Sedan".to_string()),
                address: None,
                value: dec!(20000000),
            }],
        }
    }

    fn allocated_store() -> AllocationStore {
        let mut store = AllocationStore::new(Arc::new(NoOpDomainEventSink));
        let a = store.add_inheritor("fin-1", "Kim", "spouse");
        store.set_ratio("fin-1", &a, dec!(70).into(), false);
        store.add_inheritor("fin-1", "Lee", "children");
        store.add_inheritor("re-1", "Kim", "spouse");
        let c = store.add_inheritor("etc-1", "Park", "children");
        store.delete_inheritor("etc-1", &c);
        store
    }

    #[test]
    fn test_assemble_orders_by_catalog_and_skips_unallocated() {
        let store = allocated_store();
        let will = WillDocument::assemble(
            &catalog(),
            store.mapping(),
            &[Executor {
                name: "Choi".to_string(),
                relation: "legalHeirs".to_string(),
                phone_number: "010-1234-5678".to_string(),
                priority: 1,
            }],
            vec![],
            Some(ShareTiming::Death),
        )
        .unwrap();

        let subtypes: Vec<&str> = will.inheritances.iter().map(|i| i.sub_type.as_str()).collect();
        assert_eq!(subtypes, vec!["apartment", "savings", "car"]);
        assert_eq!(will.share_at, Some(2));
        assert_eq!(will.executors[0].name, "Choi");
        assert_eq!(will.total_amount(), dec!(550000000));
    }

    #[test]
    fn test_assemble_derives_asset_names() {
        let will =
            WillDocument::assemble(&catalog(), allocated_store().mapping(), &[], vec![], None)
                .unwrap();

        let real_estate = &will.inheritances[0];
        assert_eq!(real_estate.category, AssetCategory::RealEstate);
        assert_eq!(real_estate.asset.as_deref(), Some("12 River Rd"));
        assert_eq!(real_estate.financial_institution, None);

        let savings = &will.inheritances[1];
        assert_eq!(savings.financial_institution.as_deref(), Some("First Bank"));
        assert_eq!(savings.asset.as_deref(), Some("110-222-333"));
        assert_eq!(
            savings.ancestors,
            vec![
                Ancestor {
                    name: "Kim".to_string(),
                    relation: "spouse".to_string(),
                    ratio: dec!(70),
                },
                Ancestor {
                    name: "Lee".to_string(),
                    relation: "children".to_string(),
                    ratio: dec!(30),
                },
            ]
        );

        let car = &will.inheritances[2];
        assert_eq!(car.asset.as_deref(), Some("Sedan"));
        assert_eq!(car.financial_institution, None);
        assert!(car.ancestors.is_empty());
        assert_eq!(will.share_at, None);
    }

    #[test]
    fn test_assemble_rejects_unknown_asset() {
        let mut store = AllocationStore::new(Arc::new(NoOpDomainEventSink));
        store.add_inheritor("ghost", "Kim", "spouse");

        let result = WillDocument::assemble(&catalog(), store.mapping(), &[], vec![], None);
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_validate_executors_requires_names() {
        let will = WillDocument::assemble(
            &catalog(),
            &AllocationMapping::new(),
            &[Executor::blank(1)],
            vec![],
            None,
        )
        .unwrap();
        assert!(matches!(
            will.validate_executors(),
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[test]
    fn test_document_json_shape() {
        let will = WillDocument::assemble(
            &catalog(),
            allocated_store().mapping(),
            &[],
            vec![FinalMessage {
                name: "Lee".to_string(),
                relation: "children".to_string(),
                message: "Take care of each other".to_string(),
            }],
            Some(ShareTiming::Anytime),
        )
        .unwrap();

        let json: serde_json::Value = serde_json::from_str(&will.to_json().unwrap()).unwrap();
        assert_eq!(json["shareAt"], 0);
        assert_eq!(json["inheritances"][0]["type"], "realEstate");
        assert_eq!(json["inheritances"][1]["financialInstitution"], "First Bank");
        assert_eq!(json["finalMessages"][0]["message"], "Take care of each other");
    }
}
