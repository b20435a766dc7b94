//! Asset catalog - the read-only list of assets being divided.

mod catalog_model;

pub use catalog_model::{AssetCatalog, AssetCategory, CatalogAsset};
