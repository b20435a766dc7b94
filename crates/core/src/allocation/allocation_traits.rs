use rust_decimal::Decimal;

use super::RatioInput;

/// The sanctioned mutation surface for per-asset inheritor ratios.
///
/// None of these operations fail. Malformed input and unknown ids are
/// absorbed as no-ops, and a ratio above the remaining budget is clamped.
pub trait AllocationStoreTrait: Send + Sync {
    /// Budget left on `asset_id` once every inheritor except
    /// `exclude_inheritor_id` is counted. Unknown assets have the full budget.
    fn remaining_ratio(&self, asset_id: &str, exclude_inheritor_id: Option<&str>) -> Decimal;

    /// Appends a new inheritor holding the entire remaining budget and
    /// returns its id.
    fn add_inheritor(&mut self, asset_id: &str, name: &str, relation: &str) -> String;

    /// Replaces one inheritor's ratio, clamped to what the others leave free.
    ///
    /// `is_typing` keeps typing precision so keystrokes are not truncated;
    /// committed edits round to the commit precision.
    fn set_ratio(&mut self, asset_id: &str, inheritor_id: &str, raw: RatioInput, is_typing: bool);

    /// Removes an inheritor. Its ratio becomes free budget; the remaining
    /// inheritors keep theirs.
    fn delete_inheritor(&mut self, asset_id: &str, inheritor_id: &str);

    /// "Percent complete" for an asset: the rounded ratio sum, capped at the budget.
    fn completion_percentage(&self, asset_id: &str) -> Decimal;
}
